// CCAL-IR - Semantic analysis and three-address code for the CCAL language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Assignment lowering for code generation.

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::tac::Quad;
use super::CodeGenerator;
use crate::ast::Assignment;

/// Extension trait for assignment lowering.
pub trait AssignmentEmitter {
    /// Lower `target = value` into `label`.
    ///
    /// The right-hand side is lowered first. A call stores the callee name,
    /// matching the value the analyzer records for the target.
    fn lower_assignment(&mut self, assign: &Assignment, label: &str);
}

impl AssignmentEmitter for CodeGenerator {
    fn lower_assignment(&mut self, assign: &Assignment, label: &str) {
        let operand = self.lower_expression(&assign.value, label);
        self.emit(label, Quad::copy(assign.target.image.clone(), operand));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstBuilder, BinaryOp, Statement};

    fn lowered(stmt: Statement) -> Vec<String> {
        let Statement::Assignment(assign) = stmt else {
            return vec![];
        };
        let mut gen = CodeGenerator::new();
        gen.lower_assignment(&assign, "L0");
        gen.program
            .block("L0")
            .map(|quads| quads.iter().map(Quad::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_simple_copy() {
        let b = AstBuilder::new();
        assert_eq!(lowered(b.assign("x", b.digit(5))), vec!["= x 5"]);
        assert_eq!(lowered(b.assign("x", b.negate("y"))), vec!["= x -y"]);
    }

    #[test]
    fn test_expression_result() {
        let b = AstBuilder::new();
        let stmt = b.assign(
            "x",
            b.binary(
                BinaryOp::Subtract,
                b.binary(BinaryOp::Add, b.variable("a"), b.digit(1)),
                b.variable("c"),
            ),
        );
        assert_eq!(lowered(stmt), vec!["+ a 1 t1", "- t1 c t2", "= x t2"]);
    }

    #[test]
    fn test_call_result_stores_callee() {
        let b = AstBuilder::new();
        let quads = lowered(b.assign("x", b.call_expr("f", &["a"])));
        // The goto target is patched during resolution.
        assert_eq!(quads, vec!["functionCall f a", "goto", "= x f"]);
    }
}
