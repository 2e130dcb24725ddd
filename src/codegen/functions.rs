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

//! Function lowering for code generation.
//!
//! This module handles:
//! - Function bodies and their trailing `return`
//! - The `main` block
//! - Call sites (`functionCall` followed by a jump to the callee)

use super::declarations::DeclarationEmitter;
use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::labels::LabelManager;
use super::tac::{BlockId, Label, Op, Quad};
use super::CodeGenerator;
use crate::ast::{Function, FunctionCall, Main};
use tracing::debug;

/// Extension trait for function lowering.
pub trait FunctionEmitter {
    /// Lower a function body into its pre-registered `entry` label.
    fn lower_function(&mut self, func: &Function, entry: &str);

    /// Lower the main block into its pre-registered `entry` label.
    fn lower_main(&mut self, main: &Main, entry: &str);

    /// Lower a call into `label`.
    fn lower_call(&mut self, call: &FunctionCall, label: &str);
}

impl FunctionEmitter for CodeGenerator {
    fn lower_function(&mut self, func: &Function, entry: &str) {
        debug!(function = %func.name, %entry, "lowering function");
        self.lower_declarations(&func.declarations, entry);
        let end: Label = self.lower_statements(&func.statements, entry);

        let operand = func
            .return_stmt
            .value
            .as_ref()
            .map(|value| self.lower_expression(value, &end))
            .unwrap_or_default();
        self.emit(&end, Quad::new(Op::Return, operand, "", ""));
    }

    fn lower_main(&mut self, main: &Main, entry: &str) {
        debug!(%entry, "lowering main");
        self.lower_declarations(&main.declarations, entry);
        self.lower_statements(&main.statements, entry);
    }

    fn lower_call(&mut self, call: &FunctionCall, label: &str) {
        let first_arg = call
            .args
            .first()
            .map(|arg| arg.name.image.clone())
            .unwrap_or_default();
        self.emit(
            label,
            Quad::new(Op::FunctionCall, call.name.image.clone(), first_arg, ""),
        );
        self.emit_goto(label, BlockId::Function(call.name.image.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstBuilder, BinaryOp, Type};

    fn block(gen: &CodeGenerator, label: &str) -> Vec<String> {
        gen.program
            .block(label)
            .map(|quads| quads.iter().map(Quad::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_return_goes_to_last_block() {
        let b = AstBuilder::new();
        let func = b.function(
            Type::Integer,
            "f",
            vec![b.param("p", Type::Integer)],
            vec![b.constant("one", Type::Integer, "1")],
            vec![b.if_else(b.boolean(true), vec![b.skip()], vec![b.skip()])],
            Some(b.binary(BinaryOp::Add, b.variable("p"), b.variable("one"))),
        );

        let mut gen = CodeGenerator::new();
        let entry = gen.label_for(BlockId::Function("f".to_string()));
        gen.lower_function(&func, &entry);
        assert!(gen.resolve_labels().is_ok());

        assert_eq!(
            block(&gen, "L1"),
            vec!["= one integer 1", "if true", "goto L2", "goto L3"]
        );
        assert_eq!(block(&gen, "L4"), vec!["+ p one t1", "return t1"]);
    }

    #[test]
    fn test_call_jumps_to_callee() {
        let b = AstBuilder::new();
        let call = b.call("f", &["a", "c"]);

        let mut gen = CodeGenerator::new();
        gen.label_for(BlockId::Function("f".to_string()));
        let from = gen.make_label();
        gen.lower_call(&call, &from);
        assert!(gen.resolve_labels().is_ok());

        assert_eq!(block(&gen, "L2"), vec!["functionCall f a", "goto L1"]);
    }

    #[test]
    fn test_main_has_no_return() {
        let b = AstBuilder::new();
        let main = b.main(vec![b.var("x", Type::Integer)], vec![b.assign("x", b.digit(1))]);

        let mut gen = CodeGenerator::new();
        let entry = gen.label_for(BlockId::Main);
        gen.lower_main(&main, &entry);

        assert_eq!(block(&gen, "L1"), vec!["= x 1"]);
    }
}
