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

//! Control flow lowering for code generation.
//!
//! This module handles:
//! - If/else statements (then, else and join blocks)
//! - While loops (body and exit blocks, condition re-checked at the bottom)

use super::emit::EmitHelpers;
use super::expressions::ExpressionEmitter;
use super::labels::LabelManager;
use super::tac::{BlockId, Label, Op, Quad};
use super::CodeGenerator;
use crate::ast::{Expr, IfStatement, WhileStatement};
use tracing::trace;

/// Extension trait for control flow lowering.
pub trait ControlFlowEmitter {
    /// Lower an if statement starting in `label`. Returns the join label.
    fn lower_if(&mut self, if_stmt: &IfStatement, label: &str) -> Label;

    /// Lower a while loop starting in `label`. Returns the exit label.
    fn lower_while(&mut self, while_stmt: &WhileStatement, label: &str) -> Label;

    /// Emit `<keyword> cond`, `goto on_true`, `goto on_false` into `label`.
    fn emit_branch(
        &mut self,
        keyword: Op,
        condition: &Expr,
        label: &str,
        on_true: BlockId,
        on_false: BlockId,
    );
}

impl ControlFlowEmitter for CodeGenerator {
    fn lower_if(&mut self, if_stmt: &IfStatement, label: &str) -> Label {
        let id = if_stmt.id;
        let then_label = self.label_for(BlockId::Then(id));
        let else_label = self.label_for(BlockId::Else(id));
        let join_label = self.label_for(BlockId::Join(id));
        trace!(%id, %then_label, %else_label, %join_label, "lowering if");

        self.emit_branch(
            Op::If,
            &if_stmt.condition,
            label,
            BlockId::Then(id),
            BlockId::Else(id),
        );

        let then_end = self.lower_statements(&if_stmt.then_block, &then_label);
        self.emit_goto(&then_end, BlockId::Join(id));

        let else_end = self.lower_statements(&if_stmt.else_block, &else_label);
        self.emit_goto(&else_end, BlockId::Join(id));

        join_label
    }

    fn lower_while(&mut self, while_stmt: &WhileStatement, label: &str) -> Label {
        let id = while_stmt.id;
        let body_label = self.label_for(BlockId::LoopBody(id));
        let exit_label = self.label_for(BlockId::LoopExit(id));
        trace!(%id, %body_label, %exit_label, "lowering while");

        self.emit_branch(
            Op::While,
            &while_stmt.condition,
            label,
            BlockId::LoopBody(id),
            BlockId::LoopExit(id),
        );

        let body_end = self.lower_statements(&while_stmt.body, &body_label);
        self.emit_branch(
            Op::While,
            &while_stmt.condition,
            &body_end,
            BlockId::LoopBody(id),
            BlockId::LoopExit(id),
        );

        exit_label
    }

    fn emit_branch(
        &mut self,
        keyword: Op,
        condition: &Expr,
        label: &str,
        on_true: BlockId,
        on_false: BlockId,
    ) {
        let operand = self.lower_expression(condition, label);
        self.emit(label, Quad::new(keyword, operand, "", ""));
        self.emit_goto(label, on_true);
        self.emit_goto(label, on_false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstBuilder, BinaryOp, Statement};

    fn block(gen: &CodeGenerator, label: &str) -> Vec<String> {
        gen.program
            .block(label)
            .map(|quads| quads.iter().map(Quad::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_if_blocks() {
        let b = AstBuilder::new();
        let Statement::If(if_stmt) = b.if_else(
            b.binary(BinaryOp::Less, b.variable("i"), b.digit(3)),
            vec![b.assign("i", b.digit(1))],
            vec![b.skip()],
        ) else {
            unreachable!()
        };

        let mut gen = CodeGenerator::new();
        let start = gen.make_label();
        let join = gen.lower_if(&if_stmt, &start);
        assert!(gen.resolve_labels().is_ok());

        assert_eq!(join, "L4");
        assert_eq!(
            block(&gen, "L1"),
            vec!["< i 3 t1", "if t1", "goto L2", "goto L3"]
        );
        assert_eq!(block(&gen, "L2"), vec!["= i 1", "goto L4"]);
        assert_eq!(block(&gen, "L3"), vec!["Skip", "goto L4"]);
        assert_eq!(block(&gen, "L4"), vec!["L4"]);
    }

    #[test]
    fn test_while_rechecks_condition() {
        let b = AstBuilder::new();
        let Statement::While(while_stmt) = b.while_loop(
            b.binary(BinaryOp::Greater, b.variable("n"), b.digit(0)),
            vec![b.assign("n", b.binary(BinaryOp::Subtract, b.variable("n"), b.digit(1)))],
        ) else {
            unreachable!()
        };

        let mut gen = CodeGenerator::new();
        let start = gen.make_label();
        let exit = gen.lower_while(&while_stmt, &start);
        assert!(gen.resolve_labels().is_ok());

        assert_eq!(exit, "L3");
        assert_eq!(
            block(&gen, "L1"),
            vec!["> n 0 t1", "while t1", "goto L2", "goto L3"]
        );
        assert_eq!(
            block(&gen, "L2"),
            vec![
                "- n 1 t2",
                "= n t2",
                "> n 0 t3",
                "while t3",
                "goto L2",
                "goto L3"
            ]
        );
    }
}
