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

//! Expression lowering for code generation.
//!
//! This module handles:
//! - Leaf operands (identifiers, literals, signed identifiers)
//! - One quad per binary operator, result in a fresh temporary
//! - Negation, with the wrapped comparison promoted into a `~<op>` quad
//! - Calls in value position

use super::emit::EmitHelpers;
use super::functions::FunctionEmitter;
use super::tac::{Op, Quad};
use super::CodeGenerator;
use crate::ast::{BinaryOp, Expr};

/// Extension trait for expression lowering.
pub trait ExpressionEmitter {
    /// Lower an expression into `label` and return the operand holding its value.
    fn lower_expression(&mut self, expr: &Expr, label: &str) -> String;

    /// Lower a binary operation into a fresh temporary.
    fn lower_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr, label: &str) -> String;

    /// Lower a logical negation into a fresh temporary.
    fn lower_not(&mut self, operand: &Expr, label: &str) -> String;
}

impl ExpressionEmitter for CodeGenerator {
    fn lower_expression(&mut self, expr: &Expr, label: &str) -> String {
        match expr {
            Expr::Variable(token) | Expr::Digit(token) | Expr::Boolean(token) => {
                token.image.clone()
            }
            Expr::Negate(token) => format!("-{}", token),
            Expr::Positive(token) => token.image.clone(),
            Expr::Not(operand) => self.lower_not(operand, label),
            Expr::Binary { op, left, right } => self.lower_binary(*op, left, right, label),
            Expr::Call(call) => {
                self.lower_call(call, label);
                call.name.image.clone()
            }
        }
    }

    fn lower_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr, label: &str) -> String {
        let a1 = self.lower_expression(left, label);
        let a2 = self.lower_expression(right, label);
        let result = self.new_temp();
        self.emit(label, Quad::new(Op::Binary(op), a1, a2, result.clone()));
        result
    }

    fn lower_not(&mut self, operand: &Expr, label: &str) -> String {
        match operand {
            Expr::Binary { op, left, right } if op.is_comparison() || op.is_logical() => {
                let a1 = self.lower_expression(left, label);
                let a2 = self.lower_expression(right, label);
                let result = self.new_temp();
                self.emit(label, Quad::new(Op::Not(Some(*op)), a1, a2, result.clone()));
                result
            }
            other => {
                let a1 = self.lower_expression(other, label);
                let result = self.new_temp();
                self.emit(label, Quad::new(Op::Not(None), a1, "", result.clone()));
                result
            }
        }
    }
}
