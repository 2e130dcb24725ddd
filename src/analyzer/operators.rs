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

//! Operator checking for the semantic analyzer.
//!
//! This module provides type checking for operators:
//! - Arithmetic operators (+, -)
//! - Comparison operators (==, !=, <, <=, >, >=)
//! - Logical operators (&&, ||, ~)
//! - Unary minus and plus on identifiers

use super::context::AnalysisContext;
use super::expressions::ExpressionAnalyzer;
use super::Analyzer;
use crate::ast::{BinaryOp, Expr, Token, Type};
use crate::error::{Diagnostic, ErrorCode};

/// Extension trait for operator type checking.
pub trait OperatorChecker {
    /// Check a binary operation and return its result type.
    fn check_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        ctx: &AnalysisContext,
    ) -> Option<Type>;

    /// Check one operand of `&&`, `||` or `~`.
    fn check_logical_operand(&mut self, operand: &Expr, ctx: &AnalysisContext);

    /// Check that both sides of a comparison have the same type.
    fn check_relational_operands(&mut self, left: &Expr, right: &Expr, ctx: &AnalysisContext);

    /// Check one operand of `+` or `-`.
    fn check_arithmetic_operand(&mut self, operand: &Expr, ctx: &AnalysisContext);

    /// Check the identifier under a unary `-` or `+`.
    fn check_unary_operand(
        &mut self,
        sign: char,
        operand: &Token,
        ctx: &AnalysisContext,
    ) -> Option<Type>;
}

impl OperatorChecker for Analyzer {
    fn check_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        ctx: &AnalysisContext,
    ) -> Option<Type> {
        if op.is_logical() {
            self.check_logical_operand(left, ctx);
            self.check_logical_operand(right, ctx);
        } else if op.is_comparison() {
            self.check_relational_operands(left, right, ctx);
        } else {
            self.check_arithmetic_operand(left, ctx);
            self.check_arithmetic_operand(right, ctx);
        }
        Some(op.result_type())
    }

    fn check_logical_operand(&mut self, operand: &Expr, ctx: &AnalysisContext) {
        match operand {
            Expr::Boolean(_) => {}
            Expr::Digit(digit) => {
                self.error(Diagnostic::new(
                    ErrorCode::InvalidOperandType,
                    format!("Invalid type for comparison: \"{}\" is not a boolean", digit),
                    digit.position(),
                ));
            }
            Expr::Variable(name) => {
                if let Some(ty) = self.analyze_value_reference(name, ctx) {
                    if ty != Type::Boolean {
                        let subject = self.describe_reference(name, ctx);
                        self.error(Diagnostic::new(
                            ErrorCode::InvalidOperandType,
                            format!("{} is not of type boolean", subject),
                            name.position(),
                        ));
                    }
                }
            }
            nested => {
                if let Some(ty) = self.analyze_expression(nested, ctx) {
                    if ty != Type::Boolean {
                        self.error(Diagnostic::new(
                            ErrorCode::InvalidOperandType,
                            format!("\"{}\" is not of type boolean", nested),
                            nested.position(),
                        ));
                    }
                }
            }
        }
    }

    fn check_relational_operands(&mut self, left: &Expr, right: &Expr, ctx: &AnalysisContext) {
        let left_type = self.analyze_expression(left, ctx);
        let right_type = self.analyze_expression(right, ctx);

        let (Some(left_type), Some(right_type)) = (left_type, right_type) else {
            return;
        };
        if left_type == right_type {
            return;
        }

        let subject = match right {
            Expr::Variable(name) => self.describe_reference(name, ctx),
            other => format!("\"{}\"", other),
        };
        self.error(Diagnostic::new(
            ErrorCode::TypeMismatch,
            format!(
                "{} is not of type {} (compared with \"{}\")",
                subject, left_type, left
            ),
            right.position(),
        ));
    }

    fn check_arithmetic_operand(&mut self, operand: &Expr, ctx: &AnalysisContext) {
        match operand {
            Expr::Digit(_) => {}
            Expr::Boolean(value) => {
                self.error(Diagnostic::new(
                    ErrorCode::InvalidOperandType,
                    format!("Cannot use value \"{}\" (type boolean) in arithmetic", value),
                    value.position(),
                ));
            }
            Expr::Variable(name) => {
                if let Some(ty) = self.analyze_value_reference(name, ctx) {
                    if ty != Type::Integer {
                        let subject = self.describe_reference(name, ctx);
                        self.error(Diagnostic::new(
                            ErrorCode::InvalidOperandType,
                            format!("Cannot use {} in arithmetic. Not of type integer", subject),
                            name.position(),
                        ));
                    }
                }
            }
            nested => {
                if let Some(ty) = self.analyze_expression(nested, ctx) {
                    if ty != Type::Integer {
                        self.error(Diagnostic::new(
                            ErrorCode::InvalidOperandType,
                            format!("\"{}\" is not of type integer", nested),
                            nested.position(),
                        ));
                    }
                }
            }
        }
    }

    fn check_unary_operand(
        &mut self,
        sign: char,
        operand: &Token,
        ctx: &AnalysisContext,
    ) -> Option<Type> {
        let ty = self.analyze_value_reference(operand, ctx)?;
        if ty != Type::Integer {
            let subject = self.describe_reference(operand, ctx);
            self.error(Diagnostic::new(
                ErrorCode::InvalidOperandType,
                format!(
                    "Cannot apply unary '{}' to {}. Not of type integer",
                    sign, subject
                ),
                operand.position(),
            ));
            return None;
        }

        if let Some(symbol) = self.symbols.lookup_mut(ctx.scope(), operand.as_str()) {
            symbol.is_called = true;
        }
        Some(Type::Integer)
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::analyze;
    use crate::ast::{AstBuilder, BinaryOp, Type};
    use crate::config::ENTRY_SCOPE;
    use crate::error::ErrorCode;

    fn codes(analysis: &crate::analyzer::Analysis) -> Vec<ErrorCode> {
        analysis.diagnostics.iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_digit_in_logical_operator() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![],
            vec![],
            b.main(
                vec![b.var("ok", Type::Boolean)],
                vec![b.assign(
                    "ok",
                    b.binary(BinaryOp::And, b.digit(1), b.boolean(true)),
                )],
            ),
        );
        assert_eq!(codes(&analyze(&program)), vec![ErrorCode::InvalidOperandType]);
    }

    #[test]
    fn test_mixed_comparison() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![],
            vec![],
            b.main(
                vec![
                    b.constant("n", Type::Integer, "4"),
                    b.constant("flag", Type::Boolean, "false"),
                    b.var("ok", Type::Boolean),
                ],
                vec![b.assign(
                    "ok",
                    b.binary(BinaryOp::Equal, b.variable("n"), b.variable("flag")),
                )],
            ),
        );
        let analysis = analyze(&program);
        assert_eq!(codes(&analysis), vec![ErrorCode::TypeMismatch]);
        assert!(analysis.diagnostics.as_slice()[0]
            .message
            .starts_with("CONST \"flag\" is not of type integer"));
    }

    #[test]
    fn test_boolean_in_arithmetic() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![],
            vec![],
            b.main(
                vec![b.var("x", Type::Integer)],
                vec![b.assign(
                    "x",
                    b.binary(BinaryOp::Add, b.digit(1), b.boolean(false)),
                )],
            ),
        );
        assert_eq!(codes(&analyze(&program)), vec![ErrorCode::InvalidOperandType]);
    }

    #[test]
    fn test_negate_marks_operand() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![],
            vec![],
            b.main(
                vec![
                    b.constant("five", Type::Integer, "5"),
                    b.var("x", Type::Integer),
                ],
                vec![b.assign("x", b.negate("five"))],
            ),
        );
        let analysis = analyze(&program);

        assert!(analysis.is_ok());
        let five = analysis.symbol(ENTRY_SCOPE, "five").unwrap();
        assert!(five.is_read && five.is_called);
    }

    #[test]
    fn test_negate_boolean() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![],
            vec![],
            b.main(
                vec![
                    b.constant("t", Type::Boolean, "true"),
                    b.var("x", Type::Integer),
                ],
                vec![b.assign("x", b.negate("t"))],
            ),
        );
        assert_eq!(codes(&analyze(&program)), vec![ErrorCode::InvalidOperandType]);
    }
}
