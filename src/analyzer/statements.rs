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

//! Statement analysis for the semantic analyzer.
//!
//! This module provides statement analysis functionality:
//! - Statement dispatch to the appropriate handlers
//! - Assignment statements and value recording

use super::context::AnalysisContext;
use super::control_flow::ControlFlowAnalyzer;
use super::expressions::{function_as_value, ExpressionAnalyzer};
use super::functions::FunctionAnalyzer;
use super::symbol::Value;
use super::Analyzer;
use crate::ast::{Assignment, Expr, Statement, Type};
use crate::config::GLOBAL_SCOPE;
use crate::error::{Diagnostic, ErrorCode};

/// Extension trait for statement analysis.
pub trait StatementAnalyzer {
    /// Analyze a list of statements in order.
    fn analyze_statements(&mut self, statements: &[Statement], ctx: &AnalysisContext);

    /// Analyze a statement.
    fn analyze_statement(&mut self, stmt: &Statement, ctx: &AnalysisContext);

    /// Analyze an assignment statement.
    fn analyze_assignment(&mut self, assign: &Assignment, ctx: &AnalysisContext);
}

impl StatementAnalyzer for Analyzer {
    fn analyze_statements(&mut self, statements: &[Statement], ctx: &AnalysisContext) {
        for stmt in statements {
            self.analyze_statement(stmt, ctx);
        }
    }

    fn analyze_statement(&mut self, stmt: &Statement, ctx: &AnalysisContext) {
        match stmt {
            Statement::Assignment(assign) => {
                self.analyze_assignment(assign, ctx);
            }
            Statement::Call(call) => {
                self.analyze_function_call(call, ctx);
            }
            Statement::Block(statements) => {
                self.analyze_statements(statements, ctx);
            }
            Statement::If(if_stmt) => {
                self.analyze_if_statement(if_stmt, ctx);
            }
            Statement::While(while_stmt) => {
                self.analyze_while_statement(while_stmt, ctx);
            }
            Statement::Skip(_) => {}
        }
    }

    fn analyze_assignment(&mut self, assign: &Assignment, ctx: &AnalysisContext) {
        let scope = ctx.scope();
        let target = &assign.target;

        let resolved = self
            .symbols
            .lookup(scope, target.as_str())
            .map(|symbol| (symbol.declared_type, symbol.is_constant(), symbol.is_function()));

        let target_type = match resolved {
            None => {
                self.error(Diagnostic::new(
                    ErrorCode::UndeclaredVariable,
                    format!(
                        "Variable \"{}\" not declared in scope \"{}\" or \"{}\"",
                        target, scope, GLOBAL_SCOPE
                    ),
                    target.position(),
                ));
                self.analyze_expression(&assign.value, ctx);
                return;
            }
            Some((_, _, true)) => {
                self.error(Diagnostic::new(
                    ErrorCode::CannotAssignToFunction,
                    format!("Cannot assign a value to function \"{}\"", target),
                    target.position(),
                ));
                self.analyze_expression(&assign.value, ctx);
                return;
            }
            Some((_, true, _)) => {
                self.error(
                    Diagnostic::new(
                        ErrorCode::CannotAssignToConstant,
                        format!(
                            "\"{}\" cannot be reassigned a value as it is a CONST",
                            target
                        ),
                        target.position(),
                    )
                    .with_hint("Declare it with 'var' instead"),
                );
                self.analyze_expression(&assign.value, ctx);
                return;
            }
            Some((ty, _, _)) => ty,
        };

        let errors_before = self.error_count();

        let recorded = match &assign.value {
            Expr::Variable(source) => {
                let source_info = self.symbols.lookup_mut(scope, source.as_str()).map(|s| {
                    if !s.is_function() {
                        s.is_read = true;
                    }
                    (s.declared_type, s.kind_name(), s.has_value())
                });
                match source_info {
                    None => {
                        self.error(Diagnostic::new(
                            ErrorCode::UndeclaredVariable,
                            format!(
                                "Variable \"{}\" not declared in scope \"{}\" or \"{}\"",
                                source, scope, GLOBAL_SCOPE
                            ),
                            source.position(),
                        ));
                        None
                    }
                    Some((_, "FUNC", _)) => {
                        self.error(function_as_value(source));
                        None
                    }
                    Some((source_type, _, _)) if source_type != target_type => {
                        self.error(Diagnostic::new(
                            ErrorCode::TypeMismatch,
                            format!("\"{}\" and \"{}\" are not of same type", target, source),
                            target.position(),
                        ));
                        None
                    }
                    Some((_, kind, false)) => {
                        self.error(Diagnostic::new(
                            ErrorCode::VariableHasNoValue,
                            format!("{} \"{}\" has no value in scope \"{}\"", kind, source, scope),
                            source.position(),
                        ));
                        None
                    }
                    Some(_) => {
                        if let Some(symbol) = self.symbols.lookup_mut(scope, target.as_str()) {
                            symbol.is_read = true;
                        }
                        Some(source.image.clone())
                    }
                }
            }
            Expr::Digit(literal) | Expr::Boolean(literal) => {
                let literal_type = if matches!(assign.value, Expr::Digit(_)) {
                    Type::Integer
                } else {
                    Type::Boolean
                };
                if literal_type != target_type {
                    self.error(Diagnostic::new(
                        ErrorCode::TypeMismatch,
                        format!(
                            "Cannot assign {} value \"{}\" to {} \"{}\"",
                            literal_type, literal, target_type, target
                        ),
                        target.position(),
                    ));
                    None
                } else {
                    Some(literal.image.clone())
                }
            }
            other => {
                let value_type = self.analyze_expression(other, ctx);
                match value_type {
                    Some(ty) if ty != target_type => {
                        self.error(Diagnostic::new(
                            ErrorCode::TypeMismatch,
                            format!(
                                "Cannot assign {} value \"{}\" to {} \"{}\"",
                                ty, other, target_type, target
                            ),
                            target.position(),
                        ));
                        None
                    }
                    Some(_) => Some(recorded_text(other)),
                    None => None,
                }
            }
        };

        if self.error_count() > errors_before {
            return;
        }
        if let Some(text) = recorded {
            if let Some(symbol) = self.symbols.lookup_mut(scope, target.as_str()) {
                symbol.record_value(Value::new(target_type, text));
            }
        }
    }
}

/// The text recorded as the value of an assignment.
///
/// Calls and unary minus record the bare callee or operand name.
// TODO: give calls and negations a dedicated result operand instead of the bare name.
fn recorded_text(expr: &Expr) -> String {
    match expr {
        Expr::Call(call) => call.name.image.clone(),
        Expr::Negate(operand) => operand.image.clone(),
        other => other.to_string(),
    }
}
