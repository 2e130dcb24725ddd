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

//! Control flow analysis for the semantic analyzer.
//!
//! This module provides control flow statement analysis:
//! - If/else statements
//! - While loops
//! - Return statements

use super::context::AnalysisContext;
use super::expressions::ExpressionAnalyzer;
use super::statements::StatementAnalyzer;
use super::Analyzer;
use crate::ast::{Expr, IfStatement, ReturnStatement, Type, WhileStatement};
use crate::error::{Diagnostic, ErrorCode};

/// Extension trait for control flow analysis.
pub trait ControlFlowAnalyzer {
    /// Analyze an if statement.
    fn analyze_if_statement(&mut self, if_stmt: &IfStatement, ctx: &AnalysisContext);

    /// Analyze a while statement.
    fn analyze_while_statement(&mut self, while_stmt: &WhileStatement, ctx: &AnalysisContext);

    /// Analyze the return statement of a function body.
    fn analyze_return_statement(&mut self, ret: &ReturnStatement, ctx: &AnalysisContext);

    /// Check that a condition is boolean.
    fn check_condition(&mut self, condition: &Expr, ctx: &AnalysisContext);
}

impl ControlFlowAnalyzer for Analyzer {
    fn analyze_if_statement(&mut self, if_stmt: &IfStatement, ctx: &AnalysisContext) {
        self.check_condition(&if_stmt.condition, ctx);
        self.analyze_statements(&if_stmt.then_block, ctx);
        self.analyze_statements(&if_stmt.else_block, ctx);
    }

    fn analyze_while_statement(&mut self, while_stmt: &WhileStatement, ctx: &AnalysisContext) {
        self.check_condition(&while_stmt.condition, ctx);
        self.analyze_statements(&while_stmt.body, ctx);
    }

    fn analyze_return_statement(&mut self, ret: &ReturnStatement, ctx: &AnalysisContext) {
        let Some(value) = &ret.value else {
            return;
        };

        let found = self.analyze_expression(value, ctx);
        if let (Some(found), Some(expected)) = (found, ctx.return_type) {
            if found != expected {
                self.error(Diagnostic::new(
                    ErrorCode::ReturnTypeMismatch,
                    format!(
                        "Function \"{}\" is declared {} but returns {} value \"{}\"",
                        ctx.scope(),
                        expected,
                        found,
                        value
                    ),
                    value.position(),
                ));
            }
        }
    }

    fn check_condition(&mut self, condition: &Expr, ctx: &AnalysisContext) {
        if let Some(ty) = self.analyze_expression(condition, ctx) {
            if ty != Type::Boolean {
                self.error(Diagnostic::new(
                    ErrorCode::InvalidOperandType,
                    format!("Condition \"{}\" must be boolean, found {}", condition, ty),
                    condition.position(),
                ));
            }
        }
    }
}
