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

//! Expression analysis for the semantic analyzer.
//!
//! Every expression is analyzed in value position: identifiers must resolve
//! and must already hold a value. The returned type is `None` when a
//! diagnostic made the type unknowable.

use super::context::AnalysisContext;
use super::functions::FunctionAnalyzer;
use super::operators::OperatorChecker;
use super::Analyzer;
use crate::ast::{Expr, Token, Type};
use crate::config::GLOBAL_SCOPE;
use crate::error::{Diagnostic, ErrorCode};

/// Extension trait for expression analysis.
pub trait ExpressionAnalyzer {
    /// Analyze an expression and return its type.
    fn analyze_expression(&mut self, expr: &Expr, ctx: &AnalysisContext) -> Option<Type>;

    /// Resolve an identifier used as a value, mark it read and return its type.
    fn analyze_value_reference(&mut self, name: &Token, ctx: &AnalysisContext) -> Option<Type>;

    /// Describe a referenced name for messages, e.g. `CONST "x"`.
    fn describe_reference(&self, name: &Token, ctx: &AnalysisContext) -> String;
}

impl ExpressionAnalyzer for Analyzer {
    fn analyze_expression(&mut self, expr: &Expr, ctx: &AnalysisContext) -> Option<Type> {
        match expr {
            Expr::Variable(name) => self.analyze_value_reference(name, ctx),
            Expr::Digit(_) => Some(Type::Integer),
            Expr::Boolean(_) => Some(Type::Boolean),
            Expr::Negate(operand) => self.check_unary_operand('-', operand, ctx),
            Expr::Positive(operand) => self.check_unary_operand('+', operand, ctx),
            Expr::Not(inner) => {
                self.check_logical_operand(inner, ctx);
                Some(Type::Boolean)
            }
            Expr::Binary { op, left, right } => self.check_binary(*op, left, right, ctx),
            Expr::Call(call) => self.analyze_function_call(call, ctx),
        }
    }

    fn analyze_value_reference(&mut self, name: &Token, ctx: &AnalysisContext) -> Option<Type> {
        let scope = ctx.scope();
        let resolved = self.symbols.lookup_mut(scope, name.as_str()).map(|symbol| {
            if !symbol.is_function() {
                symbol.is_read = true;
            }
            (symbol.kind_name(), symbol.has_value(), symbol.declared_type)
        });

        let Some((kind, has_value, ty)) = resolved else {
            self.error(
                Diagnostic::new(
                    ErrorCode::UndeclaredVariable,
                    format!(
                        "Variable \"{}\" not declared in scope \"{}\" or \"{}\"",
                        name, scope, GLOBAL_SCOPE
                    ),
                    name.position(),
                )
                .with_hint(format!("Declare it with 'var {}: integer;'", name)),
            );
            return None;
        };

        if kind == "FUNC" {
            self.error(function_as_value(name));
            return None;
        }

        if !has_value {
            self.error(Diagnostic::new(
                ErrorCode::VariableHasNoValue,
                format!("{} \"{}\" has no value in scope \"{}\"", kind, name, scope),
                name.position(),
            ));
            return None;
        }

        Some(ty)
    }

    fn describe_reference(&self, name: &Token, ctx: &AnalysisContext) -> String {
        let kind = self
            .symbols
            .lookup(ctx.scope(), name.as_str())
            .map_or("VAR", |symbol| symbol.kind_name());
        format!("{} \"{}\"", kind, name)
    }
}

/// Diagnostic for a function name used where a value is expected.
pub(crate) fn function_as_value(name: &Token) -> Diagnostic {
    Diagnostic::new(
        ErrorCode::UndeclaredVariable,
        format!("\"{}\" is a FUNC, not a variable", name),
        name.position(),
    )
    .with_hint(format!("Call it with '{}(...)'", name))
}
