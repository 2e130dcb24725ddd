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

//! Declaration analysis for the semantic analyzer.
//!
//! This module handles `var` and `const` declarations:
//! - Redeclaration checks within the current scope
//! - The Main/Program cross-check for variables
//! - Constant literal validation

use super::context::AnalysisContext;
use super::symbol::{Symbol, Value};
use super::Analyzer;
use crate::ast::{ConstDecl, Declaration, VarDecl};
use crate::config::{ENTRY_SCOPE, GLOBAL_SCOPE};
use crate::error::{Diagnostic, ErrorCode};

/// Extension trait for declaration analysis.
pub trait DeclarationAnalyzer {
    /// Analyze a declaration list in order.
    fn analyze_declarations(&mut self, declarations: &[Declaration], ctx: &AnalysisContext);

    /// Analyze a variable declaration.
    fn analyze_var_decl(&mut self, decl: &VarDecl, ctx: &AnalysisContext);

    /// Analyze a constant declaration.
    fn analyze_const_decl(&mut self, decl: &ConstDecl, ctx: &AnalysisContext);
}

impl DeclarationAnalyzer for Analyzer {
    fn analyze_declarations(&mut self, declarations: &[Declaration], ctx: &AnalysisContext) {
        for declaration in declarations {
            match declaration {
                Declaration::Var(decl) => self.analyze_var_decl(decl, ctx),
                Declaration::Const(decl) => self.analyze_const_decl(decl, ctx),
            }
        }
    }

    fn analyze_var_decl(&mut self, decl: &VarDecl, ctx: &AnalysisContext) {
        let name = decl.name.as_str();
        let scope = ctx.scope();

        // Main and Program may not declare the same variable.
        let counterpart = match scope {
            ENTRY_SCOPE => Some(GLOBAL_SCOPE),
            GLOBAL_SCOPE if self.symbols.has_scope(ENTRY_SCOPE) => Some(ENTRY_SCOPE),
            _ => None,
        };

        let clash = self
            .symbols
            .lookup_in(scope, name)
            .map(|existing| (scope, existing.name.position()))
            .or_else(|| {
                counterpart.and_then(|other| {
                    self.symbols
                        .lookup_in(other, name)
                        .map(|existing| (other, existing.name.position()))
                })
            });

        if let Some((clash_scope, previous)) = clash {
            self.error(
                Diagnostic::new(
                    ErrorCode::VariableAlreadyDeclared,
                    format!("VAR \"{}\" already declared in scope \"{}\"", name, clash_scope),
                    decl.name.position(),
                )
                .with_hint(format!("Previously declared at {}", previous)),
            );
            return;
        }

        let symbol = Symbol::variable(decl.name.clone(), decl.var_type.ty, scope);
        let _ = self.symbols.define(scope, symbol);
    }

    fn analyze_const_decl(&mut self, decl: &ConstDecl, ctx: &AnalysisContext) {
        let name = decl.name.as_str();
        let scope = ctx.scope();

        if let Some(existing) = self.symbols.lookup_in(scope, name) {
            let previous = existing.name.position();
            self.error(
                Diagnostic::new(
                    ErrorCode::ConstantAlreadyDeclared,
                    format!("CONST \"{}\" already declared in scope \"{}\"", name, scope),
                    decl.name.position(),
                )
                .with_hint(format!("Previously declared at {}", previous)),
            );
            return;
        }

        let ty = decl.const_type.ty;
        let mut symbol = Symbol::constant(decl.name.clone(), ty, scope);
        if ty.accepts_literal(decl.value.as_str()) {
            symbol.record_value(Value::new(ty, decl.value.as_str().to_lowercase()));
        } else {
            self.error(Diagnostic::new(
                ErrorCode::InvalidConstantValue,
                format!(
                    "Invalid value \"{}\" for CONST \"{}\" of type {}",
                    decl.value, name, ty
                ),
                decl.name.position(),
            ));
        }
        let _ = self.symbols.define(scope, symbol);
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::analyze;
    use crate::ast::{AstBuilder, Type};
    use crate::config::{ENTRY_SCOPE, GLOBAL_SCOPE};
    use crate::error::ErrorCode;

    #[test]
    fn test_duplicate_const_keeps_first_value() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![],
            vec![],
            b.main(
                vec![
                    b.constant("x", Type::Integer, "1"),
                    b.constant("x", Type::Integer, "2"),
                ],
                vec![],
            ),
        );
        let analysis = analyze(&program);

        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(
            analysis.diagnostics.as_slice()[0].code,
            ErrorCode::ConstantAlreadyDeclared
        );
        let x = analysis.symbol(ENTRY_SCOPE, "x").unwrap();
        assert_eq!(x.assigned_values().len(), 1);
        assert_eq!(x.assigned_values()[0].text, "1");
    }

    #[test]
    fn test_invalid_const_literal() {
        let b = AstBuilder::new();
        let name = b.token_at("b", 2, 7);
        let program = b.program(
            vec![b.const_decl(name, Type::Integer, "true")],
            vec![],
            b.main(vec![], vec![]),
        );
        let analysis = analyze(&program);

        assert_eq!(analysis.diagnostics.len(), 1);
        let diagnostic = &analysis.diagnostics.as_slice()[0];
        assert_eq!(diagnostic.code, ErrorCode::InvalidConstantValue);
        assert_eq!((diagnostic.line, diagnostic.column), (2, 7));
        assert!(analysis
            .symbol(GLOBAL_SCOPE, "b")
            .is_some_and(|s| s.assigned_values().is_empty()));
    }

    #[test]
    fn test_boolean_const_is_lowercased() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![b.constant("flag", Type::Boolean, "TRUE")],
            vec![],
            b.main(vec![], vec![]),
        );
        let analysis = analyze(&program);

        assert!(analysis.is_ok());
        let flag = analysis.symbol(GLOBAL_SCOPE, "flag").unwrap();
        assert_eq!(flag.assigned_values()[0].text, "true");
    }

    #[test]
    fn test_main_var_clashes_with_global() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![b.var("x", Type::Integer)],
            vec![],
            b.main(vec![b.var("x", Type::Boolean)], vec![]),
        );
        let analysis = analyze(&program);

        assert_eq!(analysis.diagnostics.len(), 1);
        assert_eq!(
            analysis.diagnostics.as_slice()[0].code,
            ErrorCode::VariableAlreadyDeclared
        );
        assert!(analysis.symbol(ENTRY_SCOPE, "x").is_none());
    }

    #[test]
    fn test_function_local_may_shadow_global() {
        let b = AstBuilder::new();
        let f = b.function(
            Type::Integer,
            "f",
            vec![],
            vec![b.var("x", Type::Integer)],
            vec![b.assign("x", b.digit(1))],
            Some(b.variable("x")),
        );
        let program = b.program(
            vec![b.var("x", Type::Integer)],
            vec![f],
            b.main(vec![], vec![]),
        );
        let analysis = analyze(&program);

        assert!(analysis.is_ok());
        assert!(analysis.symbol("f", "x").is_some_and(|s| s.has_value()));
        assert!(analysis
            .symbol(GLOBAL_SCOPE, "x")
            .is_some_and(|s| !s.has_value()));
    }
}
