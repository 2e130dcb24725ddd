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

//! Function analysis for the semantic analyzer.
//!
//! This module provides function-related analysis:
//! - Function definition analysis (redeclaration, parameters, body)
//! - The `main` block
//! - Function call analysis (arity and positional argument types)

use super::context::AnalysisContext;
use super::control_flow::ControlFlowAnalyzer;
use super::declarations::DeclarationAnalyzer;
use super::expressions::ExpressionAnalyzer;
use super::scope::Scope;
use super::statements::StatementAnalyzer;
use super::symbol::{Parameter, Symbol, SymbolKind};
use super::Analyzer;
use crate::ast::{Function, FunctionCall, Main, Type};
use crate::config::{ENTRY_SCOPE, GLOBAL_SCOPE};
use crate::error::{Diagnostic, ErrorCode};
use tracing::debug;

/// Extension trait for function analysis.
pub trait FunctionAnalyzer {
    /// Analyze the `main` block in its own scope.
    fn analyze_main(&mut self, main: &Main);

    /// Analyze a function definition declared in the scope of `ctx`.
    fn analyze_function(&mut self, func: &Function, ctx: &AnalysisContext);

    /// Analyze a function call and return the callee's type.
    fn analyze_function_call(&mut self, call: &FunctionCall, ctx: &AnalysisContext)
        -> Option<Type>;
}

impl FunctionAnalyzer for Analyzer {
    fn analyze_main(&mut self, main: &Main) {
        debug!(scope = ENTRY_SCOPE, "entering scope");
        self.symbols.open_scope(ENTRY_SCOPE);

        let ctx = AnalysisContext::entry();
        self.analyze_declarations(&main.declarations, &ctx);
        self.analyze_statements(&main.statements, &ctx);
    }

    fn analyze_function(&mut self, func: &Function, ctx: &AnalysisContext) {
        let name = func.name.as_str();
        let arity = func.params.len();
        let return_type = func.return_type.ty;

        // Function scopes share the namespace of `Program` and `Main`. The body
        // is not analyzed, as its parameters would land in the reserved scope.
        if name == GLOBAL_SCOPE || name == ENTRY_SCOPE {
            self.error(
                Diagnostic::new(
                    ErrorCode::FunctionAlreadyDeclared,
                    format!("Function \"{}\" clashes with reserved scope \"{}\"", name, name),
                    func.name.position(),
                )
                .with_hint("Rename the function"),
            );
            return;
        }

        let duplicate = self
            .symbols
            .lookup_in(ctx.scope(), name)
            .filter(|existing| existing.formal_param_count().map_or(true, |n| n == arity))
            .map(|existing| (existing.kind_name(), existing.name.position()));

        // A duplicate is still analyzed, but against a throwaway scope.
        let displaced = if let Some((kind, previous)) = duplicate {
            let message = if kind == "FUNC" {
                format!(
                    "Function \"{}\" already declared with {} parameters",
                    name, arity
                )
            } else {
                format!(
                    "Function \"{}\" clashes with {} \"{}\" in scope \"{}\"",
                    name,
                    kind,
                    name,
                    ctx.scope()
                )
            };
            self.error(
                Diagnostic::new(
                    ErrorCode::FunctionAlreadyDeclared,
                    message,
                    func.name.position(),
                )
                .with_hint(format!("Previously declared at {}", previous)),
            );
            Some(self.symbols.swap_scope(Scope::new(name)))
        } else {
            let symbol = Symbol::function(func.name.clone(), return_type, ctx.scope(), arity);
            self.symbols.replace(ctx.scope(), symbol);
            self.symbols.reset_scope(name);
            None
        };

        debug!(scope = name, params = arity, "entering scope");
        let body_ctx = AnalysisContext::function(name, return_type);

        let mut parameters: Vec<Parameter> = Vec::with_capacity(arity);
        for param in &func.params {
            if parameters.iter().any(|p| p.name == param.name.image) {
                self.error(Diagnostic::new(
                    ErrorCode::DuplicateParameterName,
                    format!(
                        "Duplicate parameter name \"{}\" for function \"{}\"",
                        param.name, name
                    ),
                    param.name.position(),
                ));
                continue;
            }
            let symbol = Symbol::parameter(param.name.clone(), param.param_type.ty, name);
            let _ = self.symbols.define(name, symbol);
            parameters.push(Parameter {
                name: param.name.image.clone(),
                ty: param.param_type.ty,
            });
        }

        // Recursive calls in the body check against this list.
        if displaced.is_none() {
            if let Some(symbol) = self.symbols.lookup_mut(ctx.scope(), name) {
                if let SymbolKind::Function {
                    parameters: stored, ..
                } = &mut symbol.kind
                {
                    *stored = parameters;
                }
            }
        }

        self.analyze_declarations(&func.declarations, &body_ctx);
        self.analyze_statements(&func.statements, &body_ctx);
        self.analyze_return_statement(&func.return_stmt, &body_ctx);

        match displaced {
            Some(Some(original)) => {
                self.symbols.swap_scope(original);
            }
            Some(None) => {
                self.symbols.remove_scope(name);
            }
            None => {}
        }
        debug!(scope = ctx.scope(), "leaving scope {}", name);
    }

    fn analyze_function_call(
        &mut self,
        call: &FunctionCall,
        ctx: &AnalysisContext,
    ) -> Option<Type> {
        let name = call.name.as_str();

        let callee = self.symbols.lookup_mut(ctx.scope(), name).map(|symbol| {
            if symbol.is_function() {
                symbol.is_called = true;
            }
            (
                symbol.kind_name(),
                symbol.declared_type,
                symbol.formal_param_count(),
                symbol.parameters().to_vec(),
            )
        });

        let (return_type, formal_param_count, parameters) = match callee {
            Some((_, ty, Some(count), parameters)) => (ty, count, parameters),
            Some((kind, _, None, _)) => {
                self.error(Diagnostic::new(
                    ErrorCode::UndeclaredFunction,
                    format!("\"{}\" is a {}, not a function", name, kind),
                    call.name.position(),
                ));
                return None;
            }
            None => {
                self.error(Diagnostic::new(
                    ErrorCode::UndeclaredFunction,
                    format!("Function \"{}\" not declared in any scope", name),
                    call.name.position(),
                ));
                return None;
            }
        };

        let arg_types: Vec<Option<Type>> = call
            .args
            .iter()
            .map(|arg| self.analyze_value_reference(&arg.name, ctx))
            .collect();

        if call.args.len() != formal_param_count {
            self.error(Diagnostic::new(
                ErrorCode::WrongNumberOfArguments,
                format!(
                    "Function \"{}\" has invalid number of arguments. Should have {} but called with {} argument(s)",
                    name,
                    formal_param_count,
                    call.args.len()
                ),
                call.name.position(),
            ));
            return Some(return_type);
        }

        for ((arg, arg_type), param) in call.args.iter().zip(arg_types).zip(&parameters) {
            match arg_type {
                Some(ty) if ty != param.ty => {
                    self.error(Diagnostic::new(
                        ErrorCode::ArgumentTypeMismatch,
                        format!(
                            "\"{}\" is of the wrong type for function \"{}\": expected {}, found {}",
                            arg.name, name, param.ty, ty
                        ),
                        arg.name.position(),
                    ));
                }
                _ => {}
            }
        }

        Some(return_type)
    }
}

#[cfg(test)]
mod tests {
    use crate::analyzer::{analyze, Analysis};
    use crate::ast::{AstBuilder, Type};
    use crate::config::{ENTRY_SCOPE, GLOBAL_SCOPE};
    use crate::error::ErrorCode;

    fn codes(analysis: &Analysis) -> Vec<ErrorCode> {
        analysis.diagnostics.iter().map(|d| d.code).collect()
    }

    fn two_param_function(b: &AstBuilder) -> crate::ast::Function {
        b.function(
            Type::Integer,
            "add",
            vec![b.param("a", Type::Integer), b.param("b", Type::Integer)],
            vec![],
            vec![],
            Some(b.variable("a")),
        )
    }

    #[test]
    fn test_wrong_argument_count() {
        let b = AstBuilder::new();
        let func = two_param_function(&b);
        let program = b.program(
            vec![],
            vec![func],
            b.main(
                vec![
                    b.constant("x", Type::Integer, "1"),
                    b.constant("flag", Type::Boolean, "true"),
                ],
                vec![b.call_stmt("add", &["x", "flag", "x"])],
            ),
        );
        // The boolean argument is not reported once the count is wrong.
        assert_eq!(
            codes(&analyze(&program)),
            vec![ErrorCode::WrongNumberOfArguments]
        );
    }

    #[test]
    fn test_argument_type_mismatch() {
        let b = AstBuilder::new();
        let func = two_param_function(&b);
        let program = b.program(
            vec![],
            vec![func],
            b.main(
                vec![
                    b.constant("x", Type::Integer, "1"),
                    b.constant("flag", Type::Boolean, "true"),
                ],
                vec![b.call_stmt("add", &["x", "flag"])],
            ),
        );
        let analysis = analyze(&program);
        assert_eq!(codes(&analysis), vec![ErrorCode::ArgumentTypeMismatch]);
        assert!(analysis.symbol(GLOBAL_SCOPE, "add").unwrap().is_called);
    }

    #[test]
    fn test_undeclared_function() {
        let b = AstBuilder::new();
        let program = b.program(
            vec![],
            vec![],
            b.main(vec![], vec![b.call_stmt("nothing", &[])]),
        );
        assert_eq!(codes(&analyze(&program)), vec![ErrorCode::UndeclaredFunction]);
    }

    #[test]
    fn test_duplicate_function_same_arity() {
        let b = AstBuilder::new();
        let first = b.function(
            Type::Integer,
            "f",
            vec![b.param("a", Type::Integer)],
            vec![],
            vec![],
            Some(b.variable("a")),
        );
        let second = b.function(
            Type::Integer,
            "f",
            vec![b.param("z", Type::Integer)],
            vec![b.var("local", Type::Integer)],
            vec![],
            Some(b.variable("z")),
        );
        let program = b.program(vec![], vec![first, second], b.main(vec![], vec![]));
        let analysis = analyze(&program);

        assert_eq!(codes(&analysis), vec![ErrorCode::FunctionAlreadyDeclared]);
        // The first declaration's scope is left untouched.
        assert!(analysis.symbol("f", "a").is_some());
        assert!(analysis.symbol("f", "z").is_none());
        assert!(analysis.symbol("f", "local").is_none());
    }

    #[test]
    fn test_redeclaration_with_different_arity_replaces() {
        let b = AstBuilder::new();
        let first = b.function(
            Type::Integer,
            "f",
            vec![b.param("a", Type::Integer)],
            vec![],
            vec![],
            Some(b.variable("a")),
        );
        let second = b.function(
            Type::Boolean,
            "f",
            vec![],
            vec![],
            vec![],
            Some(b.boolean(true)),
        );
        let program = b.program(vec![], vec![first, second], b.main(vec![], vec![]));
        let analysis = analyze(&program);

        assert!(analysis.is_ok());
        let f = analysis.symbol(GLOBAL_SCOPE, "f").unwrap();
        assert_eq!(f.formal_param_count(), Some(0));
        assert_eq!(f.declared_type, Type::Boolean);
        assert!(analysis.symbol("f", "a").is_none());
    }

    #[test]
    fn test_duplicate_parameter() {
        let b = AstBuilder::new();
        let func = b.function(
            Type::Integer,
            "f",
            vec![b.param("a", Type::Integer), b.param("a", Type::Boolean)],
            vec![],
            vec![],
            Some(b.variable("a")),
        );
        let program = b.program(vec![], vec![func], b.main(vec![], vec![]));
        let analysis = analyze(&program);

        assert_eq!(codes(&analysis), vec![ErrorCode::DuplicateParameterName]);
        let f = analysis.symbol(GLOBAL_SCOPE, "f").unwrap();
        assert_eq!(f.formal_param_count(), Some(2));
        assert_eq!(f.parameters().len(), 1);
    }

    #[test]
    fn test_recursive_call_checks_parameters() {
        let b = AstBuilder::new();
        let func = b.function(
            Type::Integer,
            "countdown",
            vec![b.param("n", Type::Integer)],
            vec![b.var("r", Type::Integer)],
            vec![b.assign("r", b.call_expr("countdown", &["n"]))],
            Some(b.variable("r")),
        );
        let program = b.program(vec![], vec![func], b.main(vec![], vec![]));
        let analysis = analyze(&program);

        assert!(analysis.is_ok());
        assert!(analysis.symbol(GLOBAL_SCOPE, "countdown").unwrap().is_called);
    }

    #[test]
    fn test_function_named_program_keeps_globals() {
        let b = AstBuilder::new();
        let func = b.function(
            Type::Integer,
            GLOBAL_SCOPE,
            vec![b.param("p", Type::Integer)],
            vec![],
            vec![],
            Some(b.variable("p")),
        );
        let program = b.program(
            vec![b.constant("g", Type::Integer, "1")],
            vec![func],
            b.main(
                vec![b.var("y", Type::Integer)],
                vec![b.assign("y", b.variable("g")), b.call_stmt(GLOBAL_SCOPE, &["y"])],
            ),
        );
        let analysis = analyze(&program);

        assert_eq!(
            codes(&analysis),
            vec![ErrorCode::FunctionAlreadyDeclared, ErrorCode::UndeclaredFunction]
        );
        assert!(analysis.symbol(GLOBAL_SCOPE, "g").is_some_and(|s| s.is_read));
        assert!(analysis.symbol(GLOBAL_SCOPE, GLOBAL_SCOPE).is_none());
        assert!(analysis.symbol(GLOBAL_SCOPE, "p").is_none());
    }

    #[test]
    fn test_function_named_main_leaves_entry_scope_alone() {
        let b = AstBuilder::new();
        let func = b.function(
            Type::Integer,
            ENTRY_SCOPE,
            vec![b.param("p", Type::Integer)],
            vec![],
            vec![],
            Some(b.variable("p")),
        );
        let program = b.program(
            vec![],
            vec![func],
            b.main(vec![b.var("p", Type::Integer)], vec![b.assign("p", b.digit(1))]),
        );
        let analysis = analyze(&program);

        assert_eq!(codes(&analysis), vec![ErrorCode::FunctionAlreadyDeclared]);
        assert_eq!(
            analysis.symbol(ENTRY_SCOPE, "p").map(|s| s.kind_name()),
            Some("VAR")
        );
    }
}
