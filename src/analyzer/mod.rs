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

//! Semantic analyzer for CCAL.
//!
//! This module performs semantic analysis on the AST:
//! - Scoped symbol table construction (`Program`, `Main`, one scope per function)
//! - Declaration and redeclaration checks
//! - Type checking of assignments, operators, calls and returns
//! - Value tracking (a name must have been assigned before it is read)
//! - An end-of-program usage report
//!
//! Diagnostics are collected and analysis always runs to completion.

mod context;
mod control_flow;
mod declarations;
mod expressions;
mod functions;
mod operators;
mod scope;
mod statements;
mod symbol;
mod symbol_table;
mod usage;

pub use context::AnalysisContext;
pub use control_flow::ControlFlowAnalyzer;
pub use declarations::DeclarationAnalyzer;
pub use expressions::ExpressionAnalyzer;
pub use functions::FunctionAnalyzer;
pub use operators::OperatorChecker;
pub use scope::Scope;
pub use statements::StatementAnalyzer;
pub use symbol::{Parameter, Symbol, SymbolKind, Value};
pub use symbol_table::SymbolTable;
pub use usage::UsageReport;

use crate::ast::Program;
use crate::config::AnalyzerOptions;
use crate::error::{Diagnostic, Diagnostics};
use tracing::debug;

/// The result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The populated symbol table.
    pub symbols: SymbolTable,
    /// Every diagnostic in traversal order.
    pub diagnostics: Diagnostics,
    /// Usage report, present only for a diagnostic-free run.
    pub usage: Option<UsageReport>,
}

impl Analysis {
    /// Check whether the program passed analysis.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Look up a symbol in exactly one scope.
    pub fn symbol(&self, scope: &str, name: &str) -> Option<&Symbol> {
        self.symbols.lookup_in(scope, name)
    }
}

/// The semantic analyzer.
pub struct Analyzer {
    /// The symbol table.
    pub symbols: SymbolTable,
    /// Collected diagnostics.
    diagnostics: Diagnostics,
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self::with_options(AnalyzerOptions::default())
    }

    /// Create a new analyzer with explicit options.
    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self {
            symbols: SymbolTable::new(),
            diagnostics: Diagnostics::new(),
            options,
        }
    }

    /// Analyze a program. Every call starts from an empty symbol table.
    pub fn analyze(&mut self, program: &Program) -> Analysis {
        self.symbols = SymbolTable::new();
        self.diagnostics = Diagnostics::new();
        debug!(
            globals = program.declarations.len(),
            functions = program.functions.len(),
            "semantic analysis started"
        );

        let global = AnalysisContext::global();
        self.analyze_declarations(&program.declarations, &global);
        for func in &program.functions {
            self.analyze_function(func, &global);
        }
        self.analyze_main(&program.main);

        if self.options.deduplicate_diagnostics {
            self.diagnostics.deduplicate();
        }

        let usage = if self.options.report_usage && self.diagnostics.is_empty() {
            Some(UsageReport::collect(&self.symbols))
        } else {
            None
        };

        debug!(
            diagnostics = self.diagnostics.len(),
            symbols = self.symbols.symbol_count(),
            "semantic analysis finished"
        );

        Analysis {
            symbols: std::mem::take(&mut self.symbols),
            diagnostics: std::mem::take(&mut self.diagnostics),
            usage,
        }
    }

    /// Record a diagnostic.
    pub fn error(&mut self, diagnostic: Diagnostic) {
        debug!(
            code = diagnostic.code_str(),
            line = diagnostic.line,
            column = diagnostic.column,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Check if any diagnostics were recorded so far.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Number of diagnostics recorded so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze a program with default options.
pub fn analyze(program: &Program) -> Analysis {
    Analyzer::new().analyze(program)
}

/// Analyze a program with explicit options.
pub fn analyze_with_options(program: &Program, options: &AnalyzerOptions) -> Analysis {
    Analyzer::with_options(options.clone()).analyze(program)
}
