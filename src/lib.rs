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

//! CCAL-IR Library
//!
//! Semantic analysis and three-address code generation for CCAL programs.
//! The input is an AST built by a parser or by [`ast::AstBuilder`].
//!
//! # Modules
//!
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`analyzer`] - Scoped symbol table, type checking and value tracking
//! - [`codegen`] - Three-address code generation
//! - [`config`] - Pipeline options and well-known scope names
//! - [`error`] - Diagnostics and pipeline errors
//!
//! # Example
//!
//! ```
//! use ccal_ir::ast::{AstBuilder, BinaryOp, Type};
//!
//! let b = AstBuilder::new();
//! let program = b.program(
//!     vec![b.constant("limit", Type::Integer, "3")],
//!     vec![],
//!     b.main(
//!         vec![b.var("i", Type::Integer)],
//!         vec![
//!             b.assign("i", b.digit(0)),
//!             b.while_loop(
//!                 b.binary(BinaryOp::Less, b.variable("i"), b.variable("limit")),
//!                 vec![b.assign("i", b.binary(BinaryOp::Add, b.variable("i"), b.digit(1)))],
//!             ),
//!         ],
//!     ),
//! );
//!
//! let compilation = ccal_ir::compile(&program).expect("program is valid");
//! assert!(compilation.analysis.is_ok());
//! assert_eq!(compilation.tac.labels().next(), Some("L0"));
//! ```

pub mod analyzer;
pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use analyzer::Analysis;
pub use ast::{Program, Type};
pub use codegen::TacProgram;
pub use config::Options;
pub use error::{format_diagnostic, CompileError, Diagnostic, ErrorCode, Result};

/// The version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the library.
pub const NAME: &str = "CCAL-IR";

/// Everything produced for a program that passed analysis.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// Symbol table and usage report.
    pub analysis: Analysis,
    /// The generated three-address code.
    pub tac: TacProgram,
}

/// Analyze a program and generate its three-address code.
///
/// Code is only generated when analysis reports no diagnostics. Otherwise
/// the diagnostics are returned in [`CompileError::Semantic`].
///
/// # Example
///
/// ```
/// use ccal_ir::ast::AstBuilder;
/// use ccal_ir::CompileError;
///
/// let b = AstBuilder::new();
/// let program = b.program(vec![], vec![], b.main(vec![], vec![b.assign("x", b.digit(1))]));
///
/// match ccal_ir::compile(&program) {
///     Err(CompileError::Semantic(diagnostics)) => assert_eq!(diagnostics.len(), 1),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
pub fn compile(program: &Program) -> Result<Compilation> {
    compile_with_options(program, &Options::default())
}

/// Analyze and generate with explicit options.
pub fn compile_with_options(program: &Program, options: &Options) -> Result<Compilation> {
    // Analyze
    let analysis = analyzer::analyze_with_options(program, &options.analyzer);
    if !analysis.is_ok() {
        return Err(CompileError::Semantic(analysis.diagnostics.into_vec()));
    }

    // Generate code
    let tac = codegen::generate_with_options(program, &analysis, &options.generator)?;

    Ok(Compilation { analysis, tac })
}
