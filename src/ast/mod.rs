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

//! Abstract Syntax Tree (AST) definitions for CCAL.
//!
//! This module defines the data structures that represent a parsed CCAL
//! program: global declarations, a list of typed functions and a `main`
//! block. Trees are produced by an external parser or by [`AstBuilder`].

mod builder;
mod expr;
mod stmt;
mod types;

pub use builder::AstBuilder;
pub use expr::*;
pub use stmt::*;
pub use types::*;

/// A complete CCAL program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Global (Program-scope) declarations.
    pub declarations: Vec<Declaration>,
    /// Functions in declaration order.
    pub functions: Vec<Function>,
    /// The entry block.
    pub main: Main,
}

impl Program {
    /// Find a function by name. The last declaration wins.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().rev().find(|f| f.name.image == name)
    }
}

/// The `main begin ... end` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Main {
    pub id: NodeId,
    pub declarations: Vec<Declaration>,
    pub statements: Vec<Statement>,
}

/// A function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub id: NodeId,
    /// The declared return type.
    pub return_type: TypeAnnotation,
    /// The function name.
    pub name: Token,
    /// Formal parameters in order.
    pub params: Vec<Param>,
    /// Local declarations.
    pub declarations: Vec<Declaration>,
    /// Body statements.
    pub statements: Vec<Statement>,
    /// The mandatory trailing return.
    pub return_stmt: ReturnStatement,
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Token,
    pub param_type: TypeAnnotation,
}
