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

//! Statement and declaration AST nodes.

use super::{Expr, FunctionCall, NodeId, Token, TypeAnnotation};

/// A statement in the CCAL language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target := value;`
    Assignment(Assignment),

    /// A function call as a statement.
    Call(FunctionCall),

    /// A `begin ... end` block.
    Block(Vec<Statement>),

    /// `if cond begin ... end else begin ... end`
    If(IfStatement),

    /// `while cond begin ... end`
    While(WhileStatement),

    /// `skip;`
    Skip(Token),
}

/// An assignment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The variable being assigned.
    pub target: Token,
    /// The right-hand side.
    pub value: Expr,
}

/// An if statement. The else branch is mandatory in CCAL.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub id: NodeId,
    pub condition: Expr,
    pub then_block: Vec<Statement>,
    pub else_block: Vec<Statement>,
}

/// A while loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub id: NodeId,
    pub condition: Expr,
    pub body: Vec<Statement>,
}

/// A declaration in a declaration list.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `var name: type;`
    Var(VarDecl),
    /// `const name: type = literal;`
    Const(ConstDecl),
}

impl Declaration {
    /// The declared name.
    pub fn name(&self) -> &Token {
        match self {
            Declaration::Var(decl) => &decl.name,
            Declaration::Const(decl) => &decl.name,
        }
    }
}

/// A variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Token,
    pub var_type: TypeAnnotation,
}

/// A constant declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub name: Token,
    pub const_type: TypeAnnotation,
    /// The literal as written (`5`, `-3`, `true`).
    pub value: Token,
}

/// The trailing `return` of a function body.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The returned expression, absent for `return ();`.
    pub value: Option<Expr>,
    /// The `return` keyword.
    pub token: Token,
}
