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

//! Expression AST nodes.

use super::Token;
use crate::error::Position;

/// An expression in the CCAL language.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A variable, constant or parameter reference.
    Variable(Token),

    /// An integer literal.
    Digit(Token),

    /// A `true` / `false` literal.
    Boolean(Token),

    /// Unary minus applied to an identifier (`-x`).
    Negate(Token),

    /// Unary plus applied to an identifier (`+x`).
    Positive(Token),

    /// Logical negation (`~e`).
    Not(Box<Expr>),

    /// A binary operation.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// A function call in value position.
    Call(FunctionCall),
}

impl Expr {
    /// Position of the leftmost token of this expression.
    pub fn position(&self) -> Position {
        match self {
            Expr::Variable(token)
            | Expr::Digit(token)
            | Expr::Boolean(token)
            | Expr::Negate(token)
            | Expr::Positive(token) => token.position(),
            Expr::Not(inner) => inner.position(),
            Expr::Binary { left, .. } => left.position(),
            Expr::Call(call) => call.name.position(),
        }
    }

    /// Check if this expression is a binary operation.
    pub fn is_binary(&self) -> bool {
        matches!(self, Expr::Binary { .. })
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Variable(token) | Expr::Digit(token) | Expr::Boolean(token) => {
                write!(f, "{}", token)
            }
            Expr::Negate(token) => write!(f, "-{}", token),
            Expr::Positive(token) => write!(f, "+{}", token),
            Expr::Not(inner) if inner.is_binary() => write!(f, "~({})", inner),
            Expr::Not(inner) => write!(f, "~{}", inner),
            Expr::Binary { op, left, right } => {
                write_operand(f, left)?;
                write!(f, "{}", op)?;
                write_operand(f, right)
            }
            Expr::Call(call) => write!(f, "{}", call),
        }
    }
}

fn write_operand(f: &mut std::fmt::Formatter<'_>, operand: &Expr) -> std::fmt::Result {
    if operand.is_binary() {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Subtract,

    // Comparison
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Get a string representation of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Check if this is an arithmetic operator.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Subtract)
    }

    /// Check if this is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::Less
                | BinaryOp::LessEqual
                | BinaryOp::Greater
                | BinaryOp::GreaterEqual
        )
    }

    /// Check if this is a logical operator.
    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }

    /// The type this operator produces.
    pub fn result_type(&self) -> super::Type {
        if self.is_arithmetic() {
            super::Type::Integer
        } else {
            super::Type::Boolean
        }
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A function call (statement or expression).
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The callee.
    pub name: Token,
    /// The arguments, identifiers only.
    pub args: Vec<Arg>,
}

impl FunctionCall {
    /// Create a new function call.
    pub fn new(name: Token, args: Vec<Arg>) -> Self {
        Self { name, args }
    }
}

impl std::fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg.name)?;
        }
        write!(f, ")")
    }
}

/// A single call argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    /// The identifier passed.
    pub name: Token,
}
