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

//! Leaf tokens, type names and node identities.

use crate::error::Position;

/// A leaf token as produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token text.
    pub image: String,
    /// Line of the first character (1-indexed).
    pub line: usize,
    /// Column of the first character (1-indexed).
    pub column: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(image: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            image: image.into(),
            line,
            column,
        }
    }

    /// Get the token text.
    pub fn as_str(&self) -> &str {
        &self.image
    }

    /// Get the position of this token.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.image)
    }
}

/// A type in the CCAL language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed integer.
    Integer,
    /// Boolean value.
    Boolean,
}

impl Type {
    /// Get the source name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Integer => "integer",
            Type::Boolean => "boolean",
        }
    }

    /// Parse a type from its source name.
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "integer" => Some(Type::Integer),
            "boolean" => Some(Type::Boolean),
            _ => None,
        }
    }

    /// Check whether a literal's text is a valid value of this type.
    pub fn accepts_literal(&self, literal: &str) -> bool {
        match self {
            Type::Integer => literal.parse::<i32>().is_ok(),
            Type::Boolean => {
                literal.eq_ignore_ascii_case("true") || literal.eq_ignore_ascii_case("false")
            }
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A type written in the source (`TypeValue` node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    /// The resolved type.
    pub ty: Type,
    /// The token the type was written as.
    pub token: Token,
}

impl TypeAnnotation {
    /// Create a new type annotation.
    pub fn new(ty: Type, token: Token) -> Self {
        Self { ty, token }
    }
}

/// A stable identity for nodes that become jump targets.
///
/// Assigned once when the tree is built and never reused within one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
