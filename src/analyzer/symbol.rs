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

//! Symbol definitions for the semantic analyzer.
//!
//! A [`Symbol`] records one declared name together with the textual history
//! of values assigned to it. Functions carry their ordered parameter list
//! instead of a value history.

use crate::ast::{Token, Type};

/// One recorded assignment to a variable, constant or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// The type of the value.
    pub value_type: Type,
    /// The value as source text (`5`, `true`, `y`, `a+b`).
    pub text: String,
}

impl Value {
    /// Create a new value.
    pub fn new(value_type: Type, text: impl Into<String>) -> Self {
        Self {
            value_type,
            text: text.into(),
        }
    }
}

/// A formal parameter stored on a function symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

/// The kind of a symbol, with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    /// A `var` declaration and its assigned values.
    Variable(Vec<Value>),
    /// A `const` declaration and its (single) value.
    Constant(Vec<Value>),
    /// A function parameter and any values assigned inside the body.
    Parameter(Vec<Value>),
    /// A function.
    Function {
        /// Number of formal parameters as written.
        formal_param_count: usize,
        /// Parameters in declaration order, duplicates excluded.
        parameters: Vec<Parameter>,
    },
}

/// Symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The declaring token.
    pub name: Token,
    /// The declared type (return type for functions).
    pub declared_type: Type,
    /// The scope the symbol lives in.
    pub scope: String,
    /// Whether the symbol was ever read.
    pub is_read: bool,
    /// Whether the symbol was ever called (functions) or touched by a unary operator.
    pub is_called: bool,
    /// Kind and payload.
    pub kind: SymbolKind,
}

impl Symbol {
    fn with_kind(name: Token, declared_type: Type, scope: &str, kind: SymbolKind) -> Self {
        Self {
            name,
            declared_type,
            scope: scope.to_string(),
            is_read: false,
            is_called: false,
            kind,
        }
    }

    /// Create a new variable symbol.
    pub fn variable(name: Token, declared_type: Type, scope: &str) -> Self {
        Self::with_kind(name, declared_type, scope, SymbolKind::Variable(Vec::new()))
    }

    /// Create a new constant symbol.
    pub fn constant(name: Token, declared_type: Type, scope: &str) -> Self {
        Self::with_kind(name, declared_type, scope, SymbolKind::Constant(Vec::new()))
    }

    /// Create a new parameter symbol.
    pub fn parameter(name: Token, declared_type: Type, scope: &str) -> Self {
        Self::with_kind(name, declared_type, scope, SymbolKind::Parameter(Vec::new()))
    }

    /// Create a new function symbol.
    pub fn function(
        name: Token,
        return_type: Type,
        scope: &str,
        formal_param_count: usize,
    ) -> Self {
        Self::with_kind(
            name,
            return_type,
            scope,
            SymbolKind::Function {
                formal_param_count,
                parameters: Vec::new(),
            },
        )
    }

    /// The identifier text.
    pub fn ident(&self) -> &str {
        &self.name.image
    }

    /// Get the recorded values. Always empty for functions.
    pub fn assigned_values(&self) -> &[Value] {
        match &self.kind {
            SymbolKind::Variable(values)
            | SymbolKind::Constant(values)
            | SymbolKind::Parameter(values) => values,
            SymbolKind::Function { .. } => &[],
        }
    }

    /// Append a value to the history. Ignored for functions.
    pub fn record_value(&mut self, value: Value) {
        match &mut self.kind {
            SymbolKind::Variable(values)
            | SymbolKind::Constant(values)
            | SymbolKind::Parameter(values) => values.push(value),
            SymbolKind::Function { .. } => {}
        }
    }

    /// Whether the symbol may be used as a value.
    ///
    /// Parameters are assigned by the caller and always count as having a value.
    /// Functions never do.
    pub fn has_value(&self) -> bool {
        match &self.kind {
            SymbolKind::Variable(values) | SymbolKind::Constant(values) => !values.is_empty(),
            SymbolKind::Parameter(_) => true,
            SymbolKind::Function { .. } => false,
        }
    }

    /// Check if this is a function symbol.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function { .. })
    }

    /// Check if this is a constant symbol.
    pub fn is_constant(&self) -> bool {
        matches!(self.kind, SymbolKind::Constant(_))
    }

    /// Formal parameter count of a function symbol.
    pub fn formal_param_count(&self) -> Option<usize> {
        match &self.kind {
            SymbolKind::Function {
                formal_param_count, ..
            } => Some(*formal_param_count),
            _ => None,
        }
    }

    /// Stored parameters of a function symbol.
    pub fn parameters(&self) -> &[Parameter] {
        match &self.kind {
            SymbolKind::Function { parameters, .. } => parameters,
            _ => &[],
        }
    }

    /// Short kind label used in messages and dumps.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            SymbolKind::Variable(_) => "VAR",
            SymbolKind::Constant(_) => "CONST",
            SymbolKind::Parameter(_) => "PARAM",
            SymbolKind::Function { .. } => "FUNC",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind_name(), self.name)?;
        if let SymbolKind::Function { parameters, .. } = &self.kind {
            write!(f, "(")?;
            for (i, param) in parameters.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", param.name, param.ty)?;
            }
            write!(f, ")")?;
        }
        write!(f, ": {}", self.declared_type)?;
        if !self.is_function() {
            let values: Vec<&str> = self
                .assigned_values()
                .iter()
                .map(|v| v.text.as_str())
                .collect();
            write!(f, " = [{}]", values.join(", "))?;
        }
        if self.is_read {
            write!(f, " read")?;
        }
        if self.is_called {
            write!(f, " called")?;
        }
        Ok(())
    }
}
