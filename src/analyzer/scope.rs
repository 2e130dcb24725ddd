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

//! Scope management for the semantic analyzer.
//!
//! A scope is a named region (`Program`, `Main` or a function name) mapping
//! identifiers to symbols in declaration order.

use super::symbol::Symbol;
use indexmap::IndexMap;

/// A named scope in the symbol table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// The scope name.
    name: String,
    /// Symbols defined in this scope.
    symbols: IndexMap<String, Symbol>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define a symbol in this scope, failing with the existing one on a clash.
    pub fn define(&mut self, symbol: Symbol) -> Result<(), Symbol> {
        if let Some(existing) = self.symbols.get(symbol.ident()) {
            return Err(existing.clone());
        }
        self.symbols.insert(symbol.ident().to_string(), symbol);
        Ok(())
    }

    /// Insert a symbol, replacing any previous one with the same name.
    pub fn replace(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.ident().to_string(), symbol);
    }

    /// Look up a symbol in this scope.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Look up a symbol in this scope (mutable).
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Iterate over symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Token, Type};

    #[test]
    fn test_define_rejects_duplicates() {
        let mut scope = Scope::new("Main");
        let first = Symbol::variable(Token::new("x", 1, 1), Type::Integer, "Main");
        let second = Symbol::variable(Token::new("x", 2, 1), Type::Boolean, "Main");

        assert!(scope.define(first).is_ok());
        let existing = scope.define(second).unwrap_err();
        assert_eq!(existing.name.line, 1);
        assert_eq!(scope.lookup("x").map(|s| s.declared_type), Some(Type::Integer));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut scope = Scope::new("Program");
        scope.replace(Symbol::function(Token::new("f", 1, 1), Type::Integer, "Program", 1));
        scope.replace(Symbol::variable(Token::new("g", 2, 1), Type::Integer, "Program"));
        scope.replace(Symbol::function(Token::new("f", 3, 1), Type::Integer, "Program", 2));

        let names: Vec<_> = scope.symbols().map(|s| s.ident().to_string()).collect();
        assert_eq!(names, vec!["f", "g"]);
        assert_eq!(scope.lookup("f").and_then(|s| s.formal_param_count()), Some(2));
    }
}
