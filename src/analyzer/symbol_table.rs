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

//! Symbol table for the semantic analyzer.
//!
//! The table maps scope names to scopes in creation order. Lookups from a
//! scope fall back to the global `Program` scope and nowhere else.

use super::scope::Scope;
use super::symbol::Symbol;
use crate::config::GLOBAL_SCOPE;
use indexmap::IndexMap;

/// The symbol table for semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    scopes: IndexMap<String, Scope>,
}

impl SymbolTable {
    /// Create a new symbol table holding an empty global scope.
    pub fn new() -> Self {
        let mut scopes = IndexMap::new();
        scopes.insert(GLOBAL_SCOPE.to_string(), Scope::new(GLOBAL_SCOPE));
        Self { scopes }
    }

    /// Open a scope, creating it if it does not exist yet.
    pub fn open_scope(&mut self, name: &str) {
        if !self.scopes.contains_key(name) {
            self.scopes.insert(name.to_string(), Scope::new(name));
        }
    }

    /// Replace a scope with an empty one, keeping its position.
    pub fn reset_scope(&mut self, name: &str) {
        self.scopes.insert(name.to_string(), Scope::new(name));
    }

    /// Put `scope` in place of the scope with the same name, returning the old one.
    pub fn swap_scope(&mut self, scope: Scope) -> Option<Scope> {
        self.scopes.insert(scope.name().to_string(), scope)
    }

    /// Remove a scope.
    pub fn remove_scope(&mut self, name: &str) -> Option<Scope> {
        self.scopes.shift_remove(name)
    }

    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.scopes.get(name)
    }

    pub fn has_scope(&self, name: &str) -> bool {
        self.scopes.contains_key(name)
    }

    /// Define a symbol in a scope, failing with the existing symbol on a clash.
    pub fn define(&mut self, scope: &str, symbol: Symbol) -> Result<(), Symbol> {
        self.open_scope(scope);
        match self.scopes.get_mut(scope) {
            Some(target) => target.define(symbol),
            None => Ok(()),
        }
    }

    /// Insert a symbol into a scope, replacing any previous one.
    pub fn replace(&mut self, scope: &str, symbol: Symbol) {
        self.open_scope(scope);
        if let Some(target) = self.scopes.get_mut(scope) {
            target.replace(symbol);
        }
    }

    /// Look up a symbol in exactly one scope.
    pub fn lookup_in(&self, scope: &str, name: &str) -> Option<&Symbol> {
        self.scopes.get(scope).and_then(|s| s.lookup(name))
    }

    /// Look up a symbol from `scope`, falling back to the global scope.
    pub fn lookup(&self, scope: &str, name: &str) -> Option<&Symbol> {
        self.lookup_in(scope, name)
            .or_else(|| self.lookup_in(GLOBAL_SCOPE, name))
    }

    /// Mutable variant of [`SymbolTable::lookup`].
    pub fn lookup_mut(&mut self, scope: &str, name: &str) -> Option<&mut Symbol> {
        let owner = if self.lookup_in(scope, name).is_some() {
            scope
        } else {
            GLOBAL_SCOPE
        };
        self.scopes.get_mut(owner).and_then(|s| s.lookup_mut(name))
    }

    /// Iterate over scopes in creation order.
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.values()
    }

    /// Total number of symbols over all scopes.
    pub fn symbol_count(&self) -> usize {
        self.scopes.values().map(Scope::len).sum()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for scope in self.scopes.values() {
            writeln!(f, "{}:", scope.name())?;
            if scope.is_empty() {
                writeln!(f, "  (nothing declared)")?;
            }
            for symbol in scope.symbols() {
                writeln!(f, "  {}", symbol)?;
            }
        }
        Ok(())
    }
}
