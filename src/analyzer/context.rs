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

//! Analysis context for the semantic analyzer.
//!
//! The context is passed down the traversal by reference. Entering `main` or
//! a function body creates a child context, so the enclosing scope is
//! restored on every exit path without explicit bookkeeping.

use crate::ast::Type;
use crate::config::{ENTRY_SCOPE, GLOBAL_SCOPE};

/// Context for semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisContext {
    /// The scope new declarations go into and lookups start from.
    pub current_scope: String,
    /// The declared return type of the enclosing function.
    pub return_type: Option<Type>,
}

impl AnalysisContext {
    /// Context for global declarations.
    pub fn global() -> Self {
        Self {
            current_scope: GLOBAL_SCOPE.to_string(),
            return_type: None,
        }
    }

    /// Context for the `main` block.
    pub fn entry() -> Self {
        Self {
            current_scope: ENTRY_SCOPE.to_string(),
            return_type: None,
        }
    }

    /// Context for a function body.
    pub fn function(name: &str, return_type: Type) -> Self {
        Self {
            current_scope: name.to_string(),
            return_type: Some(return_type),
        }
    }

    pub fn scope(&self) -> &str {
        &self.current_scope
    }
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::global()
    }
}
