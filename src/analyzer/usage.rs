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

//! End-of-program usage report.

use super::symbol::SymbolKind;
use super::symbol_table::SymbolTable;
use tracing::debug;

/// Informational findings about declared but unused names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageReport {
    /// Functions that are never called.
    pub uncalled_functions: Vec<String>,
    /// Variables and constants that never received a value.
    pub unassigned: Vec<String>,
    /// Variables and constants that are never read.
    pub unread: Vec<String>,
}

impl UsageReport {
    /// Walk every scope in creation order and collect unused names.
    pub fn collect(symbols: &SymbolTable) -> Self {
        let mut report = Self::default();
        for scope in symbols.scopes() {
            for symbol in scope.symbols() {
                match &symbol.kind {
                    SymbolKind::Function { .. } => {
                        if !symbol.is_called {
                            report.uncalled_functions.push(symbol.ident().to_string());
                        }
                    }
                    SymbolKind::Variable(values) | SymbolKind::Constant(values) => {
                        if values.is_empty() {
                            report.unassigned.push(symbol.ident().to_string());
                        }
                        if !symbol.is_read {
                            report.unread.push(symbol.ident().to_string());
                        }
                    }
                    SymbolKind::Parameter(_) => {}
                }
            }
        }
        debug!(
            uncalled = report.uncalled_functions.len(),
            unassigned = report.unassigned.len(),
            unread = report.unread.len(),
            "usage report collected"
        );
        report
    }

    /// Check if nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.uncalled_functions.is_empty() && self.unassigned.is_empty() && self.unread.is_empty()
    }
}

impl std::fmt::Display for UsageReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.uncalled_functions.is_empty() {
            writeln!(
                f,
                "{} function(s) are declared but not used:",
                self.uncalled_functions.len()
            )?;
            writeln!(f, "{}", self.uncalled_functions.join(","))?;
        }
        if !self.unassigned.is_empty() {
            writeln!(
                f,
                "{} variable(s) have not been initialised:",
                self.unassigned.len()
            )?;
            writeln!(f, "{}", self.unassigned.join(","))?;
        }
        if !self.unread.is_empty() {
            writeln!(f, "{} variable(s) have not been accessed:", self.unread.len())?;
            writeln!(f, "{}", self.unread.join(","))?;
        }
        Ok(())
    }
}
