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

//! Pipeline configuration and well-known names.

/// Name of the outermost scope holding global declarations and functions.
pub const GLOBAL_SCOPE: &str = "Program";

/// Name of the scope opened for the `main` block.
pub const ENTRY_SCOPE: &str = "Main";

/// Options for the semantic analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Report identical diagnostics (same position and message) only once.
    pub deduplicate_diagnostics: bool,
    /// Produce the end-of-program usage report when analysis is clean.
    pub report_usage: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            deduplicate_diagnostics: true,
            report_usage: true,
        }
    }
}

/// Options for the three-address code generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Prefix for block labels (`L0`, `L1`, ...).
    pub label_prefix: String,
    /// Prefix for expression temporaries (`t1`, `t2`, ...).
    pub temp_prefix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            label_prefix: "L".to_string(),
            temp_prefix: "t".to_string(),
        }
    }
}

/// Options for the whole pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub analyzer: AnalyzerOptions,
    pub generator: GeneratorOptions,
}
