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

//! Emit helper methods for code generation.

use super::tac::Quad;
use super::CodeGenerator;
use tracing::trace;

/// Extension trait for low-level instruction emission.
pub trait EmitHelpers {
    /// Append an instruction to a block and return its index there.
    fn emit(&mut self, label: &str, quad: Quad) -> usize;

    /// Allocate a fresh temporary (`t1`, `t2`, ...).
    fn new_temp(&mut self) -> String;
}

impl EmitHelpers for CodeGenerator {
    fn emit(&mut self, label: &str, quad: Quad) -> usize {
        trace!(%label, %quad, "emit");
        let quads = self.program.blocks.entry(label.to_string()).or_default();
        quads.push(quad);
        quads.len() - 1
    }

    fn new_temp(&mut self) -> String {
        self.temp_counter += 1;
        format!("{}{}", self.options.temp_prefix, self.temp_counter)
    }
}
