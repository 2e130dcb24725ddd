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

//! Label and jump management for code generation.
//!
//! This module handles:
//! - Label allocation (`L1`, `L2`, ...) in creation order
//! - Jump-target registration for functions, branches and loops
//! - Pending jumps, patched once every block has a label

use super::emit::EmitHelpers;
use super::tac::{BlockId, Label, Op, Quad};
use super::CodeGenerator;
use crate::error::CompileError;
use tracing::trace;

/// A `goto` whose target label is filled in by [`LabelManager::resolve_labels`].
#[derive(Debug, Clone)]
pub struct PendingJump {
    /// Block holding the placeholder.
    pub block: Label,
    /// Index of the placeholder within the block.
    pub index: usize,
    /// Where the jump should go.
    pub target: BlockId,
}

/// Extension trait for label management.
pub trait LabelManager {
    /// Allocate the next label and open an empty block for it.
    fn make_label(&mut self) -> Label;

    /// Allocate a label for a jump target and register it.
    fn label_for(&mut self, id: BlockId) -> Label;

    /// Append a `goto` to `label` that jumps to `target`.
    fn emit_goto(&mut self, label: &str, target: BlockId);

    /// Patch every pending jump and seal empty blocks.
    fn resolve_labels(&mut self) -> Result<(), CompileError>;
}

impl LabelManager for CodeGenerator {
    fn make_label(&mut self) -> Label {
        let label = format!("{}{}", self.options.label_prefix, self.label_counter);
        self.label_counter += 1;
        self.program.blocks.entry(label.clone()).or_default();
        label
    }

    fn label_for(&mut self, id: BlockId) -> Label {
        let label = self.make_label();
        trace!(block = %id, %label, "registered jump target");
        self.program.jump_targets.insert(id, label.clone());
        label
    }

    fn emit_goto(&mut self, label: &str, target: BlockId) {
        let index = self.emit(label, Quad::goto_placeholder());
        self.pending_jumps.push(PendingJump {
            block: label.to_string(),
            index,
            target,
        });
    }

    fn resolve_labels(&mut self) -> Result<(), CompileError> {
        for jump in std::mem::take(&mut self.pending_jumps) {
            let target = self
                .program
                .jump_targets
                .get(&jump.target)
                .cloned()
                .ok_or_else(|| CompileError::UnresolvedJump(jump.target.to_string()))?;

            let quad = self
                .program
                .blocks
                .get_mut(&jump.block)
                .and_then(|quads| quads.get_mut(jump.index))
                .ok_or_else(|| CompileError::UnresolvedJump(jump.target.to_string()))?;
            quad.a1 = target;
        }

        for (label, quads) in self.program.blocks.iter_mut() {
            if quads.is_empty() {
                quads.push(Quad::bare(Op::Label(label.clone())));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_sequential() {
        let mut gen = CodeGenerator::new();
        assert_eq!(gen.make_label(), "L1");
        assert_eq!(gen.label_for(BlockId::Main), "L2");
        assert_eq!(gen.program.label_of(&BlockId::Main), Some("L2"));
        assert_eq!(gen.program.labels().collect::<Vec<_>>(), vec!["L1", "L2"]);
    }

    #[test]
    fn test_resolve_patches_gotos_and_seals_blocks() {
        let mut gen = CodeGenerator::new();
        let from = gen.make_label();
        gen.label_for(BlockId::Main);
        gen.emit_goto(&from, BlockId::Main);

        assert!(gen.resolve_labels().is_ok());
        assert_eq!(gen.program.block("L1").map(|q| q[0].to_string()), Some("goto L2".to_string()));
        assert_eq!(gen.program.block("L2").map(|q| q[0].to_string()), Some("L2".to_string()));
    }

    #[test]
    fn test_unregistered_target() {
        let mut gen = CodeGenerator::new();
        let from = gen.make_label();
        gen.emit_goto(&from, BlockId::Function("ghost".to_string()));

        assert!(matches!(
            gen.resolve_labels(),
            Err(CompileError::UnresolvedJump(target)) if target == "function ghost"
        ));
    }
}
