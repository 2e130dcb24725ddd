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

//! Three-address code data model.
//!
//! A [`TacProgram`] maps labels (`L0`, `L1`, ...) to instruction lists in
//! block-creation order. Jumps name their target label in `a1`.

use crate::ast::{BinaryOp, NodeId};
use indexmap::IndexMap;

/// A block label such as `L3`.
pub type Label = String;

/// The stable identity of a jump target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockId {
    /// The `main` block.
    Main,
    /// A function entry, by name.
    Function(String),
    /// The true branch of an if.
    Then(NodeId),
    /// The false branch of an if.
    Else(NodeId),
    /// Where both branches of an if continue.
    Join(NodeId),
    /// The body of a while loop.
    LoopBody(NodeId),
    /// Where a while loop continues after it finishes.
    LoopExit(NodeId),
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockId::Main => write!(f, "main"),
            BlockId::Function(name) => write!(f, "function {}", name),
            BlockId::Then(id) => write!(f, "then {}", id),
            BlockId::Else(id) => write!(f, "else {}", id),
            BlockId::Join(id) => write!(f, "join {}", id),
            BlockId::LoopBody(id) => write!(f, "loop body {}", id),
            BlockId::LoopExit(id) => write!(f, "loop exit {}", id),
        }
    }
}

/// The operator of a quadruple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `=`: copy, or constant initialisation with a type in `a2`.
    Copy,
    /// An arithmetic, comparison or logical operator.
    Binary(BinaryOp),
    /// `~<op>` for a negated operation, `~` for a negated operand.
    Not(Option<BinaryOp>),
    /// `functionCall callee firstArg`
    FunctionCall,
    /// `goto label`
    Goto,
    /// `if cond`, followed by the true and false gotos.
    If,
    /// `while cond`, followed by the body and exit gotos.
    While,
    /// `return value`
    Return,
    /// `Skip`
    Skip,
    /// End-of-block sentinel carrying the block's own label.
    Label(Label),
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Copy => write!(f, "="),
            Op::Binary(op) => write!(f, "{}", op),
            Op::Not(Some(op)) => write!(f, "~{}", op),
            Op::Not(None) => write!(f, "~"),
            Op::FunctionCall => write!(f, "functionCall"),
            Op::Goto => write!(f, "goto"),
            Op::If => write!(f, "if"),
            Op::While => write!(f, "while"),
            Op::Return => write!(f, "return"),
            Op::Skip => write!(f, "Skip"),
            Op::Label(label) => write!(f, "{}", label),
        }
    }
}

/// A three-address instruction. Unused fields are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    pub op: Op,
    pub a1: String,
    pub a2: String,
    pub a3: String,
}

impl Quad {
    /// Create a new instruction.
    pub fn new(
        op: Op,
        a1: impl Into<String>,
        a2: impl Into<String>,
        a3: impl Into<String>,
    ) -> Self {
        Self {
            op,
            a1: a1.into(),
            a2: a2.into(),
            a3: a3.into(),
        }
    }

    /// Create an instruction without operands.
    pub fn bare(op: Op) -> Self {
        Self::new(op, "", "", "")
    }

    /// `= target value`
    pub fn copy(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(Op::Copy, target, value, "")
    }

    /// A `goto` whose target is filled in later.
    pub fn goto_placeholder() -> Self {
        Self::bare(Op::Goto)
    }

    pub fn is_goto(&self) -> bool {
        self.op == Op::Goto
    }

    /// The non-empty operand fields in order.
    pub fn operands(&self) -> impl Iterator<Item = &str> {
        [self.a1.as_str(), self.a2.as_str(), self.a3.as_str()]
            .into_iter()
            .filter(|field| !field.is_empty())
    }
}

impl std::fmt::Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.op)?;
        for operand in self.operands() {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}

/// The generated program: labelled blocks and the jump-target table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TacProgram {
    /// Instruction lists by label, in block-creation order.
    pub blocks: IndexMap<Label, Vec<Quad>>,
    /// The label each jump target received.
    pub jump_targets: IndexMap<BlockId, Label>,
}

impl TacProgram {
    /// Get the instructions of a block.
    pub fn block(&self, label: &str) -> Option<&[Quad]> {
        self.blocks.get(label).map(Vec::as_slice)
    }

    /// Get the label assigned to a jump target.
    pub fn label_of(&self, id: &BlockId) -> Option<&str> {
        self.jump_targets.get(id).map(String::as_str)
    }

    /// Get the instructions of a jump target's block.
    pub fn target_block(&self, id: &BlockId) -> Option<&[Quad]> {
        self.label_of(id).and_then(|label| self.block(label))
    }

    /// Iterate over labels in block-creation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    /// Every `goto` target in the program.
    pub fn goto_targets(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .values()
            .flatten()
            .filter(|quad| quad.is_goto())
            .map(|quad| quad.a1.as_str())
    }

    /// Total number of instructions.
    pub fn quad_count(&self) -> usize {
        self.blocks.values().map(Vec::len).sum()
    }
}

impl std::fmt::Display for TacProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.blocks.is_empty() {
            return writeln!(f, "Nothing declared");
        }
        for (label, quads) in &self.blocks {
            writeln!(f, "{}", label)?;
            for quad in quads {
                writeln!(f, "  {}", quad)?;
            }
        }
        Ok(())
    }
}
