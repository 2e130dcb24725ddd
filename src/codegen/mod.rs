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

//! Three-address code generation for CCAL.
//!
//! This module lowers an analyzed AST into labelled blocks of quadruples.
//! It handles:
//! - Label allocation (`L0` for globals, then functions, then `main`)
//! - Expression lowering into temporaries
//! - Control flow blocks for if and while
//! - Calls and returns
//!
//! Every lowering step takes the label it starts in and returns the label
//! where lowering continues, so nested constructs never leave a stale
//! current block behind.

mod assignments;
mod control_flow;
mod declarations;
mod emit;
mod expressions;
mod functions;
mod labels;
pub mod tac;

pub use assignments::AssignmentEmitter;
pub use control_flow::ControlFlowEmitter;
pub use declarations::DeclarationEmitter;
pub use emit::EmitHelpers;
pub use expressions::ExpressionEmitter;
pub use functions::FunctionEmitter;
pub use labels::{LabelManager, PendingJump};
pub use tac::{BlockId, Label, Op, Quad, TacProgram};

use crate::analyzer::Analysis;
use crate::ast::{Program, Statement};
use crate::config::GeneratorOptions;
use crate::error::{CompileError, Result};
use tracing::debug;

/// The three-address code generator.
pub struct CodeGenerator {
    /// The program being built.
    program: TacProgram,
    /// Next label number. `0` is reserved for globals.
    label_counter: u32,
    /// Last temporary number handed out.
    temp_counter: u32,
    /// Jumps to patch once every target has a label.
    pending_jumps: Vec<PendingJump>,
    options: GeneratorOptions,
}

impl CodeGenerator {
    /// Create a new code generator.
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    /// Create a new code generator with explicit options.
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            program: TacProgram::default(),
            label_counter: 1,
            temp_counter: 0,
            pending_jumps: Vec::new(),
            options,
        }
    }

    /// Generate code for a program that passed analysis.
    ///
    /// Refuses to run when the analysis reported diagnostics.
    pub fn generate(&mut self, program: &Program, analysis: &Analysis) -> Result<TacProgram> {
        if !analysis.is_ok() {
            return Err(CompileError::Semantic(analysis.diagnostics.as_slice().to_vec()));
        }

        self.program = TacProgram::default();
        self.label_counter = 1;
        self.temp_counter = 0;
        self.pending_jumps.clear();

        debug!(
            functions = program.functions.len(),
            "code generation started"
        );

        let global_label = format!("{}0", self.options.label_prefix);
        self.lower_declarations(&program.declarations, &global_label);

        // Every callee needs a label before any call site is lowered.
        let entries: Vec<Label> = program
            .functions
            .iter()
            .map(|func| self.label_for(BlockId::Function(func.name.image.clone())))
            .collect();
        let main_entry = self.label_for(BlockId::Main);

        for (func, entry) in program.functions.iter().zip(&entries) {
            self.lower_function(func, entry);
        }
        self.lower_main(&program.main, &main_entry);

        self.resolve_labels()?;

        debug!(
            blocks = self.program.blocks.len(),
            quads = self.program.quad_count(),
            "code generation finished"
        );

        Ok(std::mem::take(&mut self.program))
    }

    /// Lower statements starting in `label`. Returns the label lowering ends in.
    pub(crate) fn lower_statements(&mut self, statements: &[Statement], label: &str) -> Label {
        let mut current = label.to_string();
        for stmt in statements {
            current = self.lower_statement(stmt, &current);
        }
        current
    }

    fn lower_statement(&mut self, stmt: &Statement, label: &str) -> Label {
        match stmt {
            Statement::Assignment(assign) => {
                self.lower_assignment(assign, label);
                label.to_string()
            }
            Statement::Call(call) => {
                self.lower_call(call, label);
                label.to_string()
            }
            Statement::Block(statements) => self.lower_statements(statements, label),
            Statement::If(if_stmt) => self.lower_if(if_stmt, label),
            Statement::While(while_stmt) => self.lower_while(while_stmt, label),
            Statement::Skip(_) => {
                self.emit(label, Quad::bare(Op::Skip));
                label.to_string()
            }
        }
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate three-address code for an analyzed program.
pub fn generate(program: &Program, analysis: &Analysis) -> Result<TacProgram> {
    CodeGenerator::new().generate(program, analysis)
}

/// Generate three-address code with explicit options.
pub fn generate_with_options(
    program: &Program,
    analysis: &Analysis,
    options: &GeneratorOptions,
) -> Result<TacProgram> {
    CodeGenerator::with_options(options.clone()).generate(program, analysis)
}
