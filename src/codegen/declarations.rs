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

//! Declaration lowering for code generation.

use super::emit::EmitHelpers;
use super::tac::{Op, Quad};
use super::CodeGenerator;
use crate::ast::{ConstDecl, Declaration};

/// Extension trait for declaration lowering.
pub trait DeclarationEmitter {
    /// Lower declarations into `label`.
    fn lower_declarations(&mut self, declarations: &[Declaration], label: &str);

    /// Lower a constant as `= name type value`.
    fn lower_const_decl(&mut self, decl: &ConstDecl, label: &str);
}

impl DeclarationEmitter for CodeGenerator {
    fn lower_declarations(&mut self, declarations: &[Declaration], label: &str) {
        for decl in declarations {
            // Variables only exist in the symbol table.
            if let Declaration::Const(decl) = decl {
                self.lower_const_decl(decl, label);
            }
        }
    }

    fn lower_const_decl(&mut self, decl: &ConstDecl, label: &str) {
        self.emit(
            label,
            Quad::new(
                Op::Copy,
                decl.name.image.clone(),
                decl.const_type.ty.name(),
                decl.value.image.to_lowercase(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstBuilder, Type};

    #[test]
    fn test_only_constants_emit() {
        let b = AstBuilder::new();
        let mut gen = CodeGenerator::new();
        gen.lower_declarations(
            &[
                b.var("x", Type::Integer),
                b.constant("k", Type::Boolean, "TRUE"),
            ],
            "L0",
        );
        let quads: Vec<String> = gen
            .program
            .block("L0")
            .map(|quads| quads.iter().map(Quad::to_string).collect())
            .unwrap_or_default();
        assert_eq!(quads, vec!["= k boolean true"]);
    }
}
