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

//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use ccal_ir::analyzer::Analysis;
use ccal_ir::ast::{AstBuilder, BinaryOp, Program, Type};
use ccal_ir::codegen::{Quad, TacProgram};
use ccal_ir::ErrorCode;

/// A program touching every construct:
///
/// ```text
/// const max: integer = 10;
/// var total: integer;
///
/// integer double(n: integer) {
///     var r: integer;
///     r = n + n;
///     return (r);
/// }
///
/// main {
///     var i: integer;
///     var done: boolean;
///     i = 0; total = 0; done = false;
///     while (i < max) { total = double(i); i = i + 1; }
///     if (~(total == max)) { done = true; } else { skip; }
/// }
/// ```
pub fn sample_program() -> Program {
    let b = AstBuilder::new();
    let double = b.function(
        Type::Integer,
        "double",
        vec![b.param("n", Type::Integer)],
        vec![b.var("r", Type::Integer)],
        vec![b.assign(
            "r",
            b.binary(BinaryOp::Add, b.variable("n"), b.variable("n")),
        )],
        Some(b.variable("r")),
    );

    b.program(
        vec![
            b.constant("max", Type::Integer, "10"),
            b.var("total", Type::Integer),
        ],
        vec![double],
        b.main(
            vec![b.var("i", Type::Integer), b.var("done", Type::Boolean)],
            vec![
                b.assign("i", b.digit(0)),
                b.assign("total", b.digit(0)),
                b.assign("done", b.boolean(false)),
                b.while_loop(
                    b.binary(BinaryOp::Less, b.variable("i"), b.variable("max")),
                    vec![
                        b.assign("total", b.call_expr("double", &["i"])),
                        b.assign("i", b.binary(BinaryOp::Add, b.variable("i"), b.digit(1))),
                    ],
                ),
                b.if_else(
                    b.not(b.binary(
                        BinaryOp::Equal,
                        b.variable("total"),
                        b.variable("max"),
                    )),
                    vec![b.assign("done", b.boolean(true))],
                    vec![b.skip()],
                ),
            ],
        ),
    )
}

/// The diagnostic codes of an analysis, in order.
pub fn codes(analysis: &Analysis) -> Vec<ErrorCode> {
    analysis.diagnostics.iter().map(|d| d.code).collect()
}

/// Check if an analysis reported a specific code.
pub fn has_error_code(analysis: &Analysis, code: ErrorCode) -> bool {
    analysis.diagnostics.iter().any(|d| d.code == code)
}

/// The rendered instructions of one block.
pub fn block_text(tac: &TacProgram, label: &str) -> Vec<String> {
    tac.block(label)
        .map(|quads| quads.iter().map(Quad::to_string).collect())
        .unwrap_or_default()
}

/// The recorded value texts of a symbol.
pub fn value_texts(analysis: &Analysis, scope: &str, name: &str) -> Vec<String> {
    analysis
        .symbol(scope, name)
        .map(|s| s.assigned_values().iter().map(|v| v.text.clone()).collect())
        .unwrap_or_default()
}
