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

//! Performance benchmarks for CCAL-IR.
//!
//! Run with: cargo bench
//!
//! Results are saved to target/criterion/ with HTML reports.

use ccal_ir::analyzer::analyze;
use ccal_ir::ast::{AstBuilder, BinaryOp, Program, Statement, Type};
use ccal_ir::codegen::generate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Benchmark Inputs
// ============================================================================

/// A program with `functions` small functions and a main that calls each of
/// them inside a loop with a branch.
fn build_input(functions: usize) -> Program {
    let b = AstBuilder::new();

    let funcs = (0..functions)
        .map(|n| {
            b.function(
                Type::Integer,
                &format!("f{}", n),
                vec![b.param("p", Type::Integer)],
                vec![b.var("r", Type::Integer)],
                vec![b.assign(
                    "r",
                    b.binary(
                        BinaryOp::Subtract,
                        b.binary(BinaryOp::Add, b.variable("p"), b.digit(n as i64)),
                        b.digit(1),
                    ),
                )],
                Some(b.variable("r")),
            )
        })
        .collect();

    let body: Vec<Statement> = (0..functions)
        .map(|n| {
            b.if_else(
                b.binary(BinaryOp::Less, b.variable("i"), b.digit(n as i64)),
                vec![b.assign("i", b.call_expr(&format!("f{}", n), &["i"]))],
                vec![b.skip()],
            )
        })
        .collect();

    b.program(
        vec![b.constant("limit", Type::Integer, "1000")],
        funcs,
        b.main(
            vec![b.var("i", Type::Integer)],
            vec![
                b.assign("i", b.digit(0)),
                b.while_loop(
                    b.binary(BinaryOp::Less, b.variable("i"), b.variable("limit")),
                    body,
                ),
            ],
        ),
    )
}

const SIZES: [(&str, usize); 3] = [("small", 4), ("medium", 64), ("large", 512)];

// ============================================================================
// Analyzer Benchmarks
// ============================================================================

fn bench_analyzer(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer");

    for (name, functions) in SIZES {
        let program = build_input(functions);
        group.throughput(Throughput::Elements(functions as u64));
        group.bench_with_input(BenchmarkId::new("analyze", name), &program, |b, program| {
            b.iter(|| analyze(black_box(program)))
        });
    }

    group.finish();
}

// ============================================================================
// Codegen Benchmarks
// ============================================================================

fn bench_codegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("codegen");

    for (name, functions) in SIZES {
        let program = build_input(functions);
        let analysis = analyze(&program);
        group.throughput(Throughput::Elements(functions as u64));
        group.bench_with_input(
            BenchmarkId::new("generate", name),
            &(program, analysis),
            |b, (program, analysis)| b.iter(|| generate(black_box(program), black_box(analysis))),
        );
    }

    group.finish();
}

// ============================================================================
// Full Pipeline Benchmarks
// ============================================================================

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");

    for (name, functions) in SIZES {
        let program = build_input(functions);
        group.throughput(Throughput::Elements(functions as u64));
        group.bench_with_input(BenchmarkId::new("full", name), &program, |b, program| {
            b.iter(|| ccal_ir::compile(black_box(program)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyzer, bench_codegen, bench_compile);

criterion_main!(benches);
