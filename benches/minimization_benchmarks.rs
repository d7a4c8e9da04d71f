//! Benchmarks for table construction and the minimizers
//!
//! Each expression is benchmarked on a fresh table so memoized forms do not
//! hide the cost of computing them.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logic_evaluator::{FormKind, TruthTable};

/// Expressions of increasing width
const CASES: &[(&str, &str)] = &[
    ("parity3", "(A ^ B) ^ C"),
    ("carry3", "(A * B) + (C * (A ^ B))"),
    ("mux4", "(!s * a) + (s * b) + (a * b * c)"),
    ("mixed5", "(a * !b) + (b * c * !d) + (!a * d * e) + (c ^ e)"),
    ("parity6", "a ^ b ^ c ^ d ^ e ^ f"),
    ("chain8", "(a -> b) * (b -> c) * (c -> d) * (d -> e) * (e -> f) * (f -> g) * (g -> h)"),
];

fn bench_table_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");
    for (name, expr) in CASES {
        let rows = TruthTable::from_expression(expr).map(|t| t.rows().len()).unwrap_or(0);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), expr, |b, expr| {
            b.iter(|| TruthTable::from_expression(black_box(expr)))
        });
    }
    group.finish();
}

fn bench_quine_mc_cluskey(c: &mut Criterion) {
    let mut group = c.benchmark_group("quine_mc_cluskey");
    for (name, expr) in CASES {
        for form in FormKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(form.abbreviation(), name),
                expr,
                |b, expr| {
                    b.iter_with_setup(
                        || TruthTable::from_expression(expr),
                        |table| table.map(|t| t.quine_mc_cluskey(black_box(form)).len()),
                    )
                },
            );
        }
    }
    group.finish();
}

fn bench_karnaugh(c: &mut Criterion) {
    let mut group = c.benchmark_group("karnaugh");
    for (name, expr) in CASES {
        group.bench_with_input(BenchmarkId::from_parameter(name), expr, |b, expr| {
            b.iter_with_setup(
                || TruthTable::from_expression(expr),
                |table| {
                    table.map(|t| {
                        t.karnaugh_groups(black_box(FormKind::Disjunctive))
                            .map(|f| f.len())
                    })
                },
            )
        });
    }
    group.finish();
}

fn bench_calculative(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculative");
    for (name, expr) in CASES.iter().take(4) {
        group.bench_with_input(BenchmarkId::from_parameter(name), expr, |b, expr| {
            b.iter_with_setup(
                || TruthTable::from_expression(expr),
                |table| {
                    table.map(|t| {
                        t.calculative_reduction(black_box(FormKind::Disjunctive))
                            .map(|f| f.len())
                    })
                },
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_table_construction,
    bench_quine_mc_cluskey,
    bench_karnaugh,
    bench_calculative
);
criterion_main!(benches);
