//! Parsing and truth table benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench truth_table
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use proptable::parser::parse;
use proptable::render::Glyphs;
use proptable::report::Report;
use proptable::table::TruthTable;

/// The first `n` letters that are not constants.
fn letters(n: usize) -> Vec<char> {
    ('A'..='Z').filter(|&c| c != 'F' && c != 'T').take(n).collect()
}

/// `A = B = C ...` over the first `n` letters: every row evaluates every letter.
fn iff_chain(n: usize) -> String {
    letters(n).iter().map(char::to_string).collect::<Vec<_>>().join(" = ")
}

/// `(A | B) & (C | D) & ...`: short-circuiting cuts most evaluations short.
fn cnf_chain(n: usize) -> String {
    letters(n)
        .chunks(2)
        .map(|pair| match pair {
            [a, b] => format!("({} | {})", a, b),
            [a] => a.to_string(),
            _ => unreachable!(),
        })
        .collect::<Vec<_>>()
        .join(" & ")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for n in [4, 12, 24] {
        let line = iff_chain(n);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::new("iff_chain", n), &line, |b, line| {
            b.iter(|| parse(line).unwrap());
        });
    }

    let nested = format!("{}A{}", "!(".repeat(300), ")".repeat(300));
    group.bench_function("nested_negations", |b| {
        b.iter(|| parse(&nested).unwrap());
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    for n in [8, 12, 16] {
        group.throughput(Throughput::Elements(1 << n));

        let parsed = parse(&iff_chain(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("iff_chain", n), &parsed, |b, parsed| {
            b.iter(|| TruthTable::build(&parsed.expr, parsed.vars).unwrap());
        });

        let parsed = parse(&cnf_chain(n)).unwrap();
        group.bench_with_input(BenchmarkId::new("cnf_chain", n), &parsed, |b, parsed| {
            b.iter(|| TruthTable::build(&parsed.expr, parsed.vars).unwrap());
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    for n in [4, 8, 12] {
        let line = cnf_chain(n);
        group.bench_with_input(BenchmarkId::new("write", n), &line, |b, line| {
            b.iter(|| {
                let report = Report::new(line, &Glyphs::UNICODE).unwrap();
                let mut out = Vec::new();
                report.write(&mut out).unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_build, bench_report);
criterion_main!(benches);
