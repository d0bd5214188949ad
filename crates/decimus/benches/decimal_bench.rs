//! Benchmarks for digit-string arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use decimus::prelude::*;

/// Generates a literal with `len` digits and a fractional tail.
fn literal(len: usize) -> String {
    let mut text: String = (0..len).map(|i| char::from(b'0' + (i % 9 + 1) as u8)).collect();
    text.push_str(".25");
    text
}

fn operand(len: usize) -> Decimal {
    literal(len).parse().unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [8, 64, 256, 1024] {
        let text = literal(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(text.parse::<Decimal>().unwrap()));
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [8, 64, 256, 1024] {
        let lhs = operand(size);
        let rhs = operand(size / 2 + 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&lhs + &rhs));
        });
    }

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    for size in [8, 64, 256] {
        let lhs = operand(size);
        let rhs = operand(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&lhs * &rhs));
        });
    }

    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    for size in [8, 64, 256] {
        let lhs = operand(size);
        let rhs = operand(size / 2 + 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(lhs.try_div(&rhs).unwrap()));
        });
    }

    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    for size in [8, 32, 128] {
        let value = operand(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(value.sqrt().unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_add,
    bench_mul,
    bench_div,
    bench_sqrt
);
criterion_main!(benches);
