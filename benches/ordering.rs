//! Benchmarks for the equality and ordering protocol.
//!
//! Tests comparison performance for:
//! - Same-kind scalars
//! - Cross-kind numeric comparison through exact magnitudes
//! - Lexicographic tuple comparison
//! - Sorting a heterogeneous collection

extern crate boxval;

use boxval::{protocol::compare, Optional, Ratio, Tuple, Value};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark comparing two fixed-width integers.
fn bench_compare_int(c: &mut Criterion) {
    let a = Value::Int(41);
    let b = Value::Int(42);

    c.bench_function("compare_int_int", |bench| {
        bench.iter(|| black_box(compare(black_box(&a), black_box(&b))));
    });
}

/// Benchmark comparing a ratio against a double.
fn bench_compare_ratio_double(c: &mut Criterion) {
    let a = Value::Ratio(Ratio::new(1, 3).unwrap());
    let b = Value::Double(0.333_333_333_333_333_3);

    c.bench_function("compare_ratio_double", |bench| {
        bench.iter(|| black_box(compare(black_box(&a), black_box(&b))));
    });
}

/// Benchmark comparing a big integer against a fixed-width integer.
fn bench_compare_bigint_int(c: &mut Criterion) {
    let a = Value::make_big_int("123456789012345678901234567890").unwrap();
    let b = Value::Int(i64::MAX);

    c.bench_function("compare_bigint_int", |bench| {
        bench.iter(|| black_box(compare(black_box(&a), black_box(&b))));
    });
}

/// Benchmark comparing tuples that differ only in their last item.
fn bench_compare_tuple(c: &mut Criterion) {
    let a: Tuple = (0..16).map(Value::Int).collect();
    let b: Tuple = (0..15).chain([16]).map(Value::Int).collect();

    c.bench_function("compare_tuple_16", |bench| {
        bench.iter(|| black_box(compare(black_box(&a), black_box(&b))));
    });
}

/// Benchmark sorting a mix of every kind.
fn bench_sort_mixed(c: &mut Criterion) {
    let values: Vec<Value> = (0..256_i64)
        .map(|i| match i % 6 {
            0 => Value::Int(i * 7 % 101),
            1 => Value::Double(i as f64 / 3.0),
            2 => Value::Ratio(Ratio::new(i, 7).unwrap()),
            3 => Value::Char(char::from(b'a' + (i % 26) as u8)),
            4 => Value::from(Tuple::pair(Value::Int(i % 5), Value::Int(i))),
            _ => Value::from(Optional::some(Value::Int(i % 11))),
        })
        .collect();

    c.bench_function("sort_mixed_256", |bench| {
        bench.iter(|| {
            let mut sorted = black_box(values.clone());
            sorted.sort();
            black_box(sorted)
        });
    });
}

criterion_group!(
    benches,
    bench_compare_int,
    bench_compare_ratio_double,
    bench_compare_bigint_int,
    bench_compare_tuple,
    bench_sort_mixed,
);
criterion_main!(benches);
