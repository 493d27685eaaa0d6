//! Benchmark for Set vs standard HashSet.
//!
//! Compares setkit's Set against Rust's standard HashSet for insertion and
//! the binary set operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setkit::Set;
use std::collections::HashSet;
use std::hint::black_box;

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = Set::new();
                for element in 0..size {
                    set.add(black_box(element));
                }
                black_box(set)
            });
        });

        group.bench_with_input(BenchmarkId::new("HashSet", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = HashSet::new();
                for element in 0..size {
                    set.insert(black_box(element));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

// =============================================================================
// intersection Benchmark
// =============================================================================

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intersection");

    for size in [100, 1_000, 10_000] {
        let small: Set<i32> = (0..size / 10).collect();
        let large: Set<i32> = (0..size).collect();

        // Receiver order must not matter: the smaller side is iterated.
        group.bench_with_input(
            BenchmarkId::new("small_receiver", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(small.intersection(&large)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("large_receiver", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(large.intersection(&small)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// union / difference Benchmark
// =============================================================================

fn benchmark_union_difference(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("union_difference");

    for size in [100, 1_000, 10_000] {
        let left: Set<i32> = (0..size).collect();
        let right: Set<i32> = (size / 2..size + size / 2).collect();

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(&right)));
        });

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.difference(&right)));
        });

        group.bench_with_input(
            BenchmarkId::new("symmetric_difference", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.symmetric_difference(&right)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_add,
    benchmark_intersection,
    benchmark_union_difference
);

criterion_main!(benches);
