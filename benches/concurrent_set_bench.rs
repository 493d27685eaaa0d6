//! Benchmark for ConcurrentSet under contention.
//!
//! Measures uncontended lock overhead against Set, and contended adds and
//! crossed two-set operations across threads.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setkit::{ConcurrentSet, Set};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Uncontended Benchmark
// =============================================================================

fn benchmark_uncontended_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uncontended_add");

    for size in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("Set", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = Set::new();
                for element in 0..size {
                    set.add(black_box(element));
                }
                black_box(set)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("ConcurrentSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let set = ConcurrentSet::new();
                    for element in 0..size {
                        set.add(black_box(element));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Contended Benchmark
// =============================================================================

fn benchmark_contended_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contended_add");

    for threads in [2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("ConcurrentSet", threads),
            &threads,
            |bencher, &threads| {
                bencher.iter(|| {
                    let set = Arc::new(ConcurrentSet::new());
                    let handles: Vec<_> = (0..threads)
                        .map(|worker| {
                            let set = Arc::clone(&set);
                            thread::spawn(move || {
                                for element in 0..1_000 {
                                    set.add(worker * 1_000 + element);
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                    black_box(set.len())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_crossed_intersection(criterion: &mut Criterion) {
    let set_a: Arc<ConcurrentSet<i32>> = Arc::new((0..1_000).collect());
    let set_b: Arc<ConcurrentSet<i32>> = Arc::new((500..1_500).collect());

    criterion.bench_function("crossed_intersection", |bencher| {
        bencher.iter(|| {
            let handle = {
                let set_a = Arc::clone(&set_a);
                let set_b = Arc::clone(&set_b);
                thread::spawn(move || set_b.intersection(&set_a).len())
            };
            let forward = set_a.intersection(&set_b).len();
            let backward = handle.join().unwrap();
            black_box((forward, backward))
        });
    });
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_uncontended_add,
    benchmark_contended_add,
    benchmark_crossed_intersection
);

criterion_main!(benches);
