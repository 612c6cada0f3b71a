//! Benchmarks for observer dispatch and cursor bookkeeping.
//!
//! Compares a plain `Vec` walk against the observer array to show what the
//! registry costs on the hot path.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nexus_observer::{ObserverArray, Registry};

const SIZES: [usize; 3] = [8, 64, 512];

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &size| {
            let listeners: Vec<u64> = (0..size as u64).collect();
            b.iter(|| {
                let mut sum = 0u64;
                for id in &listeners {
                    sum = sum.wrapping_add(black_box(*id));
                }
                sum
            });
        });

        group.bench_with_input(BenchmarkId::new("observer_array", size), &size, |b, &size| {
            let listeners: ObserverArray<u64> = (0..size as u64).collect();
            b.iter(|| {
                let mut sum = 0u64;
                listeners.notify(|id| sum = sum.wrapping_add(black_box(id)));
                sum
            });
        });
    }

    group.finish();
}

fn bench_mutation_under_cursors(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove_with_cursors");

    for cursors in [0usize, 1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(cursors), &cursors, |b, &cursors| {
            let array: ObserverArray<u64> = (0..64).collect();
            let live: Vec<_> = (0..cursors).map(|_| array.cursor()).collect();
            b.iter(|| {
                array.insert(black_box(0), 7).unwrap();
                black_box(array.remove(black_box(0)).unwrap())
            });
            drop(live);
        });
    }

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("link_unlink", |b| {
        let mut registry = Registry::with_capacity(16);
        b.iter(|| {
            let key = registry.link(black_box(3));
            black_box(registry.unlink(key))
        });
    });

    group.bench_function("adjust_16", |b| {
        let mut registry = Registry::with_capacity(16);
        for position in 0..16 {
            registry.link(position);
        }
        b.iter(|| {
            registry.adjust_cursors(black_box(4), 1);
            registry.adjust_cursors(black_box(4), -1);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_mutation_under_cursors, bench_registry);
criterion_main!(benches);
