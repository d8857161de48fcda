/*!
 * Bounded Buffer Benchmarks
 *
 * Uncontended operation cost, cross-thread handoff at several capacities,
 * and the two counter flavors side by side
 */

use bounded_buffer::{AtomicCounter, BoundedBuffer, CheckedCounter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::thread;

fn bench_uncontended_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended_ops");

    group.bench_function("put_get", |b| {
        let buffer = BoundedBuffer::new(1024).unwrap();
        b.iter(|| {
            buffer.put(black_box(42u64)).unwrap();
            black_box(buffer.get().unwrap());
        });
    });

    group.bench_function("try_put_try_get", |b| {
        let buffer = BoundedBuffer::new(1024).unwrap();
        b.iter(|| {
            buffer.try_put(black_box(42u64)).unwrap();
            black_box(buffer.try_get().unwrap());
        });
    });

    group.finish();
}

fn bench_spsc_handoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc_handoff");

    for capacity in [1usize, 8, 64, 512] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let buffer = Arc::new(BoundedBuffer::new(capacity).unwrap());
                    let buffer_clone = buffer.clone();

                    let producer = thread::spawn(move || {
                        for i in 0..1_000u64 {
                            buffer_clone.put(i).unwrap();
                        }
                    });

                    for _ in 0..1_000 {
                        black_box(buffer.get().unwrap());
                    }
                    producer.join().unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_mpmc_handoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("mpmc_handoff");

    for workers in [2usize, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                b.iter(|| {
                    let buffer = Arc::new(BoundedBuffer::new(64).unwrap());

                    let producers: Vec<_> = (0..workers)
                        .map(|_| {
                            let buffer = buffer.clone();
                            thread::spawn(move || {
                                for i in 0..500u64 {
                                    buffer.put(i).unwrap();
                                }
                            })
                        })
                        .collect();

                    let consumers: Vec<_> = (0..workers)
                        .map(|_| {
                            let buffer = buffer.clone();
                            thread::spawn(move || {
                                for _ in 0..500 {
                                    black_box(buffer.get().unwrap());
                                }
                            })
                        })
                        .collect();

                    for handle in producers.into_iter().chain(consumers) {
                        handle.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_counter_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_increment");

    group.bench_function("checked", |b| {
        let counter = CheckedCounter::new();
        b.iter(|| black_box(counter.increment()));
    });

    group.bench_function("atomic", |b| {
        let counter = AtomicCounter::new();
        b.iter(|| black_box(counter.increment()));
    });

    group.finish();
}

fn bench_stats_snapshot(c: &mut Criterion) {
    c.bench_function("stats_snapshot", |b| {
        let buffer = BoundedBuffer::new(128).unwrap();
        for i in 0..64u64 {
            buffer.put(i).unwrap();
        }

        b.iter(|| {
            // Snapshot with no waiters (should be one lock round trip)
            black_box(buffer.stats());
        });
    });
}

criterion_group!(
    benches,
    bench_uncontended_ops,
    bench_spsc_handoff,
    bench_mpmc_handoff,
    bench_counter_increment,
    bench_stats_snapshot
);

criterion_main!(benches);
