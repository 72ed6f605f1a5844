//! Benchmarks for bounded queue performance.
//!
//! Compares nexus-bounded against crossbeam-channel's bounded channel. The
//! crossbeam channel blocks on full instead of evicting, so the comparisons
//! stay below capacity.

use std::sync::Arc;
use std::thread;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_bounded::BoundedQueue;

// ============================================================================
// Single-threaded latency benchmarks
// ============================================================================

fn bench_single_thread_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_thread_latency");

    group.bench_function("nexus_bounded/u64", |b| {
        let q = BoundedQueue::<u64>::new(1024);
        b.iter(|| {
            q.push(black_box(42));
            black_box(q.pop())
        });
    });

    group.bench_function("crossbeam_bounded/u64", |b| {
        let (tx, rx) = crossbeam_channel::bounded::<u64>(1024);
        b.iter(|| {
            tx.send(black_box(42)).unwrap();
            black_box(rx.recv().unwrap())
        });
    });

    group.finish();
}

// ============================================================================
// Overflow (drop-oldest) cost
// ============================================================================

fn bench_overflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("overflow");

    for capacity in [1, 64, 1024] {
        group.bench_with_input(
            BenchmarkId::new("push_full", capacity),
            &capacity,
            |b, &n| {
                let q = BoundedQueue::<u64>::new(n);
                for i in 0..n {
                    q.push(i as u64);
                }
                b.iter(|| q.push(black_box(7)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Throughput benchmarks (burst push then pop)
// ============================================================================

fn bench_burst_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("burst_throughput");

    for batch_size in [100, 1000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(
            BenchmarkId::new("nexus_bounded", batch_size),
            &batch_size,
            |b, &n| {
                let q = BoundedQueue::<u64>::new(n * 2);
                b.iter(|| {
                    for i in 0..n {
                        q.push(black_box(i as u64));
                    }
                    for _ in 0..n {
                        black_box(q.pop());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("crossbeam_bounded", batch_size),
            &batch_size,
            |b, &n| {
                let (tx, rx) = crossbeam_channel::bounded::<u64>(n * 2);
                b.iter(|| {
                    for i in 0..n {
                        tx.send(black_box(i as u64)).unwrap();
                    }
                    for _ in 0..n {
                        black_box(rx.recv().unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Cross-thread ping-pong
// ============================================================================

fn bench_cross_thread_pingpong(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_thread_pingpong");

    const ITERATIONS: usize = 10_000;
    group.throughput(Throughput::Elements(ITERATIONS as u64));

    group.bench_function("nexus_bounded", |b| {
        b.iter(|| {
            let q1 = Arc::new(BoundedQueue::<u64>::new(64));
            let q2 = Arc::new(BoundedQueue::<u64>::new(64));

            let q1_clone = Arc::clone(&q1);
            let q2_clone = Arc::clone(&q2);

            let handle = thread::spawn(move || {
                for _ in 0..ITERATIONS {
                    let val = q1_clone.pop();
                    q2_clone.push(val + 1);
                }
            });

            for i in 0..ITERATIONS {
                q1.push(i as u64);
                black_box(q2.pop());
            }

            handle.join().unwrap();
        });
    });

    group.bench_function("crossbeam_bounded", |b| {
        b.iter(|| {
            let (tx1, rx1) = crossbeam_channel::bounded::<u64>(64);
            let (tx2, rx2) = crossbeam_channel::bounded::<u64>(64);

            let handle = thread::spawn(move || {
                for _ in 0..ITERATIONS {
                    let val = rx1.recv().unwrap();
                    tx2.send(val + 1).unwrap();
                }
            });

            for i in 0..ITERATIONS {
                tx1.send(i as u64).unwrap();
                black_box(rx2.recv().unwrap());
            }

            handle.join().unwrap();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_thread_latency,
    bench_overflow,
    bench_burst_throughput,
    bench_cross_thread_pingpong,
);
criterion_main!(benches);
