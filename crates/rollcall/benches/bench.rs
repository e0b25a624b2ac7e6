use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rollcall::{
    BasicIdGenerator, IdGenerator, MonotonicClock, RandSource, SystemClock, ThreadRandom,
    TimeSource, generate_id,
};
use std::{
    sync::Barrier,
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (split across threads for
// the contended benchmarks).
const TOTAL_IDS: usize = 4096;

/// Benchmarks a single generator on one thread.
fn bench_generator<G, T, R>(c: &mut Criterion, group_name: &str, generator_fn: impl Fn() -> G)
where
    G: IdGenerator<T, R>,
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_fn();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one generator shared across threads.
fn bench_generator_contended<G, T, R>(
    c: &mut Criterion,
    group_name: &str,
    generator_fn: impl Fn() -> G,
) where
    G: IdGenerator<T, R> + Send + Sync,
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    let mut group = c.benchmark_group(group_name);
    let max_threads = num_cpus::get().max(1);

    for thread_count in [1, 2, 4, 8, 16].into_iter().filter(|&n| n <= max_threads) {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = generator_fn();
                    let barrier = Barrier::new(thread_count + 1);
                    scope(|s| {
                        for _ in 0..thread_count {
                            s.spawn(|| {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.next_id());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

fn benchmark_mock_sequential(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/basic", || {
        BasicIdGenerator::new(FixedMockTime { millis: 1 }, ThreadRandom)
    });
}

fn benchmark_system_sequential(c: &mut Criterion) {
    bench_generator(c, "system/sequential/basic", || {
        BasicIdGenerator::new(SystemClock, ThreadRandom)
    });
}

fn benchmark_mono_sequential(c: &mut Criterion) {
    let clock = MonotonicClock::default();
    bench_generator(c, "mono/sequential/basic", || {
        BasicIdGenerator::new(clock.clone(), ThreadRandom)
    });
}

fn benchmark_mono_contended(c: &mut Criterion) {
    let clock = MonotonicClock::default();
    bench_generator_contended(c, "mono/contended/basic", || {
        BasicIdGenerator::new(clock.clone(), ThreadRandom)
    });
}

fn benchmark_global(c: &mut Criterion) {
    let mut group = c.benchmark_group("global/generate_id");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generate_id());
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_mock_sequential,
    benchmark_system_sequential,
    benchmark_mono_sequential,
    benchmark_mono_contended,
    benchmark_global,
);
criterion_main!(benches);
