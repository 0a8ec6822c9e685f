//! Benchmark for shuffle.
//!
//! Fisher-Yates is O(n); the clone of the input is included in every sample.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use underbar::random::{shuffle, shuffle_with};

fn benchmark_shuffle_sizes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("shuffle");

    for size in [16, 256, 4096, 65_536] {
        let input: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("seeded", size), &input, |bencher, input| {
            let mut rng = StdRng::seed_from_u64(42);
            bencher.iter(|| black_box(shuffle_with(black_box(input), &mut rng)));
        });
        group.bench_with_input(BenchmarkId::new("thread_rng", size), &input, |bencher, input| {
            bencher.iter(|| black_box(shuffle(black_box(input))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_shuffle_sizes);

criterion_main!(benches);
