//! Criterion benchmarks for the two detectors.
//! Brute is quartic, so it stops at N = 64; fast continues to N = 256.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use collinear::detect::{brute, fast};
use collinear::sample::{draw_scatter, ReplayToken, ScatterCfg};
use collinear::Point;

fn scatter(n: usize, seed: u64) -> Vec<Point> {
    draw_scatter(
        ScatterCfg { count: n, max_coord: 1_023 },
        ReplayToken { seed, index: 0 },
    )
    .expect("grid holds the requested count")
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    for &n in &[8usize, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("brute", n), &n, |b, &n| {
            b.iter_batched(
                || scatter(n, 43),
                |pts| {
                    let _segs = brute::segments(&pts).expect("valid input");
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &n in &[32usize, 64, 128, 256] {
        group.bench_with_input(BenchmarkId::new("fast", n), &n, |b, &n| {
            b.iter_batched(
                || scatter(n, 44),
                |pts| {
                    let _segs = fast::segments(&pts).expect("valid input");
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_detect);
criterion_main!(benches);
