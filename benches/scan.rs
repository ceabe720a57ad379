//! Benchmarks for the segment scanner

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trendspan::scan::{scan, Direction};

/// Sawtooth series: long declines punctuated by sharp recoveries, so the
/// scanner both extends runs and closes segments throughout the pass.
fn sawtooth(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let phase = (i % 50) as f64;
            if phase < 40.0 {
                200.0 - phase
            } else {
                160.0 + (phase - 40.0) * 5.0
            }
        })
        .collect()
}

fn benchmark_down_scan(c: &mut Criterion) {
    let values = sawtooth(10_000);
    c.bench_function("scan_down_10k", |b| {
        b.iter(|| scan(black_box(&values), black_box(5), None))
    });
}

fn benchmark_up_scan(c: &mut Criterion) {
    let values = sawtooth(10_000);
    c.bench_function("scan_up_10k", |b| {
        b.iter(|| {
            let oriented = Direction::Up.orient(black_box(&values));
            scan(&oriented, black_box(5), None)
        })
    });
}

fn benchmark_limited_scan(c: &mut Criterion) {
    let values = sawtooth(10_000);
    c.bench_function("scan_down_10k_limit_3", |b| {
        b.iter(|| scan(black_box(&values), black_box(5), Some(3)))
    });
}

criterion_group!(
    benches,
    benchmark_down_scan,
    benchmark_up_scan,
    benchmark_limited_scan
);
criterion_main!(benches);
