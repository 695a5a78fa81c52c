//! Criterion benchmarks for the factorial paths.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use factcalc_core::executor::{RayonExecutor, ScopedThreadExecutor, SequentialExecutor};
use factcalc_core::options::Options;
use factcalc_core::reducer::RangeProductReducer;
use factcalc_core::stirling::StirlingEstimator;

fn bench_exact(c: &mut Criterion) {
    let rayon = RangeProductReducer::with_executor(RayonExecutor::default());
    let threads = RangeProductReducer::with_executor(ScopedThreadExecutor::new());
    let sequential = RangeProductReducer::with_executor(SequentialExecutor::new());
    let workers = Options::default().resolve_workers();

    let ns: Vec<u64> = vec![20, 1_000, 10_000, 50_000];

    let mut group = c.benchmark_group("RangeProduct/rayon");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| rayon.product(n, workers).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("RangeProduct/threads");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| threads.product(n, workers).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("RangeProduct/sequential");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| sequential.product(n, 1).unwrap());
        });
    }
    group.finish();
}

fn bench_stirling(c: &mut Criterion) {
    let opts = Options::default();
    let mut group = c.benchmark_group("Stirling");
    for n in [21u64, 1_000_000, u64::MAX] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| StirlingEstimator::estimate(n, &opts));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact, bench_stirling);
criterion_main!(benches);
