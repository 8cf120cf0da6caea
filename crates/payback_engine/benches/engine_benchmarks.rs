//! Criterion benchmarks for the projection and Monte Carlo engines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use payback_core::params::ParameterSet;
use payback_engine::mc::{FieldNoise, McConfig, MonteCarloEngine, NoiseField, NoiseSpec};
use payback_engine::projection::project;

fn bench_projection(c: &mut Criterion) {
    let params = ParameterSet::builder().horizon_months(120).build().unwrap();
    c.bench_function("project_120_months", |b| {
        b.iter(|| project(black_box(&params)).unwrap())
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let params = ParameterSet::default();
    let noise = NoiseSpec::new(vec![
        FieldNoise::normal(NoiseField::Salary, 0.10),
        FieldNoise::normal(NoiseField::BillRate, 0.10),
    ])
    .unwrap();

    let sequential = McConfig::builder().trials(1_000).seed(42).build().unwrap();
    c.bench_function("mc_1k_trials_sequential", |b| {
        let engine = MonteCarloEngine::new(sequential);
        b.iter(|| engine.simulate(black_box(&params), black_box(&noise)).unwrap())
    });

    let parallel = McConfig::builder()
        .trials(1_000)
        .seed(42)
        .parallel(true)
        .build()
        .unwrap();
    c.bench_function("mc_1k_trials_parallel", |b| {
        let engine = MonteCarloEngine::new(parallel);
        b.iter(|| engine.simulate(black_box(&params), black_box(&noise)).unwrap())
    });
}

criterion_group!(benches, bench_projection, bench_monte_carlo);
criterion_main!(benches);
