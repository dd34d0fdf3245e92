//! Criterion benchmarks for roasplan_core
//!
//! Run with: cargo bench -p roasplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use roasplan_core::analysis::{SweepConfig, SweepInput, sweep};
use roasplan_core::evaluate::evaluate;
use roasplan_core::model::{ClientParameters, Product};

fn create_params(portfolio_size: usize) -> ClientParameters {
    ClientParameters {
        ad_spend: 50_000.0,
        fixed_fee: 10_000.0,
        expected_income: 15_000.0,
        products: (0..portfolio_size)
            .map(|i| {
                Product::new(
                    format!("P{}", i + 1),
                    100.0 + i as f64 * 17.0,
                    0.1 + (i % 8) as f64 * 0.1,
                )
            })
            .collect(),
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for size in [1, 10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let params = create_params(size);
            b.iter(|| evaluate(black_box(&params)));
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let params = create_params(10);
    let mut group = c.benchmark_group("sweep");
    for step_count in [50, 500, 5_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(step_count),
            &step_count,
            |b, &step_count| {
                let config = SweepConfig {
                    input: SweepInput::AdSpend,
                    step_count,
                };
                b.iter(|| sweep(black_box(&config), black_box(&params)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_sweep);
criterion_main!(benches);
