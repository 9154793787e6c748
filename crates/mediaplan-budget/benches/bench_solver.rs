// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Benchmarks for the budget model and the goal-seek solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mediaplan_budget::{BudgetModel, BudgetSolver};
use mediaplan_core::{FeeStructure, ItemLayout, SearchConfig};

fn bench_evaluate(c: &mut Criterion) {
    let layout = ItemLayout::standard();
    let fees = FeeStructure::new(0.1, 0.05, 1000.0);

    c.bench_function("model_evaluate_4_items", |b| {
        b.iter(|| {
            let model = BudgetModel::new(
                black_box(vec![100.0, 200.0, 300.0, 400.0]),
                fees,
                &layout,
            )
            .expect("valid plan");
            model.evaluate()
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let fees = FeeStructure::new(0.1, 0.05, 1000.0);
    let mut group = c.benchmark_group("solver_search");

    let cases = [
        ("step_1000", 1000.0, 100),
        ("step_10", 10.0, 100),
        ("step_1", 1.0, 1000),
    ];
    for (name, step, max_iterations) in cases {
        let config = SearchConfig::new(0.01, step, max_iterations).expect("valid config");
        let solver = BudgetSolver::new(2135.0, vec![100.0, 200.0, 400.0], fees, config)
            .expect("valid solver");
        group.bench_function(name, |b| b.iter(|| black_box(&solver).search()));
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
