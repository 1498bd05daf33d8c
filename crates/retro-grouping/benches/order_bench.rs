//! Benchmarks for fractional ordering and drop planning.
//!
//! Run with: cargo bench -p retro-grouping

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use retro_grouping::{
    GroupingConfig, Idea, IdeaContext, calculate_new_order, needs_rebalance, plan_drop,
};
use std::hint::black_box;

/// A board with `n` ungrouped ideas in one category and `n` in a group.
fn make_board(n: usize) -> Vec<Idea> {
    let mut ideas: Vec<Idea> = (0..n)
        .map(|i| Idea::new(format!("u{i}"), "c1", i as f64))
        .collect();
    ideas.extend((0..n).map(|i| Idea::new(format!("g{i}"), "c1", i as f64).in_group("g")));
    ideas
}

fn bench_calculate_new_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("order/calculate_new_order");

    for n in [10, 100, 1_000] {
        let ideas = make_board(n);
        group.bench_with_input(BenchmarkId::new("first_onto_middle", n), &ideas, |b, ideas| {
            b.iter(|| black_box(calculate_new_order(&ideas[0], &ideas[n / 2], ideas)))
        });
    }

    group.finish();
}

fn bench_needs_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("order/needs_rebalance");

    for n in [10, 100, 1_000] {
        let ideas = make_board(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &ideas, |b, ideas| {
            b.iter(|| black_box(needs_rebalance(ideas, IdeaContext::group("c1", "g"), 1e-9)))
        });
    }

    group.finish();
}

fn bench_plan_drop(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan/plan_drop");
    let config = GroupingConfig::default();

    for n in [10, 100, 1_000] {
        let ideas = make_board(n);
        group.bench_with_input(BenchmarkId::new("join_group", n), &ideas, |b, ideas| {
            b.iter(|| black_box(plan_drop("u0", "g0", ideas, &[], &config)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_calculate_new_order,
    bench_needs_rebalance,
    bench_plan_drop
);
criterion_main!(benches);
