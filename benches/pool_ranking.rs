//! Ranking benchmark over a synthetic pool of a few thousand samples

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fitness_ranker::{histogram, percentile_rank, top_decile_threshold, Direction, ScorePool};

fn synthetic_pool(n: usize) -> ScorePool {
    let scores = (0..n)
        .map(|i| 150.0 + ((i * 7919) % 1200) as f64 / 10.0)
        .collect();
    ScorePool::from_unsorted(scores)
}

fn bench_pool_ranking(c: &mut Criterion) {
    let pool = synthetic_pool(5000);

    c.bench_function("percentile_rank_5000", |b| {
        b.iter(|| percentile_rank(black_box(212.5), &pool, Direction::HigherIsBetter))
    });

    c.bench_function("top_decile_threshold_5000", |b| {
        b.iter(|| top_decile_threshold(black_box(&pool), Direction::LowerIsBetter))
    });

    c.bench_function("histogram_5000_30_bins", |b| {
        b.iter(|| histogram(black_box(&pool), 30))
    });
}

criterion_group!(benches, bench_pool_ranking);
criterion_main!(benches);
