//! Generation and cascade benchmarks across the shipped difficulty tiers.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use ranjau::{
    Difficulty, Game, GameConfig, Minefield, MinefieldGenerator, RandomMinefieldGenerator,
    StartPolicy,
};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        group.bench_function(difficulty.label(), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let generator = RandomMinefieldGenerator::new(seed, (0, 0), StartPolicy::SafeCell);
                black_box(generator.generate(difficulty.config()))
            });
        });
    }
    group.finish();
}

fn bench_full_board_cascade(c: &mut Criterion) {
    // Single corner mine on the expert grid: one reveal opens all 479 safe
    // cells, the worst case for the flood fill.
    let config = Difficulty::Expert.config();
    let minefield = Minefield::from_mine_coords(config.size(), &[(0, 0)]).unwrap();

    c.bench_function("cascade.expert_full_board", |b| {
        b.iter_batched(
            || Game::new(minefield.clone()),
            |mut game| black_box(game.reveal((15, 29))),
            BatchSize::SmallInput,
        );
    });
}

fn bench_dense_generation(c: &mut Criterion) {
    // Above any shipped tier's density, to keep an eye on the rejection
    // sampler's degradation curve.
    let config = GameConfig::new(16, 16, 128).unwrap();

    c.bench_function("generate.half_full_16x16", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let generator = RandomMinefieldGenerator::new(seed, (8, 8), StartPolicy::SafeCell);
            black_box(generator.generate(config))
        });
    });
}

criterion_group!(
    benches,
    bench_generation,
    bench_full_board_cascade,
    bench_dense_generation
);
criterion_main!(benches);
