use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tilematch_common::games::SessionRng;
use tilematch_common::games::numbers_match::{
    BlockedSet, Grid, MatchRule, find_first_valid_pair, has_any_valid_move, random_grid,
};

fn generated_grid(rows: usize) -> Grid {
    let mut rng = SessionRng::new(2024);
    random_grid(&mut rng, 9, rows)
}

/// Only small values, so no pair can reach the sum target.
fn low_value_grid(rows: usize) -> Grid {
    let values: Vec<u8> = (0..rows * 9).map(|i| [1, 2, 3, 4][i % 4]).collect();
    Grid::from_values(9, &values)
}

fn bench_first_pair_generated() {
    let grid = generated_grid(12);
    black_box(find_first_valid_pair(&grid, &BlockedSet::new(), MatchRule::default()));
}

fn bench_any_move_low_values() {
    let grid = low_value_grid(12);
    black_box(has_any_valid_move(&grid, &BlockedSet::new(), MatchRule::default()));
}

fn hint_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("hint");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("first_pair_generated", |b| {
        b.iter(bench_first_pair_generated)
    });

    group.bench_function("any_move_low_values", |b| {
        b.iter(bench_any_move_low_values)
    });

    group.finish();
}

criterion_group!(benches, hint_bench);
criterion_main!(benches);
