use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knight_merge::core::{Direction, GameConfig, GameRng};
use knight_merge::manager::{GameManager, MemoryStorage, MoveCommand, NullActuator};
use knight_merge::rules::{add_random_tile, MoveResolver};
use knight_merge::Grid;
use std::hint::black_box;

fn corpus(size: usize) -> Vec<Grid> {
    let config = GameConfig::new(size);
    let resolver = MoveResolver::new(&config);
    let mut rng = GameRng::new(42);
    let mut grid = Grid::new(size);
    add_random_tile(&mut grid, &config.spawn, &mut rng);
    add_random_tile(&mut grid, &config.spawn, &mut rng);

    let mut grids = vec![grid.clone()];
    for i in 0..40 {
        let direction = Direction::ALL[i % Direction::COUNT];
        resolver.resolve(&mut grid, direction, &mut rng);
        grids.push(grid.clone());
    }
    grids
}

fn bench_shift(c: &mut Criterion) {
    for size in [4usize, 8] {
        let resolver = MoveResolver::new(&GameConfig::new(size));
        let grids = corpus(size);
        c.bench_function(&format!("shift/{size}x{size}"), |b| {
            b.iter_batched(
                || grids.clone(),
                |mut grids| {
                    let mut merges = 0usize;
                    for (i, grid) in grids.iter_mut().enumerate() {
                        merges += resolver.shift(grid, Direction::ALL[i % Direction::COUNT]).merges.len();
                    }
                    black_box(merges)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_productive_directions(c: &mut Criterion) {
    let resolver = MoveResolver::new(&GameConfig::default());
    let grids = corpus(4);
    c.bench_function("productive_directions/4x4", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for grid in &grids {
                total += resolver.productive_directions(grid).len();
            }
            black_box(total)
        })
    });
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("session/64_moves", |b| {
        b.iter(|| {
            let mut game = GameManager::new(GameConfig::default(), NullActuator, MemoryStorage::new(), 7);
            for i in 0..64 {
                game.handle_move(MoveCommand::Shift(Direction::ALL[i % Direction::COUNT]));
            }
            black_box(game.score())
        })
    });
}

criterion_group!(benches, bench_shift, bench_productive_directions, bench_session);
criterion_main!(benches);
