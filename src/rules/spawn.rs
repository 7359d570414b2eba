//! Random tile spawning.

use tracing::debug;

use crate::board::{Grid, Tile, TileState};
use crate::core::{GameRng, SpawnConfig};

/// Draw a spawn value: `common_value` with `common_probability`, else `rare_value`.
pub fn spawn_value(spawn: &SpawnConfig, rng: &mut GameRng) -> u32 {
    if rng.gen_bool(spawn.common_probability) {
        spawn.common_value
    } else {
        spawn.rare_value
    }
}

/// Place one random tile in a uniformly random empty cell.
///
/// Returns `None` without drawing any randomness if the grid is full.
pub fn add_random_tile(grid: &mut Grid, spawn: &SpawnConfig, rng: &mut GameRng) -> Option<TileState> {
    if !grid.cells_available() {
        return None;
    }

    let value = spawn_value(spawn, rng);
    let position = grid.random_available_cell(rng)?;
    let tile = Tile::new(position, value);
    let state = tile.state();
    grid.insert_tile(tile);

    debug!(%position, value, "spawned tile");
    Some(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_spawn_fills_until_full() {
        let mut grid = Grid::new(2);
        let mut rng = GameRng::new(3);
        let spawn = SpawnConfig::default();

        for expected in 1..=4 {
            let placed = add_random_tile(&mut grid, &spawn, &mut rng);
            assert!(placed.is_some());
            assert_eq!(grid.tile_count(), expected);
        }
        assert!(add_random_tile(&mut grid, &spawn, &mut rng).is_none());
        assert_eq!(grid.tile_count(), 4);
    }

    #[test]
    fn test_spawn_only_configured_values() {
        let mut rng = GameRng::new(11);
        let spawn = SpawnConfig::default();
        for _ in 0..200 {
            let value = spawn_value(&spawn, &mut rng);
            assert!(value == 4 || value == 8);
        }
    }

    #[test]
    fn test_spawn_frequency() {
        let mut rng = GameRng::new(2024);
        let spawn = SpawnConfig::default();
        let trials = 10_000;
        let common = (0..trials)
            .filter(|_| spawn_value(&spawn, &mut rng) == 4)
            .count();
        let ratio = common as f64 / trials as f64;
        assert!((0.87..0.93).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn test_spawn_lands_on_last_free_cell() {
        let mut grid = Grid::new(2);
        for p in [Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)] {
            grid.insert_tile(Tile::new(p, 16));
        }
        let mut rng = GameRng::new(5);
        let placed = add_random_tile(&mut grid, &SpawnConfig::default(), &mut rng).unwrap();
        assert_eq!(placed.position, Position::new(1, 1));
    }
}
