//! Move resolution.
//!
//! A move in direction `d` runs in four steps:
//!
//! 1. **Prepare**: every tile drops its merge record and saves its position.
//! 2. **Scan**: cells are visited in fixed order (ascending x, then
//!    ascending y) regardless of direction. Each unresolved tile makes at
//!    most one vector hop: it merges into an equal, not-yet-merged tile one
//!    hop away, or steps into the hop cell if that cell is empty.
//! 3. **Spawn**: if anything moved, one random tile is added.
//! 4. **Terminal check**: see `terminal::moves_available`.
//!
//! Tiles do not slide until blocked. Because the scan order ignores the
//! direction, a tile that steps or merges into a not-yet-visited cell is
//! marked resolved so it is not moved twice. Which of several equal tiles
//! in a hop chain merge depends on that order.
//!
//! ```
//! use knight_merge::board::{Grid, Tile};
//! use knight_merge::core::{Direction, GameConfig, Position};
//! use knight_merge::rules::MoveResolver;
//!
//! let mut grid = Grid::new(4);
//! grid.insert_tile(Tile::new(Position::new(0, 1), 4));
//! grid.insert_tile(Tile::new(Position::new(2, 0), 4));
//!
//! let resolver = MoveResolver::new(&GameConfig::default());
//! let direction = Direction::new(1).unwrap(); // (+2, -1)
//! let outcome = resolver.shift(&mut grid, direction);
//!
//! assert_eq!(outcome.score_gained, 8);
//! assert_eq!(grid.cell_content(Position::new(2, 0)).map(|t| t.value), Some(8));
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::board::{Grid, Tile, TileState};
use crate::core::{Direction, GameConfig, GameRng, Position, SpawnConfig, TerminalRule};

use super::spawn::add_random_tile;
use super::terminal::moves_available;
use super::vectors::vector;

/// One merge performed during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeEvent {
    /// Cell holding the merged tile.
    pub position: Position,
    /// Value of the merged tile.
    pub value: u32,
    /// Pre-move positions of the moving tile and the target tile.
    pub sources: [Position; 2],
}

/// Summary of a resolved move.
///
/// The default value describes a move that did nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile changed cell.
    pub moved: bool,
    /// Sum of merged tile values.
    pub score_gained: u64,
    /// Whether a merge reached the winning value.
    pub reached_win: bool,
    /// Merges in scan order.
    pub merges: SmallVec<[MergeEvent; 4]>,
    /// Tile spawned after the scan, if any.
    pub spawned: Option<TileState>,
    /// Whether no moves remain after this move.
    pub game_over: bool,
}

/// Resolves moves against a grid.
///
/// Holds only the rule parameters; the grid and RNG are passed per call.
#[derive(Clone, Copy, Debug)]
pub struct MoveResolver {
    win_value: u32,
    spawn: SpawnConfig,
    terminal_rule: TerminalRule,
}

impl MoveResolver {
    /// Create a resolver for the given configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            win_value: config.win_value,
            spawn: config.spawn,
            terminal_rule: config.terminal_rule,
        }
    }

    /// Run a complete forward move: scan, spawn, terminal check.
    pub fn resolve(&self, grid: &mut Grid, direction: Direction, rng: &mut GameRng) -> MoveOutcome {
        let mut outcome = self.shift(grid, direction);

        if outcome.moved {
            outcome.spawned = add_random_tile(grid, &self.spawn, rng);
        }

        outcome.game_over = !moves_available(grid, self.terminal_rule);
        outcome
    }

    /// Reset per-move tile history before any tile is displaced.
    pub fn prepare_tiles(grid: &mut Grid) {
        grid.each_tile_mut(|tile| {
            tile.merged_from = None;
            tile.save_position();
        });
    }

    /// Move and merge tiles without spawning or checking for game over.
    ///
    /// Deterministic: the same grid and direction always give the same result.
    pub fn shift(&self, grid: &mut Grid, direction: Direction) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        Self::prepare_tiles(grid);

        // Cells whose current tile already moved or was created this turn.
        let mut resolved: FxHashSet<Position> = FxHashSet::default();
        let cells: Vec<Position> = grid.positions().collect();

        for cell in cells {
            if resolved.contains(&cell) {
                continue;
            }
            let Some(mut tile) = grid.cell_content(cell).cloned() else {
                continue;
            };

            let next = cell.offset(vector(direction, tile.value));
            let farthest = if grid.cell_available(next) { next } else { cell };

            match (grid.cell_content(next).cloned(), tile.value.checked_mul(2)) {
                (Some(target), Some(value))
                    if target.value == tile.value && !target.is_merge_product() =>
                {
                    let sources = [cell, target.previous_position.unwrap_or(next)];

                    grid.remove_tile(cell);
                    tile.update_position(next);
                    grid.insert_tile(Tile::merged(next, value, [tile, target]));
                    resolved.insert(next);

                    outcome.moved = true;
                    outcome.score_gained += u64::from(value);
                    if value >= self.win_value {
                        outcome.reached_win = true;
                    }
                    outcome.merges.push(MergeEvent {
                        position: next,
                        value,
                        sources,
                    });
                    debug!(from = %cell, to = %next, value, "merged tiles");
                }
                _ if farthest != cell => {
                    grid.move_tile(cell, farthest);
                    resolved.insert(farthest);
                    outcome.moved = true;
                    trace!(from = %cell, to = %farthest, "moved tile");
                }
                _ => {}
            }
        }

        outcome
    }

    /// Directions in which at least one tile would move or merge.
    ///
    /// Shifts a cheap clone of the grid; `grid` itself is untouched.
    #[must_use]
    pub fn productive_directions(&self, grid: &Grid) -> SmallVec<[Direction; 8]> {
        Direction::all()
            .filter(|&direction| {
                let mut scratch = grid.clone();
                self.shift(&mut scratch, direction).moved
            })
            .collect()
    }
}
