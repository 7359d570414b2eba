//! Terminal-state detection.
//!
//! The default rule only looks for an empty cell one knight hop away from
//! some tile. A full board that still holds mergeable neighbours is
//! therefore reported as over. `TerminalRule::MergeAware` adds the
//! equal-value check on top.

use crate::board::Grid;
use crate::core::{Direction, TerminalRule};

use super::vectors::vector;

/// Whether the game can continue under `rule`.
#[must_use]
pub fn moves_available(grid: &Grid, rule: TerminalRule) -> bool {
    match rule {
        TerminalRule::EmptyHop => tile_with_open_hop(grid),
        TerminalRule::MergeAware => tile_with_open_hop(grid) || tile_matches_available(grid),
    }
}

/// Whether some tile has an empty in-bounds cell one hop away in any direction.
#[must_use]
pub fn tile_with_open_hop(grid: &Grid) -> bool {
    grid.tiles().any(|tile| {
        Direction::all().any(|direction| {
            let target = tile.position.offset(vector(direction, tile.value));
            grid.cell_available(target)
        })
    })
}

/// Whether some tile has an equal-valued tile one hop away in any direction.
#[must_use]
pub fn tile_matches_available(grid: &Grid) -> bool {
    grid.tiles().any(|tile| {
        Direction::all().any(|direction| {
            let target = tile.position.offset(vector(direction, tile.value));
            grid.cell_content(target).is_some_and(|other| other.value == tile.value)
        })
    })
}
