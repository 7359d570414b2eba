//! Numbered tiles and their persisted form.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// One numbered piece on the board.
///
/// `previous_position` and `merged_from` describe the most recent move only;
/// the resolver resets them on every tile before a move starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Current cell.
    pub position: Position,

    /// Tile value (positive, a power of two in normal play).
    pub value: u32,

    /// Cell occupied before the current move, if a move has started.
    pub previous_position: Option<Position>,

    /// The moving tile and the target tile consumed to create this one.
    ///
    /// Only set on tiles created by a merge during the latest move.
    pub merged_from: Option<Box<[Tile; 2]>>,
}

impl Tile {
    /// Create a fresh tile.
    #[must_use]
    pub fn new(position: Position, value: u32) -> Self {
        Self {
            position,
            value,
            previous_position: None,
            merged_from: None,
        }
    }

    /// Create the product of merging `sources` at `position`.
    #[must_use]
    pub fn merged(position: Position, value: u32, sources: [Tile; 2]) -> Self {
        Self {
            position,
            value,
            previous_position: None,
            merged_from: Some(Box::new(sources)),
        }
    }

    /// Remember the current position as the pre-move position.
    pub fn save_position(&mut self) {
        self.previous_position = Some(self.position);
    }

    /// Record a new position. Does not touch the grid.
    pub fn update_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Whether this tile was produced by a merge during the latest move.
    #[must_use]
    pub fn is_merge_product(&self) -> bool {
        self.merged_from.is_some()
    }

    /// Persisted form: position and value only.
    #[must_use]
    pub fn state(&self) -> TileState {
        TileState {
            position: self.position,
            value: self.value,
        }
    }
}

impl From<&TileState> for Tile {
    fn from(state: &TileState) -> Self {
        Tile::new(state.position, state.value)
    }
}

/// Serialized tile record: `{ "position": { "x", "y" }, "value" }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileState {
    pub position: Position,
    pub value: u32,
}
