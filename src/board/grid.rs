//! The square grid of tile slots.
//!
//! Cells are stored in one persistent vector indexed `x * size + y`, so
//! iteration order is ascending x, then ascending y. That order is the
//! traversal order of every move and must not change.
//!
//! `im::Vector` keeps clones O(1), which makes undo snapshots and
//! look-ahead queries cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileState};
use crate::core::{GameError, GameRng, Position};

/// Largest value a restored tile may hold; merging two of them still fits.
pub const MAX_TILE_VALUE: u32 = 1 << 30;

/// An occupied cell captured for undo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCell {
    pub position: Position,
    pub tile: Tile,
}

/// Plain snapshot of a grid for persistence.
///
/// `cells[x][y]` holds the tile record at `(x, y)` or `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
    pub size: usize,
    pub cells: Vec<Vec<Option<TileState>>>,
}

/// A fixed-size square matrix of optional tiles.
///
/// Invariant: a tile stored in slot `(x, y)` has `position == (x, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vector<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");

        Self {
            size,
            cells: std::iter::repeat(None).take(size * size).collect(),
        }
    }

    /// Rebuild a grid from a persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot's dimensions disagree with its
    /// declared size, a tile record disagrees with the slot holding it, or a
    /// value is not a power of two that can still be doubled.
    pub fn from_state(state: &GridState) -> Result<Self, GameError> {
        if state.size == 0 {
            return Err(GameError::ZeroSize);
        }
        if state.cells.len() != state.size {
            return Err(GameError::SizeMismatch {
                size: state.size,
                rows: state.cells.len(),
            });
        }

        let mut grid = Self::new(state.size);
        for (x, column) in state.cells.iter().enumerate() {
            if column.len() != state.size {
                return Err(GameError::BadColumn {
                    column: x,
                    len: column.len(),
                    size: state.size,
                });
            }
            for (y, record) in column.iter().enumerate() {
                let Some(record) = record else { continue };
                let slot = Position::new(x as i32, y as i32);
                if record.position != slot {
                    return Err(GameError::BadCell {
                        slot,
                        recorded: record.position,
                    });
                }
                if !record.value.is_power_of_two() || record.value > MAX_TILE_VALUE {
                    return Err(GameError::BadValue(slot, record.value));
                }
                grid.insert_tile(Tile::from(record));
            }
        }

        Ok(grid)
    }

    /// Rebuild a grid from an undo snapshot.
    #[must_use]
    pub fn from_cells(size: usize, cells: &[TileCell]) -> Self {
        let mut grid = Self::new(size);
        for cell in cells {
            let mut tile = cell.tile.clone();
            tile.update_position(cell.position);
            grid.insert_tile(tile);
        }
        grid
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.within_bounds(position) {
            Some(position.x as usize * self.size + position.y as usize)
        } else {
            None
        }
    }

    /// Whether `position` lies on the grid.
    #[must_use]
    pub fn within_bounds(&self, position: Position) -> bool {
        let size = self.size as i64;
        (0..size).contains(&i64::from(position.x)) && (0..size).contains(&i64::from(position.y))
    }

    /// The tile at `position`, or `None` if empty or out of bounds.
    #[must_use]
    pub fn cell_content(&self, position: Position) -> Option<&Tile> {
        self.index(position).and_then(|i| self.cells[i].as_ref())
    }

    /// Whether `position` is in bounds and empty.
    #[must_use]
    pub fn cell_available(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.cells[i].is_none())
    }

    /// Whether `position` holds a tile.
    #[must_use]
    pub fn cell_occupied(&self, position: Position) -> bool {
        self.cell_content(position).is_some()
    }

    /// Place a tile at its own position, replacing any occupant.
    ///
    /// Panics if the tile's position is out of bounds.
    pub fn insert_tile(&mut self, tile: Tile) {
        let index = self
            .index(tile.position)
            .unwrap_or_else(|| panic!("Tile position {} outside {}x{} grid", tile.position, self.size, self.size));
        self.cells.set(index, Some(tile));
    }

    /// Clear the slot at `position`, returning its tile.
    pub fn remove_tile(&mut self, position: Position) -> Option<Tile> {
        let index = self.index(position)?;
        self.cells.set(index, None)
    }

    /// Relocate the tile at `from` to `to`, updating its position.
    ///
    /// Returns `false` if `from` was empty. Any occupant of `to` is replaced.
    pub fn move_tile(&mut self, from: Position, to: Position) -> bool {
        let Some(mut tile) = self.remove_tile(from) else {
            return false;
        };
        tile.update_position(to);
        self.insert_tile(tile);
        true
    }

    /// Whether any cell is empty.
    #[must_use]
    pub fn cells_available(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// All empty cells in traversal order.
    #[must_use]
    pub fn available_cells(&self) -> Vec<Position> {
        self.positions().filter(|&p| self.cell_available(p)).collect()
    }

    /// A uniformly random empty cell, or `None` if the grid is full.
    pub fn random_available_cell(&self, rng: &mut GameRng) -> Option<Position> {
        let cells = self.available_cells();
        rng.choose(&cells).copied()
    }

    /// All coordinates in traversal order (ascending x, then ascending y).
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (0..size).flat_map(move |x| (0..size).map(move |y| Position::new(x, y)))
    }

    /// Visit every cell, empty ones included, in traversal order.
    pub fn each_cell<F>(&self, mut visitor: F)
    where
        F: FnMut(Position, Option<&Tile>),
    {
        for position in self.positions() {
            visitor(position, self.cell_content(position));
        }
    }

    /// Visit every tile mutably, in traversal order.
    pub fn each_tile_mut<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Tile),
    {
        for tile in self.cells.iter_mut().flatten() {
            visitor(tile);
        }
    }

    /// All tiles in traversal order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Number of tiles on the grid.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Capture every occupied cell for undo.
    ///
    /// Tiles are captured without per-move history.
    #[must_use]
    pub fn tiles_cells(&self) -> Vec<TileCell> {
        self.tiles()
            .map(|tile| TileCell {
                position: tile.position,
                tile: Tile::new(tile.position, tile.value),
            })
            .collect()
    }

    /// Plain snapshot for persistence.
    #[must_use]
    pub fn serialize(&self) -> GridState {
        let size = self.size as i32;
        let cells = (0..size)
            .map(|x| {
                (0..size)
                    .map(|y| self.cell_content(Position::new(x, y)).map(Tile::state))
                    .collect()
            })
            .collect();

        GridState {
            size: self.size,
            cells,
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size as i32;
        for y in 0..size {
            for x in 0..size {
                match self.cell_content(Position::new(x, y)) {
                    Some(tile) => write!(f, "{:>6}", tile.value)?,
                    None => write!(f, "{:>6}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
