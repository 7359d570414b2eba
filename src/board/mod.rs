//! Board model: tiles and the grid that owns them.

pub mod tile;
pub mod grid;

pub use tile::{Tile, TileState};
pub use grid::{Grid, GridState, TileCell, MAX_TILE_VALUE};
