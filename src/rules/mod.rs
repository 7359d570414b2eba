//! Move rules: the knight-move vector table, move resolution, spawning,
//! and terminal-state detection.
//!
//! Everything here operates on a borrowed `Grid`; session state (score,
//! flags, undo) lives in `manager`.

pub mod vectors;
pub mod resolver;
pub mod spawn;
pub mod terminal;

pub use vectors::vector;
pub use resolver::{MergeEvent, MoveOutcome, MoveResolver};
pub use spawn::{add_random_tile, spawn_value};
pub use terminal::{moves_available, tile_matches_available, tile_with_open_hop};
