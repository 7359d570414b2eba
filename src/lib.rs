//! # knight-merge
//!
//! Rules engine for a tile-merging puzzle played on a square grid where
//! tiles jump along knight-move vectors instead of sliding.
//!
//! ## Rules in brief
//!
//! 1. **Eight directions**: each maps to a fixed knight offset. Directions
//!    0-3 and 4-7 form two mirrored banks.
//!
//! 2. **One hop per move**: a tile either merges with an equal tile one hop
//!    away, steps into the hop cell if it is empty, or stays put.
//!
//! 3. **Fixed scan order**: tiles resolve in ascending x, then ascending y,
//!    whatever the direction.
//!
//! 4. **Spawning**: every move that changes the grid adds one tile
//!    (4 with probability 0.9, else 8).
//!
//! 5. **Game over**: no tile has an empty cell one hop away.
//!
//! ## Architecture
//!
//! - **Deterministic**: all randomness comes from a seeded `GameRng` owned
//!   by the session, so a seed and a command sequence replay exactly.
//!
//! - **Persistent grid**: `im-rs` backs the grid so clones are O(1).
//!
//! - **Thin I/O**: rendering and persistence are traits; the engine only
//!   calls them.
//!
//! ## Modules
//!
//! - `core`: positions, directions, RNG, configuration, errors
//! - `board`: tiles and the grid
//! - `rules`: vector table, move resolution, spawning, terminal checks
//! - `manager`: session driver and I/O contracts

pub mod core;
pub mod board;
pub mod rules;
pub mod manager;

// Re-export commonly used types
pub use crate::core::{
    Direction, Position, Vector,
    GameRng, GameRngState,
    GameConfig, SpawnConfig, TerminalRule,
    GameError,
};

pub use crate::board::{Grid, GridState, Tile, TileCell, TileState};

pub use crate::rules::{vector, MergeEvent, MoveOutcome, MoveResolver};

pub use crate::manager::{
    Actuator, ActuatorMetadata, StorageManager,
    GameManager, MoveCommand, SavedGame,
    MemoryStorage, NullActuator,
};
