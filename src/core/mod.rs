//! Core engine types: coordinates, directions, RNG, configuration, errors.
//!
//! Everything here is independent of the board and the move rules.

pub mod position;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Direction, Position, Vector};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, SpawnConfig, TerminalRule};
pub use error::GameError;
