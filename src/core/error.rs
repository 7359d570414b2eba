//! Error type for the fallible edges of the engine.
//!
//! Move resolution never fails. Errors only arise when turning untrusted
//! input (raw direction indices, persisted snapshots) into engine types.

use super::position::Position;

/// Errors raised while validating external input.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("direction index {0} is out of range (expected 0-7)")]
    InvalidDirection(u8),
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("grid snapshot declares size {size} but has {rows} columns")]
    SizeMismatch { size: usize, rows: usize },
    #[error("grid snapshot column {column} has {len} cells, expected {size}")]
    BadColumn { column: usize, len: usize, size: usize },
    #[error("tile stored at {slot} records position {recorded}")]
    BadCell { slot: Position, recorded: Position },
    #[error("tile at {0} has invalid value {1}")]
    BadValue(Position, u32),
    #[error("saved grid has size {found}, game is configured for {expected}")]
    ConfigMismatch { expected: usize, found: usize },
    #[error("encode error: {0}")]
    Encode(String),
    #[error("decode error: {0}")]
    Decode(String),
}
