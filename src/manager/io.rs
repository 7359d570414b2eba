//! Contracts for the rendering and persistence collaborators.
//!
//! The engine calls these after every state change and never reads
//! anything back from the actuator. Storage is a plain key-value layer:
//! a missing or unreadable entry is simply absent.

use serde::{Deserialize, Serialize};

use super::state::SavedGame;
use crate::board::Grid;

/// Values handed to the actuator alongside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorMetadata {
    pub score: u64,
    pub over: bool,
    pub won: bool,
    pub best_score: u64,
    pub terminated: bool,
}

/// Rendering sink.
pub trait Actuator {
    /// Render the grid and session values.
    fn actuate(&mut self, grid: &Grid, metadata: &ActuatorMetadata);

    /// Clear any won/lost banner.
    fn continue_game(&mut self);
}

/// Persistence for the session snapshot and the best score.
pub trait StorageManager {
    /// The stored session, or `None` if absent or unreadable.
    fn game_state(&self) -> Option<SavedGame>;

    /// Store the session, replacing any previous one.
    fn set_game_state(&mut self, state: &SavedGame);

    /// Forget the stored session.
    fn clear_game_state(&mut self);

    /// Best score so far, 0 if none.
    fn best_score(&self) -> u64;

    /// Store a new best score.
    fn set_best_score(&mut self, score: u64);
}

/// Actuator that renders nothing. For headless play and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullActuator;

impl Actuator for NullActuator {
    fn actuate(&mut self, _grid: &Grid, _metadata: &ActuatorMetadata) {}

    fn continue_game(&mut self) {}
}
