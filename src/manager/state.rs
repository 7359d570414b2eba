//! Serialized session snapshot.

use serde::{Deserialize, Serialize};

use crate::board::GridState;

/// The persisted form of a game session.
///
/// JSON shape: `{ grid: { size, cells }, score, over, won, keepPlaying }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub grid: GridState,
    pub score: u64,
    pub over: bool,
    pub won: bool,
    pub keep_playing: bool,
}
