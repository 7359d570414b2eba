//! In-memory key-value storage.
//!
//! Entries are stored as raw bytes under fixed keys, the session encoded
//! with bincode. Anything that fails to decode reads as absent.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::io::StorageManager;
use super::state::SavedGame;
use crate::core::GameError;

const BEST_SCORE_KEY: &str = "bestScore";
const GAME_STATE_KEY: &str = "gameState";

/// Encode a session for storage.
///
/// # Errors
///
/// Returns `GameError::Encode` if bincode rejects the value.
pub fn encode_game(state: &SavedGame) -> Result<Vec<u8>, GameError> {
    bincode::serialize(state).map_err(|e| GameError::Encode(e.to_string()))
}

/// Decode a stored session.
///
/// # Errors
///
/// Returns `GameError::Decode` if the bytes are not a valid session.
pub fn decode_game(bytes: &[u8]) -> Result<SavedGame, GameError> {
    bincode::deserialize(bytes).map_err(|e| GameError::Decode(e.to_string()))
}

/// Process-local storage backed by a hash map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the raw bytes under `key`.
    pub fn set_raw(&mut self, key: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(key.into(), bytes);
    }

    /// Whether a session is stored (readable or not).
    #[must_use]
    pub fn has_game_state(&self) -> bool {
        self.entries.contains_key(GAME_STATE_KEY)
    }

    /// Key the session is stored under.
    #[must_use]
    pub const fn game_state_key() -> &'static str {
        GAME_STATE_KEY
    }
}

impl StorageManager for MemoryStorage {
    fn game_state(&self) -> Option<SavedGame> {
        let bytes = self.entries.get(GAME_STATE_KEY)?;
        match decode_game(bytes) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(%err, "ignoring unreadable game state");
                None
            }
        }
    }

    fn set_game_state(&mut self, state: &SavedGame) {
        match encode_game(state) {
            Ok(bytes) => {
                self.entries.insert(GAME_STATE_KEY.to_string(), bytes);
            }
            Err(err) => warn!(%err, "failed to store game state"),
        }
    }

    fn clear_game_state(&mut self) {
        self.entries.remove(GAME_STATE_KEY);
    }

    fn best_score(&self) -> u64 {
        self.entries
            .get(BEST_SCORE_KEY)
            .and_then(|bytes| <[u8; 8]>::try_from(bytes.as_slice()).ok())
            .map_or(0, u64::from_le_bytes)
    }

    fn set_best_score(&mut self, score: u64) {
        self.entries
            .insert(BEST_SCORE_KEY.to_string(), score.to_le_bytes().to_vec());
    }
}
