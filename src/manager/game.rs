//! Game session driver.
//!
//! `GameManager` owns the grid and session flags and exposes an explicit
//! command interface (`handle_move`, `handle_restart`, `handle_keep_playing`)
//! for whatever input adapter sits in front of it. After every state change
//! it updates storage and hands the grid to the actuator.
//!
//! ```
//! use knight_merge::core::{Direction, GameConfig};
//! use knight_merge::manager::{GameManager, MemoryStorage, MoveCommand, NullActuator};
//!
//! let mut game = GameManager::new(GameConfig::default(), NullActuator, MemoryStorage::new(), 7);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! for direction in Direction::all() {
//!     game.handle_move(MoveCommand::Shift(direction));
//! }
//! game.handle_move(MoveCommand::Undo);
//! ```

use tracing::{debug, info, instrument, trace, warn};

use super::io::{Actuator, ActuatorMetadata, StorageManager};
use super::state::SavedGame;
use crate::board::{Grid, TileCell};
use crate::core::{Direction, GameConfig, GameError, GameRng, GameRngState};
use crate::rules::{add_random_tile, moves_available, MoveOutcome, MoveResolver};

/// A command from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveCommand {
    /// Move every tile in a direction.
    Shift(Direction),
    /// Restore the grid captured before the last forward move.
    Undo,
}

impl From<Direction> for MoveCommand {
    fn from(direction: Direction) -> Self {
        MoveCommand::Shift(direction)
    }
}

/// A single game session.
///
/// `over` and `won` are independent; the session is terminated when it is
/// over, or won without the player choosing to keep playing.
pub struct GameManager<A: Actuator, S: StorageManager> {
    config: GameConfig,
    resolver: MoveResolver,
    grid: Grid,
    score: u64,
    over: bool,
    won: bool,
    keep_playing: bool,
    /// Occupied cells from just before the last forward move.
    undo_snapshot: Vec<TileCell>,
    rng: GameRng,
    actuator: A,
    storage: S,
}

impl<A: Actuator, S: StorageManager> GameManager<A, S> {
    /// Create a session, resuming from storage if a valid session is stored.
    pub fn new(config: GameConfig, actuator: A, storage: S, seed: u64) -> Self {
        Self::with_rng(config, actuator, storage, GameRng::new(seed))
    }

    /// Create a session drawing randomness from `rng`.
    pub fn with_rng(config: GameConfig, actuator: A, storage: S, rng: GameRng) -> Self {
        let mut manager = Self {
            resolver: MoveResolver::new(&config),
            grid: Grid::new(config.size),
            config,
            score: 0,
            over: false,
            won: false,
            keep_playing: false,
            undo_snapshot: Vec::new(),
            rng,
            actuator,
            storage,
        };
        manager.setup();
        manager
    }

    /// Load the stored session or start a fresh one, then actuate.
    pub fn setup(&mut self) {
        self.undo_snapshot.clear();

        let resumed = match self.storage.game_state() {
            Some(saved) => match self.load(&saved) {
                Ok(()) => true,
                Err(err) => {
                    warn!(%err, "discarding stored game");
                    false
                }
            },
            None => false,
        };

        if !resumed {
            self.grid = Grid::new(self.config.size);
            self.score = 0;
            self.over = false;
            self.won = false;
            self.keep_playing = false;
            self.add_start_tiles();
        }

        debug!(resumed, score = self.score, "game set up");
        self.actuate();
    }

    fn load(&mut self, saved: &SavedGame) -> Result<(), GameError> {
        if saved.grid.size != self.config.size {
            return Err(GameError::ConfigMismatch {
                expected: self.config.size,
                found: saved.grid.size,
            });
        }

        self.grid = Grid::from_state(&saved.grid)?;
        self.score = saved.score;
        self.over = saved.over;
        self.won = saved.won;
        self.keep_playing = saved.keep_playing;
        Ok(())
    }

    fn add_start_tiles(&mut self) {
        for _ in 0..self.config.start_tiles {
            add_random_tile(&mut self.grid, &self.config.spawn, &mut self.rng);
        }
    }

    /// Apply a move or undo command.
    ///
    /// A forward move while terminated does nothing and returns the default
    /// outcome. Undo always applies and returns the default outcome.
    #[instrument(skip(self), fields(score = self.score))]
    pub fn handle_move(&mut self, command: MoveCommand) -> MoveOutcome {
        let direction = match command {
            MoveCommand::Undo => {
                self.undo();
                return MoveOutcome::default();
            }
            MoveCommand::Shift(direction) => direction,
        };

        if self.is_game_terminated() {
            trace!("ignoring move on terminated game");
            return MoveOutcome::default();
        }

        self.undo_snapshot = self.grid.tiles_cells();

        let outcome = self.resolver.resolve(&mut self.grid, direction, &mut self.rng);
        self.score += outcome.score_gained;

        if outcome.reached_win && !self.won {
            self.won = true;
            info!(score = self.score, "winning tile reached");
        }
        if outcome.game_over && !self.over {
            self.over = true;
            info!(score = self.score, "no moves left");
        }

        self.actuate();
        outcome
    }

    /// Rebuild the grid from the undo snapshot. Score and flags are kept.
    fn undo(&mut self) {
        self.grid = Grid::from_cells(self.config.size, &self.undo_snapshot);
        debug!(tiles = self.undo_snapshot.len(), "restored undo snapshot");
        self.actuate();
    }

    /// Discard the stored session and start over.
    #[instrument(skip(self))]
    pub fn handle_restart(&mut self) {
        self.storage.clear_game_state();
        self.actuator.continue_game();
        self.setup();
    }

    /// Continue playing after a win.
    pub fn handle_keep_playing(&mut self) {
        self.keep_playing = true;
        self.actuator.continue_game();
        self.actuate();
    }

    /// Lost, or won without choosing to keep playing.
    #[must_use]
    pub fn is_game_terminated(&self) -> bool {
        self.over || (self.won && !self.keep_playing)
    }

    /// Snapshot of the session for persistence.
    #[must_use]
    pub fn serialize(&self) -> SavedGame {
        SavedGame {
            grid: self.grid.serialize(),
            score: self.score,
            over: self.over,
            won: self.won,
            keep_playing: self.keep_playing,
        }
    }

    /// Values the actuator receives.
    #[must_use]
    pub fn metadata(&self) -> ActuatorMetadata {
        ActuatorMetadata {
            score: self.score,
            over: self.over,
            won: self.won,
            best_score: self.storage.best_score(),
            terminated: self.is_game_terminated(),
        }
    }

    fn actuate(&mut self) {
        if self.storage.best_score() < self.score {
            self.storage.set_best_score(self.score);
        }

        // Only a lost game is cleared; a won game stays resumable.
        if self.over {
            self.storage.clear_game_state();
        } else {
            let saved = self.serialize();
            self.storage.set_game_state(&saved);
        }

        let metadata = self.metadata();
        self.actuator.actuate(&self.grid, &metadata);
    }

    /// Whether the current grid still allows a move under the configured rule.
    #[must_use]
    pub fn moves_available(&self) -> bool {
        moves_available(&self.grid, self.config.terminal_rule)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn keep_playing(&self) -> bool {
        self.keep_playing
    }

    #[must_use]
    pub fn undo_snapshot(&self) -> &[TileCell] {
        &self.undo_snapshot
    }

    /// RNG checkpoint, for reproducing the rest of a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the session, returning its collaborators.
    pub fn into_parts(self) -> (A, S) {
        (self.actuator, self.storage)
    }
}

impl<A: Actuator, S: StorageManager> std::fmt::Debug for GameManager<A, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameManager")
            .field("score", &self.score)
            .field("over", &self.over)
            .field("won", &self.won)
            .field("keep_playing", &self.keep_playing)
            .field("tiles", &self.grid.tile_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Tile;
    use crate::core::Position;
    use crate::manager::{MemoryStorage, NullActuator};

    fn new_game(seed: u64) -> GameManager<NullActuator, MemoryStorage> {
        GameManager::new(GameConfig::default(), NullActuator, MemoryStorage::new(), seed)
    }

    #[test]
    fn test_fresh_setup() {
        let game = new_game(1);
        assert_eq!(game.grid().tile_count(), 2);
        assert_eq!(game.score(), 0);
        assert!(!game.is_over());
        assert!(!game.is_won());
        assert!(!game.keep_playing());
        assert!(game.undo_snapshot().is_empty());
        for tile in game.grid().tiles() {
            assert!(tile.value == 4 || tile.value == 8);
        }
    }

    #[test]
    fn test_setup_persists_session() {
        let game = new_game(1);
        assert_eq!(game.storage().game_state(), Some(game.serialize()));
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = new_game(99);
        let b = new_game(99);
        assert_eq!(a.serialize(), b.serialize());
        assert_eq!(a.rng_state(), b.rng_state());
    }

    #[test]
    fn test_terminated_flags() {
        let mut game = new_game(1);
        game.won = true;
        assert!(game.is_game_terminated());

        game.handle_keep_playing();
        assert!(!game.is_game_terminated());
        assert!(game.storage().game_state().unwrap().keep_playing);

        game.over = true;
        assert!(game.is_game_terminated());
    }

    #[test]
    fn test_resume_rejects_other_size() {
        let mut storage = MemoryStorage::new();
        let mut grid = Grid::new(5);
        grid.insert_tile(Tile::new(Position::new(4, 4), 64));
        storage.set_game_state(&SavedGame {
            grid: grid.serialize(),
            score: 100,
            over: false,
            won: false,
            keep_playing: false,
        });

        let game = GameManager::new(GameConfig::new(4), NullActuator, storage, 3);
        assert_eq!(game.score(), 0);
        assert_eq!(game.grid().size(), 4);
        assert_eq!(game.grid().tile_count(), 2);
    }

    #[test]
    fn test_command_from_direction() {
        let direction = Direction::new(2).unwrap();
        assert_eq!(MoveCommand::from(direction), MoveCommand::Shift(direction));
    }
}
