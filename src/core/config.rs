//! Game configuration types.
//!
//! A game is configured once at construction:
//! - `size`: side length of the square grid
//! - `start_tiles`: tiles spawned by a fresh setup
//! - `win_value`: merged value that sets the won flag
//! - `SpawnConfig`: values and odds for newly spawned tiles
//! - `TerminalRule`: how the no-moves-left check is evaluated
//!
//! The grid size never changes during a game.

use serde::{Deserialize, Serialize};

/// How `moves_available` decides whether the game can continue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalRule {
    /// Only an empty in-bounds cell one hop from some tile counts.
    ///
    /// A full board with adjacent equal values is reported as over.
    #[default]
    EmptyHop,
    /// Also count an equal-valued tile one hop away as a possible merge.
    MergeAware,
}

/// Values and odds for spawned tiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Value spawned most of the time.
    pub common_value: u32,
    /// Value spawned otherwise.
    pub rare_value: u32,
    /// Probability of spawning `common_value`.
    pub common_probability: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            common_value: 4,
            rare_value: 8,
            common_probability: 0.9,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid side length.
    pub size: usize,

    /// Number of tiles placed by a fresh setup.
    pub start_tiles: usize,

    /// A merge producing at least this value wins the game.
    pub win_value: u32,

    /// Spawned tile values.
    pub spawn: SpawnConfig,

    /// Terminal-state rule.
    pub terminal_rule: TerminalRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            start_tiles: 2,
            win_value: 1024,
            spawn: SpawnConfig::default(),
            terminal_rule: TerminalRule::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for a grid of the given size.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");
        assert!(size <= i32::MAX as usize, "Grid size must fit in a coordinate");

        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the number of starting tiles.
    #[must_use]
    pub fn with_start_tiles(mut self, count: usize) -> Self {
        assert!(count <= self.cell_count(), "More start tiles than cells");
        self.start_tiles = count;
        self
    }

    /// Set the winning value.
    #[must_use]
    pub fn with_win_value(mut self, value: u32) -> Self {
        assert!(value > 0, "Win value must be positive");
        self.win_value = value;
        self
    }

    /// Set the spawn configuration.
    #[must_use]
    pub fn with_spawn(mut self, spawn: SpawnConfig) -> Self {
        assert!(
            (0.0..=1.0).contains(&spawn.common_probability),
            "Spawn probability must be within [0, 1]"
        );
        assert!(
            spawn.common_value > 0 && spawn.rare_value > 0,
            "Spawn values must be positive"
        );
        self.spawn = spawn;
        self
    }

    /// Set the terminal-state rule.
    #[must_use]
    pub fn with_terminal_rule(mut self, rule: TerminalRule) -> Self {
        self.terminal_rule = rule;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}
