//! Deterministic random number generation for tile spawning.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical spawn sequence
//! - **Injectable**: Owned by the game session, never a process global
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use knight_merge::core::GameRng;
//!
//! let cells: Vec<u32> = (0..16).collect();
//! let mut rng = GameRng::new(42);
//! let checkpoint = rng.state();
//! let first = rng.choose(&cells).copied();
//!
//! let mut restored = GameRng::from_state(&checkpoint);
//! assert_eq!(restored.choose(&cells).copied(), first);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing every random decision in a game.
///
/// Uses ChaCha8 for speed with good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position so capture is O(1) regardless of
/// how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Draw a spawn the way the rules do: value first, then a free cell.
    fn draw(rng: &mut GameRng, cells: &[(i32, i32)]) -> (bool, (i32, i32)) {
        let common = rng.gen_bool(0.9);
        let cell = *rng.choose(cells).unwrap();
        (common, cell)
    }

    fn free_cells() -> Vec<(i32, i32)> {
        (0..4).flat_map(|x| (0..4).map(move |y| (x, y))).collect()
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let cells = free_cells();
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(draw(&mut rng1, &cells), draw(&mut rng2, &cells));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let cells = free_cells();
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| draw(&mut rng1, &cells)).collect();
        let seq2: Vec<_> = (0..20).map(|_| draw(&mut rng2, &cells)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = GameRng::new(7);
        for _ in 0..50 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
        }
    }

    #[test]
    fn test_restored_state_continues_spawns() {
        let cells = free_cells();
        let mut rng = GameRng::new(42);
        for _ in 0..37 {
            draw(&mut rng, &cells);
        }

        let state = rng.state();
        assert_eq!(state.seed, 42);
        let expected: Vec<_> = (0..10).map(|_| draw(&mut rng, &cells)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| draw(&mut restored, &cells)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
