//! Board coordinates, displacement vectors, and move directions.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that a position one hop off the board can be
/// represented and then rejected by `Grid::within_bounds`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one hop along `vector`, without any bounds check.
    #[must_use]
    pub const fn offset(self, vector: Vector) -> Self {
        Self {
            x: self.x + vector.dx,
            y: self.y + vector.dy,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A fixed integer displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// One of the eight knight-move directions.
///
/// Directions 0-3 form the first bank, 4-7 the mirrored bank.
/// The raw index is what input adapters and persisted replays carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Direction(u8);

impl Direction {
    /// Number of directions.
    pub const COUNT: usize = 8;

    /// All directions in index order.
    pub const ALL: [Direction; 8] = [
        Direction(0),
        Direction(1),
        Direction(2),
        Direction(3),
        Direction(4),
        Direction(5),
        Direction(6),
        Direction(7),
    ];

    /// Create a direction from its raw index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw index (0-7).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Iterate over all eight directions.
    pub fn all() -> impl Iterator<Item = Direction> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(GameError::InvalidDirection(index))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.0
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Direction({})", self.0)
    }
}
