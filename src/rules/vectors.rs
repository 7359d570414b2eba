//! The knight-move vector table.
//!
//! Directions 0-3 use one bank of knight offsets and 4-7 a mirrored bank.
//! The table does not reduce to a rotation, so it is listed literally.

use crate::core::{Direction, Vector};

const VECTORS: [Vector; Direction::COUNT] = [
    Vector::new(1, -2),
    Vector::new(2, -1),
    Vector::new(-1, 2),
    Vector::new(-2, 1),
    Vector::new(-1, -2),
    Vector::new(2, 1),
    Vector::new(1, 2),
    Vector::new(-2, -1),
];

/// Displacement for a tile of `_value` moving in `direction`.
///
/// The value is accepted for call-site symmetry with the rest of the rules
/// but does not influence the result.
#[must_use]
pub const fn vector(direction: Direction, _value: u32) -> Vector {
    VECTORS[direction.index() as usize]
}
