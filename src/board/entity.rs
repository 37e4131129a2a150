//! Entities reported by the judge each round.

use super::coord::Coordinate;

/// A piece on the board: the controlled entity or one of the adversaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    pub position: Coordinate,
    pub is_adversary: bool,
    /// Remaining "back in time" uses. Parsed but not used in scoring.
    pub back_in_time_left: i64,
}

impl Entity {
    /// Creates the controlled entity.
    pub fn controlled(position: Coordinate, back_in_time_left: i64) -> Self {
        Self {
            position,
            is_adversary: false,
            back_in_time_left,
        }
    }

    /// Creates an adversary entity.
    pub fn adversary(position: Coordinate, back_in_time_left: i64) -> Self {
        Self {
            position,
            is_adversary: true,
            back_in_time_left,
        }
    }
}
