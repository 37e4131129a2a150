//! Grid cells and their occupancy.
//!
//! Each cell is classified once from the raw occupancy character read from
//! the judge. Unrecognized characters are treated as empty.

use super::coord::Coordinate;

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy {
    Empty,
    /// Claimed by the controlled entity (`'0'`).
    Controlled,
    /// Claimed by adversary 1, 2 or 3 (`'1'`..`'3'`).
    Adversary(u8),
}

impl Occupancy {
    /// Classifies a raw occupancy character. Never fails.
    pub const fn from_symbol(c: char) -> Occupancy {
        match c {
            '0' => Occupancy::Controlled,
            '1' => Occupancy::Adversary(1),
            '2' => Occupancy::Adversary(2),
            '3' => Occupancy::Adversary(3),
            _ => Occupancy::Empty,
        }
    }
}

/// A single grid cell: a fixed position and the occupancy read for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub coordinate: Coordinate,
    pub occupancy: Occupancy,
}

impl Cell {
    /// Creates a cell, classifying the raw occupancy character.
    pub fn new(coordinate: Coordinate, symbol: char) -> Self {
        Self {
            coordinate,
            occupancy: Occupancy::from_symbol(symbol),
        }
    }

    /// Manhattan distance from this cell to `target`.
    pub fn distance(&self, target: Coordinate) -> i64 {
        self.coordinate.manhattan(target)
    }
}
