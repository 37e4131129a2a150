//! The occupancy grid for one round.
//!
//! A grid is built from the raw occupancy rows sent by the judge, one cell
//! per character. It is rebuilt from scratch every round and never carries
//! state between rounds.

use std::ops::Index;

use super::cell::Cell;
use super::coord::Coordinate;
use super::entity::Entity;
use crate::eval::{evaluate, ScoreMap};

/// Number of occupancy rows the judge sends each round.
pub const GRID_HEIGHT: usize = 20;

/// Nominal row width. Rows take their actual width from the input line.
pub const GRID_WIDTH: usize = 20;

/// A 2D collection of cells stored row by row.
///
/// Invariant: `rows[y][x].coordinate == Coordinate::new(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from occupancy rows, mapping each row's characters
    /// left to right onto columns `0..len`.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(y, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(x, c)| Cell::new(Coordinate::new(x as i64, y as i64), c))
                    .collect()
            })
            .collect();
        Grid { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cell at column `x`, row `y`, if in range.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Scores every cell relative to `entity`'s position.
    pub fn evaluate(&self, entity: &Entity) -> ScoreMap {
        evaluate(self, entity)
    }
}

/// Indexed by `(x, y)`. Panics when out of range.
impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        &self.rows[y][x]
    }
}
