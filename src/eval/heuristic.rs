//! Distance-and-occupancy cell scoring.
//!
//! Every cell scores `BASE_SCORE - distance(cell, entity)`, minus a penalty
//! for occupied cells. Cells near the controlled entity score higher, and
//! occupied cells rank below empty ones at the same distance.
//!
//! Scores live in a `ScoreMap` with the same shape as the grid it was
//! computed from. A map is produced fresh for each evaluation, so repeated
//! evaluations never accumulate.

use std::io::{self, Write};
use std::ops::{Index, IndexMut};

use crate::board::cell::{Cell, Occupancy};
use crate::board::coord::Coordinate;
use crate::board::entity::Entity;
use crate::board::grid::Grid;

/// Score of an empty cell at distance 0.
pub const BASE_SCORE: i64 = 99;

/// Penalty for a cell already claimed by the controlled entity.
pub const CONTROLLED_PENALTY: i64 = 10;

/// Penalty for a cell claimed by any adversary.
pub const ADVERSARY_PENALTY: i64 = 15;

/// Returns the occupancy penalty. All adversaries share one bucket.
pub const fn penalty(occupancy: Occupancy) -> i64 {
    match occupancy {
        Occupancy::Empty => 0,
        Occupancy::Controlled => CONTROLLED_PENALTY,
        Occupancy::Adversary(_) => ADVERSARY_PENALTY,
    }
}

/// Scores a single cell relative to `origin`.
#[inline]
pub fn score_cell(cell: &Cell, origin: Coordinate) -> i64 {
    BASE_SCORE - cell.distance(origin) - penalty(cell.occupancy)
}

/// Scores every cell of `grid` relative to `entity`'s position.
pub fn evaluate(grid: &Grid, entity: &Entity) -> ScoreMap {
    let origin = entity.position;
    let rows = grid
        .rows()
        .map(|row| row.iter().map(|cell| score_cell(cell, origin)).collect())
        .collect();
    ScoreMap { rows }
}

/// Per-cell scores, row-major, shaped like the grid they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMap {
    rows: Vec<Vec<i64>>,
}

impl ScoreMap {
    /// An all-zero map with the same shape as `grid`.
    pub fn zeroed(grid: &Grid) -> Self {
        let rows = grid.rows().map(|row| vec![0; row.len()]).collect();
        ScoreMap { rows }
    }

    /// Returns the score at `coord`, if in range.
    pub fn get(&self, coord: Coordinate) -> Option<i64> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Iterates over `(coordinate, score)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, i64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &s)| (Coordinate::new(x as i64, y as i64), s))
        })
    }

    /// Returns the highest-scoring cell. Ties go to the first cell in
    /// row-major order. `None` only when the map has no cells.
    pub fn best_cell(&self) -> Option<(Coordinate, i64)> {
        let mut best: Option<(Coordinate, i64)> = None;
        for (coord, score) in self.iter() {
            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((coord, score)),
            }
        }
        best
    }

    /// Writes every row's scores, each followed by a space, one row per line.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.rows {
            for score in row {
                write!(out, "{} ", score)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Indexed by `(x, y)`. Panics when out of range.
impl Index<(usize, usize)> for ScoreMap {
    type Output = i64;

    fn index(&self, (x, y): (usize, usize)) -> &i64 {
        &self.rows[y][x]
    }
}

impl IndexMut<(usize, usize)> for ScoreMap {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut i64 {
        &mut self.rows[y][x]
    }
}
