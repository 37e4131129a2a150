//! Cell evaluation.
//!
//! Scores every grid cell from the controlled entity's position and picks
//! the best one.

pub mod heuristic;

pub use heuristic::{evaluate, penalty, score_cell, ScoreMap};
