//! Board representation.
//!
//! Contains coordinates, cells with their occupancy, the entities reported
//! each round, and the per-round grid.

pub mod cell;
pub mod coord;
pub mod entity;
pub mod grid;

pub use cell::{Cell, Occupancy};
pub use coord::Coordinate;
pub use entity::Entity;
pub use grid::{Grid, GRID_HEIGHT, GRID_WIDTH};
