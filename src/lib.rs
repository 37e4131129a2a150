//! backtocode bot library.
//!
//! Exposes the grid model, the cell evaluator, protocol parsing and the
//! agent turn loop for use by integration tests and the binary entry point.

pub mod agent;
pub mod board;
pub mod eval;
pub mod protocol;
