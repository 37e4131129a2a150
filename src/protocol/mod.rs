//! Judge protocol handling.
//!
//! Reads the line-oriented input stream into structured values: the session
//! header, then one `TurnInput` per round.

pub mod reader;
pub mod turn;

pub use reader::{InputCursor, ProtocolError};
pub use turn::{read_opponent_count, read_turn, TurnInput};
