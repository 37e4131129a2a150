//! Parsing of the session header and per-round input batches.
//!
//! Session header: one line with the opponent count `N`.
//!
//! Each round:
//! 1. the round number,
//! 2. `x y backInTimeLeft` for the controlled entity,
//! 3. `N` lines of `x y backInTimeLeft`, one per opponent,
//! 4. `GRID_HEIGHT` lines of occupancy characters.

use std::io::BufRead;

use super::reader::{parse_int, InputCursor, ProtocolError};
use crate::board::coord::Coordinate;
use crate::board::entity::Entity;
use crate::board::grid::{Grid, GRID_HEIGHT};

/// Everything the judge sends for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnInput {
    /// Consumed to stay in sync; not used for scoring.
    pub round: i64,
    pub me: Entity,
    /// Opponents in input order.
    pub opponents: Vec<Entity>,
    pub grid: Grid,
}

/// Reads the session header line holding the opponent count.
pub fn read_opponent_count<R: BufRead>(
    cursor: &mut InputCursor<R>,
) -> Result<usize, ProtocolError> {
    let n = cursor.next_int("opponent count")?;
    usize::try_from(n).map_err(|_| ProtocolError::InvalidOpponentCount(n))
}

/// Reads one full round. Returns `Ok(None)` when input ends cleanly before
/// the round starts; ending anywhere later is a protocol violation.
pub fn read_turn<R: BufRead>(
    cursor: &mut InputCursor<R>,
    opponent_count: usize,
) -> Result<Option<TurnInput>, ProtocolError> {
    let round_text = match cursor.try_next_line()? {
        Some(line) => line.to_owned(),
        None => return Ok(None),
    };
    let round = parse_int(&round_text, cursor.line_no())?;

    let me = read_entity(cursor, false, "controlled entity position")?;
    let opponents = (0..opponent_count)
        .map(|_| read_entity(cursor, true, "opponent position"))
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::with_capacity(GRID_HEIGHT);
    for _ in 0..GRID_HEIGHT {
        rows.push(cursor.next_line("grid row")?.to_owned());
    }

    Ok(Some(TurnInput {
        round,
        me,
        opponents,
        grid: Grid::from_rows(rows),
    }))
}

fn read_entity<R: BufRead>(
    cursor: &mut InputCursor<R>,
    is_adversary: bool,
    expected: &'static str,
) -> Result<Entity, ProtocolError> {
    let [x, y, back_in_time_left] = cursor.next_ints::<3>(expected)?;
    let position = Coordinate::new(x, y);
    Ok(if is_adversary {
        Entity::adversary(position, back_in_time_left)
    } else {
        Entity::controlled(position, back_in_time_left)
    })
}
