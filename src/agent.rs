//! Agent state and the per-round turn loop.
//!
//! The agent reads the opponent count once, then for every round scores a
//! freshly built grid and writes the best cell as `x y` on the primary
//! output. Nothing but the opponent count survives between rounds.

use std::io::{BufRead, Write};

use crate::board::coord::Coordinate;
use crate::protocol::{read_opponent_count, read_turn, InputCursor, ProtocolError, TurnInput};

/// Runtime switches for the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentOptions {
    /// Write the per-round score dump to the diagnostic sink.
    pub dump_scores: bool,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self { dump_scores: true }
    }
}

/// Holds the per-session state of the agent.
pub struct Agent {
    pub opponent_count: usize,
    pub options: AgentOptions,
    rounds_played: u64,
}

impl Agent {
    pub fn new(opponent_count: usize, options: AgentOptions) -> Self {
        Agent {
            opponent_count,
            options,
            rounds_played: 0,
        }
    }

    /// Reads the session header and creates the agent.
    pub fn from_input<R: BufRead>(
        cursor: &mut InputCursor<R>,
        options: AgentOptions,
    ) -> Result<Self, ProtocolError> {
        let opponent_count = read_opponent_count(cursor)?;
        Ok(Agent::new(opponent_count, options))
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Plays one round: scores the grid, dumps the scores to `diag` and
    /// writes the chosen coordinate to `out`. Both sinks are flushed before
    /// returning, the dump ahead of the move.
    pub fn play_round<W: Write, D: Write>(
        &mut self,
        turn: &TurnInput,
        out: &mut W,
        diag: &mut D,
    ) -> Result<Coordinate, ProtocolError> {
        let scores = turn.grid.evaluate(&turn.me);
        if self.options.dump_scores {
            scores.write_dump(diag)?;
            diag.flush()?;
        }

        let (best, _) = scores.best_cell().ok_or(ProtocolError::EmptyGrid)?;
        writeln!(out, "{}", best)?;
        out.flush()?;

        self.rounds_played += 1;
        Ok(best)
    }

    /// Plays rounds until the input ends at a round boundary. Returns the
    /// number of rounds played.
    pub fn run<R: BufRead, W: Write, D: Write>(
        &mut self,
        cursor: &mut InputCursor<R>,
        out: &mut W,
        diag: &mut D,
    ) -> Result<u64, ProtocolError> {
        while let Some(turn) = read_turn(cursor, self.opponent_count)? {
            self.play_round(&turn, out, diag)?;
        }
        Ok(self.rounds_played)
    }
}

/// Runs a whole session: header, then rounds until input ends.
pub fn run_session<R: BufRead, W: Write, D: Write>(
    input: R,
    out: &mut W,
    diag: &mut D,
    options: AgentOptions,
) -> Result<u64, ProtocolError> {
    let mut cursor = InputCursor::new(input);
    let mut agent = Agent::from_input(&mut cursor, options)?;
    agent.run(&mut cursor, out, diag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(header: &str, rounds: &[(&str, Vec<&str>, Vec<String>)]) -> String {
        let mut s = format!("{}\n", header);
        for (i, (me, opponents, rows)) in rounds.iter().enumerate() {
            s.push_str(&format!("{}\n{}\n", i + 1, me));
            for o in opponents.iter() {
                s.push_str(o);
                s.push('\n');
            }
            for r in rows {
                s.push_str(r);
                s.push('\n');
            }
        }
        s
    }

    fn empty_rows() -> Vec<String> {
        vec![".".repeat(20); 20]
    }

    fn run(input: &str, options: AgentOptions) -> (Result<u64, ProtocolError>, String, String) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let result = run_session(input.as_bytes(), &mut out, &mut diag, options);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diag).unwrap(),
        )
    }

    #[test]
    fn default_options_dump_scores() {
        assert!(AgentOptions::default().dump_scores);
    }

    #[test]
    fn empty_grid_round_picks_own_position() {
        let input = session("0", &[("5 5 100", vec![], empty_rows())]);
        let (result, out, diag) = run(&input, AgentOptions::default());

        assert_eq!(result.unwrap(), 1);
        assert_eq!(out, "5 5\n");

        let dump: Vec<&str> = diag.lines().collect();
        assert_eq!(dump.len(), 20);
        assert!(dump.iter().all(|l| l.ends_with(' ')));
        let row5: Vec<i64> = dump[5]
            .split_whitespace()
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(row5[5], 99);
        assert_eq!(row5[0], 94);
        assert_eq!(row5[19], 85);
    }

    #[test]
    fn marked_own_square_loses_to_neighbour() {
        let mut rows = empty_rows();
        rows[0].replace_range(0..1, "0");
        rows[1].replace_range(0..1, "1");
        let input = session("1", &[("0 0 3", vec!["0 1 3"], rows)]);
        let (result, out, _) = run(&input, AgentOptions::default());

        assert_eq!(result.unwrap(), 1);
        assert_eq!(out, "1 0\n");
    }

    #[test]
    fn quiet_mode_skips_dump() {
        let input = session("0", &[("2 3 0", vec![], empty_rows())]);
        let (result, out, diag) = run(&input, AgentOptions { dump_scores: false });
        assert!(result.is_ok());
        assert_eq!(out, "2 3\n");
        assert!(diag.is_empty());
    }

    #[test]
    fn rounds_are_independent() {
        let mut claimed = empty_rows();
        claimed[4].replace_range(4..5, "0");
        let input = session(
            "0",
            &[
                ("4 4 0", vec![], claimed),
                ("9 12 0", vec![], empty_rows()),
                ("4 4 0", vec![], empty_rows()),
            ],
        );
        let (result, out, _) = run(&input, AgentOptions::default());
        assert_eq!(result.unwrap(), 3);
        assert_eq!(out, "4 3\n9 12\n4 4\n");
    }

    #[test]
    fn truncated_round_is_fatal() {
        let input = "0\n1\n5 5 100\n....................\n";
        let (result, out, _) = run(input, AgentOptions::default());
        assert!(matches!(result, Err(ProtocolError::UnexpectedEof { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_header_is_fatal() {
        let (result, _, _) = run("", AgentOptions::default());
        assert!(matches!(result, Err(ProtocolError::UnexpectedEof { .. })));
    }

    #[test]
    fn blank_grid_is_fatal() {
        let input = session("0", &[("0 0 0", vec![], vec![String::new(); 20])]);
        let (result, _, _) = run(&input, AgentOptions { dump_scores: false });
        assert!(matches!(result, Err(ProtocolError::EmptyGrid)));
    }

    /// Records the write position at every flush.
    #[derive(Default)]
    struct FlushLog {
        data: Vec<u8>,
        flushed_at: Vec<usize>,
    }

    impl Write for FlushLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed_at.push(self.data.len());
            Ok(())
        }
    }

    #[test]
    fn dump_is_flushed_every_round() {
        let input = session(
            "0",
            &[("5 5 0", vec![], empty_rows()), ("1 1 0", vec![], empty_rows())],
        );
        let mut out = Vec::new();
        let mut diag = FlushLog::default();
        run_session(input.as_bytes(), &mut out, &mut diag, AgentOptions::default()).unwrap();

        let text = String::from_utf8(diag.data.clone()).unwrap();
        let first_round = text.lines().take(20).map(|l| l.len() + 1).sum::<usize>();
        assert_eq!(diag.flushed_at, vec![first_round, diag.data.len()]);
    }

    #[test]
    fn play_round_counts_rounds() {
        let mut agent = Agent::new(0, AgentOptions { dump_scores: false });
        let text = session("0", &[("1 1 0", vec![], empty_rows())]);
        let mut cursor = InputCursor::new(text.as_bytes());
        cursor.next_line("header").unwrap();
        let turn = read_turn(&mut cursor, 0).unwrap().unwrap();

        let mut out = Vec::new();
        let best = agent.play_round(&turn, &mut out, &mut std::io::sink()).unwrap();
        assert_eq!(best, Coordinate::new(1, 1));
        assert_eq!(agent.rounds_played(), 1);
    }
}
