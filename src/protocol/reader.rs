//! Line-oriented input cursor over the judge's stdin stream.
//!
//! Every read either yields the next line or fails with a `ProtocolError`.
//! There is no retry and no look-ahead: the judge's input is a strict
//! contract, and any violation ends the session.

use std::io::{self, BufRead};

/// Errors raised when the judge's input breaks the protocol.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("invalid integer '{token}' at line {line}")]
    InvalidInteger { line: usize, token: String },

    #[error("expected {expected} integers at line {line}, got {got}")]
    WrongFieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid opponent count: {0}")]
    InvalidOpponentCount(i64),

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// A synchronous cursor handing out one input line at a time.
pub struct InputCursor<R> {
    reader: R,
    buf: String,
    line_no: usize,
}

impl<R: BufRead> InputCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_no: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Reads the next line without its terminator, or `None` at end of input.
    pub fn try_next_line(&mut self) -> Result<Option<&str>, ProtocolError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        let line = self.buf.trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(line))
    }

    /// Reads the next line. End of input is a protocol violation.
    pub fn next_line(&mut self, expected: &'static str) -> Result<&str, ProtocolError> {
        let line = self.line_no + 1;
        self.try_next_line()?
            .ok_or(ProtocolError::UnexpectedEof { line, expected })
    }

    /// Reads a line holding exactly one integer and nothing else.
    pub fn next_int(&mut self, expected: &'static str) -> Result<i64, ProtocolError> {
        let text = self.next_line(expected)?.to_owned();
        parse_int(&text, self.line_no)
    }

    /// Reads a line of at least `N` space-separated integers. Runs of spaces
    /// count as one separator and extra fields are ignored.
    pub fn next_ints<const N: usize>(
        &mut self,
        expected: &'static str,
    ) -> Result<[i64; N], ProtocolError> {
        let line = self.next_line(expected)?.to_owned();
        let line_no = self.line_no;
        let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
        if tokens.len() < N {
            return Err(ProtocolError::WrongFieldCount {
                line: line_no,
                expected: N,
                got: tokens.len(),
            });
        }
        let mut values = [0; N];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = parse_int(token, line_no)?;
        }
        Ok(values)
    }
}

pub(crate) fn parse_int(token: &str, line: usize) -> Result<i64, ProtocolError> {
    token.parse::<i64>().map_err(|_| ProtocolError::InvalidInteger {
        line,
        token: token.to_string(),
    })
}
