//! Whitespace-delimited token reader

use std::io::BufRead;
use std::str::FromStr;

use super::SolutionError;

/// Pulls tokens off a reader one line at a time
pub struct Scanner<'a> {
    reader: &'a mut dyn BufRead,
    // Remaining tokens of the current line, reversed so `pop` yields them in order
    pending: Vec<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(reader: &'a mut dyn BufRead) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Next raw token, or `None` once the reader is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>, SolutionError> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }

            // Raw bytes: only tokens that are actually parsed need to be valid text
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line
                .split(|b| b.is_ascii_whitespace())
                .filter(|token| !token.is_empty())
                .rev()
                .map(|token| String::from_utf8_lossy(token).into_owned())
                .collect();
        }
    }

    /// Next token parsed as `T`; `expected` names the value in error messages
    pub fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, SolutionError> {
        let token = self
            .next_token()?
            .ok_or(SolutionError::MissingToken { expected })?;

        token
            .parse()
            .map_err(|_| SolutionError::InvalidToken { expected, token })
    }
}
