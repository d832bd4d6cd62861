//! Console-style solutions under evaluation
//!
//! A solution reads everything it needs from `input` and writes its answer to
//! `output`. It never touches the process's real standard streams; the
//! redirection adapter decides what those two handles are bound to.

pub mod binary_search;
pub mod scanner;

use std::io::{self, BufRead, Write};

pub use binary_search::BinarySearch;
pub use scanner::Scanner;

/// A single-shot program that consumes text and produces text
pub trait Solution {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Run once to completion against the given streams
    fn solve(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), SolutionError>;
}

/// Failures a solution can report instead of an answer
#[derive(Debug, thiserror::Error)]
pub enum SolutionError {
    #[error("unexpected end of input: expected {expected}")]
    MissingToken { expected: &'static str },

    #[error("invalid {expected}: {token:?}")]
    InvalidToken { expected: &'static str, token: String },

    #[error("count must not be negative, got {0}")]
    NegativeCount(i64),

    #[error("stream error: {0}")]
    Io(#[from] io::Error),
}
