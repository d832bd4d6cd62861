//! Custom error types and handling
//!
//! Everything that can go wrong during a run collapses into a single
//! "runtime error" at the process boundary; the variants below only exist so
//! logs and tests can tell the causes apart.

use std::io;
use std::path::PathBuf;

use crate::solution::SolutionError;

/// Harness-wide error type
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    // File errors
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Solution errors
    #[error("{0}")]
    Solution(#[from] SolutionError),

    #[error("solution panicked: {0}")]
    Panicked(String),

    #[error("solution output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

impl HarnessError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HarnessError::Io {
            action: "cannot read",
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HarnessError::Io {
            action: "cannot write",
            path: path.into(),
            source,
        }
    }

    /// Text written after the `Runtime Error: ` prefix
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}

/// Result type alias using HarnessError
pub type AppResult<T> = Result<T, HarnessError>;
