//! File-driven harness
//!
//! One run: read the input file, feed it through the redirection adapter,
//! write the captured output. Any failure along the way ends up in the error
//! file as `Runtime Error: <message>` instead, and the output file is left
//! alone.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use tempfile::NamedTempFile;

use crate::config::HarnessPaths;
use crate::constants::{RUNTIME_ERROR_PREFIX, exit_codes};
use crate::error::{AppResult, HarnessError};
use crate::redirect::RedirectionAdapter;
use crate::solution::Solution;
use crate::utils::format_milliseconds;
use crate::verdict::{JudgeReport, Verdict};

/// Result of a single harness run
#[derive(Debug)]
pub enum RunOutcome {
    /// Output file written; `verdict` is set when an expected answer was present
    Success {
        output: String,
        elapsed_ms: u64,
        verdict: Option<Verdict>,
    },
    /// Error file written (or attempted)
    RuntimeError { message: String },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Success { .. } => exit_codes::OK,
            RunOutcome::RuntimeError { .. } => exit_codes::RUNTIME_ERROR,
        }
    }
}

/// Reads input, runs the solution, writes exactly one of output/error
pub struct Harness<S> {
    paths: HarnessPaths,
    adapter: RedirectionAdapter<S>,
}

impl<S: Solution> Harness<S> {
    pub fn new(paths: HarnessPaths, solution: S) -> Self {
        Self::with_adapter(paths, RedirectionAdapter::new(solution))
    }

    pub fn with_adapter(paths: HarnessPaths, adapter: RedirectionAdapter<S>) -> Self {
        Self { paths, adapter }
    }

    pub fn paths(&self) -> &HarnessPaths {
        &self.paths
    }

    /// Run once and return the process exit code
    pub fn run(&mut self) -> i32 {
        self.execute().exit_code()
    }

    /// Run once and return what happened
    pub fn execute(&mut self) -> RunOutcome {
        let name = self.adapter.solution().name();
        tracing::info!(solution = name, input = %self.paths.input.display(), "Starting run");

        match self.try_execute() {
            Ok((output, elapsed_ms)) => {
                tracing::info!(
                    solution = name,
                    bytes = output.len(),
                    "Run finished in {}",
                    format_milliseconds(elapsed_ms)
                );
                let verdict = self.check_expected(&output, elapsed_ms);
                RunOutcome::Success {
                    output,
                    elapsed_ms,
                    verdict,
                }
            }
            Err(e) => {
                let message = e.diagnostic();
                tracing::error!(solution = name, verdict = %Verdict::RuntimeError, "Run failed: {}", message);

                let record = format!("{}{}", RUNTIME_ERROR_PREFIX, message);
                if let Err(write_err) = write_atomically(&self.paths.error, record.as_bytes()) {
                    tracing::error!(
                        "Failed to write error file {}: {}",
                        self.paths.error.display(),
                        write_err
                    );
                }
                RunOutcome::RuntimeError { message }
            }
        }
    }

    fn try_execute(&mut self) -> AppResult<(String, u64)> {
        let input =
            fs::read(&self.paths.input).map_err(|e| HarnessError::read(&self.paths.input, e))?;
        tracing::debug!(bytes = input.len(), "Input loaded");

        let start = Instant::now();
        let output = self.adapter.run_solution(&input)?;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        write_atomically(&self.paths.output, output.as_bytes())
            .map_err(|e| HarnessError::write(&self.paths.output, e))?;

        Ok((output, elapsed_ms))
    }

    /// Judge the output when an expected answer sits next to the input
    fn check_expected(&self, output: &str, elapsed_ms: u64) -> Option<Verdict> {
        let expected_path: &Path = &self.paths.expected;
        if !expected_path.exists() {
            return None;
        }

        match fs::read_to_string(expected_path) {
            Ok(expected) => {
                let report =
                    JudgeReport::new(self.adapter.solution().name(), output, &expected, elapsed_ms);
                tracing::info!(verdict = %report.verdict, report = %report.to_json(), "Output judged");
                Some(report.verdict)
            }
            Err(e) => {
                tracing::warn!("Failed to read expected output {}: {}", expected_path.display(), e);
                None
            }
        }
    }
}

/// Write `contents` to a temporary file beside `path`, then rename it into place.
/// A failed write leaves nothing at `path`.
fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
