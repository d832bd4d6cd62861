//! SearchJudge - Single-Exercise Evaluation Harness
//!
//! Runs a console-style solution against a fixed input file and records
//! either its output or a runtime error.
//!
//! # Architecture
//!
//! - **Harness**: file I/O and the success/failure split
//! - **Redirection adapter**: binds in-memory streams as the solution's
//!   stdin/stdout and restores the previous bindings afterwards
//! - **Solutions**: the code under evaluation, behind the `Solution` trait

pub mod config;
pub mod constants;
pub mod error;
pub mod harness;
pub mod redirect;
pub mod solution;
pub mod utils;
pub mod verdict;

// Re-export commonly used types
pub use config::{CONFIG, Config, HarnessPaths};
pub use error::{AppResult, HarnessError};
pub use harness::{Harness, RunOutcome};
pub use redirect::{RedirectionAdapter, StreamBindings};
pub use solution::{BinarySearch, Solution, SolutionError};
pub use verdict::Verdict;
