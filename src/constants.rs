//! Application-wide constants
//!
//! Fixed file locations, diagnostics and exit codes used by the harness.

// =============================================================================
// FILE LOCATIONS
// =============================================================================

/// Input file read by the harness
pub const INPUT_PATH: &str = "/app/input.txt";

/// Output file written on success
pub const OUTPUT_PATH: &str = "/app/output.txt";

/// Error file written on failure
pub const ERROR_PATH: &str = "/app/error.txt";

/// Optional expected output used for the verdict check
pub const EXPECTED_PATH: &str = "/app/expected.txt";

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Prefix of every error record
pub const RUNTIME_ERROR_PREFIX: &str = "Runtime Error: ";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "searchjudge=info";

// =============================================================================
// EXIT CODES
// =============================================================================

pub mod exit_codes {
    /// Solution ran and its output was written.
    pub const OK: i32 = 0;
    /// Anything failed during read, compute or write.
    pub const RUNTIME_ERROR: i32 = 1;
}
