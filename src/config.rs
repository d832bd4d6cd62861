//! Application configuration management
//!
//! The harness has almost nothing to configure: file locations are fixed and
//! only the log filter is read from the environment.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::constants::{DEFAULT_LOG_FILTER, ERROR_PATH, EXPECTED_PATH, INPUT_PATH, OUTPUT_PATH};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: HarnessPaths,
    pub logging: LoggingConfig,
}

/// File locations used by a single harness run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub error: PathBuf,
    /// Read only when present
    pub expected: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            paths: HarnessPaths::default(),
            logging: LoggingConfig::from_env(),
        }
    }
}

impl Default for HarnessPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_PATH),
            output: PathBuf::from(OUTPUT_PATH),
            error: PathBuf::from(ERROR_PATH),
            expected: PathBuf::from(EXPECTED_PATH),
        }
    }
}

impl HarnessPaths {
    /// Same file names as the defaults, rooted at `dir` instead of `/app`
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = Self::default();
        let rebase = |path: &Path| match path.file_name() {
            Some(name) => dir.join(name),
            None => dir.to_path_buf(),
        };

        Self {
            input: rebase(&defaults.input),
            output: rebase(&defaults.output),
            error: rebase(&defaults.error),
            expected: rebase(&defaults.expected),
        }
    }
}

impl LoggingConfig {
    fn from_env() -> Self {
        Self {
            rust_log: env::var("RUST_LOG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
