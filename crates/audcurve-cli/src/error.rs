//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A comma-separated rate list has the wrong length.
    #[error("--{flag} expects {expected} comma-separated rates, got {actual}")]
    RateCount {
        /// Flag name without dashes.
        flag: &'static str,
        /// Number of rates required.
        expected: usize,
        /// Number of rates given.
        actual: usize,
    },

    /// A rate could not be parsed.
    #[error("Invalid rate '{value}' in --{flag}")]
    InvalidRate {
        /// Flag name without dashes.
        flag: &'static str,
        /// Offending text.
        value: String,
    },

    /// Invalid horizon.
    #[error("Invalid horizon: {0}. Must be at least 1 month.")]
    InvalidHorizon(u32),

    /// The curve has too few points for the request.
    #[error("Curve has {0} point(s); at least 2 are needed. Provide both short rates and bond yields.")]
    CurveTooShort(usize),

    /// A file exists and would be overwritten.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
