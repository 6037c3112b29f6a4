//! Error types for curve operations.
//!
//! Assembly and interpolation never fail: missing inputs and degenerate
//! curves produce empty results. Errors only arise when a tenor schedule or
//! configuration is built, and when an interpolator is requested directly.

use audcurve_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A tenor schedule has no entries.
    #[error("Tenor schedule is empty")]
    EmptySchedule,

    /// A schedule entry has a blank label.
    #[error("Tenor schedule entry {index} has an empty label")]
    InvalidLabel {
        /// Position of the offending entry.
        index: usize,
    },

    /// Two schedule entries map to the same month.
    #[error("Duplicate tenor month {months} for '{label}'")]
    DuplicateTenorMonths {
        /// Label of the second entry.
        label: String,
        /// The shared month value.
        months: u32,
    },

    /// Schedule months are not increasing.
    #[error("Non-monotonic schedule at index {index}: {prev} >= {current}")]
    NonMonotonicSchedule {
        /// Index where the violation occurred.
        index: usize,
        /// Previous month value.
        prev: u32,
        /// Current month value.
        current: u32,
    },

    /// More than one cash-rate entry in a schedule.
    #[error("Tenor schedule has {count} cash-rate entries, at most one is allowed")]
    MultipleCashEntries {
        /// Number of cash-rate entries found.
        count: usize,
    },

    /// A schedule entry is internally inconsistent.
    #[error("Invalid schedule entry '{label}': {reason}")]
    InvalidSchedule {
        /// Label of the offending entry.
        label: String,
        /// Description of the problem.
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig {
        /// Configuration field name.
        field: String,
        /// Description of the problem.
        reason: String,
    },

    /// Configuration file could not be read or written.
    #[error("Configuration I/O error: {0}")]
    ConfigIo(String),

    /// Configuration file could not be parsed or serialized.
    #[error("Configuration format error: {0}")]
    ConfigFormat(String),

    /// Underlying interpolation error.
    #[error("Interpolation error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid schedule entry error.
    #[must_use]
    pub fn invalid_schedule(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            label: label.into(),
            reason: reason.into(),
        }
    }
}
