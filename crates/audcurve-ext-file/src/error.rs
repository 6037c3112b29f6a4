//! Error types for file sources.

use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for file sources.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while reading or writing files.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The file could not be opened or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No row carried every required column.
    #[error("No valid {table} data found in {path}")]
    NoValidRow {
        /// Which table was searched, e.g. `BBSW`.
        table: &'static str,
        /// File searched.
        path: PathBuf,
    },

    /// The source has nothing configured for this table.
    #[error("{0} source not configured")]
    NotConfigured(&'static str),
}

impl SourceError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SourceError::NoValidRow {
            table: "BBSW",
            path: PathBuf::from("f1.csv"),
        };
        assert_eq!(err.to_string(), "No valid BBSW data found in f1.csv");
        assert_eq!(
            SourceError::NotConfigured("F2").to_string(),
            "F2 source not configured"
        );
    }
}
