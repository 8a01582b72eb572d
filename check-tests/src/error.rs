use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for coverage report handling
pub type Result<T> = std::result::Result<T, CoverageError>;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Failed to read coverage report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed coverage report at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid include pattern: {0}")]
    Pattern(#[from] globset::Error),
}

impl CoverageError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        CoverageError::Parse {
            line,
            message: message.into(),
        }
    }
}
