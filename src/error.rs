//! Error types for yoda swaps.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for swap runs.
#[derive(Error, Debug)]
pub enum YodaError {
    #[error("Need the name of a single text file.")]
    Usage,

    #[error("{}: No such file or directory", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot create output file {}: {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed conditional '{line}': {reason}")]
    MalformedConditional { line: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl YodaError {
    /// Returns true for errors that end the run.
    ///
    /// A malformed conditional only affects its own line.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, YodaError::MalformedConditional { .. })
    }
}

/// A specialized Result type for swap runs.
pub type Result<T> = std::result::Result<T, YodaError>;
