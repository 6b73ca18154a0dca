//! Error types for the asset optimizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {}", .0.display())]
    NotFile(PathBuf),
    /// IO error accessing the path
    #[error("IO error: {0}")]
    IO(String),
}

/// Main error type for the optimizer.
///
/// Every per-file failure is converted to this type before being logged by
/// the batch loop; no variant aborts the batch.
#[derive(Error, Debug, Serialize)]
pub enum OptimizerError {
    /// Input path validation failed
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    /// Image could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Resize or encode failed
    #[error("Processing error: {0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

// Helper methods for error creation
impl OptimizerError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert io::Error to PathError
impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}
