//! Error types for MAT5 writing

use mat5_core::{Mat5Error, SparseDefect};
use thiserror::Error;

/// Errors produced while serializing arrays
///
/// An `Io` error leaves the destination in an indeterminate state. Bytes
/// already written are not rolled back.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Format(Mat5Error),
}

impl From<Mat5Error> for Error {
    fn from(err: Mat5Error) -> Self {
        Error::Format(err)
    }
}

impl From<SparseDefect> for Error {
    fn from(defect: SparseDefect) -> Self {
        Error::Format(Mat5Error::InvalidSparse(defect))
    }
}

impl Error {
    /// Format error carried by this error, if any
    pub fn format_error(&self) -> Option<Mat5Error> {
        match self {
            Error::Format(err) => Some(*err),
            Error::Io(_) => None,
        }
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;
