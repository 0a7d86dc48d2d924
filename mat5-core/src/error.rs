//! Error types for MAT5 encoding operations

use crate::validation::SparseDefect;

/// Errors that can occur while encoding MAT5 headers and segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mat5Error {
    /// Array flags carry a class id that is not a known MATLAB type
    UnknownType(u8),
    /// Value is sparse but cannot report its own flags and capacity
    UnsupportedSparseType,
    /// Byte count or dimension does not fit the 32-bit wire fields
    SizeOverflow,
    /// Sparse structure failed opt-in validation
    InvalidSparse(SparseDefect),
    /// Buffer lengths do not match the declared matrix shape
    ShapeMismatch,
}

impl core::fmt::Display for Mat5Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mat5Error::UnknownType(id) => write!(f, "Unknown MATLAB type id {id}"),
            Mat5Error::UnsupportedSparseType => {
                write!(f, "Sparse matrices must implement Mat5Attributes")
            }
            Mat5Error::SizeOverflow => write!(f, "Size does not fit a 32-bit MAT5 field"),
            Mat5Error::InvalidSparse(defect) => write!(f, "Invalid sparse matrix: {defect}"),
            Mat5Error::ShapeMismatch => write!(f, "Buffer lengths do not match matrix shape"),
        }
    }
}

/// Result type for MAT5 core operations
pub type Result<T> = core::result::Result<T, Mat5Error>;
