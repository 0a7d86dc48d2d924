//! Validation utilities for MAT5 encoding
//!
//! Pure functions over layout math and sparse structure, no I/O.

pub mod format;
pub mod sparse;

pub use format::{calculate_padding, is_aligned};
pub use sparse::{columns_sorted, validate_csc, SparseDefect};
