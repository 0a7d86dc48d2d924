#![no_std]

//! MAT5 Core - array flags and sparse segment format definitions
//!
//! This crate holds the pure, allocation-free part of MATLAB level-5 array
//! encoding: the array flags codec, the data element tag layout and the
//! numeric element kinds. Writing bytes lives in the `mat5` crate.

pub mod error;
pub mod format;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use validation::SparseDefect;
