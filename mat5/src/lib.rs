//! MAT5 - array flags and sparse matrix serialization
//!
//! This library writes the binary pieces of MATLAB level-5 arrays that need
//! care: the packed array flags header and the tagged, padded segments of a
//! compressed sparse column matrix.
//!
//! ## Architecture
//!
//! - **mat5-core**: Pure format definitions, array flags codec, tag size
//!   math and validation (no I/O)
//! - **mat5**: Sink, CSC matrix, sparse serialization protocol and the
//!   sparse array element writer
//!
//! ## Quick Start
//!
//! ```rust
//! use mat5::{CscMatrix, Mat5Serializable, Sink, SparseArray};
//!
//! fn example() -> mat5::Result<Vec<u8>> {
//!     // 3x3 single precision matrix with four stored entries
//!     let matrix = CscMatrix::from_triplets(
//!         3,
//!         3,
//!         &[(0, 0, 1.0f32), (2, 0, 2.0), (1, 1, 3.0), (0, 2, 4.0)],
//!     )?;
//!     let array = SparseArray::new(matrix);
//!
//!     let mut sink = Sink::new(Vec::new());
//!     array.write_mat5("S", false, &mut sink)?;
//!     assert_eq!(sink.position() as usize, array.mat5_size("S"));
//!     Ok(sink.into_inner())
//! }
//! # example().unwrap();
//! ```
//!
//! Logging goes through `tracing`. The library never installs a subscriber.

pub use mat5_core::{
    // Codec
    ArrayFlags, MatlabType, Mat5Type, Tag, TagWords,
    // Traits
    Array, Mat5Attributes, Mat5Element, Opaque,
    // Errors
    Mat5Error, SparseDefect,
};

pub mod config;
pub mod error;
pub mod serializable;
pub mod sink;
pub mod sparse;

pub use config::{Endianness, WriterConfig};
pub use error::{Error, Result};
pub use serializable::Mat5Serializable;
pub use sink::{Sink, SinkElement};
pub use sparse::{CscMatrix, SparseArray, SparseSource};
