//! Binary format definitions for MAT5 array encoding
//!
//! Pure wire-level definitions: class ids, data types, tag layout and the
//! array flags codec. No I/O.

pub mod array_flags;
pub mod constants;
pub mod tag;
pub mod types;

pub use array_flags::ArrayFlags;
pub use tag::{Tag, TagWords};
pub use types::{Mat5Type, MatlabType};
