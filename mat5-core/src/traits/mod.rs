//! Abstract interfaces for MAT5 encoding
//!
//! Element kinds and array capabilities consumed by the codec and the
//! sparse protocol. Pure interfaces, no I/O.

pub mod array;
pub mod element;

pub use array::{Array, Mat5Attributes, Opaque};
pub use element::Mat5Element;
