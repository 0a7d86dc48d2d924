//! Serialization of complete array elements
//!
//! An array element is a `miMATRIX` tag followed by the array flags,
//! dimensions and name subelements and then the class specific payload.
//! The global flag and the name only exist for root level variables, nested
//! arrays get `false` and an empty name.

use crate::sink::Sink;
use crate::Result;
use mat5_core::format::constants::array_flags::WORD_COUNT;
use mat5_core::format::constants::TAG_SIZE;
use mat5_core::{ArrayFlags, Mat5Type, Tag};
use std::io::Write;

/// Arrays that can be written as a MAT5 array element
pub trait Mat5Serializable {
    /// Number of serialized bytes including the matrix tag
    fn mat5_size(&self, name: &str) -> usize;

    /// Write the array element including all tags and padding
    fn write_mat5<W: Write>(&self, name: &str, global: bool, sink: &mut Sink<W>) -> Result<()>;
}

/// Serialized size of the flags, dimensions and name subelements
pub fn array_header_size(name: &str, ndims: usize) -> usize {
    Mat5Type::UInt32.serialized_size(WORD_COUNT)
        + Mat5Type::Int32.serialized_size(ndims)
        + Mat5Type::Int8.serialized_size(name.len())
}

/// Total element size for a class payload of `payload_size` bytes
pub fn matrix_element_size(name: &str, ndims: usize, payload_size: usize) -> usize {
    TAG_SIZE + array_header_size(name, ndims) + payload_size
}

/// Write the `miMATRIX` tag followed by flags, dimensions and name
///
/// `element_size` is the full size returned by [`matrix_element_size`].
pub fn write_matrix_header<W: Write>(
    sink: &mut Sink<W>,
    element_size: usize,
    flags: &ArrayFlags,
    dims: &[usize],
    name: &str,
) -> Result<()> {
    // fail before the first byte if any dimension is too wide
    crate::sink::dimensions_to_i32(dims)?;
    sink.write_element_tag(Tag::new(Mat5Type::Matrix, element_size - TAG_SIZE))?;
    sink.write_array_flags(flags)?;
    sink.write_dimensions(dims)?;
    sink.write_name(name)
}
