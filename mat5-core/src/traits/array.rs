//! Array capabilities used to derive array flags

use crate::format::MatlabType;

/// Explicit control over the flags of an array
///
/// Implemented by arrays whose flags cannot be derived from their public
/// numeric type alone, e.g. a sparse matrix reporting its `nz_max`.
pub trait Mat5Attributes {
    fn is_logical(&self) -> bool;

    fn is_complex(&self) -> bool;

    fn nz_max(&self) -> i32;
}

/// Any value that can be stored as a MAT5 array
pub trait Array {
    /// Public array class
    fn matlab_type(&self) -> MatlabType;

    /// Array dimensions, at least two entries
    fn dimensions(&self) -> &[usize];

    /// Logical numeric kind. Only meaningful for numeric matrices.
    fn is_logical(&self) -> bool {
        false
    }

    /// Complex numeric kind. Only meaningful for numeric matrices.
    fn is_complex(&self) -> bool {
        false
    }

    /// Whether the array is stored in sparse layout
    fn is_sparse(&self) -> bool {
        self.matlab_type() == MatlabType::Sparse
    }

    /// Attribute overrides, if the array provides them
    fn mat5_attributes(&self) -> Option<&dyn Mat5Attributes> {
        None
    }
}

/// Opaque reference values such as Java or MCOS objects
pub trait Opaque: Array {
    /// Class name of the wrapped object
    fn class_name(&self) -> &str;
}
