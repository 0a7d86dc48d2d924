//! Numeric element kinds for MAT5 segments
//!
//! The set of element kinds a MAT5 payload can carry is fixed, so the trait
//! is sealed and implemented for exactly the primitive types that have a
//! matching `Mat5Type`.

use crate::format::{Mat5Type, MatlabType};

mod sealed {
    pub trait Sealed {}
}

/// Trait for primitive types that can be written as segment payloads
///
/// All element types are plain old data, so buffers of them can be viewed
/// as bytes without copying.
pub trait Mat5Element: sealed::Sealed + bytemuck::Pod + PartialEq + Default + core::fmt::Debug {
    /// Data type written in the segment tag
    const MAT5_TYPE: Mat5Type;

    /// Array class of a dense array with this element type
    const MATLAB_TYPE: MatlabType;

    /// Whether this value is the additive zero
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

macro_rules! impl_mat5_element {
    ($type:ty, $mat5:ident, $matlab:ident) => {
        impl sealed::Sealed for $type {}

        impl Mat5Element for $type {
            const MAT5_TYPE: Mat5Type = Mat5Type::$mat5;
            const MATLAB_TYPE: MatlabType = MatlabType::$matlab;
        }
    };
}

impl_mat5_element!(f32, Single, Single);
impl_mat5_element!(f64, Double, Double);
impl_mat5_element!(i8, Int8, Int8);
impl_mat5_element!(u8, UInt8, UInt8);
impl_mat5_element!(i16, Int16, Int16);
impl_mat5_element!(u16, UInt16, UInt16);
impl_mat5_element!(i32, Int32, Int32);
impl_mat5_element!(u32, UInt32, UInt32);
impl_mat5_element!(i64, Int64, Int64);
impl_mat5_element!(u64, UInt64, UInt64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_matches_tag_type() {
        fn check<T: Mat5Element>() {
            assert_eq!(core::mem::size_of::<T>(), T::MAT5_TYPE.element_size());
        }
        check::<f32>();
        check::<f64>();
        check::<i8>();
        check::<u8>();
        check::<i16>();
        check::<u16>();
        check::<i32>();
        check::<u32>();
        check::<i64>();
        check::<u64>();
    }
}
