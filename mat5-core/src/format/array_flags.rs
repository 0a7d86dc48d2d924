//! Array flags codec
//!
//! Every MAT5 array starts with a two-word flags subelement:
//!
//! ```text
//! word 0:  bits 0..7  class id
//!          bit 9      logical
//!          bit 10     global
//!          bit 11     complex
//! word 1:  non-zero capacity (sparse arrays only, 0 otherwise)
//! ```
//!
//! The codec is pure bit manipulation. It does not check that a flag
//! combination makes sense for the class, nor that `nz_max` is non-negative.

use super::constants::array_flags::{BIT_COMPLEX, BIT_GLOBAL, BIT_LOGICAL, MASK_TYPE_ID};
use super::types::MatlabType;
use crate::traits::{Array, Opaque};
use crate::{Mat5Error, Result};

/// Decoded array flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayFlags {
    /// Array class stored in the low byte
    pub matlab_type: MatlabType,
    /// Variable lives in the global workspace
    pub global: bool,
    /// Logical array
    pub logical: bool,
    /// Array has an imaginary part
    pub complex: bool,
    /// Declared non-zero capacity of a sparse array
    pub nz_max: i32,
}

impl ArrayFlags {
    /// Create flags with all markers cleared
    pub const fn new(matlab_type: MatlabType) -> Self {
        Self {
            matlab_type,
            global: false,
            logical: false,
            complex: false,
            nz_max: 0,
        }
    }

    /// Set the global marker
    pub const fn with_global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    /// Set the logical marker
    pub const fn with_logical(mut self, logical: bool) -> Self {
        self.logical = logical;
        self
    }

    /// Set the complex marker
    pub const fn with_complex(mut self, complex: bool) -> Self {
        self.complex = complex;
        self
    }

    /// Set the non-zero capacity
    pub const fn with_nz_max(mut self, nz_max: i32) -> Self {
        self.nz_max = nz_max;
        self
    }

    /// Derive flags for a generic array value
    ///
    /// Attribute overrides win when the array provides them. A sparse array
    /// without overrides is rejected since its capacity cannot be inferred.
    pub fn for_array<A: Array + ?Sized>(global: bool, array: &A) -> Result<Self> {
        let flags = Self::new(array.matlab_type()).with_global(global);

        if let Some(attributes) = array.mat5_attributes() {
            return Ok(flags
                .with_logical(attributes.is_logical())
                .with_complex(attributes.is_complex())
                .with_nz_max(attributes.nz_max()));
        }

        if array.is_sparse() {
            return Err(Mat5Error::UnsupportedSparseType);
        }

        Ok(flags
            .with_logical(array.is_logical())
            .with_complex(array.is_complex()))
    }

    /// Flags for opaque values
    ///
    /// Opaque values may report a different public type such as `Object`.
    /// The public type is ignored and the class is forced to `Opaque`, with
    /// every marker cleared.
    pub fn for_opaque<O: Opaque + ?Sized>(_opaque: &O) -> Self {
        Self::new(MatlabType::Opaque)
    }

    /// Pack into the two wire words
    pub const fn encode(&self) -> [u32; 2] {
        encode(
            self.matlab_type,
            self.global,
            self.logical,
            self.complex,
            self.nz_max,
        )
    }

    /// Unpack from the two wire words
    pub const fn decode(words: [u32; 2]) -> Result<Self> {
        let matlab_type = match decode_type(words[0]) {
            Ok(matlab_type) => matlab_type,
            Err(err) => return Err(err),
        };
        Ok(Self {
            matlab_type,
            global: decode_global(words[0]),
            logical: decode_logical(words[0]),
            complex: decode_complex(words[0]),
            nz_max: decode_nz_max(words[1]),
        })
    }
}

/// Pack a flags tuple into `[word0, word1]`
pub const fn encode(
    matlab_type: MatlabType,
    global: bool,
    logical: bool,
    complex: bool,
    nz_max: i32,
) -> [u32; 2] {
    let mut attributes = matlab_type.id() as u32 & MASK_TYPE_ID;
    if logical {
        attributes |= BIT_LOGICAL;
    }
    if global {
        attributes |= BIT_GLOBAL;
    }
    if complex {
        attributes |= BIT_COMPLEX;
    }
    [attributes, nz_max as u32]
}

/// Class stored in the low byte of word 0
pub const fn decode_type(word0: u32) -> Result<MatlabType> {
    MatlabType::from_id((word0 & MASK_TYPE_ID) as u8)
}

pub const fn decode_complex(word0: u32) -> bool {
    word0 & BIT_COMPLEX != 0
}

pub const fn decode_global(word0: u32) -> bool {
    word0 & BIT_GLOBAL != 0
}

pub const fn decode_logical(word0: u32) -> bool {
    word0 & BIT_LOGICAL != 0
}

pub const fn decode_nz_max(word1: u32) -> i32 {
    word1 as i32
}
