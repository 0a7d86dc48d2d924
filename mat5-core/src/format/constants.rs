//! Format constants for the MAT5 array encoding

/// Alignment boundary for every data element
pub const ALIGNMENT_BOUNDARY: usize = 8;

/// Size of a regular data element tag (type word + byte count word)
pub const TAG_SIZE: usize = 8;

/// Payloads up to this many bytes use the small data element form
pub const SMALL_ELEMENT_MAX_BYTES: usize = 4;

/// Largest byte count a tag can declare
pub const MAX_ELEMENT_BYTES: usize = u32::MAX as usize;

/// Array flags word layout
pub mod array_flags {
    /// Low byte holds the class id
    pub const MASK_TYPE_ID: u32 = 0xff;

    /// Logical arrays (MATLAB `logical`)
    pub const BIT_LOGICAL: u32 = 1 << 9;

    /// Global workspace variable
    pub const BIT_GLOBAL: u32 = 1 << 10;

    /// Array carries an imaginary part
    pub const BIT_COMPLEX: u32 = 1 << 11;

    /// Number of 32-bit words in the flags subelement
    pub const WORD_COUNT: usize = 2;
}
