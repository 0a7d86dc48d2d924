//! MATLAB class ids and MAT5 data types
//!
//! `MatlabType` is the array class stored in the low byte of the array flags.
//! `Mat5Type` is the data type stored in every data element tag and decides
//! how many bytes each element occupies.

use super::tag::Tag;
use crate::{Mat5Error, Result};

/// Array classes (mxClassID) that can appear in the array flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MatlabType {
    Cell = 1,
    Structure = 2,
    Object = 3,
    Character = 4,
    Sparse = 5,
    Double = 6,
    Single = 7,
    Int8 = 8,
    UInt8 = 9,
    Int16 = 10,
    UInt16 = 11,
    Int32 = 12,
    UInt32 = 13,
    Int64 = 14,
    UInt64 = 15,
    Function = 16,
    Opaque = 17,
}

impl MatlabType {
    /// Convert from the class id byte
    pub const fn from_id(id: u8) -> Result<Self> {
        Ok(match id {
            1 => MatlabType::Cell,
            2 => MatlabType::Structure,
            3 => MatlabType::Object,
            4 => MatlabType::Character,
            5 => MatlabType::Sparse,
            6 => MatlabType::Double,
            7 => MatlabType::Single,
            8 => MatlabType::Int8,
            9 => MatlabType::UInt8,
            10 => MatlabType::Int16,
            11 => MatlabType::UInt16,
            12 => MatlabType::Int32,
            13 => MatlabType::UInt32,
            14 => MatlabType::Int64,
            15 => MatlabType::UInt64,
            16 => MatlabType::Function,
            17 => MatlabType::Opaque,
            _ => return Err(Mat5Error::UnknownType(id)),
        })
    }

    /// Class id byte
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Name MATLAB's `class()` reports for this type
    pub const fn class_name(self) -> &'static str {
        match self {
            MatlabType::Cell => "cell",
            MatlabType::Structure => "struct",
            MatlabType::Object => "object",
            MatlabType::Character => "char",
            MatlabType::Sparse => "sparse",
            MatlabType::Double => "double",
            MatlabType::Single => "single",
            MatlabType::Int8 => "int8",
            MatlabType::UInt8 => "uint8",
            MatlabType::Int16 => "int16",
            MatlabType::UInt16 => "uint16",
            MatlabType::Int32 => "int32",
            MatlabType::UInt32 => "uint32",
            MatlabType::Int64 => "int64",
            MatlabType::UInt64 => "uint64",
            MatlabType::Function => "function_handle",
            MatlabType::Opaque => "opaque",
        }
    }
}

impl TryFrom<u8> for MatlabType {
    type Error = Mat5Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_id(value)
    }
}

impl core::fmt::Display for MatlabType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// Data types that can appear in a data element tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Mat5Type {
    /// 8-bit signed integer
    Int8 = 1,
    /// 8-bit unsigned integer
    UInt8 = 2,
    /// 16-bit signed integer
    Int16 = 3,
    /// 16-bit unsigned integer
    UInt16 = 4,
    /// 32-bit signed integer
    Int32 = 5,
    /// 32-bit unsigned integer
    UInt32 = 6,
    /// 32-bit floating point
    Single = 7,
    /// 64-bit floating point
    Double = 9,
    /// 64-bit signed integer
    Int64 = 12,
    /// 64-bit unsigned integer
    UInt64 = 13,
    /// Nested array element
    Matrix = 14,
    /// zlib compressed element
    Compressed = 15,
    /// UTF-8 text
    Utf8 = 16,
    /// UTF-16 text
    Utf16 = 17,
    /// UTF-32 text
    Utf32 = 18,
}

impl Mat5Type {
    /// Convert from the tag's type id
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(Mat5Type::Int8),
            2 => Some(Mat5Type::UInt8),
            3 => Some(Mat5Type::Int16),
            4 => Some(Mat5Type::UInt16),
            5 => Some(Mat5Type::Int32),
            6 => Some(Mat5Type::UInt32),
            7 => Some(Mat5Type::Single),
            9 => Some(Mat5Type::Double),
            12 => Some(Mat5Type::Int64),
            13 => Some(Mat5Type::UInt64),
            14 => Some(Mat5Type::Matrix),
            15 => Some(Mat5Type::Compressed),
            16 => Some(Mat5Type::Utf8),
            17 => Some(Mat5Type::Utf16),
            18 => Some(Mat5Type::Utf32),
            _ => None,
        }
    }

    /// Tag type id
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Size in bytes of one element. Matrix and compressed elements count raw bytes.
    pub const fn element_size(self) -> usize {
        match self {
            Mat5Type::Int8
            | Mat5Type::UInt8
            | Mat5Type::Matrix
            | Mat5Type::Compressed
            | Mat5Type::Utf8 => 1,
            Mat5Type::Int16 | Mat5Type::UInt16 | Mat5Type::Utf16 => 2,
            Mat5Type::Int32 | Mat5Type::UInt32 | Mat5Type::Single | Mat5Type::Utf32 => 4,
            Mat5Type::Double | Mat5Type::Int64 | Mat5Type::UInt64 => 8,
        }
    }

    /// Payload bytes for `count` elements
    pub const fn num_bytes(self, count: usize) -> usize {
        count.saturating_mul(self.element_size())
    }

    /// Bytes of a complete segment holding `count` elements, including tag and padding
    pub const fn serialized_size(self, count: usize) -> usize {
        Tag::for_elements(self, count).serialized_size()
    }

    /// Zero bytes written after the payload of `count` elements
    pub const fn padding(self, count: usize) -> usize {
        Tag::for_elements(self, count).payload_padding()
    }
}

impl core::fmt::Display for Mat5Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Mat5Type::Int8 => "miINT8",
            Mat5Type::UInt8 => "miUINT8",
            Mat5Type::Int16 => "miINT16",
            Mat5Type::UInt16 => "miUINT16",
            Mat5Type::Int32 => "miINT32",
            Mat5Type::UInt32 => "miUINT32",
            Mat5Type::Single => "miSINGLE",
            Mat5Type::Double => "miDOUBLE",
            Mat5Type::Int64 => "miINT64",
            Mat5Type::UInt64 => "miUINT64",
            Mat5Type::Matrix => "miMATRIX",
            Mat5Type::Compressed => "miCOMPRESSED",
            Mat5Type::Utf8 => "miUTF8",
            Mat5Type::Utf16 => "miUTF16",
            Mat5Type::Utf32 => "miUTF32",
        };
        write!(f, "{name}")
    }
}
