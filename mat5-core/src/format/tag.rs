//! Data element tags
//!
//! Every segment in a MAT5 array starts with a tag declaring its data type and
//! payload byte count. Payloads of one to four bytes are packed together with
//! the tag into a single 8-byte small data element. Everything else gets the
//! regular 8-byte tag and is zero padded to the next 8-byte boundary.
//!
//! Both the size queries and the writers go through [`Tag`], so the byte
//! count announced up front always matches what a writer emits.

use super::constants::{ALIGNMENT_BOUNDARY, MAX_ELEMENT_BYTES, SMALL_ELEMENT_MAX_BYTES, TAG_SIZE};
use super::types::Mat5Type;
use crate::validation::calculate_padding;
use crate::{Mat5Error, Result};

/// Tag describing one data element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Data type of the payload
    pub data_type: Mat5Type,
    /// Payload size in bytes, excluding padding
    pub num_bytes: usize,
}

/// Wire form of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagWords {
    /// Regular tag: type word then byte count word
    Regular([u32; 2]),
    /// Small data element: byte count in the upper half, type in the lower half
    Packed(u32),
}

impl Tag {
    /// Create a tag with an explicit byte count
    pub const fn new(data_type: Mat5Type, num_bytes: usize) -> Self {
        Self {
            data_type,
            num_bytes,
        }
    }

    /// Create a tag for `count` elements of `data_type`
    pub const fn for_elements(data_type: Mat5Type, count: usize) -> Self {
        Self::new(data_type, data_type.num_bytes(count))
    }

    /// Whether the payload fits the small data element form
    pub const fn is_packed(&self) -> bool {
        self.num_bytes > 0 && self.num_bytes <= SMALL_ELEMENT_MAX_BYTES
    }

    /// Bytes taken by the tag itself
    pub const fn header_size(&self) -> usize {
        if self.is_packed() {
            TAG_SIZE / 2
        } else {
            TAG_SIZE
        }
    }

    /// Zero bytes that follow the payload
    pub const fn payload_padding(&self) -> usize {
        if self.is_packed() {
            SMALL_ELEMENT_MAX_BYTES - self.num_bytes
        } else {
            calculate_padding(self.num_bytes, ALIGNMENT_BOUNDARY)
        }
    }

    /// Total bytes of tag, payload and padding
    pub const fn serialized_size(&self) -> usize {
        self.header_size() + self.num_bytes + self.payload_padding()
    }

    /// Encode the tag words, failing if the byte count exceeds 32 bits
    pub const fn words(&self) -> Result<TagWords> {
        if self.num_bytes > MAX_ELEMENT_BYTES {
            return Err(Mat5Error::SizeOverflow);
        }
        let num_bytes = self.num_bytes as u32;
        let data_type = self.data_type.id();
        if self.is_packed() {
            Ok(TagWords::Packed((num_bytes << 16) | data_type))
        } else {
            Ok(TagWords::Regular([data_type, num_bytes]))
        }
    }
}
