//! Alignment math for MAT5 data elements

/// Bytes needed to reach the next boundary
pub const fn calculate_padding(offset: usize, boundary: usize) -> usize {
    let remainder = offset % boundary;
    if remainder == 0 {
        0
    } else {
        boundary - remainder
    }
}

/// Whether an offset sits on a boundary
pub const fn is_aligned(offset: usize, boundary: usize) -> bool {
    offset % boundary == 0
}
