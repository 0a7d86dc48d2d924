//! Structural checks for compressed sparse column buffers
//!
//! Writers do not run these by default. They are opt-in, and they are also
//! what the property tests use to state the CSC invariants.

use crate::{Mat5Error, Result};

/// First structural problem found in a CSC matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseDefect {
    /// Column pointer array is not `ncols + 1` long
    ColumnPointerLength,
    /// Column pointers do not start at zero
    ColumnPointerStart,
    /// Column pointers decrease at the given column
    ColumnPointerOrder(usize),
    /// Last column pointer differs from the number of stored entries
    ColumnPointerEnd,
    /// Row index out of `[0, nrows)` at the given position
    RowIndexRange(usize),
    /// Row indices within a column are not strictly ascending at the given position
    RowIndexOrder(usize),
    /// Number of values differs from the number of row indices
    ValueCount,
}

impl core::fmt::Display for SparseDefect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SparseDefect::ColumnPointerLength => write!(f, "column pointer length is not ncols + 1"),
            SparseDefect::ColumnPointerStart => write!(f, "first column pointer is not 0"),
            SparseDefect::ColumnPointerOrder(col) => {
                write!(f, "column pointers decrease at column {col}")
            }
            SparseDefect::ColumnPointerEnd => write!(f, "last column pointer is not nnz"),
            SparseDefect::RowIndexRange(pos) => write!(f, "row index out of range at {pos}"),
            SparseDefect::RowIndexOrder(pos) => write!(f, "row indices not ascending at {pos}"),
            SparseDefect::ValueCount => write!(f, "value count differs from row index count"),
        }
    }
}

impl From<SparseDefect> for Mat5Error {
    fn from(defect: SparseDefect) -> Self {
        Mat5Error::InvalidSparse(defect)
    }
}

/// Check the full CSC structure
pub fn validate_csc(
    nrows: usize,
    ncols: usize,
    col_ptrs: &[i32],
    row_indices: &[i32],
    value_count: usize,
) -> Result<()> {
    if col_ptrs.len() != ncols + 1 {
        return Err(SparseDefect::ColumnPointerLength.into());
    }
    if col_ptrs[0] != 0 {
        return Err(SparseDefect::ColumnPointerStart.into());
    }
    for (col, pair) in col_ptrs.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(SparseDefect::ColumnPointerOrder(col).into());
        }
    }
    if col_ptrs[ncols] as usize != row_indices.len() {
        return Err(SparseDefect::ColumnPointerEnd.into());
    }
    if value_count != row_indices.len() {
        return Err(SparseDefect::ValueCount.into());
    }
    for (pos, &row) in row_indices.iter().enumerate() {
        if row < 0 || row as usize >= nrows {
            return Err(SparseDefect::RowIndexRange(pos).into());
        }
    }
    match first_unsorted(col_ptrs, row_indices) {
        Some(pos) => Err(SparseDefect::RowIndexOrder(pos).into()),
        None => Ok(()),
    }
}

/// Whether row indices are strictly ascending within every column
///
/// Assumes the column pointers themselves are well formed.
pub fn columns_sorted(col_ptrs: &[i32], row_indices: &[i32]) -> bool {
    first_unsorted(col_ptrs, row_indices).is_none()
}

fn first_unsorted(col_ptrs: &[i32], row_indices: &[i32]) -> Option<usize> {
    for pair in col_ptrs.windows(2) {
        let (start, end) = (pair[0] as usize, pair[1] as usize);
        let column = row_indices.get(start..end)?;
        if let Some(offset) = column.windows(2).position(|w| w[1] <= w[0]) {
            return Some(start + offset + 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x3, entries at (0,0) (2,0) (1,1) (0,2)
    const COL_PTRS: [i32; 4] = [0, 2, 3, 4];
    const ROWS: [i32; 4] = [0, 2, 1, 0];

    #[test]
    fn test_valid_matrix() {
        assert_eq!(validate_csc(3, 3, &COL_PTRS, &ROWS, 4), Ok(()));
        assert!(columns_sorted(&COL_PTRS, &ROWS));
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(validate_csc(0, 0, &[0], &[], 0), Ok(()));
        assert_eq!(validate_csc(5, 2, &[0, 0, 0], &[], 0), Ok(()));
    }

    #[test]
    fn test_column_pointer_defects() {
        assert_eq!(
            validate_csc(3, 2, &COL_PTRS, &ROWS, 4),
            Err(Mat5Error::InvalidSparse(SparseDefect::ColumnPointerLength))
        );
        assert_eq!(
            validate_csc(3, 3, &[1, 2, 3, 4], &ROWS, 4),
            Err(Mat5Error::InvalidSparse(SparseDefect::ColumnPointerStart))
        );
        assert_eq!(
            validate_csc(3, 3, &[0, 3, 2, 4], &ROWS, 4),
            Err(Mat5Error::InvalidSparse(SparseDefect::ColumnPointerOrder(1)))
        );
        assert_eq!(
            validate_csc(3, 3, &[0, 2, 3, 3], &ROWS, 4),
            Err(Mat5Error::InvalidSparse(SparseDefect::ColumnPointerEnd))
        );
    }

    #[test]
    fn test_row_defects() {
        assert_eq!(
            validate_csc(3, 3, &COL_PTRS, &[0, 3, 1, 0], 4),
            Err(Mat5Error::InvalidSparse(SparseDefect::RowIndexRange(1)))
        );
        assert_eq!(
            validate_csc(3, 3, &COL_PTRS, &[0, -1, 1, 0], 4),
            Err(Mat5Error::InvalidSparse(SparseDefect::RowIndexRange(1)))
        );
        assert_eq!(
            validate_csc(3, 3, &COL_PTRS, &[2, 0, 1, 0], 4),
            Err(Mat5Error::InvalidSparse(SparseDefect::RowIndexOrder(1)))
        );
        assert!(!columns_sorted(&COL_PTRS, &[2, 0, 1, 0]));
        assert_eq!(
            validate_csc(3, 3, &COL_PTRS, &ROWS, 3),
            Err(Mat5Error::InvalidSparse(SparseDefect::ValueCount))
        );
    }
}
