//! Compressed sparse column matrix
//!
//! Row indices and column pointers are stored as `i32`, the width they have
//! on the wire, so serialization never needs to convert them.

use crate::Result;
use mat5_core::validation::{columns_sorted, SparseDefect};
use mat5_core::{Mat5Element, Mat5Error};

/// Sparse matrix in CSC layout
#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T: Mat5Element> {
    nrows: usize,
    ncols: usize,
    col_ptrs: Vec<i32>,
    row_indices: Vec<i32>,
    values: Vec<T>,
    imaginary: Option<Vec<T>>,
    logical: bool,
    indices_sorted: bool,
}

impl<T: Mat5Element> CscMatrix<T> {
    /// Create a matrix from raw CSC buffers
    ///
    /// Only buffer lengths and dimension widths are checked. Row ranges and
    /// pointer monotonicity are trusted, see `validation::validate_csc`.
    pub fn new(
        nrows: usize,
        ncols: usize,
        col_ptrs: Vec<i32>,
        row_indices: Vec<i32>,
        values: Vec<T>,
    ) -> Result<Self> {
        check_dimension(nrows)?;
        check_dimension(ncols)?;
        check_dimension(row_indices.len())?;
        if col_ptrs.len() != ncols + 1 || row_indices.len() != values.len() {
            return Err(Mat5Error::ShapeMismatch.into());
        }

        let indices_sorted = columns_sorted(&col_ptrs, &row_indices);
        Ok(Self {
            nrows,
            ncols,
            col_ptrs,
            row_indices,
            values,
            imaginary: None,
            logical: false,
            indices_sorted,
        })
    }

    /// Create an empty matrix with no stored entries
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        check_dimension(ncols)?;
        Self::new(nrows, ncols, vec![0; ncols + 1], Vec::new(), Vec::new())
    }

    /// Build a matrix from `(row, col, value)` triplets in any order
    ///
    /// Zero values are dropped. Duplicate positions are rejected.
    pub fn from_triplets(nrows: usize, ncols: usize, triplets: &[(usize, usize, T)]) -> Result<Self> {
        check_dimension(nrows)?;
        check_dimension(ncols)?;

        let mut counts = vec![0usize; ncols];
        for (pos, &(row, col, value)) in triplets.iter().enumerate() {
            if row >= nrows {
                return Err(SparseDefect::RowIndexRange(pos).into());
            }
            if col >= ncols {
                return Err(Mat5Error::ShapeMismatch.into());
            }
            if !value.is_zero() {
                counts[col] += 1;
            }
        }

        let mut col_ptrs = Vec::with_capacity(ncols + 1);
        let mut total = 0usize;
        col_ptrs.push(0);
        for count in &counts {
            total += count;
            col_ptrs.push(check_dimension(total)?);
        }

        let mut next: Vec<usize> = col_ptrs[..ncols].iter().map(|&p| p as usize).collect();
        let mut row_indices = vec![0i32; total];
        let mut values = vec![T::default(); total];
        for &(row, col, value) in triplets {
            if value.is_zero() {
                continue;
            }
            let slot = next[col];
            row_indices[slot] = row as i32;
            values[slot] = value;
            next[col] += 1;
        }

        let mut matrix = Self::new(nrows, ncols, col_ptrs, row_indices, values)?;
        matrix.sort_indices();
        for pair in matrix.col_ptrs.windows(2) {
            let column = &matrix.row_indices[pair[0] as usize..pair[1] as usize];
            if let Some(offset) = column.windows(2).position(|w| w[0] == w[1]) {
                return Err(SparseDefect::RowIndexOrder(pair[0] as usize + offset + 1).into());
            }
        }
        Ok(matrix)
    }

    /// Attach imaginary parts, one per stored entry
    pub fn with_imaginary(mut self, imaginary: Vec<T>) -> Result<Self> {
        if imaginary.len() != self.values.len() {
            return Err(Mat5Error::ShapeMismatch.into());
        }
        self.imaginary = Some(imaginary);
        Ok(self)
    }

    /// Mark the matrix as logical
    pub fn with_logical(mut self, logical: bool) -> Self {
        self.logical = logical;
        self
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.row_indices.len()
    }

    pub fn col_pointers(&self) -> &[i32] {
        &self.col_ptrs
    }

    pub fn row_indices(&self) -> &[i32] {
        &self.row_indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn imaginary(&self) -> Option<&[T]> {
        self.imaginary.as_deref()
    }

    pub fn is_logical(&self) -> bool {
        self.logical
    }

    pub fn is_complex(&self) -> bool {
        self.imaginary.is_some()
    }

    /// Whether row indices are ascending within every column
    pub fn indices_sorted(&self) -> bool {
        self.indices_sorted
    }

    /// Mutable access to stored values. Does not affect ordering.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Mutable access to row indices together with their values
    ///
    /// The matrix is marked unsorted afterwards.
    pub fn entries_mut(&mut self) -> (&mut [i32], &mut [T]) {
        self.indices_sorted = false;
        (&mut self.row_indices, &mut self.values)
    }

    /// Get the real part of an element, `None` if it is not stored
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.position(row, col).map(|pos| self.values[pos])
    }

    fn position(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        let start = self.col_ptrs[col] as usize;
        let end = self.col_ptrs[col + 1] as usize;
        let column = self.row_indices.get(start..end)?;
        let row = row as i32;
        let offset = if self.indices_sorted {
            column.binary_search(&row).ok()
        } else {
            column.iter().position(|&r| r == row)
        };
        offset.map(|offset| start + offset)
    }

    /// Sort row indices within each column, moving values along
    pub fn sort_indices(&mut self) {
        if self.indices_sorted {
            return;
        }

        let mut order: Vec<usize> = Vec::new();
        let mut rows: Vec<i32> = Vec::new();
        let mut reals: Vec<T> = Vec::new();
        let mut imags: Vec<T> = Vec::new();

        for col in 0..self.ncols {
            let start = self.col_ptrs[col] as usize;
            let end = self.col_ptrs[col + 1] as usize;
            let Some(column) = self.row_indices.get(start..end) else {
                continue;
            };
            if column.windows(2).all(|w| w[0] <= w[1]) {
                continue;
            }

            order.clear();
            order.extend(start..end);
            order.sort_by_key(|&i| self.row_indices[i]);

            rows.clear();
            rows.extend(order.iter().map(|&i| self.row_indices[i]));
            self.row_indices[start..end].copy_from_slice(&rows);

            reals.clear();
            reals.extend(order.iter().map(|&i| self.values[i]));
            self.values[start..end].copy_from_slice(&reals);

            if let Some(imaginary) = self.imaginary.as_mut() {
                imags.clear();
                imags.extend(order.iter().map(|&i| imaginary[i]));
                imaginary[start..end].copy_from_slice(&imags);
            }
        }

        self.indices_sorted = true;
    }
}

fn check_dimension(value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| Mat5Error::SizeOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn example() -> CscMatrix<f32> {
        // [1 0 4]
        // [0 3 0]
        // [2 0 0]
        CscMatrix::new(3, 3, vec![0, 2, 3, 4], vec![0, 2, 1, 0], vec![1.0, 2.0, 3.0, 4.0])
            .unwrap()
    }

    #[test]
    fn test_new() {
        let matrix = example();
        assert_eq!(matrix.dimensions(), (3, 3));
        assert_eq!(matrix.nnz(), 4);
        assert!(matrix.indices_sorted());
        assert!(!matrix.is_complex());
        assert_eq!(matrix.get(2, 0), Some(2.0));
        assert_eq!(matrix.get(1, 0), None);
        assert_eq!(matrix.get(0, 2), Some(4.0));
        assert_eq!(matrix.get(3, 0), None);
    }

    #[test]
    fn test_new_shape_mismatch() {
        let err = CscMatrix::<f64>::new(3, 3, vec![0, 1, 1], vec![0], vec![1.0]).unwrap_err();
        assert!(matches!(err, Error::Format(Mat5Error::ShapeMismatch)));

        let err = CscMatrix::<f64>::new(3, 1, vec![0, 1], vec![0], vec![]).unwrap_err();
        assert!(matches!(err, Error::Format(Mat5Error::ShapeMismatch)));

        let err = CscMatrix::<f64>::zeros(usize::MAX, 1).unwrap_err();
        assert!(matches!(err, Error::Format(Mat5Error::SizeOverflow)));
    }

    #[test]
    fn test_sort_indices() {
        let mut matrix = CscMatrix::new(
            4,
            2,
            vec![0, 3, 4],
            vec![3, 0, 2, 1],
            vec![30.0f64, 0.5, 20.0, 11.0],
        )
        .unwrap()
        .with_imaginary(vec![-3.0, -0.5, -2.0, -1.1])
        .unwrap();
        assert!(!matrix.indices_sorted());
        assert_eq!(matrix.get(2, 0), Some(20.0));

        matrix.sort_indices();
        assert!(matrix.indices_sorted());
        assert_eq!(matrix.row_indices(), &[0, 2, 3, 1]);
        assert_eq!(matrix.values(), &[0.5, 20.0, 30.0, 11.0]);
        assert_eq!(matrix.imaginary(), Some(&[-0.5, -2.0, -3.0, -1.1][..]));
        assert_eq!(matrix.col_pointers(), &[0, 3, 4]);
    }

    #[test]
    fn test_entries_mut_marks_unsorted() {
        let mut matrix = example();
        let (rows, values) = matrix.entries_mut();
        rows.swap(0, 1);
        values.swap(0, 1);
        assert!(!matrix.indices_sorted());
        assert_eq!(matrix.get(2, 0), Some(2.0));

        matrix.sort_indices();
        assert_eq!(matrix, example());
    }

    #[test]
    fn test_from_triplets() {
        let matrix = CscMatrix::from_triplets(
            3,
            3,
            &[(0, 2, 4.0f32), (2, 0, 2.0), (1, 1, 3.0), (0, 0, 1.0), (1, 2, 0.0)],
        )
        .unwrap();
        assert_eq!(matrix, example());
    }

    #[test]
    fn test_from_triplets_rejects_bad_input() {
        let err = CscMatrix::from_triplets(2, 2, &[(0, 0, 1i32), (0, 0, 2)]).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(Mat5Error::InvalidSparse(SparseDefect::RowIndexOrder(1)))
        ));

        let err = CscMatrix::from_triplets(2, 2, &[(2, 0, 1i32)]).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(Mat5Error::InvalidSparse(SparseDefect::RowIndexRange(0)))
        ));

        let err = CscMatrix::from_triplets(2, 2, &[(0, 2, 1i32)]).unwrap_err();
        assert!(matches!(err, Error::Format(Mat5Error::ShapeMismatch)));
    }

    #[test]
    fn test_zeros() {
        let matrix = CscMatrix::<f64>::zeros(5, 3).unwrap();
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.col_pointers(), &[0, 0, 0, 0]);
        assert!(matrix.indices_sorted());
    }
}
