//! Sparse array element
//!
//! Owns a CSC matrix and writes it as a complete MAT5 sparse array. Flags
//! come from the attribute overrides since sparse capacity cannot be derived
//! from the element type.

use super::csc::CscMatrix;
use super::protocol::{check_source, non_zero_data_size, sparse_data_size, write_segments};
use crate::serializable::{matrix_element_size, write_matrix_header, Mat5Serializable};
use crate::sink::{Sink, SinkElement};
use crate::Result;
use mat5_core::format::constants::ALIGNMENT_BOUNDARY;
use mat5_core::validation::is_aligned;
use mat5_core::{Array, ArrayFlags, Mat5Attributes, MatlabType};
use std::io::Write;
use tracing::{debug, warn};

/// Sparse matrix ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct SparseArray<T: SinkElement> {
    matrix: CscMatrix<T>,
    dims: [usize; 2],
}

impl<T: SinkElement> SparseArray<T> {
    /// Wrap a matrix, sorting its row indices if they are not sorted yet
    pub fn new(mut matrix: CscMatrix<T>) -> Self {
        if !matrix.indices_sorted() {
            warn!(nnz = matrix.nnz(), "sparse row indices not sorted, sorting in place");
            matrix.sort_indices();
        }
        let (nrows, ncols) = matrix.dimensions();
        Self {
            matrix,
            dims: [nrows, ncols],
        }
    }

    pub fn matrix(&self) -> &CscMatrix<T> {
        &self.matrix
    }

    pub fn into_inner(self) -> CscMatrix<T> {
        self.matrix
    }

    /// Serialized size of the value segments
    pub fn non_zero_data_size(&self) -> usize {
        non_zero_data_size(&self.matrix)
    }
}

impl<T: SinkElement> From<CscMatrix<T>> for SparseArray<T> {
    fn from(matrix: CscMatrix<T>) -> Self {
        Self::new(matrix)
    }
}

impl<T: SinkElement> Mat5Attributes for SparseArray<T> {
    fn is_logical(&self) -> bool {
        self.matrix.is_logical()
    }

    fn is_complex(&self) -> bool {
        self.matrix.is_complex()
    }

    fn nz_max(&self) -> i32 {
        // constructors bound nnz to i32
        i32::try_from(self.matrix.nnz()).unwrap_or(i32::MAX)
    }
}

impl<T: SinkElement> Array for SparseArray<T> {
    fn matlab_type(&self) -> MatlabType {
        MatlabType::Sparse
    }

    fn dimensions(&self) -> &[usize] {
        &self.dims
    }

    fn is_logical(&self) -> bool {
        self.matrix.is_logical()
    }

    fn is_complex(&self) -> bool {
        self.matrix.is_complex()
    }

    fn mat5_attributes(&self) -> Option<&dyn Mat5Attributes> {
        Some(self)
    }
}

impl<T: SinkElement> Mat5Serializable for SparseArray<T> {
    fn mat5_size(&self, name: &str) -> usize {
        matrix_element_size(name, self.dims.len(), sparse_data_size(&self.matrix))
    }

    fn write_mat5<W: Write>(&self, name: &str, global: bool, sink: &mut Sink<W>) -> Result<()> {
        let flags = ArrayFlags::for_array(global, self)?;
        check_source(&self.matrix, sink)?;

        let size = self.mat5_size(name);
        debug!(
            name,
            rows = self.dims[0],
            cols = self.dims[1],
            nnz = self.matrix.nnz(),
            size,
            "writing sparse array"
        );

        let start = sink.position();
        write_matrix_header(sink, size, &flags, &self.dims, name)?;
        write_segments(&self.matrix, sink)?;
        debug_assert_eq!((sink.position() - start) as usize, size);
        debug_assert!(is_aligned(size, ALIGNMENT_BOUNDARY));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_indices() {
        let matrix =
            CscMatrix::new(3, 1, vec![0, 3], vec![2, 0, 1], vec![2.0f64, 0.0, 1.0]).unwrap();
        let array = SparseArray::new(matrix);
        assert!(array.matrix().indices_sorted());
        assert_eq!(array.matrix().row_indices(), &[0, 1, 2]);
        assert_eq!(array.matrix().values(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_flags_come_from_overrides() {
        let matrix = CscMatrix::new(4, 2, vec![0, 1, 3], vec![3, 0, 2], vec![1u8, 1, 1])
            .unwrap()
            .with_logical(true);
        let array = SparseArray::from(matrix);

        let flags = ArrayFlags::for_array(true, &array).unwrap();
        assert_eq!(flags.matlab_type, MatlabType::Sparse);
        assert!(flags.global);
        assert!(flags.logical);
        assert!(!flags.complex);
        assert_eq!(flags.nz_max, 3);
        assert_eq!(array.dimensions(), &[4, 2]);
    }

    #[test]
    fn test_mat5_size_matches_written_bytes() {
        let matrix = CscMatrix::from_triplets(5, 4, &[(4, 3, 2.5f64), (0, 0, -1.0), (2, 1, 7.0)])
            .unwrap()
            .with_imaginary(vec![0.0, 1.0, -1.0])
            .unwrap();
        let array = SparseArray::new(matrix);

        for name in ["", "s", "sparse_matrix"] {
            let mut sink = Sink::new(Vec::new());
            array.write_mat5(name, false, &mut sink).unwrap();
            assert_eq!(sink.position() as usize, array.mat5_size(name));
            assert_eq!(array.mat5_size(name) % 8, 0);
        }
    }
}
