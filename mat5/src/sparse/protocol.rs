//! Sparse payload serialization
//!
//! A sparse array's data is three tagged segments, always in this order:
//!
//! 1. row indices (`ir`), `miINT32`, one per stored entry
//! 2. column pointers (`jc`), `miINT32`, `ncols + 1` entries
//! 3. non-zero values (`pr`), in the element kind of the matrix
//!
//! followed by the imaginary values (`pi`) for complex matrices. The outer
//! array flags, dimensions and name belong to the enclosing array element.
//!
//! Sizes are computed with the same [`Mat5Type`] formula the sink uses to
//! write tags and padding. Sortedness of row indices is assumed here, the
//! owning wrapper sorts before serializing.

use crate::sink::{Sink, SinkElement};
use crate::Result;
use mat5_core::validation::validate_csc;
use mat5_core::{Mat5Element, Mat5Type};
use std::io::Write;
use tracing::trace;

/// Source of the raw CSC buffers of a sparse matrix
pub trait SparseSource {
    /// Element kind of the value segments
    type Element: SinkElement;

    /// Dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    fn row_indices(&self) -> &[i32];

    fn col_pointers(&self) -> &[i32];

    fn real_values(&self) -> &[Self::Element];

    /// Imaginary parts of complex matrices
    fn imaginary_values(&self) -> Option<&[Self::Element]> {
        None
    }
}

/// Serialized size of the row index segment
pub fn row_indices_size<S: SparseSource + ?Sized>(source: &S) -> usize {
    Mat5Type::Int32.serialized_size(source.row_indices().len())
}

/// Serialized size of the column pointer segment
pub fn col_pointers_size<S: SparseSource + ?Sized>(source: &S) -> usize {
    Mat5Type::Int32.serialized_size(source.col_pointers().len())
}

/// Serialized size of the value segments, real and imaginary
pub fn non_zero_data_size<S: SparseSource + ?Sized>(source: &S) -> usize {
    let kind = <S::Element as Mat5Element>::MAT5_TYPE;
    let real = kind.serialized_size(source.real_values().len());
    let imaginary = source
        .imaginary_values()
        .map_or(0, |values| kind.serialized_size(values.len()));
    real + imaginary
}

/// Serialized size of all sparse segments
pub fn sparse_data_size<S: SparseSource + ?Sized>(source: &S) -> usize {
    row_indices_size(source) + col_pointers_size(source) + non_zero_data_size(source)
}

/// Run the structural checks if the sink asks for them
pub fn check_source<S: SparseSource + ?Sized, W: Write>(source: &S, sink: &Sink<W>) -> Result<()> {
    if !sink.config().validate_sparse {
        return Ok(());
    }
    let (nrows, ncols) = source.dimensions();
    validate_csc(
        nrows,
        ncols,
        source.col_pointers(),
        source.row_indices(),
        source.real_values().len(),
    )?;
    Ok(())
}

/// Write row indices, column pointers and values
///
/// A failure part way leaves the sink with a partial payload. Nothing is
/// rolled back.
pub fn write_sparse_data<S: SparseSource + ?Sized, W: Write>(
    source: &S,
    sink: &mut Sink<W>,
) -> Result<()> {
    check_source(source, sink)?;
    write_segments(source, sink)
}

pub(crate) fn write_segments<S: SparseSource + ?Sized, W: Write>(
    source: &S,
    sink: &mut Sink<W>,
) -> Result<()> {
    let start = sink.position();

    trace!(count = source.row_indices().len(), "writing row indices");
    sink.write_segment(source.row_indices())?;

    trace!(count = source.col_pointers().len(), "writing column pointers");
    sink.write_segment(source.col_pointers())?;

    write_non_zero_data(source, sink)?;

    debug_assert_eq!(
        (sink.position() - start) as usize,
        sparse_data_size(source),
        "sparse payload size mismatch"
    );
    Ok(())
}

/// Write the value segments
pub fn write_non_zero_data<S: SparseSource + ?Sized, W: Write>(
    source: &S,
    sink: &mut Sink<W>,
) -> Result<()> {
    let kind = <S::Element as Mat5Element>::MAT5_TYPE;

    let real = source.real_values();
    trace!(count = real.len(), %kind, "writing non-zero values");
    sink.write_tag(kind, real.len())?;
    sink.write_elements(real)?;
    sink.write_padding(kind, real.len())?;

    if let Some(imaginary) = source.imaginary_values() {
        trace!(count = imaginary.len(), %kind, "writing imaginary values");
        sink.write_tag(kind, imaginary.len())?;
        sink.write_elements(imaginary)?;
        sink.write_padding(kind, imaginary.len())?;
    }
    Ok(())
}

impl<T: SinkElement> SparseSource for super::CscMatrix<T> {
    type Element = T;

    fn dimensions(&self) -> (usize, usize) {
        super::CscMatrix::dimensions(self)
    }

    fn row_indices(&self) -> &[i32] {
        super::CscMatrix::row_indices(self)
    }

    fn col_pointers(&self) -> &[i32] {
        super::CscMatrix::col_pointers(self)
    }

    fn real_values(&self) -> &[T] {
        self.values()
    }

    fn imaginary_values(&self) -> Option<&[T]> {
        self.imaginary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Endianness, WriterConfig};
    use crate::sparse::CscMatrix;
    use crate::Error;
    use mat5_core::{Mat5Error, SparseDefect};

    fn example() -> CscMatrix<f32> {
        CscMatrix::new(3, 3, vec![0, 2, 3, 4], vec![0, 2, 1, 0], vec![1.0, 2.0, 3.0, 4.0])
            .unwrap()
    }

    #[test]
    fn test_segment_sizes() {
        let matrix = example();
        assert_eq!(row_indices_size(&matrix), 24);
        assert_eq!(col_pointers_size(&matrix), 24);
        assert_eq!(non_zero_data_size(&matrix), 24);
        assert_eq!(sparse_data_size(&matrix), 72);
    }

    #[test]
    fn test_complex_size_counts_both_parts() {
        let matrix = CscMatrix::new(2, 1, vec![0, 1], vec![1], vec![1.5f64])
            .unwrap()
            .with_imaginary(vec![-1.5])
            .unwrap();
        assert_eq!(non_zero_data_size(&matrix), 32);

        let mut sink = Sink::new(Vec::new());
        write_sparse_data(&matrix, &mut sink).unwrap();
        assert_eq!(sink.position() as usize, sparse_data_size(&matrix));
    }

    #[test]
    fn test_write_order() {
        let mut sink = Sink::new(Vec::new());
        write_sparse_data(&example(), &mut sink).unwrap();
        let bytes = sink.into_inner();
        assert_eq!(bytes.len(), 72);

        // ir
        assert_eq!(&bytes[0..8], &[5, 0, 0, 0, 16, 0, 0, 0]);
        // jc
        assert_eq!(&bytes[24..32], &[5, 0, 0, 0, 16, 0, 0, 0]);
        assert_eq!(&bytes[32..36], &[0, 0, 0, 0]);
        assert_eq!(&bytes[44..48], &[4, 0, 0, 0]);
        // pr
        assert_eq!(&bytes[48..56], &[7, 0, 0, 0, 16, 0, 0, 0]);
        assert_eq!(&bytes[56..60], &1.0f32.to_le_bytes());
    }

    #[test]
    fn test_validation_is_opt_in() {
        // unsorted and out of range, trusted by default
        let matrix = CscMatrix::new(2, 1, vec![0, 2], vec![5, 1], vec![1.0f64, 2.0]).unwrap();

        let mut sink = Sink::new(Vec::new());
        write_sparse_data(&matrix, &mut sink).unwrap();
        assert_eq!(sink.position() as usize, sparse_data_size(&matrix));

        let config = WriterConfig::new()
            .with_endianness(Endianness::Big)
            .with_validation(true);
        let mut sink = Sink::with_config(Vec::new(), config);
        let err = write_sparse_data(&matrix, &mut sink).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(Mat5Error::InvalidSparse(SparseDefect::RowIndexRange(0)))
        ));
        assert_eq!(sink.position(), 0);
    }
}
