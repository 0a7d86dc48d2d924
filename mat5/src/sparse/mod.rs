//! Sparse matrix storage and serialization

pub mod array;
pub mod csc;
pub mod protocol;

pub use array::SparseArray;
pub use csc::CscMatrix;
pub use protocol::{
    col_pointers_size, non_zero_data_size, row_indices_size, sparse_data_size,
    write_non_zero_data, write_sparse_data, SparseSource,
};
