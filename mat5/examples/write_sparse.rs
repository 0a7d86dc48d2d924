//! Write a sparse matrix as a MAT5 array element

use mat5::{ArrayFlags, CscMatrix, Mat5Serializable, Result, Sink, SparseArray};
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<()> {
    // Tridiagonal matrix
    let n = 1_000;
    let mut triplets = Vec::with_capacity(3 * n);
    for i in 0..n {
        if i > 0 {
            triplets.push((i, i - 1, -1.0f64));
        }
        triplets.push((i, i, 2.0));
        if i + 1 < n {
            triplets.push((i, i + 1, -1.0));
        }
    }

    let matrix = CscMatrix::from_triplets(n, n, &triplets)?;
    let array = SparseArray::new(matrix);
    println!("Matrix dimensions: {n} x {n}");
    println!("Non-zeros: {}", array.matrix().nnz());

    let flags = ArrayFlags::for_array(false, &array)?;
    println!("Array flags: {flags:?} -> {:08x?}", flags.encode());
    println!("Element size: {} bytes", array.mat5_size("K"));

    let file = File::create("tridiagonal.mat5")?;
    let mut sink = Sink::new(BufWriter::new(file));
    array.write_mat5("K", false, &mut sink)?;
    sink.flush()?;
    println!("Wrote {} bytes to tridiagonal.mat5", sink.position());
    Ok(())
}
