//! Read a sparse matrix file and print a summary of it

use spmat::{MatrixFile, MatrixElement, ReadConfig, SparseMatrix};
use std::time::Instant;

fn main() -> spmat::Result<()> {
    let filename = std::env::args()
        .nth(1)
        .unwrap_or_else(|| spmat::cli::DEFAULT_LHS_PATH.to_string());

    if !std::path::Path::new(&filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Pass a matrix file path as the first argument");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let start = Instant::now();
    let matrix: SparseMatrix = MatrixFile::read(&filename, &ReadConfig::default())?;
    let load_time = start.elapsed();
    println!("Parsed in {:.3}ms", load_time.as_secs_f64() * 1000.0);

    let (rows, cols) = matrix.dimensions();
    println!("\nMatrix Information:");
    println!("   Dimensions: {rows} x {cols}");
    println!("   Non-zeros: {}", matrix.nnz());
    println!("   Data type: {}", <i64 as MatrixElement>::data_type());
    if let Some(density) = matrix.density() {
        println!("   Density: {:.6}%", density * 100.0);
    }

    println!("\nStored entries:");
    for (row, col, value) in matrix.triples() {
        println!("   matrix[{row}, {col}] = {value}");
    }

    // Self-product only makes sense for square matrices
    if rows == cols {
        let start = Instant::now();
        let squared = matrix.multiply(&matrix)?;
        println!(
            "\nSquared in {:.3}ms, {} non-zeros",
            start.elapsed().as_secs_f64() * 1000.0,
            squared.nnz()
        );
    }

    Ok(())
}
