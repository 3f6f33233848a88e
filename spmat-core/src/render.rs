//! Dense text rendering for small matrices

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::traits::{MatrixElement, MatrixView};

/// Render every cell, one line per row, as space-separated `(row, col, value)`
///
/// This enumerates the full dense domain and is meant for diagnostics and
/// small outputs only.
pub fn render<M: MatrixView>(matrix: &M) -> Vec<String> {
    let (rows, cols) = matrix.dimensions();
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| {
                    let value = matrix
                        .get_element(row, col)
                        .unwrap_or(<M::Element as MatrixElement>::ZERO);
                    format!("({row}, {col}, {value})")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
