//! Core matrix access traits
//!
//! These traits describe read-only access to a sparse matrix regardless of
//! how its entries are stored.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Read-only, format-agnostic access to a sparse matrix
pub trait MatrixView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Row and column slicing on top of [`MatrixView`]
pub trait MatrixOperations: MatrixView {
    /// Non-zero `(col, value)` pairs of a row, in column order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Non-zero `(row, value)` pairs of a column, in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
