//! Dictionary-of-keys sparse matrix
//!
//! Non-zero entries live in a hash map keyed by `(row, col)`. A cell that is
//! not in the map is zero, and no zero value is ever stored: [`SparseMatrix::set`]
//! is the single mutation primitive and enforces this on every write.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::traits::{MatrixElement, MatrixOperations, MatrixView};
use crate::validation::validate_cell;
use crate::{format, Axis, MatrixError, ParseCause, Result};

/// Sparse integer matrix with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from a text source or, failing that, explicit dimensions
    ///
    /// The text source takes precedence when both are given.
    pub fn from_parts(source: Option<&str>, dimensions: Option<(usize, usize)>) -> Result<Self> {
        match (source, dimensions) {
            (Some(text), _) => Self::parse(text),
            (None, Some((rows, cols))) => Ok(Self::new(rows, cols)),
            (None, None) => Err(MatrixError::MissingSource),
        }
    }

    /// Build a matrix from `(row, col, value)` triples
    ///
    /// Every triple goes through [`set`](Self::set), so coordinates are
    /// bounds-checked, zero values are dropped and later duplicates win.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in entries {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Parse the text format (see [`crate::format`])
    pub fn parse(text: &str) -> Result<Self> {
        format::parse_matrix(text)
    }

    /// Parse the text format, calling `observer` with each accepted entry
    pub fn parse_with<F>(text: &str, observer: F) -> Result<Self>
    where
        F: FnMut(usize, usize, T),
    {
        format::parse_matrix_with(text, observer)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix has no non-zero entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a non-zero value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Fraction of cells holding a stored value
    ///
    /// `None` for a matrix with no cells or more cells than `usize` can count.
    pub fn density(&self) -> Option<f64> {
        let cells = self.rows.checked_mul(self.cols).filter(|&cells| cells > 0)?;
        Some(self.nnz() as f64 / cells as f64)
    }

    /// Value at `(row, col)`, zero if nothing is stored there
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        validate_cell(row, col, self.dimensions())?;
        Ok(self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO))
    }

    /// Store `value` at `(row, col)`; a zero value clears the cell
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validate_cell(row, col, self.dimensions())?;
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterate stored entries as `(row, col, value)`, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries as `(row, col, value)`, sorted row-major
    pub fn triples(&self) -> Vec<(usize, usize, T)> {
        let mut triples: Vec<_> = self.iter().collect();
        triples.sort_unstable_by_key(|&(row, col, _)| (row, col));
        triples
    }

    /// Serialize into the text format
    pub fn to_text(&self) -> String {
        format::write_text(self)
    }

    /// One line per row listing every cell as `(row, col, value)`
    pub fn render(&self) -> Vec<String> {
        crate::render::render(self)
    }

    /// Change an extent while reading the text format
    ///
    /// Fails if a stored entry would fall outside the new extent.
    pub(crate) fn redeclare(
        &mut self,
        axis: Axis,
        len: usize,
    ) -> core::result::Result<(), ParseCause> {
        let required = self
            .entries
            .keys()
            .map(|&(row, col)| match axis {
                Axis::Row => row + 1,
                Axis::Column => col + 1,
            })
            .max()
            .unwrap_or(0);
        if len < required {
            return Err(ParseCause::DimensionConflict {
                axis,
                declared: len,
                required,
            });
        }

        match axis {
            Axis::Row => self.rows = len,
            Axis::Column => self.cols = len,
        }
        Ok(())
    }

    /// Borrow the raw entry map
    pub(crate) fn entries(&self) -> &HashMap<(usize, usize), T> {
        &self.entries
    }
}

impl<T: MatrixElement> MatrixView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<_> = self
            .iter()
            .filter(|&(row, _, _)| row == row_index)
            .map(|(_, col, value)| (col, value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<_> = self
            .iter()
            .filter(|&(_, col, _)| col == col_index)
            .map(|(row, _, value)| (row, value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}

impl<T: MatrixElement> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().join("\n"))
    }
}
