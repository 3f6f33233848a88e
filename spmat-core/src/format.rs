//! Text matrix format
//!
//! ```text
//! rows=3
//! cols=3
//! (0,0,5)
//! (2,1,-7)
//! ```
//!
//! One directive per line, blank lines ignored. Entry coordinates are
//! checked against the extents declared so far.

use alloc::string::{String, ToString};
use core::fmt::Write;

use crate::validation::{axis_index, parse_directive, Directive};
use crate::{Axis, MatrixElement, MatrixError, ParseCause, Result, SparseMatrix};

/// Incremental line-by-line reader for the text format
#[derive(Debug, Clone)]
pub struct TextReader<T: MatrixElement> {
    matrix: SparseMatrix<T>,
    rows_declared: bool,
    cols_declared: bool,
    line_number: usize,
}

impl<T: MatrixElement> TextReader<T> {
    /// Create a reader with nothing declared yet
    pub fn new() -> Self {
        Self {
            matrix: SparseMatrix::new(0, 0),
            rows_declared: false,
            cols_declared: false,
            line_number: 0,
        }
    }

    /// Consume one line, calling `observer` with each accepted entry
    pub fn read_line<F>(&mut self, line: &str, observer: &mut F) -> Result<()>
    where
        F: FnMut(usize, usize, T),
    {
        self.line_number += 1;
        let line_number = self.line_number;
        let parse_error = |cause: ParseCause| MatrixError::Parse {
            line_number,
            line: line.trim().to_string(),
            cause,
        };

        match parse_directive::<T>(line).map_err(parse_error)? {
            Directive::Blank => {}
            Directive::Dimension(axis, len) => {
                self.matrix.redeclare(axis, len).map_err(parse_error)?;
                match axis {
                    Axis::Row => self.rows_declared = true,
                    Axis::Column => self.cols_declared = true,
                }
            }
            Directive::Entry { row, col, value } => {
                if !self.rows_declared {
                    return Err(parse_error(ParseCause::UndeclaredDimension(Axis::Row)));
                }
                if !self.cols_declared {
                    return Err(parse_error(ParseCause::UndeclaredDimension(Axis::Column)));
                }

                let (rows, cols) = self.matrix.dimensions();
                let out_of_bounds = |axis: Axis, index: i64, len: usize| {
                    MatrixError::EntryOutOfBounds {
                        line_number,
                        line: line.trim().to_string(),
                        axis,
                        index,
                        len,
                    }
                };
                let row = axis_index(row, rows).ok_or_else(|| out_of_bounds(Axis::Row, row, rows))?;
                let col = axis_index(col, cols)
                    .ok_or_else(|| out_of_bounds(Axis::Column, col, cols))?;

                observer(row, col, value);
                self.matrix.set(row, col, value)?;
            }
        }
        Ok(())
    }

    /// Finish reading, failing if either extent was never declared
    pub fn finish(self) -> Result<SparseMatrix<T>> {
        if !self.rows_declared {
            return Err(MatrixError::MissingDimensions { axis: Axis::Row });
        }
        if !self.cols_declared {
            return Err(MatrixError::MissingDimensions { axis: Axis::Column });
        }
        Ok(self.matrix)
    }
}

impl<T: MatrixElement> Default for TextReader<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a whole document in the text format
pub fn parse_matrix<T: MatrixElement>(text: &str) -> Result<SparseMatrix<T>> {
    parse_matrix_with(text, |_, _, _| {})
}

/// Parse a whole document, calling `observer` with each accepted entry
pub fn parse_matrix_with<T, F>(text: &str, mut observer: F) -> Result<SparseMatrix<T>>
where
    T: MatrixElement,
    F: FnMut(usize, usize, T),
{
    let mut reader = TextReader::new();
    for line in text.lines() {
        reader.read_line(line, &mut observer)?;
    }
    reader.finish()
}

/// Serialize a matrix into the text format, entries in row-major order
pub fn write_text<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "rows={}", matrix.rows());
    let _ = writeln!(out, "cols={}", matrix.cols());
    for (row, col, value) in matrix.triples() {
        let _ = writeln!(out, "({row},{col},{value})");
    }
    out
}
