//! Coordinate and shape validation
//!
//! Pure checks shared by element access, the text parser and arithmetic.

use crate::{MatrixError, Operation};

/// Convert a signed index into a position along an axis of length `len`
///
/// Returns `None` for negative indices or indices at or past `len`.
pub fn axis_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

/// Validate a cell coordinate against matrix dimensions
pub const fn validate_cell(
    row: usize,
    col: usize,
    (rows, cols): (usize, usize),
) -> Result<(), MatrixError> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

/// Validate that two operands of an element-wise operation share a shape
pub const fn validate_same_shape(
    op: Operation,
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(), MatrixError> {
    if lhs.0 != rhs.0 || lhs.1 != rhs.1 {
        return Err(MatrixError::DimensionMismatch { op, lhs, rhs });
    }
    Ok(())
}

/// Validate operands of a matrix product, returning the result shape
pub const fn validate_product_shape(
    lhs: (usize, usize),
    rhs: (usize, usize),
) -> Result<(usize, usize), MatrixError> {
    if lhs.1 != rhs.0 {
        return Err(MatrixError::DimensionMismatch {
            op: Operation::Multiply,
            lhs,
            rhs,
        });
    }
    Ok((lhs.0, rhs.1))
}
