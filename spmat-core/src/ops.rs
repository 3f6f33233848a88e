//! Matrix arithmetic
//!
//! Every operation borrows both operands and returns a new matrix. Results
//! are written through [`SparseMatrix::set`], so sums that cancel to zero
//! simply leave no entry behind.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::traits::MatrixElement;
use crate::validation::{validate_product_shape, validate_same_shape};
use crate::{MatrixError, Operation, Result, SparseMatrix};

impl<T: MatrixElement> SparseMatrix<T> {
    /// Element-wise sum `self + other`
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, Operation::Add, T::try_add, Some)
    }

    /// Element-wise difference `self - other`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, Operation::Subtract, T::try_sub, T::try_neg)
    }

    /// Matrix product `self * other`, shaped `self.rows() x other.cols()`
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let (rows, cols) = validate_product_shape(self.dimensions(), other.dimensions())?;

        // Index the right operand by row so only stored pairs are visited
        let mut other_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (row, col, value) in other.iter() {
            other_rows.entry(row).or_default().push((col, value));
        }

        let overflow = |row, col| MatrixError::ArithmeticOverflow {
            op: Operation::Multiply,
            row,
            col,
        };

        // Partial sums are kept wide so that only the final value of a cell
        // has to fit the element type, whatever order the terms arrive in
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();
        for (&(i, j), &lhs) in self.entries() {
            let Some(other_row) = other_rows.get(&j) else {
                continue;
            };
            for &(k, rhs) in other_row {
                let product = lhs
                    .widen()
                    .checked_mul(rhs.widen())
                    .ok_or_else(|| overflow(i, k))?;
                let sum = sums.entry((i, k)).or_insert(0);
                *sum = sum.checked_add(product).ok_or_else(|| overflow(i, k))?;
            }
        }

        let mut result = Self::new(rows, cols);
        for ((i, k), sum) in sums {
            let value = T::narrow(sum).ok_or_else(|| overflow(i, k))?;
            result.set(i, k, value)?;
        }
        Ok(result)
    }

    /// Shared two-pass walk for addition and subtraction
    ///
    /// First pass covers every entry stored in `self`, combining it with the
    /// (possibly zero) value in `other`. Second pass covers entries stored
    /// only in `other`, where `self` contributes zero.
    fn elementwise(
        &self,
        other: &Self,
        op: Operation,
        combine: impl Fn(T, T) -> Option<T>,
        other_only: impl Fn(T) -> Option<T>,
    ) -> Result<Self> {
        validate_same_shape(op, self.dimensions(), other.dimensions())?;
        let overflow = |row, col| MatrixError::ArithmeticOverflow { op, row, col };

        let mut result = Self::new(self.rows(), self.cols());
        for (&(row, col), &lhs) in self.entries() {
            let value = combine(lhs, other.get(row, col)?).ok_or_else(|| overflow(row, col))?;
            result.set(row, col, value)?;
        }
        for (&(row, col), &rhs) in other.entries() {
            if self.contains(row, col) {
                continue;
            }
            let value = other_only(rhs).ok_or_else(|| overflow(row, col))?;
            result.set(row, col, value)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn matrix(rows: usize, cols: usize, entries: &[(usize, usize, i64)]) -> SparseMatrix {
        SparseMatrix::from_entries(rows, cols, entries.iter().copied()).unwrap()
    }

    #[test]
    fn test_add() {
        let a = matrix(2, 3, &[(0, 0, 1), (0, 2, 4), (1, 1, -2)]);
        let b = matrix(2, 3, &[(0, 0, 2), (1, 0, 5), (1, 1, 2)]);
        let sum = a.add(&b).unwrap();

        assert_eq!(sum.dimensions(), (2, 3));
        assert_eq!(sum.triples(), vec![(0, 0, 3), (0, 2, 4), (1, 0, 5)]);
        // (1, 1) cancelled to zero and is not stored
        assert!(!sum.contains(1, 1));
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(
                    sum.get(row, col).unwrap(),
                    a.get(row, col).unwrap() + b.get(row, col).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_subtract() {
        let a = matrix(2, 2, &[(0, 0, 5), (0, 1, 3)]);
        let b = matrix(2, 2, &[(0, 0, 5), (1, 1, 4)]);
        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.triples(), vec![(0, 1, 3), (1, 1, -4)]);
    }

    #[test]
    fn test_operands_unchanged() {
        let a = matrix(2, 2, &[(0, 0, 1)]);
        let b = matrix(2, 2, &[(1, 1, 1)]);
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = a.add(&b).unwrap();
        let _ = a.subtract(&b).unwrap();
        let _ = a.multiply(&b).unwrap();
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn test_add_subtract_shape_mismatch() {
        let a = matrix(2, 2, &[]);
        let b = matrix(2, 3, &[]);
        assert_eq!(
            a.add(&b),
            Err(MatrixError::DimensionMismatch {
                op: Operation::Add,
                lhs: (2, 2),
                rhs: (2, 3)
            })
        );
        assert_eq!(
            a.subtract(&b),
            Err(MatrixError::DimensionMismatch {
                op: Operation::Subtract,
                lhs: (2, 2),
                rhs: (2, 3)
            })
        );
    }

    #[test]
    fn test_multiply_concrete() {
        let a = matrix(2, 2, &[(0, 0, 2), (0, 1, 3)]);
        let b = matrix(2, 2, &[(1, 0, 4), (1, 1, 5)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.triples(), vec![(0, 0, 12), (0, 1, 15)]);
        assert_eq!(product.get(1, 0), Ok(0));
        assert_eq!(product.get(1, 1), Ok(0));
    }

    #[test]
    fn test_multiply_identity() {
        let identity = matrix(2, 2, &[(0, 0, 1), (1, 1, 1)]);
        let b = matrix(2, 2, &[(0, 0, 9), (0, 1, -1), (1, 0, 7)]);
        assert_eq!(identity.multiply(&b), Ok(b.clone()));
        assert_eq!(b.multiply(&identity), Ok(b));
    }

    #[test]
    fn test_multiply_shape() {
        let a = matrix(2, 3, &[(0, 1, 2), (1, 2, 1)]);
        let b = matrix(3, 4, &[(1, 3, 5), (2, 0, 6), (2, 3, 1)]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 4));
        assert_eq!(product.triples(), vec![(0, 3, 10), (1, 0, 6), (1, 3, 1)]);

        assert_eq!(
            a.multiply(&a),
            Err(MatrixError::DimensionMismatch {
                op: Operation::Multiply,
                lhs: (2, 3),
                rhs: (2, 3)
            })
        );
    }

    #[test]
    fn test_multiply_cancellation() {
        // Row 0 of A dotted with column 0 of B: 1*2 + 1*(-2) = 0
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, 1)]);
        let b = matrix(2, 1, &[(0, 0, 2), (1, 0, -2)]);
        let product = a.multiply(&b).unwrap();
        assert!(product.is_empty());
        assert_eq!(product.dimensions(), (1, 1));
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let one = matrix(1, 1, &[(0, 0, 1)]);
        assert_eq!(
            big.add(&one),
            Err(MatrixError::ArithmeticOverflow {
                op: Operation::Add,
                row: 0,
                col: 0
            })
        );

        let two = matrix(1, 1, &[(0, 0, 2)]);
        assert!(matches!(
            big.multiply(&two),
            Err(MatrixError::ArithmeticOverflow {
                op: Operation::Multiply,
                ..
            })
        ));

        // Negating i64::MIN in the second subtraction pass overflows
        let min = matrix(1, 1, &[(0, 0, i64::MIN)]);
        let empty = matrix(1, 1, &[]);
        assert!(matches!(
            empty.subtract(&min),
            Err(MatrixError::ArithmeticOverflow {
                op: Operation::Subtract,
                ..
            })
        ));
    }

    #[test]
    fn test_multiply_overflow_independent_of_term_order() {
        // Every column ordering sums to i32::MAX, which fits
        let orders: [[i32; 3]; 6] = [
            [i32::MAX, 1, -1],
            [i32::MAX, -1, 1],
            [1, i32::MAX, -1],
            [1, -1, i32::MAX],
            [-1, i32::MAX, 1],
            [-1, 1, i32::MAX],
        ];
        for n in [3usize, 5, 8] {
            let ones = SparseMatrix::from_entries(1, n, (0..n).map(|j| (0, j, 1i32))).unwrap();
            for order in &orders {
                let column = SparseMatrix::from_entries(
                    n,
                    1,
                    order.iter().enumerate().map(|(j, &value)| (j, 0, value)),
                )
                .unwrap();
                assert_eq!(ones.multiply(&column).unwrap().get(0, 0), Ok(i32::MAX));
            }
        }

        // A final value past the type's range is still rejected
        let column = SparseMatrix::from_entries(2, 1, [(0, 0, i32::MAX), (1, 0, 1)]).unwrap();
        let ones = SparseMatrix::from_entries(1, 2, [(0, 0, 1i32), (0, 1, 1)]).unwrap();
        assert_eq!(
            ones.multiply(&column),
            Err(MatrixError::ArithmeticOverflow {
                op: Operation::Multiply,
                row: 0,
                col: 0
            })
        );
    }

    #[test]
    fn test_narrow_type_overflow() {
        let a = SparseMatrix::from_entries(1, 1, [(0, 0, 50_000i32)]).unwrap();
        assert!(a.multiply(&a).is_err());
        let b = SparseMatrix::from_entries(1, 1, [(0, 0, 40_000i64)]).unwrap();
        assert_eq!(b.multiply(&b).unwrap().get(0, 0), Ok(1_600_000_000));
    }
}
