#![no_std]

//! spmat-core - Sparse Matrix Core
//!
//! This crate provides the sparse matrix type, its text format and the
//! arithmetic on it. It performs no I/O; see the `spmat` crate for file
//! loading and the command runner.
//!
//! ```rust
//! use spmat_core::SparseMatrix;
//!
//! let a: SparseMatrix = SparseMatrix::parse("rows=2\ncols=2\n(0,0,2)\n(0,1,3)").unwrap();
//! let b: SparseMatrix = SparseMatrix::parse("rows=2\ncols=2\n(1,0,4)\n(1,1,5)").unwrap();
//! let c = a.multiply(&b).unwrap();
//! assert_eq!(c.get(0, 0), Ok(12));
//! assert_eq!(c.get(0, 1), Ok(15));
//! ```

extern crate alloc;

pub mod data;
pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod render;
pub mod traits;
pub mod validation;

pub use data::{Entry, MatrixData};
pub use error::*;
pub use format::{parse_matrix, parse_matrix_with, write_text, TextReader};
pub use matrix::SparseMatrix;
pub use render::render;
pub use traits::{DataType, MatrixElement, MatrixOperations, MatrixView};
