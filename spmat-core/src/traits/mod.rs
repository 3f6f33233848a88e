//! Abstract interfaces shared by matrix implementations

pub mod element;
pub mod matrix;

pub use element::{DataType, MatrixElement};
pub use matrix::{MatrixOperations, MatrixView};
