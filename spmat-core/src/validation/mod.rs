//! Validation utilities
//!
//! Pure functions with no I/O: coordinate and shape checks, and line-level
//! parsing of the text format.

pub mod bounds;
pub mod parsing;

pub use bounds::{axis_index, validate_cell, validate_product_shape, validate_same_shape};
pub use parsing::{parse_directive, Directive};
