//! spmat - Sparse Matrix Files and Command Runner
//!
//! This library loads sparse matrices from disk and runs arithmetic on them,
//! on top of the I/O-free types in `spmat-core`.
//!
//! ## Architecture
//!
//! - **spmat-core**: matrix type, text format, validation and arithmetic (no I/O)
//! - **spmat**: file reading/writing, JSON encoding and the command runner
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{MatrixFile, ReadConfig, SparseMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let config = ReadConfig::default();
//!     let a: SparseMatrix = MatrixFile::read("a.txt", &config)?;
//!     let b: SparseMatrix = MatrixFile::read("b.txt", &config)?;
//!
//!     for line in a.multiply(&b)?.render() {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **serde** (default): JSON encoding and `.json` file support
//! - **cli** (default): clap argument types for the `matrix_cli` example

// Re-export core abstractions
pub use spmat_core::{
    // Matrix type and traits
    SparseMatrix, MatrixElement, MatrixOperations, MatrixView, DataType,
    // Structured form
    Entry, MatrixData,
    // Error handling
    MatrixError, Result, ErrorCategory, Axis, Operation, ParseCause,
};

pub mod cli;
pub mod config;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod json;

pub use cli::{Action, OutputFormat, Outcome};
pub use config::ReadConfig;
pub use file_io::{ElementEncoding, MatrixFile};
