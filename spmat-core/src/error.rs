//! Error types for sparse matrix operations

use alloc::string::String;
use core::fmt;

/// A matrix axis, used to name the offending side of a bounds failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// Directive keyword that declares this axis in the text format
    pub const fn directive(&self) -> &'static str {
        match self {
            Axis::Row => "rows",
            Axis::Column => "cols",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "Row"),
            Axis::Column => write!(f, "Column"),
        }
    }
}

/// Arithmetic operations that can fail on shape or overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Subtract => write!(f, "subtraction"),
            Operation::Multiply => write!(f, "multiplication"),
        }
    }
}

/// Why a single line of the text format was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCause {
    /// Parenthesized entry without exactly three fields
    WrongArity { found: usize },
    /// A field that is not an integer of the expected type
    InvalidInteger { text: String },
    /// Neither blank, a dimension directive nor an entry
    UnrecognizedLine,
    /// Entry seen before its extent was declared
    UndeclaredDimension(Axis),
    /// Redeclared extent would exclude an entry that is already stored
    DimensionConflict {
        axis: Axis,
        declared: usize,
        required: usize,
    },
}

impl fmt::Display for ParseCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCause::WrongArity { found } => {
                write!(f, "expected 3 comma-separated values, found {found}")
            }
            ParseCause::InvalidInteger { text } => write!(f, "invalid integer '{text}'"),
            ParseCause::UnrecognizedLine => {
                write!(f, "expected 'rows=', 'cols=' or '(row,col,value)'")
            }
            ParseCause::UndeclaredDimension(axis) => {
                write!(f, "'{}=' must be declared before entries", axis.directive())
            }
            ParseCause::DimensionConflict {
                axis,
                declared,
                required,
            } => write!(
                f,
                "'{}={declared}' is too small for stored entries (need at least {required})",
                axis.directive()
            ),
        }
    }
}

/// Broad error kinds, one per failure class a caller may want to branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Parse,
    OutOfBounds,
    DimensionMismatch,
    FileNotFound,
    ArithmeticOverflow,
    Io,
}

/// Errors that can occur while building or combining sparse matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Neither a serialized source nor explicit dimensions were supplied
    MissingSource,
    /// A line of the text format could not be understood
    Parse {
        line_number: usize,
        line: String,
        cause: ParseCause,
    },
    /// Input ended without declaring an extent
    MissingDimensions { axis: Axis },
    /// A declared entry lies outside the declared extents
    EntryOutOfBounds {
        line_number: usize,
        line: String,
        axis: Axis,
        index: i64,
        len: usize,
    },
    /// `get`/`set` coordinate outside the matrix
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        op: Operation,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Result value does not fit the element type
    ArithmeticOverflow { op: Operation, row: usize, col: usize },
    /// Serialized source does not exist
    FileNotFound { path: String },
    /// Serialized source exists but could not be read or written
    Io { path: String, message: String },
    /// Structured (non-text) matrix data was rejected
    Decode { message: String },
}

impl MatrixError {
    /// Map this error onto its broad category
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::MissingSource => ErrorCategory::Configuration,
            MatrixError::Parse { .. }
            | MatrixError::MissingDimensions { .. }
            | MatrixError::Decode { .. } => ErrorCategory::Parse,
            MatrixError::EntryOutOfBounds { .. } | MatrixError::IndexOutOfBounds { .. } => {
                ErrorCategory::OutOfBounds
            }
            MatrixError::DimensionMismatch { .. } => ErrorCategory::DimensionMismatch,
            MatrixError::ArithmeticOverflow { .. } => ErrorCategory::ArithmeticOverflow,
            MatrixError::FileNotFound { .. } => ErrorCategory::FileNotFound,
            MatrixError::Io { .. } => ErrorCategory::Io,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::MissingSource => write!(
                f,
                "You must provide either a file path or dimensions for the matrix."
            ),
            MatrixError::Parse {
                line_number,
                line,
                cause,
            } => write!(f, "Error parsing line {line_number} '{line}': {cause}"),
            MatrixError::MissingDimensions { axis } => {
                write!(f, "Matrix is missing its '{}=' declaration", axis.directive())
            }
            MatrixError::EntryOutOfBounds {
                line_number,
                line,
                axis,
                index,
                len,
            } => {
                write!(
                    f,
                    "Error parsing line {line_number} '{line}': \
                     {axis} index out of bounds: {index} "
                )?;
                match len.checked_sub(1) {
                    Some(max) => write!(f, "(max: {max})"),
                    None => write!(f, "(matrix has no {})", axis.directive()),
                }
            }
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Row or column index out of bounds: ({row}, {col}) in a {rows}x{cols} matrix"
            ),
            MatrixError::DimensionMismatch { op, lhs, rhs } => {
                match op {
                    Operation::Multiply => write!(
                        f,
                        "The number of columns in the first matrix must equal \
                         the number of rows in the second"
                    )?,
                    _ => write!(f, "Matrices must have the same dimensions for {op}")?,
                }
                write!(f, " ({}x{} vs {}x{})", lhs.0, lhs.1, rhs.0, rhs.1)
            }
            MatrixError::ArithmeticOverflow { op, row, col } => {
                write!(f, "Integer overflow during {op} at ({row}, {col})")
            }
            MatrixError::FileNotFound { path } => write!(f, "The file {path} was not found."),
            MatrixError::Io { path, message } => write!(f, "I/O error on {path}: {message}"),
            MatrixError::Decode { message } => write!(f, "Invalid matrix data: {message}"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
