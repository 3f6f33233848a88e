//! Command runner behind the interactive matrix tool
//!
//! [`run`] loads two matrix files, applies the requested operation and
//! turns the result or any failure into the lines the tool prints. It never
//! panics on bad input; every failure becomes an [`Outcome`].

use std::{fmt, path::Path, str::FromStr};

use spmat_core::{Result, SparseMatrix};

use crate::{config::ReadConfig, file_io::MatrixFile};

/// Default left-hand operand, relative to the working directory
pub const DEFAULT_LHS_PATH: &str = "sample_inputs/easy_sample_01_2.txt";

/// Default right-hand operand, relative to the working directory
pub const DEFAULT_RHS_PATH: &str = "sample_inputs/easy_sample_01_3.txt";

/// Prompt shown when no action is given on the command line
pub const PROMPT: &str = "Enter action (Add, Subtract, Multiply): ";

/// Arithmetic operation selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Subtract,
    Multiply,
}

impl Action {
    /// Apply this operation to two matrices
    pub fn apply(self, lhs: &SparseMatrix, rhs: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Action::Add => lhs.add(rhs),
            Action::Subtract => lhs.subtract(rhs),
            Action::Multiply => lhs.multiply(rhs),
        }
    }
}

/// Action name that is not one of `add`, `subtract`, `multiply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Action::Add),
            "subtract" => Ok(Action::Subtract),
            "multiply" => Ok(Action::Multiply),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

/// How a result matrix is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Every cell as `(row, col, value)`, one line per row
    #[default]
    Grid,
    /// The `rows=`/`cols=`/`(r,c,v)` file format
    Text,
    /// JSON coordinate list
    #[cfg(feature = "serde")]
    Json,
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered result matrix
    Matrix(Vec<String>),
    /// User-facing error message
    Failed(String),
    /// Action name was not recognized
    InvalidAction,
}

impl Outcome {
    /// Lines to print for this outcome
    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Matrix(lines) => lines.clone(),
            Outcome::Failed(message) => vec![message.clone()],
            Outcome::InvalidAction => vec!["Invalid action".to_string()],
        }
    }
}

/// Load both operands, apply `action` and format the result
///
/// Operands are loaded before the action is checked, so a missing or
/// malformed file is reported even when the action name is also wrong.
pub fn run(
    action: &str,
    lhs: &Path,
    rhs: &Path,
    config: &ReadConfig,
    format: OutputFormat,
) -> Outcome {
    let operands: Result<(SparseMatrix, SparseMatrix)> = MatrixFile::read(lhs, config)
        .and_then(|lhs| MatrixFile::read(rhs, config).map(|rhs| (lhs, rhs)));
    let (lhs, rhs) = match operands {
        Ok(operands) => operands,
        Err(e) => return Outcome::Failed(format!("Error: {e}")),
    };

    let Ok(action) = action.parse::<Action>() else {
        return Outcome::InvalidAction;
    };

    match action
        .apply(&lhs, &rhs)
        .and_then(|result| format_matrix(&result, format))
    {
        Ok(lines) => Outcome::Matrix(lines),
        Err(e) => Outcome::Failed(format!("Error: {e}")),
    }
}

/// Format a matrix for printing
pub fn format_matrix(matrix: &SparseMatrix, format: OutputFormat) -> Result<Vec<String>> {
    match format {
        OutputFormat::Grid => Ok(matrix.render()),
        OutputFormat::Text => Ok(matrix.to_text().lines().map(str::to_string).collect()),
        #[cfg(feature = "serde")]
        OutputFormat::Json => {
            Ok(crate::json::to_string(matrix)?.lines().map(str::to_string).collect())
        }
    }
}
