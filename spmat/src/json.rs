//! JSON encoding of sparse matrices
//!
//! ```json
//! { "rows": 2, "cols": 2, "entries": [ { "row": 0, "col": 1, "value": 3 } ] }
//! ```

use serde::{de::DeserializeOwned, Serialize};
use spmat_core::{MatrixElement, MatrixError, Result, SparseMatrix};

/// Encode a matrix as pretty-printed JSON, entries in row-major order
pub fn to_string<T>(matrix: &SparseMatrix<T>) -> Result<String>
where
    T: MatrixElement + Serialize,
{
    serde_json::to_string_pretty(matrix).map_err(decode_error)
}

/// Decode a matrix from JSON, validating every entry
pub fn from_str<T>(text: &str) -> Result<SparseMatrix<T>>
where
    T: MatrixElement + DeserializeOwned,
{
    serde_json::from_str(text).map_err(decode_error)
}

fn decode_error(error: serde_json::Error) -> MatrixError {
    MatrixError::Decode {
        message: error.to_string(),
    }
}
