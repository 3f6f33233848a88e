//! Coordinate-list representation used for structured encodings
//!
//! [`MatrixData`] is the plain `{rows, cols, entries}` shape that serde
//! encoders see. Converting back into a [`SparseMatrix`] re-validates every
//! entry through `set`.

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{MatrixElement, MatrixError, SparseMatrix};

/// A single stored value and its coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

/// Dimensions plus a row-major list of entries
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixData<T> {
    pub rows: usize,
    pub cols: usize,
    pub entries: Vec<Entry<T>>,
}

impl<T: MatrixElement> From<&SparseMatrix<T>> for MatrixData<T> {
    fn from(matrix: &SparseMatrix<T>) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            entries: matrix
                .triples()
                .into_iter()
                .map(|(row, col, value)| Entry { row, col, value })
                .collect(),
        }
    }
}

impl<T: MatrixElement> TryFrom<MatrixData<T>> for SparseMatrix<T> {
    type Error = MatrixError;

    fn try_from(data: MatrixData<T>) -> Result<Self, Self::Error> {
        SparseMatrix::from_entries(
            data.rows,
            data.cols,
            data.entries.into_iter().map(|e| (e.row, e.col, e.value)),
        )
        .map_err(|e| MatrixError::Decode {
            message: e.to_string(),
        })
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for SparseMatrix<T>
where
    T: MatrixElement + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixData::from(self).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SparseMatrix<T>
where
    T: MatrixElement + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = MatrixData::<T>::deserialize(deserializer)?;
        SparseMatrix::try_from(data).map_err(serde::de::Error::custom)
    }
}
