//! Reading and writing matrix files
//!
//! Files use the text format from [`spmat_core::format`]. With the `serde`
//! feature, paths ending in `.json` are read as JSON instead.

use std::{fs, io, path::Path};

use spmat_core::{MatrixElement, MatrixError, Result, SparseMatrix};

use crate::config::ReadConfig;

/// Entry points for matrix files on disk
pub struct MatrixFile;

impl MatrixFile {
    /// Read a matrix from `path`
    ///
    /// A missing file is reported as [`MatrixError::FileNotFound`] naming the
    /// path; any other read failure as [`MatrixError::Io`].
    pub fn read<T, P>(path: P, config: &ReadConfig) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + ElementEncoding,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| io_error(path, e))?;

        if is_json(path) {
            return T::decode_json(&contents);
        }

        if config.echo_entries() {
            SparseMatrix::parse_with(&contents, |row, col, value| {
                eprintln!("Processing: row={row}, col={col}, value={value}");
            })
        } else {
            SparseMatrix::parse(&contents)
        }
    }

    /// Read `path` if given, otherwise create an empty matrix of `dimensions`
    ///
    /// Fails with [`MatrixError::MissingSource`] when neither is supplied.
    pub fn open<T, P>(
        path: Option<P>,
        dimensions: Option<(usize, usize)>,
        config: &ReadConfig,
    ) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + ElementEncoding,
        P: AsRef<Path>,
    {
        match (path, dimensions) {
            (Some(path), _) => Self::read(path, config),
            (None, dimensions) => SparseMatrix::from_parts(None, dimensions),
        }
    }

    /// Write `matrix` to `path` in the text format, or JSON for `.json` paths
    pub fn write<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement + ElementEncoding,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let contents = if is_json(path) {
            T::encode_json(matrix)?
        } else {
            matrix.to_text()
        };
        fs::write(path, contents).map_err(|e| io_error(path, e))
    }
}

/// Element types that can round-trip through every supported file encoding
#[cfg(feature = "serde")]
pub trait ElementEncoding: MatrixElement + serde::Serialize + serde::de::DeserializeOwned {
    fn encode_json(matrix: &SparseMatrix<Self>) -> Result<String> {
        crate::json::to_string(matrix)
    }

    fn decode_json(text: &str) -> Result<SparseMatrix<Self>> {
        crate::json::from_str(text)
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement + serde::Serialize + serde::de::DeserializeOwned> ElementEncoding for T {}

/// Element types that can round-trip through every supported file encoding
#[cfg(not(feature = "serde"))]
pub trait ElementEncoding: MatrixElement {
    fn encode_json(_matrix: &SparseMatrix<Self>) -> Result<String> {
        Err(json_disabled())
    }

    fn decode_json(_text: &str) -> Result<SparseMatrix<Self>> {
        Err(json_disabled())
    }
}

#[cfg(not(feature = "serde"))]
impl<T: MatrixElement> ElementEncoding for T {}

#[cfg(not(feature = "serde"))]
fn json_disabled() -> MatrixError {
    MatrixError::Decode {
        message: "JSON support requires the 'serde' feature".to_string(),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn io_error(path: &Path, error: io::Error) -> MatrixError {
    let path = path.display().to_string();
    match error.kind() {
        io::ErrorKind::NotFound => MatrixError::FileNotFound { path },
        _ => MatrixError::Io {
            path,
            message: error.to_string(),
        },
    }
}
