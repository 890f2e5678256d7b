//! Plain-text matrix files.
//!
//! One row per line, entries separated by whitespace, trailing newline
//! optional:
//!
//! ```text
//! 4.0 1.0
//! 2.0 3.0
//! ```

use std::fs;
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use crate::matrix::DenseMatrix;

/// Errors from reading a matrix file.
#[derive(Debug)]
pub enum ReadMatrixError {
    /// Underlying filesystem error.
    Io(std::io::Error),
    /// The file contained no rows.
    Empty,
    /// A token failed to parse as a float. Lines are 1-based.
    Parse { line: usize, token: String },
    /// A row had a different number of entries than the first row.
    Ragged {
        line: usize,
        expected: usize,
        got: usize,
    },
}

impl core::fmt::Display for ReadMatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadMatrixError::Io(e) => write!(f, "io error: {}", e),
            ReadMatrixError::Empty => write!(f, "matrix file has no rows"),
            ReadMatrixError::Parse { line, token } => {
                write!(f, "line {}: cannot parse '{}' as a number", line, token)
            }
            ReadMatrixError::Ragged {
                line,
                expected,
                got,
            } => write!(
                f,
                "line {}: expected {} entries, found {}",
                line, expected, got
            ),
        }
    }
}

impl std::error::Error for ReadMatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadMatrixError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadMatrixError {
    fn from(e: std::io::Error) -> Self {
        ReadMatrixError::Io(e)
    }
}

/// Parse a matrix from whitespace-separated text.
///
/// Blank lines are ignored; every non-blank line must hold the same
/// number of entries.
///
/// ```
/// use spectralis::io::parse_matrix;
///
/// let a = parse_matrix("4.0 1.0\n2.0 3.0").unwrap();
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a[(1, 0)], 2.0);
/// ```
pub fn parse_matrix(text: &str) -> Result<DenseMatrix<f64>, ReadMatrixError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| ReadMatrixError::Parse {
                    line: idx + 1,
                    token: token.into(),
                })?;
            row.push(value);
        }
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ReadMatrixError::Ragged {
                    line: idx + 1,
                    expected: first.len(),
                    got: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ReadMatrixError::Empty);
    }
    let nrows = rows.len();
    let ncols = rows[0].len();
    Ok(DenseMatrix::from_fn(nrows, ncols, |i, j| rows[i][j]))
}

/// Read a matrix from a file.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<DenseMatrix<f64>, ReadMatrixError> {
    parse_matrix(&fs::read_to_string(path)?)
}

/// Format a matrix in the same text layout, without a trailing newline.
pub fn format_matrix(m: &DenseMatrix<f64>) -> String {
    let mut out = String::new();
    for i in 0..m.nrows() {
        if i > 0 {
            out.push('\n');
        }
        for j in 0..m.ncols() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(&m[(i, j)].to_string());
        }
    }
    out
}

/// Write a matrix to a file in the text layout.
pub fn write_matrix(path: impl AsRef<Path>, m: &DenseMatrix<f64>) -> Result<(), std::io::Error> {
    fs::write(path, format_matrix(m))
}
