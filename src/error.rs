/// Errors from the factorization backends and iteration entry points.
///
/// Shape problems are rejected before any computation. Reaching the
/// iteration budget is deliberately *not* an error — iterators report it
/// through [`IterationStatus`](crate::eigen::IterationStatus) and still
/// return their best estimate.
///
/// ```
/// use spectralis::{factorize, DenseMatrix, EigenError, QrMethod};
///
/// let rect = DenseMatrix::<f64>::zeros(2, 3);
/// assert_eq!(
///     factorize(&rect, QrMethod::Householder).unwrap_err(),
///     EigenError::NotSquare { rows: 2, cols: 3 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EigenError {
    /// The input matrix has zero rows and columns.
    Empty,
    /// The input matrix is rectangular.
    NotSquare {
        /// Number of rows of the offending input.
        rows: usize,
        /// Number of columns of the offending input.
        cols: usize,
    },
    /// A column had exactly zero norm after orthogonalization against the
    /// previous columns — the input is rank deficient. Callers may treat
    /// this as fatal or retry with a perturbed input.
    DegenerateColumn {
        /// Index of the degenerate column.
        col: usize,
    },
    /// Power iteration produced a zero vector (the iterate landed in the
    /// null space of the matrix).
    ZeroVector,
}

impl core::fmt::Display for EigenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EigenError::Empty => write!(f, "matrix is empty"),
            EigenError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square ({}x{})", rows, cols)
            }
            EigenError::DegenerateColumn { col } => {
                write!(f, "column {} is degenerate (zero norm)", col)
            }
            EigenError::ZeroVector => write!(f, "iteration produced a zero vector"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EigenError {}
