mod norm;
mod ops;
pub mod vector;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use num_complex::Complex;

use crate::error::EigenError;
use crate::traits::{LinalgScalar, Scalar};

/// Dense, heap-allocated matrix with runtime dimensions.
///
/// Column-major `Vec<T>` storage: the per-column operations of the
/// Gram-Schmidt backends and the Householder sweeps work on contiguous
/// slices. All engine entry points copy on entry — a `DenseMatrix` passed
/// to a factorization or an iterator is never mutated.
///
/// # Examples
///
/// ```
/// use spectralis::DenseMatrix;
///
/// let a = DenseMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert!(a.is_square());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use spectralis::DenseMatrix;
    /// let m = DenseMatrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix filled with a given value.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use spectralis::DenseMatrix;
    /// let id = DenseMatrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Transposes the data into the column-major internal storage.
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use spectralis::DenseMatrix;
    /// let m = DenseMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        let mut data = vec![T::zero(); nrows * ncols];
        for i in 0..nrows {
            for j in 0..ncols {
                data[j * nrows + i] = row_major[i * ncols + j];
            }
        }
        Self { data, nrows, ncols }
    }

    /// Create a matrix from an owned `Vec<T>` in column-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }
}

impl<T> DenseMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Flat column-major view of the data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Sub-column `self[row_start.., col]` as a contiguous slice.
    #[inline]
    pub fn col_slice(&self, col: usize, row_start: usize) -> &[T] {
        let start = col * self.nrows + row_start;
        let end = col * self.nrows + self.nrows;
        &self.data[start..end]
    }

    /// Mutable sub-column `self[row_start.., col]`.
    #[inline]
    pub fn col_slice_mut(&mut self, col: usize, row_start: usize) -> &mut [T] {
        let start = col * self.nrows + row_start;
        let end = col * self.nrows + self.nrows;
        &mut self.data[start..end]
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use spectralis::DenseMatrix;
    /// let m = DenseMatrix::from_fn(3, 3, |i, j| if i == j { 2.0_f64 } else { 0.0 });
    /// assert_eq!(m[(1, 1)], 2.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Dimension of a square matrix, or the shape error a public entry
    /// point reports before doing any work.
    pub(crate) fn square_dim(&self) -> Result<usize, EigenError> {
        if self.nrows == 0 || self.ncols == 0 {
            return Err(EigenError::Empty);
        }
        if self.nrows != self.ncols {
            return Err(EigenError::NotSquare {
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(self.nrows)
    }
}

// ── Structure operations ────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Copy of the leading `m x m` principal submatrix.
    pub fn leading_minor(&self, m: usize) -> Self {
        assert!(m <= self.nrows && m <= self.ncols);
        Self::from_fn(m, m, |i, j| self[(i, j)])
    }

    /// Overwrite the leading principal submatrix with `sub`.
    pub fn set_leading_minor(&mut self, sub: &Self) {
        let m = sub.nrows;
        assert!(sub.is_square() && m <= self.nrows && m <= self.ncols);
        for j in 0..m {
            for i in 0..m {
                self[(i, j)] = sub[(i, j)];
            }
        }
    }

    /// Embed a square matrix into the top-left corner of an `n x n`
    /// identity. Used to lift the Q factor of an active submatrix into a
    /// full-size orthogonal transform.
    ///
    /// ```
    /// use spectralis::DenseMatrix;
    /// let g = DenseMatrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0]);
    /// let e = g.embed_leading(3);
    /// assert_eq!(e[(0, 1)], 1.0);
    /// assert_eq!(e[(2, 2)], 1.0);
    /// ```
    pub fn embed_leading(&self, n: usize) -> Self {
        let m = self.nrows;
        assert!(self.is_square() && m <= n);
        let mut out = Self::eye(n);
        for j in 0..m {
            for i in 0..m {
                out[(i, j)] = self[(i, j)];
            }
        }
        out
    }
}

impl<T: LinalgScalar> DenseMatrix<T> {
    /// Conjugate (Hermitian) transpose. Plain transpose for real scalars.
    pub fn conj_transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)].conj())
    }

    /// Promote every entry into `Complex<Real>`.
    ///
    /// No-op copy for already-complex matrices; used to keep iteration
    /// results and history snapshots uniformly complex.
    pub fn to_complex(&self) -> DenseMatrix<Complex<T::Real>> {
        DenseMatrix {
            data: self.data.iter().map(|&x| x.to_complex()).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col * self.nrows + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn constructors() {
        let z = DenseMatrix::<f64>::zeros(2, 3);
        assert_eq!(z.nrows(), 2);
        assert_eq!(z.ncols(), 3);
        assert!(!z.is_square());

        let id = DenseMatrix::<f64>::eye(2);
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 0)], 0.0);

        let f = DenseMatrix::fill(2, 2, 7.0);
        assert_eq!(f[(1, 1)], 7.0);
    }

    #[test]
    fn from_rows_layout() {
        let m = DenseMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 1)], 5.0);
        // Column-major storage: first column is (1, 4)
        assert_eq!(m.col_slice(0, 0), &[1.0, 4.0]);
        assert_eq!(m.col_slice(2, 1), &[6.0]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = DenseMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn square_dim_errors() {
        let empty = DenseMatrix::<f64>::zeros(0, 0);
        assert_eq!(empty.square_dim(), Err(EigenError::Empty));
        let rect = DenseMatrix::<f64>::zeros(2, 3);
        assert_eq!(
            rect.square_dim(),
            Err(EigenError::NotSquare { rows: 2, cols: 3 })
        );
        let sq = DenseMatrix::<f64>::zeros(4, 4);
        assert_eq!(sq.square_dim(), Ok(4));
    }

    #[test]
    fn transpose_and_conj() {
        let m = DenseMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let t = m.transpose();
        assert_eq!(t[(0, 1)], 3.0);

        let c = DenseMatrix::from_rows(
            2,
            2,
            &[
                Complex::new(1.0, 2.0),
                Complex::new(0.0, 1.0),
                Complex::new(3.0, 0.0),
                Complex::new(4.0, -1.0),
            ],
        );
        let h = c.conj_transpose();
        assert_eq!(h[(0, 0)], Complex::new(1.0, -2.0));
        assert_eq!(h[(1, 0)], Complex::new(0.0, -1.0));
        assert_eq!(h[(0, 1)], Complex::new(3.0, 0.0));
    }

    #[test]
    fn leading_minor_roundtrip() {
        let mut m = DenseMatrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let top = m.leading_minor(2);
        assert_eq!(top[(1, 1)], 5.0);
        let scaled = DenseMatrix::from_rows(2, 2, &[10.0, 20.0, 40.0, 50.0]);
        m.set_leading_minor(&scaled);
        assert_eq!(m[(0, 0)], 10.0);
        assert_eq!(m[(1, 1)], 50.0);
        assert_eq!(m[(2, 2)], 9.0);
    }

    #[test]
    fn embed() {
        let g = DenseMatrix::from_rows(2, 2, &[0.0, 1.0, -1.0, 0.0]);
        let e = g.embed_leading(4);
        assert_eq!(e[(1, 0)], -1.0);
        assert_eq!(e[(2, 2)], 1.0);
        assert_eq!(e[(3, 2)], 0.0);
    }

    #[test]
    fn to_complex_promotion() {
        let m = DenseMatrix::from_rows(2, 2, &[1.0, -2.0, 3.0, 4.0]);
        let c = m.to_complex();
        assert_eq!(c[(0, 1)], Complex::new(-2.0, 0.0));
    }
}
