use core::ops::{Add, Mul, Neg, Sub};

use crate::traits::Scalar;

use super::vector::DenseVector;
use super::DenseMatrix;

fn zip<T: Scalar>(
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
    f: impl Fn(T, T) -> T,
) -> DenseMatrix<T> {
    assert_eq!(a.nrows(), b.nrows(), "row count mismatch");
    assert_eq!(a.ncols(), b.ncols(), "column count mismatch");
    DenseMatrix::from_fn(a.nrows(), a.ncols(), |i, j| f(a[(i, j)], b[(i, j)]))
}

/// Matrix product, accumulated column by column so the inner loop walks
/// contiguous column-major storage.
fn matmul<T: Scalar>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> DenseMatrix<T> {
    assert_eq!(
        a.ncols(),
        b.nrows(),
        "inner dimension mismatch: {}x{} * {}x{}",
        a.nrows(),
        a.ncols(),
        b.nrows(),
        b.ncols(),
    );
    let m = a.nrows();
    let inner = a.ncols();
    let n = b.ncols();
    let mut out = DenseMatrix::zeros(m, n);
    for j in 0..n {
        for k in 0..inner {
            let bkj = b[(k, j)];
            let a_col = a.col_slice(k, 0);
            let out_col = out.col_slice_mut(j, 0);
            for i in 0..m {
                out_col[i] = out_col[i] + a_col[i] * bkj;
            }
        }
    }
    out
}

// ── Add / Sub / Neg ─────────────────────────────────────────────────

impl<T: Scalar> Add for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn add(self, rhs: Self) -> DenseMatrix<T> {
        zip(self, rhs, |x, y| x + y)
    }
}

impl<T: Scalar> Add for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn add(self, rhs: Self) -> DenseMatrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Sub for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn sub(self, rhs: Self) -> DenseMatrix<T> {
        zip(self, rhs, |x, y| x - y)
    }
}

impl<T: Scalar> Sub for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn sub(self, rhs: Self) -> DenseMatrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Neg for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> DenseMatrix<T> {
        DenseMatrix::from_fn(self.nrows(), self.ncols(), |i, j| T::zero() - self[(i, j)])
    }
}

impl<T: Scalar> Neg for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn neg(self) -> DenseMatrix<T> {
        -&self
    }
}

// ── Mul ─────────────────────────────────────────────────────────────

impl<T: Scalar> Mul for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: Self) -> DenseMatrix<T> {
        matmul(self, rhs)
    }
}

impl<T: Scalar> Mul for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: Self) -> DenseMatrix<T> {
        matmul(&self, &rhs)
    }
}

impl<T: Scalar> Mul<&DenseMatrix<T>> for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
        matmul(&self, rhs)
    }
}

impl<T: Scalar> Mul<DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: DenseMatrix<T>) -> DenseMatrix<T> {
        matmul(self, &rhs)
    }
}

/// Scalar multiply (matrix on the left).
impl<T: Scalar> Mul<T> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: T) -> DenseMatrix<T> {
        DenseMatrix::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)] * rhs)
    }
}

impl<T: Scalar> Mul<T> for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: T) -> DenseMatrix<T> {
        &self * rhs
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Matrix-vector product `A * v`.
    ///
    /// ```
    /// use spectralis::{DenseMatrix, DenseVector};
    /// let a = DenseMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// let v = DenseVector::from_slice(&[1.0, 1.0]);
    /// let av = a.mul_vec(&v);
    /// assert_eq!(av[0], 3.0);
    /// assert_eq!(av[1], 7.0);
    /// ```
    pub fn mul_vec(&self, v: &DenseVector<T>) -> DenseVector<T> {
        assert_eq!(self.ncols(), v.len(), "dimension mismatch");
        let m = self.nrows();
        let mut out = alloc::vec![T::zero(); m];
        for j in 0..self.ncols() {
            let vj = v[j];
            let col = self.col_slice(j, 0);
            for i in 0..m {
                out[i] = out[i] + col[i] * vj;
            }
        }
        DenseVector::from_vec(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = DenseMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DenseMatrix::from_rows(2, 2, &[4.0, 3.0, 2.0, 1.0]);
        let s = &a + &b;
        assert_eq!(s[(0, 0)], 5.0);
        assert_eq!(s[(1, 1)], 5.0);
        let d = &a - &b;
        assert_eq!(d[(0, 0)], -3.0);
        assert_eq!(d[(1, 0)], 1.0);
        let n = -&a;
        assert_eq!(n[(0, 1)], -2.0);
    }

    #[test]
    fn matmul_2x2() {
        let a = DenseMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DenseMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let c = &a * &b;
        assert_eq!(c[(0, 0)], 19.0);
        assert_eq!(c[(0, 1)], 22.0);
        assert_eq!(c[(1, 0)], 43.0);
        assert_eq!(c[(1, 1)], 50.0);
    }

    #[test]
    fn matmul_rectangular() {
        let a = DenseMatrix::from_rows(2, 3, &[1.0, 0.0, 2.0, 0.0, 1.0, -1.0]);
        let b = DenseMatrix::from_rows(3, 2, &[1.0, 1.0, 2.0, 0.0, 0.0, 3.0]);
        let c = &a * &b;
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c[(0, 0)], 1.0);
        assert_eq!(c[(0, 1)], 7.0);
        assert_eq!(c[(1, 0)], 2.0);
        assert_eq!(c[(1, 1)], -3.0);
    }

    #[test]
    #[should_panic(expected = "inner dimension mismatch")]
    fn matmul_shape_mismatch() {
        let a = DenseMatrix::<f64>::zeros(2, 3);
        let b = DenseMatrix::<f64>::zeros(2, 2);
        let _ = &a * &b;
    }

    #[test]
    fn scalar_multiply() {
        let a = DenseMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = &a * 2.0;
        assert_eq!(b[(1, 0)], 6.0);
    }

    #[test]
    fn identity_is_neutral() {
        let a = DenseMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = DenseMatrix::<f64>::eye(2);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }
}
