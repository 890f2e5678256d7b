use num_traits::{Float, Zero};

use crate::traits::LinalgScalar;

use super::DenseMatrix;

/// Matrix norms. All return the real type underlying the scalar, so the
/// same code serves real and complex matrices (entry magnitudes are
/// moduli).
impl<T: LinalgScalar> DenseMatrix<T> {
    /// Frobenius norm: square root of the sum of squared entry moduli.
    ///
    /// This is the convergence metric of the iteration engine: an iterate
    /// has converged when `(next - current).norm_fro()` drops below the
    /// caller's tolerance.
    ///
    /// ```
    /// use spectralis::DenseMatrix;
    /// let m = DenseMatrix::from_rows(2, 2, &[3.0_f64, 0.0, 0.0, 4.0]);
    /// assert!((m.norm_fro() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm_fro(&self) -> T::Real {
        let mut sum = <T::Real as Zero>::zero();
        for &x in self.as_slice() {
            sum = sum + x.modulus_sq();
        }
        sum.sqrt()
    }

    /// One-norm: maximum absolute column sum.
    pub fn norm_one(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for j in 0..self.ncols() {
            let mut sum = <T::Real as Zero>::zero();
            for &x in self.col_slice(j, 0) {
                sum = sum + x.modulus();
            }
            if sum > max {
                max = sum;
            }
        }
        max
    }

    /// Infinity-norm: maximum absolute row sum.
    pub fn norm_inf(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for i in 0..self.nrows() {
            let mut sum = <T::Real as Zero>::zero();
            for j in 0..self.ncols() {
                sum = sum + self[(i, j)].modulus();
            }
            if sum > max {
                max = sum;
            }
        }
        max
    }

    /// Largest entry modulus.
    pub fn max_abs(&self) -> T::Real {
        let mut max = <T::Real as Zero>::zero();
        for &x in self.as_slice() {
            let m = x.modulus();
            if m > max {
                max = m;
            }
        }
        max
    }
}
