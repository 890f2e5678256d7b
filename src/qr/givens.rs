//! Givens-rotation factorization backend.

use num_traits::Float;

use crate::matrix::DenseMatrix;
use crate::traits::LinalgScalar;

/// Factor a square matrix with Givens rotations.
///
/// For each column k and each row j below the diagonal (ascending), a
/// 2-plane rotation in rows {k, j} zeroes `R[j, k]`. With
/// `r = sqrt(|a|^2 + |b|^2)`, `c = a/r`, `s = b/r`, the rotation rows are
/// `[conj(c), conj(s); -s, c]` — for real scalars exactly the cosine/sine
/// pair of `atan2(-b, a)`, and unitary in the complex case. Each rotation
/// is applied to the two affected rows of R and accumulated into the two
/// affected columns of Q; rank-deficient input needs no special handling
/// because nothing here divides by a column norm.
pub(crate) fn factor<S: LinalgScalar>(a: &DenseMatrix<S>) -> (DenseMatrix<S>, DenseMatrix<S>) {
    let n = a.nrows();
    let mut r = a.clone();
    let mut q = DenseMatrix::<S>::eye(n);

    for k in 0..n {
        for j in (k + 1)..n {
            let pivot = r[(k, k)];
            let target = r[(j, k)];
            if target == S::zero() {
                continue;
            }
            let hyp = (pivot.modulus_sq() + target.modulus_sq()).sqrt();
            let c = pivot / S::from_real(hyp);
            let s = target / S::from_real(hyp);

            // R <- G R on rows k and j
            for col in k..n {
                let x = r[(k, col)];
                let y = r[(j, col)];
                r[(k, col)] = c.conj() * x + s.conj() * y;
                r[(j, col)] = c * y - s * x;
            }
            // Q <- Q G^H on columns k and j
            for row in 0..n {
                let x = q[(row, k)];
                let y = q[(row, j)];
                q[(row, k)] = x * c + y * s;
                q[(row, j)] = y * c.conj() - x * s.conj();
            }
            // The rotation zeroes the target by construction
            r[(j, k)] = S::zero();
        }
    }

    (q, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    const TOL: f64 = 1e-10;

    #[test]
    fn roundtrip_3x3() {
        let a = DenseMatrix::from_rows(
            3,
            3,
            &[2.0, -1.0, 3.0, 4.0, 1.0, -2.0, 1.0, 5.0, 2.0],
        );
        let (q, r) = factor(&a);
        assert!((&(&q * &r) - &a).norm_fro() < TOL);
        let id = DenseMatrix::<f64>::eye(3);
        assert!((&(&q.transpose() * &q) - &id).norm_fro() < TOL);
        for i in 0..3 {
            for j in 0..i {
                assert!(r[(i, j)].abs() < TOL);
            }
        }
    }

    #[test]
    fn pivot_becomes_nonnegative() {
        let a = DenseMatrix::from_rows(2, 2, &[-3.0, 1.0, 4.0, 1.0]);
        let (_, r) = factor(&a);
        // r = hypot(-3, 4) = 5, real and non-negative after the rotation
        assert!((r[(0, 0)] - 5.0).abs() < TOL);
    }

    #[test]
    fn rank_deficient_completes() {
        let a = DenseMatrix::from_rows(2, 2, &[1.0, 0.0, 2.0, 0.0]);
        let (q, r) = factor(&a);
        assert!((&(&q * &r) - &a).norm_fro() < TOL);
        assert!(r[(1, 1)].abs() < TOL);
    }

    #[test]
    fn complex_roundtrip() {
        let a = DenseMatrix::from_rows(
            2,
            2,
            &[
                Complex::new(1.0_f64, 2.0),
                Complex::new(0.0, 1.0),
                Complex::new(2.0, -1.0),
                Complex::new(1.0, 1.0),
            ],
        );
        let (q, r) = factor(&a);
        assert!((&(&q * &r) - &a).norm_fro() < TOL);
        let id = DenseMatrix::<Complex<f64>>::eye(2);
        assert!((&(&q.conj_transpose() * &q) - &id).norm_fro() < TOL);
        assert!(r[(1, 0)].norm() < TOL);
    }
}
