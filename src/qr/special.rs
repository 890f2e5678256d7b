//! Special-case classifier: cheap structural checks that short-circuit
//! factorization for degenerate inputs.

use num_traits::{One, Zero};

use crate::matrix::DenseMatrix;
use crate::traits::LinalgScalar;

/// Try to produce `(Q, R)` without running a backend.
///
/// Checks, in priority order with short-circuit on the first match:
/// zero → `(I, 0)`; identity → `(I, I)`; unitary → `(A, I)`; diagonal →
/// `(phase(diag), |diag|)`; upper-triangular → `(I, A)`.
///
/// The diagonal branch comes before the triangular one: every diagonal
/// matrix is also upper-triangular, and the diagonal result carries the
/// non-negative-diagonal sign convention the rest of the engine uses.
/// Structural checks are exact; the unitary check compares `A^H A`
/// against the identity with an epsilon-scaled tolerance.
pub(crate) fn try_shortcut<S: LinalgScalar>(
    a: &DenseMatrix<S>,
) -> Option<(DenseMatrix<S>, DenseMatrix<S>)> {
    let n = a.nrows();

    if is_zero(a) {
        return Some((DenseMatrix::eye(n), DenseMatrix::zeros(n, n)));
    }
    if is_identity(a) {
        return Some((DenseMatrix::eye(n), DenseMatrix::eye(n)));
    }
    if is_unitary(a) {
        return Some((a.clone(), DenseMatrix::eye(n)));
    }
    if is_diagonal(a) {
        // Split each diagonal entry into phase and magnitude so R ends up
        // with a non-negative diagonal: d = (d/|d|) * |d|.
        let mut q = DenseMatrix::zeros(n, n);
        let mut r = DenseMatrix::zeros(n, n);
        for i in 0..n {
            let d = a[(i, i)];
            let m = d.modulus();
            if m == <S::Real as Zero>::zero() {
                q[(i, i)] = S::one();
            } else {
                q[(i, i)] = d / S::from_real(m);
                r[(i, i)] = S::from_real(m);
            }
        }
        return Some((q, r));
    }
    if is_upper_triangular(a) {
        return Some((DenseMatrix::eye(n), a.clone()));
    }
    None
}

fn is_zero<S: LinalgScalar>(a: &DenseMatrix<S>) -> bool {
    a.as_slice().iter().all(|&x| x == S::zero())
}

fn is_identity<S: LinalgScalar>(a: &DenseMatrix<S>) -> bool {
    let n = a.nrows();
    for j in 0..n {
        for i in 0..n {
            let expected = if i == j { S::one() } else { S::zero() };
            if a[(i, j)] != expected {
                return false;
            }
        }
    }
    true
}

fn is_diagonal<S: LinalgScalar>(a: &DenseMatrix<S>) -> bool {
    let n = a.nrows();
    for j in 0..n {
        for i in 0..n {
            if i != j && a[(i, j)] != S::zero() {
                return false;
            }
        }
    }
    true
}

fn is_upper_triangular<S: LinalgScalar>(a: &DenseMatrix<S>) -> bool {
    let n = a.nrows();
    for j in 0..n {
        for i in (j + 1)..n {
            if a[(i, j)] != S::zero() {
                return false;
            }
        }
    }
    true
}

/// `A^H A = I` within an epsilon-scaled residual.
fn is_unitary<S: LinalgScalar>(a: &DenseMatrix<S>) -> bool {
    let n = a.nrows();
    let gram = &a.conj_transpose() * a;
    let two = <S::Real as One>::one() + <S::Real as One>::one();
    let sixteen = two * two * two * two;
    let tol = S::eps() * sixteen * (<S::Real as One>::one() + a.max_abs() * a.max_abs());
    for j in 0..n {
        for i in 0..n {
            let expected = if i == j { S::one() } else { S::zero() };
            if (gram[(i, j)] - expected).modulus() > tol {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn zero_matrix() {
        let a = DenseMatrix::<f64>::zeros(3, 3);
        let (q, r) = try_shortcut(&a).unwrap();
        assert_eq!(q, DenseMatrix::eye(3));
        assert_eq!(r, DenseMatrix::zeros(3, 3));
    }

    #[test]
    fn identity_matrix() {
        let a = DenseMatrix::<f64>::eye(4);
        let (q, r) = try_shortcut(&a).unwrap();
        assert_eq!(q, DenseMatrix::eye(4));
        assert_eq!(r, DenseMatrix::eye(4));
    }

    #[test]
    fn orthogonal_matrix() {
        // Rotation by 30 degrees
        let t = core::f64::consts::FRAC_PI_6;
        let a = DenseMatrix::from_rows(2, 2, &[t.cos(), -t.sin(), t.sin(), t.cos()]);
        let (q, r) = try_shortcut(&a).unwrap();
        assert_eq!(q, a);
        assert_eq!(r, DenseMatrix::eye(2));
    }

    #[test]
    fn diagonal_sign_split() {
        let a = DenseMatrix::from_rows(3, 3, &[2.0, 0.0, 0.0, 0.0, -3.0, 0.0, 0.0, 0.0, 5.0]);
        let (q, r) = try_shortcut(&a).unwrap();
        assert_eq!(q[(0, 0)], 1.0);
        assert_eq!(q[(1, 1)], -1.0);
        assert_eq!(q[(2, 2)], 1.0);
        assert_eq!(r[(0, 0)], 2.0);
        assert_eq!(r[(1, 1)], 3.0);
        assert_eq!(r[(2, 2)], 5.0);
    }

    #[test]
    fn diagonal_with_zero_entry() {
        let a = DenseMatrix::from_rows(2, 2, &[4.0, 0.0, 0.0, 0.0]);
        let (q, r) = try_shortcut(&a).unwrap();
        assert_eq!(q[(1, 1)], 1.0);
        assert_eq!(r[(1, 1)], 0.0);
        assert_eq!(&q * &r, a);
    }

    #[test]
    fn upper_triangular_passthrough() {
        let a = DenseMatrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0, 0.0, 6.0]);
        let (q, r) = try_shortcut(&a).unwrap();
        assert_eq!(q, DenseMatrix::eye(3));
        assert_eq!(r, a);
    }

    #[test]
    fn general_matrix_is_not_classified() {
        let a = DenseMatrix::from_rows(2, 2, &[4.0, 1.0, 2.0, 3.0]);
        assert!(try_shortcut(&a).is_none());
    }

    #[test]
    fn complex_diagonal_phase() {
        // d = 3i: phase i, magnitude 3
        let a = DenseMatrix::from_rows(
            2,
            2,
            &[
                Complex::new(0.0_f64, 3.0),
                Complex::new(0.0, 0.0),
                Complex::new(0.0, 0.0),
                Complex::new(-2.0, 0.0),
            ],
        );
        let (q, r) = try_shortcut(&a).unwrap();
        assert!((q[(0, 0)] - Complex::new(0.0, 1.0)).norm() < 1e-12);
        assert!((r[(0, 0)] - Complex::new(3.0, 0.0)).norm() < 1e-12);
        assert!((q[(1, 1)] - Complex::new(-1.0, 0.0)).norm() < 1e-12);
        assert!((r[(1, 1)] - Complex::new(2.0, 0.0)).norm() < 1e-12);
    }
}
