//! Power iteration for the dominant eigenpair.

use alloc::vec;

use num_traits::Zero;

use crate::error::EigenError;
use crate::matrix::vector::DenseVector;
use crate::matrix::DenseMatrix;
use crate::traits::LinalgScalar;

use crate::eigen::IterationStatus;

/// Dominant eigenpair by power iteration.
///
/// Repeatedly applies the matrix to a unit vector, renormalizing each
/// step, until successive iterates are within `tol` of each other or
/// `max_iter` steps have run; the eigenvalue is the Rayleigh quotient of
/// the final iterate. Converges when the dominant eigenvalue is separated
/// in magnitude and the start vector has a component along its
/// eigenvector; the start is the deterministic normalized all-ones
/// vector, so results are reproducible.
///
/// # Errors
///
/// Shape errors for empty/rectangular input; [`EigenError::ZeroVector`]
/// if an iterate lands exactly in the null space.
///
/// # Examples
///
/// ```
/// use spectralis::{power_method, DenseMatrix};
///
/// let a = DenseMatrix::from_rows(2, 2, &[2.0_f64, 0.0, 0.0, 0.5]);
/// let (lambda, v, _) = power_method(&a, 1e-12, 200).unwrap();
/// assert!((lambda - 2.0).abs() < 1e-8);
/// assert!((v[0].abs() - 1.0).abs() < 1e-6);
/// ```
pub fn power_method<S: LinalgScalar>(
    a: &DenseMatrix<S>,
    tol: S::Real,
    max_iter: usize,
) -> Result<(S, DenseVector<S>, IterationStatus), EigenError> {
    let n = a.square_dim()?;

    let mut b = DenseVector::from_vec(vec![S::one(); n]).normalize();
    let mut status = IterationStatus::MaxIterExceeded;

    for _ in 0..max_iter {
        let next = a.mul_vec(&b);
        let norm = next.norm();
        if norm == <S::Real as Zero>::zero() {
            return Err(EigenError::ZeroVector);
        }
        let next = next.scale(S::from_real(<S::Real as num_traits::One>::one() / norm));

        let mut diff_sq = <S::Real as Zero>::zero();
        for i in 0..n {
            diff_sq = diff_sq + (next[i] - b[i]).modulus_sq();
        }
        b = next;
        if num_traits::Float::sqrt(diff_sq) < tol {
            status = IterationStatus::Converged;
            break;
        }
    }

    // Rayleigh quotient: <b, A b> / <b, b>
    let ab = a.mul_vec(&b);
    let lambda = b.dot(&ab) / b.dot(&b);
    Ok((lambda, b, status))
}
