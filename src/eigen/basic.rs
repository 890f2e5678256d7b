//! Unshifted QR iteration.

use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex;

use crate::error::EigenError;
use crate::matrix::DenseMatrix;
use crate::qr::{factorize, QrMethod};
use crate::traits::LinalgScalar;

use super::{Eigen, IterationStatus};

/// Eigen-decomposition by unshifted QR iteration.
///
/// Repeats `A_k = Q R`, `A_{k+1} = R Q` with the selected factorization
/// backend, accumulating `Q_total`, until the Frobenius distance between
/// consecutive iterates drops below `tol` or `max_iter` steps have run.
/// Eigenvalues are read off the final diagonal; eigenvectors are the
/// columns of `Q_total`.
///
/// Assumes the input is diagonalizable by an orthogonal similarity with
/// all-real eigenvalues (e.g. symmetric matrices); then `Q_total`'s
/// columns are eigenvectors. For non-normal input they are Schur vectors
/// (only the leading column is an eigenvector), and input with
/// complex-conjugate eigenvalue pairs never meets the tolerance — the run
/// exhausts its budget and reports
/// [`IterationStatus::MaxIterExceeded`](super::IterationStatus) with the
/// best estimate. Use [`eigen_wilkinson`](super::eigen_wilkinson) or
/// [`eigen_francis`](super::eigen_francis) for such matrices.
///
/// # Errors
///
/// Shape errors for empty/rectangular input; a rank-deficient iterate can
/// surface the backend's [`EigenError::DegenerateColumn`].
///
/// # Examples
///
/// ```
/// use spectralis::{eigen_basic, DenseMatrix, QrMethod};
///
/// let a = DenseMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
/// let eig = eigen_basic(&a, QrMethod::Householder, 1e-10, 50).unwrap();
/// let mut re: Vec<f64> = eig.values.iter().map(|l| l.re).collect();
/// re.sort_by(|x, y| x.partial_cmp(y).unwrap());
/// assert!((re[0] - 2.0).abs() < 1e-6);
/// assert!((re[1] - 5.0).abs() < 1e-6);
/// ```
pub fn eigen_basic<S: LinalgScalar>(
    a: &DenseMatrix<S>,
    method: QrMethod,
    tol: S::Real,
    max_iter: usize,
) -> Result<Eigen<S::Real>, EigenError> {
    let n = a.square_dim()?;

    let mut ak = a.clone();
    let mut q_total = DenseMatrix::<S>::eye(n);
    let mut history = vec![ak.to_complex()];
    let mut status = IterationStatus::MaxIterExceeded;
    let mut iterations = 0;

    for _ in 0..max_iter {
        let (q, r) = factorize(&ak, method)?;
        let next = &r * &q;
        q_total = &q_total * &q;
        history.push(next.to_complex());
        iterations += 1;

        let dist = (&next - &ak).norm_fro();
        ak = next;
        if dist < tol {
            status = IterationStatus::Converged;
            break;
        }
    }

    let values: Vec<Complex<S::Real>> = (0..n).map(|i| ak[(i, i)].to_complex()).collect();
    Ok(Eigen {
        values,
        vectors: q_total.to_complex(),
        status,
        iterations,
        history,
    })
}
