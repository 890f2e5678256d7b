//! Householder-reflection factorization backend.

use num_traits::Zero;

use crate::error::EigenError;
use crate::matrix::DenseMatrix;
use crate::traits::LinalgScalar;

/// Factor a square matrix with Householder reflections.
///
/// Runs the packed in-place sweep, then materializes the explicit `(Q, R)`
/// pair the iteration engine consumes.
pub(crate) fn factor<S: LinalgScalar>(
    a: &DenseMatrix<S>,
) -> Result<(DenseMatrix<S>, DenseMatrix<S>), EigenError> {
    let n = a.nrows();
    let mut qr = a.clone();
    let mut tau = alloc::vec![S::zero(); n];
    sweep(&mut qr, &mut tau)?;
    Ok((materialize_q(&qr, &tau), materialize_r(&qr)))
}

/// In-place reflector sweep.
///
/// On return `qr` holds the packed factorization: R on and above the
/// diagonal, the Householder vectors (scaled by `1/v0`, leading 1
/// implicit) below it, with the reflector scale factors in `tau`.
///
/// For each column the reflector is built from
/// `sigma = (x0 / |x0|) * ||x||`, so `v0 = x0 + sigma` adds magnitudes and
/// never cancels; for real scalars this is the familiar
/// `u = x + sign(x0) * ||x|| * e1`.
fn sweep<S: LinalgScalar>(qr: &mut DenseMatrix<S>, tau: &mut [S]) -> Result<(), EigenError> {
    let n = qr.nrows();

    for col in 0..n {
        let norm_sq = {
            let mut sum = <S::Real as Zero>::zero();
            for &v in qr.col_slice(col, col) {
                sum = sum + v.modulus_sq();
            }
            sum
        };
        if norm_sq == <S::Real as Zero>::zero() {
            return Err(EigenError::DegenerateColumn { col });
        }

        let norm = num_traits::Float::sqrt(norm_sq);
        let x0 = qr[(col, col)];
        let alpha = x0.modulus();
        let sigma = if alpha < S::eps() {
            S::from_real(norm)
        } else {
            S::from_real(norm) * (x0 / S::from_real(alpha))
        };

        let v0 = x0 + sigma;
        let tau_val = v0 / sigma;
        tau[col] = tau_val;

        // Scale the sub-diagonal entries by 1/v0 for storage
        for x in qr.col_slice_mut(col, col + 1).iter_mut() {
            *x = *x / v0;
        }

        // Apply H = I - tau v v^H to the trailing columns,
        // v = [1, qr[col+1, col], ..., qr[n-1, col]]
        for j in (col + 1)..n {
            let mut dot = qr[(col, j)];
            for i in (col + 1)..n {
                dot = dot + qr[(i, col)].conj() * qr[(i, j)];
            }
            dot = dot * tau_val;

            qr[(col, j)] = qr[(col, j)] - dot;
            for i in (col + 1)..n {
                let vi = qr[(i, col)];
                qr[(i, j)] = qr[(i, j)] - dot * vi;
            }
        }

        // The R diagonal entry
        qr[(col, col)] = S::zero() - sigma;
    }

    Ok(())
}

/// Apply the stored reflections in reverse to the identity, yielding Q.
fn materialize_q<S: LinalgScalar>(qr: &DenseMatrix<S>, tau: &[S]) -> DenseMatrix<S> {
    let n = qr.nrows();
    let mut q = DenseMatrix::<S>::eye(n);

    for col in (0..n).rev() {
        let tau_val = tau[col];
        for j in col..n {
            let mut dot = q[(col, j)];
            for i in (col + 1)..n {
                dot = dot + qr[(i, col)].conj() * q[(i, j)];
            }
            dot = dot * tau_val;

            q[(col, j)] = q[(col, j)] - dot;
            for i in (col + 1)..n {
                q[(i, j)] = q[(i, j)] - dot * qr[(i, col)];
            }
        }
    }

    q
}

/// Upper triangle of the packed factorization.
fn materialize_r<S: LinalgScalar>(qr: &DenseMatrix<S>) -> DenseMatrix<S> {
    let n = qr.nrows();
    let mut r = DenseMatrix::<S>::zeros(n, n);
    for j in 0..n {
        for i in 0..=j {
            r[(i, j)] = qr[(i, j)];
        }
    }
    r
}
