//! Classical and modified Gram-Schmidt factorization backends.

use num_traits::{One, Zero};

use crate::error::EigenError;
use crate::matrix::DenseMatrix;
use crate::traits::LinalgScalar;

use super::col_norm;

/// Classical Gram-Schmidt.
///
/// Column `j` of Q is the original column `a_j` minus its projections onto
/// the previously computed orthonormal columns, with every projection
/// coefficient `<q_i, a_j>` taken against the *original* column. R is
/// accumulated from those coefficients. The repeated reference to the
/// unmodified column is what makes this form lose orthogonality under
/// rounding for ill-conditioned input; that behavior is inherent to the
/// algorithm and deliberately not papered over.
pub(crate) fn classical<S: LinalgScalar>(
    a: &DenseMatrix<S>,
) -> Result<(DenseMatrix<S>, DenseMatrix<S>), EigenError> {
    let n = a.nrows();
    let mut q = DenseMatrix::<S>::zeros(n, n);
    let mut r = DenseMatrix::<S>::zeros(n, n);
    let mut u = alloc::vec![S::zero(); n];

    for j in 0..n {
        u.copy_from_slice(a.col_slice(j, 0));
        for i in 0..j {
            let qi = q.col_slice(i, 0);
            let aj = a.col_slice(j, 0);
            let mut coeff = S::zero();
            for k in 0..n {
                coeff = coeff + qi[k].conj() * aj[k];
            }
            r[(i, j)] = coeff;
            for k in 0..n {
                u[k] = u[k] - coeff * qi[k];
            }
        }

        let norm = col_norm(&u);
        if norm == <S::Real as Zero>::zero() {
            return Err(EigenError::DegenerateColumn { col: j });
        }
        r[(j, j)] = S::from_real(norm);
        let inv = S::from_real(<S::Real as One>::one() / norm);
        let qj = q.col_slice_mut(j, 0);
        for k in 0..n {
            qj[k] = u[k] * inv;
        }
    }

    Ok((q, r))
}

/// Modified Gram-Schmidt.
///
/// Normalizes the running column `i`, then immediately subtracts its
/// projection from every remaining column. Orthogonalizing against
/// already-updated vectors instead of the originals is the entire
/// stability improvement over the classical form, so the update order
/// must not be rearranged.
pub(crate) fn modified<S: LinalgScalar>(
    a: &DenseMatrix<S>,
) -> Result<(DenseMatrix<S>, DenseMatrix<S>), EigenError> {
    let n = a.nrows();
    let mut v = a.clone();
    let mut q = DenseMatrix::<S>::zeros(n, n);
    let mut r = DenseMatrix::<S>::zeros(n, n);

    for i in 0..n {
        let norm = col_norm(v.col_slice(i, 0));
        if norm == <S::Real as Zero>::zero() {
            return Err(EigenError::DegenerateColumn { col: i });
        }
        r[(i, i)] = S::from_real(norm);
        let inv = S::from_real(<S::Real as One>::one() / norm);
        {
            let vi = v.col_slice(i, 0);
            let qi = q.col_slice_mut(i, 0);
            for k in 0..n {
                qi[k] = vi[k] * inv;
            }
        }

        for j in (i + 1)..n {
            let qi = q.col_slice(i, 0);
            let mut coeff = S::zero();
            {
                let vj = v.col_slice(j, 0);
                for k in 0..n {
                    coeff = coeff + qi[k].conj() * vj[k];
                }
            }
            r[(i, j)] = coeff;
            let vj = v.col_slice_mut(j, 0);
            for k in 0..n {
                vj[k] = vj[k] - coeff * qi[k];
            }
        }
    }

    Ok((q, r))
}
