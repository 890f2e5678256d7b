//! Householder reduction to upper Hessenberg form.

use alloc::vec::Vec;

use num_traits::{Float, Zero};

use crate::error::EigenError;
use crate::matrix::DenseMatrix;
use crate::traits::LinalgScalar;

/// Reduce a square matrix to upper Hessenberg form by a sequence of
/// Householder similarity transforms: `H = Q^H A Q` with all entries below
/// the first subdiagonal zero.
///
/// Returns `(H, Q)`; the input is not mutated. For k = 0..n-3 a reflector
/// built from the sub-column below the subdiagonal is applied from the
/// left *and* the right (a similarity, not a one-sided factorization) and
/// accumulated into Q. Sub-columns that are already numerically zero are
/// skipped.
///
/// Both shifted iterators reduce to Hessenberg form first: it confines
/// fill-in to the subdiagonal and drops the per-iteration factorization
/// cost from cubic to quadratic.
///
/// # Errors
///
/// [`EigenError::Empty`] / [`EigenError::NotSquare`] for bad shapes.
///
/// # Examples
///
/// ```
/// use spectralis::{hessenberg, DenseMatrix};
///
/// let a = DenseMatrix::from_rows(3, 3, &[
///     4.0_f64, 1.0, -2.0,
///     1.0, 2.0, 0.0,
///     -2.0, 0.0, 3.0,
/// ]);
/// let (h, q) = hessenberg(&a).unwrap();
/// assert!(h[(2, 0)].abs() < 1e-12);
/// // Q^T A Q = H
/// let similar = &(&q.transpose() * &a) * &q;
/// assert!((&similar - &h).norm_fro() < 1e-10);
/// ```
pub fn hessenberg<S: LinalgScalar>(
    a: &DenseMatrix<S>,
) -> Result<(DenseMatrix<S>, DenseMatrix<S>), EigenError> {
    let n = a.square_dim()?;
    let mut h = a.clone();
    let mut q = DenseMatrix::<S>::eye(n);

    for k in 0..n.saturating_sub(2) {
        // Nothing below the subdiagonal to annihilate: this column is
        // already in Hessenberg form.
        let mut tail_sq = <S::Real as Zero>::zero();
        for &v in h.col_slice(k, k + 2) {
            tail_sq = tail_sq + v.modulus_sq();
        }
        if tail_sq <= S::eps() * S::eps() {
            continue;
        }

        let norm_sq = tail_sq + h[(k + 1, k)].modulus_sq();
        let norm = norm_sq.sqrt();
        let x0 = h[(k + 1, k)];
        let alpha = x0.modulus();
        let sigma = if alpha < S::eps() {
            S::from_real(norm)
        } else {
            S::from_real(norm) * (x0 / S::from_real(alpha))
        };

        let v0 = x0 + sigma;
        let tau = v0 / sigma;

        // v = [1, h[k+2, k]/v0, ..., h[n-1, k]/v0], spanning rows k+1..n
        let mut v: Vec<S> = Vec::with_capacity(n - k - 1);
        v.push(S::one());
        for i in (k + 2)..n {
            v.push(h[(i, k)] / v0);
        }

        // Left: H[k+1.., k+1..] = (I - tau v v^H) H[k+1.., k+1..];
        // column k is set explicitly below.
        for j in (k + 1)..n {
            let mut dot = S::zero();
            for (idx, i) in ((k + 1)..n).enumerate() {
                dot = dot + v[idx].conj() * h[(i, j)];
            }
            dot = dot * tau;
            for (idx, i) in ((k + 1)..n).enumerate() {
                h[(i, j)] = h[(i, j)] - dot * v[idx];
            }
        }

        // Right: H[.., k+1..] = H[.., k+1..] (I - tau v v^H)
        for i in 0..n {
            let mut dot = S::zero();
            for (idx, j) in ((k + 1)..n).enumerate() {
                dot = dot + h[(i, j)] * v[idx];
            }
            dot = dot * tau;
            for (idx, j) in ((k + 1)..n).enumerate() {
                h[(i, j)] = h[(i, j)] - dot * v[idx].conj();
            }
        }

        // Accumulate Q = Q (I - tau v v^H)
        for i in 0..n {
            let mut dot = S::zero();
            for (idx, j) in ((k + 1)..n).enumerate() {
                dot = dot + q[(i, j)] * v[idx];
            }
            dot = dot * tau;
            for (idx, j) in ((k + 1)..n).enumerate() {
                q[(i, j)] = q[(i, j)] - dot * v[idx].conj();
            }
        }

        // Column k collapses to the subdiagonal entry
        h[(k + 1, k)] = S::zero() - sigma;
        for i in (k + 2)..n {
            h[(i, k)] = S::zero();
        }
    }

    Ok((h, q))
}
