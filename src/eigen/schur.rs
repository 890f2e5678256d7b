//! Eigenpair extraction from a converged (quasi-)triangular Schur form.

use alloc::vec::Vec;

use num_complex::Complex;
use num_traits::Float;

use crate::matrix::DenseMatrix;
use crate::traits::FloatScalar;

/// Walk the diagonal of a (quasi-)triangular `T`, emitting one eigenpair
/// per 1x1 block and two per 2x2 block, in traversal order.
///
/// A subdiagonal entry with modulus above `tol` marks a 2x2 block: its two
/// (possibly conjugate) eigenvalues come from the closed-form quadratic,
/// and each local eigenvector is mapped into global coordinates through
/// the block's two columns of `q`. A 1x1 block contributes `T[i, i]` with
/// the matching column of `q`. Eigenvectors are unit norm.
pub(crate) fn extract_eigenpairs<R: FloatScalar>(
    t: &DenseMatrix<Complex<R>>,
    q: &DenseMatrix<Complex<R>>,
    tol: R,
) -> (Vec<Complex<R>>, DenseMatrix<Complex<R>>) {
    let n = t.nrows();
    let mut values = Vec::with_capacity(n);
    let mut vectors = DenseMatrix::<Complex<R>>::zeros(n, n);

    let mut i = 0;
    while i < n {
        if i + 1 < n && t[(i + 1, i)].norm() > tol {
            let (l1, l2) = block_eigenvalues(t[(i, i)], t[(i, i + 1)], t[(i + 1, i)], t[(i + 1, i + 1)]);
            write_block_vector(t, q, &mut vectors, i, l1, i);
            write_block_vector(t, q, &mut vectors, i, l2, i + 1);
            values.push(l1);
            values.push(l2);
            i += 2;
        } else {
            values.push(t[(i, i)]);
            for row in 0..n {
                vectors[(row, i)] = q[(row, i)];
            }
            i += 1;
        }
    }

    (values, vectors)
}

/// Both roots of the 2x2 characteristic quadratic
/// `l^2 - (a + d) l + (ad - bc)`.
pub(crate) fn block_eigenvalues<R: FloatScalar>(
    a: Complex<R>,
    b: Complex<R>,
    c: Complex<R>,
    d: Complex<R>,
) -> (Complex<R>, Complex<R>) {
    let half = R::one() / (R::one() + R::one());
    let tr = (a + d) * Complex::new(half, R::zero());
    let det = a * d - b * c;
    let disc = (tr * tr - det).sqrt();
    (tr + disc, tr - disc)
}

/// Local eigenvector of the 2x2 block for eigenvalue `lam`, pushed through
/// columns `i`, `i+1` of `q` into the global column `out_col`.
fn write_block_vector<R: FloatScalar>(
    t: &DenseMatrix<Complex<R>>,
    q: &DenseMatrix<Complex<R>>,
    vectors: &mut DenseMatrix<Complex<R>>,
    i: usize,
    lam: Complex<R>,
    out_col: usize,
) {
    let n = t.nrows();
    let a = t[(i, i)];
    let b = t[(i, i + 1)];
    let c = t[(i + 1, i)];

    // (A - lam I) v = 0: the row with the larger off-diagonal modulus
    // gives the better-conditioned local vector.
    let (v0, v1) = if c.norm() >= b.norm() {
        (lam - t[(i + 1, i + 1)], c)
    } else {
        (b, lam - a)
    };
    let scale = (v0.norm_sqr() + v1.norm_sqr()).sqrt();
    let inv = Complex::new(R::one() / scale, R::zero());
    let (v0, v1) = (v0 * inv, v1 * inv);

    for row in 0..n {
        vectors[(row, out_col)] = q[(row, i)] * v0 + q[(row, i + 1)] * v1;
    }
}
