//! Implicit double-shift (Francis) QR iteration with bulge chasing.

use alloc::vec;

use num_traits::{Float, Zero};

use crate::error::EigenError;
use crate::hessenberg::hessenberg;
use crate::matrix::DenseMatrix;
use crate::traits::FloatScalar;

use super::schur::extract_eigenpairs;
use super::{Eigen, IterationStatus};

/// Eigen-decomposition by Francis double-shift QR iteration.
///
/// Works entirely in real arithmetic: the two (possibly conjugate) roots
/// of the trailing 2x2 block enter only through their sum and product, so
/// each outer step applies the combined effect of both shifts as a bulge
/// chased down the Hessenberg subdiagonal by 3-element reflectors, closed
/// out by a final 2x2 rotation. Deflation peels one row off the active
/// window when the last subdiagonal entry is negligible, or two rows when
/// the one above it is (a converged 2x2 block — real or conjugate pair).
/// The run ends when the window is down to 2x2 or the budget is
/// exhausted; eigenpairs come from the Schur extractor.
///
/// Complex input has no use for a double shift designed to avoid complex
/// arithmetic — use [`eigen_wilkinson`](super::eigen_wilkinson) there.
///
/// # Errors
///
/// Shape errors for empty/rectangular input.
///
/// # Examples
///
/// ```
/// use spectralis::{eigen_francis, DenseMatrix};
///
/// let a = DenseMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
/// let eig = eigen_francis(&a, 1e-10, 100).unwrap();
/// let mut re: Vec<f64> = eig.values.iter().map(|l| l.re).collect();
/// re.sort_by(|x, y| x.partial_cmp(y).unwrap());
/// assert!((re[0] - 2.0).abs() < 1e-8);
/// assert!((re[1] - 5.0).abs() < 1e-8);
/// ```
pub fn eigen_francis<R: FloatScalar>(
    a: &DenseMatrix<R>,
    tol: R,
    max_iter: usize,
) -> Result<Eigen<R>, EigenError> {
    let n = a.square_dim()?;

    let (mut h, mut q_total) = hessenberg(a)?;
    let mut history = vec![a.to_complex()];

    let mut p = n;
    let mut iterations = 0;
    let mut status = IterationStatus::Converged;

    while p > 2 {
        // Single-row deflation: the last subdiagonal entry of the window
        if h[(p - 1, p - 2)].abs() <= tol * (h[(p - 2, p - 2)].abs() + h[(p - 1, p - 1)].abs()) {
            h[(p - 1, p - 2)] = R::zero();
            p -= 1;
            continue;
        }
        // Double-row deflation: a converged trailing 2x2 block
        if h[(p - 2, p - 3)].abs() <= tol * (h[(p - 3, p - 3)].abs() + h[(p - 2, p - 2)].abs()) {
            h[(p - 2, p - 3)] = R::zero();
            p -= 2;
            continue;
        }

        if iterations >= max_iter {
            status = IterationStatus::MaxIterExceeded;
            break;
        }
        iterations += 1;

        francis_step(&mut h, &mut q_total, p);
        history.push(h.to_complex());
    }

    // A residual 2x2 window may still separate into two real eigenvalues
    if p == 2 && h[(1, 0)].abs() <= tol * (h[(0, 0)].abs() + h[(1, 1)].abs()) {
        h[(1, 0)] = R::zero();
    }

    let (values, vectors) = extract_eigenpairs(&h.to_complex(), &q_total.to_complex(), tol);
    Ok(Eigen {
        values,
        vectors,
        status,
        iterations,
        history,
    })
}

/// One implicit double-shift sweep over the active `p x p` window.
///
/// The shift pair (s, t) = (trace, determinant) of the trailing 2x2 block
/// determines the first column of `H^2 - s H + t I`; a 3-element reflector
/// aligned with that column introduces the bulge, and each subsequent
/// reflector pushes it one row down the subdiagonal.
fn francis_step<R: FloatScalar>(h: &mut DenseMatrix<R>, q: &mut DenseMatrix<R>, p: usize) {
    let n = h.nrows();

    let s = h[(p - 2, p - 2)] + h[(p - 1, p - 1)];
    let t = h[(p - 2, p - 2)] * h[(p - 1, p - 1)] - h[(p - 2, p - 1)] * h[(p - 1, p - 2)];

    let mut x = h[(0, 0)] * h[(0, 0)] + h[(0, 1)] * h[(1, 0)] - s * h[(0, 0)] + t;
    let mut y = h[(1, 0)] * (h[(0, 0)] + h[(1, 1)] - s);
    let mut z = h[(1, 0)] * h[(2, 1)];

    for k in 0..(p - 2) {
        let (v1, v2, tau) = householder3(x, y, z);

        // Left: rows k..k+2, from one column left of the bulge onward
        let col_start = k.saturating_sub(1);
        for j in col_start..n {
            let dot = tau * (h[(k, j)] + v1 * h[(k + 1, j)] + v2 * h[(k + 2, j)]);
            h[(k, j)] = h[(k, j)] - dot;
            h[(k + 1, j)] = h[(k + 1, j)] - dot * v1;
            h[(k + 2, j)] = h[(k + 2, j)] - dot * v2;
        }
        // The reflector was built to annihilate the bulge in column k-1;
        // store the exact zeros
        if k > 0 {
            h[(k + 1, k - 1)] = R::zero();
            h[(k + 2, k - 1)] = R::zero();
        }

        // Right: columns k..k+2, rows above the bulge only
        let row_end = (k + 4).min(p);
        for i in 0..row_end {
            let dot = tau * (h[(i, k)] + v1 * h[(i, k + 1)] + v2 * h[(i, k + 2)]);
            h[(i, k)] = h[(i, k)] - dot;
            h[(i, k + 1)] = h[(i, k + 1)] - dot * v1;
            h[(i, k + 2)] = h[(i, k + 2)] - dot * v2;
        }

        // Accumulate the (symmetric) reflector into Q
        for i in 0..n {
            let dot = tau * (q[(i, k)] + v1 * q[(i, k + 1)] + v2 * q[(i, k + 2)]);
            q[(i, k)] = q[(i, k)] - dot;
            q[(i, k + 1)] = q[(i, k + 1)] - dot * v1;
            q[(i, k + 2)] = q[(i, k + 2)] - dot * v2;
        }

        // Pick the bulge back up from the refreshed subdiagonal
        x = h[(k + 1, k)];
        y = h[(k + 2, k)];
        z = if k + 3 < p { h[(k + 3, k)] } else { R::zero() };
    }

    // Final 2x2 rotation in the (p-2, p-1) plane clears the last bulge
    // entry at h[p-1, p-3]
    let (c, s_rot) = givens_pair(x, y);
    for j in (p - 3)..n {
        let hx = h[(p - 2, j)];
        let hy = h[(p - 1, j)];
        h[(p - 2, j)] = c * hx + s_rot * hy;
        h[(p - 1, j)] = c * hy - s_rot * hx;
    }
    h[(p - 1, p - 3)] = R::zero();
    for i in 0..p {
        let hx = h[(i, p - 2)];
        let hy = h[(i, p - 1)];
        h[(i, p - 2)] = c * hx + s_rot * hy;
        h[(i, p - 1)] = c * hy - s_rot * hx;
    }
    for i in 0..n {
        let qx = q[(i, p - 2)];
        let qy = q[(i, p - 1)];
        q[(i, p - 2)] = c * qx + s_rot * qy;
        q[(i, p - 1)] = c * qy - s_rot * qx;
    }
}

/// 3-element Householder reflector for (x, y, z), leading component
/// normalized to 1: returns (v1, v2, tau). A negligible input yields
/// tau = 0, the identity.
fn householder3<R: FloatScalar>(x: R, y: R, z: R) -> (R, R, R) {
    let norm = (x * x + y * y + z * z).sqrt();
    if norm <= R::epsilon() {
        return (R::zero(), R::zero(), R::zero());
    }
    let sign = if x >= R::zero() { R::one() } else { R::zero() - R::one() };
    let u0 = x + sign * norm;
    let v1 = y / u0;
    let v2 = z / u0;
    let two = R::one() + R::one();
    let tau = two / (R::one() + v1 * v1 + v2 * v2);
    (v1, v2, tau)
}

/// Stable cosine/sine pair of the rotation zeroing `b` against `a`.
fn givens_pair<R: FloatScalar>(a: R, b: R) -> (R, R) {
    if b == R::zero() {
        (R::one(), R::zero())
    } else if b.abs() > a.abs() {
        let t = a / b;
        let s = R::one() / (R::one() + t * t).sqrt();
        (s * t, s)
    } else {
        let t = b / a;
        let c = R::one() / (R::one() + t * t).sqrt();
        (c, c * t)
    }
}
