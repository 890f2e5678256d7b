//! Single-shift QR iteration with the Wilkinson shift.

use alloc::vec;

use num_complex::Complex;
use num_traits::{One, Zero};

use crate::error::EigenError;
use crate::hessenberg::hessenberg;
use crate::matrix::DenseMatrix;
use crate::qr::{factorize, QrMethod};
use crate::traits::{FloatScalar, LinalgScalar};

use super::schur::{block_eigenvalues, extract_eigenpairs};
use super::{Eigen, IterationStatus};

/// Eigen-decomposition by Wilkinson-shifted QR iteration.
///
/// Reduces the input to upper Hessenberg form, then iterates on the
/// leading `m x m` active submatrix in complex arithmetic (the shift —
/// the eigenvalue of the trailing 2x2 block closest to its bottom-right
/// entry — may be non-real even for real input): factor `H - mu I`,
/// recombine as `R Q + mu I`, and accumulate the identity-embedded step
/// transform. The trailing row deflates once
/// `|H[m-1, m-2]| <= tol * (|H[m-2, m-2]| + |H[m-1, m-1]|)`, shrinking
/// `m`; the run ends when `m <= 1` or the budget is exhausted. Converged
/// output can retain 2x2 blocks for conjugate pairs, so eigenpairs are
/// recovered by the Schur extractor.
///
/// The shifted factorizations use the Householder backend. A shift that
/// lands exactly on an eigenvalue makes the shifted matrix singular; the
/// iterator treats the backend's degenerate-column report as a cue to
/// nudge the shift and refactor rather than fail.
///
/// # Errors
///
/// Shape errors for empty/rectangular input.
///
/// # Examples
///
/// ```
/// use spectralis::{eigen_wilkinson, DenseMatrix};
///
/// // Rotation-like block: eigenvalues +/- i
/// let a = DenseMatrix::from_rows(2, 2, &[0.0_f64, -1.0, 1.0, 0.0]);
/// let eig = eigen_wilkinson(&a, 1e-10, 100).unwrap();
/// assert!(eig.values[0].re.abs() < 1e-8);
/// assert!((eig.values[0].im.abs() - 1.0).abs() < 1e-8);
/// ```
pub fn eigen_wilkinson<S: LinalgScalar>(
    a: &DenseMatrix<S>,
    tol: S::Real,
    max_iter: usize,
) -> Result<Eigen<S::Real>, EigenError> {
    let n = a.square_dim()?;

    let (h0, q0) = hessenberg(a)?;
    let mut h = h0.to_complex();
    let mut q_total = q0.to_complex();
    let mut history = vec![a.to_complex()];

    let mut m = n;
    let mut iterations = 0;
    let status;

    loop {
        // Peel off every already-converged trailing row
        while m > 1 {
            let sub = h[(m - 1, m - 2)].norm();
            let scale = h[(m - 2, m - 2)].norm() + h[(m - 1, m - 1)].norm();
            if sub <= tol * scale {
                h[(m - 1, m - 2)] = Complex::zero();
                m -= 1;
            } else {
                break;
            }
        }
        if m <= 1 {
            status = IterationStatus::Converged;
            break;
        }
        if iterations >= max_iter {
            status = IterationStatus::MaxIterExceeded;
            break;
        }
        iterations += 1;

        let mut mu = wilkinson_shift(
            h[(m - 2, m - 2)],
            h[(m - 2, m - 1)],
            h[(m - 1, m - 2)],
            h[(m - 1, m - 1)],
        );

        let (q, r) = loop {
            let mut shifted = h.leading_minor(m);
            for i in 0..m {
                shifted[(i, i)] = shifted[(i, i)] - mu;
            }
            match factorize(&shifted, QrMethod::Householder) {
                Ok(qr) => break qr,
                // The shift landed exactly on an eigenvalue and the
                // shifted matrix is singular. Nudge the shift off the
                // singularity and refactor; convergence is unaffected.
                Err(EigenError::DegenerateColumn { .. }) => {
                    let nudge = (tol + S::eps()) * (<S::Real as One>::one() + mu.norm());
                    mu = mu + Complex::new(nudge, <S::Real as Zero>::zero());
                }
                Err(e) => return Err(e),
            }
        };
        let mut next = &r * &q;
        for i in 0..m {
            next[(i, i)] = next[(i, i)] + mu;
        }
        h.set_leading_minor(&next);
        q_total = &q_total * &q.embed_leading(n);
        history.push(h.clone());
    }

    let (values, vectors) = extract_eigenpairs(&h, &q_total, tol);
    Ok(Eigen {
        values,
        vectors,
        status,
        iterations,
        history,
    })
}

/// The root of the trailing 2x2 characteristic quadratic closest to the
/// bottom-right entry.
fn wilkinson_shift<R: FloatScalar>(
    a: Complex<R>,
    b: Complex<R>,
    c: Complex<R>,
    d: Complex<R>,
) -> Complex<R> {
    let (r1, r2) = block_eigenvalues(a, b, c, d);
    if (r1 - d).norm() <= (r2 - d).norm() {
        r1
    } else {
        r2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    type C = Complex<f64>;

    const TOL: f64 = 1e-10;

    fn sorted_re(eig: &Eigen<f64>) -> Vec<f64> {
        let mut re: Vec<f64> = eig.values.iter().map(|l| l.re).collect();
        re.sort_by(|x, y| x.partial_cmp(y).unwrap());
        re
    }

    #[test]
    fn shift_picks_nearest_root() {
        let mu = wilkinson_shift(
            C::new(4.0, 0.0),
            C::new(1.0, 0.0),
            C::new(2.0, 0.0),
            C::new(3.0, 0.0),
        );
        // Roots are 5 and 2; 2 is closer to d = 3
        assert!((mu - C::new(2.0, 0.0)).norm() < TOL);
    }

    #[test]
    fn real_eigenvalues_3x3() {
        // Companion matrix of (x-1)(x-2)(x-3)
        let a = DenseMatrix::from_rows(
            3,
            3,
            &[0.0, 0.0, 6.0, 1.0, 0.0, -11.0, 0.0, 1.0, 6.0],
        );
        let eig = eigen_wilkinson(&a, TOL, 300).unwrap();
        assert!(eig.is_converged());
        let re = sorted_re(&eig);
        assert!((re[0] - 1.0).abs() < 1e-7, "{:?}", re);
        assert!((re[1] - 2.0).abs() < 1e-7, "{:?}", re);
        assert!((re[2] - 3.0).abs() < 1e-7, "{:?}", re);
        for l in &eig.values {
            assert!(l.im.abs() < 1e-7);
        }
    }

    #[test]
    fn conjugate_pair_2x2() {
        let a: DenseMatrix<f64> = DenseMatrix::from_rows(2, 2, &[0.0, -1.0, 1.0, 0.0]);
        let eig = eigen_wilkinson(&a, TOL, 100).unwrap();
        assert!((eig.values[0].im.abs() - 1.0).abs() < 1e-8);
        assert!((eig.values[1].im.abs() - 1.0).abs() < 1e-8);
        assert!(eig.values[0].re.abs() < 1e-8);
        // A v = lambda v for both eigenpairs
        let ac = a.to_complex();
        for k in 0..2 {
            for row in 0..2 {
                let mut av = C::new(0.0, 0.0);
                for j in 0..2 {
                    av += ac[(row, j)] * eig.vectors[(j, k)];
                }
                assert!((av - eig.values[k] * eig.vectors[(row, k)]).norm() < 1e-8);
            }
        }
    }

    #[test]
    fn symmetric_eigenpairs() {
        let a: DenseMatrix<f64> = DenseMatrix::from_rows(3, 3, &[2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 4.0]);
        let eig = eigen_wilkinson(&a, TOL, 300).unwrap();
        assert!(eig.is_converged());
        let trace: f64 = eig.values.iter().map(|l| l.re).sum();
        assert!((trace - 9.0).abs() < 1e-7);

        let ac = a.to_complex();
        for k in 0..3 {
            for row in 0..3 {
                let mut av = C::new(0.0, 0.0);
                for j in 0..3 {
                    av += ac[(row, j)] * eig.vectors[(j, k)];
                }
                assert!(
                    (av - eig.values[k] * eig.vectors[(row, k)]).norm() < 1e-6,
                    "eigenpair {} violated",
                    k
                );
            }
        }
    }

    #[test]
    fn deflation_is_monotone() {
        let a = DenseMatrix::from_rows(
            4,
            4,
            &[
                4.0, 1.0, -2.0, 2.0, 1.0, 2.0, 0.0, 1.0, -2.0, 0.0, 3.0, -2.0, 2.0, 1.0, -2.0,
                1.0,
            ],
        );
        let eig = eigen_wilkinson(&a, TOL, 400).unwrap();
        assert!(eig.is_converged());
        // Once a subdiagonal entry deflates to exact zero it stays zero in
        // every later snapshot
        let mut seen_zero = [false; 3];
        let mut ever_deflated = false;
        for snap in &eig.history[1..] {
            for i in 1..4 {
                let is_zero = snap[(i, i - 1)].norm() == 0.0;
                if seen_zero[i - 1] {
                    assert!(is_zero, "deflated entry ({}, {}) came back", i, i - 1);
                }
                if is_zero {
                    seen_zero[i - 1] = true;
                    ever_deflated = true;
                }
            }
        }
        assert!(ever_deflated, "expected at least one deflation in history");
    }

    #[test]
    fn complex_input() {
        let a = DenseMatrix::from_rows(
            2,
            2,
            &[
                C::new(1.0, 1.0),
                C::new(2.0, 0.0),
                C::new(0.0, 0.0),
                C::new(3.0, -1.0),
            ],
        );
        let eig = eigen_wilkinson(&a, TOL, 100).unwrap();
        let mut vals = eig.values.clone();
        vals.sort_by(|x, y| x.re.partial_cmp(&y.re).unwrap());
        assert!((vals[0] - C::new(1.0, 1.0)).norm() < 1e-8);
        assert!((vals[1] - C::new(3.0, -1.0)).norm() < 1e-8);
    }
}
