//! # spectralis
//!
//! Eigenvalues and eigenvectors of dense square matrices via the QR
//! algorithm, in pure Rust.
//!
//! The engine is built from interchangeable orthogonal-factorization
//! backends (classical and modified Gram-Schmidt, Householder
//! reflections, Givens rotations), a Householder reduction to upper
//! Hessenberg form, and three iteration strategies that converge a matrix
//! to (quasi-)triangular Schur form: unshifted QR iteration,
//! Wilkinson-shifted iteration, and implicit double-shift (Francis)
//! bulge chasing. Eigenpairs — complex in general, even for real input —
//! are read back from the converged form.
//!
//! ## Quick start
//!
//! ```
//! use spectralis::{eigen_francis, DenseMatrix};
//!
//! // Eigenvalues of [[4, 1], [2, 3]] are 5 and 2
//! let a = DenseMatrix::from_rows(2, 2, &[4.0_f64, 1.0, 2.0, 3.0]);
//! let eig = eigen_francis(&a, 1e-10, 100).unwrap();
//!
//! let mut re: Vec<f64> = eig.values.iter().map(|l| l.re).collect();
//! re.sort_by(|x, y| x.partial_cmp(y).unwrap());
//! assert!((re[0] - 2.0).abs() < 1e-8);
//! assert!((re[1] - 5.0).abs() < 1e-8);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`DenseMatrix`]: heap-allocated, runtime-sized,
//!   column-major dense matrix over real or complex scalars, with
//!   arithmetic, norms, and the block helpers the engine needs.
//!   [`DenseVector`] for the power method.
//!
//! - [`qr`] — the factorization backends behind [`factorize`], selected
//!   by the [`QrMethod`] enum, with a special-case classifier that
//!   short-circuits zero/identity/unitary/diagonal/triangular input.
//!
//! - [`hessenberg`](mod@hessenberg) — Householder similarity reduction to
//!   upper Hessenberg form, the preprocessing step of both shifted
//!   iterators.
//!
//! - [`eigen`] — the three iterators and their shared result type
//!   [`Eigen`]: eigenpairs, an [`IterationStatus`] (budget exhaustion is
//!   a status, not an error), and the per-iteration snapshot history for
//!   external convergence visualization.
//!
//! - [`power`] — power iteration for the dominant eigenpair.
//!
//! - [`io`] — whitespace-separated matrix text files (`std` only).
//!
//! ## Real and complex scalars
//!
//! Every backend and the basic/Wilkinson iterators are generic over
//! [`LinalgScalar`], which covers `f32`/`f64` and `Complex<f32>`/
//! `Complex<f64>`; transposes become conjugate transposes and inner
//! products become Hermitian automatically. The Francis iterator is
//! real-only by construction — the double shift exists to avoid complex
//! arithmetic — and the Wilkinson iterator promotes real input to complex
//! internally because its shift can be a non-real root.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | File I/O, `std::error::Error` impls, system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no_std |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod eigen;
pub mod error;
pub mod hessenberg;
#[cfg(feature = "std")]
pub mod io;
pub mod matrix;
pub mod power;
pub mod qr;
pub mod traits;

pub use eigen::{eigen_basic, eigen_francis, eigen_wilkinson, Eigen, IterationStatus};
pub use error::EigenError;
pub use hessenberg::hessenberg;
pub use matrix::vector::DenseVector;
pub use matrix::DenseMatrix;
pub use power::power_method;
pub use qr::{factorize, QrMethod};
pub use traits::{FloatScalar, LinalgScalar, Scalar};

pub use num_complex::Complex;
