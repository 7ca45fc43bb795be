//! Native scalar kernels for special mathematical functions
//!
//! Everything in this module works on plain `f64` (and [`Complex128`] where a
//! routine is defined over the complex plane). The kernels are consumed by
//! [`NativeBackend`](crate::kernels::NativeBackend) through the
//! [`ScalarKernels`](crate::kernels::ScalarKernels) and
//! [`RoutineLibrary`](crate::routines::RoutineLibrary) collaborator traits.
//!
//! # Functions Provided
//!
//! ## Error Functions
//! - [`erf_scalar`], [`erfc_scalar`] - Error function and its complement
//! - [`ndtri_scalar`] - Inverse of the standard normal CDF
//!
//! ## Gamma Family
//! - [`gamma_scalar`], [`gammaln_scalar`] - Γ(x) and ln|Γ(x)|
//! - [`psi_scalar`] - Digamma ψ(x)
//! - [`gammainc_scalar`], [`gammaincc_scalar`] - Regularized incomplete gamma
//! - [`gammaincinv_scalar`], [`gammainccinv_scalar`] - Their inverses in `x`
//! - [`zeta_scalar`] - Hurwitz zeta ζ(s, q)
//! - [`hyp1f1_scalar`] - Confluent hypergeometric ₁F₁(a; b; x)
//!
//! ## Bessel Functions
//! - [`besseljy`], [`besselik`] - J/Y and I/K pairs of real order with derivatives
//! - [`jv_scalar`], [`yv_scalar`], [`iv_scalar`], [`kv_scalar`] - Any real order
//! - [`hankel1_scalar`], [`hankel2_scalar`] - Hankel functions
//!
//! ## Sequences and Tables
//! - [`sphj`], [`sphy`], [`sphi`], [`sphk`] - Spherical Bessel sequences
//! - [`rctj`], [`rcty`] - Riccati-Bessel sequences
//! - [`lpn`], [`clpn`], [`lqnb`] - Legendre P and Q sequences
//! - [`lpmn`], [`lqmn`] - Associated Legendre tables
//! - [`bernob`], [`eulerb`] - Bernoulli and Euler numbers
//! - [`lamv`] - Lambda functions Λ_v(x)
//!
//! ## Zeros
//! - [`jyzo`] - Zeros of Jn, Jn', Yn, Yn'
//! - [`jdzo`] - Zeros of Jn and Jn' across orders, sorted
//!
//! # Algorithm Sources
//!
//! - Cody/Laplace continued fraction for erf, Acklam + Halley for ndtri
//! - Lanczos approximation (g=7, n=9) for gamma
//! - Euler-Maclaurin summation for the Hurwitz zeta function
//! - Temme's method with Steed's continued fraction for Bessel functions
//! - Miller's backward recurrence for spherical Bessel sequences

mod bessel;
mod error_functions;
mod gamma_functions;
mod hypergeometric;
mod lambda;
mod legendre;
mod numbers;
mod spherical;
mod zeros;
mod zeta;

pub use bessel::*;
pub use error_functions::*;
pub use gamma_functions::*;
pub use hypergeometric::*;
pub use lambda::*;
pub use legendre::*;
pub use numbers::*;
pub use spherical::*;
pub use zeros::*;
pub use zeta::*;

#[cfg(doc)]
use crate::dtype::Complex128;

/// Machine epsilon for f64 convergence tests
pub const EPSILON_F64: f64 = f64::EPSILON;

/// Smallest value kept away from zero in continued fractions
pub const TINY: f64 = f64::MIN_POSITIVE / f64::EPSILON;

/// Iteration cap for series and continued fractions
pub const MAX_ITER: usize = 100_000;

/// Name reported in errors raised by the native kernels
pub const NATIVE: &str = "native";
