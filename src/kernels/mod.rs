//! Element-wise special-function kernels
//!
//! [`ScalarKernels`] is the collaborator the catalog calls for every
//! function it broadcasts element by element. Each method evaluates one
//! point; broadcasting is layered on top by
//! [`Vectorized`](crate::vectorize::Vectorized).
//!
//! [`NativeBackend`] provides the kernels from
//! [`algorithm::special`](crate::algorithm::special).

use crate::algorithm::special::{
    NATIVE, gamma_scalar, gammainccinv_scalar, gammaln_scalar, hankel1_scalar, hankel2_scalar,
    hyp1f1_scalar, iv_scalar, jv_scalar, kv_scalar, ndtri_scalar, psi_scalar, yv_scalar,
    zeta_scalar,
};
use crate::dtype::Complex128;
use crate::error::{Error, Result};

// ============================================================================
// Scalar Kernels Trait
// ============================================================================

/// Scalar special functions evaluated one point at a time
///
/// Implementations must be pure: the same arguments always produce the same
/// result, and calls may run concurrently from several threads.
///
/// Out-of-domain arguments yield NaN or infinity following the usual
/// conventions (poles give ±inf). Errors are reserved for requests the
/// backend cannot evaluate at all.
pub trait ScalarKernels: Send + Sync {
    /// Bessel function of the first kind J_v(x)
    fn jv(&self, v: f64, x: f64) -> Result<f64>;

    /// Bessel function of the second kind Y_v(x)
    fn yv(&self, v: f64, x: f64) -> Result<f64>;

    /// Modified Bessel function of the first kind I_v(x)
    fn iv(&self, v: f64, x: f64) -> Result<f64>;

    /// Modified Bessel function of the second kind K_v(x)
    fn kv(&self, v: f64, x: f64) -> Result<f64>;

    /// Hankel function of the first kind H1_v(x) = J_v(x) + i Y_v(x)
    fn hankel1(&self, v: f64, x: f64) -> Result<Complex128>;

    /// Hankel function of the second kind H2_v(x) = J_v(x) - i Y_v(x)
    fn hankel2(&self, v: f64, x: f64) -> Result<Complex128>;

    /// Inverse of the standard normal CDF
    fn ndtri(&self, p: f64) -> Result<f64>;

    /// Gamma function Γ(x)
    fn gamma(&self, x: f64) -> Result<f64>;

    /// ln|Γ(x)|
    fn gammaln(&self, x: f64) -> Result<f64>;

    /// Digamma function ψ(x)
    fn psi(&self, x: f64) -> Result<f64>;

    /// Hurwitz zeta function ζ(s, q)
    fn zeta(&self, s: f64, q: f64) -> Result<f64>;

    /// Confluent hypergeometric function ₁F₁(a; b; x)
    fn hyp1f1(&self, a: f64, b: f64, x: f64) -> Result<f64>;

    /// Inverse in `x` of the upper regularized incomplete gamma Q(a, x)
    fn gammainccinv(&self, a: f64, y: f64) -> Result<f64>;

    /// Characteristic value a_m(q) of the even Mathieu functions
    fn mathieu_a(&self, m: f64, q: f64) -> Result<f64>;

    /// Characteristic value b_m(q) of the odd Mathieu functions
    fn mathieu_b(&self, m: f64, q: f64) -> Result<f64>;
}

// ============================================================================
// Native Backend
// ============================================================================

/// Pure-Rust backend built on [`algorithm::special`](crate::algorithm::special)
///
/// Mathieu characteristic values and most zero-finding routines are not
/// available natively and fail with [`Error::BackendLimitation`] or
/// [`Error::NotImplemented`]. Plug in another backend to get them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NativeBackend;

impl ScalarKernels for NativeBackend {
    fn jv(&self, v: f64, x: f64) -> Result<f64> {
        jv_scalar(v, x)
    }

    fn yv(&self, v: f64, x: f64) -> Result<f64> {
        yv_scalar(v, x)
    }

    fn iv(&self, v: f64, x: f64) -> Result<f64> {
        iv_scalar(v, x)
    }

    fn kv(&self, v: f64, x: f64) -> Result<f64> {
        kv_scalar(v, x)
    }

    fn hankel1(&self, v: f64, x: f64) -> Result<Complex128> {
        hankel1_scalar(v, x)
    }

    fn hankel2(&self, v: f64, x: f64) -> Result<Complex128> {
        hankel2_scalar(v, x)
    }

    fn ndtri(&self, p: f64) -> Result<f64> {
        Ok(ndtri_scalar(p))
    }

    fn gamma(&self, x: f64) -> Result<f64> {
        Ok(gamma_scalar(x))
    }

    fn gammaln(&self, x: f64) -> Result<f64> {
        Ok(gammaln_scalar(x))
    }

    fn psi(&self, x: f64) -> Result<f64> {
        Ok(psi_scalar(x))
    }

    fn zeta(&self, s: f64, q: f64) -> Result<f64> {
        Ok(zeta_scalar(s, q))
    }

    fn hyp1f1(&self, a: f64, b: f64, x: f64) -> Result<f64> {
        Ok(hyp1f1_scalar(a, b, x))
    }

    fn gammainccinv(&self, a: f64, y: f64) -> Result<f64> {
        Ok(gammainccinv_scalar(a, y))
    }

    fn mathieu_a(&self, _m: f64, _q: f64) -> Result<f64> {
        Err(Error::backend_limitation(
            NATIVE,
            "mathieu_a",
            "Mathieu characteristic values are not evaluated natively",
        ))
    }

    fn mathieu_b(&self, _m: f64, _q: f64) -> Result<f64> {
        Err(Error::backend_limitation(
            NATIVE,
            "mathieu_b",
            "Mathieu characteristic values are not evaluated natively",
        ))
    }
}
