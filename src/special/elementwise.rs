//! Broadcasting catalog functions
//!
//! Every function here accepts scalars, sequences or arrays, broadcasts its
//! arguments together and returns a [`Value`]: a bare scalar when every
//! argument was a scalar, else an array of the broadcast shape.

use super::Special;
use crate::dtype::{Complex128, DType};
use crate::error::{Error, Result};
use crate::routines::Backend;
use crate::tensor::IntoOperand;
use crate::vectorize::Value;
use std::f64::consts::{PI, SQRT_2};

impl<B: Backend> Special<B> {
    // ========================================================================
    // Elementary compositions
    // ========================================================================

    /// Normalized sinc: `sin(πx) / (πx)`, and exactly 1 at `x == 0`
    pub fn sinc(&self, x: impl IntoOperand) -> Result<Value> {
        self.vectorize(|x: f64| {
            if x == 0.0 {
                1.0
            } else {
                let w = x * PI;
                w.sin() / w
            }
        })
        .call((x,))
    }

    /// Inverse error function: `ndtri((y + 1) / 2) / √2`
    pub fn erfinv(&self, y: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |y: f64| -> Result<f64> {
            Ok(backend.ndtri((y + 1.0) / 2.0)? / SQRT_2)
        })
        .call((y,))
    }

    /// Inverse complementary error function: `ndtri((2 - y) / 2) / √2`
    pub fn erfcinv(&self, y: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |y: f64| -> Result<f64> {
            Ok(backend.ndtri((2.0 - y) / 2.0)? / SQRT_2)
        })
        .call((y,))
    }

    /// `x` such that the lower regularized incomplete gamma P(a, x) = y
    pub fn gammaincinv(&self, a: impl IntoOperand, y: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |a: f64, y: f64| backend.gammainccinv(a, 1.0 - y))
            .call((a, y))
    }

    /// Confluent hypergeometric limit function ₀F₁(; v; z)
    ///
    /// Evaluated as `Γ(v) · I_{v-1}(2√z) / z^((v-1)/2)` for `z > 0` and with
    /// `J_{v-1}(2√|z|)` for `z < 0`; `₀F₁(; v; 0) = 1`.
    pub fn hyp0f1(&self, v: impl IntoOperand, z: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |v: f64, z: f64| -> Result<f64> {
            if z == 0.0 {
                return Ok(1.0);
            }
            let arg = 2.0 * z.abs().sqrt();
            let num = if z >= 0.0 {
                backend.iv(v - 1.0, arg)?
            } else {
                backend.jv(v - 1.0, arg)?
            };
            let den = z.abs().powf((v - 1.0) / 2.0);
            Ok(backend.gamma(v)? * num / den)
        })
        .call((v, z))
    }

    /// Generalized Laguerre polynomial L_n^(k)(x)
    ///
    /// `Γ(k+1+n) / Γ(k+1) / Γ(n+1) · ₁F₁(-n; k+1; x)`
    pub fn assoc_laguerre(
        &self,
        x: impl IntoOperand,
        n: impl IntoOperand,
        k: impl IntoOperand,
    ) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |x: f64, n: f64, k: f64| -> Result<f64> {
            let fac =
                backend.gamma(k + 1.0 + n)? / backend.gamma(k + 1.0)? / backend.gamma(n + 1.0)?;
            Ok(fac * backend.hyp1f1(-n, k + 1.0, x)?)
        })
        .call((x, n, k))
    }

    /// Laguerre polynomial L_n(x), i.e. [`assoc_laguerre`](Self::assoc_laguerre) with `k = 0`
    pub fn assoc_laguerre0(&self, x: impl IntoOperand, n: impl IntoOperand) -> Result<Value> {
        self.assoc_laguerre(x, n, 0.0)
    }

    /// Polygamma function ψ^(n)(x)
    ///
    /// `ψ(x)` for `n == 0`, else `(-1)^(n+1) · n! · ζ(n+1, x)`.
    pub fn polygamma(&self, n: impl IntoOperand, x: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |n: f64, x: f64| -> Result<f64> {
            if n == 0.0 {
                return backend.psi(x);
            }
            let sign = (-1.0f64).powf(n + 1.0);
            Ok(sign * backend.gamma(n + 1.0)? * backend.zeta(n + 1.0, x)?)
        })
        .call((n, x))
    }

    /// Spherical harmonic Y_n^m(θ, φ) with azimuth `theta` and polar angle `phi`
    ///
    /// `m` and `n` are truncated to integers. Orders above the degree give 0;
    /// a negative order or degree fails the whole call with a domain error.
    /// Output is always complex.
    ///
    /// The normalization is the standard `sqrt((2n+1)/(4π) · (n-m)!/(n+m)!)`.
    /// Older implementations used `2m+1` in place of `2n+1`; values here
    /// differ from those whenever `m != n`.
    pub fn sph_harm(
        &self,
        m: impl IntoOperand,
        n: impl IntoOperand,
        theta: impl IntoOperand,
        phi: impl IntoOperand,
    ) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(
            move |m: f64, n: f64, theta: f64, phi: f64| -> Result<Complex128> {
                let (m, n) = (m.trunc(), n.trunc());
                if m.is_nan() || m < 0.0 {
                    return Err(Error::domain("m", "m must be a non-negative integer."));
                }
                if n.is_nan() || n < 0.0 {
                    return Err(Error::domain("n", "n must be a non-negative integer."));
                }
                if m > n {
                    return Ok(Complex128::ZERO);
                }
                let (mi, ni) = (m as usize, n as usize);
                let table = backend.lpmn(mi, ni, phi.cos())?;
                let p = table.values.get(&[mi, ni]).unwrap_or(f64::NAN);
                let ratio = (backend.gammaln(n - m + 1.0)? - backend.gammaln(n + m + 1.0)?).exp();
                let norm = ((2.0 * n + 1.0) / (4.0 * PI) * ratio).sqrt();
                Ok(Complex128::from_polar(p * norm, m * theta))
            },
        )
        .with_otype(DType::Complex128)
        .call((m, n, theta, phi))
    }

    // ========================================================================
    // Kernel pass-through
    // ========================================================================

    /// Bessel function of the first kind J_v(z)
    pub fn jv(&self, v: impl IntoOperand, z: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |v: f64, z: f64| backend.jv(v, z)).call((v, z))
    }

    /// Bessel function of the second kind Y_v(z)
    pub fn yv(&self, v: impl IntoOperand, z: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |v: f64, z: f64| backend.yv(v, z)).call((v, z))
    }

    /// Modified Bessel function of the first kind I_v(z)
    pub fn iv(&self, v: impl IntoOperand, z: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |v: f64, z: f64| backend.iv(v, z)).call((v, z))
    }

    /// Modified Bessel function of the second kind K_v(z)
    pub fn kv(&self, v: impl IntoOperand, z: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |v: f64, z: f64| backend.kv(v, z)).call((v, z))
    }

    /// Hankel function of the first kind H1_v(z)
    pub fn hankel1(&self, v: impl IntoOperand, z: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |v: f64, z: f64| backend.hankel1(v, z))
            .call((v, z))
    }

    /// Hankel function of the second kind H2_v(z)
    pub fn hankel2(&self, v: impl IntoOperand, z: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |v: f64, z: f64| backend.hankel2(v, z))
            .call((v, z))
    }

    /// Inverse of the standard normal CDF
    pub fn ndtri(&self, p: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |p: f64| backend.ndtri(p)).call((p,))
    }

    /// Gamma function Γ(x)
    pub fn gamma(&self, x: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |x: f64| backend.gamma(x)).call((x,))
    }

    /// ln|Γ(x)|
    pub fn gammaln(&self, x: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |x: f64| backend.gammaln(x)).call((x,))
    }

    /// Digamma function ψ(x)
    pub fn psi(&self, x: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |x: f64| backend.psi(x)).call((x,))
    }

    /// Alias of [`psi`](Self::psi)
    pub fn digamma(&self, x: impl IntoOperand) -> Result<Value> {
        self.psi(x)
    }

    /// Hurwitz zeta function ζ(s, q)
    pub fn zeta(&self, s: impl IntoOperand, q: impl IntoOperand) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |s: f64, q: f64| backend.zeta(s, q)).call((s, q))
    }

    /// Confluent hypergeometric function ₁F₁(a; b; x)
    pub fn hyp1f1(
        &self,
        a: impl IntoOperand,
        b: impl IntoOperand,
        x: impl IntoOperand,
    ) -> Result<Value> {
        let backend = &self.backend;
        self.vectorize(move |a: f64, b: f64, x: f64| backend.hyp1f1(a, b, x))
            .call((a, b, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rtol: f64) {
        let err = (actual - expected).abs() / expected.abs().max(1e-300);
        assert!(err <= rtol, "expected {expected}, got {actual} (rel err {err:e})");
    }

    #[test]
    fn test_sinc() {
        let sp = Special::default();
        assert_eq!(sp.sinc(0.0).unwrap().as_f64(), Some(1.0));
        let out = sp.sinc(vec![-0.5, 0.0, 0.5, 1.5]).unwrap().to_f64_vec().unwrap();
        let w = 0.5 * PI;
        assert_eq!(out[0], (-w).sin() / -w);
        assert_eq!(out[1], 1.0);
        assert_eq!(out[2], w.sin() / w);
        assert_close(out[3], -2.0 / (3.0 * PI), 1e-14);
    }

    #[test]
    fn test_erfinv_fixed_points() {
        let sp = Special::default();
        assert_eq!(sp.erfinv(0.0).unwrap().as_f64(), Some(0.0));
        assert_eq!(sp.erfcinv(1.0).unwrap().as_f64(), Some(0.0));
        // erf(0.5) = 0.5204998778130465
        assert_close(sp.erfinv(0.5204998778130465).unwrap().as_f64().unwrap(), 0.5, 1e-13);
    }

    #[test]
    fn test_hyp0f1_closed_forms() {
        let sp = Special::default();
        // ₀F₁(; 1/2; z) = cosh(2√z) for z > 0, cos(2√|z|) for z < 0
        assert_close(sp.hyp0f1(0.5, 1.0).unwrap().as_f64().unwrap(), 2.0f64.cosh(), 1e-13);
        assert_close(sp.hyp0f1(0.5, -1.0).unwrap().as_f64().unwrap(), 2.0f64.cos(), 1e-13);
        assert_eq!(sp.hyp0f1(3.0, 0.0).unwrap().as_f64(), Some(1.0));
    }

    #[test]
    fn test_assoc_laguerre() {
        let sp = Special::default();
        // L_2(x) = (x² - 4x + 2) / 2
        let x = 0.5;
        let l2 = sp.assoc_laguerre0(x, 2.0).unwrap().as_f64().unwrap();
        assert_close(l2, (x * x - 4.0 * x + 2.0) / 2.0, 1e-13);
        // L_1^(k)(x) = k + 1 - x
        let l1 = sp.assoc_laguerre(x, 1.0, 2.0).unwrap().as_f64().unwrap();
        assert_close(l1, 2.5, 1e-13);
    }

    #[test]
    fn test_polygamma() {
        let sp = Special::default();
        let out = sp.polygamma(vec![0.0, 1.0, 2.0], 1.0).unwrap().to_f64_vec().unwrap();
        assert_close(out[0], -0.5772156649015329, 1e-13);
        assert_close(out[1], PI * PI / 6.0, 1e-13);
        assert_close(out[2], -2.4041138063191885, 1e-13);
    }

    #[test]
    fn test_sph_harm() {
        let sp = Special::default();
        let y00 = sp.sph_harm(0, 0, 0.3, 1.1).unwrap();
        assert_eq!(y00.dtype(), DType::Complex128);
        let y00 = y00.as_scalar().unwrap().to_complex();
        assert_close(y00.re, 0.28209479177387814, 1e-14);
        assert_eq!(y00.im, 0.0);

        let (theta, phi): (f64, f64) = (0.5, PI / 3.0);
        let y11 = sp.sph_harm(1, 1, theta, phi).unwrap().as_scalar().unwrap().to_complex();
        let magnitude = -phi.sin() * (3.0 / (8.0 * PI)).sqrt();
        assert_close(y11.re, magnitude * theta.cos(), 1e-13);
        assert_close(y11.im, magnitude * theta.sin(), 1e-13);

        let above = sp.sph_harm(2, 1, theta, phi).unwrap().as_scalar().unwrap().to_complex();
        assert_eq!(above, Complex128::ZERO);
    }

    #[test]
    fn test_sph_harm_negative_order_or_degree_fails() {
        let sp = Special::default();
        let err = sp.sph_harm(-1, 2, 0.3, 0.4).unwrap_err();
        assert_eq!(err, Error::domain("m", "m must be a non-negative integer."));
        let err = sp.sph_harm(vec![0, 1], vec![2, -2], 0.3, 0.4).unwrap_err();
        assert_eq!(err, Error::domain("n", "n must be a non-negative integer."));
    }

    #[test]
    fn test_pass_through_broadcasts() {
        let sp = Special::default();
        let out = sp.gamma(vec![1.0, 2.0, 5.0]).unwrap().to_f64_vec().unwrap();
        assert_close(out[2], 24.0, 1e-14);
        let j = sp.jv(vec![0.0, 1.0], vec![vec![0.0], vec![1.0]]).unwrap();
        assert_eq!(j.shape(), &[2, 2]);
        assert_eq!(sp.digamma(1.0).unwrap(), sp.psi(1.0).unwrap());
        let h = sp.hankel1(0.0, 1.0).unwrap();
        assert_eq!(h.dtype(), DType::Complex128);
    }
}
