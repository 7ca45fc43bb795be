//! Whole-sequence functions: spherical and Riccati-Bessel, numbers, lambda,
//! parabolic cylinder and spheroidal characteristic values
//!
//! Each call evaluates one backend routine for all orders up to `n` at a
//! single point. Complex points are routed to the complex routine; the
//! second-kind spherical functions also take that route for negative real
//! arguments.

use super::Special;
use super::validate::{integral, order_and_point, real, scalar};
use crate::dtype::Scalar;
use crate::error::{Error, Result};
use crate::routines::{Backend, RealSequence, Sequence, SequencePair, SpheroidalKind};
use crate::tensor::{IntoOperand, NdArray, Operand};

/// Largest `n - m` accepted by the spheroidal sequences
pub const SPHEROIDAL_MAX_SPAN: i64 = 199;

/// Complex route for functions singular on the negative real axis
fn second_kind_complex(z: Scalar) -> bool {
    z.is_complex() || z.as_f64().is_some_and(|x| x < 0.0)
}

impl<B: Backend> Special<B> {
    // ========================================================================
    // Spherical Bessel
    // ========================================================================

    /// j_k(z) and j_k'(z) for k = 0..=n
    pub fn sph_jn(&self, n: impl IntoOperand, z: impl IntoOperand) -> Result<Sequence<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if z.is_complex() {
            log::debug!("sph_jn: complex argument {z}");
            return Ok(self.backend.csphjy(n, z.to_complex())?.first_kind.into());
        }
        Ok(self.backend.sphj(n, real(z)?)?.into())
    }

    /// y_k(z) and y_k'(z) for k = 0..=n
    pub fn sph_yn(&self, n: impl IntoOperand, z: impl IntoOperand) -> Result<Sequence<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if second_kind_complex(z) {
            log::debug!("sph_yn: complex routine for {z}");
            return Ok(self.backend.csphjy(n, z.to_complex())?.second_kind.into());
        }
        Ok(self.backend.sphy(n, real(z)?)?.into())
    }

    /// j_k, j_k', y_k and y_k' for k = 0..=n
    pub fn sph_jnyn(
        &self,
        n: impl IntoOperand,
        z: impl IntoOperand,
    ) -> Result<SequencePair<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if second_kind_complex(z) {
            log::debug!("sph_jnyn: complex routine for {z}");
            return Ok(self.backend.csphjy(n, z.to_complex())?.into());
        }
        let x = real(z)?;
        let second_kind = self.backend.sphy(n, x)?;
        let first_kind = self.backend.sphj(n, x)?;
        Ok(SequencePair {
            first_kind,
            second_kind,
        }
        .into())
    }

    /// i_k(z) and i_k'(z) for k = 0..=n
    pub fn sph_in(&self, n: impl IntoOperand, z: impl IntoOperand) -> Result<Sequence<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if z.is_complex() {
            log::debug!("sph_in: complex argument {z}");
            return Ok(self.backend.csphik(n, z.to_complex())?.first_kind.into());
        }
        Ok(self.backend.sphi(n, real(z)?)?.into())
    }

    /// k_k(z) and k_k'(z) for k = 0..=n
    pub fn sph_kn(&self, n: impl IntoOperand, z: impl IntoOperand) -> Result<Sequence<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if second_kind_complex(z) {
            log::debug!("sph_kn: complex routine for {z}");
            return Ok(self.backend.csphik(n, z.to_complex())?.second_kind.into());
        }
        Ok(self.backend.sphk(n, real(z)?)?.into())
    }

    /// i_k, i_k', k_k and k_k' for k = 0..=n
    pub fn sph_inkn(
        &self,
        n: impl IntoOperand,
        z: impl IntoOperand,
    ) -> Result<SequencePair<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if second_kind_complex(z) {
            log::debug!("sph_inkn: complex routine for {z}");
            return Ok(self.backend.csphik(n, z.to_complex())?.into());
        }
        let x = real(z)?;
        let first_kind = self.backend.sphi(n, x)?;
        let second_kind = self.backend.sphk(n, x)?;
        Ok(SequencePair {
            first_kind,
            second_kind,
        }
        .into())
    }

    /// Riccati-Bessel x j_k(x) and its derivative for k = 0..=n
    pub fn riccati_jn(&self, n: impl IntoOperand, x: impl IntoOperand) -> Result<RealSequence> {
        let (n, x) = order_and_point(n, x)?;
        self.backend.rctj(n, real(x)?)
    }

    /// Riccati-Bessel x y_k(x) and its derivative for k = 0..=n
    pub fn riccati_yn(&self, n: impl IntoOperand, x: impl IntoOperand) -> Result<RealSequence> {
        let (n, x) = order_and_point(n, x)?;
        self.backend.rcty(n, real(x)?)
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    /// Bernoulli numbers B_0..=B_n; a fractional `n` is truncated
    pub fn bernoulli(&self, n: impl IntoOperand) -> Result<NdArray<f64>> {
        self.backend.bernob(number_count(n)?)
    }

    /// Euler numbers E_0..=E_n; a fractional `n` is truncated
    pub fn euler(&self, n: impl IntoOperand) -> Result<NdArray<f64>> {
        self.backend.eulerb(number_count(n)?)
    }

    // ========================================================================
    // Lambda and parabolic cylinder
    // ========================================================================

    /// Lambda functions Λ_{v0}(x)..Λ_v(x) with v0 = v - floor(v), and derivatives
    pub fn lmbda(&self, v: impl IntoOperand, x: impl IntoOperand) -> Result<RealSequence> {
        let (Some(v), Some(x)) = (scalar(v)?, scalar(x)?) else {
            return Err(Error::domain("v, x", "arguments must be scalars."));
        };
        let v = real(v)?;
        if v < 0.0 {
            return Err(Error::domain("v", "argument must be > 0."));
        }
        let x = real(x)?;
        if v == v.floor() {
            self.backend.lamn(v as usize, x)
        } else {
            self.backend.lamv(v, x)
        }
    }

    /// D_{v0}(x)..D_v(x) with v0 = v - floor(v), and derivatives
    pub fn pbdv_seq(&self, v: impl IntoOperand, x: impl IntoOperand) -> Result<RealSequence> {
        let (v, x) = real_pair(v, x)?;
        Ok(self.backend.pbdv(v, x)?.sequence)
    }

    /// V_{v0}(x)..V_v(x) with v0 = v - floor(v), and derivatives
    pub fn pbvv_seq(&self, v: impl IntoOperand, x: impl IntoOperand) -> Result<RealSequence> {
        let (v, x) = real_pair(v, x)?;
        Ok(self.backend.pbvv(v, x)?.sequence)
    }

    /// D_0(z)..D_n(z) and derivatives for complex z
    pub fn pbdn_seq(&self, n: impl IntoOperand, z: impl IntoOperand) -> Result<Sequence<Operand>> {
        let (Some(n), Some(z)) = (scalar(n)?, scalar(z)?) else {
            return Err(Error::domain("n, z", "arguments must be scalars."));
        };
        let Some(n) = integral(n) else {
            return Err(Error::domain("n", "n must be an integer."));
        };
        Ok(self.backend.cpbdn(n as i64, z.to_complex())?.into())
    }

    // ========================================================================
    // Spheroidal
    // ========================================================================

    fn spheroidal_sequence(
        &self,
        m: impl IntoOperand,
        n: impl IntoOperand,
        c: impl IntoOperand,
        kind: SpheroidalKind,
    ) -> Result<NdArray<f64>> {
        let (Some(m), Some(n), Some(c)) = (scalar(m)?, scalar(n)?, scalar(c)?) else {
            return Err(Error::domain("m, n, c", "Arguments must be scalars."));
        };
        let (Some(m), Some(n)) = (integral(m), integral(n)) else {
            return Err(Error::domain("m, n", "Modes must be integers."));
        };
        // checked in f64, before narrowing to i64
        if n - m > SPHEROIDAL_MAX_SPAN as f64 {
            return Err(Error::domain(
                "m, n",
                "Difference between n and m is too large.",
            ));
        }
        let len = (n - m + 1.0).max(0.0) as usize;
        let values = self.backend.segv(m as i64, n as i64, real(c)?, kind)?;
        Ok(values.eigenvalues.truncate(len))
    }

    /// Prolate spheroidal characteristic values for mode m and n' = m..=n
    pub fn pro_cv_seq(
        &self,
        m: impl IntoOperand,
        n: impl IntoOperand,
        c: impl IntoOperand,
    ) -> Result<NdArray<f64>> {
        self.spheroidal_sequence(m, n, c, SpheroidalKind::Prolate)
    }

    /// Oblate spheroidal characteristic values for mode m and n' = m..=n
    pub fn obl_cv_seq(
        &self,
        m: impl IntoOperand,
        n: impl IntoOperand,
        c: impl IntoOperand,
    ) -> Result<NdArray<f64>> {
        self.spheroidal_sequence(m, n, c, SpheroidalKind::Oblate)
    }
}

/// Count for the number tables: scalar, real and non-negative, truncated
fn number_count(n: impl IntoOperand) -> Result<usize> {
    match scalar(n)?.and_then(|n| n.as_f64()) {
        Some(v) if v >= 0.0 && v.is_finite() => Ok(v as usize),
        _ => Err(Error::domain("n", "n must be a non-negative integer.")),
    }
}

fn real_pair(v: impl IntoOperand, x: impl IntoOperand) -> Result<(f64, f64)> {
    let (Some(v), Some(x)) = (scalar(v)?, scalar(x)?) else {
        return Err(Error::domain("v, x", "arguments must be scalars."));
    };
    Ok((real(v)?, real(x)?))
}
