//! Fourier coefficients of Mathieu functions

use super::Special;
use super::validate::{integral, real, scalar};
use crate::error::{Error, Result};
use crate::routines::{Backend, MathieuKind};
use crate::tensor::{IntoOperand, NdArray};

/// Predicted number of significant coefficients for order `m` at `q`
pub fn predicted_coefficients(m: usize, q: f64) -> usize {
    let sq = q.sqrt();
    let qm = if q <= 1.0 {
        7.5 + 56.1 * sq - 134.7 * q + 90.7 * sq * q
    } else {
        17.0 + 3.1 * sq - 0.126 * q + 0.0037 * sq * q
    };
    (qm + 0.5 * m as f64).trunc().max(0.0) as usize
}

/// `(m, q)` with `m` present only when integral
fn mathieu_args(m: impl IntoOperand, q: impl IntoOperand) -> Result<(Option<f64>, f64)> {
    let (Some(m), Some(q)) = (scalar(m)?, scalar(q)?) else {
        return Err(Error::domain("m, q", "m and q must be scalars."));
    };
    let q = real(q)?;
    if q < 0.0 {
        return Err(Error::domain("q", "q >=0"));
    }
    Ok((integral(m), q))
}

impl<B: Backend> Special<B> {
    /// Predicted coefficient count, logging the advisory when it is large
    fn coefficient_count(&self, m: usize, q: f64) -> usize {
        let km = predicted_coefficients(m, q);
        if km > self.options.coefficient_warn_limit {
            log::warn!(
                target: "numr_special::special",
                "too many predicted coefficients: {km} for m = {m}, q = {q}"
            );
        }
        km
    }

    /// Expansion coefficients of the even Mathieu function ce_m(x, q)
    ///
    /// The result holds as many coefficients as are predicted to matter for
    /// `(m, q)`; a warning is logged when that count exceeds
    /// [`SpecialOptions::coefficient_warn_limit`](super::SpecialOptions).
    pub fn mathieu_even_coef(
        &self,
        m: impl IntoOperand,
        q: impl IntoOperand,
    ) -> Result<NdArray<f64>> {
        let (m, q) = mathieu_args(m, q)?;
        let m = match m {
            Some(m) if m >= 0.0 => m as usize,
            _ => return Err(Error::domain("m", "m must be an integer >=0.")),
        };
        let km = self.coefficient_count(m, q);
        let a = self.backend.mathieu_a(m as f64, q)?;
        Ok(self.backend.fcoef(MathieuKind::even(m), m, q, a)?.truncate(km))
    }

    /// Expansion coefficients of the odd Mathieu function se_m(x, q)
    pub fn mathieu_odd_coef(
        &self,
        m: impl IntoOperand,
        q: impl IntoOperand,
    ) -> Result<NdArray<f64>> {
        let (m, q) = mathieu_args(m, q)?;
        let m = match m {
            Some(m) if m > 0.0 => m as usize,
            _ => return Err(Error::domain("m", "m must be an integer > 0")),
        };
        let km = self.coefficient_count(m, q);
        let b = self.backend.mathieu_b(m as f64, q)?;
        Ok(self.backend.fcoef(MathieuKind::odd(m), m, q, b)?.truncate(km))
    }
}
