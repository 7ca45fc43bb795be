//! Legendre function sequences and associated Legendre tables

use super::Special;
use super::validate::{order, order_and_point, real, scalar};
use crate::dtype::Scalar;
use crate::error::{Error, Result};
use crate::routines::{Backend, LegendreTables, Sequence};
use crate::tensor::{IntoOperand, Operand};

/// `(m, n, z)` for the associated tables
fn table_args(
    m: impl IntoOperand,
    n: impl IntoOperand,
    z: impl IntoOperand,
) -> Result<(usize, usize, Scalar)> {
    let reason = "m must be a non-negative integer.";
    let m = scalar(m)?.ok_or_else(|| Error::domain("m", reason))?;
    let m = order(m, "m", reason)?;
    let reason = "n must be a non-negative integer.";
    let n = scalar(n)?.ok_or_else(|| Error::domain("n", reason))?;
    let n = order(n, "n", reason)?;
    let z = scalar(z)?.ok_or_else(|| Error::domain("z", "z must be scalar."))?;
    Ok((m, n, z))
}

impl<B: Backend> Special<B> {
    /// Legendre polynomials P_k(z) and derivatives for k = 0..=n
    pub fn lpn(&self, n: impl IntoOperand, z: impl IntoOperand) -> Result<Sequence<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if z.is_complex() {
            return Ok(self.backend.clpn(n, z.to_complex())?.into());
        }
        Ok(self.backend.lpn(n, real(z)?)?.into())
    }

    /// Legendre functions of the second kind Q_k(z) and derivatives for k = 0..=n
    pub fn lqn(&self, n: impl IntoOperand, z: impl IntoOperand) -> Result<Sequence<Operand>> {
        let (n, z) = order_and_point(n, z)?;
        if z.is_complex() {
            return Ok(self.backend.clqn(n, z.to_complex())?.into());
        }
        Ok(self.backend.lqnb(n, real(z)?)?.into())
    }

    /// Associated Legendre functions P_j^i(z) and derivatives
    ///
    /// Both tables have shape `(m + 1, n + 1)`: row `i` is the order, column
    /// `j` the degree.
    pub fn lpmn(
        &self,
        m: impl IntoOperand,
        n: impl IntoOperand,
        z: impl IntoOperand,
    ) -> Result<LegendreTables<Operand>> {
        let (m, n, z) = table_args(m, n, z)?;
        if z.is_complex() {
            log::debug!("lpmn: complex argument {z}");
            return Ok(self.backend.clpmn(m, n, z.to_complex())?.into());
        }
        Ok(self.backend.lpmn(m, n, real(z)?)?.into())
    }

    /// Associated Legendre functions of the second kind Q_j^i(z) and derivatives
    ///
    /// Same layout as [`Special::lpmn`].
    pub fn lqmn(
        &self,
        m: impl IntoOperand,
        n: impl IntoOperand,
        z: impl IntoOperand,
    ) -> Result<LegendreTables<Operand>> {
        let (m, n, z) = table_args(m, n, z)?;
        if z.is_complex() {
            log::debug!("lqmn: complex argument {z}");
            return Ok(self.backend.clqmn(m, n, z.to_complex())?.into());
        }
        Ok(self.backend.lqmn(m, n, real(z)?)?.into())
    }
}
