//! Argument checks shared by the catalog
//!
//! Every check maps onto one `Domain` error message. Callers run them in a
//! fixed order so that the first failing precondition decides the message.

use crate::dtype::{FromScalar, Scalar};
use crate::error::{Error, Result};
use crate::tensor::IntoOperand;

/// Convert caller input and return its value when it is rank-0
pub(crate) fn scalar(input: impl IntoOperand) -> Result<Option<Scalar>> {
    Ok(input.into_operand()?.as_scalar())
}

/// Value of a real, finite scalar with `floor(x) == x`
pub(crate) fn integral(value: Scalar) -> Option<f64> {
    value
        .as_f64()
        .filter(|v| v.is_finite() && v.floor() == *v)
}

/// Real value of a scalar, failing with `DTypeCast` for complex input
pub(crate) fn real(value: Scalar) -> Result<f64> {
    f64::from_scalar(value)
}

/// A non-negative integral order as `usize`
pub(crate) fn order(value: Scalar, arg: &'static str, reason: &str) -> Result<usize> {
    match integral(value) {
        Some(v) if v >= 0.0 => Ok(v as usize),
        _ => Err(Error::domain(arg, reason)),
    }
}

/// `(n, z)` for the order-indexed sequences
pub(crate) fn order_and_point(
    n: impl IntoOperand,
    z: impl IntoOperand,
) -> Result<(usize, Scalar)> {
    let (Some(n), Some(z)) = (scalar(n)?, scalar(z)?) else {
        return Err(Error::domain("n, z", "arguments must be scalars."));
    };
    let n = order(n, "n", "n must be a non-negative integer.")?;
    Ok((n, z))
}
