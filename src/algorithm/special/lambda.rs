//! Lambda functions Λ_v(x) = Γ(v+1) (2/x)^v J_v(x)

use super::{EPSILON_F64, MAX_ITER, NATIVE, besseljy, gammaln_scalar};
use crate::error::{Error, Result};

/// Λ_nu(x) for one order `nu >= 0`
///
/// The entire series Σ (-x²/4)^k / (k! (nu+1)_k) is used where it does not
/// cancel badly (small x, or nu + 1 above x²/4). Elsewhere the Bessel form
/// is evaluated in log space.
fn lambda_single(nu: f64, x: f64) -> Result<f64> {
    let x = x.abs();
    let quarter_x2 = 0.25 * x * x;
    if x <= 12.0 || quarter_x2 < nu + 1.0 {
        let mut sum = 1.0;
        let mut term = 1.0;
        for k in 1..MAX_ITER {
            let kf = k as f64;
            term *= -quarter_x2 / (kf * (nu + kf));
            sum += term;
            if term.abs() <= EPSILON_F64 * sum.abs() {
                return Ok(sum);
            }
        }
        return Err(Error::backend_limitation(
            NATIVE,
            "lamv",
            format!("series did not converge for v = {nu}, x = {x}"),
        ));
    }

    let j = besseljy(nu, x)?.j;
    if j == 0.0 {
        return Err(Error::backend_limitation(
            NATIVE,
            "lamv",
            format!("J_v underflows for v = {nu}, x = {x}"),
        ));
    }
    let log_scale = gammaln_scalar(nu + 1.0) + nu * (2.0 / x).ln();
    Ok((log_scale + j.abs().ln()).exp().copysign(j))
}

/// Lambda functions Λ_{v0+k}(x) and derivatives for k = 0..=floor(v)
///
/// `v0 = v - floor(v)`. Derivatives follow Λ'_nu(x) = -x/(2(nu+1)) Λ_{nu+1}(x).
/// Λ is even in x, so negative arguments are accepted.
pub fn lamv(v: f64, x: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    if !(v >= 0.0) {
        return Err(Error::InvalidArgument {
            arg: "v",
            reason: format!("lambda functions need v >= 0, got {v}"),
        });
    }
    let n = v.floor() as usize;
    let v0 = v - n as f64;
    let lambdas = (0..=n + 1)
        .map(|k| lambda_single(v0 + k as f64, x))
        .collect::<Result<Vec<_>>>()?;
    let derivatives = (0..=n)
        .map(|k| -0.5 * x / (v0 + k as f64 + 1.0) * lambdas[k + 1])
        .collect();
    let mut values = lambdas;
    values.truncate(n + 1);
    Ok((values, derivatives))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rtol: f64) {
        let err = (actual - expected).abs() / expected.abs();
        assert!(err <= rtol, "expected {expected}, got {actual} (rel err {err:e})");
    }

    #[test]
    fn test_lambda_at_zero() {
        let (vl, dl) = lamv(2.0, 0.0).unwrap();
        assert_eq!(vl, vec![1.0, 1.0, 1.0]);
        assert!(dl.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_lambda_integer_orders() {
        let x = 3.0;
        let (vl, dl) = lamv(1.0, x).unwrap();
        // Λ_0 = J_0, Λ_1 = 2 J_1(x) / x
        assert_close(vl[0], -0.2600519549019334, 1e-13);
        assert_close(vl[1], 2.0 * 0.33905895852593643 / x, 1e-13);
        // Λ_0' = -J_1
        assert_close(dl[0], -0.33905895852593643, 1e-13);
    }

    #[test]
    fn test_lambda_fractional_order_large_argument() {
        // Λ_{1/2}(x) = sin(x) / x
        let x = 20.0;
        let (vl, _) = lamv(0.5, x).unwrap();
        assert_close(vl[0], x.sin() / x, 1e-12);
    }

    #[test]
    fn test_lambda_rejects_negative_order() {
        assert!(lamv(-0.5, 1.0).is_err());
    }
}
