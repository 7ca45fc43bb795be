//! Confluent hypergeometric function ₁F₁

use super::{EPSILON_F64, MAX_ITER};

/// Power series Σ (a)_k / (b)_k x^k / k!
///
/// Returns NaN if the series does not settle within the iteration cap.
fn kummer_series(a: f64, b: f64, x: f64) -> f64 {
    let mut sum = 1.0;
    let mut term = 1.0;
    for k in 0..MAX_ITER {
        let k = k as f64;
        term *= (a + k) / (b + k) * x / (k + 1.0);
        sum += term;
        if term == 0.0 || term.abs() <= EPSILON_F64 * sum.abs() {
            return sum;
        }
        if !sum.is_finite() {
            return sum;
        }
    }
    f64::NAN
}

/// Confluent hypergeometric function ₁F₁(a; b; x) (Kummer's M)
///
/// Terminating polynomial when `a` is a non-positive integer. Negative `x`
/// goes through Kummer's transformation e^x ₁F₁(b-a; b; -x) to avoid
/// cancellation. A non-positive integer `b` that the numerator does not
/// cancel is a pole (+inf).
pub fn hyp1f1_scalar(a: f64, b: f64, x: f64) -> f64 {
    if a.is_nan() || b.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 || a == 0.0 {
        return 1.0;
    }
    let a_terminates = a < 0.0 && a == a.floor();
    if b <= 0.0 && b == b.floor() && !(a_terminates && a > b) {
        return f64::INFINITY;
    }
    if a == b {
        return x.exp();
    }
    if a_terminates {
        return kummer_series(a, b, x);
    }
    if x < 0.0 {
        return x.exp() * kummer_series(b - a, b, -x);
    }
    kummer_series(a, b, x)
}
