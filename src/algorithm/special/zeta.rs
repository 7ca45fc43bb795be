//! Hurwitz zeta function

use super::EPSILON_F64;

/// Euler-Maclaurin expansion coefficients (2k)!/B_2k
const EULER_MACLAURIN: [f64; 12] = [
    12.0,
    -720.0,
    30240.0,
    -1209600.0,
    47900160.0,
    -1.8924375803183791606e9,
    7.47242496e10,
    -2.950130727918164224e12,
    1.1646782814350067249e14,
    -4.5979787224074726105e15,
    1.8152105401943546773e17,
    -7.1661652561756670113e18,
];

/// Hurwitz zeta function ζ(s, q) = Σ_{k>=0} (k + q)^(-s)
///
/// Defined here for `s > 1`. `s == 1` is a pole (+inf) and `s < 1` is NaN.
/// For `q <= 0` an integer `q` is a pole (+inf); otherwise `s` must be an
/// integer or the result is NaN.
///
/// Direct summation of at least nine terms, then the Euler-Maclaurin tail.
pub fn zeta_scalar(s: f64, q: f64) -> f64 {
    if s.is_nan() || q.is_nan() {
        return f64::NAN;
    }
    if s == 1.0 {
        return f64::INFINITY;
    }
    if s < 1.0 {
        return f64::NAN;
    }
    if q <= 0.0 {
        if q == q.floor() {
            return f64::INFINITY;
        }
        if s != s.floor() {
            return f64::NAN;
        }
    }

    let mut sum = q.powf(-s);
    let mut a = q;
    let mut b = 0.0;
    let mut i = 0;
    while i < 9 || a <= 9.0 {
        i += 1;
        a += 1.0;
        b = a.powf(-s);
        sum += b;
        if (b / sum).abs() < EPSILON_F64 {
            return sum;
        }
    }

    let w = a;
    sum += b * w / (s - 1.0);
    sum -= 0.5 * b;
    let mut factor = 1.0;
    let mut k = 0.0;
    for coeff in EULER_MACLAURIN {
        factor *= s + k;
        b /= w;
        let term = factor * b / coeff;
        sum += term;
        if (term / sum).abs() < EPSILON_F64 {
            break;
        }
        k += 1.0;
        factor *= s + k;
        b /= w;
        k += 1.0;
    }
    sum
}
