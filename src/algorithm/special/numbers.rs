//! Bernoulli and Euler numbers

use std::f64::consts::PI;

const TWO_PI: f64 = 2.0 * PI;

/// Bernoulli numbers B_0 ..= B_n
///
/// Even indices come from B_2k = (-1)^(k+1) 2 (2k)! ζ(2k) / (2π)^2k with the
/// zeta sum carried until its terms fall below 1e-15. Odd indices past 1
/// are zero.
pub fn bernob(n: usize) -> Vec<f64> {
    let mut bn = vec![0.0; n + 1];
    bn[0] = 1.0;
    if n >= 1 {
        bn[1] = -0.5;
    }
    if n >= 2 {
        bn[2] = 1.0 / 6.0;
    }
    let mut r1 = (2.0 / TWO_PI).powi(2);
    for m in (4..=n).step_by(2) {
        let mf = m as f64;
        r1 = -r1 * (mf - 1.0) * mf / (TWO_PI * TWO_PI);
        let mut zeta = 1.0;
        for k in 2..=10_000 {
            let term = (1.0 / k as f64).powi(m as i32);
            zeta += term;
            if term < 1e-15 {
                break;
            }
        }
        bn[m] = r1 * zeta;
    }
    bn
}

/// Euler numbers E_0 ..= E_n
///
/// Even indices from E_2k = (-1)^k 2^(2k+2) (2k)! β(2k+1) / π^(2k+1), with the
/// Dirichlet beta series truncated at 1e-15. Odd indices are zero.
pub fn eulerb(n: usize) -> Vec<f64> {
    let mut en = vec![0.0; n + 1];
    en[0] = 1.0;
    if n >= 2 {
        en[2] = -1.0;
    }
    let two_over_pi = 2.0 / PI;
    let mut r1 = -4.0 * two_over_pi.powi(3);
    for m in (4..=n).step_by(2) {
        let mf = m as f64;
        r1 = -r1 * (mf - 1.0) * mf * two_over_pi * two_over_pi;
        let mut beta = 1.0;
        let mut sign = 1.0;
        for k in (3..=1000).step_by(2) {
            sign = -sign;
            let term = (1.0 / k as f64).powi(m as i32 + 1);
            beta += sign * term;
            if term < 1e-15 {
                break;
            }
        }
        en[m] = r1 * beta;
    }
    en
}
