//! Bessel functions of real order
//!
//! The core routines [`besseljy`] and [`besselik`] evaluate a pair of
//! cylinder functions and their derivatives for order `nu >= 0` and `x > 0`
//! with Temme's method: Steed's continued fraction CF1 fixes the ratio
//! J'/J (I'/I) at the target order, downward recurrence carries it to a
//! fractional order |mu| <= 1/2, and there either Temme's series (x < 2) or
//! Steed's CF2 (x >= 2) supplies Y_mu (K_mu). The Wronskian then fixes the
//! normalization and upward recurrence brings Y (K) back to `nu`.
//!
//! The public `*_scalar` wrappers extend these to negative orders, negative
//! arguments (integer order only) and the special values at zero.

use super::{EPSILON_F64, MAX_ITER, NATIVE, TINY};
use crate::dtype::Complex128;
use crate::error::{Error, Result};
use std::f64::consts::PI;

const XMIN: f64 = 2.0;

/// Taylor coefficients of 1/Γ(1+x) (Abramowitz & Stegun 6.1.34)
const INV_GAMMA_SERIES: [f64; 26] = [
    1.0,
    0.577_215_664_901_532_9,
    -0.655_878_071_520_253_8,
    -0.042_002_635_034_095_2,
    0.166_538_611_382_291_5,
    -0.042_197_734_555_544_3,
    -0.009_621_971_527_877_0,
    0.007_218_943_246_663_0,
    -0.001_165_167_591_859_1,
    -0.000_215_241_674_114_9,
    0.000_128_050_282_388_2,
    -0.000_020_134_854_780_7,
    -0.000_001_250_493_482_1,
    0.000_001_133_027_232_0,
    -0.000_000_205_633_841_7,
    0.000_000_006_116_095_0,
    0.000_000_005_002_007_5,
    -0.000_000_001_181_274_6,
    0.000_000_000_104_342_7,
    0.000_000_000_007_782_3,
    -0.000_000_000_003_696_8,
    0.000_000_000_000_510_0,
    -0.000_000_000_000_020_6,
    -0.000_000_000_000_005_4,
    0.000_000_000_000_001_4,
    0.000_000_000_000_000_1,
];

/// Temme's auxiliary gammas for |mu| <= 1/2
///
/// Returns `(gam1, gam2, 1/Γ(1+mu), 1/Γ(1-mu))` where
/// `gam1 = (1/Γ(1-mu) - 1/Γ(1+mu)) / (2 mu)` and
/// `gam2 = (1/Γ(1-mu) + 1/Γ(1+mu)) / 2`.
fn temme_gammas(mu: f64) -> (f64, f64, f64, f64) {
    let mu2 = mu * mu;
    let mut gam1 = 0.0;
    let mut gam2 = 0.0;
    let mut power = 1.0;
    for pair in INV_GAMMA_SERIES.chunks(2) {
        gam2 += pair[0] * power;
        if let Some(&odd) = pair.get(1) {
            gam1 -= odd * power;
        }
        power *= mu2;
    }
    (gam1, gam2, gam2 - mu * gam1, gam2 + mu * gam1)
}

fn not_converged(operation: &'static str, stage: &str, x: f64) -> Error {
    Error::backend_limitation(
        NATIVE,
        operation,
        format!("{stage} did not converge for x = {x}"),
    )
}

// ============================================================================
// J and Y
// ============================================================================

/// J_nu, Y_nu and their derivatives at one point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BesselJY {
    /// J_nu(x)
    pub j: f64,
    /// Y_nu(x)
    pub y: f64,
    /// J'_nu(x)
    pub jp: f64,
    /// Y'_nu(x)
    pub yp: f64,
}

/// Bessel functions of the first and second kind for `nu >= 0`, `x > 0`
pub fn besseljy(nu: f64, x: f64) -> Result<BesselJY> {
    if !(nu >= 0.0 && x > 0.0) {
        return Err(Error::InvalidArgument {
            arg: "nu, x",
            reason: format!("besseljy needs nu >= 0 and x > 0, got nu = {nu}, x = {x}"),
        });
    }

    let nl = if x < XMIN {
        (nu + 0.5) as usize
    } else {
        (nu - x + 1.5).max(0.0) as usize
    };
    let xmu = nu - nl as f64;
    let xmu2 = xmu * xmu;
    let xi = 1.0 / x;
    let xi2 = 2.0 * xi;
    let w = xi2 / PI;

    // CF1: J'_nu / J_nu, tracking the sign of J_nu
    let mut isign = 1.0;
    let mut h = (nu * xi).max(TINY);
    let mut b = xi2 * nu;
    let mut d = 0.0;
    let mut c = h;
    let mut converged = false;
    for _ in 0..MAX_ITER {
        b += xi2;
        d = b - d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = b - 1.0 / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let del = c * d;
        h *= del;
        if d < 0.0 {
            isign = -isign;
        }
        if (del - 1.0).abs() <= EPSILON_F64 {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(not_converged("besseljy", "CF1", x));
    }

    // Downward recurrence to mu, unnormalized
    let mut rjl = isign * TINY;
    let mut rjpl = h * rjl;
    let rjl1 = rjl;
    let rjp1 = rjpl;
    let mut fact = nu * xi;
    for _ in 0..nl {
        let rjtemp = fact * rjl + rjpl;
        fact -= xi;
        rjpl = fact * rjtemp - rjl;
        rjl = rjtemp;
    }
    if rjl == 0.0 {
        rjl = EPSILON_F64;
    }
    let f = rjpl / rjl;

    let (rjmu, mut rymu, mut ry1) = if x < XMIN {
        let x2 = 0.5 * x;
        let pimu = PI * xmu;
        let fact = if pimu.abs() < EPSILON_F64 {
            1.0
        } else {
            pimu / pimu.sin()
        };
        let d = -x2.ln();
        let e = xmu * d;
        let fact2 = if e.abs() < EPSILON_F64 {
            1.0
        } else {
            e.sinh() / e
        };
        let (gam1, gam2, gampl, gammi) = temme_gammas(xmu);
        let mut ff = 2.0 / PI * fact * (gam1 * e.cosh() + gam2 * fact2 * d);
        let e = e.exp();
        let mut p = e / (gampl * PI);
        let mut q = 1.0 / (e * PI * gammi);
        let pimu2 = 0.5 * pimu;
        let fact3 = if pimu2.abs() < EPSILON_F64 {
            1.0
        } else {
            pimu2.sin() / pimu2
        };
        let r = PI * pimu2 * fact3 * fact3;
        let mut c = 1.0;
        let d = -x2 * x2;
        let mut sum = ff + r * q;
        let mut sum1 = p;
        let mut converged = false;
        for i in 1..=MAX_ITER {
            let fi = i as f64;
            ff = (fi * ff + p + q) / (fi * fi - xmu2);
            c *= d / fi;
            p /= fi - xmu;
            q /= fi + xmu;
            let del = c * (ff + r * q);
            sum += del;
            sum1 += c * p - fi * del;
            if del.abs() < (1.0 + sum.abs()) * EPSILON_F64 {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(not_converged("besseljy", "Temme series", x));
        }
        let rymu = -sum;
        let ry1 = -sum1 * xi2;
        let rymup = xmu * xi * rymu - ry1;
        (w / (rymup - f * rymu), rymu, ry1)
    } else {
        // CF2: p + iq = (J' + iY') / (J + iY), complex Lentz
        let mut a = 0.25 - xmu2;
        let mut p = -0.5 * xi;
        let mut q = 1.0;
        let br = 2.0 * x;
        let mut bi = 2.0;
        let fact = a * xi / (p * p + q * q);
        let mut cr = br + q * fact;
        let mut ci = bi + p * fact;
        let mut den = br * br + bi * bi;
        let mut dr = br / den;
        let mut di = -bi / den;
        let mut dlr = cr * dr - ci * di;
        let mut dli = cr * di + ci * dr;
        let temp = p * dlr - q * dli;
        q = p * dli + q * dlr;
        p = temp;
        let mut converged = false;
        for i in 1..MAX_ITER {
            a += 2.0 * i as f64;
            bi += 2.0;
            dr = a * dr + br;
            di = a * di + bi;
            if dr.abs() + di.abs() < TINY {
                dr = TINY;
            }
            let fact = a / (cr * cr + ci * ci);
            cr = br + cr * fact;
            ci = bi - ci * fact;
            if cr.abs() + ci.abs() < TINY {
                cr = TINY;
            }
            den = dr * dr + di * di;
            dr /= den;
            di /= -den;
            dlr = cr * dr - ci * di;
            dli = cr * di + ci * dr;
            let temp = p * dlr - q * dli;
            q = p * dli + q * dlr;
            p = temp;
            if (dlr - 1.0).abs() + dli.abs() <= EPSILON_F64 {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(not_converged("besseljy", "CF2", x));
        }
        let gam = (p - f) / q;
        let rjmu = (w / ((p - f) * gam + q)).sqrt().copysign(rjl);
        let rymu = rjmu * gam;
        let rymup = rymu * (p + q / gam);
        (rjmu, rymu, xmu * xi * rymu - rymup)
    };

    let scale = rjmu / rjl;
    let j = rjl1 * scale;
    let jp = rjp1 * scale;
    for i in 1..=nl {
        let rytemp = (xmu + i as f64) * xi2 * ry1 - rymu;
        rymu = ry1;
        ry1 = rytemp;
    }
    Ok(BesselJY {
        j,
        y: rymu,
        jp,
        yp: nu * xi * rymu - ry1,
    })
}

// ============================================================================
// I and K
// ============================================================================

/// I_nu, K_nu and their derivatives at one point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BesselIK {
    /// I_nu(x)
    pub i: f64,
    /// K_nu(x)
    pub k: f64,
    /// I'_nu(x)
    pub ip: f64,
    /// K'_nu(x)
    pub kp: f64,
}

/// Modified Bessel functions of the first and second kind for `nu >= 0`, `x > 0`
pub fn besselik(nu: f64, x: f64) -> Result<BesselIK> {
    if !(nu >= 0.0 && x > 0.0) {
        return Err(Error::InvalidArgument {
            arg: "nu, x",
            reason: format!("besselik needs nu >= 0 and x > 0, got nu = {nu}, x = {x}"),
        });
    }

    let nl = (nu + 0.5) as usize;
    let xmu = nu - nl as f64;
    let xmu2 = xmu * xmu;
    let xi = 1.0 / x;
    let xi2 = 2.0 * xi;

    // CF1: I'_nu / I_nu
    let mut h = (nu * xi).max(TINY);
    let mut b = xi2 * nu;
    let mut d = 0.0;
    let mut c = h;
    let mut converged = false;
    for _ in 0..MAX_ITER {
        b += xi2;
        d = 1.0 / (b + d);
        c = b + 1.0 / c;
        let del = c * d;
        h *= del;
        if (del - 1.0).abs() <= EPSILON_F64 {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(not_converged("besselik", "CF1", x));
    }

    let mut ril = TINY;
    let mut ripl = h * ril;
    let ril1 = ril;
    let rip1 = ripl;
    let mut fact = nu * xi;
    for _ in 0..nl {
        let ritemp = fact * ril + ripl;
        fact -= xi;
        ripl = fact * ritemp + ril;
        ril = ritemp;
    }
    let f = ripl / ril;

    let (mut rkmu, mut rk1) = if x < XMIN {
        let x2 = 0.5 * x;
        let pimu = PI * xmu;
        let fact = if pimu.abs() < EPSILON_F64 {
            1.0
        } else {
            pimu / pimu.sin()
        };
        let d = -x2.ln();
        let e = xmu * d;
        let fact2 = if e.abs() < EPSILON_F64 {
            1.0
        } else {
            e.sinh() / e
        };
        let (gam1, gam2, gampl, gammi) = temme_gammas(xmu);
        let mut ff = fact * (gam1 * e.cosh() + gam2 * fact2 * d);
        let mut sum = ff;
        let e = e.exp();
        let mut p = 0.5 * e / gampl;
        let mut q = 0.5 / (e * gammi);
        let mut c = 1.0;
        let d = x2 * x2;
        let mut sum1 = p;
        let mut converged = false;
        for i in 1..=MAX_ITER {
            let fi = i as f64;
            ff = (fi * ff + p + q) / (fi * fi - xmu2);
            c *= d / fi;
            p /= fi - xmu;
            q /= fi + xmu;
            let del = c * ff;
            sum += del;
            sum1 += c * (p - fi * ff);
            if del.abs() < sum.abs() * EPSILON_F64 {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(not_converged("besselik", "Temme series", x));
        }
        (sum, sum1 * xi2)
    } else {
        // Steed's CF2 with Thompson-Barnett summation for K
        let mut b = 2.0 * (1.0 + x);
        let mut d = 1.0 / b;
        let mut h = d;
        let mut delh = d;
        let mut q1 = 0.0;
        let mut q2 = 1.0;
        let a1 = 0.25 - xmu2;
        let mut q = a1;
        let mut c = a1;
        let mut a = -a1;
        let mut sum = 1.0 + q * delh;
        let mut converged = false;
        for i in 1..MAX_ITER {
            let fi = i as f64;
            a -= 2.0 * fi;
            c = -a * c / (fi + 1.0);
            let qnew = (q1 - b * q2) / a;
            q1 = q2;
            q2 = qnew;
            q += c * qnew;
            b += 2.0;
            d = 1.0 / (b + a * d);
            delh *= b * d - 1.0;
            h += delh;
            let dels = q * delh;
            sum += dels;
            if (dels / sum).abs() < EPSILON_F64 {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(not_converged("besselik", "CF2", x));
        }
        h *= a1;
        let rkmu = (PI / (2.0 * x)).sqrt() * (-x).exp() / sum;
        (rkmu, rkmu * (xmu + x + 0.5 - h) * xi)
    };

    let rkmup = xmu * xi * rkmu - rk1;
    let rimu = xi / (f * rkmu - rkmup);
    let i = rimu * ril1 / ril;
    let ip = rimu * rip1 / ril;
    for n in 1..=nl {
        let rktemp = (xmu + n as f64) * xi2 * rk1 + rkmu;
        rkmu = rk1;
        rk1 = rktemp;
    }
    Ok(BesselIK {
        i,
        k: rkmu,
        ip,
        kp: nu * xi * rkmu - rk1,
    })
}

// ============================================================================
// Public kernels
// ============================================================================

fn is_integer(v: f64) -> bool {
    v == v.floor()
}

/// (-1)^n for an integral `v`
fn parity_sign(v: f64) -> f64 {
    if (v.abs() % 2.0) == 1.0 { -1.0 } else { 1.0 }
}

/// J_v(x) and Y_v(x) for any real order and x > 0
fn jy_signed(v: f64, x: f64) -> Result<(f64, f64)> {
    let mu = v.abs();
    let jy = besseljy(mu, x)?;
    if v >= 0.0 {
        return Ok((jy.j, jy.y));
    }
    if is_integer(mu) {
        let sign = parity_sign(mu);
        return Ok((sign * jy.j, sign * jy.y));
    }
    let (s, c) = (mu * PI).sin_cos();
    Ok((c * jy.j - s * jy.y, s * jy.j + c * jy.y))
}

/// Bessel function of the first kind J_v(x)
///
/// Negative `x` is allowed for integer orders only (NaN otherwise).
pub fn jv_scalar(v: f64, x: f64) -> Result<f64> {
    if v.is_nan() || x.is_nan() {
        return Ok(f64::NAN);
    }
    if x == 0.0 {
        return Ok(if v == 0.0 {
            1.0
        } else if v > 0.0 || is_integer(v) {
            0.0
        } else {
            f64::INFINITY
        });
    }
    if x < 0.0 {
        if !is_integer(v) {
            return Ok(f64::NAN);
        }
        return Ok(parity_sign(v) * jv_scalar(v, -x)?);
    }
    if x.is_infinite() {
        return Ok(0.0);
    }
    Ok(jy_signed(v, x)?.0)
}

/// Bessel function of the second kind Y_v(x)
///
/// `Y_v(0) = -inf`; negative `x` gives NaN.
pub fn yv_scalar(v: f64, x: f64) -> Result<f64> {
    if v.is_nan() || x.is_nan() || x < 0.0 {
        return Ok(f64::NAN);
    }
    if x == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if x.is_infinite() {
        return Ok(0.0);
    }
    Ok(jy_signed(v, x)?.1)
}

/// Modified Bessel function of the first kind I_v(x)
pub fn iv_scalar(v: f64, x: f64) -> Result<f64> {
    if v.is_nan() || x.is_nan() {
        return Ok(f64::NAN);
    }
    if x == 0.0 {
        return Ok(if v == 0.0 {
            1.0
        } else if v > 0.0 || is_integer(v) {
            0.0
        } else {
            f64::INFINITY
        });
    }
    if x < 0.0 {
        if !is_integer(v) {
            return Ok(f64::NAN);
        }
        return Ok(parity_sign(v) * iv_scalar(v, -x)?);
    }
    if x.is_infinite() {
        return Ok(f64::INFINITY);
    }
    let mu = v.abs();
    let ik = besselik(mu, x)?;
    if v >= 0.0 || is_integer(mu) {
        return Ok(ik.i);
    }
    Ok(ik.i + 2.0 / PI * (mu * PI).sin() * ik.k)
}

/// Modified Bessel function of the second kind K_v(x)
///
/// Even in the order. `K_v(0) = +inf`; negative `x` gives NaN.
pub fn kv_scalar(v: f64, x: f64) -> Result<f64> {
    if v.is_nan() || x.is_nan() || x < 0.0 {
        return Ok(f64::NAN);
    }
    if x == 0.0 {
        return Ok(f64::INFINITY);
    }
    if x.is_infinite() {
        return Ok(0.0);
    }
    Ok(besselik(v.abs(), x)?.k)
}

/// Hankel function of the first kind H1_v(x) = J_v(x) + i Y_v(x)
pub fn hankel1_scalar(v: f64, x: f64) -> Result<Complex128> {
    Ok(Complex128::new(jv_scalar(v, x)?, yv_scalar(v, x)?))
}

/// Hankel function of the second kind H2_v(x) = J_v(x) - i Y_v(x)
pub fn hankel2_scalar(v: f64, x: f64) -> Result<Complex128> {
    Ok(Complex128::new(jv_scalar(v, x)?, -yv_scalar(v, x)?))
}
