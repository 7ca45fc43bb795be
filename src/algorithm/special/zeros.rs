//! Real zeros of Bessel functions and their derivatives
//!
//! Zeros are bracketed by scanning with a fixed step (smaller than the
//! spacing between consecutive zeros of any integer-order Bessel function
//! or its derivative) and then refined by bisection to machine precision.

use super::{BesselJY, besseljy};
use crate::error::Result;

const SCAN_STEP: f64 = 0.25;

/// Which member of the J/Y pair a scan follows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cylinder {
    J,
    Jp,
    Y,
    Yp,
}

impl Cylinder {
    fn pick(self, jy: &BesselJY) -> f64 {
        match self {
            Self::J => jy.j,
            Self::Jp => jy.jp,
            Self::Y => jy.y,
            Self::Yp => jy.yp,
        }
    }
}

fn eval(order: f64, x: f64, which: Cylinder) -> Result<f64> {
    Ok(which.pick(&besseljy(order, x)?))
}

/// Refine a sign change of `which` inside `[lo, hi]`
fn bisect(order: f64, which: Cylinder, mut lo: f64, mut hi: f64, mut f_lo: f64) -> Result<f64> {
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        let f_mid = eval(order, mid, which)?;
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if (f_mid < 0.0) == (f_lo < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}

/// Scan from the first point that precedes every positive zero
fn scan_start(order: f64) -> f64 {
    (0.9 * order).max(1e-3)
}

/// First `count` positive zeros of `which` for an integer order
fn first_zeros(order: f64, which: Cylinder, count: usize) -> Result<Vec<f64>> {
    let mut zeros = Vec::with_capacity(count);
    let mut lo = scan_start(order);
    let mut f_lo = eval(order, lo, which)?;
    while zeros.len() < count {
        let hi = lo + SCAN_STEP;
        let f_hi = eval(order, hi, which)?;
        if f_hi == 0.0 {
            zeros.push(hi);
        } else if (f_lo < 0.0) != (f_hi < 0.0) && f_lo != 0.0 {
            zeros.push(bisect(order, which, lo, hi, f_lo)?);
        }
        lo = hi;
        f_lo = f_hi;
    }
    Ok(zeros)
}

/// Positive zeros of `which` below `limit`
fn zeros_below(order: f64, which: Cylinder, limit: f64) -> Result<Vec<f64>> {
    let mut zeros = Vec::new();
    let mut lo = scan_start(order);
    if lo >= limit {
        return Ok(zeros);
    }
    let mut f_lo = eval(order, lo, which)?;
    while lo < limit {
        let hi = lo + SCAN_STEP;
        let f_hi = eval(order, hi, which)?;
        if f_hi == 0.0 {
            zeros.push(hi);
        } else if (f_lo < 0.0) != (f_hi < 0.0) && f_lo != 0.0 {
            zeros.push(bisect(order, which, lo, hi, f_lo)?);
        }
        lo = hi;
        f_lo = f_hi;
    }
    zeros.retain(|&z| z < limit);
    Ok(zeros)
}

// ============================================================================
// Public routines
// ============================================================================

/// First `nt` zeros of J_n, J_n', Y_n and Y_n' for integer order `n`
///
/// The zero of J_n' at the origin (n >= 1) is not counted.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderZeros {
    /// Zeros of J_n
    pub jn: Vec<f64>,
    /// Zeros of J_n'
    pub jnp: Vec<f64>,
    /// Zeros of Y_n
    pub yn: Vec<f64>,
    /// Zeros of Y_n'
    pub ynp: Vec<f64>,
}

/// Zeros of the four cylinder functions of order `n`
pub fn jyzo(n: usize, nt: usize) -> Result<CylinderZeros> {
    let order = n as f64;
    Ok(CylinderZeros {
        jn: first_zeros(order, Cylinder::J, nt)?,
        jnp: first_zeros(order, Cylinder::Jp, nt)?,
        yn: first_zeros(order, Cylinder::Y, nt)?,
        ynp: first_zeros(order, Cylinder::Yp, nt)?,
    })
}

/// One zero in the combined J_n / J_n' ordering
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderedZero {
    /// Location of the zero
    pub value: f64,
    /// Order n of the Bessel function
    pub order: usize,
    /// 1-based index of the zero among those of the same function
    pub serial: usize,
    /// 0 for a zero of J_n, 1 for a zero of J_n'
    pub kind: u8,
}

/// First `nt` zeros of J_n(x) and J_n'(x) over all orders, in ascending order
///
/// Ties are broken by order, then by kind. x = 0 is never included, so the
/// zeros of J_0' coincide with (and are listed next to) those of J_1.
pub fn jdzo(nt: usize) -> Result<Vec<OrderedZero>> {
    if nt == 0 {
        return Ok(Vec::new());
    }
    // About limit²/π zeros of J_n and J_n' lie below `limit`
    let mut limit = (std::f64::consts::PI * nt as f64).sqrt() + 5.0;
    loop {
        let mut all = Vec::new();
        let mut order = 0usize;
        while scan_start(order as f64) < limit {
            for (kind, which) in [(0u8, Cylinder::J), (1u8, Cylinder::Jp)] {
                // J_0' = -J_1
                let zeros = if order == 0 && which == Cylinder::Jp {
                    zeros_below(1.0, Cylinder::J, limit)?
                } else {
                    zeros_below(order as f64, which, limit)?
                };
                all.extend(zeros.into_iter().enumerate().map(|(i, value)| OrderedZero {
                    value,
                    order,
                    serial: i + 1,
                    kind,
                }));
            }
            order += 1;
        }
        if all.len() >= nt {
            all.sort_by(|a, b| {
                a.value
                    .total_cmp(&b.value)
                    .then(a.order.cmp(&b.order))
                    .then(a.kind.cmp(&b.kind))
            });
            all.truncate(nt);
            return Ok(all);
        }
        limit *= 1.25;
    }
}
