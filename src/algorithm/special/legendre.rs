//! Legendre functions: P_n / Q_n sequences and associated P_n^m / Q_n^m tables

use super::NATIVE;
use crate::dtype::Complex128;
use crate::error::{Error, Result};

/// Row-major `(m + 1) x (n + 1)` table of associated Legendre values
///
/// Entry `(i, j)` holds the function of order `i` and degree `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendreTable {
    /// Highest order m
    pub m: usize,
    /// Highest degree n
    pub n: usize,
    /// Function values, row-major
    pub values: Vec<f64>,
    /// Derivatives, row-major
    pub derivatives: Vec<f64>,
}

impl LegendreTable {
    fn zeros(m: usize, n: usize) -> Self {
        let len = (m + 1) * (n + 1);
        Self {
            m,
            n,
            values: vec![0.0; len],
            derivatives: vec![0.0; len],
        }
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * (self.n + 1) + j
    }

    /// Value of order `i` and degree `j`
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        (i <= self.m && j <= self.n).then(|| self.values[self.idx(i, j)])
    }

    /// Derivative of order `i` and degree `j`
    pub fn derivative(&self, i: usize, j: usize) -> Option<f64> {
        (i <= self.m && j <= self.n).then(|| self.derivatives[self.idx(i, j)])
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.idx(i, j);
        self.values[k] = value;
    }

    fn set_derivative(&mut self, i: usize, j: usize, value: f64) {
        let k = self.idx(i, j);
        self.derivatives[k] = value;
    }

    fn get(&self, i: usize, j: usize) -> f64 {
        self.values[self.idx(i, j)]
    }

    /// Keep the leading `(m + 1) x (n + 1)` block
    fn shrink(self, m: usize, n: usize) -> Self {
        let mut out = Self::zeros(m, n);
        for i in 0..=m {
            for j in 0..=n {
                let src = self.idx(i, j);
                let dst = out.idx(i, j);
                out.values[dst] = self.values[src];
                out.derivatives[dst] = self.derivatives[src];
            }
        }
        out
    }
}

// ============================================================================
// Associated Legendre P
// ============================================================================

/// Associated Legendre functions P_j^i(x) for `0 <= i <= m`, `0 <= j <= n`
///
/// Includes the Condon-Shortley phase for |x| < 1. For |x| > 1 the
/// functions of the second branch are returned. Entries with `i > j` are 0.
pub fn lpmn(m: usize, n: usize, x: f64) -> LegendreTable {
    let mut t = LegendreTable::zeros(m, n);
    t.set(0, 0, 1.0);
    if n == 0 {
        return t;
    }

    if x.abs() == 1.0 {
        for j in 1..=n {
            let jf = j as f64;
            t.set(0, j, x.powi(j as i32));
            t.set_derivative(0, j, 0.5 * jf * (jf + 1.0) * x.powi(j as i32 + 1));
        }
        for j in 1..=n {
            let jf = j as f64;
            for i in 1..=m {
                if i == 1 {
                    t.set_derivative(i, j, f64::INFINITY);
                } else if i == 2 {
                    let d = -0.25 * (jf + 2.0) * (jf + 1.0) * jf * (jf - 1.0);
                    t.set_derivative(i, j, d * x.powi(j as i32 + 1));
                }
            }
        }
        return t;
    }

    let ls = if x.abs() > 1.0 { -1.0 } else { 1.0 };
    let mut xq = (ls * (1.0 - x * x)).sqrt();
    if x < -1.0 {
        xq = -xq;
    }
    let xs = ls * (1.0 - x * x);

    for i in 1..=m.min(n) {
        let prev = t.get(i - 1, i - 1);
        t.set(i, i, -ls * (2 * i - 1) as f64 * xq * prev);
    }
    for i in 0..=m.min(n - 1) {
        let diag = t.get(i, i);
        t.set(i, i + 1, (2 * i + 1) as f64 * x * diag);
    }
    for i in 0..=m {
        for j in (i + 2)..=n {
            let v = ((2 * j - 1) as f64 * x * t.get(i, j - 1)
                - (i + j - 1) as f64 * t.get(i, j - 2))
                / (j - i) as f64;
            t.set(i, j, v);
        }
    }

    for j in 1..=n {
        let jf = j as f64;
        let d = ls * jf * (t.get(0, j - 1) - x * t.get(0, j)) / xs;
        t.set_derivative(0, j, d);
    }
    for i in 1..=m {
        let fi = i as f64;
        for j in i..=n {
            let jf = j as f64;
            let d = ls * fi * x * t.get(i, j) / xs
                + (jf + fi) * (jf - fi + 1.0) / xq * t.get(i - 1, j);
            t.set_derivative(i, j, d);
        }
    }
    t
}

// ============================================================================
// Associated Legendre Q
// ============================================================================

/// Associated Legendre functions of the second kind Q_j^i(x), |x| < 1
///
/// |x| = 1 yields +inf everywhere. |x| > 1 is outside what the native
/// recurrence handles and is reported as a backend limitation.
pub fn lqmn(m: usize, n: usize, x: f64) -> Result<LegendreTable> {
    if x.abs() == 1.0 {
        let mut t = LegendreTable::zeros(m, n);
        t.values.fill(f64::INFINITY);
        t.derivatives.fill(f64::INFINITY);
        return Ok(t);
    }
    if x.abs() > 1.0 {
        return Err(Error::backend_limitation(
            NATIVE,
            "lqmn",
            format!("Q_n^m is only evaluated for |x| < 1, got x = {x}"),
        ));
    }

    let (mm, nn) = (m.max(1), n.max(1));
    let mut t = LegendreTable::zeros(mm, nn);
    let xs = 1.0 - x * x;
    let xq = xs.sqrt();
    let q0 = 0.5 * ((1.0 + x) / (1.0 - x)).ln();

    t.set(0, 0, q0);
    t.set(0, 1, x * q0 - 1.0);
    t.set(1, 0, -1.0 / xq);
    t.set(1, 1, -xq * (q0 + x / xs));
    for i in 0..=1 {
        for j in 2..=nn {
            let v = ((2 * j - 1) as f64 * x * t.get(i, j - 1)
                - (j + i - 1) as f64 * t.get(i, j - 2))
                / (j - i) as f64;
            t.set(i, j, v);
        }
    }
    for j in 0..=nn {
        let jf = j as f64;
        for i in 2..=mm {
            let fi = i as f64;
            let v = -2.0 * (fi - 1.0) * x / xq * t.get(i - 1, j)
                - (jf + fi - 1.0) * (jf - fi + 2.0) * t.get(i - 2, j);
            t.set(i, j, v);
        }
    }

    t.set_derivative(0, 0, 1.0 / xs);
    for j in 1..=nn {
        let d = j as f64 * (t.get(0, j - 1) - x * t.get(0, j)) / xs;
        t.set_derivative(0, j, d);
    }
    for j in 0..=nn {
        let jf = j as f64;
        for i in 1..=mm {
            let fi = i as f64;
            let d = fi * x / xs * t.get(i, j)
                + (fi + jf) * (jf - fi + 1.0) / xq * t.get(i - 1, j);
            t.set_derivative(i, j, d);
        }
    }
    Ok(t.shrink(m, n))
}

// ============================================================================
// Legendre sequences
// ============================================================================

/// Legendre polynomials P_k(x) and derivatives, k = 0..=n
pub fn lpn(n: usize, x: f64) -> (Vec<f64>, Vec<f64>) {
    let mut pn = vec![0.0; n + 1];
    let mut pd = vec![0.0; n + 1];
    pn[0] = 1.0;
    if n == 0 {
        return (pn, pd);
    }
    pn[1] = x;
    pd[1] = 1.0;
    let (mut p0, mut p1) = (1.0, x);
    for k in 2..=n {
        let kf = k as f64;
        let pf = (2.0 * kf - 1.0) / kf * x * p1 - (kf - 1.0) / kf * p0;
        pn[k] = pf;
        pd[k] = if x.abs() == 1.0 {
            0.5 * x.powi(k as i32 + 1) * kf * (kf + 1.0)
        } else {
            kf * (p1 - x * pf) / (1.0 - x * x)
        };
        p0 = p1;
        p1 = pf;
    }
    (pn, pd)
}

/// Legendre polynomials P_k(z) and derivatives for complex z, k = 0..=n
pub fn clpn(n: usize, z: Complex128) -> (Vec<Complex128>, Vec<Complex128>) {
    if z.im == 0.0 {
        let (pn, pd) = lpn(n, z.re);
        let lift = |v: Vec<f64>| v.into_iter().map(Complex128::from).collect();
        return (lift(pn), lift(pd));
    }
    let mut pn = vec![Complex128::ZERO; n + 1];
    let mut pd = vec![Complex128::ZERO; n + 1];
    pn[0] = Complex128::ONE;
    if n == 0 {
        return (pn, pd);
    }
    pn[1] = z;
    pd[1] = Complex128::ONE;
    let one_minus_z2 = Complex128::ONE - z * z;
    let (mut p0, mut p1) = (Complex128::ONE, z);
    for k in 2..=n {
        let kf = k as f64;
        let pf = z * p1 * ((2.0 * kf - 1.0) / kf) - p0 * ((kf - 1.0) / kf);
        pn[k] = pf;
        pd[k] = (p1 - z * pf) * kf / one_minus_z2;
        p0 = p1;
        p1 = pf;
    }
    (pn, pd)
}

/// Legendre functions of the second kind Q_k(x) and derivatives, k = 0..=n
///
/// Native evaluation covers |x| < 1; |x| = 1 yields +inf.
pub fn lqnb(n: usize, x: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.abs() == 1.0 {
        return Ok((vec![f64::INFINITY; n + 1], vec![f64::INFINITY; n + 1]));
    }
    if x.abs() > 1.0 {
        return Err(Error::backend_limitation(
            NATIVE,
            "lqnb",
            format!("Q_n is only evaluated for |x| < 1, got x = {x}"),
        ));
    }
    let nn = n.max(1);
    let mut qn = vec![0.0; nn + 1];
    let mut qd = vec![0.0; nn + 1];
    let xs = 1.0 - x * x;
    qn[0] = 0.5 * ((1.0 + x) / (1.0 - x)).ln();
    qn[1] = x * qn[0] - 1.0;
    qd[0] = 1.0 / xs;
    qd[1] = qn[0] + x * qd[0];
    for k in 2..=nn {
        let kf = k as f64;
        qn[k] = ((2.0 * kf - 1.0) * x * qn[k - 1] - (kf - 1.0) * qn[k - 2]) / kf;
        qd[k] = (qn[k - 1] - x * qn[k]) * kf / xs;
    }
    qn.truncate(n + 1);
    qd.truncate(n + 1);
    Ok((qn, qd))
}
