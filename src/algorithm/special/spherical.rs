//! Spherical and Riccati-Bessel sequences
//!
//! Every routine returns `(values, derivatives)` for orders `0..=n`. First
//! kind sequences use Miller's backward recurrence, normalized against the
//! closed form of the lowest orders; second kind sequences recur upward
//! until they overflow.

/// Rescale threshold for the backward recurrence
const RESCALE: f64 = 1e250;

/// Argument below which x is treated as zero
const ZERO_ARG: f64 = 1e-100;

/// Argument below which second-kind functions are reported as infinite
const POLE_ARG: f64 = 1e-60;

/// Order to start the backward recurrence from
fn start_order(n: usize, x: f64) -> usize {
    let base = n.max(x.abs().ceil() as usize);
    base + (160.0 * base as f64).sqrt() as usize + 20
}

/// Backward recurrence for f_k = (2k+3)/x f_{k+1} + sign f_{k+2}
///
/// `sign = -1` yields a multiple of j_k, `sign = +1` a multiple of i_k.
/// Returns unnormalized values for orders `0..=n`.
fn miller_backward(n: usize, x: f64, sign: f64) -> Vec<f64> {
    let mut out = vec![0.0; n + 1];
    let mut f0 = 0.0;
    let mut f1 = 1e-100;
    for k in (0..=start_order(n, x)).rev() {
        let f = (2 * k + 3) as f64 * f1 / x + sign * f0;
        if k <= n {
            out[k] = f;
        }
        f0 = f1;
        f1 = f;
        if f.abs() > RESCALE {
            f0 /= RESCALE;
            f1 /= RESCALE;
            for v in out.iter_mut().skip(k) {
                *v /= RESCALE;
            }
        }
    }
    out
}

/// Spherical Bessel functions of the first kind j_k(x), k = 0..=n
pub fn sphj(n: usize, x: f64) -> (Vec<f64>, Vec<f64>) {
    let nn = n.max(1);
    let mut sj = vec![0.0; nn + 1];
    let mut dj = vec![0.0; nn + 1];
    if x.abs() < ZERO_ARG {
        sj[0] = 1.0;
        dj[1] = 1.0 / 3.0;
    } else {
        let (s, c) = x.sin_cos();
        let j0 = s / x;
        let j1 = (j0 - c) / x;
        sj = miller_backward(nn, x, -1.0);
        let scale = if j0.abs() > j1.abs() {
            j0 / sj[0]
        } else {
            j1 / sj[1]
        };
        sj.iter_mut().for_each(|v| *v *= scale);
        dj[0] = (c - j0) / x;
        for k in 1..=nn {
            dj[k] = sj[k - 1] - (k + 1) as f64 * sj[k] / x;
        }
    }
    sj.truncate(n + 1);
    dj.truncate(n + 1);
    (sj, dj)
}

/// Spherical Bessel functions of the second kind y_k(x), k = 0..=n
///
/// Orders whose magnitude passes 1e300 are reported as -inf (with +inf
/// derivative), as is every order for x near zero.
pub fn sphy(n: usize, x: f64) -> (Vec<f64>, Vec<f64>) {
    let nn = n.max(1);
    if x < POLE_ARG {
        return (vec![f64::NEG_INFINITY; n + 1], vec![f64::INFINITY; n + 1]);
    }
    let (s, c) = x.sin_cos();
    let mut sy = vec![f64::NEG_INFINITY; nn + 1];
    let mut dy = vec![f64::INFINITY; nn + 1];
    sy[0] = -c / x;
    sy[1] = (sy[0] - s) / x;
    let mut last = 1;
    for k in 2..=nn {
        let f = (2 * k - 1) as f64 * sy[k - 1] / x - sy[k - 2];
        if f.abs() >= 1e300 {
            break;
        }
        sy[k] = f;
        last = k;
    }
    dy[0] = (s + c / x) / x;
    for k in 1..=last {
        dy[k] = sy[k - 1] - (k + 1) as f64 * sy[k] / x;
    }
    sy.truncate(n + 1);
    dy.truncate(n + 1);
    (sy, dy)
}

/// Modified spherical Bessel functions of the first kind i_k(x), k = 0..=n
pub fn sphi(n: usize, x: f64) -> (Vec<f64>, Vec<f64>) {
    let nn = n.max(1);
    let mut si = vec![0.0; nn + 1];
    let mut di = vec![0.0; nn + 1];
    if x.abs() < ZERO_ARG {
        si[0] = 1.0;
        di[1] = 1.0 / 3.0;
    } else {
        let i0 = x.sinh() / x;
        si = miller_backward(nn, x, 1.0);
        let scale = i0 / si[0];
        si.iter_mut().for_each(|v| *v *= scale);
        di[0] = si[1];
        for k in 1..=nn {
            di[k] = si[k - 1] - (k + 1) as f64 * si[k] / x;
        }
    }
    si.truncate(n + 1);
    di.truncate(n + 1);
    (si, di)
}

/// Modified spherical Bessel functions of the second kind k_k(x), k = 0..=n
///
/// Normalized as k_n(x) = sqrt(π/(2x)) K_{n+1/2}(x).
pub fn sphk(n: usize, x: f64) -> (Vec<f64>, Vec<f64>) {
    let nn = n.max(1);
    if x < POLE_ARG {
        return (vec![f64::INFINITY; n + 1], vec![f64::NEG_INFINITY; n + 1]);
    }
    let mut sk = vec![f64::INFINITY; nn + 1];
    let mut dk = vec![f64::NEG_INFINITY; nn + 1];
    sk[0] = 0.5 * std::f64::consts::PI / x * (-x).exp();
    sk[1] = sk[0] * (1.0 + 1.0 / x);
    let mut last = 1;
    for k in 2..=nn {
        let f = (2 * k - 1) as f64 * sk[k - 1] / x + sk[k - 2];
        if f > 1e300 {
            break;
        }
        sk[k] = f;
        last = k;
    }
    dk[0] = -sk[1];
    for k in 1..=last {
        dk[k] = -sk[k - 1] - (k + 1) as f64 * sk[k] / x;
    }
    sk.truncate(n + 1);
    dk.truncate(n + 1);
    (sk, dk)
}

/// Riccati-Bessel functions x j_k(x) and their derivatives
pub fn rctj(n: usize, x: f64) -> (Vec<f64>, Vec<f64>) {
    let (sj, dj) = sphj(n, x);
    let values = sj.iter().map(|&j| x * j).collect();
    let derivatives = sj.iter().zip(&dj).map(|(&j, &d)| j + x * d).collect();
    (values, derivatives)
}

/// Riccati-Bessel functions x y_k(x) and their derivatives
pub fn rcty(n: usize, x: f64) -> (Vec<f64>, Vec<f64>) {
    if x < POLE_ARG {
        return (vec![f64::NEG_INFINITY; n + 1], vec![f64::INFINITY; n + 1]);
    }
    let (sy, dy) = sphy(n, x);
    let values = sy.iter().map(|&y| x * y).collect();
    let derivatives = sy.iter().zip(&dy).map(|(&y, &d)| y + x * d).collect();
    (values, derivatives)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rtol: f64) {
        let err = (actual - expected).abs() / expected.abs();
        assert!(err <= rtol, "expected {expected}, got {actual} (rel err {err:e})");
    }

    #[test]
    fn test_sphj_closed_forms() {
        let x = 2.5;
        let (sj, dj) = sphj(3, x);
        assert_eq!(sj.len(), 4);
        assert_close(sj[0], x.sin() / x, 1e-14);
        assert_close(sj[1], x.sin() / (x * x) - x.cos() / x, 1e-14);
        assert_close(sj[3], 0.10392046970240394, 1e-12);
        // j0' = -j1
        assert_close(dj[0], -sj[1], 1e-14);
    }

    #[test]
    fn test_sphj_at_zero_and_order_zero() {
        let (sj, dj) = sphj(2, 0.0);
        assert_eq!(sj, vec![1.0, 0.0, 0.0]);
        assert_eq!(dj[1], 1.0 / 3.0);
        let (sj, dj) = sphj(0, 1.0);
        assert_eq!(sj.len(), 1);
        assert_eq!(dj.len(), 1);
        assert_close(sj[0], 1.0_f64.sin(), 1e-14);
    }

    #[test]
    fn test_sphj_high_order_small_argument() {
        let (sj, _) = sphj(30, 0.5);
        assert_close(sj[10], 7.064123963661878e-14, 1e-11);
    }

    #[test]
    fn test_sphy_recurrence() {
        let x = 3.0;
        let (sy, dy) = sphy(5, x);
        assert_close(sy[0], -x.cos() / x, 1e-14);
        assert_close(sy[5], -2.2470233284653901, 1e-12);
        // y0' = -y1
        assert_close(dy[0], -sy[1], 1e-14);
        let (sy, dy) = sphy(2, 0.0);
        assert!(sy.iter().all(|&v| v == f64::NEG_INFINITY));
        assert!(dy.iter().all(|&v| v == f64::INFINITY));
    }

    #[test]
    fn test_modified_sequences() {
        let x = 1.5;
        let (si, di) = sphi(2, x);
        assert_close(si[0], x.sinh() / x, 1e-14);
        assert_close(si[1], (x * x.cosh() - x.sinh()) / (x * x), 1e-13);
        assert_close(di[0], si[1], 1e-14);
        let (sk, dk) = sphk(2, x);
        let k0 = 0.5 * std::f64::consts::PI / x * (-x).exp();
        assert_close(sk[0], k0, 1e-15);
        assert_close(sk[1], k0 * (1.0 + 1.0 / x), 1e-15);
        assert_close(dk[0], -sk[1], 1e-15);
    }

    #[test]
    fn test_riccati() {
        let x = 2.0;
        let (rj, dj) = rctj(1, x);
        assert_close(rj[0], x.sin(), 1e-14);
        assert_close(dj[0], x.cos(), 1e-13);
        let (ry, dy) = rcty(1, x);
        assert_close(ry[0], -x.cos(), 1e-14);
        assert_close(dy[0], x.sin(), 1e-13);
        let (rj, dj) = rctj(2, 0.0);
        assert_eq!(rj, vec![0.0, 0.0, 0.0]);
        assert_eq!(dj[0], 1.0);
    }
}
