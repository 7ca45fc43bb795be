//! Integration tests for special mathematical functions
//!
//! Tests the function catalog on the native backend.

mod common;

use common::assert_allclose_f64;
use numr_special::dtype::{Complex128, DType, Scalar};
use numr_special::error::Error;
use numr_special::kernels::NativeBackend;
use numr_special::special::{Special, SpecialOptions};
use numr_special::vectorize::Value;
use std::f64::consts::PI;

fn value(v: Value) -> f64 {
    v.as_f64().expect("real scalar result")
}

// ============================================================================
// Element-wise Functions
// ============================================================================

#[test]
fn test_sinc() {
    let sp = Special::default();
    let out = sp.sinc(vec![0.0, 0.5, 1.0]).unwrap().to_f64_vec().unwrap();
    assert_allclose_f64(&out, &[1.0, 2.0 / PI, 0.0], 1e-15, 1e-15, "sinc");
}

#[test]
fn test_inverse_error_functions() {
    let sp = Special::default();
    let erfinv = value(sp.erfinv(0.5).unwrap());
    let erfcinv = value(sp.erfcinv(0.5).unwrap());
    assert_allclose_f64(&[erfinv, erfcinv], &[0.4769362762044699; 2], 1e-12, 0.0, "erfinv");
}

#[test]
fn test_gamma_family() {
    let sp = Special::default();
    assert_allclose_f64(&[value(sp.gamma(5.0).unwrap())], &[24.0], 1e-13, 0.0, "gamma");
    assert_allclose_f64(
        &[value(sp.gammaln(10.0).unwrap())],
        &[12.801827480081469],
        1e-13,
        0.0,
        "gammaln",
    );
    let euler_gamma = 0.5772156649015329;
    assert_allclose_f64(&[value(sp.digamma(1.0).unwrap())], &[-euler_gamma], 1e-12, 0.0, "psi");
    assert_eq!(sp.digamma(2.5).unwrap(), sp.psi(2.5).unwrap());
}

#[test]
fn test_polygamma_and_zeta() {
    let sp = Special::default();
    let zeta2 = PI * PI / 6.0;
    assert_allclose_f64(&[value(sp.zeta(2.0, 1.0).unwrap())], &[zeta2], 1e-12, 0.0, "zeta");
    let out = sp.polygamma(vec![0.0, 1.0], 1.0).unwrap().to_f64_vec().unwrap();
    assert_allclose_f64(&out, &[-0.5772156649015329, zeta2], 1e-12, 0.0, "polygamma");
}

#[test]
fn test_hyp0f1_reduces_to_bessel() {
    let sp = Special::default();
    // 0F1(; 1; z) = I_0(2 sqrt(z)) for z > 0 and J_0(2 sqrt(-z)) for z < 0
    let out = sp.hyp0f1(1.0, vec![1.0, -1.0, 0.0]).unwrap().to_f64_vec().unwrap();
    assert_allclose_f64(
        &out,
        &[2.2795853023360673, 0.22389077914123567, 1.0],
        1e-12,
        1e-15,
        "hyp0f1",
    );
}

#[test]
fn test_assoc_laguerre() {
    let sp = Special::default();
    // L_2(x) = (x^2 - 4x + 2) / 2, L_1^1(x) = 2 - x
    let l2 = value(sp.assoc_laguerre0(1.0, 2.0).unwrap());
    let l11 = value(sp.assoc_laguerre(0.5, 1.0, 1.0).unwrap());
    assert_allclose_f64(&[l2, l11], &[-0.5, 1.5], 1e-13, 1e-14, "assoc_laguerre");
}

#[test]
fn test_bessel_broadcast_grid() {
    let sp = Special::default();
    let out = sp.jv(vec![0.0, 1.0], vec![vec![1.0], vec![2.0]]).unwrap();
    assert_eq!(out.shape(), &[2, 2]);
    assert_allclose_f64(
        &out.to_f64_vec().unwrap(),
        &[
            0.7651976865579666,
            0.44005058574493355,
            0.22389077914123567,
            0.5767248077568734,
        ],
        1e-12,
        0.0,
        "jv",
    );
    let k = value(sp.kv(0.5, 1.0).unwrap());
    assert_allclose_f64(&[k], &[(PI / 2.0).sqrt() * (-1.0f64).exp()], 1e-12, 0.0, "kv");
}

#[test]
fn test_hankel_is_complex() {
    let sp = Special::default();
    let h = sp.hankel1(0.0, 1.0).unwrap();
    assert_eq!(h.dtype(), DType::Complex128);
    let Some(Scalar::Complex128(z)) = h.as_scalar() else {
        panic!("expected a complex scalar");
    };
    assert_allclose_f64(
        &[z.re, z.im],
        &[0.7651976865579666, 0.08825696421567697],
        1e-12,
        0.0,
        "hankel1",
    );
}

// ============================================================================
// Spherical Harmonics
// ============================================================================

#[test]
fn test_sph_harm_low_degrees() {
    let sp = Special::default();
    let y00 = sp.sph_harm(0, 0, 0.3, 1.1).unwrap();
    assert_eq!(y00.dtype(), DType::Complex128);
    let Some(Scalar::Complex128(z)) = y00.as_scalar() else {
        panic!("expected a complex scalar");
    };
    assert_allclose_f64(&[z.re, z.im], &[0.5 / PI.sqrt(), 0.0], 1e-14, 1e-15, "Y_0^0");

    // Y_1^0 = sqrt(3 / 4pi) cos(phi)
    let y10 = sp.sph_harm(0, 1, 0.0, vec![0.0, PI / 3.0]).unwrap();
    let re: Vec<f64> = y10
        .to_scalars()
        .into_iter()
        .map(|s| s.to_complex().re)
        .collect();
    let c = (3.0 / (4.0 * PI)).sqrt();
    assert_allclose_f64(&re, &[c, c * 0.5], 1e-13, 1e-15, "Y_1^0");
}

#[test]
fn test_sph_harm_normalization_uses_degree() {
    // Y_2^1(0, phi) = -3 cos(phi) sin(phi) sqrt(5 / 24pi)
    let sp = Special::default();
    let z = sp.sph_harm(1, 2, 0.0, 0.7).unwrap();
    let z = z.as_scalar().map(|s| s.to_complex()).unwrap();
    assert_allclose_f64(&[z.re, z.im], &[-0.38065380808526006, 0.0], 1e-13, 1e-15, "Y_2^1");
}

#[test]
fn test_sph_harm_negative_order_fails_whole_call() {
    let sp = Special::default();
    let err = sp.sph_harm(vec![1, -1], 2, 0.3, 0.4).unwrap_err();
    assert_eq!(err, Error::domain("m", "m must be a non-negative integer."));
    let err = sp.sph_harm(0, -2, 0.3, 0.4).unwrap_err();
    assert_eq!(err, Error::domain("n", "n must be a non-negative integer."));
}

#[test]
fn test_sph_harm_order_above_degree() {
    let sp = Special::default();
    let z = sp.sph_harm(2, 1, 0.0, 0.5).unwrap();
    assert_eq!(z.as_scalar(), Some(Scalar::Complex128(Complex128::ZERO)));
}

#[test]
fn test_sph_harm_magnitude_independent_of_azimuth() {
    let sp = Special::default();
    let out = sp.sph_harm(1, 2, vec![0.0, 1.0, 2.0], 0.7).unwrap();
    let mags: Vec<f64> = out
        .to_scalars()
        .into_iter()
        .map(|s| s.to_complex().magnitude())
        .collect();
    assert_allclose_f64(&mags[1..], &[mags[0], mags[0]], 1e-14, 0.0, "|Y_2^1|");
}

// ============================================================================
// Bessel Derivatives
// ============================================================================

#[test]
fn test_second_derivative_expands_recurrence() {
    let sp = Special::default();
    let (v, z) = (1.5, 2.0);
    let f = |order: f64| value(sp.jv(order, z).unwrap());
    let expected = ((f(v - 2.0) - f(v)) / 2.0 - (f(v) - f(v + 2.0)) / 2.0) / 2.0;
    assert_eq!(value(sp.jvp(v, z, 2).unwrap()), expected);
}

#[test]
fn test_first_derivatives_of_j_and_y() {
    let sp = Special::default();
    let z = 1.3;
    // Y_0' = -Y_1 and J_1' = J_0 - J_1 / z
    let y1 = value(sp.yv(1.0, z).unwrap());
    let j0 = value(sp.jv(0.0, z).unwrap());
    let j1 = value(sp.jv(1.0, z).unwrap());
    let d = [
        value(sp.yvp(0.0, z, 1).unwrap()),
        value(sp.jvp(1.0, z, 1).unwrap()),
    ];
    assert_allclose_f64(&d, &[-y1, j0 - j1 / z], 1e-12, 1e-15, "first derivatives");
}

#[test]
fn test_modified_families_use_the_same_difference() {
    let sp = Special::default();
    let (v, z) = (0.5, 1.3);
    let i = |order: f64| value(sp.iv(order, z).unwrap());
    let k = |order: f64| value(sp.kv(order, z).unwrap());
    assert_eq!(value(sp.ivp(v, z, 1).unwrap()), (i(v - 1.0) - i(v + 1.0)) / 2.0);
    assert_eq!(value(sp.kvp(v, z, 1).unwrap()), (k(v - 1.0) - k(v + 1.0)) / 2.0);
}

#[test]
fn test_hankel_derivatives_split_into_bessel_parts() {
    let sp = Special::default();
    let (v, z) = (0.0, 2.5);
    let jp = value(sp.jvp(v, z, 1).unwrap());
    let yp = value(sp.yvp(v, z, 1).unwrap());
    let h1 = sp.h1vp(v, z, 1).unwrap().as_scalar().unwrap().to_complex();
    let h2 = sp.h2vp(v, z, 1).unwrap().as_scalar().unwrap().to_complex();
    assert_allclose_f64(&[h1.re, h1.im], &[jp, yp], 1e-12, 1e-15, "h1vp");
    assert_allclose_f64(&[h2.re, h2.im], &[jp, -yp], 1e-12, 1e-15, "h2vp");
}

#[test]
fn test_derivative_rejects_negative_order() {
    let sp = Special::default();
    for result in [sp.ivp(1.0, 1.0, -2), sp.h2vp(1.0, 1.0, -1)] {
        assert_eq!(
            result.unwrap_err(),
            Error::domain("n", "n must be a non-negative integer.")
        );
    }
}

#[test]
fn test_memoized_derivatives_are_observably_equal() {
    let plain = Special::default();
    let cached = Special::with_options(
        NativeBackend,
        SpecialOptions::default().with_memoized_derivatives(true),
    );
    let z = vec![0.5, 1.5, 3.0];
    for n in 0..6 {
        assert_eq!(
            plain.kvp(0.5, z.clone(), n).unwrap(),
            cached.kvp(0.5, z.clone(), n).unwrap()
        );
    }
    // repeated calls see no state left over from earlier ones
    assert_eq!(
        cached.jvp(2.0, 1.5, 4).unwrap(),
        cached.jvp(2.0, 1.5, 4).unwrap()
    );
    assert_eq!(
        plain.h1vp(1.0, 2.5, 3).unwrap(),
        cached.h1vp(1.0, 2.5, 3).unwrap()
    );
}

// ============================================================================
// Zeros and Sequences
// ============================================================================

#[test]
fn test_bessel_zeros() {
    let sp = Special::default();
    let jn = sp.jn_zeros(0, 3).unwrap();
    assert_allclose_f64(
        jn.as_slice(),
        &[2.404825557695773, 5.520078110286311, 8.653727912911013],
        1e-12,
        0.0,
        "J0 zeros",
    );
    let jnp = sp.jnp_zeros(1, 2).unwrap();
    assert_allclose_f64(
        jnp.as_slice(),
        &[1.8411837813406593, 5.331442773525033],
        1e-12,
        0.0,
        "J1' zeros",
    );
    let yn = sp.yn_zeros(0, 2).unwrap();
    assert_allclose_f64(
        yn.as_slice(),
        &[0.8935769662791675, 3.957678419314858],
        1e-12,
        0.0,
        "Y0 zeros",
    );
}

#[test]
fn test_jnjnp_zeros_ordering() {
    let sp = Special::default();
    let all = sp.jnjnp_zeros(3).unwrap();
    assert_allclose_f64(
        all.zeros.as_slice(),
        &[1.8411837813406593, 2.404825557695773, 3.0542369282271404],
        1e-12,
        0.0,
        "jnjnp zeros",
    );
    assert_eq!(all.orders.as_slice(), &[1, 0, 2]);
    assert_eq!(all.kinds.as_slice(), &[1, 0, 1]);
    assert_eq!(all.serials.as_slice(), &[1, 1, 1]);
}

#[test]
fn test_y0_zeros_real_domain() {
    let sp = Special::default();
    let y0 = sp.y0_zeros(2, false).unwrap();
    let re: Vec<f64> = y0.zeros.as_slice().iter().map(|z| z.re).collect();
    assert_allclose_f64(&re, &[0.8935769662791675, 3.957678419314858], 1e-12, 0.0, "Y0");
    // Y0'(z) = -Y1(z)
    let jp = y0.values.as_slice()[0].re;
    let y1 = value(sp.yv(1.0, re[0]).unwrap());
    assert_allclose_f64(&[jp], &[-y1], 1e-10, 1e-12, "Y0' at zero");
}

#[test]
fn test_spherical_sequences() {
    let sp = Special::default();
    let x: f64 = 0.8;
    let seq = sp.sph_jnyn(1, x).unwrap();
    let j = seq.first_kind.values.to_array::<f64>().unwrap();
    let y = seq.second_kind.values.to_array::<f64>().unwrap();
    assert_allclose_f64(
        j.as_slice(),
        &[x.sin() / x, x.sin() / (x * x) - x.cos() / x],
        1e-13,
        0.0,
        "j_n",
    );
    assert_allclose_f64(
        y.as_slice(),
        &[-x.cos() / x, -x.cos() / (x * x) - x.sin() / x],
        1e-13,
        0.0,
        "y_n",
    );
}

#[test]
fn test_riccati_jn() {
    let sp = Special::default();
    let x: f64 = 1.7;
    let seq = sp.riccati_jn(1, x).unwrap();
    assert_allclose_f64(
        seq.values.as_slice(),
        &[x.sin(), x.sin() / x - x.cos()],
        1e-13,
        0.0,
        "riccati",
    );
}

#[test]
fn test_legendre_sequences() {
    let sp = Special::default();
    let x = 0.3;
    let p = sp.lpn(2, x).unwrap().values.to_array::<f64>().unwrap();
    assert_allclose_f64(p.as_slice(), &[1.0, x, 1.5 * x * x - 0.5], 1e-14, 1e-15, "P_n");
    let q = sp.lqn(1, x).unwrap().values.to_array::<f64>().unwrap();
    let q0 = 0.5 * ((1.0 + x) / (1.0 - x)).ln();
    assert_allclose_f64(q.as_slice(), &[q0, x * q0 - 1.0], 1e-14, 1e-15, "Q_n");
}

#[test]
fn test_number_tables() {
    let sp = Special::default();
    let b = sp.bernoulli(4).unwrap();
    assert_allclose_f64(
        b.as_slice(),
        &[1.0, -0.5, 1.0 / 6.0, 0.0, -1.0 / 30.0],
        1e-10,
        1e-15,
        "bernoulli",
    );
    let e = sp.euler(4).unwrap();
    assert_allclose_f64(e.as_slice(), &[1.0, 0.0, -1.0, 0.0, 5.0], 0.0, 1e-12, "euler");
}
