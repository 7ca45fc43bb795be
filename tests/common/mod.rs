//! Common test utilities
#![allow(dead_code)]

use numr_special::dtype::Complex128;
use numr_special::error::Result;
use numr_special::kernels::{NativeBackend, ScalarKernels};
use numr_special::routines::*;
use numr_special::tensor::NdArray;
use parking_lot::Mutex;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Backend that records every routine it is asked for
///
/// Scalar kernels forward to [`NativeBackend`]; the Mathieu characteristic
/// values are fixed. Routines return placeholder arrays sized from their
/// arguments.
#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<String>>,
}

impl RecordingBackend {
    /// Routine names in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

fn ramp(len: usize) -> NdArray<f64> {
    NdArray::from_vec1((0..len).map(|k| k as f64).collect())
}

fn complex_ramp(len: usize) -> NdArray<Complex128> {
    NdArray::from_vec1((0..len).map(|k| Complex128::new(k as f64, 1.0)).collect())
}

fn real_sequence(n: usize) -> RealSequence {
    Sequence {
        values: ramp(n + 1),
        derivatives: ramp(n + 1),
    }
}

fn complex_sequence(n: usize) -> ComplexSequence {
    Sequence {
        values: complex_ramp(n + 1),
        derivatives: complex_ramp(n + 1),
    }
}

fn tables(m: usize, n: usize) -> Result<LegendreTables<NdArray<f64>>> {
    let shape = [m + 1, n + 1];
    Ok(LegendreTables {
        values: NdArray::zeros(&shape),
        derivatives: NdArray::zeros(&shape),
    })
}

fn complex_tables(m: usize, n: usize) -> Result<LegendreTables<NdArray<Complex128>>> {
    let shape = [m + 1, n + 1];
    Ok(LegendreTables {
        values: NdArray::zeros(&shape),
        derivatives: NdArray::zeros(&shape),
    })
}

impl ScalarKernels for RecordingBackend {
    fn jv(&self, v: f64, x: f64) -> Result<f64> {
        NativeBackend.jv(v, x)
    }

    fn yv(&self, v: f64, x: f64) -> Result<f64> {
        NativeBackend.yv(v, x)
    }

    fn iv(&self, v: f64, x: f64) -> Result<f64> {
        NativeBackend.iv(v, x)
    }

    fn kv(&self, v: f64, x: f64) -> Result<f64> {
        NativeBackend.kv(v, x)
    }

    fn hankel1(&self, v: f64, x: f64) -> Result<Complex128> {
        NativeBackend.hankel1(v, x)
    }

    fn hankel2(&self, v: f64, x: f64) -> Result<Complex128> {
        NativeBackend.hankel2(v, x)
    }

    fn ndtri(&self, p: f64) -> Result<f64> {
        NativeBackend.ndtri(p)
    }

    fn gamma(&self, x: f64) -> Result<f64> {
        NativeBackend.gamma(x)
    }

    fn gammaln(&self, x: f64) -> Result<f64> {
        NativeBackend.gammaln(x)
    }

    fn psi(&self, x: f64) -> Result<f64> {
        NativeBackend.psi(x)
    }

    fn zeta(&self, s: f64, q: f64) -> Result<f64> {
        NativeBackend.zeta(s, q)
    }

    fn hyp1f1(&self, a: f64, b: f64, x: f64) -> Result<f64> {
        NativeBackend.hyp1f1(a, b, x)
    }

    fn gammainccinv(&self, a: f64, q: f64) -> Result<f64> {
        NativeBackend.gammainccinv(a, q)
    }

    fn mathieu_a(&self, m: f64, _q: f64) -> Result<f64> {
        self.record(format!("mathieu_a({m})"));
        Ok(m * m)
    }

    fn mathieu_b(&self, m: f64, _q: f64) -> Result<f64> {
        self.record(format!("mathieu_b({m})"));
        Ok(m * m)
    }
}

impl RoutineLibrary for RecordingBackend {
    fn jdzo(&self, nt: usize) -> Result<JnJnpZeros> {
        self.record("jdzo");
        let index = NdArray::from_vec1((0..nt as i64).collect());
        Ok(JnJnpZeros {
            zeros: ramp(nt),
            orders: index.clone(),
            serials: index.clone(),
            kinds: index,
        })
    }

    fn jyzo(&self, n: usize, nt: usize) -> Result<BesselZeros> {
        self.record(format!("jyzo({n}, {nt})"));
        Ok(BesselZeros {
            jn: ramp(nt),
            jnp: ramp(nt),
            yn: ramp(nt),
            ynp: ramp(nt),
        })
    }

    fn cyzo(&self, nt: usize, kind: YZeroKind, domain: RootDomain) -> Result<ComplexZeros> {
        self.record(format!("cyzo({nt}, {kind:?}, {domain:?})"));
        Ok(ComplexZeros {
            zeros: complex_ramp(nt),
            values: complex_ramp(nt),
        })
    }

    fn sphj(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("sphj");
        Ok(real_sequence(n))
    }

    fn sphy(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("sphy");
        Ok(real_sequence(n))
    }

    fn sphi(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("sphi");
        Ok(real_sequence(n))
    }

    fn sphk(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("sphk");
        Ok(real_sequence(n))
    }

    fn csphjy(&self, n: usize, _z: Complex128) -> Result<SequencePair<NdArray<Complex128>>> {
        self.record("csphjy");
        Ok(SequencePair {
            first_kind: complex_sequence(n),
            second_kind: complex_sequence(n),
        })
    }

    fn csphik(&self, n: usize, _z: Complex128) -> Result<SequencePair<NdArray<Complex128>>> {
        self.record("csphik");
        Ok(SequencePair {
            first_kind: complex_sequence(n),
            second_kind: complex_sequence(n),
        })
    }

    fn rctj(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("rctj");
        Ok(real_sequence(n))
    }

    fn rcty(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("rcty");
        Ok(real_sequence(n))
    }

    fn cerzo(&self, nt: usize) -> Result<NdArray<Complex128>> {
        self.record("cerzo");
        Ok(complex_ramp(nt))
    }

    fn fcszo(&self, kind: FresnelKind, nt: usize) -> Result<NdArray<Complex128>> {
        self.record(format!("fcszo({})", kind.code()));
        Ok(complex_ramp(nt))
    }

    fn airyzo(&self, nt: usize, kind: AiryKind) -> Result<AiryZeros> {
        self.record(format!("airyzo({})", kind.code()));
        Ok(AiryZeros {
            zeros: ramp(nt),
            derivative_zeros: ramp(nt),
            values_at_derivative_zeros: ramp(nt),
            derivatives_at_zeros: ramp(nt),
        })
    }

    fn klvnzo(&self, nt: usize, kind: KelvinKind) -> Result<NdArray<f64>> {
        self.record(format!("klvnzo({})", kind.code()));
        Ok(ramp(nt))
    }

    fn fcoef(&self, kind: MathieuKind, m: usize, _q: f64, cv: f64) -> Result<NdArray<f64>> {
        self.record(format!("fcoef({}, {m}, {cv})", kind.code()));
        Ok(ramp(300))
    }

    fn segv(&self, m: i64, n: i64, _c: f64, kind: SpheroidalKind) -> Result<SpheroidalValues> {
        self.record(format!("segv({m}, {n}, {})", kind.code()));
        Ok(SpheroidalValues {
            characteristic: 0.0,
            eigenvalues: ramp(200),
        })
    }

    fn lpmn(&self, m: usize, n: usize, _x: f64) -> Result<LegendreTables<NdArray<f64>>> {
        self.record("lpmn");
        tables(m, n)
    }

    fn clpmn(
        &self,
        m: usize,
        n: usize,
        _z: Complex128,
    ) -> Result<LegendreTables<NdArray<Complex128>>> {
        self.record("clpmn");
        complex_tables(m, n)
    }

    fn lqmn(&self, m: usize, n: usize, _x: f64) -> Result<LegendreTables<NdArray<f64>>> {
        self.record("lqmn");
        tables(m, n)
    }

    fn clqmn(
        &self,
        m: usize,
        n: usize,
        _z: Complex128,
    ) -> Result<LegendreTables<NdArray<Complex128>>> {
        self.record("clqmn");
        complex_tables(m, n)
    }

    fn lpn(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("lpn");
        Ok(real_sequence(n))
    }

    fn clpn(&self, n: usize, _z: Complex128) -> Result<ComplexSequence> {
        self.record("clpn");
        Ok(complex_sequence(n))
    }

    fn lqnb(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record("lqnb");
        Ok(real_sequence(n))
    }

    fn clqn(&self, n: usize, _z: Complex128) -> Result<ComplexSequence> {
        self.record("clqn");
        Ok(complex_sequence(n))
    }

    fn bernob(&self, n: usize) -> Result<NdArray<f64>> {
        self.record(format!("bernob({n})"));
        Ok(ramp(n + 1))
    }

    fn eulerb(&self, n: usize) -> Result<NdArray<f64>> {
        self.record(format!("eulerb({n})"));
        Ok(ramp(n + 1))
    }

    fn lamv(&self, v: f64, _x: f64) -> Result<RealSequence> {
        self.record(format!("lamv({v})"));
        Ok(real_sequence(v as usize))
    }

    fn lamn(&self, n: usize, _x: f64) -> Result<RealSequence> {
        self.record(format!("lamn({n})"));
        Ok(real_sequence(n))
    }

    fn pbdv(&self, v: f64, _x: f64) -> Result<ParabolicCylinder> {
        self.record("pbdv");
        Ok(ParabolicCylinder {
            sequence: real_sequence(v.abs() as usize),
            value: 0.0,
            derivative: 0.0,
        })
    }

    fn pbvv(&self, v: f64, _x: f64) -> Result<ParabolicCylinder> {
        self.record("pbvv");
        Ok(ParabolicCylinder {
            sequence: real_sequence(v.abs() as usize),
            value: 0.0,
            derivative: 0.0,
        })
    }

    fn cpbdn(&self, n: i64, _z: Complex128) -> Result<ComplexSequence> {
        self.record(format!("cpbdn({n})"));
        Ok(complex_sequence(n.unsigned_abs() as usize))
    }
}
