//! [`RoutineLibrary`] for the native backend

use super::*;
use crate::algorithm::special::{self, LegendreTable, besseljy};
use crate::error::Error;
use crate::kernels::NativeBackend;

fn table(t: LegendreTable) -> Result<LegendreTables<NdArray<f64>>> {
    let shape = [t.m + 1, t.n + 1];
    Ok(LegendreTables {
        values: NdArray::from_vec(t.values, &shape)?,
        derivatives: NdArray::from_vec(t.derivatives, &shape)?,
    })
}

fn sequence((values, derivatives): (Vec<f64>, Vec<f64>)) -> RealSequence {
    Sequence::from_vecs(values, derivatives)
}

/// Y0, Y1 or Y1' zeros on the real axis with their companion values
fn real_y_zeros(nt: usize, kind: YZeroKind) -> Result<ComplexZeros> {
    let (order, zeros) = match kind {
        YZeroKind::Y0 => (0.0, special::jyzo(0, nt)?.yn),
        YZeroKind::Y1 => (1.0, special::jyzo(1, nt)?.yn),
        YZeroKind::Y1p => (1.0, special::jyzo(1, nt)?.ynp),
    };
    let values = zeros
        .iter()
        .map(|&z| {
            let jy = besseljy(order, z)?;
            let v = match kind {
                YZeroKind::Y0 | YZeroKind::Y1 => jy.yp,
                YZeroKind::Y1p => jy.y,
            };
            Ok(Complex128::from(v))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ComplexZeros {
        zeros: NdArray::from_vec1(zeros.into_iter().map(Complex128::from).collect()),
        values: NdArray::from_vec1(values),
    })
}

impl RoutineLibrary for NativeBackend {
    fn jdzo(&self, nt: usize) -> Result<JnJnpZeros> {
        let zeros = special::jdzo(nt)?;
        Ok(JnJnpZeros {
            zeros: NdArray::from_vec1(zeros.iter().map(|z| z.value).collect()),
            orders: NdArray::from_vec1(zeros.iter().map(|z| z.order as i64).collect()),
            serials: NdArray::from_vec1(zeros.iter().map(|z| z.serial as i64).collect()),
            kinds: NdArray::from_vec1(zeros.iter().map(|z| i64::from(z.kind)).collect()),
        })
    }

    fn jyzo(&self, n: usize, nt: usize) -> Result<BesselZeros> {
        let z = special::jyzo(n, nt)?;
        Ok(BesselZeros {
            jn: NdArray::from_vec1(z.jn),
            jnp: NdArray::from_vec1(z.jnp),
            yn: NdArray::from_vec1(z.yn),
            ynp: NdArray::from_vec1(z.ynp),
        })
    }

    fn cyzo(&self, nt: usize, kind: YZeroKind, domain: RootDomain) -> Result<ComplexZeros> {
        match domain {
            RootDomain::Real => real_y_zeros(nt, kind),
            RootDomain::Complex => Err(Error::NotImplemented {
                feature: "cyzo: complex zeros of Y0, Y1 and Y1'",
            }),
        }
    }

    fn sphj(&self, n: usize, x: f64) -> Result<RealSequence> {
        Ok(sequence(special::sphj(n, x)))
    }

    fn sphy(&self, n: usize, x: f64) -> Result<RealSequence> {
        Ok(sequence(special::sphy(n, x)))
    }

    fn sphi(&self, n: usize, x: f64) -> Result<RealSequence> {
        Ok(sequence(special::sphi(n, x)))
    }

    fn sphk(&self, n: usize, x: f64) -> Result<RealSequence> {
        Ok(sequence(special::sphk(n, x)))
    }

    fn csphjy(&self, _n: usize, _z: Complex128) -> Result<SequencePair<NdArray<Complex128>>> {
        Err(Error::NotImplemented {
            feature: "csphjy: spherical Bessel j/y of complex argument",
        })
    }

    fn csphik(&self, _n: usize, _z: Complex128) -> Result<SequencePair<NdArray<Complex128>>> {
        Err(Error::NotImplemented {
            feature: "csphik: spherical Bessel i/k of complex argument",
        })
    }

    fn rctj(&self, n: usize, x: f64) -> Result<RealSequence> {
        Ok(sequence(special::rctj(n, x)))
    }

    fn rcty(&self, n: usize, x: f64) -> Result<RealSequence> {
        Ok(sequence(special::rcty(n, x)))
    }

    fn cerzo(&self, _nt: usize) -> Result<NdArray<Complex128>> {
        Err(Error::NotImplemented {
            feature: "cerzo: complex zeros of erf",
        })
    }

    fn fcszo(&self, _kind: FresnelKind, _nt: usize) -> Result<NdArray<Complex128>> {
        Err(Error::NotImplemented {
            feature: "fcszo: complex zeros of the Fresnel integrals",
        })
    }

    fn airyzo(&self, _nt: usize, _kind: AiryKind) -> Result<AiryZeros> {
        Err(Error::NotImplemented {
            feature: "airyzo: zeros of Airy functions",
        })
    }

    fn klvnzo(&self, _nt: usize, _kind: KelvinKind) -> Result<NdArray<f64>> {
        Err(Error::NotImplemented {
            feature: "klvnzo: zeros of Kelvin functions",
        })
    }

    fn fcoef(&self, _kind: MathieuKind, _m: usize, _q: f64, _cv: f64) -> Result<NdArray<f64>> {
        Err(Error::NotImplemented {
            feature: "fcoef: Mathieu expansion coefficients",
        })
    }

    fn segv(&self, _m: i64, _n: i64, _c: f64, _kind: SpheroidalKind) -> Result<SpheroidalValues> {
        Err(Error::NotImplemented {
            feature: "segv: spheroidal characteristic values",
        })
    }

    fn lpmn(&self, m: usize, n: usize, x: f64) -> Result<LegendreTables<NdArray<f64>>> {
        table(special::lpmn(m, n, x))
    }

    fn clpmn(
        &self,
        _m: usize,
        _n: usize,
        _z: Complex128,
    ) -> Result<LegendreTables<NdArray<Complex128>>> {
        Err(Error::NotImplemented {
            feature: "clpmn: associated Legendre P of complex argument",
        })
    }

    fn lqmn(&self, m: usize, n: usize, x: f64) -> Result<LegendreTables<NdArray<f64>>> {
        table(special::lqmn(m, n, x)?)
    }

    fn clqmn(
        &self,
        _m: usize,
        _n: usize,
        _z: Complex128,
    ) -> Result<LegendreTables<NdArray<Complex128>>> {
        Err(Error::NotImplemented {
            feature: "clqmn: associated Legendre Q of complex argument",
        })
    }

    fn lpn(&self, n: usize, x: f64) -> Result<RealSequence> {
        Ok(sequence(special::lpn(n, x)))
    }

    fn clpn(&self, n: usize, z: Complex128) -> Result<ComplexSequence> {
        let (values, derivatives) = special::clpn(n, z);
        Ok(Sequence::from_vecs(values, derivatives))
    }

    fn lqnb(&self, n: usize, x: f64) -> Result<RealSequence> {
        special::lqnb(n, x).map(sequence)
    }

    fn clqn(&self, _n: usize, _z: Complex128) -> Result<ComplexSequence> {
        Err(Error::NotImplemented {
            feature: "clqn: Legendre Q of complex argument",
        })
    }

    fn bernob(&self, n: usize) -> Result<NdArray<f64>> {
        Ok(NdArray::from_vec1(special::bernob(n)))
    }

    fn eulerb(&self, n: usize) -> Result<NdArray<f64>> {
        Ok(NdArray::from_vec1(special::eulerb(n)))
    }

    fn lamv(&self, v: f64, x: f64) -> Result<RealSequence> {
        special::lamv(v, x).map(sequence)
    }

    fn lamn(&self, n: usize, x: f64) -> Result<RealSequence> {
        special::lamv(n as f64, x).map(sequence)
    }

    fn pbdv(&self, _v: f64, _x: f64) -> Result<ParabolicCylinder> {
        Err(Error::NotImplemented {
            feature: "pbdv: parabolic cylinder functions D_v",
        })
    }

    fn pbvv(&self, _v: f64, _x: f64) -> Result<ParabolicCylinder> {
        Err(Error::NotImplemented {
            feature: "pbvv: parabolic cylinder functions V_v",
        })
    }

    fn cpbdn(&self, _n: i64, _z: Complex128) -> Result<ComplexSequence> {
        Err(Error::NotImplemented {
            feature: "cpbdn: parabolic cylinder functions of complex argument",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jdzo_fields() {
        let z = NativeBackend.jdzo(3).unwrap();
        assert_eq!(z.orders.as_slice(), &[1, 0, 2]);
        assert_eq!(z.kinds.as_slice(), &[1, 0, 1]);
        assert_eq!(z.serials.as_slice(), &[1, 1, 1]);
        assert_eq!(z.zeros.shape(), &[3]);
    }

    #[test]
    fn test_real_y0_zeros_report_y0_prime() {
        let z = NativeBackend
            .cyzo(2, YZeroKind::Y0, RootDomain::Real)
            .unwrap();
        let first = z.zeros.as_slice()[0];
        assert!((first.re - 0.8935769662791675).abs() < 1e-12);
        assert_eq!(first.im, 0.0);
        // Y0' = -Y1
        let y1 = crate::algorithm::special::yv_scalar(1.0, first.re).unwrap();
        assert!((z.values.as_slice()[0].re + y1).abs() < 1e-12);
    }

    #[test]
    fn test_complex_domain_not_implemented() {
        let err = NativeBackend
            .cyzo(2, YZeroKind::Y1, RootDomain::Complex)
            .unwrap_err();
        assert!(matches!(err, Error::NotImplemented { .. }));
    }

    #[test]
    fn test_lpmn_table_shape() {
        let t = NativeBackend.lpmn(2, 3, 0.5).unwrap();
        assert_eq!(t.values.shape(), &[3, 4]);
        assert_eq!(t.values.get(&[0, 1]), Some(0.5));
    }
}
