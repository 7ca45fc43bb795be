//! Zeros of Bessel, Airy, Kelvin, error and Fresnel functions

use super::Special;
use super::validate::{integral, scalar};
use crate::dtype::Complex128;
use crate::error::{Error, Result};
use crate::routines::{
    AiryKind, AiryZeros, Backend, BesselZeros, ComplexZeros, FresnelKind, FresnelZeros,
    JnJnpZeros, KelvinKind, KelvinZeros, RootDomain, YZeroKind,
};
use crate::tensor::{IntoOperand, NdArray};

/// Largest count accepted by [`Special::jnjnp_zeros`]
pub const JNJNP_MAX_ZEROS: usize = 1400;

/// A positive integral count, or `reason` as a domain error
fn positive_count(nt: impl IntoOperand, reason: &str) -> Result<usize> {
    match scalar(nt)?.and_then(integral) {
        Some(v) if v > 0.0 => Ok(v as usize),
        _ => Err(Error::domain("nt", reason)),
    }
}

impl<B: Backend> Special<B> {
    // ========================================================================
    // Bessel J / Y
    // ========================================================================

    /// First `nt` zeros of J_n(x) and J_n'(x) over all orders, in ascending order
    ///
    /// `nt` must be a scalar integer in `1..=1400`.
    pub fn jnjnp_zeros(&self, nt: impl IntoOperand) -> Result<JnJnpZeros> {
        let count = match scalar(nt)?.and_then(integral) {
            Some(v) if v <= JNJNP_MAX_ZEROS as f64 => v,
            _ => return Err(Error::domain("nt", "Number must be integer <=1400.")),
        };
        if count <= 0.0 {
            return Err(Error::domain("nt", "nt > 0"));
        }
        self.backend.jdzo(count as usize)
    }

    /// First `nt` zeros of J_n, J_n', Y_n and Y_n'
    ///
    /// Negative orders share the zeros of order `|n|`.
    pub fn jnyn_zeros(&self, n: impl IntoOperand, nt: impl IntoOperand) -> Result<BesselZeros> {
        let (Some(n), Some(nt)) = (scalar(n)?, scalar(nt)?) else {
            return Err(Error::domain("n, nt", "Arguments must be scalars."));
        };
        let (Some(n), Some(nt)) = (integral(n), integral(nt)) else {
            return Err(Error::domain("n, nt", "Arguments must be integers."));
        };
        if nt <= 0.0 {
            return Err(Error::domain("nt", "nt > 0"));
        }
        self.backend.jyzo(n.abs() as usize, nt as usize)
    }

    /// First `nt` zeros of J_n(x)
    pub fn jn_zeros(&self, n: impl IntoOperand, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        Ok(self.jnyn_zeros(n, nt)?.jn)
    }

    /// First `nt` zeros of J_n'(x)
    pub fn jnp_zeros(&self, n: impl IntoOperand, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        Ok(self.jnyn_zeros(n, nt)?.jnp)
    }

    /// First `nt` zeros of Y_n(x)
    pub fn yn_zeros(&self, n: impl IntoOperand, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        Ok(self.jnyn_zeros(n, nt)?.yn)
    }

    /// First `nt` zeros of Y_n'(x)
    pub fn ynp_zeros(&self, n: impl IntoOperand, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        Ok(self.jnyn_zeros(n, nt)?.ynp)
    }

    fn y_zeros(
        &self,
        nt: impl IntoOperand,
        complex: bool,
        kind: YZeroKind,
    ) -> Result<ComplexZeros> {
        let nt = positive_count(nt, "Arguments must be scalar positive integer.")?;
        let domain = if complex {
            RootDomain::Complex
        } else {
            RootDomain::Real
        };
        log::debug!("cyzo: {kind:?} zeros in the {domain:?} domain");
        self.backend.cyzo(nt, kind, domain)
    }

    /// First `nt` zeros z0 of Y0(z) and Y0'(z0) = -Y1(z0) at each
    ///
    /// `complex` selects roots in the complex plane instead of the real axis.
    pub fn y0_zeros(&self, nt: impl IntoOperand, complex: bool) -> Result<ComplexZeros> {
        self.y_zeros(nt, complex, YZeroKind::Y0)
    }

    /// First `nt` zeros z1 of Y1(z) and Y1'(z1) = Y0(z1) at each
    pub fn y1_zeros(&self, nt: impl IntoOperand, complex: bool) -> Result<ComplexZeros> {
        self.y_zeros(nt, complex, YZeroKind::Y1)
    }

    /// First `nt` zeros z1' of Y1'(z) and Y1(z1') at each
    pub fn y1p_zeros(&self, nt: impl IntoOperand, complex: bool) -> Result<ComplexZeros> {
        self.y_zeros(nt, complex, YZeroKind::Y1p)
    }

    // ========================================================================
    // Error function and Fresnel integrals
    // ========================================================================

    /// First `nt` complex zeros of erf(z)
    pub fn erf_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<Complex128>> {
        let nt = positive_count(nt, "Argument must be positive scalar integer.")?;
        self.backend.cerzo(nt)
    }

    /// First `nt` complex zeros of the Fresnel cosine integral C(z)
    pub fn fresnelc_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<Complex128>> {
        let nt = positive_count(nt, "Argument must be positive scalar integer.")?;
        self.backend.fcszo(FresnelKind::Cosine, nt)
    }

    /// First `nt` complex zeros of the Fresnel sine integral S(z)
    pub fn fresnels_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<Complex128>> {
        let nt = positive_count(nt, "Argument must be positive scalar integer.")?;
        self.backend.fcszo(FresnelKind::Sine, nt)
    }

    /// First `nt` complex zeros of both S(z) and C(z)
    pub fn fresnel_zeros(&self, nt: impl IntoOperand) -> Result<FresnelZeros> {
        let nt = positive_count(nt, "Argument must be positive scalar integer.")?;
        let sine = self.backend.fcszo(FresnelKind::Sine, nt)?;
        let cosine = self.backend.fcszo(FresnelKind::Cosine, nt)?;
        Ok(FresnelZeros { sine, cosine })
    }

    // ========================================================================
    // Airy
    // ========================================================================

    /// First `nt` zeros a of Ai(x), a' of Ai'(x), and Ai(a'), Ai'(a)
    pub fn ai_zeros(&self, nt: impl IntoOperand) -> Result<AiryZeros> {
        let nt = positive_count(nt, "nt must be a positive integer scalar.")?;
        self.backend.airyzo(nt, AiryKind::Ai)
    }

    /// First `nt` zeros b of Bi(x), b' of Bi'(x), and Bi(b'), Bi'(b)
    pub fn bi_zeros(&self, nt: impl IntoOperand) -> Result<AiryZeros> {
        let nt = positive_count(nt, "nt must be a positive integer scalar.")?;
        self.backend.airyzo(nt, AiryKind::Bi)
    }

    // ========================================================================
    // Kelvin
    // ========================================================================

    fn kelvin(&self, nt: impl IntoOperand, kind: KelvinKind) -> Result<NdArray<f64>> {
        let nt = positive_count(nt, "nt must be positive integer scalar.")?;
        self.backend.klvnzo(nt, kind)
    }

    /// First `nt` zeros of ber x
    pub fn ber_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Ber)
    }

    /// First `nt` zeros of bei x
    pub fn bei_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Bei)
    }

    /// First `nt` zeros of ker x
    pub fn ker_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Ker)
    }

    /// First `nt` zeros of kei x
    pub fn kei_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Kei)
    }

    /// First `nt` zeros of ber' x
    pub fn berp_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Berp)
    }

    /// First `nt` zeros of bei' x
    pub fn beip_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Beip)
    }

    /// First `nt` zeros of ker' x
    pub fn kerp_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Kerp)
    }

    /// First `nt` zeros of kei' x
    pub fn keip_zeros(&self, nt: impl IntoOperand) -> Result<NdArray<f64>> {
        self.kelvin(nt, KelvinKind::Keip)
    }

    /// First `nt` zeros of all eight Kelvin functions
    pub fn kelvin_zeros(&self, nt: impl IntoOperand) -> Result<KelvinZeros> {
        let nt = positive_count(nt, "nt must be positive integer scalar.")?;
        let [ber, bei, ker, kei, berp, beip, kerp, keip] = KelvinKind::ALL;
        Ok(KelvinZeros {
            ber: self.backend.klvnzo(nt, ber)?,
            bei: self.backend.klvnzo(nt, bei)?,
            ker: self.backend.klvnzo(nt, ker)?,
            kei: self.backend.klvnzo(nt, kei)?,
            berp: self.backend.klvnzo(nt, berp)?,
            beip: self.backend.klvnzo(nt, beip)?,
            kerp: self.backend.klvnzo(nt, kerp)?,
            keip: self.backend.klvnzo(nt, keip)?,
        })
    }
}
