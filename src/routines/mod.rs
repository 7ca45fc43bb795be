//! Sequence, table and zero-finding routines
//!
//! [`RoutineLibrary`] is the second collaborator the catalog consumes. Each
//! routine takes validated arguments and returns a named result struct; the
//! catalog picks the fields it exposes.
//!
//! [`Backend`] bundles both collaborators and is implemented for any type
//! implementing [`ScalarKernels`] and [`RoutineLibrary`].

mod native;
mod results;

pub use results::*;

use crate::dtype::Complex128;
use crate::error::Result;
use crate::kernels::ScalarKernels;
use crate::tensor::NdArray;

/// Routines producing whole sequences, tables or sets of zeros
///
/// Arguments arrive validated: orders and counts are non-negative where
/// the type says so. Requests outside what an implementation evaluates fail
/// with [`Error::NotImplemented`](crate::error::Error::NotImplemented) or
/// [`Error::BackendLimitation`](crate::error::Error::BackendLimitation).
pub trait RoutineLibrary: Send + Sync {
    // ------------------------------------------------------------------
    // Bessel zeros
    // ------------------------------------------------------------------

    /// First `nt` zeros of J_n and J_n' across all orders, sorted
    fn jdzo(&self, nt: usize) -> Result<JnJnpZeros>;

    /// First `nt` zeros of J_n, J_n', Y_n and Y_n'
    fn jyzo(&self, n: usize, nt: usize) -> Result<BesselZeros>;

    /// First `nt` zeros of Y0, Y1 or Y1' in the given domain
    fn cyzo(&self, nt: usize, kind: YZeroKind, domain: RootDomain) -> Result<ComplexZeros>;

    // ------------------------------------------------------------------
    // Spherical and Riccati-Bessel sequences
    // ------------------------------------------------------------------

    /// Spherical Bessel j_k(x), k = 0..=n
    fn sphj(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// Spherical Bessel y_k(x), k = 0..=n
    fn sphy(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// Modified spherical Bessel i_k(x), k = 0..=n
    fn sphi(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// Modified spherical Bessel k_k(x), k = 0..=n
    fn sphk(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// j_k(z) and y_k(z) for complex z
    fn csphjy(&self, n: usize, z: Complex128) -> Result<SequencePair<NdArray<Complex128>>>;

    /// i_k(z) and k_k(z) for complex z
    fn csphik(&self, n: usize, z: Complex128) -> Result<SequencePair<NdArray<Complex128>>>;

    /// Riccati-Bessel x j_k(x), k = 0..=n
    fn rctj(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// Riccati-Bessel x y_k(x), k = 0..=n
    fn rcty(&self, n: usize, x: f64) -> Result<RealSequence>;

    // ------------------------------------------------------------------
    // Other zeros
    // ------------------------------------------------------------------

    /// First `nt` complex zeros of erf(z)
    fn cerzo(&self, nt: usize) -> Result<NdArray<Complex128>>;

    /// First `nt` complex zeros of C(z) or S(z)
    fn fcszo(&self, kind: FresnelKind, nt: usize) -> Result<NdArray<Complex128>>;

    /// First zeros of Ai/Ai' or Bi/Bi' and companion values
    fn airyzo(&self, nt: usize, kind: AiryKind) -> Result<AiryZeros>;

    /// First `nt` zeros of one Kelvin function
    fn klvnzo(&self, nt: usize, kind: KelvinKind) -> Result<NdArray<f64>>;

    // ------------------------------------------------------------------
    // Mathieu and spheroidal
    // ------------------------------------------------------------------

    /// Expansion coefficients of a Mathieu function with characteristic value `cv`
    fn fcoef(&self, kind: MathieuKind, m: usize, q: f64, cv: f64) -> Result<NdArray<f64>>;

    /// Characteristic values of spheroidal wave functions of modes (m, m..=n)
    fn segv(&self, m: i64, n: i64, c: f64, kind: SpheroidalKind) -> Result<SpheroidalValues>;

    // ------------------------------------------------------------------
    // Legendre functions
    // ------------------------------------------------------------------

    /// P_j^i(x) tables for i = 0..=m, j = 0..=n
    fn lpmn(&self, m: usize, n: usize, x: f64) -> Result<LegendreTables<NdArray<f64>>>;

    /// P_j^i(z) tables for complex z
    fn clpmn(&self, m: usize, n: usize, z: Complex128)
    -> Result<LegendreTables<NdArray<Complex128>>>;

    /// Q_j^i(x) tables for i = 0..=m, j = 0..=n
    fn lqmn(&self, m: usize, n: usize, x: f64) -> Result<LegendreTables<NdArray<f64>>>;

    /// Q_j^i(z) tables for complex z
    fn clqmn(&self, m: usize, n: usize, z: Complex128)
    -> Result<LegendreTables<NdArray<Complex128>>>;

    /// P_k(x), k = 0..=n
    fn lpn(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// P_k(z) for complex z
    fn clpn(&self, n: usize, z: Complex128) -> Result<ComplexSequence>;

    /// Q_k(x), k = 0..=n
    fn lqnb(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// Q_k(z) for complex z
    fn clqn(&self, n: usize, z: Complex128) -> Result<ComplexSequence>;

    // ------------------------------------------------------------------
    // Numbers and miscellaneous sequences
    // ------------------------------------------------------------------

    /// Bernoulli numbers B_0..=B_n
    fn bernob(&self, n: usize) -> Result<NdArray<f64>>;

    /// Euler numbers E_0..=E_n
    fn eulerb(&self, n: usize) -> Result<NdArray<f64>>;

    /// Lambda functions Λ_{v0+k}(x), v0 = v - floor(v), for a non-integral order
    fn lamv(&self, v: f64, x: f64) -> Result<RealSequence>;

    /// Lambda functions Λ_k(x), k = 0..=n
    fn lamn(&self, n: usize, x: f64) -> Result<RealSequence>;

    /// Parabolic cylinder functions D_{v0+k}(x)
    fn pbdv(&self, v: f64, x: f64) -> Result<ParabolicCylinder>;

    /// Parabolic cylinder functions V_{v0+k}(x)
    fn pbvv(&self, v: f64, x: f64) -> Result<ParabolicCylinder>;

    /// Parabolic cylinder functions D_k(z) for complex z, k = 0..=|n|
    fn cpbdn(&self, n: i64, z: Complex128) -> Result<ComplexSequence>;
}

/// Everything the catalog needs from a backend
pub trait Backend: ScalarKernels + RoutineLibrary {}

impl<T: ScalarKernels + RoutineLibrary> Backend for T {}
