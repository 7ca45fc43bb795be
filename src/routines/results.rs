//! Named results and discriminants of the routine library

use crate::dtype::Complex128;
use crate::tensor::{NdArray, Operand, OperandElement};

// ============================================================================
// Sequences and tables
// ============================================================================

/// Function values and derivatives for orders `0..=n`
///
/// `A` is the array type: routines return typed [`NdArray`]s, the catalog
/// hands out [`Operand`]s so that real and complex branches share one type.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence<A> {
    /// Function values, indexed by order
    pub values: A,
    /// Derivatives, indexed by order
    pub derivatives: A,
}

/// Real-valued sequence returned by a routine
pub type RealSequence = Sequence<NdArray<f64>>;

/// Complex-valued sequence returned by a routine
pub type ComplexSequence = Sequence<NdArray<Complex128>>;

impl<T: OperandElement> Sequence<NdArray<T>> {
    /// Build from per-order vectors
    pub fn from_vecs(values: Vec<T>, derivatives: Vec<T>) -> Self {
        Self {
            values: NdArray::from_vec1(values),
            derivatives: NdArray::from_vec1(derivatives),
        }
    }

    /// Keep orders `0..len`
    pub fn truncate(&self, len: usize) -> Self {
        Self {
            values: self.values.truncate(len),
            derivatives: self.derivatives.truncate(len),
        }
    }
}

impl<T: OperandElement> From<Sequence<NdArray<T>>> for Sequence<Operand> {
    fn from(seq: Sequence<NdArray<T>>) -> Self {
        Self {
            values: T::wrap(seq.values),
            derivatives: T::wrap(seq.derivatives),
        }
    }
}

/// Sequences of the first and second kind computed together
#[derive(Clone, Debug, PartialEq)]
pub struct SequencePair<A> {
    /// j_n or i_n
    pub first_kind: Sequence<A>,
    /// y_n or k_n
    pub second_kind: Sequence<A>,
}

impl<T: OperandElement> From<SequencePair<NdArray<T>>> for SequencePair<Operand> {
    fn from(pair: SequencePair<NdArray<T>>) -> Self {
        Self {
            first_kind: pair.first_kind.into(),
            second_kind: pair.second_kind.into(),
        }
    }
}

/// `(m + 1) x (n + 1)` tables of associated Legendre functions
///
/// Row `i` holds order `i`, column `j` holds degree `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendreTables<A> {
    /// Function values
    pub values: A,
    /// Derivatives
    pub derivatives: A,
}

impl<T: OperandElement> From<LegendreTables<NdArray<T>>> for LegendreTables<Operand> {
    fn from(t: LegendreTables<NdArray<T>>) -> Self {
        Self {
            values: T::wrap(t.values),
            derivatives: T::wrap(t.derivatives),
        }
    }
}

/// Parabolic cylinder sequence plus the function at the requested order
#[derive(Clone, Debug, PartialEq)]
pub struct ParabolicCylinder {
    /// Orders v0, v0+1, ..., v with v0 = v - floor(v)
    pub sequence: RealSequence,
    /// Function value at order v
    pub value: f64,
    /// Derivative at order v
    pub derivative: f64,
}

/// Characteristic values of spheroidal wave functions
#[derive(Clone, Debug, PartialEq)]
pub struct SpheroidalValues {
    /// Characteristic value of mode (m, n)
    pub characteristic: f64,
    /// Characteristic values of modes (m, m), (m, m+1), ..., (m, n)
    pub eigenvalues: NdArray<f64>,
}

// ============================================================================
// Zeros
// ============================================================================

/// Zeros of J_n and J_n' over all orders, in ascending order
#[derive(Clone, Debug, PartialEq)]
pub struct JnJnpZeros {
    /// Location of each zero
    pub zeros: NdArray<f64>,
    /// Order n of the function the zero belongs to
    pub orders: NdArray<i64>,
    /// Serial number of the zero among zeros of the same function
    pub serials: NdArray<i64>,
    /// 0 for a zero of J_n, 1 for a zero of J_n'
    pub kinds: NdArray<i64>,
}

/// First zeros of J_n, J_n', Y_n and Y_n'
#[derive(Clone, Debug, PartialEq)]
pub struct BesselZeros {
    /// Zeros of J_n
    pub jn: NdArray<f64>,
    /// Zeros of J_n'
    pub jnp: NdArray<f64>,
    /// Zeros of Y_n
    pub yn: NdArray<f64>,
    /// Zeros of Y_n'
    pub ynp: NdArray<f64>,
}

/// Zeros of Y0, Y1 or Y1' and the companion value at each zero
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexZeros {
    /// Location of each zero
    pub zeros: NdArray<Complex128>,
    /// Y0'(z) = -Y1(z) for Y0, Y1'(z) for Y1, Y1(z) for Y1'
    pub values: NdArray<Complex128>,
}

/// Zeros of an Airy function pair and the companion values
#[derive(Clone, Debug, PartialEq)]
pub struct AiryZeros {
    /// Zeros a of Ai (or b of Bi)
    pub zeros: NdArray<f64>,
    /// Zeros a' of Ai' (or b' of Bi')
    pub derivative_zeros: NdArray<f64>,
    /// Ai(a') (or Bi(b'))
    pub values_at_derivative_zeros: NdArray<f64>,
    /// Ai'(a) (or Bi'(b))
    pub derivatives_at_zeros: NdArray<f64>,
}

/// Zeros of all eight Kelvin functions
#[derive(Clone, Debug, PartialEq)]
pub struct KelvinZeros {
    /// ber x
    pub ber: NdArray<f64>,
    /// bei x
    pub bei: NdArray<f64>,
    /// ker x
    pub ker: NdArray<f64>,
    /// kei x
    pub kei: NdArray<f64>,
    /// ber' x
    pub berp: NdArray<f64>,
    /// bei' x
    pub beip: NdArray<f64>,
    /// ker' x
    pub kerp: NdArray<f64>,
    /// kei' x
    pub keip: NdArray<f64>,
}

/// Zeros of both Fresnel integrals
#[derive(Clone, Debug, PartialEq)]
pub struct FresnelZeros {
    /// Zeros of S(z)
    pub sine: NdArray<Complex128>,
    /// Zeros of C(z)
    pub cosine: NdArray<Complex128>,
}

// ============================================================================
// Discriminants
// ============================================================================

/// Which Bessel function of the second kind `cyzo` looks at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum YZeroKind {
    /// Y0(z)
    Y0,
    /// Y1(z)
    Y1,
    /// Y1'(z)
    Y1p,
}

impl YZeroKind {
    /// Routine code: 0, 1 or 2
    pub const fn code(self) -> u8 {
        match self {
            Self::Y0 => 0,
            Self::Y1 => 1,
            Self::Y1p => 2,
        }
    }
}

/// Where `cyzo` searches for roots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RootDomain {
    /// Real positive axis
    Real,
    /// Complex plane
    Complex,
}

/// Fresnel integral selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FresnelKind {
    /// C(z)
    Cosine,
    /// S(z)
    Sine,
}

impl FresnelKind {
    /// Routine code: 1 for C, 2 for S
    pub const fn code(self) -> u8 {
        match self {
            Self::Cosine => 1,
            Self::Sine => 2,
        }
    }
}

/// Mathieu function class, by parity of the function and of its order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathieuKind {
    /// ce_2n: even function, even order
    EvenEven,
    /// ce_2n+1: even function, odd order
    EvenOdd,
    /// se_2n+1: odd function, odd order
    OddOdd,
    /// se_2n+2: odd function, even order
    OddEven,
}

impl MathieuKind {
    /// Class of the even Mathieu function of order `m`
    pub const fn even(m: usize) -> Self {
        if m % 2 == 0 { Self::EvenEven } else { Self::EvenOdd }
    }

    /// Class of the odd Mathieu function of order `m`
    pub const fn odd(m: usize) -> Self {
        if m % 2 == 0 { Self::OddEven } else { Self::OddOdd }
    }

    /// Routine discriminant: 1 to 4
    pub const fn code(self) -> u8 {
        match self {
            Self::EvenEven => 1,
            Self::EvenOdd => 2,
            Self::OddOdd => 3,
            Self::OddEven => 4,
        }
    }
}

/// Airy function pair selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AiryKind {
    /// Ai and Ai'
    Ai,
    /// Bi and Bi'
    Bi,
}

impl AiryKind {
    /// Routine code: 1 for Ai, 2 for Bi
    pub const fn code(self) -> u8 {
        match self {
            Self::Ai => 1,
            Self::Bi => 2,
        }
    }
}

/// Kelvin function selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KelvinKind {
    /// ber x
    Ber,
    /// bei x
    Bei,
    /// ker x
    Ker,
    /// kei x
    Kei,
    /// ber' x
    Berp,
    /// bei' x
    Beip,
    /// ker' x
    Kerp,
    /// kei' x
    Keip,
}

impl KelvinKind {
    /// All eight functions in routine-code order
    pub const ALL: [Self; 8] = [
        Self::Ber,
        Self::Bei,
        Self::Ker,
        Self::Kei,
        Self::Berp,
        Self::Beip,
        Self::Kerp,
        Self::Keip,
    ];

    /// Routine code: 1 to 8
    pub const fn code(self) -> u8 {
        match self {
            Self::Ber => 1,
            Self::Bei => 2,
            Self::Ker => 3,
            Self::Kei => 4,
            Self::Berp => 5,
            Self::Beip => 6,
            Self::Kerp => 7,
            Self::Keip => 8,
        }
    }
}

/// Spheroidal wave function family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpheroidalKind {
    /// Prolate (routine code 1)
    Prolate,
    /// Oblate (routine code -1)
    Oblate,
}

impl SpheroidalKind {
    /// Routine code: 1 or -1
    pub const fn code(self) -> i8 {
        match self {
            Self::Prolate => 1,
            Self::Oblate => -1,
        }
    }
}
