//! Dynamically typed scalar values
//!
//! A [`Scalar`] is one element pulled out of an [`Operand`](crate::tensor::Operand)
//! or produced by a wrapped scalar function. The broadcasting adapter moves
//! values between typed closures and dtype-tagged arrays through the
//! [`FromScalar`] and [`IntoScalar`] conversions.

use super::{Complex128, DType};
use crate::error::{Error, Result};
use std::fmt;

/// A single value of any supported dtype
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Boolean value
    Bool(bool),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// 128-bit complex
    Complex128(Complex128),
}

impl Scalar {
    /// The dtype this value carries
    pub fn dtype(&self) -> DType {
        match self {
            Self::Bool(_) => DType::Bool,
            Self::I32(_) => DType::I32,
            Self::I64(_) => DType::I64,
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
            Self::Complex128(_) => DType::Complex128,
        }
    }

    /// Real value of a non-complex scalar, or of a complex scalar whose
    /// imaginary part is zero.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
            Self::I32(v) => Some(v as f64),
            Self::I64(v) => Some(v as f64),
            Self::F32(v) => Some(v as f64),
            Self::F64(v) => Some(v),
            Self::Complex128(z) if z.is_real() => Some(z.re),
            Self::Complex128(_) => None,
        }
    }

    /// Value promoted to the complex plane
    pub fn to_complex(&self) -> Complex128 {
        match *self {
            Self::Complex128(z) => z,
            _ => Complex128::new(self.as_f64().unwrap_or(f64::NAN), 0.0),
        }
    }

    /// True when the value carries a nonzero imaginary component
    pub fn is_complex(&self) -> bool {
        matches!(self, Self::Complex128(z) if !z.is_real())
    }

    /// True when the value is real and `floor(x) == x`
    pub fn is_integral(&self) -> bool {
        self.as_f64().is_some_and(|v| v.floor() == v)
    }

    /// True for zero of any dtype
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Complex128(z) => z == Complex128::ZERO,
            _ => self.as_f64() == Some(0.0),
        }
    }

    /// Convert this value to another dtype.
    ///
    /// Floats truncate toward zero when cast to integers. A complex value
    /// only casts to a real dtype when its imaginary part is zero.
    pub fn cast(self, to: DType) -> Result<Scalar> {
        if self.dtype() == to {
            return Ok(self);
        }
        if to == DType::Complex128 {
            return Ok(Self::Complex128(self.to_complex()));
        }
        if to == DType::Bool {
            return Ok(Self::Bool(!self.is_zero()));
        }
        let real = self.as_f64().ok_or(Error::DTypeCast {
            from: self.dtype(),
            to,
        })?;
        let cast = match to {
            DType::F64 => Self::F64(real),
            DType::F32 => Self::F32(real as f32),
            DType::I64 => Self::I64(real as i64),
            DType::I32 => Self::I32(real as i32),
            DType::Bool | DType::Complex128 => unreachable!("handled above"),
        };
        Ok(cast)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Complex128(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_scalar_from!(
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    Complex128 => Complex128,
);

// ============================================================================
// Closure argument / return conversions
// ============================================================================

/// Types a wrapped scalar function can accept as an argument
pub trait FromScalar: Sized {
    /// Extract `Self` from a dynamic scalar
    fn from_scalar(value: Scalar) -> Result<Self>;
}

impl FromScalar for Scalar {
    #[inline]
    fn from_scalar(value: Scalar) -> Result<Self> {
        Ok(value)
    }
}

impl FromScalar for f64 {
    fn from_scalar(value: Scalar) -> Result<Self> {
        value.as_f64().ok_or(Error::DTypeCast {
            from: value.dtype(),
            to: DType::F64,
        })
    }
}

impl FromScalar for f32 {
    fn from_scalar(value: Scalar) -> Result<Self> {
        f64::from_scalar(value).map(|v| v as f32)
    }
}

impl FromScalar for i64 {
    fn from_scalar(value: Scalar) -> Result<Self> {
        match value {
            Scalar::I64(v) => Ok(v),
            Scalar::I32(v) => Ok(v as i64),
            Scalar::Bool(b) => Ok(b as i64),
            other if other.is_integral() => Ok(other.as_f64().unwrap_or_default() as i64),
            other => Err(Error::DTypeCast {
                from: other.dtype(),
                to: DType::I64,
            }),
        }
    }
}

impl FromScalar for i32 {
    fn from_scalar(value: Scalar) -> Result<Self> {
        let wide = i64::from_scalar(value)?;
        i32::try_from(wide).map_err(|_| Error::DTypeCast {
            from: value.dtype(),
            to: DType::I32,
        })
    }
}

impl FromScalar for bool {
    fn from_scalar(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Bool(b) => Ok(b),
            other => Ok(!other.is_zero()),
        }
    }
}

impl FromScalar for Complex128 {
    #[inline]
    fn from_scalar(value: Scalar) -> Result<Self> {
        Ok(value.to_complex())
    }
}

/// Types a wrapped scalar function can return
///
/// Implemented for every element type and for `Result<T>` so that fallible
/// functions can abort a broadcast.
pub trait IntoScalar {
    /// Convert into a dynamic scalar
    fn into_scalar(self) -> Result<Scalar>;
}

macro_rules! impl_into_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoScalar for $ty {
                #[inline]
                fn into_scalar(self) -> Result<Scalar> {
                    Ok(Scalar::from(self))
                }
            }
        )*
    };
}

impl_into_scalar!(bool, i32, i64, f32, f64, Complex128);

impl IntoScalar for Scalar {
    #[inline]
    fn into_scalar(self) -> Result<Scalar> {
        Ok(self)
    }
}

impl<T: IntoScalar> IntoScalar for Result<T> {
    #[inline]
    fn into_scalar(self) -> Result<Scalar> {
        self.and_then(IntoScalar::into_scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complex_requires_nonzero_imag() {
        assert!(!Scalar::F64(2.0).is_complex());
        assert!(!Scalar::Complex128(Complex128::new(2.0, 0.0)).is_complex());
        assert!(Scalar::Complex128(Complex128::new(2.0, 1.0)).is_complex());
    }

    #[test]
    fn test_is_integral() {
        assert!(Scalar::F64(3.0).is_integral());
        assert!(!Scalar::F64(3.5).is_integral());
        assert!(Scalar::I64(-2).is_integral());
        assert!(!Scalar::F64(f64::NAN).is_integral());
        assert!(!Scalar::Complex128(Complex128::new(1.0, 1.0)).is_integral());
    }

    #[test]
    fn test_cast_real_to_int_truncates() {
        assert_eq!(Scalar::F64(2.7).cast(DType::I64).unwrap(), Scalar::I64(2));
        assert_eq!(Scalar::F64(-2.7).cast(DType::I32).unwrap(), Scalar::I32(-2));
    }

    #[test]
    fn test_cast_complex_to_real() {
        let real = Scalar::Complex128(Complex128::new(1.5, 0.0));
        assert_eq!(real.cast(DType::F64).unwrap(), Scalar::F64(1.5));

        let complex = Scalar::Complex128(Complex128::new(1.5, 1.0));
        assert!(matches!(
            complex.cast(DType::F64),
            Err(Error::DTypeCast { .. })
        ));
    }

    #[test]
    fn test_cast_to_bool_and_complex() {
        assert_eq!(Scalar::I64(0).cast(DType::Bool).unwrap(), Scalar::Bool(false));
        assert_eq!(Scalar::F64(0.1).cast(DType::Bool).unwrap(), Scalar::Bool(true));
        assert_eq!(
            Scalar::F64(3.0).cast(DType::Complex128).unwrap(),
            Scalar::Complex128(Complex128::new(3.0, 0.0))
        );
    }

    #[test]
    fn test_from_scalar_integer_requires_integral() {
        assert_eq!(i64::from_scalar(Scalar::F64(4.0)).unwrap(), 4);
        assert!(i64::from_scalar(Scalar::F64(4.5)).is_err());
        assert_eq!(f64::from_scalar(Scalar::I64(4)).unwrap(), 4.0);
    }

    #[test]
    fn test_into_scalar_result() {
        let ok: Result<f64> = Ok(1.0);
        assert_eq!(ok.into_scalar().unwrap(), Scalar::F64(1.0));

        let err: Result<f64> = Err(Error::Internal("boom".into()));
        assert!(err.into_scalar().is_err());
    }
}
