//! Data type system for numr-special arrays
//!
//! This module provides the `DType` enum representing the supported element types,
//! the dynamically typed [`Scalar`] value that flows through the broadcasting
//! adapter, type promotion rules, and typecode parsing for output-type tags.

pub mod complex;
mod element;
mod promotion;
mod scalar;

pub use complex::Complex128;
pub use element::Element;
pub use promotion::promote;
pub use scalar::{FromScalar, IntoScalar, Scalar};

use crate::error::{Error, Result};
use std::fmt;

// ============================================================================
// DType Enum
// ============================================================================

/// Data types supported by numr-special arrays
///
/// This enum represents the element type of an array at runtime. Broadcasting
/// adapters carry an optional `DType` as their output-type tag, and catalog
/// results report real vs complex output through it.
///
/// # Discriminant Values (Serialization Stability)
///
/// The discriminant values follow numr's stable ranges:
/// - Floats: 0-9 (F64=0, F32=1)
/// - Signed ints: 10-19 (I64=10, I32=11)
/// - Bool: 30
/// - Complex: 40-49 (Complex128=41)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 64-bit signed integer
    I64 = 10,
    /// 32-bit signed integer
    I32 = 11,
    /// Boolean type
    Bool = 30,
    /// 128-bit complex (two f64: re, im)
    Complex128 = 41,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Complex128 => 16,
            Self::F64 | Self::I64 => 8,
            Self::F32 | Self::I32 => 4,
            Self::Bool => 1,
        }
    }

    /// Returns true if this is a floating point type
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F64 | Self::F32)
    }

    /// Returns true if this is a complex number type
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex128)
    }

    /// Returns true if this is an integer type
    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::I64 | Self::I32)
    }

    /// Returns true if this is a boolean type
    #[inline]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Short name for display (e.g., "f64", "c128")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::Bool => "bool",
            Self::Complex128 => "c128",
        }
    }

    /// Array-protocol typecode character for this dtype
    pub const fn typecode(self) -> char {
        match self {
            Self::F64 => 'd',
            Self::F32 => 'f',
            Self::I64 => 'l',
            Self::I32 => 'i',
            Self::Bool => '?',
            Self::Complex128 => 'D',
        }
    }

    /// Parse an output-type tag.
    ///
    /// Only the first character of the tag selects the output type; an empty
    /// tag means "infer from the first result" and yields `None`.
    ///
    /// ```
    /// use numr_special::dtype::DType;
    /// assert_eq!(DType::from_typecode("D").unwrap(), Some(DType::Complex128));
    /// assert_eq!(DType::from_typecode("").unwrap(), None);
    /// assert!(DType::from_typecode("x").is_err());
    /// ```
    pub fn from_typecode(tag: &str) -> Result<Option<Self>> {
        let Some(code) = tag.chars().next() else {
            return Ok(None);
        };
        let dtype = match code {
            'd' => Self::F64,
            'f' => Self::F32,
            'l' | 'q' => Self::I64,
            'i' => Self::I32,
            '?' | 'b' => Self::Bool,
            'D' | 'F' => Self::Complex128,
            other => {
                return Err(Error::configuration(format!(
                    "unknown output typecode '{other}' in \"{tag}\""
                )));
            }
        };
        Ok(Some(dtype))
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
