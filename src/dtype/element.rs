//! Element trait for mapping Rust types to DType

use super::{Complex128, DType, Scalar};

/// Trait for types that can be stored in an [`NdArray`](crate::tensor::NdArray)
///
/// This trait connects Rust's type system to the runtime dtype system. Each
/// implementor names its `DType` and converts to and from the dynamic
/// [`Scalar`] the broadcasting adapter works with.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - values cross rayon worker threads
/// - `PartialEq + Debug` - comparison in tests and error reporting
pub trait Element: Copy + Send + Sync + PartialEq + std::fmt::Debug + 'static {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Wrap this value as a dynamic scalar
    fn to_scalar(self) -> Scalar;

    /// Extract this type from a scalar that already carries `Self::DTYPE`
    ///
    /// Returns `None` when the scalar carries a different dtype; callers cast
    /// first with [`Scalar::cast`].
    fn from_scalar_exact(value: Scalar) -> Option<Self>;

    /// Zero value
    fn zero() -> Self;
}

macro_rules! impl_element {
    ($ty:ty, $dtype:ident, $variant:ident, $zero:expr) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }

            #[inline]
            fn from_scalar_exact(value: Scalar) -> Option<Self> {
                match value {
                    Scalar::$variant(v) => Some(v),
                    _ => None,
                }
            }

            #[inline]
            fn zero() -> Self {
                $zero
            }
        }
    };
}

impl_element!(f64, F64, F64, 0.0);
impl_element!(f32, F32, F32, 0.0);
impl_element!(i64, I64, I64, 0);
impl_element!(i32, I32, I32, 0);
impl_element!(bool, Bool, Bool, false);
impl_element!(Complex128, Complex128, Complex128, Complex128::ZERO);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(f64::DTYPE, DType::F64);
        assert_eq!(bool::DTYPE, DType::Bool);
        assert_eq!(Complex128::DTYPE, DType::Complex128);
    }

    #[test]
    fn test_exact_extraction() {
        assert_eq!(f64::from_scalar_exact(Scalar::F64(2.5)), Some(2.5));
        assert_eq!(f64::from_scalar_exact(Scalar::I64(2)), None);
        assert_eq!(i64::from_scalar_exact(7i64.to_scalar()), Some(7));
    }
}
