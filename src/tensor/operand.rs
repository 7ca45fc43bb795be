//! Dtype-tagged arrays and conversions from caller input
//!
//! An [`Operand`] is what the broadcasting adapter and the catalog consume:
//! an [`NdArray`] whose element type is only known at runtime. Anything
//! implementing [`IntoOperand`] can be passed where an operand is expected:
//! plain scalars become rank-0 operands, slices and `Vec`s become
//! one-dimensional operands, and nested `Vec`s infer their shape by stacking.

use super::NdArray;
use crate::dtype::{Complex128, DType, Element, Scalar, promote};
use crate::error::{Error, Result};

/// Dispatch on a runtime dtype with `$T` bound to the matching element type
///
/// Usage: `dispatch_dtype!(dtype, T => { code using T })`
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block) => {
        match $dtype {
            DType::F64 => {
                type $T = f64;
                $body
            }
            DType::F32 => {
                type $T = f32;
                $body
            }
            DType::I64 => {
                type $T = i64;
                $body
            }
            DType::I32 => {
                type $T = i32;
                $body
            }
            DType::Bool => {
                type $T = bool;
                $body
            }
            DType::Complex128 => {
                type $T = Complex128;
                $body
            }
        }
    };
}

/// Run `$body` with `$a` bound to the typed array inside an operand
macro_rules! with_array {
    ($operand:expr, $a:ident => $body:expr) => {
        match $operand {
            Operand::F64($a) => $body,
            Operand::F32($a) => $body,
            Operand::I64($a) => $body,
            Operand::I32($a) => $body,
            Operand::Bool($a) => $body,
            Operand::Complex128($a) => $body,
        }
    };
}

/// An array whose element type is carried at runtime
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// 64-bit float elements
    F64(NdArray<f64>),
    /// 32-bit float elements
    F32(NdArray<f32>),
    /// 64-bit integer elements
    I64(NdArray<i64>),
    /// 32-bit integer elements
    I32(NdArray<i32>),
    /// Boolean elements
    Bool(NdArray<bool>),
    /// Complex elements
    Complex128(NdArray<Complex128>),
}

/// Typed access to the array inside an [`Operand`]
pub trait OperandElement: Element {
    /// Wrap a typed array
    fn wrap(array: NdArray<Self>) -> Operand;
    /// Borrow the typed array when the operand carries this element type
    fn unwrap_ref(operand: &Operand) -> Option<&NdArray<Self>>;
}

macro_rules! impl_operand_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl OperandElement for $ty {
                #[inline]
                fn wrap(array: NdArray<Self>) -> Operand {
                    Operand::$variant(array)
                }

                #[inline]
                fn unwrap_ref(operand: &Operand) -> Option<&NdArray<Self>> {
                    match operand {
                        Operand::$variant(a) => Some(a),
                        _ => None,
                    }
                }
            }

            impl From<NdArray<$ty>> for Operand {
                fn from(array: NdArray<$ty>) -> Self {
                    Operand::$variant(array)
                }
            }
        )*
    };
}

impl_operand_element!(
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    bool => Bool,
    Complex128 => Complex128,
);

fn typed_values<T: Element>(values: impl IntoIterator<Item = Scalar>) -> Result<Vec<T>> {
    values
        .into_iter()
        .map(|s| {
            let cast = s.cast(T::DTYPE)?;
            T::from_scalar_exact(cast).ok_or(Error::DTypeCast {
                from: s.dtype(),
                to: T::DTYPE,
            })
        })
        .collect()
}

impl Operand {
    /// Rank-0 operand holding one scalar
    pub fn scalar(value: Scalar) -> Self {
        match value {
            Scalar::F64(v) => Self::F64(NdArray::scalar(v)),
            Scalar::F32(v) => Self::F32(NdArray::scalar(v)),
            Scalar::I64(v) => Self::I64(NdArray::scalar(v)),
            Scalar::I32(v) => Self::I32(NdArray::scalar(v)),
            Scalar::Bool(v) => Self::Bool(NdArray::scalar(v)),
            Scalar::Complex128(v) => Self::Complex128(NdArray::scalar(v)),
        }
    }

    /// Build an operand of `dtype` from row-major scalars, casting each one
    pub fn from_scalars(
        values: impl IntoIterator<Item = Scalar>,
        shape: &[usize],
        dtype: DType,
    ) -> Result<Self> {
        dispatch_dtype!(dtype, T => {
            let data = typed_values::<T>(values)?;
            Ok(T::wrap(NdArray::from_vec(data, shape)?))
        })
    }

    /// Empty operand of the given shape
    pub fn empty(shape: &[usize], dtype: DType) -> Self {
        dispatch_dtype!(dtype, T => { T::wrap(NdArray::<T>::zeros(shape)) })
    }

    /// Element type
    pub fn dtype(&self) -> DType {
        with_array!(self, a => a.dtype())
    }

    /// Shape of the array
    pub fn shape(&self) -> &[usize] {
        with_array!(self, a => a.shape())
    }

    /// Layout of the array
    pub fn layout(&self) -> &super::Layout {
        with_array!(self, a => a.layout())
    }

    /// Total number of elements
    pub fn numel(&self) -> usize {
        with_array!(self, a => a.numel())
    }

    /// Rank of the array
    pub fn ndim(&self) -> usize {
        with_array!(self, a => a.ndim())
    }

    /// True when the operand is rank-0
    pub fn is_scalar(&self) -> bool {
        with_array!(self, a => a.is_scalar())
    }

    /// Element at a linear storage offset
    pub fn get_linear(&self, offset: usize) -> Option<Scalar> {
        with_array!(self, a => a.get_linear(offset).map(Element::to_scalar))
    }

    /// Element at a multi-dimensional index
    pub fn get(&self, indices: &[usize]) -> Option<Scalar> {
        with_array!(self, a => a.get(indices).map(Element::to_scalar))
    }

    /// The value of a rank-0 operand
    pub fn as_scalar(&self) -> Option<Scalar> {
        if self.is_scalar() {
            self.get_linear(0)
        } else {
            None
        }
    }

    /// All elements as scalars in row-major order
    pub fn to_scalars(&self) -> Vec<Scalar> {
        with_array!(self, a => a.as_slice().iter().map(|v| v.to_scalar()).collect())
    }

    /// True when any element carries a nonzero imaginary part
    pub fn any_complex(&self) -> bool {
        match self {
            Self::Complex128(a) => a.as_slice().iter().any(|z| !z.is_real()),
            _ => false,
        }
    }

    /// Convert every element to another dtype
    pub fn cast(&self, dtype: DType) -> Result<Self> {
        if self.dtype() == dtype {
            return Ok(self.clone());
        }
        Self::from_scalars(self.to_scalars(), self.shape(), dtype)
    }

    /// Borrow the typed array when the element type matches `T`
    pub fn as_array<T: OperandElement>(&self) -> Option<&NdArray<T>> {
        T::unwrap_ref(self)
    }

    /// Convert to a typed array, casting when needed
    pub fn to_array<T: OperandElement>(&self) -> Result<NdArray<T>> {
        match self.cast(T::DTYPE)?.as_array::<T>() {
            Some(a) => Ok(a.clone()),
            None => Err(Error::Internal(format!(
                "cast to {} produced a different dtype",
                T::DTYPE
            ))),
        }
    }

    /// Stack equally shaped operands along a new leading axis
    ///
    /// Element types promote to a common dtype. Operands of different
    /// shapes fail with [`Error::ShapeMismatch`].
    pub fn stack(items: Vec<Operand>) -> Result<Self> {
        let Some(first) = items.first() else {
            return Ok(Self::F64(NdArray::from_vec1(Vec::new())));
        };
        let inner: Vec<usize> = first.shape().to_vec();
        let mut dtype = first.dtype();
        for item in &items[1..] {
            if item.shape() != inner.as_slice() {
                return Err(Error::shape_mismatch(&inner, item.shape()));
            }
            dtype = promote(dtype, item.dtype());
        }

        let mut shape = Vec::with_capacity(inner.len() + 1);
        shape.push(items.len());
        shape.extend_from_slice(&inner);

        let values = items.iter().flat_map(Operand::to_scalars);
        Self::from_scalars(values, &shape, dtype)
    }
}

// ============================================================================
// IntoOperand
// ============================================================================

/// Conversion of caller input into an [`Operand`]
///
/// Scalars become rank-0 operands; sequences become arrays of inferred shape.
pub trait IntoOperand {
    /// Perform the conversion
    fn into_operand(self) -> Result<Operand>;
}

impl IntoOperand for Operand {
    #[inline]
    fn into_operand(self) -> Result<Operand> {
        Ok(self)
    }
}

impl IntoOperand for &Operand {
    #[inline]
    fn into_operand(self) -> Result<Operand> {
        Ok(self.clone())
    }
}

impl IntoOperand for Scalar {
    #[inline]
    fn into_operand(self) -> Result<Operand> {
        Ok(Operand::scalar(self))
    }
}

impl<T: OperandElement> IntoOperand for NdArray<T> {
    #[inline]
    fn into_operand(self) -> Result<Operand> {
        Ok(T::wrap(self))
    }
}

impl<T: OperandElement> IntoOperand for &NdArray<T> {
    #[inline]
    fn into_operand(self) -> Result<Operand> {
        Ok(T::wrap(self.clone()))
    }
}

macro_rules! impl_into_operand_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoOperand for $ty {
                #[inline]
                fn into_operand(self) -> Result<Operand> {
                    Ok(Operand::scalar(Scalar::from(self)))
                }
            }
        )*
    };
}

impl_into_operand_scalar!(f64, f32, i64, i32, bool, Complex128);

impl<U: IntoOperand> IntoOperand for Vec<U> {
    fn into_operand(self) -> Result<Operand> {
        let items = self
            .into_iter()
            .map(IntoOperand::into_operand)
            .collect::<Result<Vec<_>>>()?;
        Operand::stack(items)
    }
}

impl<U: IntoOperand + Clone> IntoOperand for &[U] {
    fn into_operand(self) -> Result<Operand> {
        self.to_vec().into_operand()
    }
}

impl<U: IntoOperand, const N: usize> IntoOperand for [U; N] {
    fn into_operand(self) -> Result<Operand> {
        Vec::from(self).into_operand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_is_rank_zero() {
        let op = 2.5.into_operand().unwrap();
        assert!(op.is_scalar());
        assert_eq!(op.as_scalar(), Some(Scalar::F64(2.5)));
    }

    #[test]
    fn test_nested_vec_infers_shape() {
        let op = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
            .into_operand()
            .unwrap();
        assert_eq!(op.shape(), &[2, 3]);
        assert_eq!(op.get(&[1, 0]), Some(Scalar::F64(4.0)));
    }

    #[test]
    fn test_ragged_input_rejected() {
        let err = vec![vec![1.0, 2.0], vec![3.0]].into_operand().unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_mixed_types_promote() {
        let op = vec![Scalar::I64(1), Scalar::F64(2.5)]
            .into_operand()
            .unwrap();
        assert_eq!(op.dtype(), DType::F64);
        assert_eq!(op.to_scalars(), vec![Scalar::F64(1.0), Scalar::F64(2.5)]);
    }

    #[test]
    fn test_empty_vec_is_zero_length_f64() {
        let op = Vec::<f64>::new().into_operand().unwrap();
        assert_eq!(op.shape(), &[0]);
        assert_eq!(op.dtype(), DType::F64);
    }

    #[test]
    fn test_cast_and_typed_access() {
        let op = [1i64, 2, 3].into_operand().unwrap();
        assert!(op.as_array::<f64>().is_none());
        let floats = op.to_array::<f64>().unwrap();
        assert_eq!(floats.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_any_complex() {
        let real = [Complex128::new(1.0, 0.0)].into_operand().unwrap();
        assert!(!real.any_complex());
        let complex = [Complex128::new(1.0, 2.0)].into_operand().unwrap();
        assert!(complex.any_complex());
    }
}
