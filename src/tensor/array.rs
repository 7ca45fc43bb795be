//! Owned n-dimensional array with contiguous row-major storage

use super::Layout;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// N-dimensional array of a single element type
///
/// `NdArray` pairs reference-counted contiguous storage with a [`Layout`].
/// Cloning is cheap: clones share the same buffer.
///
/// # Example
///
/// ```
/// use numr_special::tensor::NdArray;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.get(&[1, 0]), Some(3.0));
/// ```
#[derive(Clone)]
pub struct NdArray<T: Element> {
    data: Arc<[T]>,
    layout: Layout,
}

impl<T: Element> NdArray<T> {
    /// Create an array from owned data in row-major order
    ///
    /// Returns an error if `data.len()` does not equal the product of the
    /// `shape` dimensions.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(Error::shape_mismatch(&[expected], &[data.len()]));
        }
        Ok(Self {
            data: data.into(),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a one-dimensional array
    pub fn from_vec1(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            data: data.into(),
            layout: Layout::contiguous(&[len]),
        }
    }

    /// Create a 0-dimensional array holding one value
    pub fn scalar(value: T) -> Self {
        Self {
            data: Arc::from([value]),
            layout: Layout::scalar(),
        }
    }

    /// Create an array of the given shape filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        let len: usize = shape.iter().product();
        Self {
            data: vec![T::zero(); len].into(),
            layout: Layout::contiguous(shape),
        }
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Check if this is a scalar (0-dimensional array)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Elements in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at a multi-dimensional index
    pub fn get(&self, indices: &[usize]) -> Option<T> {
        self.layout.index(indices).map(|i| self.data[i])
    }

    /// Element at a linear storage offset
    #[inline]
    pub fn get_linear(&self, offset: usize) -> Option<T> {
        self.data.get(offset).copied()
    }

    /// The single value of a one-element array
    pub fn item(&self) -> Option<T> {
        if self.numel() == 1 {
            self.data.first().copied()
        } else {
            None
        }
    }

    /// Copy the elements into a `Vec` in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Apply `f` element-wise into a new array of the same shape
    pub fn map<U: Element>(&self, f: impl Fn(T) -> U) -> NdArray<U> {
        NdArray {
            data: self.data.iter().map(|&v| f(v)).collect(),
            layout: self.layout.clone(),
        }
    }

    /// Keep the first `len` elements of a one-dimensional array
    pub fn truncate(&self, len: usize) -> Self {
        let len = len.min(self.numel());
        Self::from_vec1(self.data[..len].to_vec())
    }
}

impl<T: Element> PartialEq for NdArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl<T: Element> fmt::Debug for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdArray")
            .field("dtype", &T::DTYPE)
            .field("shape", &self.shape())
            .field("data", &&self.data[..])
            .finish()
    }
}

impl<T: Element> From<Vec<T>> for NdArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec1(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        assert!(NdArray::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]).is_err());
        let a = NdArray::from_vec(vec![1i64, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        assert_eq!(a.numel(), 6);
        assert_eq!(a.get(&[1, 2]), Some(6));
        assert_eq!(a.dtype(), DType::I64);
    }

    #[test]
    fn test_scalar_array() {
        let a = NdArray::scalar(2.5);
        assert!(a.is_scalar());
        assert_eq!(a.item(), Some(2.5));
        assert_eq!(a.get(&[]), Some(2.5));
    }

    #[test]
    fn test_zero_size() {
        let a = NdArray::<f64>::zeros(&[2, 0]);
        assert_eq!(a.numel(), 0);
        assert!(a.as_slice().is_empty());
    }

    #[test]
    fn test_map_and_truncate() {
        let a = NdArray::from_vec1(vec![1.0, 2.0, 3.0]);
        let doubled = a.map(|v| v * 2.0);
        assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!(a.truncate(2).as_slice(), &[1.0, 2.0]);
        assert_eq!(a.truncate(10).numel(), 3);
    }
}
