//! Layout: shape, strides, and offset for array memory layout

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;

/// Stack allocation threshold for dimensions
/// Most broadcast calls involve 4 or fewer dimensions, so we stack-allocate up to 4
const STACK_DIMS: usize = 4;

/// Shape type: dimensions of an array
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Strides type: element offsets between consecutive elements along each dimension
/// NOTE: Strides are in ELEMENTS, not bytes. A stride of 0 repeats the same
/// element along that dimension (broadcasting).
pub type Strides = SmallVec<[isize; STACK_DIMS]>;

/// Layout describes how an array's elements map onto its storage
///
/// Address of element at indices [i0, i1, ..., in]:
///   offset + i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    strides: Strides,
    offset: usize,
}

impl Layout {
    /// Create a new contiguous (row-major/C-order) layout from a shape
    ///
    /// # Example
    /// ```
    /// use numr_special::tensor::Layout;
    /// let layout = Layout::contiguous(&[2, 3, 4]);
    /// assert_eq!(layout.shape(), &[2, 3, 4]);
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: &[usize]) -> Self {
        let shape: Shape = shape.iter().copied().collect();
        let strides = Self::compute_contiguous_strides(&shape);
        Self {
            shape,
            strides,
            offset: 0,
        }
    }

    /// Create a scalar (0-dimensional) layout
    pub fn scalar() -> Self {
        Self {
            shape: SmallVec::new(),
            strides: SmallVec::new(),
            offset: 0,
        }
    }

    fn compute_contiguous_strides(shape: &[usize]) -> Strides {
        let mut strides: Strides = SmallVec::with_capacity(shape.len());
        let mut stride = 1isize;

        for &dim in shape.iter().rev() {
            strides.push(stride);
            stride *= dim.max(1) as isize;
        }

        strides.reverse();
        strides
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Get the offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Check if this is a scalar (0-dimensional)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Compute the linear index (element offset) for given indices
    pub fn index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndim() {
            return None;
        }

        for (idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if *idx >= dim {
                return None;
            }
        }

        let mut linear = self.offset as isize;
        for (&idx, &stride) in indices.iter().zip(self.strides.iter()) {
            linear += idx as isize * stride;
        }

        Some(linear as usize)
    }

    /// Create a broadcast layout to a target shape
    ///
    /// Dimensions of size 1 and missing leading dimensions get stride 0, so
    /// every coordinate along them reads element 0. Returns None if the
    /// shapes are not broadcastable.
    pub fn broadcast_to(&self, target: &[usize]) -> Option<Self> {
        if target.len() < self.ndim() {
            return None;
        }

        let mut new_shape = Shape::with_capacity(target.len());
        let mut new_strides = Strides::with_capacity(target.len());

        let pad = target.len() - self.ndim();
        for &t in &target[..pad] {
            new_shape.push(t);
            new_strides.push(0);
        }

        for ((&s, &st), &t) in self
            .shape
            .iter()
            .zip(self.strides.iter())
            .zip(&target[pad..])
        {
            if s == t {
                new_shape.push(t);
                new_strides.push(st);
            } else if s == 1 {
                new_shape.push(t);
                new_strides.push(0);
            } else {
                return None;
            }
        }

        Some(Self {
            shape: new_shape,
            strides: new_strides,
            offset: self.offset,
        })
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?}, offset: {} }}",
            self.shape.as_slice(),
            self.strides.as_slice(),
            self.offset
        )
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.shape.as_slice())
    }
}

/// Compute the broadcast shape of two shapes
pub fn broadcast_pair(a: &[usize], b: &[usize]) -> Option<Shape> {
    let max_ndim = a.len().max(b.len());
    let mut result = Shape::with_capacity(max_ndim);

    for i in 0..max_ndim {
        let a_dim = if i < a.len() { a[a.len() - 1 - i] } else { 1 };
        let b_dim = if i < b.len() { b[b.len() - 1 - i] } else { 1 };

        if a_dim == b_dim || b_dim == 1 {
            result.push(a_dim);
        } else if a_dim == 1 {
            result.push(b_dim);
        } else {
            return None;
        }
    }

    result.reverse();
    Some(result)
}

/// Compute the broadcast shape of any number of shapes
///
/// An empty list broadcasts to the rank-0 shape. Incompatible dimensions
/// fail with [`Error::BroadcastError`] naming every input shape.
pub fn broadcast_shapes<S: AsRef<[usize]>>(shapes: &[S]) -> Result<Shape> {
    let mut result = Shape::new();
    for shape in shapes {
        result = broadcast_pair(&result, shape.as_ref()).ok_or_else(|| Error::broadcast(shapes))?;
    }
    Ok(result)
}
