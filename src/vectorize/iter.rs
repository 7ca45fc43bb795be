//! Row-major coordinate walker over a broadcast shape

use crate::error::{Error, Result};
use crate::tensor::Layout;
use smallvec::SmallVec;

/// Per-argument storage offsets for one broadcast coordinate
pub type Offsets = SmallVec<[usize; 6]>;

/// Walks every coordinate of a broadcast shape in row-major order
///
/// Each step yields the storage offset of the selected element in every
/// argument. Arguments are addressed through stride-0 broadcast layouts, so
/// a dimension of size 1 always reads index 0 along that dimension.
#[derive(Clone, Debug)]
pub struct BroadcastIter {
    shape: Vec<usize>,
    layouts: Vec<Layout>,
    coords: Vec<usize>,
    offsets: Offsets,
    remaining: usize,
}

impl BroadcastIter {
    /// Create a walker over `shape` for arguments with the given layouts
    pub fn new(shape: &[usize], layouts: &[&Layout]) -> Result<Self> {
        let layouts = layouts
            .iter()
            .map(|l| {
                l.broadcast_to(shape).ok_or_else(|| {
                    Error::broadcast(&[l.shape().to_vec(), shape.to_vec()])
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let offsets = layouts.iter().map(Layout::offset).collect();
        Ok(Self {
            shape: shape.to_vec(),
            coords: vec![0; shape.len()],
            remaining: shape.iter().product(),
            layouts,
            offsets,
        })
    }

    /// Total number of coordinates
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// True for zero-size shapes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offsets for the coordinate at row-major position `linear`
    pub fn offsets_at(&self, linear: usize) -> Offsets {
        let mut offsets: Offsets = self.layouts.iter().map(Layout::offset).collect();
        let mut rest = linear;
        for dim in (0..self.shape.len()).rev() {
            let size = self.shape[dim];
            let idx = rest % size;
            rest /= size;
            for (off, layout) in offsets.iter_mut().zip(&self.layouts) {
                *off = (*off as isize + idx as isize * layout.strides()[dim]) as usize;
            }
        }
        offsets
    }

    fn advance(&mut self) {
        for dim in (0..self.shape.len()).rev() {
            self.coords[dim] += 1;
            for (off, layout) in self.offsets.iter_mut().zip(&self.layouts) {
                *off = (*off as isize + layout.strides()[dim]) as usize;
            }
            if self.coords[dim] < self.shape[dim] {
                return;
            }
            // Carry: rewind this dimension
            let wrapped = self.coords[dim] as isize;
            self.coords[dim] = 0;
            for (off, layout) in self.offsets.iter_mut().zip(&self.layouts) {
                *off = (*off as isize - wrapped * layout.strides()[dim]) as usize;
            }
        }
    }
}

impl Iterator for BroadcastIter {
    type Item = Offsets;

    fn next(&mut self) -> Option<Offsets> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.offsets.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BroadcastIter {}
