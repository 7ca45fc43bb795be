//! Array types
//!
//! This module provides [`NdArray`], an owned n-dimensional array with
//! row-major storage, its [`Layout`] (with stride-0 broadcasting), and
//! the dtype-tagged [`Operand`] consumed by the broadcasting adapter.

mod array;
mod layout;
mod operand;

pub use array::NdArray;
pub use layout::{Layout, Shape, Strides, broadcast_pair, broadcast_shapes};
pub use operand::{IntoOperand, Operand, OperandElement};
