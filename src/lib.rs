//! # numr-special
//!
//! **Special mathematical functions with numpy-style broadcasting.**
//!
//! numr-special provides two layers:
//!
//! - [`Vectorized`](vectorize::Vectorized): lifts any scalar function of up to
//!   six arguments into a function over broadcast arrays, with output dtype
//!   inference and optional parallel evaluation.
//! - [`Special`](special::Special): a catalog of special functions (Bessel
//!   and Hankel derivatives, zeros of Bessel, Airy, Kelvin and Fresnel
//!   functions, Legendre tables, spherical Bessel sequences, Mathieu
//!   coefficients and more) that validates arguments and dispatches to a
//!   pluggable [`Backend`](routines::Backend).
//!
//! ## Quick Start
//!
//! ```
//! use numr_special::prelude::*;
//!
//! let sp = Special::default();
//!
//! // element-wise, broadcast over the second argument
//! let d = sp.jvp(0.0, vec![0.5, 1.0, 2.0], 1)?;
//! assert_eq!(d.shape(), &[3]);
//!
//! // whole sequences and tables
//! let zeros = sp.jn_zeros(1, 3)?;
//! assert_eq!(zeros.shape(), &[3]);
//!
//! // any closure can be vectorized
//! let add = Vectorized::new(|a: f64, b: f64| a + b);
//! let sum = add.call((vec![1.0, 2.0], 10.0))?;
//! assert_eq!(sum.to_f64_vec()?, vec![11.0, 12.0]);
//! # Ok::<(), numr_special::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Parallel element evaluation for large broadcasts

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod kernels;
pub mod routines;
pub mod special;
pub mod tensor;
pub mod vectorize;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{Complex128, DType, Scalar};
    pub use crate::error::{Error, Result};
    pub use crate::kernels::{NativeBackend, ScalarKernels};
    pub use crate::routines::{Backend, RoutineLibrary};
    pub use crate::special::{Special, SpecialOptions};
    pub use crate::tensor::{IntoOperand, NdArray, Operand};
    pub use crate::vectorize::{Value, Vectorized};
}
