//! Function catalog
//!
//! [`Special`] is the entry point for every special function in the crate.
//! It validates arguments, then either broadcasts a backend kernel with
//! [`Vectorized`] or calls one backend routine and returns its result.
//!
//! ```
//! use numr_special::special::Special;
//!
//! let sp = Special::default();
//! assert_eq!(sp.sinc(0.0).unwrap().as_f64(), Some(1.0));
//!
//! let zeros = sp.jn_zeros(0, 2).unwrap();
//! assert!((zeros.as_slice()[0] - 2.404825557695773).abs() < 1e-12);
//! ```
//!
//! # Argument checks
//!
//! Catalog functions that take orders or counts check them in a fixed
//! order and fail with [`Error::Domain`](crate::error::Error::Domain) on the
//! first violated precondition. No backend routine is called before every
//! check has passed. Errors raised by the backend itself are returned
//! unchanged.

mod bessel;
mod elementwise;
mod legendre;
mod mathieu;
mod sequences;
mod validate;
mod zeros;

pub use bessel::DerivativeKind;
pub use mathieu::predicted_coefficients;
pub use sequences::SPHEROIDAL_MAX_SPAN;
pub use zeros::JNJNP_MAX_ZEROS;

use crate::kernels::NativeBackend;
use crate::routines::Backend;
use crate::vectorize::{DEFAULT_PARALLEL_MIN_LEN, ScalarFn, Vectorized};
use std::fmt;

/// Number of Mathieu coefficients above which a warning is logged
pub const DEFAULT_COEFFICIENT_WARN_LIMIT: usize = 251;

/// Catalog configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialOptions {
    /// Predicted Mathieu coefficient count above which a warning is logged
    pub coefficient_warn_limit: usize,
    /// Cache intermediate values of the Bessel derivative recurrence within
    /// each call
    pub memoize_derivatives: bool,
    /// Element count before broadcast evaluation goes parallel
    pub parallel_min_len: usize,
}

impl Default for SpecialOptions {
    fn default() -> Self {
        Self {
            coefficient_warn_limit: DEFAULT_COEFFICIENT_WARN_LIMIT,
            memoize_derivatives: false,
            parallel_min_len: DEFAULT_PARALLEL_MIN_LEN,
        }
    }
}

impl SpecialOptions {
    /// Enable or disable the derivative cache
    pub fn with_memoized_derivatives(mut self, enabled: bool) -> Self {
        self.memoize_derivatives = enabled;
        self
    }

    /// Set the Mathieu coefficient warning threshold
    pub fn with_coefficient_warn_limit(mut self, limit: usize) -> Self {
        self.coefficient_warn_limit = limit;
        self
    }

    /// Set the element count before broadcast evaluation goes parallel
    pub fn with_parallel_min_len(mut self, min_len: usize) -> Self {
        self.parallel_min_len = min_len;
        self
    }
}

/// Special functions evaluated on a backend
///
/// Cheap to share across threads: every method takes `&self` and no state
/// is kept between calls.
pub struct Special<B = NativeBackend> {
    backend: B,
    options: SpecialOptions,
}

impl<B: Backend> Special<B> {
    /// Catalog on `backend` with default options
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, SpecialOptions::default())
    }

    /// Catalog on `backend` with explicit options
    pub fn with_options(backend: B, options: SpecialOptions) -> Self {
        Self { backend, options }
    }

    /// The backend every call is forwarded to
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Active options
    pub fn options(&self) -> &SpecialOptions {
        &self.options
    }

    /// Lift a scalar function into a broadcasting function with this
    /// catalog's parallel threshold
    fn vectorize<F, Args>(&self, func: F) -> Vectorized<F, Args>
    where
        F: ScalarFn<Args>,
    {
        Vectorized::new(func).with_parallel_min_len(self.options.parallel_min_len)
    }
}

impl Default for Special<NativeBackend> {
    fn default() -> Self {
        Self::new(NativeBackend)
    }
}

impl<B: fmt::Debug> fmt::Debug for Special<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Special")
            .field("backend", &self.backend)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
