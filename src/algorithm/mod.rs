//! Numerical algorithms behind the native backend
//!
//! [`special`] holds the scalar kernels and sequence routines that
//! [`NativeBackend`](crate::kernels::NativeBackend) delegates to. Nothing in
//! here validates catalog preconditions; callers are expected to have done so.

pub mod special;
