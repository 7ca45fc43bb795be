//! Error types for numr-special

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using numr-special's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numr-special operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A broadcasting adapter was constructed or invoked with an invalid configuration
    #[error("Configuration error: {reason}")]
    Configuration {
        /// What was wrong with the configuration
        reason: String,
    },

    /// A catalog function's input failed one of its preconditions
    #[error("Domain error for '{arg}': {reason}")]
    Domain {
        /// The offending argument
        arg: &'static str,
        /// The message of the failing check
        reason: String,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shapes {shapes:?}")]
    BroadcastError {
        /// Shapes of every argument taking part in the broadcast
        shapes: Vec<Vec<usize>>,
    },

    /// Shape mismatch (ragged nested input or wrong data length)
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// A value cannot be represented in the requested element type
    #[error("Cannot cast value of dtype {from} to {to}")]
    DTypeCast {
        /// Source dtype
        from: DType,
        /// Requested dtype
        to: DType,
    },

    /// Invalid argument provided to a routine
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Backend limitation - request valid but outside what the backend evaluates
    #[error("{backend} limitation: {operation} - {reason}")]
    BackendLimitation {
        /// The backend that has the limitation
        backend: &'static str,
        /// The operation being attempted
        operation: &'static str,
        /// Description of the limitation
        reason: String,
    },

    /// Routine not provided by the backend
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// Description of the unimplemented feature
        feature: &'static str,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Create a domain error
    pub fn domain(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::Domain {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a broadcast error from the shapes involved
    pub fn broadcast<S: AsRef<[usize]>>(shapes: &[S]) -> Self {
        Self::BroadcastError {
            shapes: shapes.iter().map(|s| s.as_ref().to_vec()).collect(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a backend limitation error
    pub fn backend_limitation(
        backend: &'static str,
        operation: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::BackendLimitation {
            backend,
            operation,
            reason: reason.into(),
        }
    }

    /// True for errors raised by a catalog precondition
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
