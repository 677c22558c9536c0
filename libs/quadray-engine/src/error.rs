//! # Engine Errors
//!
//! Error types for the geometry engine.
//!
//! ## Error Policy
//!
//! - Malformed input fails at the call site with a descriptive error
//! - Geometric degeneracy (a plane missing a sphere, a hull of two points)
//!   is an expected outcome, returned as `None` or unchanged input
//! - Count mismatches found while building a solid are logged and recorded,
//!   and only become errors when a caller asks for validation

use thiserror::Error;

/// Errors that can occur during geometry generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// Malformed scale, count or size parameter.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Malformed WXYZ input coordinate.
    #[error("Invalid coordinate at index {index}: {message}")]
    InvalidCoordinate { index: usize, message: String },

    /// A mesh or layout broke one of its structural invariants.
    #[error("Invariant violation: {message}")]
    InvariantViolation { message: String },
}

impl EngineError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid coordinate error.
    pub fn invalid_coordinate(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            index,
            message: message.into(),
        }
    }

    /// Creates an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Rejects scales that are zero, negative or not finite.
pub(crate) fn check_scale(scale: f64) -> EngineResult<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(EngineError::invalid_parameter(format!(
            "scale must be finite and positive, got {scale}"
        )))
    }
}
