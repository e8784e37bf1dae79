//! # Error Types
//!
//! Structured error types for paint_core.
//!
//! The estimation engine and the coating physics functions never fail: bad
//! numbers collapse to defined defaults instead. Errors only appear at the
//! edges of the crate, when a caller asks for strict parsing of an enumerated
//! value, decodes an [`EstimateInput`](crate::project::EstimateInput) from
//! JSON, or runs the optional strict pre-check before estimating.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::errors::{CalcError, CalcResult};
//!
//! fn validate_area(area_sqm: f64) -> CalcResult<()> {
//!     if area_sqm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "area",
//!             area_sqm.to_string(),
//!             "Area must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_area(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for paint_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for boundary operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A string did not name any known variant of an enumeration
    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: String, value: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownValue error
    pub fn unknown_value(kind: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownValue {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create a SerializationError from any displayable cause
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        CalcError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownValue { .. } => "UNKNOWN_VALUE",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Require a finite value strictly greater than zero
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"))
    }
}

/// Require a finite value of zero or more
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be zero or more"))
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err)
    }
}
