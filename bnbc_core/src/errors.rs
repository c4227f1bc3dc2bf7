//! # Error Types
//!
//! Structured error types for bnbc_core. Every calculation returns
//! `CalcResult<T>`; errors carry enough context for a caller to name the
//! offending field or quantity in a user-facing message.
//!
//! Code-table lookups never error: an unresolvable key falls back to the
//! documented default value for that table (see [`crate::tables`]).
//!
//! ## Example
//!
//! ```rust
//! use bnbc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_m: f64) -> CalcResult<()> {
//!     if height_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "height_m",
//!             height_m.to_string(),
//!             "Building height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bnbc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. Errors
/// are recovered at the boundary of a single calculation invocation; a
/// failed calculation leaves no state behind for the next one.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Geometry degenerates to a zero or negative area/dimension,
    /// making a ratio undefined (e.g. Ach <= 0 in confinement checks)
    #[error("Degenerate geometry: {quantity} - {detail}")]
    DegenerateGeometry { quantity: String, detail: String },

    /// An analysis over a story sequence was given too little or
    /// inconsistent data (fewer than 2 stories, non-monotonic elevations)
    #[error("Insufficient data for {analysis}: {reason}")]
    InsufficientData { analysis: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(quantity: impl Into<String>, detail: impl Into<String>) -> Self {
        CalcError::DegenerateGeometry {
            quantity: quantity.into(),
            detail: detail.into(),
        }
    }

    /// Create an InsufficientData error
    pub fn insufficient_data(analysis: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InsufficientData {
            analysis: analysis.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::InsufficientData { .. } => "INSUFFICIENT_DATA",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            CalcError::invalid_input("height_m", "-5.0", "Building height must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::degenerate_geometry("Ach", "confined core area is zero").error_code(),
            "DEGENERATE_GEOMETRY"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::insufficient_data("story drift", "at least 2 stories are required");
        assert_eq!(
            error.to_string(),
            "Insufficient data for story drift: at least 2 stories are required"
        );
    }
}
