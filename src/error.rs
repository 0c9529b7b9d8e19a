//! Error types for qdecide.
//!
//! All errors are strongly typed using thiserror. Only structural problems
//! with the inputs are errors; numeric edge cases (non-positive outcomes,
//! zero normalization mass, out-of-range correlations) yield sentinel or
//! degenerate values instead.

use thiserror::Error;

/// Validation errors raised while building or loading configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Evidence weight {value} must be finite and non-negative")]
    InvalidEvidenceWeight {
        value: f64,
    },

    #[error("Uncertainty factor {value} must be finite and non-negative")]
    InvalidUncertaintyFactor {
        value: f64,
    },

    #[error("Power utility exponent {value} must be finite")]
    InvalidGamma {
        value: f64,
    },

    #[error("Malformed configuration: {message}")]
    MalformedConfig {
        message: String,
    },
}

/// Top-level error type for decision evaluators.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// Two parallel sequences differ in length.
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An input that needs at least one element was empty.
    #[error("Empty input: {context} requires at least one element")]
    EmptyInput {
        context: &'static str,
    },

    /// Configuration failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl DecisionError {
    /// Creates a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(context: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context,
            expected,
            actual,
        }
    }

    /// Creates an empty input error.
    #[must_use]
    pub const fn empty_input(context: &'static str) -> Self {
        Self::EmptyInput { context }
    }

    /// Returns true if this is a length mismatch.
    #[must_use]
    pub const fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }

    /// Returns true if this is an empty input error.
    #[must_use]
    pub const fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Checks that two parallel sequences have equal length.
pub(crate) fn ensure_same_len(
    context: &'static str,
    expected: usize,
    actual: usize,
) -> DecisionResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(DecisionError::length_mismatch(context, expected, actual))
    }
}

/// Result type alias for decision operations.
pub type DecisionResult<T> = Result<T, DecisionError>;
