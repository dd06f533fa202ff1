//! Error types for indicator operations.
//!
//! Only caller contract violations are errors. Short or empty price history is
//! not: it yields undefined entries in the output series instead.

use thiserror::Error;

/// Result type alias for indicator operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur during indicator computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A period, span or window argument was zero.
    #[error("Invalid period '{name}': {value} (must be > 0)")]
    InvalidPeriod {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value.
        value: usize,
    },

    /// Invalid non-period parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Two sequences that must be aligned index-for-index differ in length.
    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
}

impl IndicatorError {
    /// Reject a zero period.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InvalidPeriod`] when `value == 0`.
    pub fn check_period(name: &'static str, value: usize) -> Result<usize> {
        if value == 0 {
            Err(Self::InvalidPeriod { name, value })
        } else {
            Ok(value)
        }
    }
}
