//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Newton step derivative dropped below the numerical floor.
    ///
    /// The iteration has stalled; `last` carries the best estimate so
    /// callers can recover by accepting it.
    #[error("Derivative underflow after {iterations} iterations: |f'| = {value:.2e}")]
    DerivativeUnderflow {
        /// The near-zero derivative value.
        value: f64,
        /// Best root estimate at the point of the stall.
        last: f64,
        /// Number of iterations completed before the stall.
        iterations: u32,
    },
}

impl MathError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
