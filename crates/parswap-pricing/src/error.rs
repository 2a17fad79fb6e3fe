//! Error types for swap valuation and risk.

use parswap_core::CoreError;
use parswap_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Error types for swap valuation and risk calculations.
#[derive(Error, Debug, Clone)]
pub enum PricingError {
    /// Invalid swap specification.
    #[error("Invalid swap: {reason}")]
    InvalidSwap {
        /// Description of what's invalid.
        reason: String,
    },

    /// Underlying curve error.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Underlying date or schedule error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PricingError {
    /// Creates an invalid swap error.
    #[must_use]
    pub fn invalid_swap(reason: impl Into<String>) -> Self {
        Self::InvalidSwap {
            reason: reason.into(),
        }
    }
}
