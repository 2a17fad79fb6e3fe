//! Error types for curve operations.

use parswap_core::{CoreError, Date};
use parswap_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction, queries, and bootstrap.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Query on a curve with no knots.
    #[error("Curve is empty: add at least one knot before querying")]
    EmptyCurve,

    /// A knot already exists at this time.
    #[error("Duplicate knot at t = {time:.6}")]
    DuplicateKnot {
        /// Knot time that collided with an existing one.
        time: f64,
    },

    /// Invalid value (negative time, NaN, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why the value is invalid.
        reason: String,
    },

    /// Forward rate requested over a non-positive interval.
    #[error("Invalid forward interval: t2 = {t2:.6} must exceed t1 = {t1:.6}")]
    InvalidForwardInterval {
        /// Interval start time.
        t1: f64,
        /// Interval end time.
        t2: f64,
    },

    /// Market quote set fails validation.
    #[error("Invalid quotes: {reason}")]
    InvalidQuotes {
        /// Description of what's wrong with the quote set.
        reason: String,
    },

    /// Bootstrap failed for a pillar.
    #[error("Bootstrap failed at {tenor:.2}Y: {reason}")]
    BootstrapFailed {
        /// Tenor of the failed pillar in years.
        tenor: f64,
        /// Description of the failure.
        reason: String,
    },

    /// Reference dates between curves don't match.
    #[error("Reference date mismatch: expected {expected}, got {got}")]
    ReferenceDateMismatch {
        /// Expected reference date.
        expected: Date,
        /// Actual reference date.
        got: Date,
    },

    /// Underlying mathematical error.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Underlying date or schedule error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates an invalid quotes error.
    #[must_use]
    pub fn invalid_quotes(reason: impl Into<String>) -> Self {
        Self::InvalidQuotes {
            reason: reason.into(),
        }
    }

    /// Creates a bootstrap failure error.
    #[must_use]
    pub fn bootstrap_failed(tenor: f64, reason: impl Into<String>) -> Self {
        Self::BootstrapFailed {
            tenor,
            reason: reason.into(),
        }
    }
}
