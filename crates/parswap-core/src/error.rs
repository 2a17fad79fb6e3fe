//! Error types for core date and schedule operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for core date and schedule operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid payment schedule specification.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of what's wrong with the schedule.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }
}
