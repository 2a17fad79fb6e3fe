//! # Parswap Core
//!
//! Core types for the Parswap swap pricing library.
//!
//! This crate provides the foundational building blocks used throughout
//! Parswap:
//!
//! - **Types**: the [`types::Date`] newtype and payment [`types::Frequency`]
//! - **Day Count Conventions**: Actual/Actual (ISDA) year fractions
//! - **Schedules**: periodic payment date generation with stub handling
//!
//! ## Example
//!
//! ```rust
//! use parswap_core::prelude::*;
//!
//! let start = Date::from_ymd(2026, 1, 7).unwrap();
//! let end = Date::from_ymd(2027, 1, 7).unwrap();
//!
//! // One full non-leap year
//! assert!((year_fraction(start, end) - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_errors_doc)]

pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{year_fraction, ActActIsda, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::schedule::payment_dates;
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
