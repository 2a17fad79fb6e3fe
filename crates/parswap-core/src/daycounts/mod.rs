//! Day count conventions.
//!
//! A day count convention converts a pair of dates into a year fraction.
//! The swap engine uses Actual/Actual (ISDA) throughout: accrual periods,
//! curve pillar times, and discounting all measure time the same way, so
//! bootstrapped curves are queried at exactly the times the instruments
//! were priced with.

mod actact;

pub use actact::ActActIsda;

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the convention name (e.g., "ACT/ACT ISDA").
    fn name(&self) -> &'static str;

    /// Returns the year fraction between two dates.
    ///
    /// Returns 0.0 when `start >= end`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Returns the number of calendar days between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Year fraction between two dates under Actual/Actual (ISDA).
///
/// Convenience wrapper over [`ActActIsda`] for call sites that don't
/// need convention polymorphism.
#[must_use]
pub fn year_fraction(start: Date, end: Date) -> f64 {
    ActActIsda.year_fraction(start, end)
}
