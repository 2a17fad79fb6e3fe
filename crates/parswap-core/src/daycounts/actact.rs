//! Actual/Actual (ISDA) day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The year fraction is calculated by splitting the period at calendar-year
/// boundaries, so days in leap years divide by 366 and days in non-leap
/// years divide by 365.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
#[derive(Debug, Clone, Copy, Default)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start >= end {
            return 0.0;
        }

        let mut total = 0.0;
        let mut current = start;

        // Process year by year
        while current.year() < end.year() {
            let year_end = Date::from_ymd(current.year(), 12, 31).unwrap();
            let days_in_year = current.days_in_year();
            let days = current.days_between(&year_end) + 1; // Include Dec 31

            total += days as f64 / f64::from(days_in_year);

            current = Date::from_ymd(current.year() + 1, 1, 1).unwrap();
        }

        // Handle remaining portion in the final year
        if current < end {
            let days = current.days_between(&end);
            let days_in_year = current.days_in_year();
            total += days as f64 / f64::from(days_in_year);
        }

        total
    }
}
