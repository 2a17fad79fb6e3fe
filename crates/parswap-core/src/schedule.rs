//! Payment schedule generation.

use crate::error::{CoreError, CoreResult};
use crate::types::{Date, Frequency};

/// Generates periodic payment dates between `start` and `end`.
///
/// Dates roll forward from `start` in steps of the frequency's months.
/// The start date itself is excluded. If the roll does not land exactly
/// on `end`, the end date is appended as a final stub period.
///
/// # Arguments
///
/// * `start` - Accrual start of the first period (excluded from output)
/// * `end` - Final payment date (always the last element of the output)
/// * `frequency` - Payment frequency
///
/// # Errors
///
/// Returns `CoreError::InvalidSchedule` if `start >= end`.
///
/// # Example
///
/// ```rust
/// use parswap_core::schedule::payment_dates;
/// use parswap_core::types::{Date, Frequency};
///
/// let start = Date::from_ymd(2026, 1, 7).unwrap();
/// let end = Date::from_ymd(2028, 1, 7).unwrap();
/// let dates = payment_dates(start, end, Frequency::SemiAnnual).unwrap();
/// assert_eq!(dates.len(), 4);
/// ```
pub fn payment_dates(start: Date, end: Date, frequency: Frequency) -> CoreResult<Vec<Date>> {
    if start >= end {
        return Err(CoreError::invalid_schedule(format!(
            "start {start} must precede end {end}"
        )));
    }

    let step = frequency.months_per_period() as i32;
    let mut dates = Vec::new();
    let mut k = 1;

    loop {
        let next = start.add_months(k * step)?;
        if next > end {
            break;
        }
        dates.push(next);
        k += 1;
    }

    // Ensure the end date is always the final payment (stub period)
    if dates.last() != Some(&end) {
        dates.push(end);
    }

    Ok(dates)
}
