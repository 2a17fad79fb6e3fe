//! Time-shifted curve view for forward valuation.

use parswap_core::daycounts::year_fraction;
use parswap_core::Date;

use crate::error::CurveResult;
use crate::traits::Curve;

/// A curve wrapper that re-expresses a base curve at a later reference
/// date.
///
/// Queries at the new time `t` read the base curve at `t + shift`, where
/// `shift` is the Actual/Actual (ISDA) year fraction between the two
/// reference dates. The base curve's knot structure keeps parametrizing
/// the term structure; nothing is refitted.
///
/// Discounting composes through the [`Curve`] trait: the re-read rate is
/// applied over the NEW time, `DF(t) = exp(-r(t + shift)·t)`.
///
/// # Example
///
/// ```rust
/// use parswap_core::Date;
/// use parswap_curves::curves::{TimeShiftedCurve, ZeroCurve};
/// use parswap_curves::traits::Curve;
///
/// let mut base = ZeroCurve::new(Date::from_ymd(2026, 1, 7).unwrap());
/// base.add_point(0.5, 0.0411).unwrap();
/// base.add_point(1.0, 0.0414).unwrap();
///
/// let forward_date = Date::from_ymd(2026, 4, 7).unwrap();
/// let shifted = TimeShiftedCurve::new(&base, forward_date);
///
/// // Roughly three months forward: new 0.25y reads the base near 0.5y
/// let r = shifted.zero_rate(0.25).unwrap();
/// assert!((r - 0.0411).abs() < 1e-3);
/// ```
pub struct TimeShiftedCurve<'a, C: Curve + ?Sized> {
    base: &'a C,
    reference_date: Date,
    shift: f64,
}

impl<'a, C: Curve + ?Sized> TimeShiftedCurve<'a, C> {
    /// Creates a view of `base` anchored at a new reference date.
    ///
    /// # Arguments
    ///
    /// * `base` - The curve to re-express
    /// * `reference_date` - The new valuation date (at or after the
    ///   base curve's reference date)
    pub fn new(base: &'a C, reference_date: Date) -> Self {
        let shift = year_fraction(base.reference_date(), reference_date);
        Self {
            base,
            reference_date,
            shift,
        }
    }

    /// Returns the time offset applied to queries, in years.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Returns a reference to the base curve.
    pub fn base(&self) -> &C {
        self.base
    }
}

impl<C: Curve + ?Sized> Curve for TimeShiftedCurve<'_, C> {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        self.base.zero_rate(t + self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::ZeroCurve;
    use approx::assert_relative_eq;

    fn base_curve() -> ZeroCurve {
        let mut curve = ZeroCurve::new(Date::from_ymd(2026, 1, 7).unwrap());
        curve.add_point(0.5, 0.0411).unwrap();
        curve.add_point(1.0, 0.0414).unwrap();
        curve.add_point(2.0, 0.0373).unwrap();
        curve
    }

    #[test]
    fn test_shift_from_dates() {
        let base = base_curve();
        let shifted = TimeShiftedCurve::new(&base, Date::from_ymd(2026, 4, 7).unwrap());

        // 90 days in a non-leap year
        assert_relative_eq!(shifted.shift(), 90.0 / 365.0, epsilon = 1e-12);
        assert_eq!(
            shifted.reference_date(),
            Date::from_ymd(2026, 4, 7).unwrap()
        );
    }

    #[test]
    fn test_requeries_base_at_offset_time() {
        let base = base_curve();
        let shifted = TimeShiftedCurve::new(&base, Date::from_ymd(2026, 4, 7).unwrap());

        let s = shifted.shift();
        assert_relative_eq!(
            shifted.zero_rate(1.0).unwrap(),
            base.zero_rate(1.0 + s).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_discounts_over_new_time() {
        let base = base_curve();
        let shifted = TimeShiftedCurve::new(&base, Date::from_ymd(2026, 4, 7).unwrap());

        let t = 0.75;
        let r = shifted.zero_rate(t).unwrap();
        assert_relative_eq!(
            shifted.discount_factor(t).unwrap(),
            (-r * t).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_same_date_is_identity() {
        let base = base_curve();
        let shifted = TimeShiftedCurve::new(&base, base.reference_date());

        assert_eq!(shifted.shift(), 0.0);
        assert_relative_eq!(
            shifted.zero_rate(1.5).unwrap(),
            base.zero_rate(1.5).unwrap(),
            epsilon = 1e-12
        );
    }
}
