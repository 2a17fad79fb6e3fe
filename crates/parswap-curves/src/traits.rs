//! Core trait for zero curve operations.
//!
//! This module defines the [`Curve`] trait shared by concrete curves and
//! curve wrappers. The trait fixes the discounting convention for every
//! pricing and bootstrap path: continuously compounded,
//! `DF(t) = exp(-r(t)·t)`. A curve populated with continuously
//! compounded zero rates must only ever be discounted this way; the
//! simple-rate formula survives solely as an explicitly separate
//! accessor on [`crate::curves::ZeroCurve`].

use parswap_core::daycounts::year_fraction;
use parswap_core::Date;

use crate::error::{CurveError, CurveResult};

/// Accrual starts at or below this time are treated as starting at the
/// curve's time zero, so the period is priced off the zero rate at the
/// period end instead of a forward over a near-empty interval.
pub const FIRST_PERIOD_EPS: f64 = 1e-8;

/// The core trait for zero curves.
///
/// A curve answers zero-rate, discount-factor, and forward-rate queries
/// against times measured in years from its reference date. Pricing and
/// risk components only see this trait, so a knot-based curve and a
/// time-shifted view of one are interchangeable.
pub trait Curve: Send + Sync {
    /// Returns the curve's reference (valuation) date.
    ///
    /// All times are measured from this date; a time of 1.0 is one year
    /// out.
    fn reference_date(&self) -> Date;

    /// Returns the continuously compounded zero rate at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyCurve`] if no knots exist.
    fn zero_rate(&self, t: f64) -> CurveResult<f64>;

    /// Returns the discount factor from the reference date to time `t`.
    ///
    /// Continuous compounding: `DF(t) = exp(-r(t)·t)`. Returns exactly
    /// 1.0 for `t ≤ 0`.
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        let r = self.zero_rate(t)?;
        Ok((-r * t).exp())
    }

    /// Returns the simply compounded forward rate between `t1` and `t2`.
    ///
    /// # Formula
    ///
    /// `F(t1, t2) = (DF(t1) / DF(t2) − 1) / (t2 − t1)`
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidForwardInterval`] when `t2 ≤ t1`.
    fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Err(CurveError::InvalidForwardInterval { t1, t2 });
        }

        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;

        Ok((df1 / df2 - 1.0) / (t2 - t1))
    }

    /// Returns the Actual/Actual (ISDA) year fraction from the reference
    /// date to the given date.
    fn year_fraction(&self, date: Date) -> f64 {
        year_fraction(self.reference_date(), date)
    }

    /// Returns the discount factor for a specific date.
    fn discount_factor_at(&self, date: Date) -> CurveResult<f64> {
        self.discount_factor(self.year_fraction(date))
    }
}
