//! Interest rate swap definition and cash flow generation.

use serde::{Deserialize, Serialize};

use parswap_core::daycounts::year_fraction;
use parswap_core::schedule::payment_dates;
use parswap_core::{Date, Frequency};

use crate::error::{PricingError, PricingResult};

/// A fixed leg cash flow: everything about the payment is known up
/// front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Accrual period start.
    pub accrual_start: Date,
    /// Accrual period end.
    pub accrual_end: Date,
    /// Payment date (the accrual end; no payment lag).
    pub pay_date: Date,
    /// Actual/Actual (ISDA) accrual fraction of the period.
    pub day_fraction: f64,
    /// Fixed rate applied over the period.
    pub rate: f64,
    /// Payment amount: `notional × rate × day_fraction`.
    pub amount: f64,
}

/// A floating leg accrual period. The rate is resolved from a
/// projection curve at valuation time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatPeriod {
    /// Accrual period start.
    pub accrual_start: Date,
    /// Accrual period end.
    pub accrual_end: Date,
    /// Payment date (the accrual end; no payment lag).
    pub pay_date: Date,
    /// Actual/Actual (ISDA) accrual fraction of the period.
    pub day_fraction: f64,
}

/// A receiver interest rate swap: receive fixed annually, pay floating
/// semi-annually.
///
/// The swap is a pure value object. Cash flows and float periods are
/// derived from the date schedule on demand and never cached, so a swap
/// can be revalued against any curve pair without stale state.
///
/// # Example
///
/// ```rust
/// use parswap_core::Date;
/// use parswap_pricing::swap::Swap;
///
/// let start = Date::from_ymd(2026, 1, 7).unwrap();
/// let swap = Swap::from_tenor_years(start, 9.0, 1_000_000.0, 0.0309).unwrap();
///
/// assert_eq!(swap.fixed_cash_flows().unwrap().len(), 9);
/// assert_eq!(swap.float_periods().unwrap().len(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swap {
    start_date: Date,
    end_date: Date,
    notional: f64,
    fixed_rate: f64,
    fixed_frequency: Frequency,
    float_frequency: Frequency,
}

impl Swap {
    /// Creates a new swap.
    ///
    /// # Arguments
    ///
    /// * `start_date` - Effective date
    /// * `end_date` - Termination date (must be after `start_date`)
    /// * `notional` - Notional amount (must be positive; never exchanged)
    /// * `fixed_rate` - Fixed leg rate as a decimal
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidSwap` on a non-positive notional or
    /// a degenerate date range.
    pub fn new(
        start_date: Date,
        end_date: Date,
        notional: f64,
        fixed_rate: f64,
    ) -> PricingResult<Self> {
        if !(notional.is_finite() && notional > 0.0) {
            return Err(PricingError::invalid_swap(format!(
                "notional must be positive, got {notional}"
            )));
        }
        if end_date <= start_date {
            return Err(PricingError::invalid_swap(format!(
                "end date {end_date} must be after start date {start_date}"
            )));
        }
        if !fixed_rate.is_finite() {
            return Err(PricingError::invalid_swap("fixed rate is not finite"));
        }

        Ok(Self {
            start_date,
            end_date,
            notional,
            fixed_rate,
            fixed_frequency: Frequency::Annual,
            float_frequency: Frequency::SemiAnnual,
        })
    }

    /// Creates a swap maturing a whole number of years after the start.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidSwap` if the tenor does not land on
    /// whole months, plus the validations of [`new`](Self::new).
    pub fn from_tenor_years(
        start_date: Date,
        tenor_years: f64,
        notional: f64,
        fixed_rate: f64,
    ) -> PricingResult<Self> {
        let months = tenor_years * 12.0;
        let rounded = months.round();
        if (months - rounded).abs() > 1e-9 {
            return Err(PricingError::invalid_swap(format!(
                "tenor {tenor_years}Y does not land on whole months"
            )));
        }

        let end_date = start_date.add_months(rounded as i32)?;
        Self::new(start_date, end_date, notional, fixed_rate)
    }

    /// Returns a copy struck at the given fixed rate.
    ///
    /// This is the one permitted mutation: striking the swap at its
    /// computed par rate.
    #[must_use]
    pub fn with_fixed_rate(mut self, fixed_rate: f64) -> Self {
        self.fixed_rate = fixed_rate;
        self
    }

    /// Returns a copy with non-standard leg frequencies.
    #[must_use]
    pub fn with_frequencies(mut self, fixed: Frequency, float: Frequency) -> Self {
        self.fixed_frequency = fixed;
        self.float_frequency = float;
        self
    }

    /// Returns the effective date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the termination date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the notional.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the fixed rate.
    #[must_use]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Returns the fixed leg payment frequency.
    #[must_use]
    pub fn fixed_frequency(&self) -> Frequency {
        self.fixed_frequency
    }

    /// Returns the floating leg payment frequency.
    #[must_use]
    pub fn float_frequency(&self) -> Frequency {
        self.float_frequency
    }

    /// Generates the fixed leg cash flows.
    ///
    /// Recomputed from the schedule on every call.
    pub fn fixed_cash_flows(&self) -> PricingResult<Vec<CashFlow>> {
        let dates = payment_dates(self.start_date, self.end_date, self.fixed_frequency)?;

        let mut flows = Vec::with_capacity(dates.len());
        let mut prev = self.start_date;
        for date in dates {
            let day_fraction = year_fraction(prev, date);
            flows.push(CashFlow {
                accrual_start: prev,
                accrual_end: date,
                pay_date: date,
                day_fraction,
                rate: self.fixed_rate,
                amount: self.notional * self.fixed_rate * day_fraction,
            });
            prev = date;
        }

        Ok(flows)
    }

    /// Generates the floating leg accrual periods.
    ///
    /// Recomputed from the schedule on every call; rates are left to be
    /// resolved from a projection curve.
    pub fn float_periods(&self) -> PricingResult<Vec<FloatPeriod>> {
        let dates = payment_dates(self.start_date, self.end_date, self.float_frequency)?;

        let mut periods = Vec::with_capacity(dates.len());
        let mut prev = self.start_date;
        for date in dates {
            periods.push(FloatPeriod {
                accrual_start: prev,
                accrual_end: date,
                pay_date: date,
                day_fraction: year_fraction(prev, date),
            });
            prev = date;
        }

        Ok(periods)
    }
}
