//! Swap valuation: leg PVs, par rate, accruals, clean/dirty split.

use serde::{Deserialize, Serialize};

use parswap_core::daycounts::year_fraction;
use parswap_core::Date;
use parswap_curves::traits::{Curve, FIRST_PERIOD_EPS};
use parswap_curves::CurveError;

use crate::error::{PricingError, PricingResult};
use crate::swap::{FloatPeriod, Swap};

/// A complete valuation of a swap at one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Receiver PV including accrued interest.
    pub dirty_pv: f64,
    /// Dirty PV with the accrued fixed amount removed and the accrued
    /// float amount added back.
    pub clean_pv: f64,
    /// Fixed rate that would make the remaining swap worth zero.
    pub par_rate: f64,
    /// Accrued fixed amount in the period straddling the valuation date.
    pub fixed_accrual: f64,
    /// Accrued float amount in the period straddling the valuation date.
    pub float_accrual: f64,
}

/// Values swaps against a (projection, discount) curve pair.
///
/// Receiver convention throughout: the swap receives fixed annually and
/// pays floating semi-annually, so `PV = FixedLegPV − FloatLegPV`.
///
/// Both curves must be expressed at the valuation date. For forward
/// valuation, wrap the original curves in
/// [`parswap_curves::curves::TimeShiftedCurve`] first.
pub struct SwapPricer<'a> {
    projection: &'a dyn Curve,
    discount: &'a dyn Curve,
    valuation_date: Date,
}

impl<'a> SwapPricer<'a> {
    /// Creates a pricer over a curve pair.
    ///
    /// # Errors
    ///
    /// Returns an error if either curve's reference date differs from
    /// the valuation date: times would silently be measured in two
    /// different frames.
    pub fn new(
        projection: &'a dyn Curve,
        discount: &'a dyn Curve,
        valuation_date: Date,
    ) -> PricingResult<Self> {
        for curve in [projection, discount] {
            if curve.reference_date() != valuation_date {
                return Err(CurveError::ReferenceDateMismatch {
                    expected: valuation_date,
                    got: curve.reference_date(),
                }
                .into());
            }
        }

        Ok(Self {
            projection,
            discount,
            valuation_date,
        })
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// PV of the remaining fixed leg payments.
    pub fn fixed_leg_pv(&self, swap: &Swap) -> PricingResult<f64> {
        let mut pv = 0.0;
        for flow in swap.fixed_cash_flows()? {
            if flow.pay_date <= self.valuation_date {
                continue;
            }
            let t = year_fraction(self.valuation_date, flow.pay_date);
            pv += flow.amount * self.discount.discount_factor(t)?;
        }
        Ok(pv)
    }

    /// PV of the remaining floating leg payments.
    ///
    /// Each period's rate is the simple forward implied by the
    /// projection curve over the accrual interval. A period whose
    /// accrual begins at or before the valuation date has no meaningful
    /// forward start and prices off the zero rate at its end instead.
    pub fn float_leg_pv(&self, swap: &Swap) -> PricingResult<f64> {
        let mut pv = 0.0;
        for period in swap.float_periods()? {
            if period.pay_date <= self.valuation_date {
                continue;
            }
            let rate = self.float_rate(&period)?;
            let t_pay = year_fraction(self.valuation_date, period.pay_date);
            pv += swap.notional() * rate * period.day_fraction * self.discount.discount_factor(t_pay)?;
        }
        Ok(pv)
    }

    /// Sum of `DF(t_pay) × day_fraction` over the remaining fixed
    /// payments (per unit notional).
    pub fn fixed_annuity(&self, swap: &Swap) -> PricingResult<f64> {
        let mut annuity = 0.0;
        for flow in swap.fixed_cash_flows()? {
            if flow.pay_date <= self.valuation_date {
                continue;
            }
            let t = year_fraction(self.valuation_date, flow.pay_date);
            annuity += flow.day_fraction * self.discount.discount_factor(t)?;
        }
        Ok(annuity)
    }

    /// The fixed rate making the remaining swap worth zero.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidSwap` when no fixed payments remain.
    pub fn par_rate(&self, swap: &Swap) -> PricingResult<f64> {
        let annuity = self.fixed_annuity(swap)?;
        if annuity <= 0.0 {
            return Err(PricingError::invalid_swap(
                "no future fixed payments to solve a par rate against",
            ));
        }
        Ok(self.float_leg_pv(swap)? / (swap.notional() * annuity))
    }

    /// Receiver PV: `FixedLegPV − FloatLegPV`. Includes accrued
    /// interest (dirty).
    pub fn swap_pv(&self, swap: &Swap) -> PricingResult<f64> {
        Ok(self.fixed_leg_pv(swap)? - self.float_leg_pv(swap)?)
    }

    /// Accrued fixed amount in the period straddling the valuation date.
    ///
    /// The period's full amount prorated by the elapsed Actual/Actual
    /// fraction; zero when no period straddles the date.
    pub fn fixed_accrual(&self, swap: &Swap) -> PricingResult<f64> {
        for flow in swap.fixed_cash_flows()? {
            if flow.accrual_start < self.valuation_date && self.valuation_date < flow.accrual_end {
                let elapsed = year_fraction(flow.accrual_start, self.valuation_date);
                return Ok(flow.amount * elapsed / flow.day_fraction);
            }
        }
        Ok(0.0)
    }

    /// Accrued float amount in the period straddling the valuation date.
    ///
    /// The straddling period's rate resolves exactly as in
    /// [`float_leg_pv`](Self::float_leg_pv); by construction it is a
    /// zero-rate read at the period end, i.e. the rate that was fixed
    /// at the period start.
    pub fn float_accrual(&self, swap: &Swap) -> PricingResult<f64> {
        for period in swap.float_periods()? {
            if period.accrual_start < self.valuation_date
                && self.valuation_date < period.accrual_end
            {
                let rate = self.float_rate(&period)?;
                let amount = swap.notional() * rate * period.day_fraction;
                let elapsed = year_fraction(period.accrual_start, self.valuation_date);
                return Ok(amount * elapsed / period.day_fraction);
            }
        }
        Ok(0.0)
    }

    /// Values the swap: dirty PV, accruals, clean PV, and par rate.
    ///
    /// Receiver clean PV removes the accrued fixed amount (earned but
    /// not yet received) and adds back the accrued float amount (owed
    /// but not yet paid):
    /// `CleanPV = DirtyPV − FixedAccrual + FloatAccrual`.
    pub fn price(&self, swap: &Swap) -> PricingResult<Valuation> {
        let dirty_pv = self.swap_pv(swap)?;
        let par_rate = self.par_rate(swap)?;
        let fixed_accrual = self.fixed_accrual(swap)?;
        let float_accrual = self.float_accrual(swap)?;

        Ok(Valuation {
            dirty_pv,
            clean_pv: dirty_pv - fixed_accrual + float_accrual,
            par_rate,
            fixed_accrual,
            float_accrual,
        })
    }

    /// Resolves a float period's rate from the projection curve.
    fn float_rate(&self, period: &FloatPeriod) -> PricingResult<f64> {
        let t_start = year_fraction(self.valuation_date, period.accrual_start);
        let t_end = year_fraction(self.valuation_date, period.accrual_end);

        let rate = if t_start <= FIRST_PERIOD_EPS {
            self.projection.zero_rate(t_end)?
        } else {
            self.projection.forward_rate(t_start, t_end)?
        };
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parswap_curves::bootstrap::DualCurveBootstrapper;
    use parswap_curves::curves::ZeroCurve;
    use parswap_curves::quotes::MarketQuote;

    fn ref_date() -> Date {
        Date::from_ymd(2026, 1, 7).unwrap()
    }

    fn bootstrapped_curves() -> (ZeroCurve, ZeroCurve) {
        DualCurveBootstrapper::new(ref_date(), -38.0)
            .add_quote(MarketQuote::fixing(0.5, 0.0411))
            .add_quote(MarketQuote::par_swap(1.0, 0.0414))
            .add_quote(MarketQuote::par_swap(2.0, 0.0373))
            .add_quote(MarketQuote::par_swap(3.0, 0.0348))
            .add_quote(MarketQuote::par_swap(5.0, 0.0321))
            .bootstrap()
            .unwrap()
            .into_curves()
    }

    #[test]
    fn test_reference_date_mismatch_rejected() {
        let (projection, discount) = bootstrapped_curves();
        let wrong_date = Date::from_ymd(2026, 4, 7).unwrap();

        assert!(SwapPricer::new(&projection, &discount, wrong_date).is_err());
        assert!(SwapPricer::new(&projection, &discount, ref_date()).is_ok());
    }

    #[test]
    fn test_quoted_par_swap_reprices_to_zero() {
        let (projection, discount) = bootstrapped_curves();
        let pricer = SwapPricer::new(&projection, &discount, ref_date()).unwrap();

        // A 3Y swap struck at the quoted 3Y par rate is on-market
        let swap = Swap::from_tenor_years(ref_date(), 3.0, 1_000_000.0, 0.0348).unwrap();
        let pv = pricer.swap_pv(&swap).unwrap();

        assert!(pv.abs() < 1e-3, "on-market swap PV should vanish: {pv}");
    }

    #[test]
    fn test_par_rate_definition_consistency() {
        let (projection, discount) = bootstrapped_curves();
        let pricer = SwapPricer::new(&projection, &discount, ref_date()).unwrap();

        let swap = Swap::from_tenor_years(ref_date(), 4.0, 1_000_000.0, 0.0).unwrap();
        let par = pricer.par_rate(&swap).unwrap();

        // Struck at par, fixed PV equals float PV by definition
        let at_par = swap.with_fixed_rate(par);
        assert_relative_eq!(
            pricer.fixed_leg_pv(&at_par).unwrap(),
            pricer.float_leg_pv(&at_par).unwrap(),
            epsilon = 1e-6
        );
        assert!(pricer.swap_pv(&at_par).unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_par_rate_independent_of_strike() {
        let (projection, discount) = bootstrapped_curves();
        let pricer = SwapPricer::new(&projection, &discount, ref_date()).unwrap();

        let a = Swap::from_tenor_years(ref_date(), 4.0, 1_000_000.0, 0.01).unwrap();
        let b = Swap::from_tenor_years(ref_date(), 4.0, 1_000_000.0, 0.09).unwrap();

        assert_relative_eq!(
            pricer.par_rate(&a).unwrap(),
            pricer.par_rate(&b).unwrap(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_first_period_uses_fixing() {
        let (projection, discount) = bootstrapped_curves();
        let pricer = SwapPricer::new(&projection, &discount, ref_date()).unwrap();

        let swap = Swap::from_tenor_years(ref_date(), 1.0, 1_000_000.0, 0.0414).unwrap();
        let periods = swap.float_periods().unwrap();

        // First accrual starts at the valuation date: rate must be the
        // 6M fixing read off the projection curve, not a forward
        let rate = pricer.float_rate(&periods[0]).unwrap();
        assert_relative_eq!(rate, 0.0411, epsilon = 1e-12);
    }

    #[test]
    fn test_accruals_zero_at_inception() {
        let (projection, discount) = bootstrapped_curves();
        let pricer = SwapPricer::new(&projection, &discount, ref_date()).unwrap();

        let swap = Swap::from_tenor_years(ref_date(), 5.0, 1_000_000.0, 0.0321).unwrap();

        assert_eq!(pricer.fixed_accrual(&swap).unwrap(), 0.0);
        assert_eq!(pricer.float_accrual(&swap).unwrap(), 0.0);

        let valuation = pricer.price(&swap).unwrap();
        assert_eq!(valuation.dirty_pv, valuation.clean_pv);
    }

    #[test]
    fn test_receiver_pv_sign_off_market() {
        let (projection, discount) = bootstrapped_curves();
        let pricer = SwapPricer::new(&projection, &discount, ref_date()).unwrap();

        // Receiving 10% fixed against a ~3-4% market is deep in the money
        let rich = Swap::from_tenor_years(ref_date(), 5.0, 1_000_000.0, 0.10).unwrap();
        assert!(pricer.swap_pv(&rich).unwrap() > 0.0);

        // Receiving 0% fixed is deep out of the money
        let poor = Swap::from_tenor_years(ref_date(), 5.0, 1_000_000.0, 0.0).unwrap();
        assert!(pricer.swap_pv(&poor).unwrap() < 0.0);
    }

    #[test]
    fn test_annuity_positive_and_bounded() {
        let (projection, discount) = bootstrapped_curves();
        let pricer = SwapPricer::new(&projection, &discount, ref_date()).unwrap();

        let swap = Swap::from_tenor_years(ref_date(), 5.0, 1_000_000.0, 0.0321).unwrap();
        let annuity = pricer.fixed_annuity(&swap).unwrap();

        // Five discounted annual accruals: below 5.0, above deep-discount floor
        assert!(annuity > 4.0 && annuity < 5.0);
    }
}
