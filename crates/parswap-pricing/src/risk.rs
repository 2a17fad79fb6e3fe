//! Rate risk by quote-level re-bootstrap.
//!
//! Sensitivities here shock the MARKET QUOTES and re-strip the curve
//! pair, rather than bumping the zero curve in place. Par rates are the
//! traded observables; re-bootstrapping captures how a par-rate move
//! redistributes across the whole forward curve. Each bump scenario
//! builds fresh curves, so scenarios are independent and idempotent.
//! The knot-level [`parswap_curves::curves::ZeroCurve::shift_parallel`]
//! bump remains available as the legacy curve-level method.

use serde::{Deserialize, Serialize};

use parswap_core::Date;
use parswap_curves::bootstrap::{BootstrapConfig, DualCurveBootstrapper};
use parswap_curves::quotes::MarketQuote;

use crate::error::PricingResult;
use crate::pricer::SwapPricer;
use crate::swap::Swap;

/// Quote bump used for DV01 and Gamma, in basis points.
pub const QUOTE_BUMP_BPS: f64 = 1.0;

/// Rate sensitivities of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// PV change for a +1bp move in all par swap quotes (one-sided).
    pub dv01: f64,
    /// Second difference across −1bp/base/+1bp scenarios.
    pub gamma: f64,
}

/// Computes swap risk by bumping quotes and re-running the bootstrap.
///
/// The fixing quote is never bumped: it is an observed rate, not a
/// traded par quote.
///
/// # Example
///
/// ```rust,ignore
/// let calculator = RiskCalculator::new(reference_date, quotes, -38.0);
/// let metrics = calculator.risk(&swap)?;
/// assert!(metrics.dv01 < 0.0); // receiver swap loses as rates rise
/// ```
pub struct RiskCalculator {
    reference_date: Date,
    quotes: Vec<MarketQuote>,
    spread_bps: f64,
    config: BootstrapConfig,
}

impl RiskCalculator {
    /// Creates a risk calculator over a market quote set.
    ///
    /// # Arguments
    ///
    /// * `reference_date` - Valuation date for all scenarios
    /// * `quotes` - The market quotes the curves are stripped from
    /// * `spread_bps` - Discount spread in basis points
    #[must_use]
    pub fn new(reference_date: Date, quotes: Vec<MarketQuote>, spread_bps: f64) -> Self {
        Self {
            reference_date,
            quotes,
            spread_bps,
            config: BootstrapConfig::default(),
        }
    }

    /// Sets the bootstrap configuration used for every scenario.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// DV01: `PV(+1bp) − PV(base)`, one-sided.
    ///
    /// Each term comes from an independent full re-bootstrap of the
    /// bumped (respectively unbumped) quote set.
    pub fn dv01(&self, swap: &Swap) -> PricingResult<f64> {
        let base = self.scenario_pv(swap, 0.0)?;
        let up = self.scenario_pv(swap, QUOTE_BUMP_BPS)?;
        Ok(up - base)
    }

    /// Gamma: `PV(+1bp) − 2·PV(base) + PV(−1bp)`.
    pub fn gamma(&self, swap: &Swap) -> PricingResult<f64> {
        let base = self.scenario_pv(swap, 0.0)?;
        let up = self.scenario_pv(swap, QUOTE_BUMP_BPS)?;
        let down = self.scenario_pv(swap, -QUOTE_BUMP_BPS)?;
        Ok(up - 2.0 * base + down)
    }

    /// Computes DV01 and Gamma from one set of three scenarios.
    pub fn risk(&self, swap: &Swap) -> PricingResult<RiskMetrics> {
        let base = self.scenario_pv(swap, 0.0)?;
        let up = self.scenario_pv(swap, QUOTE_BUMP_BPS)?;
        let down = self.scenario_pv(swap, -QUOTE_BUMP_BPS)?;

        Ok(RiskMetrics {
            dv01: up - base,
            gamma: up - 2.0 * base + down,
        })
    }

    /// Reprices the swap on curves stripped from bumped quotes.
    ///
    /// Par swap quotes move by `bump_bps`; the fixing stays put.
    fn scenario_pv(&self, swap: &Swap, bump_bps: f64) -> PricingResult<f64> {
        let shift = bump_bps / 10_000.0;
        let bumped = self.quotes.iter().map(|q| {
            if q.is_fixing {
                *q
            } else {
                MarketQuote::par_swap(q.tenor_years, q.rate + shift)
            }
        });

        let result = DualCurveBootstrapper::new(self.reference_date, self.spread_bps)
            .with_config(self.config)
            .add_quotes(bumped)
            .bootstrap()?;

        if !result.is_valid() {
            log::warn!(
                "scenario bump {bump_bps}bp repriced with max residual {:.2e}",
                result.max_residual()
            );
        }

        let pricer = SwapPricer::new(&result.projection, &result.discount, self.reference_date)?;
        pricer.swap_pv(swap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parswap_core::Date;

    fn ref_date() -> Date {
        Date::from_ymd(2026, 1, 7).unwrap()
    }

    fn market_quotes() -> Vec<MarketQuote> {
        vec![
            MarketQuote::fixing(0.5, 0.0411),
            MarketQuote::par_swap(1.0, 0.0414),
            MarketQuote::par_swap(2.0, 0.0373),
            MarketQuote::par_swap(3.0, 0.0348),
            MarketQuote::par_swap(5.0, 0.0321),
            MarketQuote::par_swap(7.0, 0.0311),
            MarketQuote::par_swap(10.0, 0.0308),
        ]
    }

    fn par_swap(tenor_years: f64) -> Swap {
        let result = DualCurveBootstrapper::new(ref_date(), -38.0)
            .add_quotes(market_quotes())
            .bootstrap()
            .unwrap();
        let pricer = SwapPricer::new(&result.projection, &result.discount, ref_date()).unwrap();

        let swap = Swap::from_tenor_years(ref_date(), tenor_years, 1_000_000.0, 0.0).unwrap();
        let par = pricer.par_rate(&swap).unwrap();
        swap.with_fixed_rate(par)
    }

    #[test]
    fn test_dv01_negative_for_receiver_at_par() {
        let calculator = RiskCalculator::new(ref_date(), market_quotes(), -38.0);
        let swap = par_swap(9.0);

        let dv01 = calculator.dv01(&swap).unwrap();

        // Receiving fixed is less attractive when par rates rise
        assert!(dv01 < 0.0, "receiver DV01 should be negative: {dv01}");
        // Magnitude plausible for a 9Y swap on $1M notional
        assert!(dv01.abs() > 100.0 && dv01.abs() < 5_000.0, "dv01 = {dv01}");
    }

    #[test]
    fn test_gamma_non_negative() {
        let calculator = RiskCalculator::new(ref_date(), market_quotes(), -38.0);
        let swap = par_swap(9.0);

        let gamma = calculator.gamma(&swap).unwrap();

        assert!(gamma >= 0.0, "discounting convexity: {gamma}");
        assert!(gamma < 50.0, "gamma should be small at 1bp bumps: {gamma}");
    }

    #[test]
    fn test_risk_matches_individual_measures() {
        let calculator = RiskCalculator::new(ref_date(), market_quotes(), -38.0);
        let swap = par_swap(5.0);

        let metrics = calculator.risk(&swap).unwrap();
        let dv01 = calculator.dv01(&swap).unwrap();
        let gamma = calculator.gamma(&swap).unwrap();

        // Deterministic pipeline: scenarios agree run to run
        assert!((metrics.dv01 - dv01).abs() < 1e-9);
        assert!((metrics.gamma - gamma).abs() < 1e-9);
    }

    #[test]
    fn test_base_scenario_is_unbumped() {
        let calculator = RiskCalculator::new(ref_date(), market_quotes(), -38.0);
        let swap = par_swap(5.0);

        // A par-struck swap has ~zero base PV, so a zero bump reproduces it
        let base = calculator.scenario_pv(&swap, 0.0).unwrap();
        assert!(base.abs() < 1e-3, "base PV at par should vanish: {base}");
    }

    #[test]
    fn test_dv01_scales_with_notional() {
        let calculator = RiskCalculator::new(ref_date(), market_quotes(), -38.0);

        let small = par_swap(5.0);
        let large = Swap::from_tenor_years(ref_date(), 5.0, 10_000_000.0, small.fixed_rate())
            .unwrap();

        let dv01_small = calculator.dv01(&small).unwrap();
        let dv01_large = calculator.dv01(&large).unwrap();

        assert!((dv01_large - 10.0 * dv01_small).abs() < 1e-3);
    }
}
