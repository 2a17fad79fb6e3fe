//! Sequential dual-curve bootstrapper.

use parswap_core::daycounts::year_fraction;
use parswap_core::schedule::payment_dates;
use parswap_core::Date;
use parswap_math::solvers::newton_raphson;
use parswap_math::MathError;

use crate::bootstrap::BootstrapConfig;
use crate::curves::ZeroCurve;
use crate::error::{CurveError, CurveResult};
use crate::quotes::{validated_quotes, MarketQuote};
use crate::repricing::{BootstrapResult, PillarCheck, RepricingReport};
use crate::traits::{Curve, FIRST_PERIOD_EPS};

/// Sequential bootstrapper for a (projection, discount) curve pair.
///
/// Quotes are processed strictly tenor-ascending. The fixing seeds both
/// curves directly; each par swap quote then contributes one Newton
/// solve for the projection zero rate at its tenor, with the discount
/// knot pinned at `projection + spread`. Every discount factor at or
/// beyond the pillar uses the candidate rate, while everything strictly
/// before it reads already-solved knots, so each solve depends only on
/// shorter tenors.
///
/// # Example
///
/// ```rust,ignore
/// use parswap_curves::bootstrap::DualCurveBootstrapper;
/// use parswap_curves::quotes::MarketQuote;
///
/// let result = DualCurveBootstrapper::new(reference_date, -38.0)
///     .add_quote(MarketQuote::fixing(0.5, 0.0411))
///     .add_quote(MarketQuote::par_swap(1.0, 0.0414))
///     .add_quote(MarketQuote::par_swap(2.0, 0.0373))
///     .bootstrap()?;
///
/// assert!(result.is_valid());
/// let (projection, discount) = result.into_curves();
/// ```
pub struct DualCurveBootstrapper {
    /// Reference date for both curves.
    reference_date: Date,
    /// Additive zero-rate spread from projection to discount (decimal).
    spread: f64,
    /// Market quotes, in any order.
    quotes: Vec<MarketQuote>,
    /// Bootstrap configuration.
    config: BootstrapConfig,
}

/// Leg payment times for one quoted par swap, precomputed from the
/// date schedules so the solver never touches dates.
struct LegTimes {
    /// Fixed leg: (pay time, accrual fraction) per period.
    fixed: Vec<(f64, f64)>,
    /// Float leg: (accrual start, accrual end, accrual fraction); the
    /// payment lands at the accrual end.
    float: Vec<(f64, f64, f64)>,
}

impl LegTimes {
    fn build(reference_date: Date, maturity: Date, config: &BootstrapConfig) -> CurveResult<Self> {
        let fixed_dates = payment_dates(reference_date, maturity, config.fixed_frequency)?;
        let float_dates = payment_dates(reference_date, maturity, config.float_frequency)?;

        let mut fixed = Vec::with_capacity(fixed_dates.len());
        let mut prev = reference_date;
        for date in fixed_dates {
            fixed.push((
                year_fraction(reference_date, date),
                year_fraction(prev, date),
            ));
            prev = date;
        }

        let mut float = Vec::with_capacity(float_dates.len());
        let mut prev = reference_date;
        for date in float_dates {
            float.push((
                year_fraction(reference_date, prev),
                year_fraction(reference_date, date),
                year_fraction(prev, date),
            ));
            prev = date;
        }

        Ok(Self { fixed, float })
    }
}

impl DualCurveBootstrapper {
    /// Creates a new bootstrapper.
    ///
    /// # Arguments
    ///
    /// * `reference_date` - The curves' reference/valuation date
    /// * `spread_bps` - Discount spread over the projection curve in
    ///   basis points (e.g., -38.0 for discount = projection − 38bp)
    #[must_use]
    pub fn new(reference_date: Date, spread_bps: f64) -> Self {
        Self {
            reference_date,
            spread: spread_bps / 10_000.0,
            quotes: Vec::new(),
            config: BootstrapConfig::default(),
        }
    }

    /// Sets the bootstrap configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a market quote.
    #[must_use]
    pub fn add_quote(mut self, quote: MarketQuote) -> Self {
        self.quotes.push(quote);
        self
    }

    /// Adds multiple market quotes.
    #[must_use]
    pub fn add_quotes(mut self, quotes: impl IntoIterator<Item = MarketQuote>) -> Self {
        self.quotes.extend(quotes);
        self
    }

    /// Runs the bootstrap.
    ///
    /// # Returns
    ///
    /// A [`BootstrapResult`] holding the curve pair and a repricing
    /// report with one [`PillarCheck`] per par swap quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote set fails validation, a tenor does
    /// not land on whole months, or a pillar solve produces non-finite
    /// values. A stalled or capped Newton iteration is NOT an error: the
    /// pillar keeps its best estimate and the report flags it.
    pub fn bootstrap(self) -> CurveResult<BootstrapResult> {
        let quotes = validated_quotes(&self.quotes)?;

        let mut projection =
            ZeroCurve::new(self.reference_date).with_interpolation(self.config.interpolation);
        let mut discount =
            ZeroCurve::new(self.reference_date).with_interpolation(self.config.interpolation);

        // (quote, solved rate, leg times, iterations, converged)
        let mut solved: Vec<(MarketQuote, f64, LegTimes, u32, bool)> = Vec::new();

        for quote in quotes {
            let maturity = self.maturity_date(&quote)?;
            let t_pillar = year_fraction(self.reference_date, maturity);

            if quote.is_fixing {
                projection.append_point(t_pillar, quote.rate);
                discount.append_point(t_pillar, quote.rate + self.spread);
                log::debug!(
                    "seeded fixing pillar {:.2}Y at {:.6}",
                    quote.tenor_years,
                    quote.rate
                );
                continue;
            }

            let legs = LegTimes::build(self.reference_date, maturity, &self.config)?;

            let objective = |z: f64| {
                candidate_npv(&projection, &discount, self.spread, t_pillar, z, quote.rate, &legs)
                    .unwrap_or(f64::NAN)
            };

            let (rate, iterations, converged) =
                match newton_raphson(objective, quote.rate, &self.config.solver) {
                    Ok(res) => {
                        if !res.converged {
                            log::warn!(
                                "{:.2}Y pillar hit the iteration cap (residual {:.2e})",
                                quote.tenor_years,
                                res.residual
                            );
                        }
                        (res.root, res.iterations, res.converged)
                    }
                    Err(MathError::DerivativeUnderflow {
                        last, iterations, ..
                    }) => {
                        log::warn!(
                            "{:.2}Y pillar solve stalled after {} iterations; keeping last estimate",
                            quote.tenor_years,
                            iterations
                        );
                        (last, iterations, false)
                    }
                    Err(e) => return Err(e.into()),
                };

            if !rate.is_finite() {
                return Err(CurveError::bootstrap_failed(
                    quote.tenor_years,
                    "solve produced a non-finite zero rate",
                ));
            }

            projection.append_point(t_pillar, rate);
            discount.append_point(t_pillar, rate + self.spread);
            log::debug!(
                "solved {:.2}Y pillar: zero rate {:.6} in {} iterations",
                quote.tenor_years,
                rate,
                iterations
            );

            solved.push((quote, rate, legs, iterations, converged));
        }

        // Repricing pass: every par quote revalued against the finished pair
        let mut checks = Vec::with_capacity(solved.len());
        for (quote, rate, legs, iterations, converged) in solved {
            let residual = swap_npv(&projection, &discount, quote.rate, &legs)?;
            checks.push(PillarCheck {
                tenor_years: quote.tenor_years,
                zero_rate: rate,
                residual,
                iterations,
                converged,
            });
        }

        let report = RepricingReport::new(checks, self.config.solver.tolerance);
        Ok(BootstrapResult {
            projection,
            discount,
            report,
        })
    }

    /// Maps a quote tenor to its maturity date.
    fn maturity_date(&self, quote: &MarketQuote) -> CurveResult<Date> {
        let months = quote.tenor_years * 12.0;
        let rounded = months.round();
        if (months - rounded).abs() > 1e-9 {
            return Err(CurveError::invalid_quotes(format!(
                "tenor {}Y does not land on whole months",
                quote.tenor_years
            )));
        }

        Ok(self.reference_date.add_months(rounded as i32)?)
    }
}

/// Swap NPV per unit notional with a trial pillar appended to both
/// curves.
///
/// The candidate rate `z` lands on the projection curve and `z + spread`
/// on the discount curve, so every query at or beyond the pillar sees
/// the trial value while earlier times read only solved knots.
fn candidate_npv(
    projection: &ZeroCurve,
    discount: &ZeroCurve,
    spread: f64,
    t_pillar: f64,
    z: f64,
    par_rate: f64,
    legs: &LegTimes,
) -> CurveResult<f64> {
    let mut projection = projection.clone();
    let mut discount = discount.clone();
    projection.append_point(t_pillar, z);
    discount.append_point(t_pillar, z + spread);

    swap_npv(&projection, &discount, par_rate, legs)
}

/// Receiver-leg-neutral par swap NPV per unit notional:
/// `FloatLegPV − FixedLegPV`. Zero when the curves reprice the quote.
fn swap_npv(
    projection: &ZeroCurve,
    discount: &ZeroCurve,
    par_rate: f64,
    legs: &LegTimes,
) -> CurveResult<f64> {
    let mut pv_fixed = 0.0;
    for &(t_pay, tau) in &legs.fixed {
        pv_fixed += par_rate * tau * discount.discount_factor(t_pay)?;
    }

    let mut pv_float = 0.0;
    for &(t_start, t_end, tau) in &legs.float {
        // The period off the curve's time zero has no meaningful forward
        // start; it prices off the zero rate at its end (the fixing)
        let rate = if t_start <= FIRST_PERIOD_EPS {
            projection.zero_rate(t_end)?
        } else {
            projection.forward_rate(t_start, t_end)?
        };
        pv_float += rate * tau * discount.discount_factor(t_end)?;
    }

    Ok(pv_float - pv_fixed)
}
