//! Knot-based zero curve.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use parswap_core::Date;
use parswap_math::interpolation::{CubicSpline, Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;
use crate::traits::Curve;

/// Tolerance under which two knot times are considered the same.
const KNOT_TIME_EPS: f64 = 1e-12;

/// A zero-coupon curve over an ordered set of (time, zero rate) knots.
///
/// Knots are kept sorted by time and unique; inserting a knot drops any
/// attached custom interpolator so the next query refits from the
/// current knots. The fitting method defaults to [`InterpolationMethod::Linear`]
/// unless another method is selected, or a pre-fitted strategy (e.g., a
/// time-shifted spline) is attached with [`set_interpolator`](Self::set_interpolator).
///
/// Rates are continuously compounded zero rates; discounting goes
/// through the [`Curve`] trait and always uses `exp(-r·t)`.
///
/// # Example
///
/// ```rust
/// use parswap_core::Date;
/// use parswap_curves::curves::ZeroCurve;
/// use parswap_curves::traits::Curve;
///
/// let mut curve = ZeroCurve::new(Date::from_ymd(2026, 1, 7).unwrap());
/// curve.add_point(0.5, 0.0411).unwrap();
/// curve.add_point(1.0, 0.0414).unwrap();
///
/// let df = curve.discount_factor(0.75).unwrap();
/// assert!(df > 0.96 && df < 1.0);
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct ZeroCurve {
    /// Reference (valuation) date.
    reference_date: Date,

    /// Knot times in years, kept sorted ascending.
    times: Vec<f64>,

    /// Continuously compounded zero rates at each knot.
    rates: Vec<f64>,

    /// Knot-fitting method used when no custom strategy is attached.
    interpolation: InterpolationMethod,

    /// Explicitly attached strategy; cleared by any knot mutation.
    #[serde(skip)]
    custom: Option<Arc<dyn Interpolator>>,
}

impl ZeroCurve {
    /// Creates an empty curve at the given reference date.
    #[must_use]
    pub fn new(reference_date: Date) -> Self {
        Self {
            reference_date,
            times: Vec::new(),
            rates: Vec::new(),
            interpolation: InterpolationMethod::default(),
            custom: None,
        }
    }

    /// Sets the knot-fitting interpolation method.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.set_interpolation(method);
        self
    }

    /// Adds a knot, keeping times sorted.
    ///
    /// Any attached custom interpolator is dropped so subsequent queries
    /// refit from the updated knots.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DuplicateKnot`] if a knot already exists at
    /// this time, or [`CurveError::InvalidValue`] for negative or
    /// non-finite inputs.
    pub fn add_point(&mut self, t: f64, rate: f64) -> CurveResult<()> {
        if !t.is_finite() || t < 0.0 {
            return Err(CurveError::invalid_value(format!(
                "knot time must be finite and non-negative, got {t}"
            )));
        }
        if !rate.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "zero rate at t = {t} is not finite"
            )));
        }

        let pos = self.times.partition_point(|&x| x < t);
        let collides = |i: usize| (self.times[i] - t).abs() < KNOT_TIME_EPS;
        if pos < self.times.len() && collides(pos) || pos > 0 && collides(pos - 1) {
            return Err(CurveError::DuplicateKnot { time: t });
        }

        self.times.insert(pos, t);
        self.rates.insert(pos, rate);
        self.custom = None;
        Ok(())
    }

    /// Appends a knot beyond the current last time without re-sorting.
    ///
    /// Bootstrap hot path: pillars arrive strictly tenor-ascending, so
    /// the sorted-insert and duplicate scan of [`add_point`](Self::add_point)
    /// are unnecessary.
    pub(crate) fn append_point(&mut self, t: f64, rate: f64) {
        debug_assert!(
            self.times.last().map_or(true, |&last| t > last),
            "append_point requires strictly ascending times"
        );
        self.times.push(t);
        self.rates.push(rate);
        self.custom = None;
    }

    /// Selects the knot-fitting interpolation method.
    ///
    /// Drops any attached custom interpolator.
    pub fn set_interpolation(&mut self, method: InterpolationMethod) {
        self.interpolation = method;
        self.custom = None;
    }

    /// Attaches a pre-fitted interpolation strategy.
    ///
    /// The strategy answers all zero-rate queries until the next knot
    /// mutation. Used to re-express a fitted spline at a shifted
    /// reference time without refitting.
    pub fn set_interpolator(&mut self, interpolator: Arc<dyn Interpolator>) {
        self.custom = Some(interpolator);
    }

    /// Returns a new curve with every knot's zero rate shifted.
    ///
    /// Knot-level bump for legacy curve-level sensitivities; quote-level
    /// risk re-bootstraps instead. Any attached custom strategy is not
    /// carried over since it no longer matches the shifted knots.
    ///
    /// # Arguments
    ///
    /// * `bps` - Shift in basis points (1bp = 0.0001)
    #[must_use]
    pub fn shift_parallel(&self, bps: f64) -> Self {
        let shift = bps / 10_000.0;
        Self {
            reference_date: self.reference_date,
            times: self.times.clone(),
            rates: self.rates.iter().map(|r| r + shift).collect(),
            interpolation: self.interpolation,
            custom: None,
        }
    }

    /// Returns the discount factor under SIMPLE compounding,
    /// `1 / (1 + r·t)`.
    ///
    /// Alternate convention retained for curves populated with simple
    /// rates. Not called anywhere on the bootstrap or pricing paths,
    /// which are continuously compounded throughout; mixing the two on
    /// one curve silently corrupts PVs.
    pub fn discount_factor_simple(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        let r = self.zero_rate(t)?;
        Ok(1.0 / (1.0 + r * t))
    }

    /// Returns the knot times in years.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the zero rates at each knot.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the number of knots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the curve has no knots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the selected knot-fitting method.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    /// Fits the configured interpolator from the current knots.
    fn fit(&self) -> CurveResult<Box<dyn Interpolator>> {
        let times = self.times.clone();
        let rates = self.rates.clone();

        let fitted: Box<dyn Interpolator> = match self.interpolation {
            InterpolationMethod::Linear => Box::new(LinearInterpolator::new(times, rates)?),
            InterpolationMethod::CubicSpline => Box::new(CubicSpline::new(times, rates)?),
            InterpolationMethod::CubicSplineAnchored => {
                Box::new(CubicSpline::new(times, rates)?.with_zero_anchor())
            }
        };

        Ok(fitted)
    }
}

impl Curve for ZeroCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        if let Some(custom) = &self.custom {
            return Ok(custom.interpolate(t)?);
        }

        if self.times.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        // A single knot extends flat in both directions
        if self.times.len() == 1 {
            return Ok(self.rates[0]);
        }

        Ok(self.fit()?.interpolate(t)?)
    }
}

impl std::fmt::Debug for ZeroCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZeroCurve")
            .field("reference_date", &self.reference_date)
            .field("knots", &self.times.len())
            .field("interpolation", &self.interpolation)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parswap_math::interpolation::ShiftedInterpolator;

    fn ref_date() -> Date {
        Date::from_ymd(2026, 1, 7).unwrap()
    }

    fn sample_curve() -> ZeroCurve {
        let mut curve = ZeroCurve::new(ref_date());
        curve.add_point(0.5, 0.0411).unwrap();
        curve.add_point(1.0, 0.0414).unwrap();
        curve.add_point(2.0, 0.0373).unwrap();
        curve.add_point(3.0, 0.0348).unwrap();
        curve
    }

    #[test]
    fn test_empty_curve_query_fails() {
        let curve = ZeroCurve::new(ref_date());
        assert!(matches!(curve.zero_rate(1.0), Err(CurveError::EmptyCurve)));
    }

    #[test]
    fn test_single_knot_flat() {
        let mut curve = ZeroCurve::new(ref_date());
        curve.add_point(0.5, 0.0411).unwrap();

        assert_relative_eq!(curve.zero_rate(0.1).unwrap(), 0.0411, epsilon = 1e-12);
        assert_relative_eq!(curve.zero_rate(5.0).unwrap(), 0.0411, epsilon = 1e-12);
    }

    #[test]
    fn test_knots_kept_sorted() {
        let mut curve = ZeroCurve::new(ref_date());
        curve.add_point(2.0, 0.0373).unwrap();
        curve.add_point(0.5, 0.0411).unwrap();
        curve.add_point(1.0, 0.0414).unwrap();

        assert_eq!(curve.times(), &[0.5, 1.0, 2.0]);
        assert_eq!(curve.rates(), &[0.0411, 0.0414, 0.0373]);
    }

    #[test]
    fn test_duplicate_knot_rejected() {
        let mut curve = sample_curve();
        assert!(matches!(
            curve.add_point(1.0, 0.05),
            Err(CurveError::DuplicateKnot { .. })
        ));
        // Original rate untouched
        assert_relative_eq!(curve.zero_rate(1.0).unwrap(), 0.0414, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_knot_rejected() {
        let mut curve = ZeroCurve::new(ref_date());
        assert!(curve.add_point(-1.0, 0.04).is_err());
        assert!(curve.add_point(f64::NAN, 0.04).is_err());
        assert!(curve.add_point(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_linear_interpolation_between_knots() {
        let curve = sample_curve();
        // Midpoint of (1.0, 0.0414) and (2.0, 0.0373)
        assert_relative_eq!(curve.zero_rate(1.5).unwrap(), 0.03935, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_before_first_knot() {
        let curve = sample_curve();
        assert_relative_eq!(curve.zero_rate(0.0).unwrap(), 0.0411, epsilon = 1e-12);
        assert_relative_eq!(curve.zero_rate(0.25).unwrap(), 0.0411, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_continuous() {
        let curve = sample_curve();
        let df = curve.discount_factor(2.0).unwrap();
        assert_relative_eq!(df, (-0.0373_f64 * 2.0).exp(), epsilon = 1e-12);
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_discount_factor_simple_is_separate() {
        let curve = sample_curve();

        let simple = curve.discount_factor_simple(2.0).unwrap();
        let continuous = curve.discount_factor(2.0).unwrap();

        assert_relative_eq!(simple, 1.0 / (1.0 + 0.0373 * 2.0), epsilon = 1e-12);
        assert!((simple - continuous).abs() > 1e-6);
    }

    #[test]
    fn test_forward_rate_from_discount_ratio() {
        let curve = sample_curve();

        let df1 = curve.discount_factor(1.0).unwrap();
        let df2 = curve.discount_factor(2.0).unwrap();
        let fwd = curve.forward_rate(1.0, 2.0).unwrap();

        assert_relative_eq!(fwd, (df1 / df2 - 1.0) / 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spline_method_matches_knots() {
        let mut curve = sample_curve();
        curve.set_interpolation(InterpolationMethod::CubicSpline);

        let times = curve.times().to_vec();
        let rates = curve.rates().to_vec();
        for (t, r) in times.iter().zip(rates.iter()) {
            assert_relative_eq!(curve.zero_rate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_anchored_spline_pins_short_end() {
        let mut curve = sample_curve();
        curve.set_interpolation(InterpolationMethod::CubicSplineAnchored);

        assert_relative_eq!(curve.zero_rate(0.0).unwrap(), 0.0411, epsilon = 1e-12);
        assert_relative_eq!(curve.zero_rate(0.5).unwrap(), 0.0411, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_interpolator_answers_queries() {
        let mut curve = sample_curve();

        let spline = CubicSpline::new(curve.times().to_vec(), curve.rates().to_vec()).unwrap();
        let shifted = ShiftedInterpolator::new(Arc::new(spline), 0.25);
        curve.set_interpolator(Arc::new(shifted));

        // New time 0.25 reads the fitted spline at old time 0.5
        assert_relative_eq!(curve.zero_rate(0.25).unwrap(), 0.0411, epsilon = 1e-12);
    }

    #[test]
    fn test_add_point_clears_custom_interpolator() {
        let mut curve = sample_curve();

        let spline = CubicSpline::new(curve.times().to_vec(), curve.rates().to_vec()).unwrap();
        curve.set_interpolator(Arc::new(spline));
        curve.add_point(5.0, 0.0321).unwrap();

        // Refit from knots: the new 5Y knot must be visible
        assert_relative_eq!(curve.zero_rate(5.0).unwrap(), 0.0321, epsilon = 1e-12);
    }

    #[test]
    fn test_shift_parallel() {
        let curve = sample_curve();
        let shifted = curve.shift_parallel(25.0);

        for (orig, bumped) in curve.rates().iter().zip(shifted.rates().iter()) {
            assert_relative_eq!(bumped - orig, 0.0025, epsilon = 1e-15);
        }
        // Original untouched
        assert_relative_eq!(curve.zero_rate(1.0).unwrap(), 0.0414, epsilon = 1e-12);
    }

    #[test]
    fn test_clone_round_trip() {
        let curve = sample_curve();
        let cloned = curve.clone();

        for &t in curve.times() {
            assert_eq!(
                curve.zero_rate(t).unwrap(),
                cloned.zero_rate(t).unwrap()
            );
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let curve = sample_curve();
        let json = serde_json::to_string(&curve).unwrap();
        let back: ZeroCurve = serde_json::from_str(&json).unwrap();

        assert_eq!(back.times(), curve.times());
        assert_eq!(back.rates(), curve.rates());
        assert_eq!(back.interpolation(), curve.interpolation());
    }
}
