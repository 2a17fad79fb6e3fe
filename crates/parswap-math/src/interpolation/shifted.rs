//! Time-shift interpolation wrapper.

use std::sync::Arc;

use crate::error::MathResult;
use crate::interpolation::Interpolator;

/// An interpolator that re-queries another strategy at a time offset.
///
/// `interpolate(t)` delegates to the wrapped strategy at `t + shift`.
/// This re-expresses a curve fitted against one reference date in terms
/// of a later one without refitting: with the valuation date moved
/// forward by `shift` years, the original knot structure still
/// parametrizes the curve.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use parswap_math::interpolation::{CubicSpline, Interpolator, ShiftedInterpolator};
///
/// let spline = CubicSpline::new(
///     vec![0.5, 1.0, 2.0],
///     vec![0.0411, 0.0414, 0.0373],
/// ).unwrap();
///
/// // Three months forward: new time 0.25 reads the old curve at 0.5
/// let shifted = ShiftedInterpolator::new(Arc::new(spline), 0.25);
/// assert!((shifted.interpolate(0.25).unwrap() - 0.0411).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct ShiftedInterpolator {
    inner: Arc<dyn Interpolator>,
    shift: f64,
}

impl ShiftedInterpolator {
    /// Creates a new shifted interpolator.
    ///
    /// # Arguments
    ///
    /// * `inner` - The fitted strategy to delegate to
    /// * `shift` - Offset in years added to every query time
    #[must_use]
    pub fn new(inner: Arc<dyn Interpolator>, shift: f64) -> Self {
        Self { inner, shift }
    }

    /// Returns the time offset applied to queries.
    #[must_use]
    pub fn shift(&self) -> f64 {
        self.shift
    }
}

impl Interpolator for ShiftedInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.inner.interpolate(x + self.shift)
    }

    fn min_x(&self) -> f64 {
        self.inner.min_x() - self.shift
    }

    fn max_x(&self) -> f64 {
        self.inner.max_x() - self.shift
    }
}

impl std::fmt::Debug for ShiftedInterpolator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShiftedInterpolator")
            .field("shift", &self.shift)
            .field("range", &(self.min_x(), self.max_x()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::LinearInterpolator;
    use approx::assert_relative_eq;

    fn base() -> Arc<dyn Interpolator> {
        Arc::new(
            LinearInterpolator::new(vec![0.5, 1.0, 2.0], vec![0.0411, 0.0414, 0.0373]).unwrap(),
        )
    }

    #[test]
    fn test_shift_requeries_inner() {
        let shifted = ShiftedInterpolator::new(base(), 0.25);

        // New time 0.25 is old time 0.5
        assert_relative_eq!(shifted.interpolate(0.25).unwrap(), 0.0411, epsilon = 1e-12);
        // New time 0.75 is old time 1.0
        assert_relative_eq!(shifted.interpolate(0.75).unwrap(), 0.0414, epsilon = 1e-12);
    }

    #[test]
    fn test_shifted_range() {
        let shifted = ShiftedInterpolator::new(base(), 0.25);

        assert_relative_eq!(shifted.min_x(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(shifted.max_x(), 1.75, epsilon = 1e-12);
        assert!(shifted.in_range(1.0));
        assert!(!shifted.in_range(1.9));
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let shifted = ShiftedInterpolator::new(base(), 0.0);
        assert_relative_eq!(shifted.interpolate(1.5).unwrap(), 0.03935, epsilon = 1e-12);
    }

    #[test]
    fn test_inherits_flat_extrapolation() {
        let shifted = ShiftedInterpolator::new(base(), 0.25);

        // Past the shifted upper edge the inner strategy goes flat
        assert_relative_eq!(shifted.interpolate(5.0).unwrap(), 0.0373, epsilon = 1e-12);
    }
}
