//! Interpolation methods for zero curve construction.
//!
//! This module provides the interpolation strategies used by the curve
//! layer:
//!
//! - [`LinearInterpolator`]: piecewise-linear on zero rates
//! - [`CubicSpline`]: natural cubic spline, optionally anchored at t = 0
//! - [`ShiftedInterpolator`]: re-queries a fitted strategy at a time offset
//!
//! # Extrapolation
//!
//! All strategies extrapolate FLAT: queries outside the fitted range
//! return the boundary value, never a continued slope or boundary
//! polynomial. Zero curves must not invent term structure beyond the
//! last market pillar.

mod cubic_spline;
mod linear;
mod shifted;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;
pub use shifted::ShiftedInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_interpolators_agree_at_knots() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.0411, 0.0414, 0.0373, 0.0348, 0.0321];

        let linear = LinearInterpolator::new(times.clone(), rates.clone()).unwrap();
        let spline = CubicSpline::new(times.clone(), rates.clone()).unwrap();

        for (t, r) in times.iter().zip(rates.iter()) {
            assert_relative_eq!(linear.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
            assert_relative_eq!(spline.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }

    proptest! {
        #[test]
        fn prop_flat_extrapolation(
            offsets in proptest::collection::vec(0.01f64..2.0, 2..8),
            values in proptest::collection::vec(-0.05f64..0.10, 8),
            probe in 0.0f64..100.0,
        ) {
            // Build strictly increasing knot times from positive offsets
            let mut xs = Vec::with_capacity(offsets.len());
            let mut acc = 0.25;
            for o in &offsets {
                acc += o;
                xs.push(acc);
            }
            let ys: Vec<f64> = values.iter().take(xs.len()).copied().collect();

            let linear = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
            let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

            let first = ys[0];
            let last = *ys.last().unwrap();

            // Below range both return the first value, above range the last
            prop_assert!((linear.interpolate(xs[0] - probe).unwrap() - first).abs() < 1e-12);
            prop_assert!((spline.interpolate(xs[0] - probe).unwrap() - first).abs() < 1e-12);
            prop_assert!(
                (linear.interpolate(xs[xs.len() - 1] + probe).unwrap() - last).abs() < 1e-12
            );
            prop_assert!(
                (spline.interpolate(xs[xs.len() - 1] + probe).unwrap() - last).abs() < 1e-12
            );
        }
    }
}
