//! Piecewise-linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points with flat extrapolation.
///
/// Connects consecutive points with straight lines. Queries outside the
/// data range return the nearest boundary value rather than continuing
/// the boundary segment's slope.
///
/// # Example
///
/// ```rust
/// use parswap_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let xs = vec![0.5, 1.0, 2.0];
/// let ys = vec![0.0411, 0.0414, 0.0373];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let r = interp.interpolate(1.5).unwrap();
/// // Midpoint of (1.0, 0.0414) and (2.0, 0.0373)
/// assert!((r - 0.03935).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths
    /// differ, or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        Ok(Self { xs, ys })
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        // Flat extrapolation outside the data range
        if x <= self.xs[0] {
            return Ok(self.ys[0]);
        }
        if x >= self.xs[self.xs.len() - 1] {
            return Ok(self.ys[self.ys.len() - 1]);
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
