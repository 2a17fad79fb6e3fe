//! Natural cubic spline interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Natural cubic spline interpolation with flat extrapolation.
///
/// Fits piecewise cubic polynomials with continuous first and second
/// derivatives through the data points. "Natural" means the second
/// derivative is zero at both endpoints.
///
/// On each interval the spline is
/// `S_i(x) = a_i + b_i·dx + c_i·dx² + d_i·dx³` with `dx = x − x_i`.
/// Second derivatives at the knots come from the standard tridiagonal
/// system, solved with the Thomas algorithm. With exactly two knots the
/// spline degenerates to a straight segment.
///
/// Queries outside the fitted range return the boundary value, so the
/// second derivative is identically zero beyond both edges.
///
/// # Example
///
/// ```rust
/// use parswap_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.5, 1.0, 2.0, 3.0];
/// let ys = vec![0.0411, 0.0414, 0.0373, 0.0348];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// let r = spline.interpolate(1.5).unwrap();
/// assert!(r > 0.034 && r < 0.042);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Polynomial coefficients per interval: S_i(x) = a + b·dx + c·dx² + d·dx³
    coeffs: Vec<SegmentCoeffs>,
}

#[derive(Debug, Clone, Copy)]
struct SegmentCoeffs {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
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

        let coeffs = fit_natural_spline(&xs, &ys);

        Ok(Self { xs, ys, coeffs })
    }

    /// Refits the spline with a synthetic anchor knot at t = 0.
    ///
    /// The anchor takes the first real knot's value, which pins the short
    /// end: `interpolate(0.0)` equals `interpolate(first_knot_time)`. A
    /// no-op when the first knot is already at t = 0.
    #[must_use]
    pub fn with_zero_anchor(self) -> Self {
        if self.xs[0] <= 0.0 {
            return self;
        }

        let mut xs = Vec::with_capacity(self.xs.len() + 1);
        let mut ys = Vec::with_capacity(self.ys.len() + 1);
        xs.push(0.0);
        ys.push(self.ys[0]);
        xs.extend_from_slice(&self.xs);
        ys.extend_from_slice(&self.ys);

        let coeffs = fit_natural_spline(&xs, &ys);
        Self { xs, ys, coeffs }
    }

    /// Returns the second derivative of the spline at x.
    ///
    /// Exactly zero at and beyond both domain edges (the natural boundary
    /// condition combined with flat extrapolation).
    #[must_use]
    pub fn second_derivative(&self, x: f64) -> f64 {
        if x <= self.xs[0] || x >= self.xs[self.xs.len() - 1] {
            return 0.0;
        }

        let i = self.find_segment(x);
        let dx = x - self.xs[i];
        let c = self.coeffs[i];
        2.0 * c.c + 6.0 * c.d * dx
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        match self.xs.binary_search_by(|probe| {
            probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        // Flat extrapolation outside the data range
        if x <= self.xs[0] {
            return Ok(self.ys[0]);
        }
        if x >= self.xs[self.xs.len() - 1] {
            return Ok(self.ys[self.ys.len() - 1]);
        }

        let i = self.find_segment(x);
        let dx = x - self.xs[i];
        let c = self.coeffs[i];

        Ok(c.a + c.b * dx + c.c * dx * dx + c.d * dx * dx * dx)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Fits a natural cubic spline, returning per-interval coefficients.
///
/// Solves the tridiagonal system for knot second derivatives M with the
/// Thomas algorithm under the natural boundary conditions
/// `M[0] = M[n-1] = 0`, then converts to polynomial coefficients:
///
/// ```text
/// a_i = y_i
/// b_i = (y_{i+1} - y_i)/h_i - h_i·(2·M_i + M_{i+1})/6
/// c_i = M_i / 2
/// d_i = (M_{i+1} - M_i) / (6·h_i)
/// ```
fn fit_natural_spline(xs: &[f64], ys: &[f64]) -> Vec<SegmentCoeffs> {
    let n = xs.len();
    let mut m = vec![0.0; n];

    // Two knots: M stays all-zero and the segment is a straight line
    if n > 2 {
        let dim = n - 2;
        let mut sub = vec![0.0; dim];
        let mut diag = vec![0.0; dim];
        let mut sup = vec![0.0; dim];
        let mut rhs = vec![0.0; dim];

        for i in 1..n - 1 {
            let h0 = xs[i] - xs[i - 1];
            let h1 = xs[i + 1] - xs[i];
            let j = i - 1;
            sub[j] = h0 / 6.0;
            diag[j] = (h0 + h1) / 3.0;
            sup[j] = h1 / 6.0;
            rhs[j] = (ys[i + 1] - ys[i]) / h1 - (ys[i] - ys[i - 1]) / h0;
        }

        // Thomas algorithm: forward elimination
        for j in 1..dim {
            let w = sub[j] / diag[j - 1];
            diag[j] -= w * sup[j - 1];
            rhs[j] -= w * rhs[j - 1];
        }

        // Back substitution into the interior second derivatives
        m[dim] = rhs[dim - 1] / diag[dim - 1];
        for j in (0..dim - 1).rev() {
            m[j + 1] = (rhs[j] - sup[j] * m[j + 2]) / diag[j];
        }
    }

    let mut coeffs = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let h = xs[i + 1] - xs[i];
        coeffs.push(SegmentCoeffs {
            a: ys[i],
            b: (ys[i + 1] - ys[i]) / h - h * (2.0 * m[i] + m[i + 1]) / 6.0,
            c: m[i] / 2.0,
            d: (m[i + 1] - m[i]) / (6.0 * h),
        });
    }

    coeffs
}
