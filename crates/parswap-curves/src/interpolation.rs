//! Interpolation method selection for zero curves.

use serde::{Deserialize, Serialize};

/// Knot-fitting interpolation methods for zero curves.
///
/// The set is closed: these are the strategies the bootstrap and curve
/// layers know how to fit from knots. A pre-fitted strategy (e.g., a
/// time-shifted spline) can instead be attached directly with
/// [`crate::curves::ZeroCurve::set_interpolator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Piecewise-linear on zero rates with flat extrapolation.
    #[default]
    Linear,

    /// Natural cubic spline on zero rates.
    CubicSpline,

    /// Natural cubic spline with a synthetic t = 0 anchor knot equal to
    /// the first real knot's value, pinning the short end.
    CubicSplineAnchored,
}

impl InterpolationMethod {
    /// Returns true if this method produces a C2-smooth curve.
    #[must_use]
    pub fn is_smooth(&self) -> bool {
        matches!(self, Self::CubicSpline | Self::CubicSplineAnchored)
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::CubicSpline => "Cubic Spline",
            Self::CubicSplineAnchored => "Cubic Spline (anchored)",
        };
        write!(f, "{name}")
    }
}
