//! Repricing validation for the dual-curve bootstrap.
//!
//! A curve pair that cannot reprice its own input quotes within
//! tolerance is wrong, so every bootstrap ends with a repricing pass:
//! each par swap quote is revalued against the finished curves and the
//! residual NPV recorded. Callers get the full per-pillar picture, not
//! just a pass/fail bit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curves::ZeroCurve;

/// Solve and repricing outcome for a single bootstrapped pillar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PillarCheck {
    /// Quote tenor in years.
    pub tenor_years: f64,
    /// Solved projection zero rate at the pillar.
    pub zero_rate: f64,
    /// Swap NPV per unit notional against the finished curve pair.
    pub residual: f64,
    /// Newton iterations used for the solve.
    pub iterations: u32,
    /// Whether the solve met the solver tolerance.
    ///
    /// `false` flags a stalled or capped iteration; the pillar still
    /// carries the best available estimate.
    pub converged: bool,
}

impl PillarCheck {
    /// Returns true if the repricing residual is within `tolerance`.
    #[must_use]
    pub fn passed(&self, tolerance: f64) -> bool {
        self.residual.abs() <= tolerance
    }
}

/// Repricing results for every par swap quote in a bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepricingReport {
    checks: Vec<PillarCheck>,
    tolerance: f64,
}

impl RepricingReport {
    /// Creates a report from per-pillar checks.
    #[must_use]
    pub fn new(checks: Vec<PillarCheck>, tolerance: f64) -> Self {
        Self { checks, tolerance }
    }

    /// Returns the per-pillar checks.
    #[must_use]
    pub fn checks(&self) -> &[PillarCheck] {
        &self.checks
    }

    /// Returns the repricing tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns true if every pillar converged and repriced within
    /// tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.checks
            .iter()
            .all(|c| c.converged && c.passed(self.tolerance))
    }

    /// Returns the largest absolute repricing residual.
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        self.checks
            .iter()
            .map(|c| c.residual.abs())
            .fold(0.0, f64::max)
    }

    /// Returns the tenors that failed to reprice within tolerance.
    #[must_use]
    pub fn failed_tenors(&self) -> Vec<f64> {
        self.checks
            .iter()
            .filter(|c| !(c.converged && c.passed(self.tolerance)))
            .map(|c| c.tenor_years)
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:>12} {:>14} {:>6} {:>8}",
            "Tenor", "Zero Rate", "Residual", "Iters", "Status"
        )?;
        for c in &self.checks {
            writeln!(
                f,
                "{:<8} {:>12.6} {:>14.2e} {:>6} {:>8}",
                format!("{}Y", c.tenor_years),
                c.zero_rate,
                c.residual,
                c.iterations,
                if c.converged && c.passed(self.tolerance) {
                    "PASSED"
                } else {
                    "FAILED"
                }
            )?;
        }
        write!(
            f,
            "max residual {:.2e} (tolerance {:.1e})",
            self.max_residual(),
            self.tolerance
        )
    }
}

/// Output of a dual-curve bootstrap.
///
/// Both curves share the same knot times; the discount curve sits at a
/// constant spread below/above the projection curve at every knot.
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// Forward-projection curve.
    pub projection: ZeroCurve,
    /// Discount curve (projection rate + fixed spread at every knot).
    pub discount: ZeroCurve,
    /// Repricing validation for every par swap quote.
    pub report: RepricingReport,
}

impl BootstrapResult {
    /// Returns true if every pillar converged and repriced within
    /// tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Returns the largest absolute repricing residual.
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        self.report.max_residual()
    }

    /// Consumes the result, returning the (projection, discount) pair.
    #[must_use]
    pub fn into_curves(self) -> (ZeroCurve, ZeroCurve) {
        (self.projection, self.discount)
    }
}
