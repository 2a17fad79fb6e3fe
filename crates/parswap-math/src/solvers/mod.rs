//! Root-finding for curve calibration.
//!
//! The bootstrap solves one nonlinear equation per market pillar, so this
//! module provides a single solver: [`newton_raphson`] with a numerical
//! forward-difference derivative. Quadratic convergence gets a par swap
//! repriced to 1e-10 in a handful of iterations where bisection would
//! need fifty.
//!
//! The constants below are tunables. They are deliberately module-level
//! `pub const`s rather than buried literals so calibration behavior can
//! be reasoned about in one place.

mod newton;

pub use newton::newton_raphson;

/// Default convergence tolerance on the objective value.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default hard cap on Newton iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Forward bump used for the numerical derivative.
pub const DERIVATIVE_BUMP: f64 = 1e-4;

/// Floor below which the derivative is considered stalled.
pub const DERIVATIVE_FLOOR: f64 = 1e-12;

/// Configuration for root-finding.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found (or the best estimate at the iteration cap).
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at the root).
    pub residual: f64,
    /// Whether the residual met the tolerance.
    ///
    /// `false` means the iteration cap was reached; the root is still
    /// the best available estimate, and callers decide whether the
    /// residual is acceptable.
    pub converged: bool,
}
