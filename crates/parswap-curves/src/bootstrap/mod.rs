//! Dual-curve bootstrap.
//!
//! Builds a self-consistent (projection, discount) curve pair from a
//! direct fixing plus par swap quotes, solving one projection zero rate
//! per tenor. The discount curve is never solved independently: at every
//! knot it is the projection rate plus a fixed spread.

mod dual;

pub use dual::DualCurveBootstrapper;

use parswap_core::Frequency;
use parswap_math::solvers::SolverConfig;

use crate::interpolation::InterpolationMethod;

/// Configuration for the dual-curve bootstrap.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapConfig {
    /// Interpolation method for both curves during and after the strip.
    pub interpolation: InterpolationMethod,
    /// Newton solver settings for the per-pillar root solve.
    pub solver: SolverConfig,
    /// Fixed leg payment frequency of the quoted par swaps.
    pub fixed_frequency: Frequency,
    /// Floating leg payment frequency of the quoted par swaps.
    pub float_frequency: Frequency,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::Linear,
            solver: SolverConfig::default(),
            fixed_frequency: Frequency::Annual,
            float_frequency: Frequency::SemiAnnual,
        }
    }
}
