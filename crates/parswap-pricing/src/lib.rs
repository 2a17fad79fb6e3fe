//! # Parswap Pricing
//!
//! Swap valuation and risk engine for the Parswap library.
//!
//! This crate provides:
//!
//! - **Swap**: the receiver swap value object with on-demand cash flow
//!   and float period generation
//! - **Pricer**: leg PVs, par rate, fixed annuity, accruals, and the
//!   clean/dirty split against a (projection, discount) curve pair
//! - **Risk**: DV01 and Gamma by par-quote bump and full re-bootstrap
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parswap_pricing::prelude::*;
//!
//! let (projection, discount) = bootstrap_result.into_curves();
//! let pricer = SwapPricer::new(&projection, &discount, valuation_date)?;
//!
//! let swap = Swap::from_tenor_years(valuation_date, 9.0, 1_000_000.0, 0.0)?;
//! let par = pricer.par_rate(&swap)?;
//! let valuation = pricer.price(&swap.with_fixed_rate(par))?;
//! assert!(valuation.dirty_pv.abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod pricer;
pub mod risk;
pub mod swap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::pricer::{SwapPricer, Valuation};
    pub use crate::risk::{RiskCalculator, RiskMetrics, QUOTE_BUMP_BPS};
    pub use crate::swap::{CashFlow, FloatPeriod, Swap};
}

pub use error::{PricingError, PricingResult};
pub use pricer::{SwapPricer, Valuation};
pub use risk::{RiskCalculator, RiskMetrics};
pub use swap::Swap;
