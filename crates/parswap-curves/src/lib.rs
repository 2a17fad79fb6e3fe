//! # Parswap Curves
//!
//! Zero curve construction and dual-curve bootstrap for the Parswap
//! swap pricing library.
//!
//! This crate provides:
//!
//! - **Curve Trait**: the [`traits::Curve`] seam shared by all curve types
//! - **Curve Types**: knot-based [`curves::ZeroCurve`] and the
//!   [`curves::TimeShiftedCurve`] forward-valuation view
//! - **Quotes**: market quote types and validation
//! - **Bootstrap**: sequential dual-curve strip with repricing validation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use parswap_curves::prelude::*;
//!
//! let result = DualCurveBootstrapper::new(reference_date, -38.0)
//!     .add_quote(MarketQuote::fixing(0.5, 0.0411))
//!     .add_quote(MarketQuote::par_swap(1.0, 0.0414))
//!     .add_quote(MarketQuote::par_swap(2.0, 0.0373))
//!     .bootstrap()?;
//!
//! assert!(result.is_valid());
//! let df = result.discount.discount_factor(1.5)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod bootstrap;
pub mod curves;
pub mod error;
pub mod interpolation;
pub mod quotes;
pub mod repricing;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{BootstrapConfig, DualCurveBootstrapper};
    pub use crate::curves::{TimeShiftedCurve, ZeroCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::quotes::{validated_quotes, MarketQuote};
    pub use crate::repricing::{BootstrapResult, PillarCheck, RepricingReport};
    pub use crate::traits::{Curve, FIRST_PERIOD_EPS};
}

pub use curves::{TimeShiftedCurve, ZeroCurve};
pub use error::{CurveError, CurveResult};
pub use traits::Curve;
