//! # Strata Curves
//!
//! Curve construction for the Strata curve engine.
//!
//! This crate provides:
//!
//! - **Curves**: piecewise discount and forward term structures over
//!   log-linear interpolation
//! - **Instruments**: OIS, FRA, and IRS rate helpers that tie market
//!   quotes to curve nodes
//! - **Bootstrap**: the sequential pillar-by-pillar solver
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_core::prelude::*;
//! use strata_curves::prelude::*;
//!
//! let asof = Date::parse_iso("2026-01-01").unwrap();
//!
//! let ois_config = OisConfig::default()
//!     .with_fixed_dc(DayCount::Act365Fixed)
//!     .with_fixed_freq(Frequency::SemiAnnual);
//!
//! let helpers = vec![
//!     OisSwapHelper::new(asof, Date::parse_iso("2026-07-01").unwrap(), 0.025, ois_config),
//!     OisSwapHelper::new(asof, Date::parse_iso("2027-01-01").unwrap(), 0.030, ois_config),
//! ];
//!
//! let curve = bootstrap_discount_curve(
//!     asof,
//!     DiscountCurveConfig::default(),
//!     &helpers,
//!     &BootstrapOptions::default(),
//! )
//! .unwrap();
//!
//! assert!(curve.discount_factor(Date::parse_iso("2027-01-01").unwrap()) < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]

pub mod bootstrap;
pub mod curves;
pub mod error;
pub mod instruments;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{
        bootstrap_discount_curve, bootstrap_forward_curve, BootstrapOptions,
    };
    pub use crate::curves::{
        DiscountCurveConfig, ForwardCurveConfig, PiecewiseDiscountCurve, PiecewiseForwardCurve,
    };
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::{
        ForwardHelper, FraConfig, FraHelper, IrsConfig, IrsHelper, OisConfig, OisSwapHelper,
        RateHelper,
    };
}

pub use bootstrap::{bootstrap_discount_curve, bootstrap_forward_curve, BootstrapOptions};
pub use curves::{
    DiscountCurveConfig, ForwardCurveConfig, PiecewiseDiscountCurve, PiecewiseForwardCurve,
};
pub use error::{CurveError, CurveResult};
pub use instruments::{
    ForwardHelper, FraConfig, FraHelper, IrsConfig, IrsHelper, OisConfig, OisSwapHelper, RateHelper,
};
