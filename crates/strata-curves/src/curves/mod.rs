//! Piecewise discount and forward term structures.
//!
//! Both curves map dates to year-fraction times through their configured
//! day count and evaluate log-linear interpolators over their nodes.

mod discount;
mod forward;

pub use discount::{DiscountCurveConfig, PiecewiseDiscountCurve};
pub use forward::{ForwardCurveConfig, PiecewiseForwardCurve};
