//! Piecewise discount factor curve.

use strata_core::calendars::{BusinessDayConvention, WeekendCalendar};
use strata_core::daycounts::DayCount;
use strata_core::types::Date;
use strata_math::interpolation::{Interpolator, LogLinearInterpolator};
use strata_math::nodes::Nodes1D;

use crate::error::CurveResult;

/// Configuration of a piecewise discount curve.
#[derive(Debug, Clone, Copy)]
pub struct DiscountCurveConfig {
    /// Day count used to convert dates to curve times.
    pub dc: DayCount,
    /// Calendar for instruments priced off this curve.
    pub calendar: WeekendCalendar,
    /// Business day convention for instruments priced off this curve.
    pub bdc: BusinessDayConvention,
}

impl Default for DiscountCurveConfig {
    fn default() -> Self {
        Self {
            dc: DayCount::Act365Fixed,
            calendar: WeekendCalendar,
            bdc: BusinessDayConvention::ModifiedFollowing,
        }
    }
}

/// A piecewise discount factor curve.
///
/// Nodes hold discount factors at year-fraction times from the as-of
/// date, with an implicit `DF(0) = 1`. Discount factors between nodes
/// come from log-linear interpolation, so they stay strictly positive.
///
/// The curve is mutable only through [`set_nodes`](Self::set_nodes),
/// which the bootstrapper calls while it owns the curve exclusively;
/// afterwards every query is a pure read.
#[derive(Debug, Clone)]
pub struct PiecewiseDiscountCurve {
    asof: Date,
    config: DiscountCurveConfig,
    nodes: Nodes1D,
    interp: Option<LogLinearInterpolator>,
}

impl PiecewiseDiscountCurve {
    /// Creates an empty curve at the given as-of date.
    #[must_use]
    pub fn new(asof: Date, config: DiscountCurveConfig) -> Self {
        Self {
            asof,
            config,
            nodes: Nodes1D::new(),
            interp: None,
        }
    }

    /// Returns the as-of date.
    #[must_use]
    pub fn asof(&self) -> Date {
        self.asof
    }

    /// Returns the curve configuration.
    #[must_use]
    pub fn config(&self) -> DiscountCurveConfig {
        self.config
    }

    /// Replaces the curve nodes and rebuilds the interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if the nodes are not valid interpolator data:
    /// fewer than two points, non-finite entries, non-increasing times,
    /// or non-positive discount factors.
    pub fn set_nodes(&mut self, nodes: Nodes1D) -> CurveResult<()> {
        let interp =
            LogLinearInterpolator::new(nodes.times().to_vec(), nodes.values().to_vec())?;
        self.nodes = nodes;
        self.interp = Some(interp);
        Ok(())
    }

    /// Returns the discount factor for a date.
    #[must_use]
    pub fn discount_factor(&self, date: Date) -> f64 {
        self.discount_factor_at(self.config.dc.year_fraction(self.asof, date))
    }

    /// Returns the discount factor at a year-fraction time.
    ///
    /// Times at or before the as-of date return `1.0` by convention.
    ///
    /// # Panics
    ///
    /// Panics if called before [`set_nodes`](Self::set_nodes); a curve
    /// without nodes cannot be queried.
    #[must_use]
    pub fn discount_factor_at(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        self.interp
            .as_ref()
            .expect("discount curve queried before set_nodes")
            .value(t)
    }

    /// Returns the curve nodes for diagnostics.
    #[must_use]
    pub fn nodes(&self) -> &Nodes1D {
        &self.nodes
    }
}
