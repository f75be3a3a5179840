//! Piecewise forward curve over pseudo-discount factors.

use strata_core::daycounts::DayCount;
use strata_core::types::Date;
use strata_math::interpolation::{Interpolator, LogLinearInterpolator};
use strata_math::nodes::Nodes1D;

use crate::error::{CurveError, CurveResult};

/// Configuration of a piecewise forward curve.
#[derive(Debug, Clone, Copy)]
pub struct ForwardCurveConfig {
    /// Day count used to convert dates to curve times.
    pub dc: DayCount,
}

impl Default for ForwardCurveConfig {
    fn default() -> Self {
        Self {
            dc: DayCount::Act365Fixed,
        }
    }
}

/// A piecewise forward curve.
///
/// Nodes hold pseudo-discount factors: positive, monotonically usable
/// proxies whose ratios yield simple forward rates. They are not true
/// discount factors, but they ride the same log-linear machinery, so
/// positivity is preserved everywhere.
#[derive(Debug, Clone)]
pub struct PiecewiseForwardCurve {
    asof: Date,
    config: ForwardCurveConfig,
    nodes: Nodes1D,
    interp: Option<LogLinearInterpolator>,
}

impl PiecewiseForwardCurve {
    /// Creates an empty curve at the given as-of date.
    #[must_use]
    pub fn new(asof: Date, config: ForwardCurveConfig) -> Self {
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
    pub fn config(&self) -> ForwardCurveConfig {
        self.config
    }

    /// Replaces the pseudo-discount nodes and rebuilds the interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if the nodes are not valid interpolator data or
    /// any value is non-positive.
    pub fn set_nodes(&mut self, nodes: Nodes1D) -> CurveResult<()> {
        let interp =
            LogLinearInterpolator::new(nodes.times().to_vec(), nodes.values().to_vec())?;
        self.nodes = nodes;
        self.interp = Some(interp);
        Ok(())
    }

    /// Returns the pseudo-discount factor at a year-fraction time.
    ///
    /// Times at or before the as-of date return `1.0` by convention.
    ///
    /// # Panics
    ///
    /// Panics if called before [`set_nodes`](Self::set_nodes).
    #[must_use]
    pub fn pseudo_df(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        self.interp
            .as_ref()
            .expect("forward curve queried before set_nodes")
            .value(t)
    }

    /// Returns the simple forward rate over `[start, end]`.
    ///
    /// The accrual fraction is taken under `dc` while the curve times use
    /// the curve's own day count:
    ///
    /// ```text
    /// F = (P_f(t1) / P_f(t2) - 1) / tau
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NonPositiveAccrual` when the accrual fraction
    /// is not strictly positive.
    pub fn forward_rate(&self, start: Date, end: Date, dc: DayCount) -> CurveResult<f64> {
        let tau = dc.year_fraction(start, end);
        if tau <= 0.0 {
            return Err(CurveError::NonPositiveAccrual { tau });
        }

        let t1 = self.config.dc.year_fraction(self.asof, start);
        let t2 = self.config.dc.year_fraction(self.asof, end);

        let p1 = self.pseudo_df(t1);
        let p2 = self.pseudo_df(t2);

        Ok((p1 / p2 - 1.0) / tau)
    }

    /// Returns the curve nodes for diagnostics.
    #[must_use]
    pub fn nodes(&self) -> &Nodes1D {
        &self.nodes
    }
}
