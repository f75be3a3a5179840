//! Sequential pillar-by-pillar bootstrap.
//!
//! Each helper fixes exactly one unknown: the value of the curve node at
//! its maturity. Helpers are processed in ascending maturity order, so
//! earlier pillars are frozen by the time a later one is solved and the
//! whole problem decomposes into a sequence of 1-D root finds.

use tracing::{debug, info};

use strata_core::types::Date;
use strata_math::nodes::Nodes1D;
use strata_math::solvers::{brent, SolverConfig};

use crate::curves::{
    DiscountCurveConfig, ForwardCurveConfig, PiecewiseDiscountCurve, PiecewiseForwardCurve,
};
use crate::error::{CurveError, CurveResult};
use crate::instruments::{ForwardHelper, OisSwapHelper, RateHelper};

/// Decay rate of the placeholder value a new node starts from. The
/// solver overwrites it; it only gives the interpolator a full shape
/// during residual evaluation.
const PLACEHOLDER_DECAY: f64 = 0.02;

/// Options of a bootstrap run.
#[derive(Debug, Clone, Copy)]
pub struct BootstrapOptions {
    /// Root-finder configuration for each pillar.
    pub solver: SolverConfig,
    /// Lower bracket bound for node values.
    pub df_min: f64,
    /// Upper bracket bound for node values.
    pub df_max: f64,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            df_min: 1e-8,
            df_max: 1.0,
        }
    }
}

impl BootstrapOptions {
    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the node value bracket.
    #[must_use]
    pub fn with_bracket(mut self, df_min: f64, df_max: f64) -> Self {
        self.df_min = df_min;
        self.df_max = df_max;
        self
    }
}

/// Bootstraps a discount curve from OIS helpers.
///
/// Helpers are sorted by maturity and solved one node at a time; the
/// finished curve reprices every input helper to its market quote.
///
/// # Errors
///
/// Returns `EmptyHelpers` for an empty input, `InvalidPillarTime` and
/// `NonMonotonicPillars` for unusable maturities, and propagates solver
/// and repricing failures from individual pillars.
pub fn bootstrap_discount_curve(
    asof: Date,
    config: DiscountCurveConfig,
    helpers: &[OisSwapHelper],
    options: &BootstrapOptions,
) -> CurveResult<PiecewiseDiscountCurve> {
    if helpers.is_empty() {
        return Err(CurveError::EmptyHelpers);
    }

    let mut sorted: Vec<&OisSwapHelper> = helpers.iter().collect();
    sorted.sort_by_key(|h| h.maturity());

    info!(asof = %asof, helpers = sorted.len(), "bootstrapping discount curve");

    let mut curve = PiecewiseDiscountCurve::new(asof, config);
    let mut nodes = Nodes1D::new();
    nodes.push_back(0.0, 1.0)?;

    for helper in sorted {
        let t = config.dc.year_fraction(asof, helper.maturity());
        check_pillar(helper.maturity(), t, &nodes)?;
        nodes.push_back(t, (-PLACEHOLDER_DECAY * t).exp())?;

        let solution = {
            let residual = |df: f64| -> f64 {
                let mut trial = nodes.clone();
                if trial.set_last_value(df).is_err() {
                    return f64::NAN;
                }
                if curve.set_nodes(trial).is_err() {
                    return f64::NAN;
                }
                match helper.implied_par_rate(&curve) {
                    Ok(implied) => implied - helper.market_quote(),
                    Err(_) => f64::NAN,
                }
            };
            brent(residual, options.df_min, options.df_max, &options.solver)?
        };

        nodes.set_last_value(solution.root)?;
        curve.set_nodes(nodes.clone())?;

        debug!(
            pillar = %helper.maturity(),
            t,
            value = solution.root,
            iterations = solution.iterations,
            converged = solution.converged,
            "solved discount pillar"
        );
    }

    info!(nodes = curve.nodes().len(), "discount curve bootstrapped");
    Ok(curve)
}

/// Bootstraps a forward curve from FRA and IRS helpers on top of a
/// previously bootstrapped discount curve.
///
/// Nodes hold pseudo-discount factors; the residual dispatches on the
/// helper variant, with FRAs reading the forward curve alone and swaps
/// reading both curves.
///
/// # Errors
///
/// As [`bootstrap_discount_curve`].
pub fn bootstrap_forward_curve(
    asof: Date,
    config: ForwardCurveConfig,
    discount: &PiecewiseDiscountCurve,
    helpers: &[ForwardHelper],
    options: &BootstrapOptions,
) -> CurveResult<PiecewiseForwardCurve> {
    if helpers.is_empty() {
        return Err(CurveError::EmptyHelpers);
    }

    let mut sorted: Vec<&ForwardHelper> = helpers.iter().collect();
    sorted.sort_by_key(|h| h.maturity());

    info!(asof = %asof, helpers = sorted.len(), "bootstrapping forward curve");

    let mut curve = PiecewiseForwardCurve::new(asof, config);
    let mut nodes = Nodes1D::new();
    nodes.push_back(0.0, 1.0)?;

    for helper in sorted {
        let t = config.dc.year_fraction(asof, helper.maturity());
        check_pillar(helper.maturity(), t, &nodes)?;
        nodes.push_back(t, (-PLACEHOLDER_DECAY * t).exp())?;

        let solution = {
            let residual = |pf: f64| -> f64 {
                let mut trial = nodes.clone();
                if trial.set_last_value(pf).is_err() {
                    return f64::NAN;
                }
                if curve.set_nodes(trial).is_err() {
                    return f64::NAN;
                }
                match helper.implied_quote(discount, &curve) {
                    Ok(implied) => implied - helper.market_quote(),
                    Err(_) => f64::NAN,
                }
            };
            brent(residual, options.df_min, options.df_max, &options.solver)?
        };

        nodes.set_last_value(solution.root)?;
        curve.set_nodes(nodes.clone())?;

        debug!(
            pillar = %helper.maturity(),
            t,
            value = solution.root,
            iterations = solution.iterations,
            converged = solution.converged,
            "solved forward pillar"
        );
    }

    info!(nodes = curve.nodes().len(), "forward curve bootstrapped");
    Ok(curve)
}

/// Validates a pillar time against the solved nodes.
fn check_pillar(maturity: Date, t: f64, nodes: &Nodes1D) -> CurveResult<()> {
    if t <= 0.0 {
        return Err(CurveError::InvalidPillarTime { maturity, t });
    }
    if let Some(prev) = nodes.last_time() {
        if t <= prev {
            return Err(CurveError::NonMonotonicPillars { prev, current: t });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::OisConfig;
    use approx::assert_relative_eq;
    use strata_core::daycounts::DayCount;
    use strata_core::types::Frequency;

    fn d(iso: &str) -> Date {
        Date::parse_iso(iso).unwrap()
    }

    #[test]
    fn test_empty_helpers_fails() {
        let result = bootstrap_discount_curve(
            d("2026-01-01"),
            DiscountCurveConfig::default(),
            &[],
            &BootstrapOptions::default(),
        );
        assert!(matches!(result, Err(CurveError::EmptyHelpers)));
    }

    #[test]
    fn test_single_annual_ois() {
        let asof = d("2026-01-01");
        let config = OisConfig::default().with_fixed_dc(DayCount::Act365Fixed);
        let helpers = vec![OisSwapHelper::new(asof, d("2027-01-01"), 0.03, config)];

        // A narrower bracket and a smaller iteration budget still solve
        // this comfortably.
        let options = BootstrapOptions::default()
            .with_bracket(1e-6, 1.0)
            .with_solver(SolverConfig::default().with_max_iterations(60));

        let curve =
            bootstrap_discount_curve(asof, DiscountCurveConfig::default(), &helpers, &options)
                .unwrap();

        // Single annual period: DF = 1 / (1 + r * tau) with tau = 1.
        let df = curve.discount_factor(d("2027-01-01"));
        assert_relative_eq!(df, 1.0 / 1.03, epsilon = 1e-9);
        assert_relative_eq!(curve.discount_factor_at(0.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shared_maturity_fails() {
        let asof = d("2026-01-01");
        let config = OisConfig::default();
        let helpers = vec![
            OisSwapHelper::new(asof, d("2027-01-01"), 0.030, config),
            OisSwapHelper::new(asof, d("2027-01-01"), 0.031, config),
        ];

        let result = bootstrap_discount_curve(
            asof,
            DiscountCurveConfig::default(),
            &helpers,
            &BootstrapOptions::default(),
        );
        assert!(matches!(result, Err(CurveError::NonMonotonicPillars { .. })));
    }

    #[test]
    fn test_maturity_before_asof_fails() {
        let asof = d("2026-01-01");
        let config = OisConfig::default();
        let helpers = vec![OisSwapHelper::new(d("2025-01-01"), d("2025-07-01"), 0.03, config)];

        let result = bootstrap_discount_curve(
            asof,
            DiscountCurveConfig::default(),
            &helpers,
            &BootstrapOptions::default(),
        );
        assert!(matches!(result, Err(CurveError::InvalidPillarTime { .. })));
    }

    #[test]
    fn test_forward_bootstrap_empty_helpers_fails() {
        let asof = d("2026-01-01");
        let config = OisConfig::default().with_fixed_dc(DayCount::Act365Fixed);
        let helpers = vec![OisSwapHelper::new(asof, d("2027-01-01"), 0.03, config)];
        let discount = bootstrap_discount_curve(
            asof,
            DiscountCurveConfig::default(),
            &helpers,
            &BootstrapOptions::default(),
        )
        .unwrap();

        let result = bootstrap_forward_curve(
            asof,
            ForwardCurveConfig::default(),
            &discount,
            &[],
            &BootstrapOptions::default(),
        );
        assert!(matches!(result, Err(CurveError::EmptyHelpers)));
    }

    #[test]
    fn test_sort_is_stable_on_input_order() {
        // Unsorted input must produce the same curve as sorted input.
        let asof = d("2026-01-01");
        let config = OisConfig::default()
            .with_fixed_dc(DayCount::Act365Fixed)
            .with_fixed_freq(Frequency::SemiAnnual);

        let sorted_helpers = vec![
            OisSwapHelper::new(asof, d("2026-07-01"), 0.025, config),
            OisSwapHelper::new(asof, d("2027-01-01"), 0.030, config),
        ];
        let unsorted_helpers = vec![
            OisSwapHelper::new(asof, d("2027-01-01"), 0.030, config),
            OisSwapHelper::new(asof, d("2026-07-01"), 0.025, config),
        ];

        let opts = BootstrapOptions::default();
        let a = bootstrap_discount_curve(asof, DiscountCurveConfig::default(), &sorted_helpers, &opts)
            .unwrap();
        let b =
            bootstrap_discount_curve(asof, DiscountCurveConfig::default(), &unsorted_helpers, &opts)
                .unwrap();

        for t in [0.25, 0.5, 0.75, 1.0] {
            assert_relative_eq!(
                a.discount_factor_at(t),
                b.discount_factor_at(t),
                epsilon = 1e-12
            );
        }
    }
}
