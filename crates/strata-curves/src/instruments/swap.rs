//! Vanilla interest-rate swap helper.
//!
//! IRS quotes extend the forward curve once a discount curve is fixed.

use strata_core::calendars::{BusinessDayConvention, WeekendCalendar};
use strata_core::daycounts::DayCount;
use strata_core::types::{Date, Frequency};

use super::{leg_schedule, tenor_for_frequency, RateHelper};
use crate::curves::{PiecewiseDiscountCurve, PiecewiseForwardCurve};
use crate::error::{CurveError, CurveResult};

/// Conventions of both legs of a vanilla swap.
#[derive(Debug, Clone, Copy)]
pub struct IrsConfig {
    /// Fixed leg day count.
    pub fixed_dc: DayCount,
    /// Fixed leg payment frequency.
    pub fixed_freq: Frequency,
    /// Float leg day count.
    pub float_dc: DayCount,
    /// Float leg payment frequency.
    pub float_freq: Frequency,
    /// Business day convention shared by both leg schedules.
    pub bdc: BusinessDayConvention,
    /// Calendar shared by both leg schedules.
    pub calendar: WeekendCalendar,
}

impl Default for IrsConfig {
    fn default() -> Self {
        Self {
            fixed_dc: DayCount::Act365Fixed,
            fixed_freq: Frequency::Annual,
            float_dc: DayCount::Act360,
            float_freq: Frequency::Quarterly,
            bdc: BusinessDayConvention::ModifiedFollowing,
            calendar: WeekendCalendar,
        }
    }
}

impl IrsConfig {
    /// Sets the fixed leg day count.
    #[must_use]
    pub fn with_fixed_dc(mut self, dc: DayCount) -> Self {
        self.fixed_dc = dc;
        self
    }

    /// Sets the fixed leg frequency.
    #[must_use]
    pub fn with_fixed_freq(mut self, freq: Frequency) -> Self {
        self.fixed_freq = freq;
        self
    }

    /// Sets the float leg day count.
    #[must_use]
    pub fn with_float_dc(mut self, dc: DayCount) -> Self {
        self.float_dc = dc;
        self
    }

    /// Sets the float leg frequency.
    #[must_use]
    pub fn with_float_freq(mut self, freq: Frequency) -> Self {
        self.float_freq = freq;
        self
    }
}

/// A vanilla interest-rate swap quote.
///
/// Discounting comes from a fixed discount curve while the float leg
/// projects forwards from the candidate forward curve, so the helper
/// pins the forward curve's node at the swap maturity.
#[derive(Debug, Clone)]
pub struct IrsHelper {
    start: Date,
    end: Date,
    par_rate: f64,
    config: IrsConfig,
}

impl IrsHelper {
    /// Creates a new IRS helper.
    #[must_use]
    pub fn new(start: Date, end: Date, par_rate: f64, config: IrsConfig) -> Self {
        Self {
            start,
            end,
            par_rate,
            config,
        }
    }

    /// Returns the swap start date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the swap end date.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the leg conventions.
    #[must_use]
    pub fn config(&self) -> IrsConfig {
        self.config
    }

    /// Returns a short description for diagnostics and log lines.
    #[must_use]
    pub fn description(&self) -> String {
        format!("IRS {} at {:.4}%", self.end, self.par_rate * 100.0)
    }

    /// Computes the par rate implied by a discount curve and a candidate
    /// forward curve.
    ///
    /// The fixed annuity discounts fixed-leg accruals; the float leg PV
    /// discounts each projected forward times its accrual. The par rate
    /// is their ratio.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleTooShort` when either leg has fewer than two
    /// dates, `NonPositiveAnnuity` for a non-positive fixed annuity, and
    /// propagates forward-rate accrual failures.
    pub fn implied_par_rate(
        &self,
        disc: &PiecewiseDiscountCurve,
        fwd: &PiecewiseForwardCurve,
    ) -> CurveResult<f64> {
        let fixed_tenor = tenor_for_frequency(self.config.fixed_freq)?;
        let float_tenor = tenor_for_frequency(self.config.float_freq)?;

        let fixed = leg_schedule(
            self.start,
            self.end,
            fixed_tenor,
            self.config.calendar,
            self.config.bdc,
        );
        let float = leg_schedule(
            self.start,
            self.end,
            float_tenor,
            self.config.calendar,
            self.config.bdc,
        );

        if fixed.len() < 2 || float.len() < 2 {
            return Err(CurveError::schedule_too_short(
                self.description(),
                fixed.len().min(float.len()),
            ));
        }

        let mut annuity = 0.0;
        for period in fixed.dates.windows(2) {
            let tau = self.config.fixed_dc.year_fraction(period[0], period[1]);
            annuity += disc.discount_factor(period[1]) * tau;
        }
        if annuity <= 0.0 {
            return Err(CurveError::NonPositiveAnnuity { value: annuity });
        }

        let mut float_pv = 0.0;
        for period in float.dates.windows(2) {
            let tau = self.config.float_dc.year_fraction(period[0], period[1]);
            let forward = fwd.forward_rate(period[0], period[1], self.config.float_dc)?;
            float_pv += disc.discount_factor(period[1]) * forward * tau;
        }

        Ok(float_pv / annuity)
    }
}

impl RateHelper for IrsHelper {
    fn maturity(&self) -> Date {
        self.end
    }

    fn market_quote(&self) -> f64 {
        self.par_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{DiscountCurveConfig, ForwardCurveConfig};
    use approx::assert_relative_eq;
    use strata_math::nodes::Nodes1D;

    fn d(iso: &str) -> Date {
        Date::parse_iso(iso).unwrap()
    }

    fn flat_df_curve(rate: f64) -> PiecewiseDiscountCurve {
        let mut curve =
            PiecewiseDiscountCurve::new(d("2026-01-01"), DiscountCurveConfig::default());
        let mut nodes = Nodes1D::new();
        for t in [0.0, 0.5, 1.0, 2.0, 5.0] {
            nodes.push_back(t, (-rate * t).exp()).unwrap();
        }
        curve.set_nodes(nodes).unwrap();
        curve
    }

    fn flat_pf_curve(rate: f64) -> PiecewiseForwardCurve {
        let mut curve =
            PiecewiseForwardCurve::new(d("2026-01-01"), ForwardCurveConfig::default());
        let mut nodes = Nodes1D::new();
        for t in [0.0, 0.5, 1.0, 2.0, 5.0] {
            nodes.push_back(t, (-rate * t).exp()).unwrap();
        }
        curve.set_nodes(nodes).unwrap();
        curve
    }

    #[test]
    fn test_maturity_and_quote() {
        let helper = IrsHelper::new(d("2026-01-01"), d("2028-01-01"), 0.033, IrsConfig::default());
        assert_eq!(helper.maturity(), d("2028-01-01"));
        assert_relative_eq!(helper.market_quote(), 0.033);
    }

    #[test]
    fn test_single_period_par_rate_is_forward() {
        // One fixed period against one float period: the annuity and the
        // discounting cancel, leaving the projected forward itself.
        let disc = flat_df_curve(0.03);
        let fwd = flat_pf_curve(0.029);

        let config = IrsConfig::default()
            .with_fixed_freq(Frequency::Annual)
            .with_float_freq(Frequency::Annual)
            .with_float_dc(DayCount::Act365Fixed);
        let helper = IrsHelper::new(d("2026-01-01"), d("2027-01-01"), 0.029, config);

        let implied = helper.implied_par_rate(&disc, &fwd).unwrap();
        let forward = fwd
            .forward_rate(d("2026-01-01"), d("2027-01-01"), DayCount::Act365Fixed)
            .unwrap();
        assert_relative_eq!(implied, forward, epsilon = 1e-12);
    }

    #[test]
    fn test_multi_period_par_rate_within_forward_band() {
        let disc = flat_df_curve(0.03);
        let fwd = flat_pf_curve(0.03);

        let config = IrsConfig::default()
            .with_fixed_freq(Frequency::Annual)
            .with_float_freq(Frequency::Quarterly);
        let helper = IrsHelper::new(d("2026-01-01"), d("2028-01-01"), 0.03, config);

        // A par rate is an annuity-weighted average of the forwards, so a
        // flat pseudo-DF curve keeps it near the flat rate.
        let implied = helper.implied_par_rate(&disc, &fwd).unwrap();
        assert_relative_eq!(implied, 0.03, epsilon = 3e-3);
    }

    #[test]
    fn test_unsupported_float_frequency() {
        let disc = flat_df_curve(0.03);
        let fwd = flat_pf_curve(0.03);
        let config = IrsConfig::default().with_float_freq(Frequency::Weekly);
        let helper = IrsHelper::new(d("2026-01-01"), d("2027-01-01"), 0.03, config);

        assert!(matches!(
            helper.implied_par_rate(&disc, &fwd),
            Err(CurveError::UnsupportedFrequency { .. })
        ));
    }
}
