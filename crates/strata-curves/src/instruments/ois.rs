//! Overnight-indexed swap helper.
//!
//! OIS quotes pin down the discounting curve.

use strata_core::calendars::{BusinessDayConvention, WeekendCalendar};
use strata_core::daycounts::DayCount;
use strata_core::types::{Date, Frequency};

use super::{leg_schedule, tenor_for_frequency, RateHelper};
use crate::curves::PiecewiseDiscountCurve;
use crate::error::{CurveError, CurveResult};

/// Conventions of an OIS fixed leg.
#[derive(Debug, Clone, Copy)]
pub struct OisConfig {
    /// Fixed leg day count.
    pub fixed_dc: DayCount,
    /// Fixed leg payment frequency.
    pub fixed_freq: Frequency,
    /// Business day convention for the leg schedule.
    pub bdc: BusinessDayConvention,
    /// Calendar for the leg schedule.
    pub calendar: WeekendCalendar,
}

impl Default for OisConfig {
    fn default() -> Self {
        Self {
            fixed_dc: DayCount::Act360,
            fixed_freq: Frequency::Annual,
            bdc: BusinessDayConvention::ModifiedFollowing,
            calendar: WeekendCalendar,
        }
    }
}

impl OisConfig {
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
}

/// An overnight-indexed swap quote.
///
/// For a par OIS with no spread the float leg telescopes to
/// `DF(start) - DF(end)`, so the implied par rate is that difference
/// over the fixed-leg annuity.
#[derive(Debug, Clone)]
pub struct OisSwapHelper {
    start: Date,
    end: Date,
    par_rate: f64,
    config: OisConfig,
}

impl OisSwapHelper {
    /// Creates a new OIS helper.
    #[must_use]
    pub fn new(start: Date, end: Date, par_rate: f64, config: OisConfig) -> Self {
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
    pub fn config(&self) -> OisConfig {
        self.config
    }

    /// Returns a short description for diagnostics and log lines.
    #[must_use]
    pub fn description(&self) -> String {
        format!("OIS {} at {:.4}%", self.end, self.par_rate * 100.0)
    }

    /// Computes the par rate implied by a candidate discount curve.
    ///
    /// The fixed leg is rolled backward from the end date at the
    /// configured frequency; its annuity discounts each accrual against
    /// the trial curve.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleTooShort` if the leg has fewer than two dates,
    /// `NonPositiveAnnuity` if the annuity fails to be positive, and an
    /// `UnsupportedFrequency` error for frequencies without a tenor.
    pub fn implied_par_rate(&self, disc: &PiecewiseDiscountCurve) -> CurveResult<f64> {
        let tenor = tenor_for_frequency(self.config.fixed_freq)?;
        let schedule = leg_schedule(
            self.start,
            self.end,
            tenor,
            self.config.calendar,
            self.config.bdc,
        );

        if schedule.len() < 2 {
            return Err(CurveError::schedule_too_short(
                self.description(),
                schedule.len(),
            ));
        }

        let mut annuity = 0.0;
        for period in schedule.dates.windows(2) {
            let tau = self.config.fixed_dc.year_fraction(period[0], period[1]);
            annuity += disc.discount_factor(period[1]) * tau;
        }

        if annuity <= 0.0 {
            return Err(CurveError::NonPositiveAnnuity { value: annuity });
        }

        let float_pv = disc.discount_factor(self.start) - disc.discount_factor(self.end);
        Ok(float_pv / annuity)
    }
}

impl RateHelper for OisSwapHelper {
    fn maturity(&self) -> Date {
        self.end
    }

    fn market_quote(&self) -> f64 {
        self.par_rate
    }
}
