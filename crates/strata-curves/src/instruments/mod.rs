//! Rate helpers for curve bootstrapping.
//!
//! A helper carries an instrument's market quote together with enough
//! conventions to compute the same quote implied by a trial curve. The
//! bootstrapper drives the difference between the two to zero, one
//! helper per curve node.
//!
//! - [`OisSwapHelper`] prices against a discount curve.
//! - [`FraHelper`] prices against a forward curve.
//! - [`IrsHelper`] prices against a discount curve and a forward curve.
//!
//! Helpers are plain value types: they hold no curve references and
//! never mutate during a bootstrap.

mod fra;
mod ois;
mod swap;

pub use fra::{FraConfig, FraHelper};
pub use ois::{OisConfig, OisSwapHelper};
pub use swap::{IrsConfig, IrsHelper};

use strata_core::calendars::{BusinessDayConvention, WeekendCalendar};
use strata_core::schedule::{make_schedule, Schedule, ScheduleConfig};
use strata_core::types::{Date, Frequency, Tenor, TenorUnit};

use crate::curves::{PiecewiseDiscountCurve, PiecewiseForwardCurve};
use crate::error::{CurveError, CurveResult};

/// Common surface of all rate helpers.
pub trait RateHelper {
    /// Returns the maturity date, which is the pillar the helper solves.
    fn maturity(&self) -> Date;

    /// Returns the market quote the helper reprices to.
    fn market_quote(&self) -> f64;
}

/// A helper usable in a forward-curve bootstrap.
///
/// The mixed helper set is a tagged sum so dispatch stays explicit; each
/// variant reads only the curves it actually depends on.
#[derive(Debug, Clone)]
pub enum ForwardHelper {
    /// Forward rate agreement, priced off the forward curve alone.
    Fra(FraHelper),
    /// Vanilla interest-rate swap, priced off both curves.
    Irs(IrsHelper),
}

impl ForwardHelper {
    /// Computes the quote implied by the given curve pair.
    ///
    /// # Errors
    ///
    /// Propagates schedule, accrual, and annuity failures from the
    /// underlying helper.
    pub fn implied_quote(
        &self,
        discount: &PiecewiseDiscountCurve,
        forward: &PiecewiseForwardCurve,
    ) -> CurveResult<f64> {
        match self {
            ForwardHelper::Fra(fra) => fra.implied_fra_rate(forward),
            ForwardHelper::Irs(irs) => irs.implied_par_rate(discount, forward),
        }
    }

    /// Returns a short description for diagnostics and log lines.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            ForwardHelper::Fra(fra) => fra.description(),
            ForwardHelper::Irs(irs) => irs.description(),
        }
    }
}

impl RateHelper for ForwardHelper {
    fn maturity(&self) -> Date {
        match self {
            ForwardHelper::Fra(fra) => fra.maturity(),
            ForwardHelper::Irs(irs) => irs.maturity(),
        }
    }

    fn market_quote(&self) -> f64 {
        match self {
            ForwardHelper::Fra(fra) => fra.market_quote(),
            ForwardHelper::Irs(irs) => irs.market_quote(),
        }
    }
}

impl From<FraHelper> for ForwardHelper {
    fn from(helper: FraHelper) -> Self {
        ForwardHelper::Fra(helper)
    }
}

impl From<IrsHelper> for ForwardHelper {
    fn from(helper: IrsHelper) -> Self {
        ForwardHelper::Irs(helper)
    }
}

/// Maps a coupon frequency to the tenor of one period.
///
/// Annual periods are expressed in years, everything else in months as
/// given by [`Frequency::months_per_period`].
pub(crate) fn tenor_for_frequency(frequency: Frequency) -> CurveResult<Tenor> {
    if frequency == Frequency::Annual {
        return Ok(Tenor::new(1, TenorUnit::Years));
    }
    match frequency.months_per_period() {
        0 => Err(CurveError::UnsupportedFrequency { frequency }),
        months => Ok(Tenor::new(months as i32, TenorUnit::Months)),
    }
}

/// Generates a backward-rolled leg schedule between two dates.
pub(crate) fn leg_schedule(
    start: Date,
    end: Date,
    tenor: Tenor,
    calendar: WeekendCalendar,
    bdc: BusinessDayConvention,
) -> Schedule {
    let mut cfg = ScheduleConfig::new(start, end, tenor).with_bdc(bdc);
    cfg.calendar = calendar;
    make_schedule(&cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenor_for_frequency() {
        assert_eq!(
            tenor_for_frequency(Frequency::Annual).unwrap(),
            Tenor::new(1, TenorUnit::Years)
        );
        assert_eq!(
            tenor_for_frequency(Frequency::SemiAnnual).unwrap(),
            Tenor::new(6, TenorUnit::Months)
        );
        assert_eq!(
            tenor_for_frequency(Frequency::Quarterly).unwrap(),
            Tenor::new(3, TenorUnit::Months)
        );
        assert_eq!(
            tenor_for_frequency(Frequency::Monthly).unwrap(),
            Tenor::new(1, TenorUnit::Months)
        );
    }

    #[test]
    fn test_tenor_for_frequency_rejects_unsupported() {
        assert!(matches!(
            tenor_for_frequency(Frequency::Weekly),
            Err(CurveError::UnsupportedFrequency { .. })
        ));
        assert!(matches!(
            tenor_for_frequency(Frequency::Daily),
            Err(CurveError::UnsupportedFrequency { .. })
        ));
    }

    #[test]
    fn test_leg_schedule_backward() {
        let start = Date::parse_iso("2026-01-01").unwrap();
        let end = Date::parse_iso("2027-01-01").unwrap();
        let schedule = leg_schedule(
            start,
            end,
            Tenor::new(6, TenorUnit::Months),
            WeekendCalendar,
            BusinessDayConvention::ModifiedFollowing,
        );

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.first(), Some(start));
        assert_eq!(schedule.last(), Some(end));
    }
}
