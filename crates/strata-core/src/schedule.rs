//! Schedule generation for swap legs.
//!
//! A schedule is an ordered, adjusted, strictly increasing sequence of
//! dates from a start date to an end date, stepped by a tenor.

use serde::{Deserialize, Serialize};

use crate::calendars::{BusinessDayConvention, Calendar, WeekendCalendar};
use crate::types::{Date, Tenor};

/// Guard against runaway generation loops.
const MAX_STEPS: i32 = 1024;

/// Direction in which schedule dates are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DateGenerationRule {
    /// Step forward from the start date.
    Forward,
    /// Step backward from the end date.
    #[default]
    Backward,
}

/// Configuration of a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// First date of the schedule (unadjusted).
    pub start: Date,
    /// Last date of the schedule (unadjusted).
    pub end: Date,
    /// Step between adjacent dates, e.g. `6M`.
    pub tenor: Tenor,
    /// Calendar used for business day adjustment.
    pub calendar: WeekendCalendar,
    /// Business day convention applied to every generated date.
    pub bdc: BusinessDayConvention,
    /// Generation direction.
    pub rule: DateGenerationRule,
    /// End-of-month flag. Declared for forward compatibility; generation
    /// does not consult it yet.
    pub end_of_month: bool,
}

impl ScheduleConfig {
    /// Creates a configuration with backward generation, modified
    /// following adjustment, and the weekend calendar.
    #[must_use]
    pub fn new(start: Date, end: Date, tenor: Tenor) -> Self {
        Self {
            start,
            end,
            tenor,
            calendar: WeekendCalendar,
            bdc: BusinessDayConvention::ModifiedFollowing,
            rule: DateGenerationRule::Backward,
            end_of_month: false,
        }
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn with_bdc(mut self, bdc: BusinessDayConvention) -> Self {
        self.bdc = bdc;
        self
    }

    /// Sets the generation rule.
    #[must_use]
    pub fn with_rule(mut self, rule: DateGenerationRule) -> Self {
        self.rule = rule;
        self
    }
}

/// An adjusted, strictly increasing sequence of schedule dates.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    /// The adjusted dates, including both endpoints.
    pub dates: Vec<Date>,
}

impl Schedule {
    /// Returns the number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the schedule has no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the first date, if any.
    #[must_use]
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Returns the last date, if any.
    #[must_use]
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }
}

/// Generates a schedule from the given configuration.
///
/// Backward generation steps away from the end date: each candidate is
/// `advance(end, -i * tenor)`, always anchored on the end date itself, and
/// the start date is prepended when the stepping does not hit it exactly.
/// Forward generation mirrors this from the start date. A zero tenor
/// degenerates to the two adjusted endpoints. A start after the end
/// produces an empty schedule.
#[must_use]
pub fn make_schedule(cfg: &ScheduleConfig) -> Schedule {
    if cfg.start > cfg.end {
        return Schedule::default();
    }

    let cal = cfg.calendar;

    if cfg.tenor.is_zero() {
        let mut dates = vec![cal.adjust(cfg.start, cfg.bdc)];
        if cfg.end != cfg.start {
            dates.push(cal.adjust(cfg.end, cfg.bdc));
        }
        dates.dedup();
        return Schedule { dates };
    }

    let mut dates = match cfg.rule {
        DateGenerationRule::Backward => {
            let mut tmp = vec![cal.adjust(cfg.end, cfg.bdc)];
            for i in 1..MAX_STEPS {
                let step = Tenor::new(-cfg.tenor.n * i, cfg.tenor.unit);
                let next = cal.advance(cfg.end, step, cfg.bdc);
                if next < cfg.start {
                    break;
                }
                tmp.push(next);
                if next == cfg.start {
                    break;
                }
            }
            if tmp.last().copied() != Some(cfg.start) {
                tmp.push(cal.adjust(cfg.start, cfg.bdc));
            }
            tmp.reverse();
            tmp
        }
        DateGenerationRule::Forward => {
            let mut tmp = vec![cal.adjust(cfg.start, cfg.bdc)];
            for i in 1..MAX_STEPS {
                let step = Tenor::new(cfg.tenor.n * i, cfg.tenor.unit);
                let next = cal.advance(cfg.start, step, cfg.bdc);
                if next > cfg.end {
                    break;
                }
                tmp.push(next);
                if next == cfg.end {
                    break;
                }
            }
            if tmp.last().copied() != Some(cfg.end) {
                tmp.push(cal.adjust(cfg.end, cfg.bdc));
            }
            tmp
        }
    };

    dates.dedup();
    Schedule { dates }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TenorUnit;

    fn d(iso: &str) -> Date {
        Date::parse_iso(iso).unwrap()
    }

    #[test]
    fn test_backward_semiannual() {
        let cfg = ScheduleConfig::new(
            d("2026-01-01"),
            d("2027-01-01"),
            Tenor::new(6, TenorUnit::Months),
        );
        let schedule = make_schedule(&cfg);

        assert_eq!(
            schedule.dates,
            vec![d("2026-01-01"), d("2026-07-01"), d("2027-01-01")]
        );
    }

    #[test]
    fn test_backward_with_stub_at_front() {
        // 1Y span stepped by 5M leaves a short period at the start.
        let cfg = ScheduleConfig::new(
            d("2026-01-01"),
            d("2027-01-01"),
            Tenor::new(5, TenorUnit::Months),
        );
        let schedule = make_schedule(&cfg);

        assert_eq!(schedule.first(), Some(d("2026-01-01")));
        assert_eq!(schedule.last(), Some(d("2027-01-01")));
        assert!(schedule.len() > 2);
        assert!(schedule.dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_forward_quarterly() {
        let cfg = ScheduleConfig::new(
            d("2026-01-01"),
            d("2027-01-01"),
            Tenor::new(3, TenorUnit::Months),
        )
        .with_rule(DateGenerationRule::Forward);
        let schedule = make_schedule(&cfg);

        assert_eq!(
            schedule.dates,
            vec![
                d("2026-01-01"),
                d("2026-04-01"),
                d("2026-07-01"),
                d("2026-10-01"),
                d("2027-01-01")
            ]
        );
    }

    #[test]
    fn test_endpoints_adjusted() {
        // 2026-01-31 and 2026-05-31 are a Saturday and a Sunday.
        let cfg = ScheduleConfig::new(
            d("2026-01-31"),
            d("2026-05-31"),
            Tenor::new(2, TenorUnit::Months),
        );
        let schedule = make_schedule(&cfg);

        assert_eq!(schedule.first(), Some(d("2026-01-30")));
        assert_eq!(schedule.last(), Some(d("2026-05-29")));
        assert!(schedule.dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_degenerate_zero_tenor() {
        let cfg = ScheduleConfig::new(
            d("2026-01-01"),
            d("2026-07-01"),
            Tenor::new(0, TenorUnit::Months),
        );
        let schedule = make_schedule(&cfg);
        assert_eq!(schedule.dates, vec![d("2026-01-01"), d("2026-07-01")]);

        let cfg = ScheduleConfig::new(
            d("2026-01-01"),
            d("2026-01-01"),
            Tenor::new(0, TenorUnit::Months),
        );
        assert_eq!(make_schedule(&cfg).dates, vec![d("2026-01-01")]);
    }

    #[test]
    fn test_start_after_end_is_empty() {
        let cfg = ScheduleConfig::new(
            d("2027-01-01"),
            d("2026-01-01"),
            Tenor::new(6, TenorUnit::Months),
        );
        assert!(make_schedule(&cfg).is_empty());
    }
}
