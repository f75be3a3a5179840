//! Business day calendars and date rolling.
//!
//! This module provides the calendar abstraction used by schedule
//! generation: business day detection, convention-based adjustment, and
//! calendar-aware tenor advancement.

mod conventions;

pub use conventions::BusinessDayConvention;

use serde::{Deserialize, Serialize};

use crate::types::{Date, Tenor, TenorUnit};

/// Trait for business day calendars.
///
/// Calendars decide which days are business days; adjustment and
/// advancement are provided on top of that single primitive.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a tenor, then adjusts the raw result.
    ///
    /// Day and week tenors add calendar days. Month and year tenors use
    /// whole-month arithmetic with the end-of-month rule: a source date on
    /// the last calendar day of its month lands on the last calendar day
    /// of the target month, and an otherwise invalid day number resolves
    /// to the last valid day of the target month, in both cases before
    /// the business day adjustment.
    fn advance(&self, date: Date, tenor: Tenor, convention: BusinessDayConvention) -> Date {
        let raw = match tenor.unit {
            TenorUnit::Days => date.add_days(i64::from(tenor.n)),
            TenorUnit::Weeks => date.add_days(7 * i64::from(tenor.n)),
            TenorUnit::Months => shift_months(date, tenor.n),
            TenorUnit::Years => shift_months(date, 12 * tenor.n),
        };
        self.adjust(raw, convention)
    }
}

/// Whole-month shift with the end-of-month rule.
fn shift_months(date: Date, months: i32) -> Date {
    if date.is_end_of_month() {
        date.add_months(months).end_of_month()
    } else {
        date.add_months(months)
    }
}

/// A weekend-only calendar: Saturdays and Sundays are non-business days.
///
/// Stateless value type, so configurations hold it by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}
