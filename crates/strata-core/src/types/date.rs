//! Date type for curve and schedule calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{StrataError, StrataResult};

/// A civil calendar day in the proleptic Gregorian calendar.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// operations the curve engine needs: strict ISO parsing, day and month
/// arithmetic, and end-of-month queries.
///
/// # Example
///
/// ```rust
/// use strata_core::types::Date;
///
/// let date = Date::parse_iso("2026-01-01").unwrap();
/// assert_eq!(date.add_months(6), Date::from_ymd(2026, 7, 1).unwrap());
/// assert_eq!(date.to_iso(), "2026-01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the components do not form a
    /// real calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> StrataResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| StrataError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::ParseError` if any segment fails integer
    /// parsing, and `StrataError::InvalidDate` if the segment count is not
    /// three or a component is out of range.
    pub fn parse_iso(iso: &str) -> StrataResult<Self> {
        let mut segments = Vec::with_capacity(3);
        for segment in iso.split('-') {
            let n: i32 = segment
                .parse()
                .map_err(|_| StrataError::parse_error("non-numeric date segment"))?;
            segments.push(n);
        }

        if segments.len() != 3
            || segments[0] < 0
            || !(1..=12).contains(&segments[1])
            || !(1..=31).contains(&segments[2])
        {
            return Err(StrataError::invalid_date(format!(
                "'{iso}' does not follow format 'YYYY-MM-DD'"
            )));
        }

        Self::from_ymd(segments[0], segments[1] as u32, segments[2] as u32)
    }

    /// Formats the date as `YYYY-MM-DD`.
    #[must_use]
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of calendar days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of whole months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month), it
    /// lands on the last valid day of the target month.
    #[must_use]
    pub fn add_months(&self, months: i32) -> Self {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Date(
            NaiveDate::from_ymd_opt(new_year, new_month, new_day)
                .expect("clamped day is valid for the target month"),
        )
    }

    /// Adds a number of whole years to the date, clamping Feb 29 as needed.
    #[must_use]
    pub fn add_years(&self, years: i32) -> Self {
        self.add_months(12 * years)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the last calendar day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
                .expect("end of month should always be valid"),
        )
    }

    /// Checks if the date is the last calendar day of its month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds calendar days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts calendar days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("invalid month: {month}"),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
