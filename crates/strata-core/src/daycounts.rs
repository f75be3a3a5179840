//! Day count conventions for year fraction calculations.
//!
//! A day count convention maps a pair of dates to a signed year fraction.
//! Swapping the dates negates the result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StrataError;
use crate::types::Date;

/// Supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCount {
    /// Actual/360. The money market convention.
    Act360,
    /// Actual/365 Fixed.
    #[default]
    Act365Fixed,
    /// 30/360 US (Bond Basis), simple rule: a start day of 31 counts as 30,
    /// and an end day of 31 counts as 30 when the start day did.
    Thirty360US,
}

impl DayCount {
    /// Returns the conventional name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "ACT/360",
            DayCount::Act365Fixed => "ACT/365F",
            DayCount::Thirty360US => "30/360 US",
        }
    }

    /// Calculates the signed year fraction between two dates.
    ///
    /// `year_fraction(a, b) == -year_fraction(b, a)` for every convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if end == start {
            return 0.0;
        }
        if end < start {
            return -self.year_fraction(end, start);
        }

        match self {
            DayCount::Act360 => start.days_between(&end) as f64 / 360.0,
            DayCount::Act365Fixed => start.days_between(&end) as f64 / 365.0,
            DayCount::Thirty360US => {
                let y1 = i64::from(start.year());
                let y2 = i64::from(end.year());
                let m1 = i64::from(start.month());
                let m2 = i64::from(end.month());
                let mut d1 = i64::from(start.day());
                let mut d2 = i64::from(end.day());

                if d1 == 31 {
                    d1 = 30;
                }
                if d2 == 31 && d1 == 30 {
                    d2 = 30;
                }

                let days360 = 360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1);
                days360 as f64 / 360.0
            }
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCount {
    type Err = StrataError;

    /// Parses a day count name such as `ACT/360` or `30/360 US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().trim() {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCount::Act360),
            "ACT/365" | "ACT/365F" | "ACTUAL/365" | "ACT365" => Ok(DayCount::Act365Fixed),
            "30/360" | "30/360 US" | "THIRTY360US" | "BOND" => Ok(DayCount::Thirty360US),
            _ => Err(StrataError::parse_error(format!(
                "unknown day count convention: '{s}'"
            ))),
        }
    }
}
