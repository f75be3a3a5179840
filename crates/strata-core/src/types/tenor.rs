//! Tenor type for date and schedule arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{StrataError, StrataResult};

/// Unit of a tenor period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Whole calendar months.
    Months,
    /// Whole calendar years.
    Years,
}

/// A signed period such as `3M` or `10Y`.
///
/// Negative amounts are legal and mean "backward", which is how backward
/// schedule generation steps away from the final date.
///
/// # Example
///
/// ```rust
/// use strata_core::types::{Tenor, TenorUnit};
///
/// let tenor: Tenor = "6M".parse().unwrap();
/// assert_eq!(tenor, Tenor::new(6, TenorUnit::Months));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenor {
    /// Signed period amount.
    pub n: i32,
    /// Period unit.
    pub unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor from an amount and a unit.
    #[must_use]
    pub fn new(n: i32, unit: TenorUnit) -> Self {
        Self { n, unit }
    }

    /// Parses a tenor string like `1D`, `2w`, `3M`, or `5Y`.
    ///
    /// The amount is the numeric prefix and the unit is the final
    /// character. `d`, `w`, and `y` are accepted in either case; months
    /// require an upper-case `M` because a lower-case `m` is reserved for
    /// minutes in time-of-day extensions.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::ParseError` for strings shorter than two
    /// characters, missing or leading unit characters, non-numeric
    /// amounts, or unknown units.
    pub fn parse(s: &str) -> StrataResult<Self> {
        if s.len() < 2 {
            return Err(StrataError::parse_error("tenor string too short"));
        }

        let unit_pos = s
            .find(|c: char| "dDwWmMyY".contains(c))
            .ok_or_else(|| StrataError::parse_error("tenor string has no unit (D/W/M/Y)"))?;
        if unit_pos == 0 {
            return Err(StrataError::parse_error(
                "tenor string has no numeric amount before the unit",
            ));
        }

        let n: i32 = s[..unit_pos]
            .parse()
            .map_err(|_| StrataError::parse_error("non-numeric tenor amount"))?;

        let unit = match s.chars().last() {
            Some('D' | 'd') => TenorUnit::Days,
            Some('W' | 'w') => TenorUnit::Weeks,
            Some('M') => TenorUnit::Months,
            Some('Y' | 'y') => TenorUnit::Years,
            _ => {
                return Err(StrataError::parse_error(
                    "unknown tenor unit (expected D, W, M, Y)",
                ))
            }
        };

        Ok(Self { n, unit })
    }

    /// Checks whether the tenor amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.n == 0
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        };
        write!(f, "{}{unit}", self.n)
    }
}

impl FromStr for Tenor {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(Tenor::parse("1D").unwrap(), Tenor::new(1, TenorUnit::Days));
        assert_eq!(Tenor::parse("2W").unwrap(), Tenor::new(2, TenorUnit::Weeks));
        assert_eq!(
            Tenor::parse("3M").unwrap(),
            Tenor::new(3, TenorUnit::Months)
        );
        assert_eq!(Tenor::parse("5Y").unwrap(), Tenor::new(5, TenorUnit::Years));
    }

    #[test]
    fn test_parse_lower_case_units() {
        assert_eq!(Tenor::parse("1d").unwrap().unit, TenorUnit::Days);
        assert_eq!(Tenor::parse("2w").unwrap().unit, TenorUnit::Weeks);
        assert_eq!(Tenor::parse("10y").unwrap().unit, TenorUnit::Years);
    }

    #[test]
    fn test_parse_rejects_lower_case_months() {
        // Reserved against minutes in time-of-day extensions.
        assert!(matches!(
            Tenor::parse("3m").unwrap_err(),
            StrataError::ParseError { .. }
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(
            Tenor::parse("-6M").unwrap(),
            Tenor::new(-6, TenorUnit::Months)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Tenor::parse("").is_err());
        assert!(Tenor::parse("M").is_err());
        assert!(Tenor::parse("M3").is_err());
        assert!(Tenor::parse("12").is_err());
        assert!(Tenor::parse("xY").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["1D", "2W", "6M", "10Y", "-3M"] {
            let tenor = Tenor::parse(s).unwrap();
            assert_eq!(tenor.to_string(), s);
            assert_eq!(Tenor::parse(&tenor.to_string()).unwrap(), tenor);
        }
    }

    #[test]
    fn test_is_zero() {
        assert!(Tenor::new(0, TenorUnit::Months).is_zero());
        assert!(!Tenor::new(1, TenorUnit::Months).is_zero());
    }
}
