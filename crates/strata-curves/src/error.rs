//! Error types for curve construction and bootstrapping.

use strata_core::types::{Date, Frequency};
use strata_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction and bootstrapping.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// No helpers were provided to a bootstrap.
    #[error("No helpers provided for bootstrap")]
    EmptyHelpers,

    /// A helper matures on or before the curve's as-of date.
    #[error("Non-positive pillar time {t:.6} for maturity {maturity}")]
    InvalidPillarTime {
        /// The helper's maturity date.
        maturity: Date,
        /// The computed pillar time in years.
        t: f64,
    },

    /// Two helpers produced the same pillar time.
    #[error("Pillar time {current:.6} does not exceed previous pillar {prev:.6}")]
    NonMonotonicPillars {
        /// Previous pillar time.
        prev: f64,
        /// Offending pillar time.
        current: f64,
    },

    /// A fixed-leg annuity came out non-positive.
    #[error("Non-positive annuity {value:.6e}")]
    NonPositiveAnnuity {
        /// The computed annuity.
        value: f64,
    },

    /// An accrual year fraction came out non-positive.
    #[error("Non-positive accrual fraction {tau:.6}")]
    NonPositiveAccrual {
        /// The computed accrual fraction.
        tau: f64,
    },

    /// A generated leg schedule has too few dates to price.
    #[error("Schedule for {instrument} has {got} dates, need at least 2")]
    ScheduleTooShort {
        /// Description of the instrument whose leg failed.
        instrument: String,
        /// Number of dates generated.
        got: usize,
    },

    /// A leg frequency has no tenor mapping.
    #[error("Unsupported frequency {frequency} for swap leg generation")]
    UnsupportedFrequency {
        /// The offending frequency.
        frequency: Frequency,
    },

    /// Invalid curve data.
    #[error("Invalid curve data: {reason}")]
    InvalidData {
        /// Description of what is invalid.
        reason: String,
    },

    /// An underlying numerical operation failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates an invalid data error.
    #[must_use]
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData {
            reason: reason.into(),
        }
    }

    /// Creates a schedule too short error.
    #[must_use]
    pub fn schedule_too_short(instrument: impl Into<String>, got: usize) -> Self {
        Self::ScheduleTooShort {
            instrument: instrument.into(),
            got,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::schedule_too_short("OIS 2027-01-01", 1);
        assert!(err.to_string().contains("need at least 2"));
    }

    #[test]
    fn test_math_error_wraps() {
        let err: CurveError = MathError::insufficient_data(2, 1).into();
        assert!(err.to_string().contains("at least 2"));
    }
}
