//! Forward rate agreement helper.

use strata_core::daycounts::DayCount;
use strata_core::types::Date;

use super::RateHelper;
use crate::curves::PiecewiseForwardCurve;
use crate::error::{CurveError, CurveResult};

/// Conventions of an FRA accrual period.
#[derive(Debug, Clone, Copy)]
pub struct FraConfig {
    /// Accrual day count.
    pub dc: DayCount,
}

impl Default for FraConfig {
    fn default() -> Self {
        Self {
            dc: DayCount::Act360,
        }
    }
}

/// A forward rate agreement quote.
///
/// The implied quote is simply the forward curve's simple rate over the
/// accrual period, so an FRA pins the pseudo-discount node at its end
/// date directly.
#[derive(Debug, Clone)]
pub struct FraHelper {
    start: Date,
    end: Date,
    fra_rate: f64,
    config: FraConfig,
}

impl FraHelper {
    /// Creates a new FRA helper.
    #[must_use]
    pub fn new(start: Date, end: Date, fra_rate: f64, config: FraConfig) -> Self {
        Self {
            start,
            end,
            fra_rate,
            config,
        }
    }

    /// Returns the accrual start date.
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the accrual end date.
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the accrual conventions.
    #[must_use]
    pub fn config(&self) -> FraConfig {
        self.config
    }

    /// Returns a short description for diagnostics and log lines.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "FRA {} to {} at {:.4}%",
            self.start,
            self.end,
            self.fra_rate * 100.0
        )
    }

    /// Computes the FRA rate implied by a candidate forward curve.
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveAccrual` when the accrual fraction is not
    /// strictly positive.
    pub fn implied_fra_rate(&self, fwd: &PiecewiseForwardCurve) -> CurveResult<f64> {
        let tau = self.config.dc.year_fraction(self.start, self.end);
        if tau <= 0.0 {
            return Err(CurveError::NonPositiveAccrual { tau });
        }
        fwd.forward_rate(self.start, self.end, self.config.dc)
    }
}

impl RateHelper for FraHelper {
    fn maturity(&self) -> Date {
        self.end
    }

    fn market_quote(&self) -> f64 {
        self.fra_rate
    }
}
