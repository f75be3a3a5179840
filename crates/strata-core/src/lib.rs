//! # Strata Core
//!
//! Core types and conventions for the Strata curve engine.
//!
//! This crate provides the foundational building blocks used throughout
//! Strata:
//!
//! - **Types**: [`types::Date`], [`types::Tenor`], [`types::Frequency`]
//! - **Day Count Conventions**: signed year fractions for ACT/360,
//!   ACT/365F, and 30/360 US
//! - **Calendars**: business day detection, adjustment conventions, and
//!   calendar-aware tenor advancement
//! - **Schedules**: backward and forward swap-leg date generation
//!
//! ## Example
//!
//! ```rust
//! use strata_core::prelude::*;
//!
//! let start = Date::parse_iso("2026-01-01").unwrap();
//! let end = Date::parse_iso("2027-01-01").unwrap();
//! let tenor: Tenor = "6M".parse().unwrap();
//!
//! let schedule = make_schedule(&ScheduleConfig::new(start, end, tenor));
//! assert_eq!(schedule.len(), 3);
//!
//! let yf = DayCount::Act365Fixed.year_fraction(start, end);
//! assert!((yf - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, WeekendCalendar};
    pub use crate::daycounts::DayCount;
    pub use crate::error::{StrataError, StrataResult};
    pub use crate::schedule::{make_schedule, DateGenerationRule, Schedule, ScheduleConfig};
    pub use crate::types::{Date, Frequency, Tenor, TenorUnit};
}

// Re-export commonly used types at the crate root.
pub use calendars::{BusinessDayConvention, Calendar, WeekendCalendar};
pub use daycounts::DayCount;
pub use error::{StrataError, StrataResult};
pub use types::{Date, Frequency, Tenor, TenorUnit};
