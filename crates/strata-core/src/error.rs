//! Error types for the Strata core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type StrataResult<T> = Result<T, StrataError>;

/// The main error type for core date, calendar, and schedule operations.
#[derive(Error, Debug, Clone)]
pub enum StrataError {
    /// An argument violated a precondition.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated precondition.
        message: String,
    },

    /// A string could not be parsed into the requested type.
    #[error("Parse error: {message}")]
    ParseError {
        /// Description of the malformed input.
        message: String,
    },

    /// A date was structurally parseable but out of range.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the offending components.
        message: String,
    },

    /// Calendar or business-day error. Reserved for holiday calendars.
    #[error("Calendar error: {message}")]
    CalendarError {
        /// Description of the error.
        message: String,
    },

    /// A generated schedule was unusable for its purpose.
    #[error("Schedule error: {message}")]
    ScheduleError {
        /// Description of the error.
        message: String,
    },
}

impl StrataError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(message: impl Into<String>) -> Self {
        Self::CalendarError {
            message: message.into(),
        }
    }

    /// Creates a schedule error.
    #[must_use]
    pub fn schedule_error(message: impl Into<String>) -> Self {
        Self::ScheduleError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StrataError::invalid_date("2025-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = StrataError::parse_error("non-numeric tenor amount");
        assert!(err.to_string().contains("Parse error"));
    }
}
