//! Error types for the factory calendar.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while building or querying a
//! calendar.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The main error type for the factory calendar.
///
/// Configuration problems (malformed times, dates or periods) are reported
/// while the calendar is being built. The only query-time failure is a scan
/// that runs past its lookahead bound.
///
/// # Example
///
/// ```
/// use factory_calendar::error::CalendarError;
///
/// let error = CalendarError::ConfigNotFound {
///     path: "/missing/calendar.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendar.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalendarError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path (or source name) of the configuration that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time-of-day string was not of the form `HH:MM`.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// A date string was not of the form `YYYY-MM-DD`.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// A daytime period was malformed or ended before it started.
    #[error("Invalid period '{value}': {message}")]
    InvalidPeriod {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        message: String,
    },

    /// A scan needed more days than it was allowed.
    ///
    /// Raised when no working day is found within the lookahead bound, and
    /// when a requested range spans more days than the bound.
    #[error("Scan from {start} exceeds the limit of {max_days} days")]
    LookaheadExceeded {
        /// The instant the scan started from.
        start: DateTime<Utc>,
        /// The day limit that applied.
        max_days: u32,
    },
}

/// A type alias for Results that return CalendarError.
pub type CalendarResult<T> = Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = CalendarError::ConfigNotFound {
            path: "/missing/calendar.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calendar.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = CalendarError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_time_displays_value_and_message() {
        let error = CalendarError::InvalidTime {
            value: "25:00".to_string(),
            message: "hour out of range".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid time '25:00': hour out of range");
    }

    #[test]
    fn test_invalid_date_displays_value_and_message() {
        let error = CalendarError::InvalidDate {
            value: "2018-02-30".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2018-02-30': input is out of range"
        );
    }

    #[test]
    fn test_invalid_period_displays_value_and_message() {
        let error = CalendarError::InvalidPeriod {
            value: "18:00-08:00".to_string(),
            message: "end is earlier than start".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid period '18:00-08:00': end is earlier than start"
        );
    }

    #[test]
    fn test_lookahead_exceeded_displays_start_and_bound() {
        let error = CalendarError::LookaheadExceeded {
            start: Utc.with_ymd_and_hms(2018, 1, 2, 15, 4, 0).unwrap(),
            max_days: 30,
        };
        assert_eq!(
            error.to_string(),
            "Scan from 2018-01-02 15:04:00 UTC exceeds the limit of 30 days"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CalendarError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> CalendarResult<()> {
            Err(CalendarError::InvalidTime {
                value: "x".to_string(),
                message: "expected HH:MM".to_string(),
            })
        }

        fn propagates_error() -> CalendarResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
