//! Clock value types.
//!
//! Dates are plain [`NaiveDate`] values (proleptic Gregorian, no location).
//! This module adds [`TimeOfDay`], a minute-precision wall-clock time, and
//! the fixed-format parsers used by configuration loading.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, CalendarResult};

/// The text format accepted by [`parse_date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date in `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use factory_calendar::models::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("2018-05-31").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2018, 5, 31).unwrap());
/// assert!(parse_date("2018-02-30").is_err());
/// ```
pub fn parse_date(s: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| CalendarError::InvalidDate {
        value: s.to_string(),
        message: e.to_string(),
    })
}

/// A time of day with minute precision.
///
/// Ordering follows minutes since midnight. Seconds are never stored; a
/// time taken from an instant is truncated to the minute.
///
/// # Example
///
/// ```
/// use factory_calendar::models::TimeOfDay;
///
/// let opening: TimeOfDay = "07:00".parse().unwrap();
/// let closing: TimeOfDay = "18:00".parse().unwrap();
/// assert!(closing > opening);
/// assert_eq!(closing.minutes_since_midnight(), 18 * 60);
/// assert_eq!(closing.to_string(), "18:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a time of day, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u32, minute: u32) -> CalendarResult<Self> {
        if hour > 23 {
            return Err(CalendarError::InvalidTime {
                value: format!("{:02}:{:02}", hour, minute),
                message: "hour must be between 0 and 23".to_string(),
            });
        }
        if minute > 59 {
            return Err(CalendarError::InvalidTime {
                value: format!("{:02}:{:02}", hour, minute),
                message: "minute must be between 0 and 59".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the wall-clock time of `value`, truncated to the minute.
    pub fn of<T: Timelike>(value: &T) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
        }
    }

    /// The hour, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The minute, `0..=59`.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since `00:00`.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> CalendarResult<Self> {
        let invalid = |message: &str| CalendarError::InvalidTime {
            value: s.to_string(),
            message: message.to_string(),
        };

        let (hour, minute) = s.split_once(':').ok_or_else(|| invalid("expected HH:MM"))?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hour) || !two_digits(minute) {
            return Err(invalid("expected HH:MM"));
        }

        let hour = hour.parse::<u32>().map_err(|_| invalid("expected HH:MM"))?;
        let minute = minute.parse::<u32>().map_err(|_| invalid("expected HH:MM"))?;
        Self::new(hour, minute).map_err(|e| match e {
            CalendarError::InvalidTime { message, .. } => invalid(&message),
            other => other,
        })
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
