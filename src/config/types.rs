//! Configuration types for factory calendars.
//!
//! This module contains the structures deserialized from a YAML calendar
//! file. Times, periods and dates are kept as text here and are validated
//! when the loader turns them into a [`crate::calendar::Calendar`].

use chrono::Weekday;
use serde::Deserialize;

/// Working times of one day as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkingTimesConfig {
    /// Working hours in `HH:MM-HH:MM` form.
    pub workday: String,
    /// Breaks in `HH:MM-HH:MM` form.
    #[serde(default)]
    pub breaks: Vec<String>,
}

/// The default week.
///
/// A missing or null weekday is a non-working day. Unknown keys are
/// rejected so that a misspelt weekday is not silently treated as closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeeklyConfig {
    /// Monday working times.
    pub monday: Option<WorkingTimesConfig>,
    /// Tuesday working times.
    pub tuesday: Option<WorkingTimesConfig>,
    /// Wednesday working times.
    pub wednesday: Option<WorkingTimesConfig>,
    /// Thursday working times.
    pub thursday: Option<WorkingTimesConfig>,
    /// Friday working times.
    pub friday: Option<WorkingTimesConfig>,
    /// Saturday working times.
    pub saturday: Option<WorkingTimesConfig>,
    /// Sunday working times.
    pub sunday: Option<WorkingTimesConfig>,
}

impl WeeklyConfig {
    /// Every weekday with its configuration key and entry, Monday first.
    pub fn days(&self) -> [(&'static str, Weekday, Option<&WorkingTimesConfig>); 7] {
        [
            ("monday", Weekday::Mon, self.monday.as_ref()),
            ("tuesday", Weekday::Tue, self.tuesday.as_ref()),
            ("wednesday", Weekday::Wed, self.wednesday.as_ref()),
            ("thursday", Weekday::Thu, self.thursday.as_ref()),
            ("friday", Weekday::Fri, self.friday.as_ref()),
            ("saturday", Weekday::Sat, self.saturday.as_ref()),
            ("sunday", Weekday::Sun, self.sunday.as_ref()),
        ]
    }
}

/// A date exception as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExceptionConfig {
    /// The date in `YYYY-MM-DD` form.
    pub date: String,
    /// Replacement working times; absent means the date is closed.
    pub working_times: Option<WorkingTimesConfig>,
}

/// A complete calendar configuration file.
///
/// `holidays` is shorthand for exceptions without working times. They are
/// appended after `exceptions`, so an explicit exception for the same date
/// takes precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Optional display name of the calendar.
    pub name: Option<String>,
    /// Lookahead bound for next-working-day queries.
    pub max_lookahead_days: Option<u32>,
    /// The default week.
    pub weekly: WeeklyConfig,
    /// Date exceptions in lookup order.
    #[serde(default)]
    pub exceptions: Vec<ExceptionConfig>,
    /// Closed dates in `YYYY-MM-DD` form.
    #[serde(default)]
    pub holidays: Vec<String>,
}
