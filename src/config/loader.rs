//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for building a calendar
//! from a YAML configuration file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calendar::Calendar;
use crate::error::{CalendarError, CalendarResult};
use crate::models::{CalendarExceptions, ExceptionEntry, WeeklySchedule, WorkingTimes, parse_date};

use super::types::{CalendarConfig, WorkingTimesConfig};

/// Loads a calendar configuration and builds the calendar it describes.
///
/// Loading fails as a whole on the first malformed time, period or date: a
/// calendar is never built from a partially valid configuration.
///
/// # File Format
///
/// ```text
/// name: Main plant
/// max_lookahead_days: 3650
/// weekly:
///   monday: { workday: "07:00-18:00", breaks: ["12:00-13:00"] }
///   saturday: ~
/// exceptions:
///   - date: "2018-05-31"
///     working_times: { workday: "07:00-20:00" }
///   - date: "2018-06-01"
/// holidays:
///   - "2018-01-01"
/// ```
///
/// # Example
///
/// ```no_run
/// use factory_calendar::config::ConfigLoader;
/// use chrono::{TimeZone, Utc};
///
/// let loader = ConfigLoader::load("./config/calendar.yaml").unwrap();
/// let at = Utc.with_ymd_and_hms(2018, 1, 2, 15, 4, 0).unwrap();
/// let next = loader.calendar().next_working_day(at).unwrap();
/// println!("Next working day: {}", next.date);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
    calendar: Calendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing ([`CalendarError::ConfigNotFound`])
    /// - The file is not valid YAML for a calendar, or contains a malformed
    ///   time, period or date ([`CalendarError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<CalendarConfig>(path)?;
        Self::from_config(config, &path.display().to_string())
    }

    /// Builds a calendar from YAML text.
    ///
    /// `source` names the text in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use factory_calendar::config::ConfigLoader;
    ///
    /// let yaml = r#"
    /// weekly:
    ///   monday: { workday: "08:00-16:00" }
    /// holidays: ["2018-01-01"]
    /// "#;
    /// let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();
    /// assert_eq!(loader.calendar().exceptions().len(), 1);
    /// ```
    pub fn from_yaml_str(content: &str, source: &str) -> CalendarResult<Self> {
        let config: CalendarConfig =
            serde_yaml::from_str(content).map_err(|e| CalendarError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config, source)
    }

    fn from_config(config: CalendarConfig, source: &str) -> CalendarResult<Self> {
        let calendar = build_calendar(&config, source)?;
        debug!(
            source,
            name = config.name.as_deref().unwrap_or("unnamed"),
            exceptions = calendar.exceptions().len(),
            "Calendar configuration loaded"
        );
        Ok(Self { config, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalendarResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalendarError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the configuration as it was read.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the calendar's display name, if configured.
    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    /// Returns the calendar built from the configuration.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Consumes the loader, returning the calendar.
    pub fn into_calendar(self) -> Calendar {
        self.calendar
    }
}

fn build_calendar(config: &CalendarConfig, source: &str) -> CalendarResult<Calendar> {
    let invalid = |context: String, error: CalendarError| CalendarError::ConfigParseError {
        path: source.to_string(),
        message: format!("{}: {}", context, error),
    };

    let mut weekly = WeeklySchedule::new();
    for (key, weekday, times) in config.weekly.days() {
        let times = times
            .map(parse_working_times)
            .transpose()
            .map_err(|e| invalid(format!("weekly.{}", key), e))?;
        weekly = weekly.with_day(weekday, times);
    }

    let mut exceptions = CalendarExceptions::new();
    for (i, exception) in config.exceptions.iter().enumerate() {
        let context = || format!("exceptions[{}]", i);
        let date = parse_date(&exception.date).map_err(|e| invalid(context(), e))?;
        let times = exception
            .working_times
            .as_ref()
            .map(parse_working_times)
            .transpose()
            .map_err(|e| invalid(context(), e))?;
        exceptions.push(ExceptionEntry {
            date,
            working_times: times,
        });
    }

    for (i, holiday) in config.holidays.iter().enumerate() {
        let date = parse_date(holiday).map_err(|e| invalid(format!("holidays[{}]", i), e))?;
        exceptions.push(ExceptionEntry::holiday(date));
    }

    let calendar = Calendar::new(weekly, exceptions);
    Ok(match config.max_lookahead_days {
        Some(days) => calendar.with_max_lookahead_days(days),
        None => calendar,
    })
}

fn parse_working_times(config: &WorkingTimesConfig) -> CalendarResult<WorkingTimes> {
    WorkingTimes::parse(&config.workday, config.breaks.as_slice())
}
