//! Working times of a single day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CalendarResult;

use super::clock::TimeOfDay;
use super::period::DaytimePeriod;

/// The working schedule of one day: the nominal workday and its breaks.
///
/// Breaks are informational. They are not checked against the workday or
/// against each other, and they never decide whether a day is a working day.
///
/// # Example
///
/// ```
/// use factory_calendar::models::WorkingTimes;
/// use rust_decimal::Decimal;
///
/// let times = WorkingTimes::parse("07:00-18:00", &["12:00-13:00"]).unwrap();
/// assert_eq!(times.workday.to_string(), "07:00-18:00");
/// assert_eq!(times.breaks.len(), 1);
/// assert_eq!(times.net_hours(), Decimal::new(10, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingTimes {
    /// The nominal working hours of the day.
    pub workday: DaytimePeriod,
    /// Non-working intervals within the day, in the order they were given.
    #[serde(default)]
    pub breaks: Vec<DaytimePeriod>,
}

impl WorkingTimes {
    /// Creates working times without breaks.
    pub fn new(workday: DaytimePeriod) -> Self {
        Self {
            workday,
            breaks: Vec::new(),
        }
    }

    /// Parses a workday period string and any number of break period strings.
    ///
    /// Breaks are parsed in input order and the first malformed entry is
    /// returned as the error.
    pub fn parse<S: AsRef<str>>(workday: &str, breaks: &[S]) -> CalendarResult<Self> {
        let workday: DaytimePeriod = workday.parse()?;
        let breaks = breaks
            .iter()
            .map(|b| b.as_ref().parse::<DaytimePeriod>())
            .collect::<CalendarResult<Vec<DaytimePeriod>>>()?;

        Ok(Self { workday, breaks })
    }

    /// Hours of the workday minus the hours of all breaks, never negative.
    pub fn net_hours(&self) -> Decimal {
        let break_hours: Decimal = self.breaks.iter().map(DaytimePeriod::hours).sum();
        (self.workday.hours() - break_hours).max(Decimal::ZERO)
    }

    /// Whether `time` lies inside the workday and outside every break.
    pub fn is_working_time(&self, time: TimeOfDay) -> bool {
        self.workday.contains(time) && !self.breaks.iter().any(|b| b.contains(time))
    }
}
