//! Weekly schedule and date exceptions.
//!
//! This module contains the two inputs a [`crate::calendar::Calendar`] is
//! built from: the default [`WeeklySchedule`] and the ordered
//! [`CalendarExceptions`] that override it on specific dates.

use chrono::{NaiveDate, Weekday};

use super::working_times::WorkingTimes;

/// Default working times for each day of the week.
///
/// Holds exactly one slot per weekday. An empty slot marks a non-working
/// weekday such as a weekend day.
///
/// # Example
///
/// ```
/// use factory_calendar::models::{WeeklySchedule, WorkingTimes};
/// use chrono::Weekday;
///
/// let office = WorkingTimes::parse("07:00-18:00", &["12:00-13:00"]).unwrap();
/// let schedule = WeeklySchedule::new()
///     .with_day(Weekday::Mon, Some(office.clone()))
///     .with_day(Weekday::Tue, Some(office));
///
/// assert!(schedule.get(Weekday::Mon).is_some());
/// assert!(schedule.get(Weekday::Sun).is_none());
/// assert_eq!(schedule.working_weekdays(), vec![Weekday::Mon, Weekday::Tue]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Option<WorkingTimes>; 7],
}

impl WeeklySchedule {
    /// Creates a schedule in which every weekday is non-working.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the schedule with the slot for `weekday` replaced.
    pub fn with_day(mut self, weekday: Weekday, times: Option<WorkingTimes>) -> Self {
        self.days[weekday.num_days_from_monday() as usize] = times;
        self
    }

    /// Working times for `weekday`, or `None` on a non-working weekday.
    pub fn get(&self, weekday: Weekday) -> Option<&WorkingTimes> {
        self.days[weekday.num_days_from_monday() as usize].as_ref()
    }

    /// Weekdays that have working times, Monday first.
    pub fn working_weekdays(&self) -> Vec<Weekday> {
        WEEKDAYS
            .into_iter()
            .filter(|weekday| self.get(*weekday).is_some())
            .collect()
    }
}

/// All weekdays, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A date-specific override of the weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionEntry {
    /// The date being overridden.
    pub date: NaiveDate,
    /// Working times for the date; `None` makes the date a holiday.
    pub working_times: Option<WorkingTimes>,
}

impl ExceptionEntry {
    /// An exception that closes the calendar on `date`.
    pub fn holiday(date: NaiveDate) -> Self {
        Self {
            date,
            working_times: None,
        }
    }

    /// An exception that replaces the working times of `date`.
    pub fn working(date: NaiveDate, working_times: WorkingTimes) -> Self {
        Self {
            date,
            working_times: Some(working_times),
        }
    }
}

/// Ordered list of date exceptions.
///
/// Lookup returns the first entry for a date, so when the same date appears
/// more than once the earlier entry shadows the later ones.
///
/// # Example
///
/// ```
/// use factory_calendar::models::{CalendarExceptions, ExceptionEntry};
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
/// let exceptions = CalendarExceptions::from(vec![ExceptionEntry::holiday(new_year)]);
///
/// assert!(exceptions.get(new_year).is_some());
/// assert!(exceptions.get(NaiveDate::from_ymd_opt(2018, 1, 2).unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarExceptions {
    entries: Vec<ExceptionEntry>,
}

impl CalendarExceptions {
    /// Creates an empty exception list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry after the existing ones.
    pub fn push(&mut self, entry: ExceptionEntry) {
        self.entries.push(entry);
    }

    /// The first entry whose date equals `date`.
    pub fn get(&self, date: NaiveDate) -> Option<&ExceptionEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Dates that occur more than once, in the order they first appear.
    pub fn duplicate_dates(&self) -> Vec<NaiveDate> {
        let mut duplicates = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let repeated = self.entries[..i].iter().any(|e| e.date == entry.date);
            if repeated && !duplicates.contains(&entry.date) {
                duplicates.push(entry.date);
            }
        }
        duplicates
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExceptionEntry> {
        self.entries.iter()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ExceptionEntry>> for CalendarExceptions {
    fn from(entries: Vec<ExceptionEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<ExceptionEntry> for CalendarExceptions {
    fn from_iter<I: IntoIterator<Item = ExceptionEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<ExceptionEntry> for CalendarExceptions {
    fn extend<I: IntoIterator<Item = ExceptionEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// A working day found by the calendar, with the times that apply on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDay {
    /// The working date.
    pub date: NaiveDate,
    /// Working times in effect on that date.
    pub working_times: WorkingTimes,
}
