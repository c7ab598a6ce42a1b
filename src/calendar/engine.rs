//! The calendar engine.
//!
//! A [`Calendar`] combines a [`WeeklySchedule`] with [`CalendarExceptions`]
//! and answers working-day questions about instants and dates. All queries
//! are built on the forward [`DayScan`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::error::{CalendarError, CalendarResult};
use crate::models::{
    CalendarExceptions, DaytimePeriod, TimeOfDay, WeeklySchedule, WorkingDay, WorkingTimes,
};

use super::scan::{DayScan, ScannedDay};

/// Default number of days [`Calendar::next_working_day`] scans before giving up.
pub const DEFAULT_MAX_LOOKAHEAD_DAYS: u32 = 3650;

/// A factory calendar.
///
/// The calendar is immutable once built. Every query is a pure function of
/// the calendar and its arguments, so one instance can be shared freely
/// between threads.
///
/// Instants are interpreted in UTC: the date of an instant and its time of
/// day are taken from its UTC representation.
///
/// # Example
///
/// ```
/// use factory_calendar::calendar::Calendar;
/// use factory_calendar::models::{
///     CalendarExceptions, ExceptionEntry, WeeklySchedule, WorkingTimes,
/// };
/// use chrono::{NaiveDate, TimeZone, Utc, Weekday};
///
/// let times = WorkingTimes::parse("07:00-18:00", &["12:00-13:00"]).unwrap();
/// let mut schedule = WeeklySchedule::new();
/// for weekday in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
///     schedule = schedule.with_day(weekday, Some(times.clone()));
/// }
/// let exceptions = CalendarExceptions::from(vec![ExceptionEntry::holiday(
///     NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
/// )]);
/// let calendar = Calendar::new(schedule, exceptions);
///
/// // Thursday evening, Friday is a holiday, then the weekend
/// let at = Utc.with_ymd_and_hms(2018, 5, 31, 19, 0, 0).unwrap();
/// let next = calendar.next_working_day(at).unwrap();
/// assert_eq!(next.date, NaiveDate::from_ymd_opt(2018, 6, 4).unwrap());
/// assert!(calendar.is_holiday(at));
/// ```
#[derive(Debug, Clone)]
pub struct Calendar {
    weekly: WeeklySchedule,
    exceptions: CalendarExceptions,
    max_lookahead_days: u32,
}

impl Calendar {
    /// Creates a calendar from a weekly schedule and date exceptions.
    ///
    /// Exceptions are looked up first-match, so when a date is listed more
    /// than once only its first entry has any effect. Such dates are logged
    /// as a warning.
    pub fn new(weekly: WeeklySchedule, exceptions: CalendarExceptions) -> Self {
        let duplicates = exceptions.duplicate_dates();
        if let Some(first) = duplicates.first() {
            warn!(
                duplicates = duplicates.len(),
                first_duplicate = %first,
                "Exception dates listed more than once; the first entry for each date is used"
            );
        }

        debug!(
            working_weekdays = weekly.working_weekdays().len(),
            exceptions = exceptions.len(),
            "Calendar created"
        );

        Self {
            weekly,
            exceptions,
            max_lookahead_days: DEFAULT_MAX_LOOKAHEAD_DAYS,
        }
    }

    /// Returns the calendar with a different lookahead bound for
    /// [`Calendar::next_working_day`].
    pub fn with_max_lookahead_days(mut self, days: u32) -> Self {
        self.max_lookahead_days = days;
        self
    }

    /// The number of days [`Calendar::next_working_day`] scans at most.
    pub fn max_lookahead_days(&self) -> u32 {
        self.max_lookahead_days
    }

    /// The default weekly schedule.
    pub fn weekly_schedule(&self) -> &WeeklySchedule {
        &self.weekly
    }

    /// The date exceptions, in lookup order.
    pub fn exceptions(&self) -> &CalendarExceptions {
        &self.exceptions
    }

    /// Working times in effect on `date`.
    ///
    /// An exception for the date takes precedence over the weekly schedule,
    /// including an exception without working times, which makes the date a
    /// holiday. Returns `None` on holidays and non-working weekdays.
    pub fn working_times(&self, date: NaiveDate) -> Option<&WorkingTimes> {
        match self.exceptions.get(date) {
            Some(entry) => entry.working_times.as_ref(),
            None => self.weekly.get(date.weekday()),
        }
    }

    /// The workday period of `date`, or `None` if the date is not a working day.
    pub fn working_hours(&self, date: NaiveDate) -> Option<DaytimePeriod> {
        self.working_times(date).map(|times| times.workday)
    }

    /// Starts a forward day scan at `from`.
    pub fn scan(&self, from: DateTime<Utc>) -> DayScan<'_> {
        DayScan::new(self, from)
    }

    /// Finds the first working day at or after `at`.
    ///
    /// The day of `at` itself qualifies only while its workday has not yet
    /// ended. Scans at most [`Calendar::max_lookahead_days`] days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::LookaheadExceeded`] when no working day is
    /// found within the bound.
    pub fn next_working_day(&self, at: DateTime<Utc>) -> CalendarResult<WorkingDay> {
        self.next_working_day_within(at, self.max_lookahead_days)
    }

    /// Finds the first working day at or after `at`, scanning at most
    /// `max_days` days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::LookaheadExceeded`] when no working day is
    /// found within `max_days` days.
    pub fn next_working_day_within(
        &self,
        at: DateTime<Utc>,
        max_days: u32,
    ) -> CalendarResult<WorkingDay> {
        let found = self
            .scan(at)
            .take(max_days as usize)
            .find_map(counted_working_day);

        match found {
            Some(day) => {
                debug!(at = %at, date = %day.date, "Next working day found");
                Ok(day)
            }
            None => {
                warn!(at = %at, max_days, "No working day within lookahead");
                Err(CalendarError::LookaheadExceeded {
                    start: at,
                    max_days,
                })
            }
        }
    }

    /// The working days from `from` up to and including `to`.
    ///
    /// The first-day cutoff applies to the day of `from`. Returns an empty
    /// list when `to` is before the date of `from`.
    pub fn working_days(&self, from: DateTime<Utc>, to: NaiveDate) -> Vec<WorkingDay> {
        self.scan(from)
            .take_while(|day| day.date <= to)
            .filter_map(counted_working_day)
            .collect()
    }

    /// Counts the working days from `from` up to and including `to`.
    ///
    /// Agrees with [`Calendar::working_days`]; returns zero when `to` is
    /// before the date of `from`.
    pub fn count_working_days(&self, from: DateTime<Utc>, to: NaiveDate) -> u32 {
        let count = self
            .scan(from)
            .take_while(|day| day.date <= to)
            .filter(|day| day.counts)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Like [`Calendar::working_days`], but refuses ranges spanning more
    /// than `max_days` days, counting the date of `from`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::LookaheadExceeded`] when the range is longer
    /// than `max_days` days.
    pub fn working_days_within(
        &self,
        from: DateTime<Utc>,
        to: NaiveDate,
        max_days: u32,
    ) -> CalendarResult<Vec<WorkingDay>> {
        check_range(from, to, max_days)?;
        Ok(self.working_days(from, to))
    }

    /// Like [`Calendar::count_working_days`], but refuses ranges spanning
    /// more than `max_days` days, counting the date of `from`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::LookaheadExceeded`] when the range is longer
    /// than `max_days` days.
    pub fn count_working_days_within(
        &self,
        from: DateTime<Utc>,
        to: NaiveDate,
        max_days: u32,
    ) -> CalendarResult<u32> {
        check_range(from, to, max_days)?;
        Ok(self.count_working_days(from, to))
    }

    /// Whether `at` falls on a day that is no longer, or never was, a
    /// working day.
    ///
    /// True on holidays and non-working weekdays, and also on a working day
    /// once its workday has ended.
    pub fn is_holiday(&self, at: DateTime<Utc>) -> bool {
        self.count_working_days(at, at.date_naive()) != 1
    }

    /// Whether `at` lies inside the working hours of its day and outside
    /// every break.
    pub fn is_working_time(&self, at: DateTime<Utc>) -> bool {
        self.working_times(at.date_naive())
            .is_some_and(|times| times.is_working_time(TimeOfDay::of(&at)))
    }
}

/// Rejects a `from..=to` range covering more than `max_days` dates.
fn check_range(from: DateTime<Utc>, to: NaiveDate, max_days: u32) -> CalendarResult<()> {
    let span = to.signed_duration_since(from.date_naive()).num_days() + 1;
    if span > i64::from(max_days) {
        warn!(from = %from, to = %to, span, max_days, "Range exceeds scan limit");
        return Err(CalendarError::LookaheadExceeded {
            start: from,
            max_days,
        });
    }
    Ok(())
}

fn counted_working_day(day: ScannedDay<'_>) -> Option<WorkingDay> {
    match day {
        ScannedDay {
            date,
            working_times: Some(times),
            counts: true,
        } => Some(WorkingDay {
            date,
            working_times: times.clone(),
        }),
        _ => None,
    }
}
