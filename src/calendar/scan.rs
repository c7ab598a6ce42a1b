//! Forward day scan.
//!
//! Every calendar query walks forward from an instant one day at a time.
//! [`DayScan`] is that walk as an iterator: each item is one calendar day
//! together with the working times that apply on it and whether it counts
//! as a working day for the scan.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{TimeOfDay, WorkingTimes};

use super::engine::Calendar;

/// One day visited by a [`DayScan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedDay<'a> {
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// Working times in effect, `None` on a holiday or non-working weekday.
    pub working_times: Option<&'a WorkingTimes>,
    /// Whether the day counts as a working day for this scan.
    ///
    /// Later days count whenever they have working times. The first day
    /// counts only if its workday ends after the time of day the scan
    /// started at.
    pub counts: bool,
}

/// Iterator over the days at and after a starting instant.
///
/// The cursor advances by exactly 24 hours per step in UTC, so the date of
/// every step is the next calendar day. The scan is unbounded; callers cap
/// it with [`Iterator::take`] or [`Iterator::take_while`]. It ends early only
/// if the cursor leaves the range chrono can represent.
///
/// # Example
///
/// ```
/// use factory_calendar::calendar::Calendar;
/// use factory_calendar::models::{CalendarExceptions, WeeklySchedule, WorkingTimes};
/// use chrono::{TimeZone, Utc, Weekday};
///
/// let schedule = WeeklySchedule::new().with_day(
///     Weekday::Mon,
///     Some(WorkingTimes::parse::<&str>("07:00-18:00", &[]).unwrap()),
/// );
/// let calendar = Calendar::new(schedule, CalendarExceptions::new());
///
/// // 2018-01-01 is a Monday, queried after closing time
/// let start = Utc.with_ymd_and_hms(2018, 1, 1, 19, 0, 0).unwrap();
/// let counted: Vec<bool> = calendar.scan(start).take(8).map(|day| day.counts).collect();
/// assert_eq!(counted, [false, false, false, false, false, false, false, true]);
/// ```
#[derive(Debug, Clone)]
pub struct DayScan<'a> {
    calendar: &'a Calendar,
    cursor: Option<DateTime<Utc>>,
    cutoff: TimeOfDay,
    first_day: bool,
}

impl<'a> DayScan<'a> {
    pub(super) fn new(calendar: &'a Calendar, start: DateTime<Utc>) -> Self {
        Self {
            calendar,
            cursor: Some(start),
            cutoff: TimeOfDay::of(&start),
            first_day: true,
        }
    }
}

impl<'a> Iterator for DayScan<'a> {
    type Item = ScannedDay<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor?;
        let date = cursor.date_naive();
        let working_times = self.calendar.working_times(date);

        let counts = match working_times {
            Some(times) if self.first_day => times.workday.end() > self.cutoff,
            Some(_) => true,
            None => false,
        };

        self.first_day = false;
        self.cursor = cursor.checked_add_signed(Duration::hours(24));

        Some(ScannedDay {
            date,
            working_times,
            counts,
        })
    }
}
