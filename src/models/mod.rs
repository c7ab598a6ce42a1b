//! Core data models for the factory calendar.
//!
//! This module contains the value types the calendar engine is built from:
//! times of day, daytime periods, the working times of a day, the weekly
//! schedule and the date exceptions that override it.

mod clock;
mod period;
mod schedule;
mod working_times;

pub use clock::{DATE_FORMAT, TimeOfDay, parse_date};
pub use period::DaytimePeriod;
pub use schedule::{CalendarExceptions, ExceptionEntry, WEEKDAYS, WeeklySchedule, WorkingDay};
pub use working_times::WorkingTimes;
