//! Daytime periods.
//!
//! A [`DaytimePeriod`] is one contiguous interval within a single day, used
//! both for the nominal working hours of a day and for breaks.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

use super::clock::TimeOfDay;

/// An interval of wall-clock time within one day.
///
/// The end is never earlier than the start. A period whose start equals its
/// end is allowed and has a zero duration.
///
/// Serialized as `{"start": "HH:MM", "end": "HH:MM"}`; deserialization
/// re-checks the ordering.
///
/// # Example
///
/// ```
/// use factory_calendar::models::DaytimePeriod;
/// use chrono::Duration;
///
/// let period: DaytimePeriod = "07:00-18:00".parse().unwrap();
/// assert_eq!(period.start().to_string(), "07:00");
/// assert_eq!(period.end().to_string(), "18:00");
/// assert_eq!(period.duration(), Duration::hours(11));
///
/// assert!("18:00-07:00".parse::<DaytimePeriod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct DaytimePeriod {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawPeriod> for DaytimePeriod {
    type Error = CalendarError;

    fn try_from(raw: RawPeriod) -> CalendarResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DaytimePeriod {
    /// Creates a period, rejecting an end earlier than the start.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> CalendarResult<Self> {
        if end < start {
            return Err(CalendarError::InvalidPeriod {
                value: format!("{}-{}", start, end),
                message: "end is earlier than start".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The first minute of the period.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// The minute at which the period is over.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length of the period.
    pub fn duration(&self) -> Duration {
        Duration::minutes(self.minutes())
    }

    /// Length of the period in hours.
    ///
    /// # Example
    ///
    /// ```
    /// use factory_calendar::models::DaytimePeriod;
    /// use rust_decimal::Decimal;
    ///
    /// let period: DaytimePeriod = "16:00-16:30".parse().unwrap();
    /// assert_eq!(period.hours(), Decimal::new(5, 1)); // 0.5 hours
    /// ```
    pub fn hours(&self) -> Decimal {
        Decimal::new(self.minutes(), 0) / Decimal::new(60, 0)
    }

    /// Whether `time` falls inside the period. The end minute is excluded.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time < self.end
    }

    fn minutes(&self) -> i64 {
        i64::from(self.end.minutes_since_midnight())
            - i64::from(self.start.minutes_since_midnight())
    }
}

impl fmt::Display for DaytimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for DaytimePeriod {
    type Err = CalendarError;

    /// Parses `"HH:MM-HH:MM"`.
    fn from_str(s: &str) -> CalendarResult<Self> {
        let invalid = |message: String| CalendarError::InvalidPeriod {
            value: s.to_string(),
            message,
        };

        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| invalid("expected HH:MM-HH:MM".to_string()))?;
        let start: TimeOfDay = start.parse().map_err(|e| invalid(format!("start: {}", e)))?;
        let end: TimeOfDay = end.parse().map_err(|e| invalid(format!("end: {}", e)))?;

        Self::new(start, end).map_err(|_| invalid("end is earlier than start".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn period(s: &str) -> DaytimePeriod {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_working_hours() {
        let p = period("08:00-18:00");
        assert_eq!(p.start(), TimeOfDay::new(8, 0).unwrap());
        assert_eq!(p.end(), TimeOfDay::new(18, 0).unwrap());
    }

    #[test]
    fn test_parse_quarter_hours() {
        let p = period("09:15-17:15");
        assert_eq!(p.start(), TimeOfDay::new(9, 15).unwrap());
        assert_eq!(p.end(), TimeOfDay::new(17, 15).unwrap());
        assert_eq!(p.duration(), Duration::hours(8));
    }

    #[test]
    fn test_equal_start_and_end_is_allowed() {
        let p = period("12:00-12:00");
        assert_eq!(p.duration(), Duration::zero());
        assert_eq!(p.hours(), Decimal::ZERO);
        assert!(!p.contains(TimeOfDay::new(12, 0).unwrap()));
    }

    #[test]
    fn test_same_hour_earlier_minute_is_rejected() {
        match "12:30-12:15".parse::<DaytimePeriod>() {
            Err(CalendarError::InvalidPeriod { value, message }) => {
                assert_eq!(value, "12:30-12:15");
                assert_eq!(message, "end is earlier than start");
            }
            other => panic!("Expected InvalidPeriod error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_separator_is_rejected() {
        assert!("08:00 18:00".parse::<DaytimePeriod>().is_err());
        assert!("08:00".parse::<DaytimePeriod>().is_err());
    }

    #[test]
    fn test_malformed_side_is_rejected() {
        match "08:00-25:00".parse::<DaytimePeriod>() {
            Err(CalendarError::InvalidPeriod { message, .. }) => {
                assert!(message.starts_with("end:"), "unexpected message {}", message)
            }
            other => panic!("Expected InvalidPeriod error, got {:?}", other),
        }
        assert!("08:00-18:00-19:00".parse::<DaytimePeriod>().is_err());
    }

    #[test]
    fn test_contains_is_half_open() {
        let p = period("12:00-13:00");
        assert!(p.contains(TimeOfDay::new(12, 0).unwrap()));
        assert!(p.contains(TimeOfDay::new(12, 59).unwrap()));
        assert!(!p.contains(TimeOfDay::new(13, 0).unwrap()));
        assert!(!p.contains(TimeOfDay::new(11, 59).unwrap()));
    }

    #[test]
    fn test_hours_as_decimal() {
        assert_eq!(period("07:00-18:00").hours(), Decimal::new(11, 0));
        assert_eq!(period("15:45-16:00").hours(), Decimal::new(25, 2));
    }

    #[test]
    fn test_display_matches_input_format() {
        assert_eq!(period("07:05-18:00").to_string(), "07:05-18:00");
    }

    #[test]
    fn test_serialize_with_fixed_field_names() {
        let json = serde_json::to_string(&period("07:00-18:00")).unwrap();
        assert_eq!(json, r#"{"start":"07:00","end":"18:00"}"#);
    }

    #[test]
    fn test_deserialize_checks_ordering() {
        let p: DaytimePeriod = serde_json::from_str(r#"{"start":"07:00","end":"18:00"}"#).unwrap();
        assert_eq!(p, period("07:00-18:00"));

        let inverted = serde_json::from_str::<DaytimePeriod>(r#"{"start":"18:00","end":"07:00"}"#);
        assert!(inverted.is_err());
    }

    proptest! {
        #[test]
        fn prop_valid_period_round_trips(
            sh in 0u32..24, sm in 0u32..60, eh in 0u32..24, em in 0u32..60,
        ) {
            let (start, end) = if (sh, sm) <= (eh, em) {
                ((sh, sm), (eh, em))
            } else {
                ((eh, em), (sh, sm))
            };
            let text = format!("{:02}:{:02}-{:02}:{:02}", start.0, start.1, end.0, end.1);
            let p: DaytimePeriod = text.parse().unwrap();

            prop_assert_eq!((p.start().hour(), p.start().minute()), start);
            prop_assert_eq!((p.end().hour(), p.end().minute()), end);
            let expected = i64::from(end.0 * 60 + end.1) - i64::from(start.0 * 60 + start.1);
            prop_assert_eq!(p.duration(), Duration::minutes(expected));
            prop_assert_eq!(p.to_string(), text);
        }

        #[test]
        fn prop_inverted_period_is_rejected(
            sh in 0u32..24, sm in 0u32..60, eh in 0u32..24, em in 0u32..60,
        ) {
            prop_assume!((eh, em) < (sh, sm));
            let text = format!("{:02}:{:02}-{:02}:{:02}", sh, sm, eh, em);
            let is_invalid_period = matches!(
                text.parse::<DaytimePeriod>(),
                Err(CalendarError::InvalidPeriod { .. })
            );
            prop_assert!(is_invalid_period);
        }
    }
}
