//! Request types for the factory calendar API.
//!
//! Instants are RFC 3339 timestamps and are evaluated in UTC; dates are
//! `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Request body for the `/working-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursRequest {
    /// The date to look up.
    pub date: NaiveDate,
}

/// Request body for the `/holiday` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The instant to check.
    pub at: DateTime<Utc>,
}

/// Request body for the `/next-working-day` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextWorkingDayRequest {
    /// The instant to search from.
    pub at: DateTime<Utc>,
    /// Overrides the calendar's lookahead bound for this request.
    #[serde(default)]
    pub max_lookahead_days: Option<u32>,
}

/// Request body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysRequest {
    /// The instant to count from; its time of day applies to the first day.
    pub from: DateTime<Utc>,
    /// The last date counted, inclusive.
    pub to: NaiveDate,
}
