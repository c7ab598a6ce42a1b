//! Response types for the factory calendar API.
//!
//! This module defines the JSON bodies returned by each endpoint, the error
//! response structure, and the mapping from [`CalendarError`] to HTTP.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::{WorkingDay, WorkingTimes};

/// Response body for the `/working-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursResponse {
    /// The requested date.
    pub date: NaiveDate,
    /// The weekday of the date.
    pub weekday: Weekday,
    /// Whether the date has working times at all.
    pub is_working_day: bool,
    /// Working times in effect, absent on holidays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_times: Option<WorkingTimes>,
    /// Length of the workday in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// Workday hours minus breaks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_hours: Option<Decimal>,
}

impl WorkingHoursResponse {
    /// Describes `date` given the working times in effect on it.
    pub fn new(date: NaiveDate, working_times: Option<&WorkingTimes>) -> Self {
        Self {
            date,
            weekday: date.weekday(),
            is_working_day: working_times.is_some(),
            working_times: working_times.cloned(),
            hours: working_times.map(|t| t.workday.hours().normalize()),
            net_hours: working_times.map(|t| t.net_hours().normalize()),
        }
    }
}

/// Response body for the `/holiday` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayResponse {
    /// The checked instant.
    pub at: DateTime<Utc>,
    /// The date the instant falls on.
    pub date: NaiveDate,
    /// Whether the instant is on a holiday or after the day's closing time.
    pub is_holiday: bool,
}

/// A working day in a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDayResponse {
    /// The working date.
    pub date: NaiveDate,
    /// The weekday of the date.
    pub weekday: Weekday,
    /// Working times in effect on the date.
    pub working_times: WorkingTimes,
    /// Length of the workday in hours.
    pub hours: Decimal,
    /// Workday hours minus breaks.
    pub net_hours: Decimal,
}

impl From<WorkingDay> for WorkingDayResponse {
    fn from(day: WorkingDay) -> Self {
        Self {
            date: day.date,
            weekday: day.date.weekday(),
            hours: day.working_times.workday.hours().normalize(),
            net_hours: day.working_times.net_hours().normalize(),
            working_times: day.working_times,
        }
    }
}

/// Response body for the `/working-days` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysResponse {
    /// The instant counting started from.
    pub from: DateTime<Utc>,
    /// The last date counted.
    pub to: NaiveDate,
    /// Number of working days in the range.
    pub count: u32,
    /// The working dates themselves.
    pub dates: Vec<NaiveDate>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalendarError> for ApiErrorResponse {
    fn from(error: CalendarError) -> Self {
        match error {
            CalendarError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            CalendarError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            error @ (CalendarError::InvalidTime { .. }
            | CalendarError::InvalidDate { .. }
            | CalendarError::InvalidPeriod { .. }) => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(error.to_string()),
            },
            error @ CalendarError::LookaheadExceeded { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "LOOKAHEAD_EXCEEDED",
                    error.to_string(),
                    "Raise max_lookahead_days or narrow the requested range",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_lookahead_exceeded_maps_to_422() {
        let error = CalendarError::LookaheadExceeded {
            start: Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap(),
            max_days: 10,
        };
        let api_error: ApiErrorResponse = error.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "LOOKAHEAD_EXCEEDED");
        assert!(api_error.error.message.contains("10 days"));
    }

    #[test]
    fn test_invalid_period_maps_to_400() {
        let error = CalendarError::InvalidPeriod {
            value: "18:00-07:00".to_string(),
            message: "end is earlier than start".to_string(),
        };
        let api_error: ApiErrorResponse = error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_config_error_maps_to_500() {
        let error = CalendarError::ConfigNotFound {
            path: "calendar.yaml".to_string(),
        };
        let api_error: ApiErrorResponse = error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_working_hours_response_for_holiday_omits_times() {
        let date = NaiveDate::from_ymd_opt(2018, 6, 1).unwrap();
        let response = WorkingHoursResponse::new(date, None);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"is_working_day\":false"));
        assert!(json.contains("\"weekday\":\"Fri\""));
        assert!(!json.contains("working_times"));
        assert!(!json.contains("hours"));
    }

    #[test]
    fn test_working_day_response_hours() {
        let day = WorkingDay {
            date: NaiveDate::from_ymd_opt(2018, 1, 9).unwrap(),
            working_times: WorkingTimes::parse("07:00-18:00", &["12:00-13:00"]).unwrap(),
        };
        let response = WorkingDayResponse::from(day);
        assert_eq!(response.weekday, Weekday::Tue);
        assert_eq!(response.hours, Decimal::new(11, 0));
        assert_eq!(response.net_hours, Decimal::new(10, 0));
    }
}
