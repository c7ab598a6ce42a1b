//! HTTP request handlers for the factory calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{
    HolidayRequest, NextWorkingDayRequest, WorkingDaysRequest, WorkingHoursRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, HolidayResponse, WorkingDayResponse, WorkingDaysResponse,
    WorkingHoursResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/working-hours", post(working_hours_handler))
        .route("/holiday", post(holiday_handler))
        .route("/next-working-day", post(next_working_day_handler))
        .route("/working-days", post(working_days_handler))
        .with_state(state)
}

/// Handler for POST /working-hours.
///
/// Returns the working times in effect on a date, taking exceptions into
/// account.
async fn working_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingHoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let working_times = state.calendar().working_times(request.date);
    info!(
        correlation_id = %correlation_id,
        date = %request.date,
        is_working_day = working_times.is_some(),
        "Working hours resolved"
    );
    json_response(
        StatusCode::OK,
        WorkingHoursResponse::new(request.date, working_times),
    )
}

/// Handler for POST /holiday.
async fn holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing holiday request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let is_holiday = state.calendar().is_holiday(request.at);
    info!(
        correlation_id = %correlation_id,
        at = %request.at,
        is_holiday,
        "Holiday check completed"
    );
    json_response(
        StatusCode::OK,
        HolidayResponse {
            at: request.at,
            date: request.at.date_naive(),
            is_holiday,
        },
    )
}

/// Handler for POST /next-working-day.
///
/// Scans forward from the requested instant. A scan that finds nothing
/// within the lookahead bound is reported as 422.
async fn next_working_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<NextWorkingDayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing next working day request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let calendar = state.calendar();
    let max_days = request
        .max_lookahead_days
        .unwrap_or(calendar.max_lookahead_days());

    let start_time = Instant::now();
    match calendar.next_working_day_within(request.at, max_days) {
        Ok(day) => {
            info!(
                correlation_id = %correlation_id,
                at = %request.at,
                date = %day.date,
                duration_us = start_time.elapsed().as_micros(),
                "Next working day found"
            );
            json_response(StatusCode::OK, WorkingDayResponse::from(day))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Next working day lookup failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /working-days.
///
/// Ranges longer than the calendar's lookahead bound are reported as 422.
async fn working_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let calendar = state.calendar();
    let start_time = Instant::now();
    let days = match calendar.working_days_within(
        request.from,
        request.to,
        calendar.max_lookahead_days(),
    ) {
        Ok(days) => days,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Working days range rejected"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let dates: Vec<_> = days.into_iter().map(|day| day.date).collect();
    let count = u32::try_from(dates.len()).unwrap_or(u32::MAX);

    info!(
        correlation_id = %correlation_id,
        from = %request.from,
        to = %request.to,
        count,
        duration_us = start_time.elapsed().as_micros(),
        "Working days counted"
    );
    json_response(
        StatusCode::OK,
        WorkingDaysResponse {
            from: request.from,
            to: request.to,
            count,
            dates,
        },
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
