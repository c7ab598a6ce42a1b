//! HTTP API module for the factory calendar.
//!
//! This module provides JSON endpoints for the calendar queries: working
//! hours of a date, holiday check, next working day and working-day counts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayRequest, NextWorkingDayRequest, WorkingDaysRequest, WorkingHoursRequest};
pub use response::{
    ApiError, ApiErrorResponse, HolidayResponse, WorkingDayResponse, WorkingDaysResponse,
    WorkingHoursResponse,
};
pub use state::AppState;
