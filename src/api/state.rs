//! Application state for the factory calendar API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calendar::Calendar;

/// Shared application state.
///
/// Holds the calendar every handler queries. The calendar is immutable, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The calendar answering requests.
    calendar: Arc<Calendar>,
}

impl AppState {
    /// Creates a new application state around the given calendar.
    pub fn new(calendar: Calendar) -> Self {
        Self {
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the calendar.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }
}
