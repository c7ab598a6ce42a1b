//! Configuration loading for factory calendars.
//!
//! This module loads a calendar definition (default week, date exceptions
//! and holidays) from a YAML file and builds the [`crate::calendar::Calendar`]
//! it describes.
//!
//! # Example
//!
//! ```no_run
//! use factory_calendar::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/calendar.yaml").unwrap();
//! println!("Loaded calendar: {}", loader.name().unwrap_or("unnamed"));
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, ExceptionConfig, WeeklyConfig, WorkingTimesConfig};
