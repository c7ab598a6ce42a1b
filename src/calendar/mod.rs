//! Calendar engine for working-day queries.
//!
//! This module contains the [`Calendar`] type, which answers what the
//! working hours of a date are, whether an instant falls on a holiday, which
//! day is the next working day, and how many working days lie between two
//! points. All of these are built on the forward [`DayScan`].

mod engine;
mod scan;

pub use engine::{Calendar, DEFAULT_MAX_LOOKAHEAD_DAYS};
pub use scan::{DayScan, ScannedDay};
