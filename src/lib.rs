//! Factory calendar engine.
//!
//! This crate answers working-day questions for a factory calendar built
//! from a default weekly schedule and a list of date exceptions: the working
//! hours of a date, whether an instant falls on a holiday, the next working
//! day at or after an instant, and the number of working days in a range.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
