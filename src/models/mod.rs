//! Shift-assignment domain models.
//!
//! Core data types for the search: week-anchored time instants,
//! weekly availability patterns, shifts, employees, and the
//! search-tree state that ties them together.

mod availability;
mod employee;
mod shift;
mod state;
mod week_time;

pub use availability::{Availability, DayAvailability};
pub use employee::{Employee, Ineligibility};
pub use shift::Shift;
pub use state::ScheduleState;
pub use week_time::{WeekTime, Weekday, MINUTES_PER_DAY};
