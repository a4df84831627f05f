//! Employee shift rostering by state-space search.
//!
//! Assigns a fixed demand list of shifts to a fixed roster of
//! employees under weekly availability windows and exact rank
//! matching, by exploring a tree of immutable partial assignments.
//!
//! # Modules
//!
//! - **`models`**: Domain types, `WeekTime`, `Availability`, `Shift`,
//!   `Employee`, and the search node `ScheduleState`
//! - **`branching`**: Pluggable candidate-ordering strategies for expansion
//! - **`search`**: Frontier drivers (depth-first, breadth-first) with budgets
//! - **`loader`**: Plain-text roster and demand parsing
//! - **`validation`**: Structural input checks run before the root state
//! - **`report`**: Plain-text rendering of a state
//!
//! # Search model
//!
//! A [`models::ScheduleState`] pairs the queue of still-unassigned
//! shifts with the roster holding everything assigned so far. Shifts
//! commit in queue order: expansion branches the front shift across
//! every eligible employee, deriving each child as a deep copy, so
//! parent and child never share mutable structure and any frontier
//! policy can own a node safely. A state with an empty queue is a
//! goal; an expansion with no children is a dead end for the driver
//! to abandon.
//!
//! # Example
//!
//! ```
//! use shift_search::models::{Availability, Employee, ScheduleState, Shift, WeekTime, Weekday};
//! use shift_search::search::ScheduleSearch;
//!
//! let roster = vec![Employee::new(
//!     "ada",
//!     false,
//!     Availability::uniform((8, 0), (18, 0)),
//! )];
//! let demand = vec![Shift::new(
//!     "opening",
//!     false,
//!     WeekTime::new(Weekday::Monday, 9, 0),
//!     WeekTime::new(Weekday::Monday, 12, 0),
//! )];
//!
//! let mut search = ScheduleSearch::new();
//! let result = search.solve(ScheduleState::initial(roster, demand));
//! assert!(result.solution.is_some());
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod branching;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod search;
pub mod validation;
