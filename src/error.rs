//! Error types for shift-search.
//!
//! Only invariant violations are errors. A dead end during expansion
//! (no eligible employee for the next shift) is a normal outcome and is
//! represented by an empty child list, never by `ScheduleError`.

use thiserror::Error;

use crate::models::{Ineligibility, Weekday};

/// An invariant violation detected by the core.
///
/// Returned instead of ever constructing an inconsistent state: a
/// mis-anchored availability window or an assignment the eligibility
/// rules forbid is rejected at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A day window opens and closes on different weekdays.
    #[error("availability window opens on {open} but closes on {close}")]
    WindowDayMismatch { open: Weekday, close: Weekday },

    /// An availability slot holds a window anchored to another weekday.
    #[error("availability slot for {slot} holds a window on {found}")]
    SlotDayMismatch { slot: Weekday, found: Weekday },

    /// `Employee::take` was called for a shift the employee may not work.
    #[error("{employee} cannot take the shift [{shift}]: {reason}")]
    IneligibleAssignment {
        /// Name of the employee the assignment was attempted on.
        employee: String,
        /// Rendered description of the offending shift.
        shift: String,
        /// Which eligibility rule failed.
        reason: Ineligibility,
    },
}
