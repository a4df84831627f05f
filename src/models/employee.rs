//! Employees and shift eligibility.
//!
//! An employee pairs a name and rank with a weekly availability
//! pattern, plus the list of shifts taken so far on the current search
//! branch. Eligibility for a further shift is decided here, with the
//! rules checked in a fixed order: rank match, then availability
//! coverage, then conflict with held shifts. The first failing rule is
//! the one reported.

use serde::Serialize;
use thiserror::Error;

use crate::error::ScheduleError;

use super::{Availability, Shift};

/// Why an employee cannot take a particular shift.
///
/// Carries the first rule that failed; later rules are not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Ineligibility {
    /// Rank differs from the shift's requirement. Supervisors do not
    /// take staff shifts, nor staff supervisor shifts.
    #[error("rank does not match the shift requirement")]
    RankMismatch,
    /// The shift falls outside that day's availability window.
    #[error("the shift falls outside the availability window")]
    Unavailable,
    /// The shift overlaps one already held.
    #[error("the shift overlaps an already assigned shift")]
    OverlapsAssigned,
}

/// A roster member that can hold shifts.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    name: String,
    is_supervisor: bool,
    availability: Availability,
    assigned: Vec<Shift>,
}

impl Employee {
    /// Creates an employee holding no shifts.
    pub fn new(name: impl Into<String>, is_supervisor: bool, availability: Availability) -> Self {
        Self {
            name: name.into(),
            is_supervisor,
            availability,
            assigned: Vec::new(),
        }
    }

    /// The employee's name; unique within a roster.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this employee holds supervisor rank.
    #[inline]
    pub fn is_supervisor(&self) -> bool {
        self.is_supervisor
    }

    /// The weekly availability pattern.
    #[inline]
    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Shifts held on this branch, in assignment order.
    #[inline]
    pub fn assigned(&self) -> &[Shift] {
        &self.assigned
    }

    /// Number of shifts held.
    #[inline]
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// Runs the eligibility rules for `shift` in order and reports the
    /// first failure: rank, availability, then overlap.
    pub fn eligibility(&self, shift: &Shift) -> Result<(), Ineligibility> {
        if self.is_supervisor != shift.requires_supervisor() {
            return Err(Ineligibility::RankMismatch);
        }
        if !self.availability.covers(shift) {
            return Err(Ineligibility::Unavailable);
        }
        if self.assigned.iter().any(|held| shift.conflicts_with(held)) {
            return Err(Ineligibility::OverlapsAssigned);
        }
        Ok(())
    }

    /// Whether this employee may take `shift`.
    #[inline]
    pub fn can_work(&self, shift: &Shift) -> bool {
        self.eligibility(shift).is_ok()
    }

    /// Takes `shift`, appending it to the held list.
    ///
    /// Fails with [`ScheduleError::IneligibleAssignment`] when any
    /// eligibility rule rejects the shift, leaving the employee
    /// unchanged. Callers are expected to check first; a failure here
    /// signals a caller bug, not an ordinary dead end.
    pub fn take(&mut self, shift: Shift) -> Result<(), ScheduleError> {
        if let Err(reason) = self.eligibility(&shift) {
            return Err(ScheduleError::IneligibleAssignment {
                employee: self.name.clone(),
                shift: shift.to_string(),
                reason,
            });
        }
        self.assigned.push(shift);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WeekTime, Weekday};

    fn shift_on(day: Weekday, start: (u8, u8), end: (u8, u8)) -> Shift {
        Shift::new(
            "till",
            false,
            WeekTime::new(day, start.0, start.1),
            WeekTime::new(day, end.0, end.1),
        )
    }

    fn supervisor_shift(day: Weekday, start: (u8, u8), end: (u8, u8)) -> Shift {
        Shift::new(
            "keyholder",
            true,
            WeekTime::new(day, start.0, start.1),
            WeekTime::new(day, end.0, end.1),
        )
    }

    fn staffer(name: &str) -> Employee {
        Employee::new(name, false, Availability::uniform((8, 0), (18, 0)))
    }

    #[test]
    fn test_eligible_employee_can_work() {
        let ada = staffer("ada");
        assert!(ada.can_work(&shift_on(Weekday::Monday, (9, 0), (12, 0))));
    }

    #[test]
    fn test_staff_cannot_take_supervisor_shift() {
        let ada = staffer("ada");
        assert_eq!(
            ada.eligibility(&supervisor_shift(Weekday::Monday, (9, 0), (12, 0))),
            Err(Ineligibility::RankMismatch)
        );
    }

    #[test]
    fn test_supervisor_cannot_take_staff_shift() {
        // Rank must match exactly; supervisors are not a superset.
        let boss = Employee::new("boss", true, Availability::uniform((8, 0), (18, 0)));
        assert_eq!(
            boss.eligibility(&shift_on(Weekday::Monday, (9, 0), (12, 0))),
            Err(Ineligibility::RankMismatch)
        );
    }

    #[test]
    fn test_uncovered_shift_is_unavailable() {
        let ada = staffer("ada");
        assert_eq!(
            ada.eligibility(&shift_on(Weekday::Monday, (17, 0), (19, 0))),
            Err(Ineligibility::Unavailable)
        );
    }

    #[test]
    fn test_overlap_with_held_shift() {
        let mut ada = staffer("ada");
        ada.take(shift_on(Weekday::Monday, (9, 0), (12, 0))).unwrap();
        assert_eq!(
            ada.eligibility(&shift_on(Weekday::Monday, (11, 0), (13, 0))),
            Err(Ineligibility::OverlapsAssigned)
        );
    }

    #[test]
    fn test_rank_is_checked_before_availability() {
        // Both rules fail; the rank failure is the one reported.
        let ada = staffer("ada");
        assert_eq!(
            ada.eligibility(&supervisor_shift(Weekday::Monday, (20, 0), (22, 0))),
            Err(Ineligibility::RankMismatch)
        );
    }

    #[test]
    fn test_availability_is_checked_before_overlap() {
        let mut ada = staffer("ada");
        ada.take(shift_on(Weekday::Monday, (9, 0), (18, 0))).unwrap();
        // Overlaps the held shift and breaches the window; the window
        // failure is the one reported.
        assert_eq!(
            ada.eligibility(&shift_on(Weekday::Monday, (17, 0), (19, 0))),
            Err(Ineligibility::Unavailable)
        );
    }

    #[test]
    fn test_take_appends_in_order() {
        let mut ada = staffer("ada");
        let first = shift_on(Weekday::Monday, (9, 0), (12, 0));
        let second = shift_on(Weekday::Tuesday, (9, 0), (12, 0));
        ada.take(first.clone()).unwrap();
        ada.take(second.clone()).unwrap();
        assert_eq!(ada.assigned(), &[first, second]);
    }

    #[test]
    fn test_take_rejects_and_leaves_employee_unchanged() {
        let mut ada = staffer("ada");
        let err = ada
            .take(shift_on(Weekday::Monday, (20, 0), (22, 0)))
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::IneligibleAssignment {
                employee: "ada".into(),
                shift: "till from Mon 20:00 to Mon 22:00".into(),
                reason: Ineligibility::Unavailable,
            }
        );
        assert!(ada.assigned().is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut ada = staffer("ada");
        let mut twin = ada.clone();
        twin.take(shift_on(Weekday::Monday, (9, 0), (12, 0))).unwrap();
        assert_eq!(ada.assigned_count(), 0);
        assert_eq!(twin.assigned_count(), 1);
        // The original can still take the slot its twin holds.
        assert!(ada.can_work(&shift_on(Weekday::Monday, (9, 0), (12, 0))));
        ada.take(shift_on(Weekday::Monday, (9, 0), (12, 0))).unwrap();
    }

    #[test]
    fn test_back_to_back_shifts_are_allowed() {
        let mut ada = staffer("ada");
        ada.take(shift_on(Weekday::Monday, (8, 0), (12, 0))).unwrap();
        assert!(ada.can_work(&shift_on(Weekday::Monday, (12, 0), (16, 0))));
    }
}
