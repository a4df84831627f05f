//! Input validation for assignment problems.
//!
//! Checks structural integrity of a roster and a demand list before
//! the root search state is built; the search core assumes these
//! checks have passed. Detects:
//! - Duplicate employee names
//! - Shifts that end at or before their start
//! - Demand with an empty roster

use std::collections::HashSet;

use crate::models::{Employee, Shift};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share a name. Names key roster lookups and
    /// report lines.
    DuplicateName,
    /// A demand entry's end does not lie after its start; the
    /// half-open interval is empty or negative.
    InvertedShift,
    /// There are shifts to assign but nobody to take them.
    EmptyRoster,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster and a demand list before search.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(roster: &[Employee], demand: &[Shift]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for employee in roster {
        if !names.insert(employee.name()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate employee name: {}", employee.name()),
            ));
        }
    }

    for shift in demand {
        if shift.end() <= shift.start() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedShift,
                format!("Shift [{shift}] ends at or before its start"),
            ));
        }
    }

    if roster.is_empty() && !demand.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Demand is non-empty but the roster has no employees",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
