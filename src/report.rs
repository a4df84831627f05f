//! Plain-text rendering of schedule states.
//!
//! One line per roster member with everything they hold, then a
//! trailing count of still-unassigned shifts. Intended for logs and
//! command-line output; machine consumers should serialize the state
//! instead.

use crate::models::{Employee, ScheduleState};

/// Renders a whole state.
///
/// ```text
/// ada (staff): opening from Mon 09:00 to Mon 12:00
/// bo (supervisor): no shifts
/// 0 shifts unassigned
/// ```
pub fn render(state: &ScheduleState) -> String {
    let mut out = String::new();
    for employee in state.roster() {
        out.push_str(&employee_line(employee));
        out.push('\n');
    }
    out.push_str(&format!("{} shifts unassigned", state.unassigned_count()));
    out
}

/// One employee with rank and held shifts, oldest first.
pub fn employee_line(employee: &Employee) -> String {
    let rank = if employee.is_supervisor() {
        "supervisor"
    } else {
        "staff"
    };
    if employee.assigned().is_empty() {
        return format!("{} ({rank}): no shifts", employee.name());
    }
    let held: Vec<String> = employee
        .assigned()
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("{} ({rank}): {}", employee.name(), held.join("; "))
}
