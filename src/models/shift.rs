//! Work shifts.
//!
//! A shift is a time-bounded unit of work: a kind tag, a rank
//! requirement, and a `[start, end)` interval anchored to the weekday
//! it starts on.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{WeekTime, Weekday};

/// A unit of work to be assigned to exactly one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    kind: String,
    requires_supervisor: bool,
    start: WeekTime,
    end: WeekTime,
}

impl Shift {
    /// Creates a shift.
    ///
    /// `kind` is a free-form label ("opening", "till", ...); it names
    /// the work but plays no part in eligibility or identity.
    pub fn new(
        kind: impl Into<String>,
        requires_supervisor: bool,
        start: WeekTime,
        end: WeekTime,
    ) -> Self {
        Self {
            kind: kind.into(),
            requires_supervisor,
            start,
            end,
        }
    }

    /// The kind label.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether only supervisors qualify.
    #[inline]
    pub fn requires_supervisor(&self) -> bool {
        self.requires_supervisor
    }

    /// When the shift starts.
    #[inline]
    pub fn start(&self) -> WeekTime {
        self.start
    }

    /// When the shift ends (exclusive).
    #[inline]
    pub fn end(&self) -> WeekTime {
        self.end
    }

    /// The weekday the shift starts on.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.start.weekday()
    }

    /// Whether two shifts overlap in time.
    ///
    /// Only shifts starting on the same weekday can conflict. The
    /// intervals are half-open, so a shift ending at 12:00 never
    /// conflicts with one starting at 12:00.
    pub fn conflicts_with(&self, other: &Shift) -> bool {
        self.start.weekday() == other.start.weekday()
            && self.start < other.end
            && other.start < self.end
    }
}

/// Shift identity is the time slot alone.
///
/// Two shifts sharing start and end compare equal even when kind or
/// rank requirement differ. The queue bookkeeping in
/// [`super::ScheduleState`] removes shifts by position, never by
/// equality lookup, so a demand list with duplicate slots still
/// assigns every entry.
impl PartialEq for Shift {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Shift {}

impl Hash for Shift {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} to {}", self.kind, self.start, self.end)
    }
}
