//! Weekly availability windows.
//!
//! An employee's working pattern is exactly one open interval per
//! weekday: seven [`DayAvailability`] entries, slot *i* anchored to
//! weekday *i*. A window that opens at or after its close covers
//! nothing, which is how a day off is written in this fixed-slot
//! format.
//!
//! # Coverage
//! A shift is covered when it fits entirely inside the window of the
//! weekday it starts on: `open <= start` and `end <= close`, both
//! bounds inclusive. The close bound lives on the start's weekday, so
//! a shift running past midnight is never covered; wraparound across
//! midnight or the week boundary is unsupported.

use serde::Serialize;

use crate::error::ScheduleError;

use super::{Shift, WeekTime, Weekday};

/// One day's open interval.
///
/// Both endpoints sit on the same weekday; construction rejects
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    open: WeekTime,
    close: WeekTime,
}

impl DayAvailability {
    /// Creates a window from two instants on the same weekday.
    pub fn new(open: WeekTime, close: WeekTime) -> Result<Self, ScheduleError> {
        if open.weekday() != close.weekday() {
            return Err(ScheduleError::WindowDayMismatch {
                open: open.weekday(),
                close: close.weekday(),
            });
        }
        Ok(Self { open, close })
    }

    /// Builds the window for `weekday` from `(hour, minute)` pairs.
    ///
    /// Anchored to one weekday by construction, so this cannot fail.
    pub fn on(weekday: Weekday, open: (u8, u8), close: (u8, u8)) -> Self {
        Self {
            open: WeekTime::new(weekday, open.0, open.1),
            close: WeekTime::new(weekday, close.0, close.1),
        }
    }

    /// A zero-width window covering nothing: a day off.
    pub fn day_off(weekday: Weekday) -> Self {
        Self::on(weekday, (0, 0), (0, 0))
    }

    /// Window opening instant.
    #[inline]
    pub fn open(&self) -> WeekTime {
        self.open
    }

    /// Window closing instant.
    #[inline]
    pub fn close(&self) -> WeekTime {
        self.close
    }

    /// The weekday this window is anchored to.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.open.weekday()
    }
}

/// A weekly availability pattern: one window per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    days: [DayAvailability; 7],
}

impl Availability {
    /// Creates an availability from seven windows, slot *i* on weekday *i*.
    pub fn new(days: [DayAvailability; 7]) -> Result<Self, ScheduleError> {
        for (slot, window) in Weekday::ALL.iter().zip(days.iter()) {
            if window.weekday() != *slot {
                return Err(ScheduleError::SlotDayMismatch {
                    slot: *slot,
                    found: window.weekday(),
                });
            }
        }
        Ok(Self { days })
    }

    /// The same `(hour, minute)` open/close pair on all seven days.
    pub fn uniform(open: (u8, u8), close: (u8, u8)) -> Self {
        Self {
            days: Weekday::ALL.map(|day| DayAvailability::on(day, open, close)),
        }
    }

    /// No availability at all; combine with [`Availability::with_window`].
    pub fn closed() -> Self {
        Self {
            days: Weekday::ALL.map(DayAvailability::day_off),
        }
    }

    /// Replaces one day's window.
    ///
    /// # Example
    /// ```
    /// use shift_search::models::{Availability, Weekday};
    ///
    /// let mondays_only = Availability::closed()
    ///     .with_window(Weekday::Monday, (8, 0), (11, 0));
    /// ```
    pub fn with_window(mut self, weekday: Weekday, open: (u8, u8), close: (u8, u8)) -> Self {
        self.days[usize::from(weekday.index())] = DayAvailability::on(weekday, open, close);
        self
    }

    /// The window for one weekday.
    pub fn window(&self, weekday: Weekday) -> &DayAvailability {
        &self.days[usize::from(weekday.index())]
    }

    /// Whether `shift` fits inside the window of its starting weekday.
    pub fn covers(&self, shift: &Shift) -> bool {
        let window = self.window(shift.start().weekday());
        window.open <= shift.start() && shift.end() <= window.close
    }
}
