//! Weekday and week-time primitives.
//!
//! All scheduling in this crate happens inside an anonymous 7-day cycle:
//! a point in time is a weekday plus a minute-of-day, with no notion of
//! calendar dates, months, or time zones. Week boundaries do not wrap;
//! Sunday 23:59 is the latest representable instant.
//!
//! # Ordering
//!
//! [`WeekTime`] is totally ordered by `(weekday, minute)`, with
//! Monday = day 0. Two week-times are equal iff both components match.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Minutes in one day; [`WeekTime::minute_of_week`] is built from this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Day of the week, Monday-anchored.
///
/// Variant order defines both the numeric index (Monday = 0) and the
/// derived ordering used by [`WeekTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Day 0.
    Monday,
    /// Day 1.
    Tuesday,
    /// Day 2.
    Wednesday,
    /// Day 3.
    Thursday,
    /// Day 4.
    Friday,
    /// Day 5.
    Saturday,
    /// Day 6.
    Sunday,
}

impl Weekday {
    /// All weekdays in index order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Numeric day index, 0 (Monday) through 6 (Sunday).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Weekday for a numeric index; `None` for anything above 6.
    pub fn from_index(index: u8) -> Option<Weekday> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Three-letter English abbreviation ("Mon".."Sun").
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A point in the 7-day cycle: weekday plus minute-of-day.
///
/// Immutable and `Copy`; every state node owns its own times, so sharing
/// never leaks between search-tree branches.
///
/// # Example
/// ```
/// use shift_search::models::{WeekTime, Weekday};
///
/// let open = WeekTime::new(Weekday::Monday, 8, 0);
/// let close = WeekTime::new(Weekday::Monday, 17, 0);
/// assert!(open < close);
/// assert_eq!(open.minute_of_week(), 8 * 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekTime {
    weekday: Weekday,
    minute: u16,
}

impl WeekTime {
    /// Creates a week-time at `hour:minute` on the given weekday.
    ///
    /// Hours above 23 and minutes above 59 are clamped, so the result is
    /// always a valid instant; parsed input is range-checked by the
    /// loader before it gets here.
    pub fn new(weekday: Weekday, hour: u8, minute: u8) -> Self {
        Self {
            weekday,
            minute: u16::from(hour.min(23)) * 60 + u16::from(minute.min(59)),
        }
    }

    /// The weekday this instant falls on.
    #[inline]
    pub fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Minutes since this day's midnight (0..1440).
    #[inline]
    pub fn minute_of_day(self) -> u16 {
        self.minute
    }

    /// Minutes since Monday 00:00, a compact key that orders and
    /// compares exactly like the `(weekday, minute)` pair itself.
    #[inline]
    pub fn minute_of_week(self) -> u16 {
        u16::from(self.weekday.index()) * MINUTES_PER_DAY + self.minute
    }

    /// Hour component (0..24).
    #[inline]
    pub fn hour(self) -> u8 {
        (self.minute / 60) as u8
    }

    /// Minute-within-hour component (0..60).
    #[inline]
    pub fn minute(self) -> u8 {
        (self.minute % 60) as u8
    }
}

/// Deserialization re-checks what [`WeekTime::new`] makes
/// unrepresentable: a raw `minute` at or past [`MINUTES_PER_DAY`] is
/// rejected instead of becoming an instant beyond the end of its day.
impl<'de> Deserialize<'de> for WeekTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            weekday: Weekday,
            minute: u16,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.minute >= MINUTES_PER_DAY {
            return Err(de::Error::custom(format!(
                "minute-of-day {} is out of range (0..{MINUTES_PER_DAY})",
                raw.minute
            )));
        }
        Ok(WeekTime {
            weekday: raw.weekday,
            minute: raw.minute,
        })
    }
}

impl std::fmt::Display for WeekTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:02}:{:02}", self.weekday, self.hour(), self.minute())
    }
}
