//! Plain-text loading of rosters and demand lists.
//!
//! Both inputs are whitespace-separated token streams; line breaks are
//! cosmetic. Times are written `Ddd:HH:MM`, as in `Mon:08:30`, with
//! the weekday abbreviations `Mon` through `Sun`.
//!
//! # Roster format
//!
//! Sixteen tokens per employee: a name, a rank token, then seven
//! open/close pairs, Monday first.
//!
//! ```text
//! name rank mon-open mon-close tue-open tue-close ... sun-open sun-close
//! ```
//!
//! The rank token is the literal `supervisor` for supervisors; any
//! other token (conventionally `staff`) marks a regular employee. A
//! day off is written as a zero-width window, `Mon:00:00 Mon:00:00`.
//!
//! # Demand format
//!
//! Four tokens per shift; file order is assignment order.
//!
//! ```text
//! kind rank start end
//! ```
//!
//! # Example
//! ```
//! use shift_search::loader;
//!
//! let demand = loader::parse_demand("opening staff Mon:09:00 Mon:12:00").unwrap();
//! assert_eq!(demand[0].kind(), "opening");
//! ```

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{Availability, DayAvailability, Employee, Shift, WeekTime, Weekday};

/// A fault in external input, reported before any search state exists.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A record ended before all its fields appeared.
    #[error("{record} record starting at '{name}' is truncated")]
    Truncated { record: &'static str, name: String },
    /// A time token is not `Ddd:HH:MM` with a valid clock.
    #[error("unparsable time token '{token}'")]
    BadTime { token: String },
    /// The day part of a time token is not `Mon` through `Sun`.
    #[error("unknown weekday in '{token}'")]
    BadWeekday { token: String },
    /// A parsed window violated a structural invariant.
    #[error(transparent)]
    Invalid(#[from] ScheduleError),
}

/// Reads and parses a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Employee>, LoadError> {
    let text = read(path.as_ref())?;
    let roster = parse_roster(&text)?;
    debug!(employees = roster.len(), "roster loaded");
    Ok(roster)
}

/// Reads and parses a demand file.
pub fn load_demand(path: impl AsRef<Path>) -> Result<Vec<Shift>, LoadError> {
    let text = read(path.as_ref())?;
    let demand = parse_demand(&text)?;
    debug!(shifts = demand.len(), "demand loaded");
    Ok(demand)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parses roster text: sixteen tokens per employee.
pub fn parse_roster(text: &str) -> Result<Vec<Employee>, LoadError> {
    let mut tokens = text.split_whitespace();
    let mut roster = Vec::new();
    while let Some(name) = tokens.next() {
        let supervisor = is_supervisor_token(next_field(&mut tokens, "roster", name)?);
        let mut window = || -> Result<DayAvailability, LoadError> {
            let open = parse_week_time(next_field(&mut tokens, "roster", name)?)?;
            let close = parse_week_time(next_field(&mut tokens, "roster", name)?)?;
            Ok(DayAvailability::new(open, close)?)
        };
        let days = [
            window()?,
            window()?,
            window()?,
            window()?,
            window()?,
            window()?,
            window()?,
        ];
        let availability = Availability::new(days)?;
        roster.push(Employee::new(name, supervisor, availability));
    }
    Ok(roster)
}

/// Parses demand text: four tokens per shift, in assignment order.
pub fn parse_demand(text: &str) -> Result<Vec<Shift>, LoadError> {
    let mut tokens = text.split_whitespace();
    let mut demand = Vec::new();
    while let Some(kind) = tokens.next() {
        let requires_supervisor = is_supervisor_token(next_field(&mut tokens, "demand", kind)?);
        let start = parse_week_time(next_field(&mut tokens, "demand", kind)?)?;
        let end = parse_week_time(next_field(&mut tokens, "demand", kind)?)?;
        demand.push(Shift::new(kind, requires_supervisor, start, end));
    }
    Ok(demand)
}

/// Only the exact literal `supervisor` grants the rank; everything
/// else, typos included, reads as staff.
fn is_supervisor_token(token: &str) -> bool {
    token == "supervisor"
}

fn next_field<'a, I>(tokens: &mut I, record: &'static str, name: &str) -> Result<&'a str, LoadError>
where
    I: Iterator<Item = &'a str>,
{
    tokens.next().ok_or_else(|| LoadError::Truncated {
        record,
        name: name.to_string(),
    })
}

/// Parses one `Ddd:HH:MM` token.
fn parse_week_time(token: &str) -> Result<WeekTime, LoadError> {
    let bad_time = || LoadError::BadTime {
        token: token.to_string(),
    };
    let (day_part, clock) = token.split_once(':').ok_or_else(bad_time)?;
    let weekday = weekday_from_abbrev(day_part).ok_or_else(|| LoadError::BadWeekday {
        token: token.to_string(),
    })?;
    let (hh, mm) = clock.split_once(':').ok_or_else(bad_time)?;
    let hour: u8 = hh.parse().map_err(|_| bad_time())?;
    let minute: u8 = mm.parse().map_err(|_| bad_time())?;
    if hour > 23 || minute > 59 {
        return Err(bad_time());
    }
    Ok(WeekTime::new(weekday, hour, minute))
}

fn weekday_from_abbrev(abbrev: &str) -> Option<Weekday> {
    Weekday::ALL.iter().copied().find(|d| d.abbrev() == abbrev)
}
