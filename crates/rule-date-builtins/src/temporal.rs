//! Pure calendar arithmetic behind the date builtins.
//!
//! Nothing here knows about nodes or bindings. Functions take typed values and
//! return typed values, so they can be tested and reused without a host engine.

use chrono::Days;

use crate::error::{BuiltinError, Result};
use crate::literal::{XsdDate, XsdDateTime};

/// A date-like input: a plain date, or a datetime whose date portion is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarInput {
    Date(XsdDate),
    DateTime(XsdDateTime),
}

impl CalendarInput {
    /// The calendar date in the value's own timezone, time-of-day dropped.
    pub fn to_date(&self) -> XsdDate {
        match self {
            CalendarInput::Date(d) => *d,
            CalendarInput::DateTime(dt) => dt.to_date(),
        }
    }
}

impl From<XsdDate> for CalendarInput {
    fn from(date: XsdDate) -> Self {
        CalendarInput::Date(date)
    }
}

impl From<XsdDateTime> for CalendarInput {
    fn from(datetime: XsdDateTime) -> Self {
        CalendarInput::DateTime(datetime)
    }
}

// ── add_days ────────────────────────────────────────────────────────────────

/// Shift a date by a whole number of days.
///
/// # Arguments
///
/// * `input` — A date or datetime. A datetime is first narrowed to its date in
///   its own timezone; the time-of-day never carries into the result.
/// * `days` — Days to add; negative values subtract.
///
/// # Returns
///
/// An [`XsdDate`] with the same timezone offset as the input (or none, if the
/// input had none). Month and year rollover and leap years follow the
/// proleptic Gregorian calendar.
///
/// # Errors
///
/// Returns [`BuiltinError::DateOutOfRange`] if the result falls outside the
/// representable date range.
///
/// # Examples
///
/// ```
/// use rule_date_builtins::temporal::add_days;
/// use rule_date_builtins::XsdDate;
///
/// let d = XsdDate::from_ymd(2020, 2, 28).unwrap();
/// assert_eq!(add_days(d, 1).unwrap().to_string(), "2020-02-29");
/// ```
pub fn add_days(input: impl Into<CalendarInput>, days: i64) -> Result<XsdDate> {
    let start = input.into().to_date();
    let magnitude = Days::new(days.unsigned_abs());

    let shifted = if days >= 0 {
        start.date().checked_add_days(magnitude)
    } else {
        start.date().checked_sub_days(magnitude)
    };

    shifted
        .and_then(|date| XsdDate::new(date, start.offset()))
        .ok_or_else(|| BuiltinError::DateOutOfRange(format!("{start} {days:+} days")))
}
