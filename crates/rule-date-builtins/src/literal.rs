//! Typed literal values.
//!
//! A [`Literal`] is what the host engine hands us: a lexical form plus a
//! [`Datatype`] tag. [`Literal::value`] is the explicit conversion to a typed
//! [`LiteralValue`]; nothing in this crate inspects lexical forms any other way.
//!
//! # Lexical forms
//!
//! - `xsd:date` — `-?YYYY-MM-DD` with an optional timezone
//! - `xsd:dateTime` — `-?YYYY-MM-DDThh:mm:ss(.s+)?` with an optional timezone
//! - `xsd:dateTimeStamp` — as `xsd:dateTime`, timezone required
//! - integer family — `[+-]?[0-9]+`, limited to the `i64` range
//!
//! A timezone is `Z` or `(+|-)hh:mm` between `-14:00` and `+14:00`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::datatype::{Datatype, IntegerType};
use crate::error::{BuiltinError, Result};

// ── XsdDate ─────────────────────────────────────────────────────────────────

/// A calendar date with an optional timezone offset (`xsd:date`).
///
/// Equality follows XSD: two timezoned dates are equal when they start at the
/// same instant, two dates without timezone when they are the same day. A
/// timezoned date never equals one without.
#[derive(Debug, Clone, Copy)]
pub struct XsdDate {
    date: NaiveDate,
    offset: Option<FixedOffset>,
}

impl XsdDate {
    /// Returns `None` if the offset is not a whole number of minutes within
    /// `-14:00..=+14:00`.
    pub fn new(date: NaiveDate, offset: Option<FixedOffset>) -> Option<Self> {
        is_valid_offset(offset).then_some(Self { date, offset })
    }

    /// A date without timezone. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self { date, offset: None })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl PartialEq for XsdDate {
    fn eq(&self, other: &Self) -> bool {
        comparison_key(self.date.and_time(NaiveTime::MIN), self.offset)
            == comparison_key(other.date.and_time(NaiveTime::MIN), other.offset)
    }
}

impl Eq for XsdDate {}

impl Hash for XsdDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        comparison_key(self.date.and_time(NaiveTime::MIN), self.offset).hash(state);
    }
}

impl fmt::Display for XsdDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, self.date)?;
        write_offset(f, self.offset)
    }
}

impl FromStr for XsdDate {
    type Err = BuiltinError;

    fn from_str(s: &str) -> Result<Self> {
        let lexical = s.trim();
        let fail = |reason: &str| BuiltinError::invalid_lexical("xsd:date", s, reason);

        let (body, offset) = split_timezone(lexical).map_err(|r| fail(r.as_str()))?;
        let date = parse_date_body(body).map_err(|r| fail(r.as_str()))?;
        Ok(Self { date, offset })
    }
}

// ── XsdDateTime ─────────────────────────────────────────────────────────────

/// A date and time of day with an optional timezone offset (`xsd:dateTime`).
///
/// The datetime is kept in the value's own timezone, not normalized to UTC.
/// Equality compares instants when both values carry a timezone and
/// wall-clock time when neither does.
#[derive(Debug, Clone, Copy)]
pub struct XsdDateTime {
    datetime: NaiveDateTime,
    offset: Option<FixedOffset>,
}

impl XsdDateTime {
    /// Returns `None` if the offset is not a whole number of minutes within
    /// `-14:00..=+14:00`.
    pub fn new(datetime: NaiveDateTime, offset: Option<FixedOffset>) -> Option<Self> {
        is_valid_offset(offset).then_some(Self { datetime, offset })
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// Narrow to the calendar date, dropping time-of-day and keeping the timezone.
    pub fn to_date(&self) -> XsdDate {
        XsdDate {
            date: self.datetime.date(),
            offset: self.offset,
        }
    }
}

impl PartialEq for XsdDateTime {
    fn eq(&self, other: &Self) -> bool {
        comparison_key(self.datetime, self.offset) == comparison_key(other.datetime, other.offset)
    }
}

impl Eq for XsdDateTime {}

impl Hash for XsdDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        comparison_key(self.datetime, self.offset).hash(state);
    }
}

impl fmt::Display for XsdDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date(f, self.datetime.date())?;
        let time = self.datetime.time();
        write!(
            f,
            "T{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        )?;
        let nanos = time.nanosecond();
        if nanos != 0 {
            let frac = format!("{nanos:09}");
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        write_offset(f, self.offset)
    }
}

impl FromStr for XsdDateTime {
    type Err = BuiltinError;

    fn from_str(s: &str) -> Result<Self> {
        let lexical = s.trim();
        let fail = |reason: &str| BuiltinError::invalid_lexical("xsd:dateTime", s, reason);

        let (body, offset) = split_timezone(lexical).map_err(|r| fail(r.as_str()))?;
        let (date_part, time_part) = body
            .split_once('T')
            .ok_or_else(|| fail("missing 'T' separator"))?;
        let date = parse_date_body(date_part).map_err(|r| fail(r.as_str()))?;
        let (time, end_of_day) = parse_time_body(time_part).map_err(|r| fail(r.as_str()))?;

        let datetime = if end_of_day {
            // 24:00:00 is the first instant of the next day
            date.succ_opt()
                .ok_or_else(|| fail("date out of range"))?
                .and_time(NaiveTime::MIN)
        } else {
            date.and_time(time)
        };
        Ok(Self { datetime, offset })
    }
}

// ── Literal ─────────────────────────────────────────────────────────────────

/// The typed value of a literal, as far as this crate cares about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    Date(XsdDate),
    DateTime(XsdDateTime),
    Integer(i64),
    /// A well-formed literal of a datatype this crate does not interpret.
    Other,
}

/// A literal node payload: lexical form plus datatype tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    datatype: Datatype,
}

impl Literal {
    pub fn new(lexical: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
        }
    }

    /// An `xsd:date` literal in canonical form.
    pub fn date(date: XsdDate) -> Self {
        Self::new(date.to_string(), Datatype::Date)
    }

    /// An `xsd:dateTime` literal in canonical form.
    pub fn date_time(datetime: XsdDateTime) -> Self {
        Self::new(datetime.to_string(), Datatype::DateTime)
    }

    /// An `xsd:integer` literal.
    pub fn integer(value: i64) -> Self {
        Self::new(value.to_string(), Datatype::integer())
    }

    /// An `xsd:string` literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(value, Datatype::String)
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    /// Convert the lexical form to a typed value according to the datatype.
    ///
    /// # Errors
    ///
    /// Returns [`BuiltinError::InvalidLexical`] if the lexical form is not valid
    /// for a datatype this crate interprets. Datatypes it does not interpret
    /// always convert to [`LiteralValue::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_date_builtins::{Datatype, Literal, LiteralValue};
    ///
    /// let lit = Literal::new("42", Datatype::integer());
    /// assert_eq!(lit.value().unwrap(), LiteralValue::Integer(42));
    /// ```
    pub fn value(&self) -> Result<LiteralValue> {
        match &self.datatype {
            Datatype::Date => self.lexical.parse().map(LiteralValue::Date),
            Datatype::DateTime => self.lexical.parse().map(LiteralValue::DateTime),
            Datatype::DateTimeStamp => {
                let dt: XsdDateTime = self.lexical.parse()?;
                if dt.offset().is_none() {
                    return Err(BuiltinError::invalid_lexical(
                        self.datatype.short_name(),
                        &self.lexical,
                        "timezone is required",
                    ));
                }
                Ok(LiteralValue::DateTime(dt))
            }
            Datatype::Integer(kind) => {
                parse_integer(*kind, &self.lexical).map(LiteralValue::Integer)
            }
            _ => Ok(LiteralValue::Other),
        }
    }

    /// Value equality: literals that both convert to a typed value compare by
    /// that value, anything else compares by lexical form and datatype.
    pub fn same_value_as(&self, other: &Literal) -> bool {
        match (self.value(), other.value()) {
            (Ok(LiteralValue::Other), _) | (_, Ok(LiteralValue::Other)) => self == other,
            (Ok(a), Ok(b)) => a == b,
            _ => self == other,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"^^{}", self.lexical, self.datatype.short_name())
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Largest offset magnitude XSD allows, in seconds.
const MAX_OFFSET_SECS: i32 = 14 * 3600;

fn is_valid_offset(offset: Option<FixedOffset>) -> bool {
    offset.is_none_or(|o| {
        let secs = o.local_minus_utc();
        secs.abs() <= MAX_OFFSET_SECS && secs % 60 == 0
    })
}

/// Timezoned values compare as UTC instants, local values as wall-clock time.
/// The flag keeps the two kinds apart.
fn comparison_key(local: NaiveDateTime, offset: Option<FixedOffset>) -> (NaiveDateTime, bool) {
    match offset {
        Some(o) => {
            let utc = local
                .checked_sub_signed(chrono::Duration::seconds(o.local_minus_utc().into()))
                .unwrap_or(local);
            (utc, true)
        }
        None => (local, false),
    }
}

fn write_date(f: &mut fmt::Formatter<'_>, date: NaiveDate) -> fmt::Result {
    let year = date.year();
    if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())?;
    } else {
        write!(f, "{year:04}")?;
    }
    write!(f, "-{:02}-{:02}", date.month(), date.day())
}

fn write_offset(f: &mut fmt::Formatter<'_>, offset: Option<FixedOffset>) -> fmt::Result {
    let Some(offset) = offset else {
        return Ok(());
    };
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return f.write_str("Z");
    }
    let sign = if secs > 0 { '+' } else { '-' };
    let abs = secs.unsigned_abs();
    write!(f, "{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

/// Split a trailing `Z` or `(+|-)hh:mm` timezone off a lexical form.
fn split_timezone(s: &str) -> std::result::Result<(&str, Option<FixedOffset>), String> {
    if let Some(body) = s.strip_suffix('Z') {
        return Ok((body, FixedOffset::east_opt(0)));
    }

    let bytes = s.as_bytes();
    let n = bytes.len();
    if n < 6 || bytes[n - 3] != b':' || !matches!(bytes[n - 6], b'+' | b'-') {
        return Ok((s, None));
    }

    let tz = &s[n - 6..];
    let hours = parse_fixed_digits(&tz[1..3]).ok_or_else(|| format!("bad timezone '{tz}'"))?;
    let minutes = parse_fixed_digits(&tz[4..6]).ok_or_else(|| format!("bad timezone '{tz}'"))?;
    if minutes > 59 || hours > 14 || (hours == 14 && minutes != 0) {
        return Err(format!("timezone '{tz}' out of range"));
    }

    let secs = (hours * 3600 + minutes * 60) as i32;
    let secs = if bytes[n - 6] == b'-' { -secs } else { secs };
    let offset = FixedOffset::east_opt(secs).ok_or_else(|| format!("bad timezone '{tz}'"))?;
    Ok((&s[..n - 6], Some(offset)))
}

/// Parse `-?YYYY-MM-DD` (no timezone).
fn parse_date_body(s: &str) -> std::result::Result<NaiveDate, String> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let mut parts = rest.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return Err("expected YYYY-MM-DD".to_string());
    };

    if y.len() < 4 || (y.len() > 4 && y.starts_with('0')) {
        return Err(format!("bad year '{y}'"));
    }
    if m.len() != 2 || d.len() != 2 {
        return Err("month and day must have two digits".to_string());
    }

    let year: i32 = parse_fixed_digits(y)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| format!("bad year '{y}'"))?;
    if negative && year == 0 {
        return Err("year -0000 is not allowed".to_string());
    }
    let year = if negative { -year } else { year };
    let month = parse_fixed_digits(m).ok_or_else(|| format!("bad month '{m}'"))?;
    let day = parse_fixed_digits(d).ok_or_else(|| format!("bad day '{d}'"))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("no such date {year}-{month:02}-{day:02}"))
}

/// Parse `hh:mm:ss(.s+)?`. The flag is set for `24:00:00`.
fn parse_time_body(s: &str) -> std::result::Result<(NaiveTime, bool), String> {
    let (hms, frac) = match s.split_once('.') {
        Some((hms, frac)) => (hms, Some(frac)),
        None => (s, None),
    };

    let fields: Vec<&str> = hms.split(':').collect();
    if fields.len() != 3 || fields.iter().any(|f| f.len() != 2) {
        return Err(format!("expected hh:mm:ss, got '{s}'"));
    }
    let hour = parse_fixed_digits(fields[0]).ok_or("bad hour")?;
    let minute = parse_fixed_digits(fields[1]).ok_or("bad minute")?;
    let second = parse_fixed_digits(fields[2]).ok_or("bad second")?;

    let nanos = match frac {
        None => 0,
        Some(f) if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(format!("bad fractional seconds '{f}'"));
        }
        Some(f) => {
            // Keep nanosecond precision, ignore anything finer
            let mut digits: String = f.chars().take(9).collect();
            while digits.len() < 9 {
                digits.push('0');
            }
            digits.parse::<u32>().map_err(|e| e.to_string())?
        }
    };

    if hour == 24 {
        if minute == 0 && second == 0 && nanos == 0 {
            return Ok((NaiveTime::MIN, true));
        }
        return Err("24:00:00 is the only valid time with hour 24".to_string());
    }

    NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
        .map(|t| (t, false))
        .ok_or_else(|| format!("no such time '{s}'"))
}

/// Parse a string made only of ASCII digits.
fn parse_fixed_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse an integer-family lexical form and check the derived type's range.
fn parse_integer(kind: IntegerType, lexical: &str) -> Result<i64> {
    let fail = |reason: &str| {
        BuiltinError::invalid_lexical(format!("xsd:{}", kind.local_name()), lexical, reason)
    };

    let s = lexical.trim();
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail("expected an optionally signed run of digits"));
    }
    let value: i64 = s
        .strip_prefix('+')
        .unwrap_or(s)
        .parse()
        .map_err(|_| fail("outside the 64-bit integer range"))?;

    let (min, max) = kind.range();
    if value < min || value > max {
        return Err(fail("outside the range of the datatype"));
    }
    Ok(value)
}
