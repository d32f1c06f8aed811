/// Timestamp normalization to the report's `YYYY-MM-DD HH:mm` layout.
///
/// Input is either an already-parsed date/time or a string in one of the common ISO 8601
/// layouts. No timezone conversion is done: an offset-carrying input keeps the wall-clock time it
/// was written in.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;

use crate::{Error, ReportResult};

/// `strftime` layout of a normalized report timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Layouts tried, in order, for strings without a UTC offset.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Years `%Y` writes as exactly four digits, without a sign.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Anything [`parse_and_format_timestamp`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampInput {
    Text(String),
    DateTime(NaiveDateTime),
}

impl From<&str> for TimestampInput {
    fn from(s: &str) -> Self {
        TimestampInput::Text(s.to_string())
    }
}

impl From<String> for TimestampInput {
    fn from(s: String) -> Self {
        TimestampInput::Text(s)
    }
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(dt: NaiveDateTime) -> Self {
        TimestampInput::DateTime(dt)
    }
}

impl From<NaiveDate> for TimestampInput {
    fn from(d: NaiveDate) -> Self {
        TimestampInput::DateTime(d.and_time(NaiveTime::default()))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimestampInput {
    fn from(dt: DateTime<Tz>) -> Self {
        TimestampInput::DateTime(dt.naive_local())
    }
}

/// Parse `input` and format it with [`TIMESTAMP_FORMAT`]. Seconds are truncated.
///
/// Years outside `0000..=9999` are rejected since they cannot be written with four digits.
pub fn parse_and_format_timestamp(input: impl Into<TimestampInput>) -> ReportResult<String> {
    let input = input.into();
    let dt = match &input {
        TimestampInput::DateTime(dt) => *dt,
        TimestampInput::Text(s) => parse_str(s)?,
    };
    if !YEAR_RANGE.contains(&dt.year()) {
        let rejected = match &input {
            TimestampInput::DateTime(dt) => dt.to_string(),
            TimestampInput::Text(s) => s.trim().to_string(),
        };
        return Err(Error::FormatError(rejected));
    }
    let formatted = dt.format(TIMESTAMP_FORMAT).to_string();
    debug!("normalized timestamp {:?} -> {}", input, formatted);
    Ok(formatted)
}

fn parse_str(s: &str) -> ReportResult<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, DATE_LAYOUT)
        .map(|d| d.and_time(NaiveTime::default()))
        .map_err(|_| Error::FormatError(s.to_string()))
}
