//! Best-effort type inference for single field values.
//!
//! Classification, not validation: anything that does not parse as one of
//! the structured types falls through to [`DataTypeTag::String`].

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use super::models::DataTypeTag;

/// Infers the type tag of a single non-null value.
///
/// The value is trimmed, then checked in a fixed order: integer, decimal,
/// date, time, string. The first match wins, so `"2024"` is an integer and
/// never a date.
///
/// # Example
/// ```rust
/// use csvsurveyor_core::profile::{DataTypeTag, infer_type};
///
/// assert_eq!(infer_type("42"), DataTypeTag::Integer);
/// assert_eq!(infer_type("2024-03-15"), DataTypeTag::Date);
/// assert_eq!(infer_type("hello"), DataTypeTag::String);
/// ```
pub fn infer_type(value: &str) -> DataTypeTag {
    let value = value.trim();

    if is_integer(value) {
        DataTypeTag::Integer
    } else if is_decimal(value) {
        DataTypeTag::Decimal
    } else if is_date(value) {
        DataTypeTag::Date
    } else if is_time(value) {
        DataTypeTag::Time
    } else {
        DataTypeTag::String
    }
}

/// Optional sign followed by at least one ASCII digit, any length.
fn is_integer(value: &str) -> bool {
    let digits = value
        .strip_prefix(['+', '-'])
        .unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Anything `f64` accepts, including exponents and `inf`/`nan` spellings.
fn is_decimal(value: &str) -> bool {
    value.parse::<f64>().is_ok()
}

/// Strict `YYYY-MM-DD` with a real calendar date from year 1 onwards.
///
/// chrono alone accepts signed years and space-padded fields, so the digit
/// layout is checked first.
fn is_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let digits_at = |range: std::ops::Range<usize>| {
        bytes
            .get(range)
            .is_some_and(|field| field.iter().all(u8::is_ascii_digit))
    };

    bytes.len() == 10
        && digits_at(0..4)
        && bytes.get(4) == Some(&b'-')
        && digits_at(5..7)
        && bytes.get(7) == Some(&b'-')
        && digits_at(8..10)
        && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok_and(|date| date.year() >= 1)
}

/// Short `HH:MM:SS` value with a valid time of day.
///
/// Loose on field widths (`1:2:3` is accepted) but leap seconds are not.
fn is_time(value: &str) -> bool {
    value.contains(':')
        && value.len() <= 8
        && NaiveTime::parse_from_str(value, "%H:%M:%S")
            .is_ok_and(|time| time.nanosecond() < 1_000_000_000)
}
