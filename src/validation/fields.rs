//! Field-level predicates shared by the entity validators.
//!
//! Every predicate is total: malformed input yields `false`, never a panic.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;
use serde_json::Value;

/// One `@`, no whitespace, and a dotted domain with a non-empty last label.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX is a valid regex pattern")
});

/// US ZIP code, either `12345` or `12345-6789`.
static ZIP_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{5}(-\d{4})?$").expect("ZIP_CODE_REGEX is a valid regex pattern")
});

const PHONE_DIGITS: usize = 10;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Checks the general shape of an email address.
///
/// ```
/// use shelter::validation::validate_email;
///
/// assert!(validate_email("test@example.com"));
/// assert!(!validate_email("invalid-email"));
/// ```
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True when the input holds exactly ten digits once every other character
/// is stripped, so `(555) 123-4567` passes.
pub fn validate_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() == PHONE_DIGITS
}

/// True when the text parses as a calendar date that is not the epoch origin.
pub fn validate_date(value: &str) -> bool {
    parse_date(value).is_some_and(|parsed| parsed.timestamp_millis() != 0)
}

/// True when the value, rendered as text and trimmed, is non-empty.
///
/// Arrays render as their elements joined by commas, so `[" "]` is blank
/// while `["", ""]` renders as `","` and counts as filled in.
pub fn validate_required(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(_) => true,
        other => !render_text(other).trim().is_empty(),
    }
}

/// True when the value is absent or its length does not exceed `max`.
///
/// Strings are measured in characters, numbers and booleans by their text
/// rendering, arrays by element count.
pub fn validate_length(value: Option<&Value>, max: usize) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Object(_)) => true,
        Some(Value::Array(items)) => items.len() <= max,
        Some(scalar) => as_text(scalar).is_none_or(|text| text.chars().count() <= max),
    }
}

pub fn validate_zip_code(zip: &str) -> bool {
    ZIP_CODE_REGEX.is_match(zip)
}

/// Parses the accepted date spellings into a UTC instant.
///
/// Date-only inputs resolve to midnight UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    parse_with_offset(value).map(|parsed| parsed.with_timezone(&Utc))
}

/// Calendar day as written, before any conversion to UTC, so
/// `2024-06-15T20:00:00-07:00` stays on the 15th.
pub fn parse_calendar_day(value: &str) -> Option<NaiveDate> {
    parse_with_offset(value).map(|parsed| parsed.date_naive())
}

/// Inputs without an offset are read as UTC.
fn parse_with_offset(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.and_utc().fixed_offset());
        }
    }

    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc().fixed_offset())
    })
}

/// Text rendering of a scalar JSON value; arrays and objects have none.
pub(crate) fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) => Some(Cow::Owned(number.to_string())),
        Value::Bool(flag) => Some(Cow::Owned(flag.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text rendering of any value: scalars as by [`as_text`], null as empty,
/// arrays as their rendered elements joined by commas.
pub(crate) fn render_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(render_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed("[object]"),
        scalar => as_text(scalar).unwrap_or_default(),
    }
}

/// Numeric reading of a value, accepting numeric strings.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
