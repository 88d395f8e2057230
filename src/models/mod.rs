pub mod event;
pub mod notification;
pub mod user;
pub mod volunteer;

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::validation::{Record, as_text, parse_calendar_day, render_text};

/// Turns a record that already passed validation into a typed payload.
pub(crate) fn decode<T: DeserializeOwned>(record: Record) -> Result<T, AppError> {
    serde_path_to_error::deserialize(Value::Object(record)).map_err(|err| {
        let path = err.path().to_string();
        AppError::InvalidJson(format!("{path}: {}", err.into_inner()))
    })
}

/// Calendar day of a date string accepted by `validate_date`, in the
/// offset it was written with.
pub(crate) fn calendar_day(value: &str) -> Result<NaiveDate, AppError> {
    parse_calendar_day(value)
        .ok_or_else(|| AppError::InvalidJson(format!("'{value}' is not a date")))
}

/// Reads any JSON value as text, the way the validators see it, so a
/// numeric `zip_code` that validated is not rejected on decode. Objects,
/// which the validators never render, keep their JSON form.
pub(crate) fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(&value))
}

pub(crate) fn optional_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .filter(|value| !value.is_null())
        .map(|value| value_text(&value)))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Object(_) => value.to_string(),
        other => render_text(other).into_owned(),
    }
}

/// Array elements as text; scalars as the validators render them, anything
/// else as its JSON form. Null elements are skipped.
pub(crate) fn scalar_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .iter()
        .filter(|item| !item.is_null())
        .map(|item| as_text(item).map_or_else(|| item.to_string(), Cow::into_owned))
        .collect())
}

/// Trims a string, mapping blank input to `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
