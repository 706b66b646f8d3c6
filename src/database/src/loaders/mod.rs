pub mod events;
pub mod fighters;
pub mod fights;
pub mod pairs;
pub mod save;

pub use events::*;
pub use fighters::*;
pub use fights::*;
pub use pairs::*;
pub use save::*;

use crate::{DatabaseError, DatabaseResult};
use chrono::NaiveDate;
use log::warn;
use octagon_core::utils::DateUtils;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a JSON file, or returns the default when it does not exist yet.
pub(crate) fn read_json<T: DeserializeOwned + Default>(path: &Path) -> DatabaseResult<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    Ok(serde_json::from_str(&content)?)
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> DatabaseResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Booleans written as `true`, `1` or `"1"` by older saves.
pub(crate) fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => matches!(text.trim(), "1" | "true" | "True"),
        _ => false,
    })
}

/// Optional ids and slots. Older saves write a missing value as `""` and
/// numbers as `4` or `"4.0"`.
pub(crate) fn lenient_opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let whole = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().or_else(|| number.as_f64().and_then(whole_number)),
        Value::String(text) => text.trim().parse::<f64>().ok().and_then(whole_number),
        _ => None,
    };

    Ok(whole.and_then(|value| T::try_from(value).ok()))
}

fn whole_number(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64).then_some(value as u64)
}

/// A list stored either inline or as a JSON-encoded string. Anything that
/// does not decode is an empty list.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(decode_list(Value::deserialize(deserializer)?))
}

pub(crate) fn decode_list<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let value = match value {
        Value::String(encoded) => serde_json::from_str(&encoded).unwrap_or(Value::Null),
        other => other,
    };

    match value {
        Value::Array(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Enum stored under its serde name; unknown or blank text yields `None`.
pub(crate) fn parse_label<T: DeserializeOwned>(label: &str) -> Option<T> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    serde_json::from_value(Value::String(label.to_string())).ok()
}

pub(crate) fn label_of<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(Value::String(label)) => label,
        _ => String::new(),
    }
}

pub(crate) fn required_date(field: &'static str, value: &str) -> DatabaseResult<NaiveDate> {
    DateUtils::parse(value).ok_or_else(|| DatabaseError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

pub(crate) fn optional_date(field: &'static str, value: &str) -> Option<NaiveDate> {
    let date = DateUtils::parse(value);
    if date.is_none() && !value.trim().is_empty() {
        warn!("ignoring malformed {}: '{}'", field, value);
    }
    date
}

pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.map(DateUtils::format).unwrap_or_default()
}
