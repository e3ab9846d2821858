//! Shared labels, timestamp parsing, and lenient serde helpers for upstream records.

use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};

/// Bucket label used when a buyer or supplier name is absent.
pub const NOT_AVAILABLE: &str = "N/A";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exposes a stable identifier for upstream records.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Parses a creation timestamp into its calendar date.
///
/// Accepts RFC 3339 (offsets are normalised to UTC first), naive ISO date-times
/// with or without fractional seconds, and plain `YYYY-MM-DD` dates.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.with_timezone(&Utc).date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.date());
        }
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Maps an optional display name onto its bucket label.
pub fn label_or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(name) if !name.trim().is_empty() => name,
        _ => NOT_AVAILABLE,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

/// Deserializes a monetary amount sent as a number, a numeric string, or null.
///
/// Unparsable text and non-finite values collapse to `None`.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAmount>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawAmount::Number(value)) => Some(value),
        Some(RawAmount::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(value.filter(|amount| amount.is_finite()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCalendarNumber {
    Integer(i64),
    Text(String),
}

/// Deserializes a year or month sent either as a JSON integer or as a numeric string.
pub fn deserialize_calendar_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64>,
    <T as FromStr>::Err: Display,
{
    match RawCalendarNumber::deserialize(deserializer)? {
        RawCalendarNumber::Integer(value) => T::try_from(value)
            .map_err(|_| de::Error::custom(format!("calendar value {value} out of range"))),
        RawCalendarNumber::Text(text) => text
            .trim()
            .parse::<T>()
            .map_err(|err| de::Error::custom(format!("invalid calendar value `{text}`: {err}"))),
    }
}
