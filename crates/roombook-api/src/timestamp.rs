// Wire format for booking timestamps.
//
// The service stores UTC wall-clock values without an offset
// (`2024-06-01T14:00:00`). Outgoing values are always written that way;
// incoming values may also carry `Z` or an explicit offset, which is
// honoured. Use with `#[serde(with = "crate::timestamp")]`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Outgoing format: ISO-8601 local date-time, seconds precision, no offset.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const NAIVE_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Render a UTC instant in the service's wire format.
pub fn format(instant: &DateTime<Utc>) -> String {
    instant.format(WIRE_FORMAT).to_string()
}

/// Parse a wire timestamp. Offset-less values are taken to be UTC.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NAIVE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(instant))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw:?}")))
}
