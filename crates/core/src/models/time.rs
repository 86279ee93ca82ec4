//! Timestamp decoding for service responses
//!
//! The backend emits `datetime.isoformat()` strings, which carry no UTC
//! offset. Accept both RFC 3339 and the naive form (assumed UTC) so a
//! profile or history payload never fails to decode on the timestamp.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

fn parse_service_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_service_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{}'", raw)))
}

pub(crate) fn deserialize_opt_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_service_timestamp(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let dt = parse_service_timestamp("2024-06-01T12:30:00+00:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-06-01T12:30:00+00:00");
    }

    #[test]
    fn parses_naive_iso_as_utc() {
        let dt = parse_service_timestamp("2024-06-01T12:30:00.123456").unwrap();
        assert_eq!(dt.timestamp(), 1717245000);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_service_timestamp("yesterday").is_none());
    }
}
