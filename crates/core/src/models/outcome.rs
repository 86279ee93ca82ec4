//! Spin grant models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::PrizeItem;

/// Raw body of a successful `POST ?action=spin`
///
/// A 200 with no `item` field is a malformed grant; the client must treat
/// it as a transport-class failure and never animate it.
#[derive(Debug, Clone, Deserialize)]
pub struct SpinResponse {
    #[serde(default)]
    pub item: Option<PrizeItem>,
}

/// Body of the 429 lockout reply
#[derive(Debug, Clone, Deserialize)]
pub struct SpinLockoutResponse {
    #[serde(default)]
    pub error: String,
    /// Pre-formatted by the server; treated as an opaque display string
    #[serde(default)]
    pub time_left: String,
}

/// A granted prize plus the acknowledgement timestamp
///
/// Created only from a successful grant response, never fabricated
/// client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub item: PrizeItem,
    pub granted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_without_item_decodes_as_absent() {
        let resp: SpinResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(resp.item.is_none());
    }

    #[test]
    fn lockout_body_carries_opaque_countdown() {
        let raw = r#"{"error": "Daily limit reached", "time_left": "2ч 15м"}"#;
        let resp: SpinLockoutResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.time_left, "2ч 15м");
    }
}
