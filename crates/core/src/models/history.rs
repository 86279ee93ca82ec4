//! Spin history models (profile view, read-only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::Rarity;
use super::time::deserialize_timestamp;

/// One row of the profile view's spin history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseHistoryEntry {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub won_at: DateTime<Utc>,
    pub name: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub value: i64,
}

/// Response from `GET ?action=history&user_id=...`
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<CaseHistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_history_rows() {
        let raw = r#"{
            "history": [
                {"won_at": "2024-05-30T18:00:00", "name": "VIP Month", "rarity": "legendary", "value": 0},
                {"won_at": "2024-05-29T17:30:00", "name": "500 рублей", "rarity": "rare", "value": 500}
            ]
        }"#;
        let resp: HistoryResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.history.len(), 2);
        assert_eq!(resp.history[0].rarity, Rarity::Legendary);
        assert_eq!(resp.history[1].value, 500);
    }
}
