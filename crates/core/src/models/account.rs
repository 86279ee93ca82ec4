//! User account models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::deserialize_opt_timestamp;

fn default_privilege() -> String {
    "user".to_string()
}

/// Account record as recorded by the auth service
///
/// The authoritative copy lives server-side; the client holds a cached,
/// possibly stale mirror. The cached `last_daily_spin` never moves backward
/// and advances only when a spin is actually granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub steam_id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub balance: i64,
    #[serde(default = "default_privilege")]
    pub privilege: String,
    #[serde(default)]
    pub play_time: i64,
    #[serde(default, deserialize_with = "deserialize_opt_timestamp")]
    pub last_daily_spin: Option<DateTime<Utc>>,
}

/// Response from `GET ?action=profile&steam_id=...`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: UserAccount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_profile_with_naive_spin_timestamp() {
        let raw = r#"{
            "user": {
                "id": 3,
                "steam_id": "76561198000000000",
                "username": "player one",
                "avatar_url": "https://avatars.example/full.jpg",
                "balance": 1500,
                "privilege": "vip",
                "play_time": 3600,
                "last_daily_spin": "2024-06-01T09:15:00.000000"
            }
        }"#;
        let resp: ProfileResponse = serde_json::from_str(raw).unwrap();
        let spin = resp.user.last_daily_spin.unwrap();
        assert_eq!(spin.to_rfc3339(), "2024-06-01T09:15:00+00:00");
        assert_eq!(resp.user.balance, 1500);
    }

    #[test]
    fn decodes_profile_that_never_spun() {
        let raw = r#"{
            "user": {
                "id": 4,
                "steam_id": "76561198000000001",
                "username": "fresh",
                "last_daily_spin": null
            }
        }"#;
        let resp: ProfileResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.user.last_daily_spin.is_none());
        assert_eq!(resp.user.privilege, "user");
        assert_eq!(resp.user.balance, 0);
    }
}
