//! Prize catalog models

use serde::{Deserialize, Serialize};

/// Rarity tier of a case item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    /// Unknown tags from the service fold to common
    #[serde(other)]
    Common,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Legendary => "legendary",
            Rarity::Epic => "epic",
            Rarity::Rare => "rare",
            Rarity::Common => "common",
        }
    }
}

/// What a won item does to the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    /// Credits `value` to the wallet balance (wire tag `balance`)
    #[serde(rename = "balance")]
    Currency,
    /// Replaces the account's privilege tag
    Privilege,
    /// Purely decorative; unknown tags fold here
    #[serde(other)]
    Cosmetic,
}

/// One entry of the daily case prize catalog
///
/// Immutable once fetched. `chance` is the server-side drop weight, carried
/// for display only — the draw itself happens on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rarity: Rarity,
    #[serde(rename = "type")]
    pub kind: RewardKind,
    /// Currency amount; meaningful only when `kind` is `Currency`
    #[serde(default)]
    pub value: i64,
    #[serde(default)]
    pub chance: f64,
    #[serde(default)]
    pub icon: String,
}

/// Response from `GET ?action=items`
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub items: Vec<PrizeItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_item() {
        let raw = r#"{
            "id": 7,
            "name": "1000 рублей",
            "description": "На баланс",
            "rarity": "epic",
            "type": "balance",
            "value": 1000,
            "chance": 2.5,
            "icon": "Coins"
        }"#;
        let item: PrizeItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.rarity, Rarity::Epic);
        assert_eq!(item.kind, RewardKind::Currency);
        assert_eq!(item.value, 1000);
    }

    #[test]
    fn unknown_tags_fold_to_defaults() {
        let raw = r#"{
            "id": 1,
            "name": "Mystery Sticker",
            "rarity": "mythic",
            "type": "sticker"
        }"#;
        let item: PrizeItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.rarity, Rarity::Common);
        assert_eq!(item.kind, RewardKind::Cosmetic);
        assert_eq!(item.value, 0);
        assert!(item.description.is_empty());
    }
}
