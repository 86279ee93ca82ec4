//! Optimistic wallet reconciliation
//!
//! Applies a granted outcome to the cached account record immediately after
//! the reveal. The server already recorded the authoritative effect when it
//! answered the grant; this mirror only keeps the local display coherent
//! until the next full profile refresh overwrites it.

use chrono::{DateTime, Utc};
use dailycase_core::{RewardKind, SpinOutcome, UserAccount};

/// Client-side mirror of a privilege grant: the first whitespace token of
/// the item name, case-folded. Advisory only — the authoritative tag is
/// whatever the auth service reports on the next profile fetch.
pub fn normalize_privilege(name: &str) -> String {
    name.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Apply a granted outcome to the cached account record.
///
/// Always stamps `last_daily_spin`, regardless of reward kind.
pub fn apply_outcome(
    user: &UserAccount,
    outcome: &SpinOutcome,
    now: DateTime<Utc>,
) -> UserAccount {
    let mut updated = user.clone();
    match outcome.item.kind {
        RewardKind::Currency => updated.balance += outcome.item.value,
        RewardKind::Privilege => updated.privilege = normalize_privilege(&outcome.item.name),
        RewardKind::Cosmetic => {}
    }
    updated.last_daily_spin = Some(now);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailycase_core::{PrizeItem, Rarity};

    fn account() -> UserAccount {
        UserAccount {
            id: 1,
            steam_id: "76561198000000000".to_string(),
            username: "player".to_string(),
            avatar_url: String::new(),
            balance: 1000,
            privilege: "user".to_string(),
            play_time: 0,
            last_daily_spin: None,
        }
    }

    fn outcome(name: &str, kind: RewardKind, value: i64) -> SpinOutcome {
        SpinOutcome {
            item: PrizeItem {
                id: 1,
                name: name.to_string(),
                description: String::new(),
                rarity: Rarity::Rare,
                kind,
                value,
                chance: 5.0,
                icon: "Gift".to_string(),
            },
            granted_at: Utc::now(),
        }
    }

    #[test]
    fn currency_credits_the_balance() {
        let now = Utc::now();
        let updated = apply_outcome(&account(), &outcome("250 рублей", RewardKind::Currency, 250), now);
        assert_eq!(updated.balance, 1250);
        assert_eq!(updated.privilege, "user");
        assert_eq!(updated.last_daily_spin, Some(now));
    }

    #[test]
    fn privilege_sets_normalized_tag() {
        let now = Utc::now();
        let updated = apply_outcome(&account(), &outcome("VIP Month", RewardKind::Privilege, 0), now);
        assert_eq!(updated.privilege, "vip");
        assert_eq!(updated.balance, 1000);
    }

    #[test]
    fn cosmetic_only_stamps_the_spin() {
        let now = Utc::now();
        let updated = apply_outcome(&account(), &outcome("Golden Knife", RewardKind::Cosmetic, 0), now);
        assert_eq!(updated.balance, 1000);
        assert_eq!(updated.privilege, "user");
        assert_eq!(updated.last_daily_spin, Some(now));
    }

    #[test]
    fn normalization_takes_first_token_case_folded() {
        assert_eq!(normalize_privilege("VIP Month"), "vip");
        assert_eq!(normalize_privilege("Admin"), "admin");
        assert_eq!(normalize_privilege("  Moderator  role"), "moderator");
        assert_eq!(normalize_privilege(""), "");
    }
}
