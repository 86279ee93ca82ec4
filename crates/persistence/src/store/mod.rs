//! Session-scoped account store
//!
//! Single mutable slot for the cached user record, created at session start
//! and cleared at logout. Two writers exist: the full profile refresh
//! (server wins on conflict) and the optimistic spin reconciliation, which
//! may only ever advance the last-spin stamp.

use crate::sqlite::{self, Database};
use dailycase_core::{Error, Result, UserAccount};
use std::sync::RwLock;
use tracing::debug;

pub struct AccountStore {
    db: Database,
    current: RwLock<Option<UserAccount>>,
}

impl AccountStore {
    /// Open the store, reading any persisted account from a prior session
    pub async fn open(db: Database) -> Result<Self> {
        let cached = sqlite::load_account(db.pool()).await?;
        if let Some(ref account) = cached {
            debug!("Restored persisted account for {}", account.username);
        }
        Ok(Self {
            db,
            current: RwLock::new(cached),
        })
    }

    /// Snapshot of the cached record
    pub fn current(&self) -> Option<UserAccount> {
        self.current.read().ok()?.clone()
    }

    /// Replace the cached record with the authoritative server copy.
    ///
    /// This is the "server wins" path: it overwrites any optimistic local
    /// guess, including a privilege tag derived client-side.
    pub async fn replace_from_server(&self, account: UserAccount) -> Result<UserAccount> {
        sqlite::save_account(self.db.pool(), &account).await?;
        if let Ok(mut slot) = self.current.write() {
            *slot = Some(account.clone());
        }
        Ok(account)
    }

    /// Commit an optimistically reconciled record.
    ///
    /// Refuses to move the last-spin stamp backward; it advances only as a
    /// direct consequence of a granted spin.
    pub async fn commit_reconciled(&self, account: UserAccount) -> Result<UserAccount> {
        if let Some(existing) = self.current() {
            let moves_backward = match (existing.last_daily_spin, account.last_daily_spin) {
                (Some(old), Some(new)) => new < old,
                (Some(_), None) => true,
                _ => false,
            };
            if moves_backward {
                return Err(Error::InvalidData(
                    "reconciled account would move last-spin stamp backward".to_string(),
                ));
            }
        }

        sqlite::save_account(self.db.pool(), &account).await?;
        if let Ok(mut slot) = self.current.write() {
            *slot = Some(account.clone());
        }
        Ok(account)
    }

    /// Drop the cached record and its persisted blob (logout)
    pub async fn clear(&self) -> Result<()> {
        sqlite::clear_account(self.db.pool()).await?;
        if let Ok(mut slot) = self.current.write() {
            *slot = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

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

    async fn open_store() -> AccountStore {
        let db = Database::connect_in_memory().await.unwrap();
        AccountStore::open(db).await.unwrap()
    }

    #[tokio::test]
    async fn server_refresh_overwrites_local_guess() {
        let store = open_store().await;

        let mut optimistic = account();
        optimistic.privilege = "vip".to_string();
        optimistic.last_daily_spin = Some(Utc::now());
        store.commit_reconciled(optimistic).await.unwrap();

        let mut authoritative = account();
        authoritative.privilege = "admin".to_string();
        authoritative.balance = 2000;
        store
            .replace_from_server(authoritative.clone())
            .await
            .unwrap();

        assert_eq!(store.current().unwrap(), authoritative);
    }

    #[tokio::test]
    async fn refuses_backward_spin_stamp() {
        let store = open_store().await;
        let now = Utc::now();

        let mut first = account();
        first.last_daily_spin = Some(now);
        store.commit_reconciled(first.clone()).await.unwrap();

        let mut rewound = account();
        rewound.last_daily_spin = Some(now - Duration::hours(1));
        assert!(store.commit_reconciled(rewound).await.is_err());

        let mut cleared = account();
        cleared.last_daily_spin = None;
        assert!(store.commit_reconciled(cleared).await.is_err());

        assert_eq!(store.current().unwrap().last_daily_spin, Some(now));
    }

    #[tokio::test]
    async fn clear_removes_cached_and_persisted_state() {
        let store = open_store().await;
        store.replace_from_server(account()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.current().is_none());
        assert!(sqlite::load_account(store.db.pool()).await.unwrap().is_none());
    }
}
