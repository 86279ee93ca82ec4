//! Persisted account blob
//!
//! The cached user record is one serialized JSON blob under a fixed key in
//! the settings table, wrapped in a versioned envelope so a shape change
//! across releases reads as "not signed in" instead of crashing the session.

use dailycase_core::{Error, Result, UserAccount};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::warn;

/// Fixed storage key for the serialized account
const ACCOUNT_KEY: &str = "cs16_user";

/// Bump whenever the persisted shape changes
const ACCOUNT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoredAccount {
    version: u32,
    account: UserAccount,
}

/// Load the persisted account, if any.
///
/// A blob with a different schema version, or one that no longer decodes,
/// is discarded rather than surfaced as an error.
pub async fn load_account(pool: &SqlitePool) -> Result<Option<UserAccount>> {
    let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = ?")
        .bind(ACCOUNT_KEY)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;

    let Some((raw,)) = row else {
        return Ok(None);
    };

    match serde_json::from_str::<StoredAccount>(&raw) {
        Ok(stored) if stored.version == ACCOUNT_SCHEMA_VERSION => Ok(Some(stored.account)),
        Ok(stored) => {
            warn!(
                "Discarding persisted account with schema version {}",
                stored.version
            );
            Ok(None)
        }
        Err(e) => {
            warn!("Discarding undecodable persisted account: {}", e);
            Ok(None)
        }
    }
}

/// Write the account blob, replacing any previous one
pub async fn save_account(pool: &SqlitePool, account: &UserAccount) -> Result<()> {
    let stored = StoredAccount {
        version: ACCOUNT_SCHEMA_VERSION,
        account: account.clone(),
    };
    let raw = serde_json::to_string(&stored)?;

    sqlx::query(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = ?2",
    )
    .bind(ACCOUNT_KEY)
    .bind(raw)
    .execute(pool)
    .await
    .map_err(|e| Error::Storage(e.to_string()))?;

    Ok(())
}

/// Remove the account blob (logout)
pub async fn clear_account(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DELETE FROM settings WHERE key = ?")
        .bind(ACCOUNT_KEY)
        .execute(pool)
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;

    Ok(())
}
