//! Account refresh operations

use crate::AuthClient;
use dailycase_core::{Result, UserAccount};
use dailycase_persistence::AccountStore;

/// Full profile refresh: fetch the authoritative record and overwrite the
/// cached copy. Server state wins over any optimistic local reconciliation,
/// including a client-derived privilege tag.
pub async fn refresh_account(
    client: &AuthClient,
    store: &AccountStore,
    steam_id: &str,
) -> Result<UserAccount> {
    let account = client.fetch_profile(steam_id).await?;
    store.replace_from_server(account).await
}
