//! Catalog and history operations

use crate::CasesClient;
use dailycase_core::{CaseHistoryEntry, Result};
use dailycase_persistence::CatalogCache;
use tracing::debug;

/// Fetch the prize catalog into the session cache.
///
/// Called once at mount. If the cache is already filled this is a no-op;
/// on transport failure it propagates the error and leaves the cache
/// unfilled, so dependent UI keeps showing its loading affordance.
pub async fn load_catalog(client: &CasesClient, cache: &CatalogCache) -> Result<()> {
    if cache.is_loaded() {
        debug!("Catalog already loaded, skipping fetch");
        return Ok(());
    }

    let items = client.fetch_catalog().await?;
    cache.fill(items);
    Ok(())
}

/// Fetch the spin history for the profile view
pub async fn fetch_history(client: &CasesClient, user_id: i64) -> Result<Vec<CaseHistoryEntry>> {
    client.history(user_id).await
}
