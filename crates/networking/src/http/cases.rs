//! HTTP client for the cases service
//!
//! The service multiplexes on an `action` query parameter: `items` for the
//! prize catalog, `spin` for the daily grant, `history` for the profile
//! view. The grant endpoint is the authoritative gate — it re-checks the
//! 24h window server-side and answers 429 with a pre-formatted countdown.

use chrono::Utc;
use dailycase_core::{
    CaseHistoryEntry, CatalogResponse, Error, HistoryResponse, PrizeItem, Result,
    SpinLockoutResponse, SpinOutcome, SpinResponse,
};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument};

use super::USER_AGENT_VALUE;

/// HTTP client for the cases service
pub struct CasesClient {
    http: Client,
    base_url: String,
}

impl CasesClient {
    /// Create a new client against the given service base URL
    pub fn new(base_url: &str) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full prize catalog (`GET ?action=items`)
    #[instrument(skip(self))]
    pub async fn fetch_catalog(&self) -> Result<Vec<PrizeItem>> {
        let url = format!("{}/?action=items", self.base_url);

        debug!("Fetching case catalog from: {}", url);

        let response = self.http.get(&url).send().await?;

        let response = response.error_for_status().map_err(|e| {
            error!("Catalog request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let data: CatalogResponse = response.json().await.map_err(|e| {
            error!("Failed to parse catalog response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Catalog fetched: {} items", data.items.len());
        Ok(data.items)
    }

    /// Request the daily grant (`POST ?action=spin`)
    ///
    /// Returns `Error::LockedOut` on the authoritative 429, carrying the
    /// server's opaque countdown string. A 200 without an `item` field is a
    /// malformed grant and is never surfaced as a prize.
    #[instrument(skip(self))]
    pub async fn spin(&self, user_id: i64) -> Result<SpinOutcome> {
        let url = format!("{}/?action=spin", self.base_url);

        debug!("Requesting daily spin for user {}", user_id);

        let body = serde_json::json!({ "user_id": user_id });
        let response = self.http.post(&url).json(&body).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let lockout: SpinLockoutResponse = response.json().await.map_err(|e| {
                error!("Failed to parse lockout response: {}", e);
                Error::InvalidData(e.to_string())
            })?;
            debug!("Spin rejected by server, {} remaining", lockout.time_left);
            return Err(Error::LockedOut {
                time_left: lockout.time_left,
            });
        }

        let response = response.error_for_status().map_err(|e| {
            error!("Spin request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let data: SpinResponse = response.json().await.map_err(|e| {
            error!("Failed to parse spin response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        let item = data.item.ok_or_else(|| {
            error!("Spin response carried no item");
            Error::MalformedResponse("grant response missing item".to_string())
        })?;

        debug!("Grant received: {} ({})", item.name, item.rarity.as_str());
        Ok(SpinOutcome {
            item,
            granted_at: Utc::now(),
        })
    }

    /// Fetch a user's spin history (`GET ?action=history&user_id=...`)
    #[instrument(skip(self))]
    pub async fn history(&self, user_id: i64) -> Result<Vec<CaseHistoryEntry>> {
        let url = format!("{}/?action=history&user_id={}", self.base_url, user_id);

        let response = self.http.get(&url).send().await?;

        let response = response.error_for_status().map_err(|e| {
            error!("History request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let data: HistoryResponse = response.json().await.map_err(|e| {
            error!("Failed to parse history response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Fetched {} history rows for user {}", data.history.len(), user_id);
        Ok(data.history)
    }
}
