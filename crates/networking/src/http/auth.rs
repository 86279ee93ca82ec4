//! HTTP client for the auth service
//!
//! Only the profile read is wired here: the Steam OpenID login dance is
//! handled by the hosting shell, which hands the resulting account to the
//! store. The profile read is the authoritative refresh that overwrites
//! any optimistic local state.

use dailycase_core::{Error, ProfileResponse, Result, UserAccount};
use reqwest::Client;
use tracing::{debug, error, instrument};

use super::USER_AGENT_VALUE;

/// HTTP client for the auth service
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
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

    /// Fetch the authoritative account record
    /// (`GET ?action=profile&steam_id=...`)
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, steam_id: &str) -> Result<UserAccount> {
        let url = format!("{}/?action=profile&steam_id={}", self.base_url, steam_id);

        debug!("Fetching profile from: {}", url);

        let response = self.http.get(&url).send().await?;

        let response = response.error_for_status().map_err(|e| {
            error!("Profile request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let data: ProfileResponse = response.json().await.map_err(|e| {
            error!("Failed to parse profile response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        debug!("Profile fetched for {}", data.user.username);
        Ok(data.user)
    }
}
