//! HTTP transport for the Sleeper API.
//!
//! `ApiClient` owns the `reqwest::Client` and knows the endpoint layout. It
//! never touches the cache; the two discovery lookups are served from here
//! directly and are therefore always live.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{ApiError, ApiResult};
use crate::models::{League, LeagueId, User};

// ============================================================================
// Constants
// ============================================================================

/// Versioned base URL of the public Sleeper API
pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

/// HTTP request timeout in seconds.
/// The player directory is several megabytes, so this is generous.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// API client for Sleeper.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the public API
    pub fn new() -> ApiResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against another base URL (mirrors, test servers)
    pub fn with_base_url(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("sleeper-core/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path and return the decoded JSON body.
    /// Any non-2xx status is an error.
    pub async fn get_json(&self, path: &str) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(url = %url, status = %status, "Request failed");
            return Err(ApiError::from_status(status, &body));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|source| ApiError::Parse { url, source })
    }

    /// Decode a payload already fetched from `path` into a typed record.
    pub fn decode<T: DeserializeOwned>(path: &str, value: Value) -> ApiResult<T> {
        serde_json::from_value(value).map_err(|source| ApiError::Parse {
            url: path.to_string(),
            source,
        })
    }

    // ===== Endpoint paths =====

    pub fn league_path(league_id: &LeagueId) -> String {
        format!("/league/{}", league_id)
    }

    pub fn users_path(league_id: &LeagueId) -> String {
        format!("/league/{}/users", league_id)
    }

    pub fn rosters_path(league_id: &LeagueId) -> String {
        format!("/league/{}/rosters", league_id)
    }

    pub fn matchups_path(league_id: &LeagueId, week: u8) -> String {
        format!("/league/{}/matchups/{}", league_id, week)
    }

    pub const PLAYERS_PATH: &'static str = "/players/nfl";

    // ===== Live lookups =====

    /// Look up a user by username.
    ///
    /// Sleeper answers an unknown username with `200 null`, so a missing user
    /// (or one without a `user_id`) is `Ok(None)` rather than an error.
    pub async fn user(&self, username: &str) -> ApiResult<Option<User>> {
        let path = format!("/user/{}", username);
        let value = self.get_json(&path).await?;
        let has_id = value
            .get("user_id")
            .and_then(Value::as_str)
            .is_some_and(|id| !id.is_empty());
        if !has_id {
            return Ok(None);
        }
        Self::decode(&path, value).map(Some)
    }

    /// All NFL leagues a user belongs to for a season, in API order.
    pub async fn user_leagues(&self, user_id: &str, season: i32) -> ApiResult<Vec<League>> {
        let path = format!("/user/{}/leagues/nfl/{}", user_id, season);
        let value = self.get_json(&path).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        Self::decode(&path, value)
    }
}
