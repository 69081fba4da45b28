//! League-scoped read-through client.

use std::ops::RangeInclusive;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use super::{ApiClient, ApiResult};
use crate::cache::{CacheKey, CacheManager};
use crate::models::{League, LeagueId, Matchup, PlayerDirectory, Roster, User};

/// Scoring weeks of an NFL fantasy season.
pub const SEASON_WEEKS: RangeInclusive<u8> = 1..=18;

/// Fetches one league's resources through the disk cache.
///
/// With `force == false` a cached payload is returned without touching the
/// network. Otherwise (or on a miss) the resource is fetched, written to the
/// cache, then returned. Fetch errors propagate; stale data is never served
/// in place of a failed request.
#[derive(Debug, Clone)]
pub struct LeagueClient {
    api: ApiClient,
    cache: CacheManager,
    league_id: LeagueId,
}

impl LeagueClient {
    /// Fails with `ApiError::InvalidLeagueId` before any I/O when `league_id`
    /// is not an integer string.
    pub fn new(api: ApiClient, cache: CacheManager, league_id: &str) -> ApiResult<Self> {
        let league_id = league_id.parse()?;
        Ok(Self::for_league(api, cache, league_id))
    }

    pub fn for_league(api: ApiClient, cache: CacheManager, league_id: LeagueId) -> Self {
        Self {
            api,
            cache,
            league_id,
        }
    }

    pub fn league_id(&self) -> &LeagueId {
        &self.league_id
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    async fn fetch_cached<T: DeserializeOwned>(
        &self,
        key: CacheKey<'_>,
        path: &str,
        force: bool,
    ) -> ApiResult<T> {
        let key = key.to_string();

        if !force {
            if let Some(cached) = self.cache.load::<Value>(&key) {
                match ApiClient::decode(path, cached.data) {
                    Ok(data) => {
                        debug!(cache = %key, "Cache hit");
                        return Ok(data);
                    }
                    Err(e) => {
                        debug!(cache = %key, error = %e, "Cached payload has unexpected shape, refetching");
                    }
                }
            }
        }

        info!(cache = %key, force, "Fetching from API");
        let value = self.api.get_json(path).await?;
        let data = ApiClient::decode(path, value.clone())?;
        self.cache.save(&key, &value)?;
        Ok(data)
    }

    async fn fetch_cached_list<T: DeserializeOwned>(
        &self,
        key: CacheKey<'_>,
        path: &str,
        force: bool,
    ) -> ApiResult<Vec<T>> {
        let list: Option<Vec<T>> = self.fetch_cached(key, path, force).await?;
        Ok(list.unwrap_or_default())
    }

    pub async fn league(&self, force: bool) -> ApiResult<League> {
        let path = ApiClient::league_path(&self.league_id);
        self.fetch_cached(CacheKey::League(&self.league_id), &path, force)
            .await
    }

    pub async fn users(&self, force: bool) -> ApiResult<Vec<User>> {
        let path = ApiClient::users_path(&self.league_id);
        self.fetch_cached_list(CacheKey::Users(&self.league_id), &path, force)
            .await
    }

    pub async fn rosters(&self, force: bool) -> ApiResult<Vec<Roster>> {
        let path = ApiClient::rosters_path(&self.league_id);
        self.fetch_cached_list(CacheKey::Rosters(&self.league_id), &path, force)
            .await
    }

    pub async fn matchups(&self, week: u8, force: bool) -> ApiResult<Vec<Matchup>> {
        let path = ApiClient::matchups_path(&self.league_id, week);
        self.fetch_cached_list(CacheKey::Matchups(&self.league_id, week), &path, force)
            .await
    }

    /// The NFL player directory. League-independent and never forced.
    pub async fn players(&self) -> ApiResult<PlayerDirectory> {
        self.fetch_cached(CacheKey::Players, ApiClient::PLAYERS_PATH, false)
            .await
    }

    /// Always live; see `ApiClient::user`.
    pub async fn user(&self, username: &str) -> ApiResult<Option<User>> {
        self.api.user(username).await
    }

    /// Always live; see `ApiClient::user_leagues`.
    pub async fn user_leagues(&self, user_id: &str, season: i32) -> ApiResult<Vec<League>> {
        self.api.user_leagues(user_id, season).await
    }

    /// Cache keys whose age decides whether a startup refresh is due.
    pub fn core_keys(&self) -> [CacheKey<'_>; 3] {
        [
            CacheKey::League(&self.league_id),
            CacheKey::Users(&self.league_id),
            CacheKey::Rosters(&self.league_id),
        ]
    }

    /// True when any core resource is absent or older than the stale threshold.
    pub fn is_cache_stale(&self) -> bool {
        self.core_keys()
            .iter()
            .any(|key| self.cache.is_stale(&key.to_string()))
    }
}
