//! League discovery: username + partial league name to candidate leagues.
//!
//! The pipeline holds no state between calls:
//! 1. resolve the username to a user id (live)
//! 2. fetch that user's NFL leagues for the given season (live)
//! 3. keep leagues whose name contains the query, case-insensitively
//!
//! An unknown user or an empty match list is a normal outcome, not an error.
//! Transport failures still propagate.

use tracing::{debug, info};

use crate::api::{ApiClient, ApiResult};
use crate::models::League;
use crate::utils::contains_ignore_case;

/// A discovered league, enough to open a `LeagueClient` for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueSummary {
    pub league_id: String,
    pub name: String,
    pub season: String,
}

impl From<League> for LeagueSummary {
    fn from(league: League) -> Self {
        Self {
            season: league.season_display().to_string(),
            league_id: league.league_id,
            name: league.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    UnresolvedUser,
    NoMatches,
    /// Matches in the order the API returned them
    Matches(Vec<LeagueSummary>),
}

impl Discovery {
    /// Short status line for the negative outcomes
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            Discovery::UnresolvedUser => Some("Could not resolve user ID"),
            Discovery::NoMatches => Some("No matching leagues found"),
            Discovery::Matches(_) => None,
        }
    }
}

/// Keep leagues whose name contains `query` as a case-insensitive substring.
pub fn filter_by_name(leagues: Vec<League>, query: &str) -> Vec<League> {
    leagues
        .into_iter()
        .filter(|league| contains_ignore_case(&league.name, query))
        .collect()
}

#[derive(Debug, Clone)]
pub struct LeagueDirectory {
    api: ApiClient,
}

impl LeagueDirectory {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Run discovery for `username`, matching league names against `query`.
    ///
    /// `season` is supplied by the caller (normally the current calendar year).
    pub async fn search(&self, username: &str, query: &str, season: i32) -> ApiResult<Discovery> {
        let Some(user) = self.api.user(username).await? else {
            info!(username, "Could not resolve user");
            return Ok(Discovery::UnresolvedUser);
        };

        let leagues = self.api.user_leagues(&user.user_id, season).await?;
        debug!(user_id = %user.user_id, season, count = leagues.len(), "Fetched user leagues");

        let matches = filter_by_name(leagues, query);
        if matches.is_empty() {
            return Ok(Discovery::NoMatches);
        }

        Ok(Discovery::Matches(
            matches.into_iter().map(LeagueSummary::from).collect(),
        ))
    }
}
