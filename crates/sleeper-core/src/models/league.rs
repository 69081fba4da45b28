use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::ApiError;

/// A validated league identifier.
///
/// Sleeper league ids are large integers transmitted as strings. The only
/// static check performed anywhere in the client is that the id parses as an
/// integer; everything else surfaces as a not-found at request time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LeagueId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i128 = trimmed
            .parse()
            .map_err(|_| ApiError::InvalidLeagueId(s.to_string()))?;
        Ok(Self(value.to_string()))
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// League settings as returned by `GET /league/{id}`.
///
/// Only the identifying fields are modeled. The full object, scoring rules and
/// roster positions included, is kept in API order and shown as a field bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct League {
    pub league_id: String,
    pub name: String,
    pub season: Option<String>,
    pub status: Option<String>,
    pub total_rosters: Option<u32>,
    raw: Map<String, Value>,
}

#[derive(Deserialize)]
struct LeagueHeader {
    league_id: String,
    #[serde(default)]
    name: String,
    season: Option<String>,
    status: Option<String>,
    total_rosters: Option<u32>,
}

impl TryFrom<Map<String, Value>> for League {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let header = LeagueHeader::deserialize(Value::Object(raw.clone()))?;
        Ok(Self {
            league_id: header.league_id,
            name: header.name,
            season: header.season,
            status: header.status,
            total_rosters: header.total_rosters,
            raw,
        })
    }
}

impl From<League> for Map<String, Value> {
    fn from(league: League) -> Self {
        league.raw
    }
}

impl League {
    /// All fields of the league as `(name, json value)` pairs, in the order
    /// the API sent them.
    pub fn fields(&self) -> Vec<(String, Value)> {
        self.raw
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    pub fn season_display(&self) -> &str {
        self.season.as_deref().unwrap_or("")
    }
}
