use serde::{Deserialize, Serialize};

/// One competitor's team within a league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: i64,
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub players: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub starters: Vec<String>,
    #[serde(default)]
    pub settings: RosterSettings,
    pub metadata: Option<RosterMetadata>,
}

/// Season counters. Missing counters read as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterMetadata {
    pub team_name: Option<String>,
}

impl Roster {
    /// Win-loss record as `"<wins>-<losses>"`.
    pub fn record(&self) -> String {
        format!("{}-{}", self.settings.wins, self.settings.losses)
    }
}

/// Sleeper sends `null` instead of `[]` for empty player lists.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
