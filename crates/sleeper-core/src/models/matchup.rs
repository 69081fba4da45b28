use serde::{Deserialize, Serialize};

use super::roster::null_as_empty;

/// One roster's participation in a week (`GET /league/{id}/matchups/{week}`).
///
/// Records sharing a `matchup_id` played each other. `starters_points` is
/// position-aligned with `starters` and may be shorter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    pub matchup_id: Option<i64>,
    pub roster_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub starters_points: Vec<f64>,
    pub points: Option<f64>,
}

impl Matchup {
    pub fn starter_points(&self, slot: usize) -> Option<f64> {
        self.starters_points.get(slot).copied()
    }

    pub fn total_points(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }
}
