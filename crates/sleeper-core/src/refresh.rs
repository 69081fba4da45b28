//! Bulk cache refresh.
//!
//! Forces league, users, rosters and every week of matchups. The core
//! resources must succeed; a failing week is logged and skipped so one bad
//! week does not abort the sweep.

use tracing::{info, warn};

use crate::api::{ApiResult, LeagueClient, SEASON_WEEKS};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshSummary {
    pub weeks_refreshed: Vec<u8>,
    pub weeks_failed: Vec<(u8, String)>,
}

impl RefreshSummary {
    pub fn status_message(&self) -> String {
        if self.weeks_failed.is_empty() {
            "Cache refreshed!".to_string()
        } else {
            let weeks: Vec<String> = self.weeks_failed.iter().map(|(w, _)| w.to_string()).collect();
            format!("Cache refreshed (skipped weeks: {})", weeks.join(", "))
        }
    }
}

pub async fn refresh_all(client: &LeagueClient) -> ApiResult<RefreshSummary> {
    info!(league_id = %client.league_id(), "Refreshing league cache");

    client.league(true).await?;
    client.users(true).await?;
    client.rosters(true).await?;

    let mut summary = RefreshSummary::default();
    for week in SEASON_WEEKS {
        match client.matchups(week, true).await {
            Ok(_) => summary.weeks_refreshed.push(week),
            Err(e) => {
                warn!(week, error = %e, "Skipping week during refresh");
                summary.weeks_failed.push((week, e.to_string()));
            }
        }
    }

    info!(
        refreshed = summary.weeks_refreshed.len(),
        failed = summary.weeks_failed.len(),
        "Refresh complete"
    );
    Ok(summary)
}

/// Refresh only when the core cache entries are absent or stale.
/// Returns `None` when the cache was fresh enough to skip.
pub async fn refresh_if_stale(client: &LeagueClient) -> ApiResult<Option<RefreshSummary>> {
    if !client.is_cache_stale() {
        return Ok(None);
    }
    refresh_all(client).await.map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let clean = RefreshSummary {
            weeks_refreshed: (1..=18).collect(),
            weeks_failed: vec![],
        };
        assert_eq!(clean.status_message(), "Cache refreshed!");

        let partial = RefreshSummary {
            weeks_refreshed: vec![1, 2],
            weeks_failed: vec![(3, "Server error".into()), (18, "Server error".into())],
        };
        assert_eq!(partial.status_message(), "Cache refreshed (skipped weeks: 3, 18)");
    }
}
