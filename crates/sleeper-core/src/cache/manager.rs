use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::LeagueId;

/// Consider cache stale after 6 days.
/// Sleeper finalizes a scoring week once a week, so anything older has missed a week.
pub const CACHE_STALE_DAYS: i64 = 6;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize cache payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Names one cached resource. The `Display` form is the file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKey<'a> {
    League(&'a LeagueId),
    Users(&'a LeagueId),
    Rosters(&'a LeagueId),
    Matchups(&'a LeagueId, u8),
    Players,
}

impl fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::League(id) => write!(f, "league_{}", id),
            CacheKey::Users(id) => write!(f, "users_{}", id),
            CacheKey::Rosters(id) => write!(f, "rosters_{}", id),
            CacheKey::Matchups(id, week) => write!(f, "matchups_{}_week_{}", id, week),
            CacheKey::Players => f.write_str("nfl_players"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.cached_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            let hours = minutes / 60;
            if minutes % 60 >= 30 {
                format!("{}h ago", hours + 1)
            } else {
                format!("{}h ago", hours)
            }
        } else {
            let days = minutes / 1440;
            if (minutes % 1440) / 60 >= 12 {
                format!("{}d ago", days + 1)
            } else {
                format!("{}d ago", days)
            }
        }
    }

    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Utc::now())
    }

    /// Stale strictly after `CACHE_STALE_DAYS`; an entry exactly at the boundary is fresh.
    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        now - self.cached_at > Duration::days(CACHE_STALE_DAYS)
    }
}

/// Stores raw JSON payloads under a single directory, one file per key.
#[derive(Debug, Clone)]
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(cache_dir: PathBuf) -> Result<Self, CacheError> {
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Load a cached payload.
    ///
    /// Missing, unreadable and malformed files all come back as `None` so the
    /// caller proceeds exactly as on a cold cache. The timestamp is the file's
    /// modification time.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<CachedData<T>> {
        let path = self.cache_path(key);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    debug!(cache = key, error = %e, "Unreadable cache file, treating as miss");
                }
                return None;
            }
        };

        let data: T = match serde_json::from_str(&contents) {
            Ok(data) => data,
            Err(e) => {
                debug!(cache = key, error = %e, "Corrupt cache file, treating as miss");
                return None;
            }
        };

        Some(CachedData {
            data,
            cached_at: Self::modified_at(&path),
        })
    }

    /// Write a payload, replacing any previous entry for `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<(), CacheError> {
        std::fs::create_dir_all(&self.cache_dir)?;
        let contents = serde_json::to_string_pretty(data)?;
        std::fs::write(self.cache_path(key), contents)?;
        debug!(cache = key, "Saved cache entry");
        Ok(())
    }

    /// Age of an entry for display, `None` when it is not cached.
    pub fn age_display(&self, key: &str) -> Option<String> {
        self.load::<serde_json::Value>(key)
            .map(|cached| cached.age_display())
    }

    /// Absent or unreadable entries count as stale.
    pub fn is_stale(&self, key: &str) -> bool {
        match self.load::<serde_json::Value>(key) {
            Some(cached) => cached.is_stale(),
            None => true,
        }
    }

    fn modified_at(path: &Path) -> DateTime<Utc> {
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        DateTime::<Utc>::from(modified)
    }
}

// ============================================================================
// Tests
// ============================================================================
