//! Core library for the Sleeper fantasy football viewer.
//!
//! Fetches league data from the public Sleeper API through a disk cache and
//! joins it into display-ready tables and reports. Front ends call into
//! [`LeagueClient`], [`LeagueDirectory`] and the [`report`] builders and get
//! plain rows or text back.

pub mod api;
pub mod cache;
pub mod config;
pub mod directory;
pub mod models;
pub mod refresh;
pub mod report;
pub mod utils;

pub use api::{ApiClient, ApiError, ApiResult, LeagueClient, SEASON_WEEKS};
pub use cache::{CacheKey, CacheManager};
pub use config::Config;
pub use directory::{Discovery, LeagueDirectory, LeagueSummary};
pub use refresh::{refresh_all, refresh_if_stale, RefreshSummary};
