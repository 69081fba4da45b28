//! Local caching module for offline data access.
//!
//! This module provides the `CacheManager` for storing and retrieving raw
//! Sleeper API payloads on disk. Each resource is one pretty-printed JSON
//! file named after its `CacheKey`, overwritten in full on refresh. An entry
//! is considered stale once its file is more than 6 days old.
//!
//! Cached resource kinds:
//! - League settings, users, rosters (per league)
//! - Matchups (per league and week)
//! - The NFL player directory (shared by all leagues)

pub mod manager;

pub use manager::{CacheError, CacheKey, CacheManager, CachedData, CACHE_STALE_DAYS};
