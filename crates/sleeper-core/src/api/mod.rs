//! REST API client module for the Sleeper fantasy football API.
//!
//! The API is public and read-only, so there is no authentication.
//!
//! - `ApiClient` issues live requests and is used directly for discovery
//!   (user lookup and a user's leagues).
//! - `LeagueClient` scopes an `ApiClient` to one league and puts the disk
//!   cache in front of every league resource.

pub mod client;
pub mod error;
pub mod league;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ApiResult};
pub use league::{LeagueClient, SEASON_WEEKS};
