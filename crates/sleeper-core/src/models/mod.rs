//! Data models for Sleeper entities.
//!
//! Every record fetched from the API is deserialized into one of these
//! structures. Fields the API may omit or send as `null` are `Option`s or
//! carry a `#[serde(default)]`, so joins never have to probe raw JSON.
//!
//! - `League`: league settings, with the full field bag kept in API order
//! - `User`: league member with display name and team name
//! - `Roster`: one team's players, owner and win-loss settings
//! - `Matchup`: one roster's weekly scoring record
//! - `Player`: an entry of the NFL player directory

pub mod league;
pub mod matchup;
pub mod player;
pub mod roster;
pub mod user;

pub use league::{League, LeagueId};
pub use matchup::Matchup;
pub use player::{Player, PlayerDirectory};
pub use roster::{Roster, RosterMetadata, RosterSettings};
pub use user::{User, UserMetadata};
