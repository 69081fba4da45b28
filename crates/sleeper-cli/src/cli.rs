//! Command-line interface parsing for the Sleeper viewer.
//!
//! A league is opened either directly by id or by searching a user's leagues
//! by name. The two are mutually exclusive, and a non-numeric league id is
//! rejected here, before any network activity.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sleeper_core::api::DEFAULT_BASE_URL;
use sleeper_core::models::LeagueId;

/// Sleeper fantasy football league viewer
#[derive(Parser, Debug)]
#[command(name = "sleeper")]
#[command(about = "Sleeper fantasy football league viewer backed by a local cache")]
#[command(version)]
pub struct Cli {
    /// League ID to load directly
    #[arg(long = "id", value_name = "LEAGUE_ID", value_parser = parse_league_id, conflicts_with = "username")]
    pub league_id: Option<LeagueId>,

    /// Sleeper username to search leagues
    #[arg(long = "user", value_name = "USERNAME")]
    pub username: Option<String>,

    /// League name to match when searching by username (partial, case-insensitive)
    #[arg(long, value_name = "QUERY", requires = "username")]
    pub league_name: Option<String>,

    /// Directory holding cached API responses
    #[arg(long, value_name = "DIR", env = "SLEEPER_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Base URL of the Sleeper API
    #[arg(long, value_name = "URL", env = "SLEEPER_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Season used for league search (defaults to the current year)
    #[arg(long, value_name = "YEAR")]
    pub season: Option<i32>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Bypass the cache for the requested view
    #[arg(long)]
    pub force: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// League settings, one row per field
    League,
    /// League members
    Users,
    /// Rosters with owner and player names
    Rosters,
    /// Head-to-head scoreboard for a week
    Matchups {
        /// Week number (1-18)
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=18))]
        week: u8,

        /// One row per team instead of paired scoreboards
        #[arg(long)]
        by_team: bool,
    },
    /// Starting lineup of one team
    Lineup {
        /// Owner user id, display name, or team name prefix
        #[arg(long)]
        owner: String,
    },
    /// Re-fetch league, users, rosters and all weeks of matchups
    Refresh,
    /// Show the age of each cached resource
    Status,
}

impl Command {
    /// Whether a stale cache is refreshed before this command runs.
    /// `refresh` does the sweep itself and `status` reports ages as they are.
    pub fn refreshes_stale_cache(&self) -> bool {
        !matches!(self, Command::Refresh | Command::Status)
    }
}

/// Line printed under the discovery table when a command was requested but
/// the search did not narrow down to a single league.
pub fn ambiguous_search_hint(match_count: usize, command: Option<&Command>) -> Option<String> {
    match (match_count, command) {
        (n, Some(_)) if n > 1 => Some(format!(
            "{n} leagues match; rerun with --id <LEAGUE_ID> to pick one"
        )),
        _ => None,
    }
}

/// Validates `--id` so bad input fails with a usage error.
pub fn parse_league_id(s: &str) -> Result<LeagueId, String> {
    s.parse().map_err(|e: sleeper_core::ApiError| e.to_string())
}
