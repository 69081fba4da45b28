//! Denormalized views over the cached league data.
//!
//! These joins never fail: a missing user, roster or player degrades to a
//! placeholder so the rest of the view still renders.

pub mod labels;
pub mod league;
pub mod matchup;
pub mod roster;
pub mod table;

pub use labels::{player_name, starter_label, UNKNOWN_OWNER};
pub use league::{league_table, users_table};
pub use matchup::{HeadToHead, MatchupReportBuilder, MatchupSide};
pub use roster::{RosterJoinEngine, ROSTER_NAME_LIMIT};
pub use table::Table;
