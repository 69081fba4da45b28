use std::collections::HashMap;

use super::{player_name, starter_label, Table, UNKNOWN_OWNER};
use crate::models::{PlayerDirectory, Roster, User};

/// Names shown per roster row before the list is cut with an ellipsis.
pub const ROSTER_NAME_LIMIT: usize = 10;

/// Cross-references rosters with league users and the player directory.
pub struct RosterJoinEngine<'a> {
    owners: HashMap<&'a str, &'a User>,
    players: &'a PlayerDirectory,
}

impl<'a> RosterJoinEngine<'a> {
    pub fn new(users: &'a [User], players: &'a PlayerDirectory) -> Self {
        let owners = users.iter().map(|u| (u.user_id.as_str(), u)).collect();
        Self { owners, players }
    }

    pub fn players(&self) -> &'a PlayerDirectory {
        self.players
    }

    pub fn owner(&self, owner_id: Option<&str>) -> Option<&'a User> {
        owner_id.and_then(|id| self.owners.get(id).copied())
    }

    /// Display name of the owner, or `"Unknown"`.
    pub fn owner_name(&self, owner_id: Option<&str>) -> &'a str {
        self.owner(owner_id)
            .map(|u| u.display_name.as_str())
            .unwrap_or(UNKNOWN_OWNER)
    }

    /// Team name from the roster itself, falling back to the owner's profile.
    pub fn team_name(&self, roster: &'a Roster) -> Option<&'a str> {
        roster
            .metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref())
            .or_else(|| self.owner(roster.owner_id.as_deref()).and_then(User::team_name))
    }

    /// Every player on the roster as `"P. Mahomes"` or the raw id.
    pub fn player_names(&self, roster: &Roster) -> Vec<String> {
        roster
            .players
            .iter()
            .map(|id| player_name(id, self.players))
            .collect()
    }

    /// Position-qualified labels, one per id, in order.
    pub fn starter_labels(&self, ids: &[String]) -> Vec<String> {
        ids.iter().map(|id| starter_label(id, self.players)).collect()
    }

    /// Players cell of the roster view: the first `ROSTER_NAME_LIMIT` names,
    /// then `...` when the roster holds more.
    pub fn players_cell(&self, roster: &Roster) -> String {
        let names: Vec<String> = roster
            .players
            .iter()
            .take(ROSTER_NAME_LIMIT)
            .map(|id| player_name(id, self.players))
            .collect();

        let mut cell = names.join(", ");
        if roster.players.len() > ROSTER_NAME_LIMIT {
            cell.push_str(", ...");
        }
        cell
    }

    /// One row per roster: owner and players.
    pub fn roster_table(&self, rosters: &[Roster]) -> Table {
        let mut table = Table::new(["Owner", "Players"]);
        for roster in rosters {
            table.push_row(vec![
                self.owner_name(roster.owner_id.as_deref()).to_string(),
                self.players_cell(roster),
            ]);
        }
        table
    }

    /// Find a roster by owner user id, owner display name, or team-name prefix.
    /// Name comparisons ignore case.
    pub fn find_roster(&self, rosters: &'a [Roster], query: &str) -> Option<&'a Roster> {
        let query_lower = query.to_lowercase();
        rosters.iter().find(|&roster| {
            let owner = self.owner(roster.owner_id.as_deref());
            roster.owner_id.as_deref() == Some(query)
                || owner.is_some_and(|u| u.display_name.to_lowercase() == query_lower)
                || self
                    .team_name(roster)
                    .is_some_and(|t| t.to_lowercase().starts_with(&query_lower))
        })
    }

    /// A roster's starters as directory rows. Falls back to the full player
    /// list when the league has not set starters.
    pub fn lineup_table(&self, roster: &Roster) -> Table {
        let ids = if roster.starters.is_empty() {
            &roster.players
        } else {
            &roster.starters
        };

        let mut table = Table::new(["Position", "First Name", "Last Name", "Team"]);
        for id in ids {
            let row = match self.players.get(id.as_str()) {
                Some(player) if player.short_name().is_some() => vec![
                    player.position.clone().unwrap_or_default(),
                    player.first_name.clone().unwrap_or_default(),
                    player.last_name.clone().unwrap_or_default(),
                    player.team.clone().unwrap_or_default(),
                ],
                _ => vec![
                    String::new(),
                    starter_label(id, self.players),
                    String::new(),
                    String::new(),
                ],
            };
            table.push_row(row);
        }
        table
    }
}
