use super::Table;
use crate::models::{League, User};

/// One row per league field: name and JSON-encoded value.
pub fn league_table(league: &League) -> Table {
    let mut table = Table::new(["Field", "Value"]);
    for (field, value) in league.fields() {
        table.push_row(vec![field, value.to_string()]);
    }
    table
}

/// One row per league member.
pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new(["User ID", "Name", "Team Name"]);
    for user in users {
        table.push_row(vec![
            user.user_id.clone(),
            user.display_name.clone(),
            user.team_name().unwrap_or_default().to_string(),
        ]);
    }
    table
}
