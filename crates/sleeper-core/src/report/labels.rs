use crate::models::PlayerDirectory;

/// Placeholder for an owner with no matching user
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Ids this short are taken to be team defenses (`"KC"`, `"SF"`).
/// A heuristic: the directory has no entry for defenses to confirm it.
const DEFENSE_ID_MAX_LEN: usize = 3;

/// Shown when a named player has no position
const UNKNOWN_POSITION: &str = "--";

/// `"P. Mahomes"`, or the raw id when the directory cannot name the player.
pub fn player_name(id: &str, players: &PlayerDirectory) -> String {
    players
        .get(id)
        .and_then(|p| p.short_name())
        .unwrap_or_else(|| id.to_string())
}

/// Starter label: `"QB: P. Mahomes"`, `"D/ST: KC"`, or the raw id.
pub fn starter_label(id: &str, players: &PlayerDirectory) -> String {
    if let Some(player) = players.get(id) {
        if let Some(name) = player.short_name() {
            let position = player.position.as_deref().unwrap_or(UNKNOWN_POSITION);
            return format!("{}: {}", position, name);
        }
    }

    if id.chars().count() <= DEFENSE_ID_MAX_LEN {
        format!("D/ST: {}", id)
    } else {
        id.to_string()
    }
}
