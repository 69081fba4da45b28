use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The full NFL player directory keyed by player id (`GET /players/nfl`).
pub type PlayerDirectory = HashMap<String, Player>;

/// An entry of the player directory.
///
/// Team defenses are not in the directory; rosters refer to them by team
/// abbreviation instead of a numeric id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
}

impl Player {
    /// `"<first-initial>. <last-name>"` when both names are present and non-empty.
    pub fn short_name(&self) -> Option<String> {
        let first = self.first_name.as_deref().filter(|s| !s.is_empty())?;
        let last = self.last_name.as_deref().filter(|s| !s.is_empty())?;
        let initial = first.chars().next()?;
        Some(format!("{}. {}", initial, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(first: Option<&str>, last: Option<&str>) -> Player {
        Player {
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_short_name() {
        assert_eq!(
            player(Some("Patrick"), Some("Mahomes")).short_name().as_deref(),
            Some("P. Mahomes")
        );
        assert_eq!(
            player(Some("Élan"), Some("Smith")).short_name().as_deref(),
            Some("É. Smith")
        );
    }

    #[test]
    fn test_short_name_requires_both_names() {
        assert!(player(Some("Patrick"), None).short_name().is_none());
        assert!(player(Some(""), Some("Mahomes")).short_name().is_none());
        assert!(player(Some("Patrick"), Some("")).short_name().is_none());
    }
}
