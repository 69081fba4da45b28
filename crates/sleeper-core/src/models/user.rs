use serde::{Deserialize, Serialize};

/// A league member (`GET /league/{id}/users`, `GET /user/{username}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub display_name: String,
    pub avatar: Option<String>,
    pub metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    pub team_name: Option<String>,
}

impl User {
    pub fn team_name(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.team_name.as_deref())
    }
}
