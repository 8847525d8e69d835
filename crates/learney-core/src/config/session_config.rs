use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::UserIdentity;

/// Who is using which map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Signed-in user id. Absent means an anonymous session.
    pub user_id: Option<String>,
    /// UUID of the knowledge map being viewed.
    pub map_uuid: Uuid,
    /// Front-end session id, forwarded with remote writes when present.
    pub session_id: Option<String>,
}

impl SessionConfig {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::from_user_id(self.user_id.as_deref())
    }
}
