use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_ID;

/// Who the progress belongs to. Anonymous progress never leaves the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "user_id")]
pub enum UserIdentity {
    Anonymous,
    Identified(String),
}

impl UserIdentity {
    /// Build an identity from an optional user id. Missing, blank, and the
    /// front-end's placeholder id all mean anonymous.
    pub fn from_user_id(user_id: Option<&str>) -> Self {
        match user_id.map(str::trim) {
            None | Some("") | Some(DEFAULT_USER_ID) => UserIdentity::Anonymous,
            Some(id) => UserIdentity::Identified(id.to_string()),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, UserIdentity::Anonymous)
    }

    /// The user id sent to the remote API, if any.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            UserIdentity::Anonymous => None,
            UserIdentity::Identified(id) => Some(id),
        }
    }
}
