//! Request and response bodies of the `/api/v0/{learned,goals}` endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use learney_core::{ProgressKind, ProgressMap};

/// POST body. Exactly one of the two mappings is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpload {
    pub user_id: String,
    pub map_uuid: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learned_concepts: Option<ProgressMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_concepts: Option<ProgressMap>,
}

impl ProgressUpload {
    pub fn new(
        user_id: impl Into<String>,
        map_uuid: Uuid,
        session_id: Option<String>,
        kind: ProgressKind,
        map: &ProgressMap,
    ) -> Self {
        let mut upload = Self {
            user_id: user_id.into(),
            map_uuid,
            session_id,
            learned_concepts: None,
            goal_concepts: None,
        };
        match kind {
            ProgressKind::Learned => upload.learned_concepts = Some(map.clone()),
            ProgressKind::Goal => upload.goal_concepts = Some(map.clone()),
        }
        upload
    }
}

/// GET body. Only the field for the requested kind is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressResponse {
    #[serde(default)]
    pub learned_concepts: Option<ProgressMap>,
    #[serde(default)]
    pub goal_concepts: Option<ProgressMap>,
}

impl ProgressResponse {
    /// The mapping for `kind`; a body without it counts as no record.
    pub fn into_map(self, kind: ProgressKind) -> Option<ProgressMap> {
        match kind {
            ProgressKind::Learned => self.learned_concepts,
            ProgressKind::Goal => self.goal_concepts,
        }
    }
}
