/// User id the browser front-end reports for visitors who are not signed in.
pub const DEFAULT_USER_ID: &str = "default_user_id";

/// Prefix of every progress endpoint on the remote API.
pub const API_PREFIX: &str = "/api/v0";

// --- Local storage keys ---
pub const LEARNED_NODES_KEY: &str = "learnedNodes";
pub const GOAL_NODES_KEY: &str = "goalNodes";

/// Set once an anonymous visitor has been seen; their next visit starts clean.
pub const DELETE_STORED_PROGRESS_KEY: &str = "deleteStoredProgress";
/// Set the first time a signed-in user's local progress is handed to their profile.
pub const TRANSFERRED_TO_PROFILE_KEY: &str = "transferredToProfileOnce";

/// Value stored under the legacy flag keys.
pub const FLAG_TRUE: &str = "true";
