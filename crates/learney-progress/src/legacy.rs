//! One-time cleanup of progress cached before accounts kept it server-side.
//!
//! Anonymous visitors keep local progress for one visit only. A signed-in
//! user's first session keeps it so it reaches their profile; later
//! sessions drop whatever an earlier anonymous visit left behind.

use learney_core::constants::{DELETE_STORED_PROGRESS_KEY, FLAG_TRUE, TRANSFERRED_TO_PROFILE_KEY};
use learney_core::errors::LearneyResult;
use learney_core::traits::IKeyValueStore;
use learney_core::{ProgressKind, UserIdentity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyOutcome {
    /// Local learned and goal mappings were removed.
    ClearedLocalProgress,
    /// First signed-in session; local progress kept for transfer.
    TransferredToProfile,
    Untouched,
}

fn flag_set(store: &dyn IKeyValueStore, key: &str) -> LearneyResult<bool> {
    Ok(store.get(key)?.as_deref() == Some(FLAG_TRUE))
}

fn clear_progress(store: &dyn IKeyValueStore) -> LearneyResult<()> {
    for kind in ProgressKind::ALL {
        store.remove(kind.storage_key())?;
    }
    Ok(())
}

/// Apply the cleanup rules for `identity` to the local store.
pub fn apply_legacy_cleanup(store: &dyn IKeyValueStore, identity: &UserIdentity) -> LearneyResult<LegacyOutcome> {
    let outcome = match identity {
        UserIdentity::Anonymous => {
            let cleared = flag_set(store, DELETE_STORED_PROGRESS_KEY)?;
            if cleared {
                clear_progress(store)?;
            }
            store.set(DELETE_STORED_PROGRESS_KEY, FLAG_TRUE)?;
            if cleared {
                LegacyOutcome::ClearedLocalProgress
            } else {
                LegacyOutcome::Untouched
            }
        }
        UserIdentity::Identified(_) => {
            if store.get(TRANSFERRED_TO_PROFILE_KEY)?.is_none() {
                store.set(TRANSFERRED_TO_PROFILE_KEY, FLAG_TRUE)?;
                LegacyOutcome::TransferredToProfile
            } else if flag_set(store, DELETE_STORED_PROGRESS_KEY)? {
                clear_progress(store)?;
                LegacyOutcome::ClearedLocalProgress
            } else {
                LegacyOutcome::Untouched
            }
        }
    };

    tracing::debug!(outcome = ?outcome, anonymous = identity.is_anonymous(), "legacy cleanup applied");
    Ok(outcome)
}
