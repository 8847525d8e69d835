use crate::errors::LearneyResult;
use crate::models::{ProgressKind, ProgressMap};

/// The remote progress API for one user and one map.
pub trait IProgressRemote: Send + Sync {
    /// Fetch the latest stored mapping. `Ok(None)` means the remote holds no
    /// record for this user and map.
    fn fetch(&self, kind: ProgressKind) -> LearneyResult<Option<ProgressMap>>;

    /// Replace the stored mapping.
    fn push(&self, kind: ProgressKind, map: &ProgressMap) -> LearneyResult<()>;
}
