use crate::models::{ProgressKind, ProgressMap};

/// Write-through sink the state engine flushes to after every mutation.
///
/// Saving never fails from the caller's point of view: implementations log
/// and swallow their own errors so a toggle always completes.
pub trait IProgressPersistence {
    fn save(&self, kind: ProgressKind, map: &ProgressMap);
}
