//! Startup reconciliation between the local cache and the remote copy.

use learney_core::config::MergeStrategy;
use learney_core::{ProgressKind, ProgressMap};

/// What the remote said when asked for its copy.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCopy {
    /// No remote configured, or the session is anonymous.
    Unavailable,
    /// The fetch failed; treated like `Unavailable` but never pushed to.
    Failed,
    /// The remote holds no record for this user and map.
    Missing,
    Found(ProgressMap),
}

/// Where the reconciled mapping came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Local,
    Remote,
    Merged,
    Empty,
}

impl LoadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadSource::Local => "local",
            LoadSource::Remote => "remote",
            LoadSource::Merged => "merged",
            LoadSource::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub map: ProgressMap,
    pub source: LoadSource,
    /// The remote copy is missing or diverged and should receive `map`.
    pub push_to_remote: bool,
}

impl Reconciled {
    fn new(map: ProgressMap, source: LoadSource, push_to_remote: bool) -> Self {
        Self {
            map,
            source,
            push_to_remote,
        }
    }
}

/// Pick the mapping to start from.
///
/// Without a usable remote copy the local copy is used as is. When the
/// remote has no record, a non-empty local copy is pushed to it. When both
/// exist, `strategy` decides, and the remote is only written when the result
/// differs from what it already holds.
pub fn reconcile(
    kind: ProgressKind,
    local: Option<ProgressMap>,
    remote: RemoteCopy,
    strategy: MergeStrategy,
) -> Reconciled {
    match (local, remote) {
        (Some(local), RemoteCopy::Unavailable | RemoteCopy::Failed) => {
            Reconciled::new(local, LoadSource::Local, false)
        }
        (None, RemoteCopy::Unavailable | RemoteCopy::Failed | RemoteCopy::Missing) => {
            Reconciled::new(ProgressMap::new(), LoadSource::Empty, false)
        }
        (Some(local), RemoteCopy::Missing) => {
            let push = !local.is_empty();
            Reconciled::new(local, LoadSource::Local, push)
        }
        (None, RemoteCopy::Found(remote)) => Reconciled::new(remote, LoadSource::Remote, false),
        (Some(local), RemoteCopy::Found(remote)) => {
            let remote_hash = remote.content_hash();
            if local.content_hash() == remote_hash {
                return Reconciled::new(local, LoadSource::Local, false);
            }
            match strategy {
                MergeStrategy::LocalWins => Reconciled::new(local, LoadSource::Local, true),
                MergeStrategy::RemoteWins => Reconciled::new(remote, LoadSource::Remote, false),
                MergeStrategy::Union => {
                    let merged = local.union(&remote, kind);
                    let push = merged.content_hash() != remote_hash;
                    Reconciled::new(merged, LoadSource::Merged, push)
                }
            }
        }
    }
}
