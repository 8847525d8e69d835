use learney_core::traits::{IConceptGraph, IProgressPersistence};

/// What every engine operation runs against: the graph it reads and the
/// sink it flushes progress to. Owned by the host, borrowed per call.
#[derive(Clone, Copy)]
pub struct EngineContext<'a> {
    pub graph: &'a dyn IConceptGraph,
    pub persistence: &'a dyn IProgressPersistence,
}

impl<'a> EngineContext<'a> {
    pub fn new(graph: &'a dyn IConceptGraph, persistence: &'a dyn IProgressPersistence) -> Self {
        Self { graph, persistence }
    }
}
