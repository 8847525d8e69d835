mod concept_graph;
mod key_value;
mod persistence;
mod remote;

pub use concept_graph::IConceptGraph;
pub use key_value::IKeyValueStore;
pub use persistence::IProgressPersistence;
pub use remote::IProgressRemote;
