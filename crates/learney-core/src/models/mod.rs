mod identity;
mod map_document;
mod progress;

pub use identity::UserIdentity;
pub use map_document::{MapDocument, MapEdge, MapNode, NodeType};
pub use progress::{ProgressKind, ProgressMap};
