//! Map documents: the node/edge JSON the graph-visualisation layer is fed with.
//!
//! Records arrive either flat (`{"id": "1", ...}`) or wrapped in a `data`
//! envelope (`{"data": {"id": "1", ...}, "position": {...}}`). Both shapes
//! are accepted; anything outside the fields below is ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::NodeId;

/// Whether a node is a learnable concept or a field grouping concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    #[default]
    Concept,
    Field,
}

/// A node of the knowledge map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: NodeId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub nodetype: NodeType,
    /// The field this concept belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default = "default_importance", deserialize_with = "importance_or_default")]
    pub relative_importance: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

fn default_importance() -> f64 {
    1.0
}

fn importance_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_importance))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MapNode {
    /// Minimal concept node, mostly useful for building graphs in code.
    pub fn concept(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodetype: NodeType::Concept,
            parent: None,
            relative_importance: default_importance(),
            urls: Vec::new(),
            description: String::new(),
        }
    }

    /// Minimal field node.
    pub fn field(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            nodetype: NodeType::Field,
            ..Self::concept(id, name)
        }
    }

    /// Attach this node to a parent field.
    pub fn with_parent(mut self, parent: impl Into<NodeId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn is_concept(&self) -> bool {
        self.nodetype == NodeType::Concept
    }
}

/// A prerequisite edge: `source` must be learned before `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEdge {
    pub source: NodeId,
    pub target: NodeId,
}

impl MapEdge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A complete map document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMapDocument")]
pub struct MapDocument {
    pub nodes: Vec<MapNode>,
    pub edges: Vec<MapEdge>,
}

impl MapDocument {
    pub fn new(nodes: Vec<MapNode>, edges: Vec<MapEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Parse a map document from JSON.
    pub fn from_json(json: &str) -> crate::errors::LearneyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Record<T> {
    Wrapped { data: T },
    Flat(T),
}

impl<T> Record<T> {
    fn into_inner(self) -> T {
        match self {
            Record::Wrapped { data } => data,
            Record::Flat(inner) => inner,
        }
    }
}

#[derive(Deserialize)]
struct RawMapDocument {
    #[serde(default)]
    nodes: Vec<Record<MapNode>>,
    #[serde(default)]
    edges: Vec<Record<MapEdge>>,
}

impl From<RawMapDocument> for MapDocument {
    fn from(raw: RawMapDocument) -> Self {
        let nodes = raw
            .nodes
            .into_iter()
            .map(Record::into_inner)
            .map(|mut node| {
                // Top-level fields are exported with an empty parent string.
                if node.parent.as_ref().is_some_and(NodeId::is_empty) {
                    node.parent = None;
                }
                node
            })
            .collect();
        let edges = raw.edges.into_iter().map(Record::into_inner).collect();
        Self { nodes, edges }
    }
}
