//! Fixture maps, graph builders, and fakes shared by the workspace's tests.

pub mod fakes;

pub use fakes::{FakeRemote, RecordingPersistence};

use std::path::PathBuf;

use learney_core::{MapDocument, MapEdge, MapNode};
use serde::de::DeserializeOwned;

/// Directory holding the JSON fixture maps.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("maps")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn fixture_string(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = fixture_string(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Load a fixture map document.
pub fn load_map(relative_path: &str) -> MapDocument {
    load_fixture(relative_path)
}

/// A linear chain `n0 → n1 → … → n{len-1}` of concepts.
pub fn chain(len: usize) -> MapDocument {
    let nodes = (0..len)
        .map(|i| MapNode::concept(format!("n{i}"), format!("Node {i}")))
        .collect();
    let edges = (1..len)
        .map(|i| MapEdge::new(format!("n{}", i - 1), format!("n{i}")))
        .collect();
    MapDocument::new(nodes, edges)
}

/// A DAG over `n` concepts built from arbitrary index pairs. Each pair is
/// oriented from the lower to the higher index, so the result is always
/// acyclic; self-pairs and out-of-range pairs are dropped.
pub fn dag_from_pairs(n: usize, pairs: &[(usize, usize)]) -> MapDocument {
    let nodes = (0..n)
        .map(|i| MapNode::concept(format!("n{i}"), format!("Node {i}")))
        .collect();
    let edges = pairs
        .iter()
        .filter(|(a, b)| a != b && *a < n && *b < n)
        .map(|&(a, b)| {
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            MapEdge::new(format!("n{lo}"), format!("n{hi}"))
        })
        .collect();
    MapDocument::new(nodes, edges)
}
