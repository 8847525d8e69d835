//! # learney-graph
//!
//! The read-only concept dependency graph. A map document is validated and
//! loaded once into a `petgraph` DAG; everything else only queries it.

pub mod graph;
pub mod traversal;

pub use graph::ConceptGraph;
