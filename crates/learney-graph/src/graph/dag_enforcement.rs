//! Cycle detection. The prerequisite graph must be a DAG; every traversal in
//! this crate relies on it.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use super::stable_graph::IndexedGraph;

/// Every cycle in the graph: strongly connected components with more than
/// one node, plus self-loops.
pub fn find_cycles(graph: &IndexedGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| {
            scc.len() > 1 || scc.first().is_some_and(|&n| graph.graph.contains_edge(n, n))
        })
        .collect()
}

/// A closed walk through a strongly connected component in edge order,
/// starting and ending at its smallest id, e.g. `"3 -> 7 -> 3"`.
pub fn describe_cycle(graph: &IndexedGraph, component: &[NodeIndex]) -> String {
    let Some(&start) = component.iter().min_by_key(|&&idx| graph.id_of(idx)) else {
        return String::new();
    };
    let walk = shortest_cycle_through(graph, component, start);
    walk.iter()
        .filter_map(|&idx| graph.id_of(idx).map(ToString::to_string))
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// BFS inside the component from `start` back to `start`. Neighbours are
/// visited in id order so the result is deterministic.
fn shortest_cycle_through(graph: &IndexedGraph, component: &[NodeIndex], start: NodeIndex) -> Vec<NodeIndex> {
    let members: HashSet<NodeIndex> = component.iter().copied().collect();
    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let mut next: Vec<NodeIndex> = graph
            .graph
            .neighbors_directed(current, Direction::Outgoing)
            .filter(|n| members.contains(n))
            .collect();
        next.sort_by_key(|&idx| graph.id_of(idx));
        next.dedup();

        for neighbor in next {
            if neighbor == start {
                let mut inner = Vec::new();
                let mut node = current;
                while node != start {
                    inner.push(node);
                    match parent.get(&node) {
                        Some(&p) => node = p,
                        None => break,
                    }
                }
                inner.reverse();
                let mut walk = Vec::with_capacity(inner.len() + 2);
                walk.push(start);
                walk.extend(inner);
                walk.push(start);
                return walk;
            }
            if !parent.contains_key(&neighbor) {
                parent.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    vec![start]
}
