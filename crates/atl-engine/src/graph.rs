//! Reachability over active restriction edges.
//!
//! Edges point from the waiting task to the blocking task. A cycle would mean
//! no task in it can ever start, so the store checks [`would_create_cycle`]
//! before inserting an edge.

use std::collections::{BTreeSet, HashMap};

use atl_core::entities::RestrictionEdge;
use rustworkx_core::petgraph::algo::{astar, has_path_connecting, tarjan_scc};
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};

/// Directed graph of the active edges, one node per task id.
///
/// Nodes and edges are inserted in id order so traversals are deterministic.
struct WaitGraph<'a> {
    graph: DiGraph<&'a str, ()>,
    id_to_index: HashMap<&'a str, NodeIndex>,
}

impl<'a> WaitGraph<'a> {
    fn build(edges: &'a [RestrictionEdge]) -> Self {
        let pairs: BTreeSet<(&str, &str)> = edges
            .iter()
            .filter(|edge| edge.is_active())
            .map(|edge| (edge.waiting_task_id.as_str(), edge.blocking_task_id.as_str()))
            .collect();
        let ids: BTreeSet<&str> = pairs.iter().flat_map(|&(waiting, blocking)| [waiting, blocking]).collect();

        let mut graph = DiGraph::with_capacity(ids.len(), pairs.len());
        let mut id_to_index = HashMap::with_capacity(ids.len());
        for id in ids {
            id_to_index.insert(id, graph.add_node(id));
        }
        for (waiting, blocking) in pairs {
            graph.add_edge(id_to_index[waiting], id_to_index[blocking], ());
        }
        Self { graph, id_to_index }
    }

    fn index(&self, id: &str) -> Option<NodeIndex> {
        self.id_to_index.get(id).copied()
    }

    fn ids(&self, path: &[NodeIndex]) -> Vec<String> {
        path.iter().map(|&node| self.graph[node].to_string()).collect()
    }

    fn shortest_path(&self, from: NodeIndex, to: NodeIndex) -> Option<Vec<NodeIndex>> {
        astar(&self.graph, from, |node| node == to, |_| 1_usize, |_| 0).map(|(_, path)| path)
    }

    /// Shortest loop through `start`, beginning at `start`.
    fn cycle_through(&self, start: NodeIndex) -> Option<Vec<NodeIndex>> {
        let mut successors: Vec<NodeIndex> = self.graph.neighbors(start).collect();
        successors.sort_by_key(|&node| self.graph[node]);
        successors.dedup();

        let mut best: Option<Vec<NodeIndex>> = None;
        for next in successors {
            if next == start {
                return Some(vec![start]);
            }
            let Some(tail) = self.shortest_path(next, start) else {
                continue;
            };
            if best.as_ref().is_none_or(|current| tail.len() < current.len()) {
                best = Some(tail);
            }
        }
        best.map(|tail| {
            // `tail` runs from a successor back to `start`; rotate `start` to the front.
            let mut cycle = Vec::with_capacity(tail.len());
            cycle.push(start);
            cycle.extend_from_slice(&tail[..tail.len() - 1]);
            cycle
        })
    }
}

/// Whether adding `waiting -> blocking` would close a loop.
#[must_use]
pub fn would_create_cycle(edges: &[RestrictionEdge], waiting: &str, blocking: &str) -> bool {
    if waiting == blocking {
        return true;
    }
    let graph = WaitGraph::build(edges);
    match (graph.index(blocking), graph.index(waiting)) {
        (Some(from), Some(to)) => has_path_connecting(&graph.graph, from, to, None),
        _ => false,
    }
}

/// One cycle per strongly connected group of tasks among active edges, each
/// listed from its smallest id along the shortest loop through that id.
///
/// Runs in time linear in the number of edges plus one shortest-path search
/// per successor of each group's smallest task.
#[must_use]
pub fn find_cycles(edges: &[RestrictionEdge]) -> Vec<Vec<String>> {
    let graph = WaitGraph::build(edges);
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter_map(|component| {
            let start = component.iter().copied().min_by_key(|&node| graph.graph[node])?;
            if component.len() == 1 && !graph.graph.contains_edge(start, start) {
                return None;
            }
            graph.cycle_through(start).map(|cycle| graph.ids(&cycle))
        })
        .collect();
    cycles.sort();
    cycles
}
