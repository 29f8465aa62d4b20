//! A* search over the route graph.
//!
//! Cost is travel time in minutes. The heuristic is the straight-line distance
//! to the target at an optimistic 40 km/h, which biases expansion toward the
//! goal.
//!
//! The open set is a binary min-heap ordered by `f`, with ties going to the
//! node that entered the open set first. When a node's cost improves it keeps
//! its original insertion sequence; the old heap entry is left in place and
//! discarded when popped. Closed nodes are never reopened.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::trace;

use crate::domain::StopId;
use crate::geo::heuristic_time;
use crate::graph::{GraphEdge, GraphNode, RouteGraph};

/// A path found by the search.
#[derive(Debug, Clone)]
pub struct PathResult<'g> {
    /// Visited stops from start to end.
    pub nodes: Vec<&'g GraphNode>,

    /// Edges taken, one fewer than `nodes`.
    pub edges: Vec<&'g GraphEdge>,
}

impl PathResult<'_> {
    /// Total edge weight along the path (minutes).
    pub fn cost(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }
}

/// Per-node search bookkeeping.
struct SearchNode<'g> {
    g: f64,
    h: f64,
    parent: Option<StopId>,
    edge: Option<&'g GraphEdge>,
    /// Order in which the node first entered the open set.
    seq: u64,
}

impl SearchNode<'_> {
    fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Heap entry. Ordered so that `BinaryHeap` pops the smallest `f`, then the
/// smallest insertion sequence.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    g: f64,
    seq: u64,
    id: StopId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Find a least-cost path from `start` to `end`.
///
/// Returns `None` if either stop is not in the graph or the target is
/// unreachable. A search from a stop to itself yields a single-node path with
/// no edges.
pub fn find_path<'g>(graph: &'g RouteGraph, start: StopId, end: StopId) -> Option<PathResult<'g>> {
    let start_node = graph.node(start)?;
    let target = graph.node(end)?;

    let heuristic = |node: &GraphNode| heuristic_time(node.distance_to(target));

    let mut search: HashMap<StopId, SearchNode<'g>> = HashMap::new();
    let mut closed: HashSet<StopId> = HashSet::new();
    let mut open = BinaryHeap::new();
    let mut next_seq = 0u64;

    let h = heuristic(start_node);
    search.insert(
        start,
        SearchNode {
            g: 0.0,
            h,
            parent: None,
            edge: None,
            seq: next_seq,
        },
    );
    open.push(OpenEntry {
        f: h,
        g: 0.0,
        seq: next_seq,
        id: start,
    });
    next_seq += 1;

    while let Some(entry) = open.pop() {
        if closed.contains(&entry.id) {
            continue;
        }
        let current_g = search[&entry.id].g;
        if entry.g > current_g {
            // Superseded by a cheaper route to the same node
            continue;
        }

        if entry.id == end {
            return Some(reconstruct(graph, &search, end));
        }

        closed.insert(entry.id);
        trace!(stop = %entry.id, g = current_g, f = entry.f, "Expanding stop");

        for edge in graph.neighbors(entry.id) {
            if closed.contains(&edge.target) {
                continue;
            }
            let Some(neighbor) = graph.node(edge.target) else {
                continue;
            };

            let tentative_g = current_g + edge.weight;

            match search.get_mut(&edge.target) {
                None => {
                    let h = heuristic(neighbor);
                    search.insert(
                        edge.target,
                        SearchNode {
                            g: tentative_g,
                            h,
                            parent: Some(entry.id),
                            edge: Some(edge),
                            seq: next_seq,
                        },
                    );
                    open.push(OpenEntry {
                        f: tentative_g + h,
                        g: tentative_g,
                        seq: next_seq,
                        id: edge.target,
                    });
                    next_seq += 1;
                }
                Some(known) if tentative_g < known.g => {
                    known.g = tentative_g;
                    known.parent = Some(entry.id);
                    known.edge = Some(edge);
                    open.push(OpenEntry {
                        f: known.f(),
                        g: tentative_g,
                        seq: known.seq,
                        id: edge.target,
                    });
                }
                Some(_) => {}
            }
        }
    }

    None
}

/// Follow parent pointers back from `end`.
fn reconstruct<'g>(
    graph: &'g RouteGraph,
    search: &HashMap<StopId, SearchNode<'g>>,
    end: StopId,
) -> PathResult<'g> {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    let mut current = Some(end);
    while let Some(id) = current {
        let Some(step) = search.get(&id) else {
            break;
        };
        if let Some(node) = graph.node(id) {
            nodes.push(node);
        }
        if let Some(edge) = step.edge {
            edges.push(edge);
        }
        current = step.parent;
    }

    nodes.reverse();
    edges.reverse();
    PathResult { nodes, edges }
}
