use std::collections::BTreeMap;

use serde::Serialize;

/// Vertex identifier. The graph's key space is the vertex domain.
pub type Vertex = i64;

/// Integer edge cost
pub type Cost = i64;

/// Edge costs restricted to some subset of a graph, keyed by `(from, to)`
pub type EdgeCosts = BTreeMap<(Vertex, Vertex), Cost>;

/// A directed edge together with its cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeightedEdge {
    pub from: Vertex,
    pub to: Vertex,
    pub cost: Cost,
}

impl WeightedEdge {
    pub fn new(from: Vertex, to: Vertex, cost: Cost) -> Self {
        WeightedEdge { from, to, cost }
    }

    /// Flatten an edge-cost mapping into a sorted list
    pub fn from_costs(costs: &EdgeCosts) -> Vec<WeightedEdge> {
        costs
            .iter()
            .map(|(&(from, to), &cost)| WeightedEdge { from, to, cost })
            .collect()
    }
}

/// Outcome of a breadth-first reachability pass from one seed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reach {
    /// Traversed edges, each recorded in both directions
    pub edges: EdgeCosts,
    /// Newly visited vertices in FIFO discovery order
    pub vertices: Vec<Vertex>,
}

/// One connected component materialized into the store
#[derive(Debug, Clone, Serialize)]
pub struct ComponentInfo {
    /// Store slot holding the component graph
    pub workspace: usize,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<WeightedEdge>,
}

/// Result of connected-components discovery
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentsResult {
    pub source: usize,
    pub components: Vec<ComponentInfo>,
}

/// Result of a shortest-path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub start: Vertex,
    pub end: Vertex,
    /// Whether `start` can reach `end`
    pub found: bool,
    pub distance: Option<Cost>,
    /// Forward vertex sequence from `start` to `end` (empty if not found)
    pub path: Vec<Vertex>,
    /// Best known cost from each settled or discovered vertex to `end`
    pub dist: BTreeMap<Vertex, Cost>,
    /// For each vertex, the vertex one forward step closer to `end`
    pub next: BTreeMap<Vertex, Vertex>,
}

/// Result of minimum-spanning-tree construction
#[derive(Debug, Clone, Serialize)]
pub struct SpanningTree {
    pub start: Vertex,
    /// Committed tree edges, sorted
    pub edges: Vec<WeightedEdge>,
    pub total_cost: Cost,
    /// Whether the tree reaches every vertex of the graph
    pub spanning: bool,
}

/// Result of the double-tree Hamiltonian approximation
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    pub start: Vertex,
    /// Vertices in visiting order, starting with `start`
    pub order: Vec<Vertex>,
    /// `order` followed by the return to `start`
    pub closed: Vec<Vertex>,
    /// Sum of the tour legs, `None` if some leg is not an edge of the graph
    pub cost: Option<Cost>,
    /// Cost of the spanning tree the tour was derived from
    pub tree_cost: Cost,
    /// Whether the tour covers every vertex of the graph
    pub spanning: bool,
}
