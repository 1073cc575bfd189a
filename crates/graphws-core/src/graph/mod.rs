//! Graph model and analyses
//!
//! Provides the weighted directed graph and the algorithms run over it:
//! - Breadth-first reachability for component discovery
//! - Reverse Dijkstra for shortest paths
//! - Prim's algorithm for minimum spanning trees
//! - Double-tree approximation of Hamiltonian cycles

pub mod algos;
pub mod bfs;
pub mod model;
pub mod types;

pub use algos::{
    connected_components, hamiltonian_approximation, minimum_spanning_tree, shortest_path,
    PrioritySelector,
};
pub use model::Graph;
pub use types::{
    ComponentInfo, ComponentsResult, Cost, EdgeCosts, PathResult, Reach, SpanningTree, Tour,
    Vertex, WeightedEdge,
};
