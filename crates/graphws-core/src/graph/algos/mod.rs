//! Graph algorithm implementations
//!
//! Contains the analyses run against a workspace:
//! - `components`: connected components via breadth-first reachability
//! - `dijkstra`: reverse Dijkstra shortest path
//! - `prim`: minimum spanning tree
//! - `tour`: double-tree Hamiltonian cycle approximation
//! - `selector`: min-priority selection shared by `dijkstra` and `prim`

pub mod components;
pub mod dijkstra;
pub mod prim;
pub mod selector;
pub mod tour;

pub use components::connected_components;
pub use dijkstra::shortest_path;
pub use prim::minimum_spanning_tree;
pub use selector::PrioritySelector;
pub use tour::hamiltonian_approximation;
