//! graphws Core Library
//!
//! In-memory weighted directed graphs kept in indexed workspaces, with
//! connected components, reverse Dijkstra, Prim and a double-tree tour.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;
pub mod store;
