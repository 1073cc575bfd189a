use crate::error::Result;
use crate::graph::algos;
use crate::graph::types::{ComponentsResult, PathResult, SpanningTree, Tour, Vertex};
use crate::store::GraphStore;

/// Analyses over a workspace
impl GraphStore {
    /// Materialize each connected component of workspace `gi` as a new slot
    pub fn connected_components(&mut self, gi: usize) -> Result<ComponentsResult> {
        algos::connected_components(self, gi)
    }

    pub fn shortest_path(&self, gi: usize, start: Vertex, end: Vertex) -> Result<PathResult> {
        algos::shortest_path(self.get(gi)?, start, end)
    }

    pub fn minimum_spanning_tree(&self, gi: usize, start: Vertex) -> Result<SpanningTree> {
        algos::minimum_spanning_tree(self.get(gi)?, start)
    }

    /// Double-tree tour from `start`; the scratch multigraph is discarded
    /// before returning
    pub fn hamiltonian_approximation(&mut self, gi: usize, start: Vertex) -> Result<Tour> {
        algos::hamiltonian_approximation(self, gi, start)
    }
}
