use crate::error::Result;
use crate::graph::types::{Cost, EdgeCosts, Vertex};
use crate::store::GraphStore;

/// Per-workspace queries and mutations
impl GraphStore {
    pub fn vertex_count(&self, gi: usize) -> Result<usize> {
        Ok(self.get(gi)?.vertex_count())
    }

    pub fn edge_count(&self, gi: usize) -> Result<usize> {
        Ok(self.get(gi)?.edge_count())
    }

    /// Vertex ids of a workspace, sorted
    pub fn vertices(&self, gi: usize) -> Result<Vec<Vertex>> {
        Ok(self.get(gi)?.sorted_vertices())
    }

    pub fn has_edge(&self, from: Vertex, to: Vertex, gi: usize) -> Result<bool> {
        Ok(self.get(gi)?.has_edge(from, to))
    }

    pub fn cost(&self, from: Vertex, to: Vertex, gi: usize) -> Result<Cost> {
        self.get(gi)?.cost(from, to)
    }

    pub fn set_cost(&mut self, from: Vertex, to: Vertex, cost: Cost, gi: usize) -> Result<()> {
        self.get_mut(gi)?.set_cost(from, to, cost)
    }

    pub fn add_edge(&mut self, from: Vertex, to: Vertex, cost: Cost, gi: usize) -> Result<()> {
        self.get_mut(gi)?.add_edge(from, to, cost)
    }

    pub fn remove_edge(&mut self, from: Vertex, to: Vertex, gi: usize) -> Result<()> {
        self.get_mut(gi)?.remove_edge(from, to)
    }

    pub fn in_degree(&self, v: Vertex, gi: usize) -> Result<usize> {
        self.get(gi)?.in_degree(v)
    }

    pub fn out_degree(&self, v: Vertex, gi: usize) -> Result<usize> {
        self.get(gi)?.out_degree(v)
    }

    pub fn inbound_edges(&self, v: Vertex, gi: usize) -> Result<EdgeCosts> {
        self.get(gi)?.inbound_edges(v)
    }

    pub fn outbound_edges(&self, v: Vertex, gi: usize) -> Result<EdgeCosts> {
        self.get(gi)?.outbound_edges(v)
    }

    pub fn add_vertex(&mut self, v: Vertex, gi: usize) -> Result<()> {
        self.get_mut(gi)?.add_vertex(v)
    }

    pub fn remove_vertex(&mut self, v: Vertex, gi: usize) -> Result<()> {
        self.get_mut(gi)?.remove_vertex(v)
    }
}
