//! Directed, edge-weighted graph
//!
//! A graph keeps three structures in step: outbound adjacency, inbound
//! adjacency and the edge-cost map. Every mutation either leaves all three
//! consistent or fails before writing anything.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::types::{Cost, EdgeCosts, Vertex};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Informational counter, maintained alongside the adjacency maps.
    /// Membership is decided by the adjacency keys, not by this value.
    vertex_count: usize,
    edge_count: usize,
    out_adj: HashMap<Vertex, Vec<Vertex>>,
    in_adj: HashMap<Vertex, Vec<Vertex>>,
    costs: HashMap<(Vertex, Vertex), Cost>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph holding the given vertices and no edges
    pub fn with_vertices<I: IntoIterator<Item = Vertex>>(vertices: I) -> Result<Self> {
        let mut graph = Graph::new();
        for v in vertices {
            graph.add_vertex(v)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.out_adj.contains_key(&v) && self.in_adj.contains_key(&v)
    }

    /// Iterate over the vertex set in unspecified order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.out_adj.keys().copied()
    }

    pub fn sorted_vertices(&self) -> Vec<Vertex> {
        let mut vertices: Vec<Vertex> = self.vertices().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Iterate over distinct `((from, to), cost)` pairs in unspecified order
    pub fn edges(&self) -> impl Iterator<Item = ((Vertex, Vertex), Cost)> + '_ {
        self.costs.iter().map(|(&pair, &cost)| (pair, cost))
    }

    /// All distinct edges with their costs, ordered by `(from, to)`
    pub fn edge_costs(&self) -> EdgeCosts {
        self.edges().collect()
    }

    pub fn add_vertex(&mut self, v: Vertex) -> Result<()> {
        if self.contains_vertex(v) {
            return Err(GraphError::duplicate_vertex(v));
        }
        self.out_adj.insert(v, Vec::new());
        self.in_adj.insert(v, Vec::new());
        self.vertex_count += 1;
        Ok(())
    }

    /// Remove a vertex together with every edge incident to it
    pub fn remove_vertex(&mut self, v: Vertex) -> Result<()> {
        self.require_vertex(v)?;
        let succs = self.out_adj.remove(&v).unwrap_or_default();
        let preds = self.in_adj.remove(&v).unwrap_or_default();

        let self_loops = succs.iter().filter(|&&w| w == v).count();

        for &w in &succs {
            self.costs.remove(&(v, w));
            if let Some(list) = self.in_adj.get_mut(&w) {
                list.retain(|&u| u != v);
            }
        }
        for &u in &preds {
            self.costs.remove(&(u, v));
            if let Some(list) = self.out_adj.get_mut(&u) {
                list.retain(|&w| w != v);
            }
        }

        let removed = succs.len() + preds.len() - self_loops;
        self.edge_count -= removed;
        self.vertex_count = self.vertex_count.saturating_sub(1);
        tracing::trace!(vertex = v, removed_edges = removed, "remove_vertex");
        Ok(())
    }

    /// Add the edge `(from, to)`. Fails if either endpoint is unknown or the
    /// pair is already present.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, cost: Cost) -> Result<()> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        if self.costs.contains_key(&(from, to)) {
            return Err(GraphError::duplicate_edge(from, to));
        }

        self.insert_edge(from, to, cost);
        self.verify_pair("add_edge", from, to)
    }

    /// Insert both `(u, v)` and `(v, u)` without the duplicate check.
    ///
    /// Used to build multigraphs: an existing pair gains a parallel copy in
    /// the adjacency lists and keeps a single cost entry.
    pub fn add_undirected_pair(&mut self, u: Vertex, v: Vertex, cost: Cost) -> Result<()> {
        self.require_vertex(u)?;
        self.require_vertex(v)?;

        self.insert_edge(u, v, cost);
        self.insert_edge(v, u, cost);
        Ok(())
    }

    /// Remove one copy of the edge `(from, to)`
    pub fn remove_edge(&mut self, from: Vertex, to: Vertex) -> Result<()> {
        if !self.has_edge(from, to) {
            return Err(GraphError::unknown_edge(from, to));
        }

        remove_first(self.out_adj.get_mut(&from), to);
        remove_first(self.in_adj.get_mut(&to), from);
        let copies_left = self
            .out_adj
            .get(&from)
            .is_some_and(|succs| succs.contains(&to));
        if !copies_left {
            self.costs.remove(&(from, to));
        }
        self.edge_count -= 1;

        if copies_left {
            self.verify_pair("remove_edge", from, to)
        } else if self.costs.contains_key(&(from, to))
            || self.in_adj.get(&to).is_some_and(|p| p.contains(&from))
        {
            Err(GraphError::Inconsistent {
                operation: "remove_edge".to_string(),
                from,
                to,
            })
        } else {
            Ok(())
        }
    }

    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.costs.contains_key(&(from, to))
    }

    pub fn cost(&self, from: Vertex, to: Vertex) -> Result<Cost> {
        self.costs
            .get(&(from, to))
            .copied()
            .ok_or_else(|| GraphError::unknown_edge(from, to))
    }

    pub fn set_cost(&mut self, from: Vertex, to: Vertex, cost: Cost) -> Result<()> {
        match self.costs.get_mut(&(from, to)) {
            Some(slot) => {
                *slot = cost;
                Ok(())
            }
            None => Err(GraphError::unknown_edge(from, to)),
        }
    }

    /// Successors of `v`, as an owned copy
    pub fn out_neighbors(&self, v: Vertex) -> Result<Vec<Vertex>> {
        self.out_adj
            .get(&v)
            .cloned()
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// Predecessors of `v`, as an owned copy
    pub fn in_neighbors(&self, v: Vertex) -> Result<Vec<Vertex>> {
        self.in_adj
            .get(&v)
            .cloned()
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    pub fn out_degree(&self, v: Vertex) -> Result<usize> {
        self.out_adj
            .get(&v)
            .map(Vec::len)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    pub fn in_degree(&self, v: Vertex) -> Result<usize> {
        self.in_adj
            .get(&v)
            .map(Vec::len)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// Outbound edges of `v` with their costs
    pub fn outbound_edges(&self, v: Vertex) -> Result<EdgeCosts> {
        let succs = self.out_adj.get(&v).ok_or_else(|| GraphError::unknown_vertex(v))?;
        Ok(succs
            .iter()
            .filter_map(|&w| self.costs.get(&(v, w)).map(|&c| ((v, w), c)))
            .collect())
    }

    /// Inbound edges of `v` with their costs
    pub fn inbound_edges(&self, v: Vertex) -> Result<EdgeCosts> {
        let preds = self.in_adj.get(&v).ok_or_else(|| GraphError::unknown_vertex(v))?;
        Ok(preds
            .iter()
            .filter_map(|&u| self.costs.get(&(u, v)).map(|&c| ((u, v), c)))
            .collect())
    }

    /// Check that the adjacency maps and the cost map describe the same edges.
    ///
    /// Returns the first offending pair, if any.
    pub fn check_consistency(&self) -> std::result::Result<(), (Vertex, Vertex)> {
        for &(u, v) in self.costs.keys() {
            let forward = self.out_adj.get(&u).is_some_and(|s| s.contains(&v));
            let backward = self.in_adj.get(&v).is_some_and(|p| p.contains(&u));
            if !forward || !backward {
                return Err((u, v));
            }
        }
        for (&u, succs) in &self.out_adj {
            if !self.in_adj.contains_key(&u) {
                return Err((u, u));
            }
            for &v in succs {
                if !self.costs.contains_key(&(u, v)) || !self.pair_copies_match(u, v) {
                    return Err((u, v));
                }
            }
        }
        for (&v, preds) in &self.in_adj {
            if !self.out_adj.contains_key(&v) {
                return Err((v, v));
            }
            for &u in preds {
                if !self.costs.contains_key(&(u, v)) {
                    return Err((u, v));
                }
            }
        }
        Ok(())
    }

    fn require_vertex(&self, v: Vertex) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(v))
        }
    }

    fn insert_edge(&mut self, from: Vertex, to: Vertex, cost: Cost) {
        self.out_adj.entry(from).or_default().push(to);
        self.in_adj.entry(to).or_default().push(from);
        self.costs.insert((from, to), cost);
        self.edge_count += 1;
    }

    fn pair_copies_match(&self, from: Vertex, to: Vertex) -> bool {
        let forward = self
            .out_adj
            .get(&from)
            .map_or(0, |s| s.iter().filter(|&&w| w == to).count());
        let backward = self
            .in_adj
            .get(&to)
            .map_or(0, |p| p.iter().filter(|&&u| u == from).count());
        forward == backward
    }

    fn verify_pair(&self, operation: &str, from: Vertex, to: Vertex) -> Result<()> {
        let consistent = self.costs.contains_key(&(from, to))
            && self.out_adj.get(&from).is_some_and(|s| s.contains(&to))
            && self.in_adj.get(&to).is_some_and(|p| p.contains(&from))
            && self.pair_copies_match(from, to);
        if consistent {
            Ok(())
        } else {
            Err(GraphError::Inconsistent {
                operation: operation.to_string(),
                from,
                to,
            })
        }
    }
}

fn remove_first(list: Option<&mut Vec<Vertex>>, value: Vertex) {
    if let Some(list) = list {
        if let Some(pos) = list.iter().position(|&x| x == value) {
            list.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests;
