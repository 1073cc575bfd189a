//! Workspace store for graphws
//!
//! The store is an ordered arena of graphs. Slot 0 is the main graph;
//! further slots are appended by cloning, by component discovery, or as
//! scratch space for an analysis. Slots are only ever removed from the tail
//! so that every other index stays valid.

mod analysis;
mod query;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::log_graph_size;

/// Index of the main graph
pub const MAIN_WORKSPACE: usize = 0;

#[derive(Debug, Clone)]
pub struct GraphStore {
    graphs: Vec<Graph>,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// Create a store holding one empty main graph
    pub fn new() -> Self {
        Self::with_main(Graph::new())
    }

    pub fn with_main(graph: Graph) -> Self {
        GraphStore {
            graphs: vec![graph],
        }
    }

    pub fn workspace_count(&self) -> usize {
        self.graphs.len()
    }

    pub fn get(&self, index: usize) -> Result<&Graph> {
        let count = self.graphs.len();
        self.graphs
            .get(index)
            .ok_or(GraphError::UnknownWorkspace { index, count })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Graph> {
        let count = self.graphs.len();
        self.graphs
            .get_mut(index)
            .ok_or(GraphError::UnknownWorkspace { index, count })
    }

    /// Append a graph and return its index
    pub fn append(&mut self, graph: Graph) -> usize {
        self.graphs.push(graph);
        self.graphs.len() - 1
    }

    /// Remove and return the last graph. The main graph is never removed.
    pub fn remove_last(&mut self) -> Option<Graph> {
        if self.graphs.len() > 1 {
            self.graphs.pop()
        } else {
            None
        }
    }

    /// Deep-copy the graph at `index` into a new slot
    #[tracing::instrument(skip(self))]
    pub fn clone_workspace(&mut self, index: usize) -> Result<usize> {
        let copy = self.get(index)?.clone();
        log_graph_size!(&copy, "clone_workspace");
        Ok(self.append(copy))
    }

    /// Replace the graph at `target` with a deep copy of the graph at `source`
    #[tracing::instrument(skip(self))]
    pub fn overwrite(&mut self, target: usize, source: usize) -> Result<()> {
        self.get(target)?;
        let copy = self.get(source)?.clone();
        log_graph_size!(&copy, "overwrite");
        *self.get_mut(target)? = copy;
        Ok(())
    }

    /// Commit the graph at `index` onto the main graph
    pub fn overwrite_main(&mut self, index: usize) -> Result<()> {
        self.overwrite(MAIN_WORKSPACE, index)
    }

    /// Delete the workspace at `index`, which must be the last non-main slot
    pub fn delete_workspace(&mut self, index: usize) -> Result<()> {
        let count = self.graphs.len();
        self.get(index)?;
        if index == MAIN_WORKSPACE {
            return Err(GraphError::ProtectedWorkspace {
                index,
                reason: "the main graph is permanent".to_string(),
            });
        }
        if index + 1 != count {
            return Err(GraphError::ProtectedWorkspace {
                index,
                reason: format!("only the last workspace ({}) can be deleted", count - 1),
            });
        }
        self.graphs.pop();
        tracing::debug!(index, "delete_workspace");
        Ok(())
    }
}
