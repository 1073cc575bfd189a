use std::collections::HashSet;

use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::types::{ComponentInfo, ComponentsResult, Reach, WeightedEdge};
use crate::store::GraphStore;

/// Graphs waiting to be appended to the store, in discovery order
#[derive(Default)]
struct PendingSlots {
    graphs: Vec<Graph>,
    /// Offset of the shared slot collecting edgeless vertices
    isolated: Option<usize>,
}

impl PendingSlots {
    fn push_component(&mut self, reach: &Reach) -> Result<usize> {
        let mut graph = Graph::with_vertices(reach.vertices.iter().copied())?;
        for (&(u, v), &cost) in &reach.edges {
            // an endpoint settled by an earlier traversal of a directed graph
            for w in [u, v] {
                if !graph.contains_vertex(w) {
                    graph.add_vertex(w)?;
                }
            }
            graph.add_edge(u, v, cost)?;
        }
        self.graphs.push(graph);
        Ok(self.graphs.len() - 1)
    }

    fn push_isolated(&mut self, reach: &Reach) -> Result<usize> {
        let offset = match self.isolated {
            Some(offset) => offset,
            None => {
                self.graphs.push(Graph::new());
                let offset = self.graphs.len() - 1;
                self.isolated = Some(offset);
                offset
            }
        };
        for &v in &reach.vertices {
            self.graphs[offset].add_vertex(v)?;
        }
        Ok(offset)
    }
}

/// Partition workspace `gi` into connected components.
///
/// Vertices are seeded in ascending order and each breadth-first pass over
/// outbound edges yields one component. A component with edges is
/// materialized into its own new workspace; edgeless vertices are collected
/// together into a single shared workspace. The partition does not depend
/// on seeding order, the workspace numbering does.
#[tracing::instrument(skip(store))]
pub fn connected_components(store: &mut GraphStore, gi: usize) -> Result<ComponentsResult> {
    let source = store.get(gi)?;
    let mut visited = HashSet::new();
    let mut pending = PendingSlots::default();
    let mut found = Vec::new();

    for vertex in source.sorted_vertices() {
        if visited.contains(&vertex) {
            continue;
        }
        let reach = source.breadth_first_reach(vertex, &mut visited)?;
        let offset = if reach.edges.is_empty() {
            pending.push_isolated(&reach)?
        } else {
            pending.push_component(&reach)?
        };
        found.push((offset, reach));
    }

    let base = store.workspace_count();
    for graph in pending.graphs {
        store.append(graph);
    }

    let components: Vec<ComponentInfo> = found
        .into_iter()
        .enumerate()
        .map(|(n, (offset, reach))| {
            let mut vertices = reach.vertices;
            vertices.sort_unstable();
            let info = ComponentInfo {
                workspace: base + offset,
                vertices,
                edges: WeightedEdge::from_costs(&reach.edges),
            };
            tracing::info!(
                component = n + 1,
                workspace = info.workspace,
                vertices = info.vertices.len(),
                edges = info.edges.len(),
                "component"
            );
            info
        })
        .collect();

    Ok(ComponentsResult {
        source: gi,
        components,
    })
}
