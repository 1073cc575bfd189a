use std::collections::{BTreeMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::algos::selector::PrioritySelector;
use crate::graph::model::Graph;
use crate::graph::types::{Cost, PathResult, Vertex};

/// State tracked during reverse Dijkstra
struct DijkstraState {
    dist: BTreeMap<Vertex, Cost>,
    next: BTreeMap<Vertex, Vertex>,
    discovered: HashSet<Vertex>,
    selector: PrioritySelector<Vertex, Cost>,
}

impl DijkstraState {
    fn seeded(end: Vertex) -> Self {
        let mut selector = PrioritySelector::new();
        selector.insert_or_update(end, 0);
        Self {
            dist: BTreeMap::from([(end, 0)]),
            next: BTreeMap::new(),
            discovered: HashSet::from([end]),
            selector,
        }
    }

    /// Relax the inbound edge `(y, x)` given the final distance of `x`
    fn relax(&mut self, graph: &Graph, x: Vertex, y: Vertex) -> Result<()> {
        let candidate = self.dist[&x]
            .checked_add(graph.cost(y, x)?)
            .ok_or_else(|| GraphError::cost_overflow(y, x))?;
        let improves = !self.discovered.contains(&y) || candidate < self.dist[&y];
        if improves {
            self.dist.insert(y, candidate);
            self.next.insert(y, x);
            self.discovered.insert(y);
            self.selector.insert_or_update(y, candidate);
        }
        Ok(())
    }
}

/// Least-cost path from `start` to `end`.
///
/// Runs Dijkstra from `end` backwards over inbound edges, so one pass yields
/// for every settled vertex both its distance to `end` and the next vertex
/// along its best forward path. The search stops as soon as `start` is
/// settled. Costs are assumed non-negative.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_path(graph: &Graph, start: Vertex, end: Vertex) -> Result<PathResult> {
    for v in [start, end] {
        if !graph.contains_vertex(v) {
            return Err(GraphError::unknown_vertex(v));
        }
    }

    let mut state = DijkstraState::seeded(end);
    let mut found = false;

    while let Some((x, _)) = state.selector.pop_min() {
        if x == start {
            found = true;
            break;
        }
        for y in graph.in_neighbors(x)? {
            state.relax(graph, x, y)?;
        }
    }

    let path = if found {
        reconstruct(&state.next, start, end, state.dist.len())
    } else {
        Vec::new()
    };
    let distance = found.then(|| state.dist[&start]);

    tracing::debug!(
        start,
        end,
        found,
        ?distance,
        hops = path.len().saturating_sub(1),
        "shortest_path"
    );

    Ok(PathResult {
        start,
        end,
        found,
        distance,
        path,
        dist: state.dist,
        next: state.next,
    })
}

/// Follow next-hop links from `start` until `end`, giving up after `limit`
/// steps (only reachable when costs are negative).
fn reconstruct(
    next: &BTreeMap<Vertex, Vertex>,
    start: Vertex,
    end: Vertex,
    limit: usize,
) -> Vec<Vertex> {
    let mut path = vec![start];
    let mut current = start;
    while current != end {
        match next.get(&current) {
            Some(&hop) if path.len() <= limit => {
                path.push(hop);
                current = hop;
            }
            _ => {
                tracing::warn!(start, end, "next-hop chain broken, costs may be negative");
                return Vec::new();
            }
        }
    }
    path
}
