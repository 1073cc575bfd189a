use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::algos::selector::PrioritySelector;
use crate::graph::model::Graph;
use crate::graph::types::{Cost, SpanningTree, Vertex, WeightedEdge};

/// Grow a minimum spanning tree from `start` with Prim's algorithm.
///
/// The graph is expected to be undirected, i.e. to hold `(v, u)` with the
/// same cost whenever it holds `(u, v)`; only outbound edges are followed.
/// When fewer than `|V| - 1` edges are committed the tree only covers the
/// part of the graph reachable from `start`, and `spanning` is false.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn minimum_spanning_tree(graph: &Graph, start: Vertex) -> Result<SpanningTree> {
    if !graph.contains_vertex(start) {
        return Err(GraphError::unknown_vertex(start));
    }

    let mut visited = HashSet::from([start]);
    let mut dist: HashMap<Vertex, Cost> = HashMap::new();
    let mut prev: HashMap<Vertex, Vertex> = HashMap::new();
    let mut selector = PrioritySelector::new();

    for v in graph.out_neighbors(start)? {
        if v == start {
            continue;
        }
        let cost = graph.cost(start, v)?;
        if dist.get(&v).is_none_or(|&best| cost < best) {
            dist.insert(v, cost);
            prev.insert(v, start);
            selector.insert_or_update(v, cost);
        }
    }

    let mut edges = Vec::new();
    let mut total_cost: Cost = 0;

    while let Some((x, cost)) = selector.pop_min() {
        if !visited.insert(x) {
            continue;
        }
        let from = prev[&x];
        total_cost = total_cost
            .checked_add(cost)
            .ok_or_else(|| GraphError::cost_overflow(from, x))?;
        edges.push(WeightedEdge::new(from, x, cost));

        for y in graph.out_neighbors(x)? {
            if visited.contains(&y) {
                continue;
            }
            let candidate = graph.cost(x, y)?;
            if dist.get(&y).is_none_or(|&best| candidate < best) {
                dist.insert(y, candidate);
                prev.insert(y, x);
                selector.insert_or_update(y, candidate);
            }
        }
    }

    edges.sort();
    let spanning = edges.len() + 1 == graph.vertices().count();
    tracing::debug!(
        start,
        edges = edges.len(),
        total_cost,
        spanning,
        "minimum_spanning_tree"
    );

    Ok(SpanningTree {
        start,
        edges,
        total_cost,
        spanning,
    })
}
