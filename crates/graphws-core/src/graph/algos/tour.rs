//! Double-tree approximation of a Hamiltonian cycle
//!
//! 1. Build a minimum spanning tree from the start vertex.
//! 2. Double every tree edge into a scratch multigraph, which is Eulerian.
//! 3. Walk the multigraph, consuming edges, and keep each vertex only on its
//!    first encounter.
//!
//! Under the triangle inequality the resulting cycle costs at most twice the
//! optimum. The inequality is not checked.

use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, Result};
use crate::graph::algos::prim::minimum_spanning_tree;
use crate::graph::model::Graph;
use crate::graph::types::{Cost, SpanningTree, Tour, Vertex};
use crate::store::GraphStore;

/// Build the doubled-tree multigraph: every tree edge `(u, v)` is present
/// twice in each direction.
fn double_tree(tree: &SpanningTree) -> Result<Graph> {
    let mut scratch = Graph::with_vertices([tree.start])?;
    for edge in &tree.edges {
        for w in [edge.from, edge.to] {
            if !scratch.contains_vertex(w) {
                scratch.add_vertex(w)?;
            }
        }
        scratch.add_edge(edge.from, edge.to, edge.cost)?;
        scratch.add_edge(edge.to, edge.from, edge.cost)?;
        scratch.add_undirected_pair(edge.from, edge.to, edge.cost)?;
    }
    Ok(scratch)
}

/// Walk the doubled tree from `start`, consuming one copy of each edge pair
/// as it is crossed, and return vertices in first-encounter order.
///
/// A vertex is finished once its out-degree has dropped to half its initial
/// value, i.e. every tree edge leaving it has been crossed once.
fn shortcut_walk(scratch: &mut Graph, start: Vertex) -> Result<Vec<Vertex>> {
    let mut half_degree = HashMap::new();
    for v in scratch.sorted_vertices() {
        half_degree.insert(v, scratch.out_degree(v)? / 2);
    }

    let mut stack = vec![start];
    let mut visited = HashSet::from([start]);
    let mut order = vec![start];
    let mut finished = 0usize;

    while let Some(x) = stack.pop() {
        if scratch.out_degree(x)? == half_degree[&x] {
            finished += 1;
            continue;
        }
        let next = scratch
            .out_neighbors(x)?
            .into_iter()
            .find(|v| !visited.contains(v));
        match next {
            Some(v) => {
                scratch.remove_edge(x, v)?;
                scratch.remove_edge(v, x)?;
                visited.insert(v);
                order.push(v);
                stack.push(x);
                stack.push(v);
            }
            None => finished += 1,
        }
    }

    tracing::trace!(visited = order.len(), finished, "shortcut_walk");
    Ok(order)
}

/// Sum of the cycle legs as stored in `source`; `None` if a leg is missing
fn cycle_cost(source: &Graph, closed: &[Vertex]) -> Result<Option<Cost>> {
    let mut total: Cost = 0;
    for leg in closed.windows(2) {
        let Ok(cost) = source.cost(leg[0], leg[1]) else {
            return Ok(None);
        };
        total = total
            .checked_add(cost)
            .ok_or_else(|| GraphError::cost_overflow(leg[0], leg[1]))?;
    }
    Ok(Some(total))
}

/// Approximate a minimum-cost Hamiltonian cycle of workspace `gi` from
/// `start`. The scratch multigraph lives in a temporary tail slot of the
/// store and is removed before returning, also on failure.
#[tracing::instrument(skip(store))]
pub fn hamiltonian_approximation(store: &mut GraphStore, gi: usize, start: Vertex) -> Result<Tour> {
    let tree = minimum_spanning_tree(store.get(gi)?, start)?;
    let scratch = double_tree(&tree)?;

    let scratch_index = store.append(scratch);
    let walk = store
        .get_mut(scratch_index)
        .and_then(|scratch| shortcut_walk(scratch, start));
    store.remove_last();
    let order = walk?;

    let source = store.get(gi)?;
    let mut closed = order.clone();
    if order.len() > 1 {
        closed.push(start);
    }
    let cost = cycle_cost(source, &closed)?;

    tracing::debug!(
        start,
        vertices = order.len(),
        ?cost,
        tree_cost = tree.total_cost,
        "hamiltonian_approximation"
    );

    Ok(Tour {
        start,
        order,
        closed,
        cost,
        tree_cost: tree.total_cost,
        spanning: tree.spanning,
    })
}
