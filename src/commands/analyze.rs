//! Analyses: components, shortest path, spanning tree and tour

use crate::cli::OutputFormat;
use crate::commands::render::{cost_or_unknown, edge_lines, emit, join_path, join_vertices};
use graphws_core::error::Result;
use graphws_core::graph::Vertex;
use graphws_core::store::GraphStore;

/// Execute the components command; new workspaces stay in `store`
pub fn execute_components(format: OutputFormat, store: &mut GraphStore, gi: usize) -> Result<()> {
    let result = store.connected_components(gi)?;
    emit(format, &result, |r| {
        let mut out = String::new();
        for (n, component) in r.components.iter().enumerate() {
            out.push_str(&format!(
                "component {} (workspace {}): {}\n",
                n + 1,
                component.workspace,
                join_vertices(&component.vertices)
            ));
            out.push_str(&edge_lines(&component.edges, "  "));
        }
        out
    })
}

pub fn execute_path(
    format: OutputFormat,
    store: &GraphStore,
    gi: usize,
    start: Vertex,
    end: Vertex,
) -> Result<()> {
    let result = store.shortest_path(gi, start, end)?;
    emit(format, &result, |r| {
        if r.found {
            format!(
                "distance: {}\npath: {}\n",
                cost_or_unknown(r.distance),
                join_path(&r.path)
            )
        } else {
            format!("no path from {} to {}\n", r.start, r.end)
        }
    })
}

pub fn execute_mst(format: OutputFormat, store: &GraphStore, gi: usize, start: Vertex) -> Result<()> {
    let tree = store.minimum_spanning_tree(gi, start)?;
    emit(format, &tree, |t| {
        let mut out = format!(
            "total cost: {}\nspanning: {}\n",
            t.total_cost,
            if t.spanning { "yes" } else { "no" }
        );
        out.push_str(&edge_lines(&t.edges, "  "));
        out
    })
}

pub fn execute_tour(
    format: OutputFormat,
    store: &mut GraphStore,
    gi: usize,
    start: Vertex,
) -> Result<()> {
    let tour = store.hamiltonian_approximation(gi, start)?;
    if !tour.spanning {
        tracing::warn!(start, "tour does not reach every vertex");
    }
    emit(format, &tour, |t| {
        format!(
            "cycle: {}\ncost: {}\ntree cost: {}\n",
            join_path(&t.closed),
            cost_or_unknown(t.cost),
            t.tree_cost
        )
    })
}
