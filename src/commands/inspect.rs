//! Read-only queries against one workspace

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::render::{edge_lines, emit, join_vertices};
use graphws_core::error::Result;
use graphws_core::graph::{EdgeCosts, Vertex, WeightedEdge};
use graphws_core::store::GraphStore;

#[derive(Debug, Serialize)]
pub struct WorkspaceSummary {
    pub workspace: usize,
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Serialize)]
struct InfoOutput {
    #[serde(flatten)]
    summary: WorkspaceSummary,
    workspaces: usize,
}

#[derive(Debug, Serialize)]
struct EdgePresence {
    from: Vertex,
    to: Vertex,
    present: bool,
}

#[derive(Debug, Serialize)]
struct DegreeOutput {
    vertex: Vertex,
    in_degree: usize,
    out_degree: usize,
}

pub fn summarize(store: &GraphStore, gi: usize) -> Result<WorkspaceSummary> {
    Ok(WorkspaceSummary {
        workspace: gi,
        vertices: store.vertex_count(gi)?,
        edges: store.edge_count(gi)?,
    })
}

/// Execute the info command
pub fn execute_info(format: OutputFormat, store: &GraphStore, gi: usize) -> Result<()> {
    let output = InfoOutput {
        summary: summarize(store, gi)?,
        workspaces: store.workspace_count(),
    };
    emit(format, &output, |o| {
        format!(
            "workspace: {}\nvertices: {}\nedges: {}\nworkspaces: {}\n",
            o.summary.workspace, o.summary.vertices, o.summary.edges, o.workspaces
        )
    })
}

/// List every workspace with its size; `current` is marked in human output
pub fn execute_workspaces(format: OutputFormat, store: &GraphStore, current: usize) -> Result<()> {
    let summaries = (0..store.workspace_count())
        .map(|gi| summarize(store, gi))
        .collect::<Result<Vec<_>>>()?;
    emit(format, &summaries, |list| {
        let mut out = String::new();
        for s in list {
            let marker = if s.workspace == current { "*" } else { " " };
            out.push_str(&format!(
                "{} {}: {} vertices, {} edges\n",
                marker, s.workspace, s.vertices, s.edges
            ));
        }
        out
    })
}

pub fn execute_vertices(format: OutputFormat, store: &GraphStore, gi: usize) -> Result<()> {
    let vertices = store.vertices(gi)?;
    emit(format, &vertices, |vs| {
        if vs.is_empty() {
            String::new()
        } else {
            format!("{}\n", join_vertices(vs))
        }
    })
}

pub fn execute_edge(
    format: OutputFormat,
    store: &GraphStore,
    gi: usize,
    from: Vertex,
    to: Vertex,
) -> Result<()> {
    let edge = WeightedEdge::new(from, to, store.cost(from, to, gi)?);
    emit(format, &edge, |e| edge_lines(std::slice::from_ref(e), ""))
}

/// Report whether `(from, to)` exists; a missing edge is not an error here
pub fn execute_has_edge(
    format: OutputFormat,
    store: &GraphStore,
    gi: usize,
    from: Vertex,
    to: Vertex,
) -> Result<()> {
    let output = EdgePresence {
        from,
        to,
        present: store.has_edge(from, to, gi)?,
    };
    emit(format, &output, |o| {
        if o.present { "yes\n" } else { "no\n" }.to_string()
    })
}

pub fn execute_degree(format: OutputFormat, store: &GraphStore, gi: usize, v: Vertex) -> Result<()> {
    let output = DegreeOutput {
        vertex: v,
        in_degree: store.in_degree(v, gi)?,
        out_degree: store.out_degree(v, gi)?,
    };
    emit(format, &output, |o| {
        format!("in: {}\nout: {}\n", o.in_degree, o.out_degree)
    })
}

/// Which side of a vertex to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Outbound,
    Inbound,
}

pub fn execute_incident(
    format: OutputFormat,
    store: &GraphStore,
    gi: usize,
    v: Vertex,
    direction: Direction,
) -> Result<()> {
    let costs: EdgeCosts = match direction {
        Direction::Outbound => store.outbound_edges(v, gi)?,
        Direction::Inbound => store.inbound_edges(v, gi)?,
    };
    let edges = WeightedEdge::from_costs(&costs);
    emit(format, &edges, |es| edge_lines(es, ""))
}
