//! Output helpers shared by one-shot commands and the shell

use serde::Serialize;

use crate::cli::OutputFormat;
use graphws_core::error::Result;
use graphws_core::graph::{Cost, Vertex, WeightedEdge};

/// Print `value` as pretty JSON, or as the text produced by `human`
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    human: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Human => print!("{}", human(value)),
    }
    Ok(())
}

/// `a -> b -> c`
pub fn join_path(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// `1 2 3`
pub fn join_vertices(vertices: &[Vertex]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `from -> to (cost)` line per edge, with the given indent
pub fn edge_lines(edges: &[WeightedEdge], indent: &str) -> String {
    let mut out = String::new();
    for edge in edges {
        out.push_str(&format!(
            "{}{} -> {} ({})\n",
            indent, edge.from, edge.to, edge.cost
        ));
    }
    out
}

pub fn cost_or_unknown(cost: Option<Cost>) -> String {
    cost.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}
