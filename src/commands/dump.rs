//! `graphws dump` - print a workspace in edge-list form

use serde::Serialize;

use crate::cli::OutputFormat;
use graphws_core::error::Result;
use graphws_core::graph::{Vertex, WeightedEdge};
use graphws_core::load::write_edge_list;
use graphws_core::store::GraphStore;

#[derive(Debug, Serialize)]
struct DumpOutput {
    vertices: Vec<Vertex>,
    edges: Vec<WeightedEdge>,
}

/// Execute the dump command
pub fn execute(format: OutputFormat, store: &GraphStore, gi: usize) -> Result<()> {
    let graph = store.get(gi)?;
    match format {
        OutputFormat::Json => {
            let output = DumpOutput {
                vertices: graph.sorted_vertices(),
                edges: WeightedEdge::from_costs(&graph.edge_costs()),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print!("{}", write_edge_list(graph)),
    }
    Ok(())
}
