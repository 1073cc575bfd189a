//! Edge-list text format
//!
//! ```text
//! # optional comments
//! n m
//! u v c
//! ...
//! ```
//!
//! The header creates vertices `0..n`; each of the `m` edge lines adds the
//! edge `(u, v)` with cost `c`. Vertices outside `0..n` are created when an
//! edge first mentions them.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::bail_parse;
use crate::error::{GraphError, Result};
use crate::graph::model::Graph;
use crate::graph::types::{Cost, Vertex};

/// Parse whitespace-separated integer fields, reporting the 1-based line
fn fields<const N: usize>(line_no: usize, line: &str, what: &str) -> Result<[i64; N]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != N {
        bail_parse!(
            line_no,
            format!("expected {} fields ({}), found {}", N, what, parts.len())
        );
    }
    let mut values = [0i64; N];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| GraphError::parse(line_no, format!("not an integer: {:?}", part)))?;
    }
    Ok(values)
}

fn ensure_vertex(graph: &mut Graph, v: Vertex) -> Result<()> {
    if !graph.contains_vertex(v) {
        graph.add_vertex(v)?;
    }
    Ok(())
}

/// Read an edge list from text.
///
/// With `undirected`, every line inserts both directions; a reverse edge
/// that is already present is skipped instead of being reported.
pub fn read_edge_list(text: &str, undirected: bool) -> Result<Graph> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let Some((header_no, header)) = lines.next() else {
        bail_parse!(1, "missing header line `n m`");
    };
    let [n, m] = fields::<2>(header_no, header, "vertex count, edge count")?;
    if n < 0 || m < 0 {
        bail_parse!(header_no, "counts must not be negative");
    }

    let mut graph = Graph::with_vertices(0..n)?;
    let mut read = 0i64;

    for (line_no, line) in lines {
        let [u, v, c] = fields::<3>(line_no, line, "from, to, cost")?;
        let cost: Cost = c;
        ensure_vertex(&mut graph, u)?;
        ensure_vertex(&mut graph, v)?;

        match graph.add_edge(u, v, cost) {
            Ok(()) => {}
            Err(GraphError::DuplicateEdge { .. }) if undirected => {}
            Err(GraphError::DuplicateEdge { .. }) => {
                bail_parse!(line_no, format!("duplicate edge ({}, {})", u, v))
            }
            Err(e) => return Err(e),
        }
        if undirected && u != v && !graph.has_edge(v, u) {
            graph.add_edge(v, u, cost)?;
        }
        read += 1;
    }

    if read != m {
        tracing::warn!(declared = m, read, "edge count differs from header");
    }
    crate::log_graph_size!(graph, "read_edge_list");
    Ok(graph)
}

/// Read an edge list from a file
pub fn load_edge_list(path: &Path, undirected: bool) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    read_edge_list(&text, undirected)
}

/// Render a graph in edge-list form, edges sorted by endpoints
pub fn write_edge_list(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", graph.vertex_count(), graph.edge_count());
    for ((u, v), c) in graph.edge_costs() {
        let _ = writeln!(out, "{} {} {}", u, v, c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
# three vertices, a chain
3 2
0 1 5

1 2 7
";

    #[test]
    fn test_read_sample() {
        let graph = read_edge_list(SAMPLE, false).unwrap();
        assert_eq!(graph.sorted_vertices(), vec![0, 1, 2]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.cost(1, 2).unwrap(), 7);
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn test_read_undirected() {
        let graph = read_edge_list("2 2\n0 1 4\n1 0 4\n", true).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.cost(1, 0).unwrap(), 4);
    }

    #[test]
    fn test_out_of_range_vertices_are_added() {
        let graph = read_edge_list("1 1\n0 9 2\n", false).unwrap();
        assert_eq!(graph.sorted_vertices(), vec![0, 9]);
    }

    #[test]
    fn test_duplicate_edge_reports_line() {
        let err = read_edge_list("2 2\n0 1 1\n0 1 3\n", false).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            read_edge_list("", false),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_edge_list("2 x\n", false),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            read_edge_list("2 1\n0 1\n", false),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read_edge_list("-1 0\n", false),
            Err(GraphError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_written_form_reads_back() {
        let graph = read_edge_list(SAMPLE, false).unwrap();
        let text = write_edge_list(&graph);
        assert_eq!(text, "3 2\n0 1 5\n1 2 7\n");
        assert_eq!(read_edge_list(&text, false).unwrap(), graph);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let graph = load_edge_list(file.path(), true).unwrap();
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.check_consistency().is_ok());
    }
}
