//! CLI argument parsing for graphws
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::GraphArgs;
pub use graphws_core::format::OutputFormat;
use graphws_core::graph::Vertex;
use parse::parse_format;

/// graphws - weighted directed graphs in indexed workspaces
#[derive(Parser, Debug)]
#[command(name = "graphws")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./graphws.toml when present)
    #[arg(long, global = true, env = "GRAPHWS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format [human, json]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show vertex, edge and workspace counts
    Info(GraphArgs),

    /// List vertices in ascending order
    Vertices(GraphArgs),

    /// Show the cost of an edge
    Edge {
        from: Vertex,
        to: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Tell whether an edge exists
    HasEdge {
        from: Vertex,
        to: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Show in- and out-degree of a vertex
    Degree {
        vertex: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List edges leaving a vertex
    Outbound {
        vertex: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List edges entering a vertex
    Inbound {
        vertex: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Split the graph into connected components
    Components(GraphArgs),

    /// Cheapest path between two vertices
    Path {
        start: Vertex,
        end: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Minimum spanning tree grown from a vertex
    Mst {
        start: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Approximate Hamiltonian cycle through every vertex
    Tour {
        start: Vertex,
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print the graph in edge-list form
    Dump(GraphArgs),

    /// Read commands from stdin against a live workspace store
    Shell(GraphArgs),
}
