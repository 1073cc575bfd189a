//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, GraphArgs, OutputFormat};
use graphws_core::config::Config;
use graphws_core::error::Result;
use graphws_core::load::load_edge_list;
use graphws_core::store::GraphStore;
use graphws_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Build a store whose main graph is the requested edge list, or empty
    pub fn open_store(&self, args: &GraphArgs) -> Result<GraphStore> {
        let Some(path) = &args.graph else {
            return Ok(GraphStore::new());
        };
        let undirected = args.undirected || self.config.load.undirected;
        let graph = load_edge_list(path, undirected)?;
        trace_time!(self.start, "load_graph", undirected = undirected);
        Ok(GraphStore::with_main(graph))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphws {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Weighted directed graphs in indexed workspaces.");
        println!();
        println!("Run `graphws --help` for usage information.");
        Ok(())
    }
}
