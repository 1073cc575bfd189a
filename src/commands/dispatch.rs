//! Command dispatch logic for graphws

mod command;

use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands::inspect::Direction;
use crate::commands::{analyze, dump, inspect, shell};
use graphws_core::config::Config;
use graphws_core::error::Result;
use graphws_core::store::MAIN_WORKSPACE;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);
    let main = MAIN_WORKSPACE;

    match &cli.command {
        None => NoCommand.execute(&ctx),

        Some(Commands::Info(args)) => {
            inspect::execute_info(format, &ctx.open_store(args)?, main)
        }

        Some(Commands::Vertices(args)) => {
            inspect::execute_vertices(format, &ctx.open_store(args)?, main)
        }

        Some(Commands::Edge { from, to, graph }) => {
            inspect::execute_edge(format, &ctx.open_store(graph)?, main, *from, *to)
        }

        Some(Commands::HasEdge { from, to, graph }) => {
            inspect::execute_has_edge(format, &ctx.open_store(graph)?, main, *from, *to)
        }

        Some(Commands::Degree { vertex, graph }) => {
            inspect::execute_degree(format, &ctx.open_store(graph)?, main, *vertex)
        }

        Some(Commands::Outbound { vertex, graph }) => inspect::execute_incident(
            format,
            &ctx.open_store(graph)?,
            main,
            *vertex,
            Direction::Outbound,
        ),

        Some(Commands::Inbound { vertex, graph }) => inspect::execute_incident(
            format,
            &ctx.open_store(graph)?,
            main,
            *vertex,
            Direction::Inbound,
        ),

        Some(Commands::Components(args)) => {
            analyze::execute_components(format, &mut ctx.open_store(args)?, main)
        }

        Some(Commands::Path { start, end, graph }) => {
            analyze::execute_path(format, &ctx.open_store(graph)?, main, *start, *end)
        }

        Some(Commands::Mst { start, graph }) => {
            analyze::execute_mst(format, &ctx.open_store(graph)?, main, *start)
        }

        Some(Commands::Tour { start, graph }) => {
            analyze::execute_tour(format, &mut ctx.open_store(graph)?, main, *start)
        }

        Some(Commands::Dump(args)) => dump::execute(format, &ctx.open_store(args)?, main),

        Some(Commands::Shell(args)) => shell::execute(&ctx, ctx.open_store(args)?),
    }
}
