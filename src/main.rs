//! graphws - weighted directed graphs in indexed workspaces
//!
//! Loads an edge list as the main graph and runs queries, mutations and
//! analyses against it, one-shot or from a stdin shell.

mod cli;
mod commands;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphws_core::config::Config;
use graphws_core::error::{ExitCode as GraphExitCode, GraphError};
use graphws_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but parsing can fail before `Cli.format`
            // exists. Honour a requested JSON envelope anyway.
            if argv_format_json {
                let graph_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match Config::resolve(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => return report(&cli, cli.format.unwrap_or_default(), &e),
    };
    let format = cli.format.unwrap_or(config.output.format);

    let log_level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => Some(level.as_str()),
        (None, true) => None,
        (None, false) => Some(config.log.level.as_str()),
    };
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json || config.log.json)
    {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), %format, "parse_args");

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => report(&cli, format, &e),
    }
}

fn report(cli: &Cli, format: OutputFormat, e: &GraphError) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }
    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg.eq_ignore_ascii_case("--format=json") {
            return true;
        }
    }
    false
}
