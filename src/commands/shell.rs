//! `graphws shell` - line-oriented session against a live store
//!
//! One command per line on stdin. A failing command is reported on stderr
//! and the session continues with the next line.

use std::io::{self, BufRead};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::inspect::{self, Direction};
use crate::commands::{analyze, dump};
use graphws_core::bail_usage;
use graphws_core::error::{GraphError, Result};
use graphws_core::graph::{Cost, Vertex};
use graphws_core::store::{GraphStore, MAIN_WORKSPACE};

const HELP: &str = "\
commands (act on the current workspace unless noted):
  use <gi>                 switch the current workspace
  workspaces               list workspaces
  clone                    copy the current workspace into a new slot
  overwrite <gi>           replace the main graph with a copy of <gi>
  delete <gi>              delete the last workspace
  info | vertices | dump
  add-vertex <v>           remove-vertex <v>
  add-edge <u> <v> <c>     remove-edge <u> <v>      set-cost <u> <v> <c>
  edge <u> <v>             has-edge <u> <v>
  degree <v>
  outbound <v>             inbound <v>
  components               path <start> <end>
  mst <start>              tour <start>
  help                     quit
";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Use(usize),
    Workspaces,
    Clone,
    Overwrite(usize),
    Delete(usize),
    Info,
    Vertices,
    Dump,
    AddVertex(Vertex),
    RemoveVertex(Vertex),
    AddEdge(Vertex, Vertex, Cost),
    RemoveEdge(Vertex, Vertex),
    SetCost(Vertex, Vertex, Cost),
    Edge(Vertex, Vertex),
    HasEdge(Vertex, Vertex),
    Degree(Vertex),
    Outbound(Vertex),
    Inbound(Vertex),
    Components,
    Path(Vertex, Vertex),
    Mst(Vertex),
    Tour(Vertex),
    Help,
    Quit,
}

fn arg<T: FromStr>(args: &[&str], i: usize, name: &str) -> Result<T> {
    let Some(raw) = args.get(i) else {
        bail_usage!(format!("missing argument <{}>", name));
    };
    raw.parse()
        .map_err(|_| GraphError::UsageError(format!("invalid <{}>: {:?}", name, raw)))
}

fn arity(word: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() > expected {
        bail_usage!(format!(
            "{} takes {} argument(s), got {}",
            word,
            expected,
            args.len()
        ));
    }
    Ok(())
}

/// Parse a line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let (command, expected) = match word {
        "use" => (ShellCommand::Use(arg(&args, 0, "gi")?), 1),
        "workspaces" => (ShellCommand::Workspaces, 0),
        "clone" => (ShellCommand::Clone, 0),
        "overwrite" => (ShellCommand::Overwrite(arg(&args, 0, "gi")?), 1),
        "delete" => (ShellCommand::Delete(arg(&args, 0, "gi")?), 1),
        "info" => (ShellCommand::Info, 0),
        "vertices" => (ShellCommand::Vertices, 0),
        "dump" => (ShellCommand::Dump, 0),
        "add-vertex" => (ShellCommand::AddVertex(arg(&args, 0, "v")?), 1),
        "remove-vertex" => (ShellCommand::RemoveVertex(arg(&args, 0, "v")?), 1),
        "add-edge" => (
            ShellCommand::AddEdge(arg(&args, 0, "u")?, arg(&args, 1, "v")?, arg(&args, 2, "c")?),
            3,
        ),
        "remove-edge" => (
            ShellCommand::RemoveEdge(arg(&args, 0, "u")?, arg(&args, 1, "v")?),
            2,
        ),
        "set-cost" => (
            ShellCommand::SetCost(arg(&args, 0, "u")?, arg(&args, 1, "v")?, arg(&args, 2, "c")?),
            3,
        ),
        "edge" => (ShellCommand::Edge(arg(&args, 0, "u")?, arg(&args, 1, "v")?), 2),
        "has-edge" => (
            ShellCommand::HasEdge(arg(&args, 0, "u")?, arg(&args, 1, "v")?),
            2,
        ),
        "degree" => (ShellCommand::Degree(arg(&args, 0, "v")?), 1),
        "outbound" => (ShellCommand::Outbound(arg(&args, 0, "v")?), 1),
        "inbound" => (ShellCommand::Inbound(arg(&args, 0, "v")?), 1),
        "components" => (ShellCommand::Components, 0),
        "path" => (
            ShellCommand::Path(arg(&args, 0, "start")?, arg(&args, 1, "end")?),
            2,
        ),
        "mst" => (ShellCommand::Mst(arg(&args, 0, "start")?), 1),
        "tour" => (ShellCommand::Tour(arg(&args, 0, "start")?), 1),
        "help" => (ShellCommand::Help, 0),
        "quit" | "exit" => (ShellCommand::Quit, 0),
        other => bail_usage!(format!("unknown command: {} (try `help`)", other)),
    };
    arity(word, &args, expected)?;
    Ok(Some(command))
}

/// Whether the session goes on after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A store plus the workspace that commands act on
pub struct Session {
    store: GraphStore,
    current: usize,
    format: OutputFormat,
}

impl Session {
    pub fn new(store: GraphStore, format: OutputFormat) -> Self {
        Session {
            store,
            current: MAIN_WORKSPACE,
            format,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        let (format, gi) = (self.format, self.current);
        match command {
            ShellCommand::Use(index) => {
                self.store.get(index)?;
                self.current = index;
            }
            ShellCommand::Workspaces => inspect::execute_workspaces(format, &self.store, gi)?,
            ShellCommand::Clone => {
                let index = self.store.clone_workspace(gi)?;
                inspect::execute_info(format, &self.store, index)?;
            }
            ShellCommand::Overwrite(index) => self.store.overwrite_main(index)?,
            ShellCommand::Delete(index) => {
                self.store.delete_workspace(index)?;
                if self.current >= self.store.workspace_count() {
                    tracing::info!(deleted = index, "current workspace deleted, back to main");
                    self.current = MAIN_WORKSPACE;
                }
            }
            ShellCommand::Info => inspect::execute_info(format, &self.store, gi)?,
            ShellCommand::Vertices => inspect::execute_vertices(format, &self.store, gi)?,
            ShellCommand::Dump => dump::execute(format, &self.store, gi)?,
            ShellCommand::AddVertex(v) => self.store.add_vertex(v, gi)?,
            ShellCommand::RemoveVertex(v) => self.store.remove_vertex(v, gi)?,
            ShellCommand::AddEdge(u, v, c) => self.store.add_edge(u, v, c, gi)?,
            ShellCommand::RemoveEdge(u, v) => self.store.remove_edge(u, v, gi)?,
            ShellCommand::SetCost(u, v, c) => self.store.set_cost(u, v, c, gi)?,
            ShellCommand::Edge(u, v) => inspect::execute_edge(format, &self.store, gi, u, v)?,
            ShellCommand::HasEdge(u, v) => {
                inspect::execute_has_edge(format, &self.store, gi, u, v)?
            }
            ShellCommand::Degree(v) => inspect::execute_degree(format, &self.store, gi, v)?,
            ShellCommand::Outbound(v) => {
                inspect::execute_incident(format, &self.store, gi, v, Direction::Outbound)?
            }
            ShellCommand::Inbound(v) => {
                inspect::execute_incident(format, &self.store, gi, v, Direction::Inbound)?
            }
            ShellCommand::Components => analyze::execute_components(format, &mut self.store, gi)?,
            ShellCommand::Path(s, e) => analyze::execute_path(format, &self.store, gi, s, e)?,
            ShellCommand::Mst(s) => analyze::execute_mst(format, &self.store, gi, s)?,
            ShellCommand::Tour(s) => analyze::execute_tour(format, &mut self.store, gi, s)?,
            ShellCommand::Help => print!("{}", HELP),
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Run every line of `input`, reporting failures and carrying on.
    /// Returns the number of failed lines.
    pub fn run<R: BufRead>(&mut self, input: R, interrupted: &AtomicBool) -> Result<usize> {
        let mut failures = 0usize;
        for (n, line) in input.lines().enumerate() {
            if interrupted.load(Ordering::SeqCst) {
                return Err(GraphError::Interrupted);
            }
            let line = match line {
                Ok(line) => line,
                // not UTF-8; the bytes up to the newline are already consumed
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    failures += 1;
                    self.report(n + 1, &e.into());
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            let outcome = parse_line(&line).and_then(|parsed| match parsed {
                Some(command) => self.execute(command),
                None => Ok(Flow::Continue),
            });
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    failures += 1;
                    self.report(n + 1, &e);
                }
            }
        }
        Ok(failures)
    }

    fn report(&self, line: usize, e: &GraphError) {
        tracing::debug!(line, error = %e, "shell command failed");
        match self.format {
            OutputFormat::Json => eprintln!("{}", e.to_json()),
            OutputFormat::Human => eprintln!("error: line {}: {}", line, e),
        }
    }
}

/// Execute the shell command over stdin
pub fn execute(ctx: &CommandContext, store: GraphStore) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let mut session = Session::new(store, ctx.format);
    let failures = session.run(io::stdin().lock(), &interrupted)?;

    if failures > 0 && !ctx.cli.quiet {
        tracing::warn!(failures, "some shell commands failed");
    }
    tracing::debug!(
        workspaces = session.store().workspace_count(),
        current = session.current(),
        failures,
        "shell finished"
    );
    Ok(())
}
