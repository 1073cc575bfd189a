//! Shared argument groups

use clap::Args;
use std::path::PathBuf;

/// Where the main graph comes from
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Edge-list file to load as the main graph (starts empty when omitted)
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,

    /// Insert every loaded edge in both directions
    #[arg(long)]
    pub undirected: bool,
}
