use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Pick a value from a filterable dropdown in the terminal.
#[derive(Parser)]
#[command(name = "ddi", version, about = "Dropdown input picker")]
pub struct Cli {
    /// Write diagnostics to this file (level from DDI_LOG, default debug).
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
