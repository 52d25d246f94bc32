use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tasks", about = concat!("tasks v", env!("CARGO_PKG_VERSION"), " - a terminal to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file for the TUI (default: ./tasklist.toml if present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Append one line per dispatched intent to this file
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a script of intents headlessly and print the resulting view
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, or `-` for stdin
    pub script: String,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
