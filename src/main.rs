use std::path::Path;

use clap::Parser;
use tasklist::cli::commands::{Cli, Commands};
use tasklist::cli::handlers;
use tasklist::io::config_io;
use tasklist::io::session_log::SessionLog;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand → launch TUI
        None => launch_tui(cli.config.as_deref(), cli.log.as_deref()),
        Some(Commands::Replay(args)) => handlers::cmd_replay(args, cli.log.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn launch_tui(config: Option<&Path>, log: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(config, &cwd)?;
    let log = log.map(SessionLog::open).transpose()?;
    tasklist::tui::run(config, log)
}
