mod cli;
mod config;
mod fetch;
mod installer;
mod jobs;
mod primary;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = Config::from_env()?;
    if let Some(root) = cli.install_root {
        cfg.install_root = root;
    }
    if cli.skip_replay {
        cfg.skip_replay = true;
    }
    match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => {
            primary::install_default_browsers()?;
            installer::install_replay_browsers(&cfg)?;
        }
        Commands::Plan => installer::plan(&cfg),
    }
    Ok(())
}
