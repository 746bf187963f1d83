use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "replay-install",
    about = "Install Playwright browsers plus the Replay-enabled browser builds"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Install root for replay browsers (same as RECORD_REPLAY_DIRECTORY)
    #[arg(long)]
    pub install_root: Option<PathBuf>,

    /// Skip the replay browser phase (same as PLAYWRIGHT_SKIP_BROWSER_DOWNLOAD)
    #[arg(long)]
    pub skip_replay: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install standard browsers, then the replay builds (the default)
    Install,
    /// Show which replay browsers would be installed and where (no changes)
    Plan,
}
