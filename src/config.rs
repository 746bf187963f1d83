use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Where the replay archives live.
pub const DOWNLOAD_BASE: &str = "https://replay.io/downloads";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }
}

/// Everything the installer needs, resolved once at startup. The install
/// path never reads the environment itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub platform: Platform,
    /// Skip the replay browser phase (PLAYWRIGHT_SKIP_BROWSER_DOWNLOAD).
    pub skip_replay: bool,
    /// Base directory for all replay binaries (RECORD_REPLAY_DIRECTORY,
    /// defaults to ~/.replay).
    pub install_root: PathBuf,
    pub download_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::consts::OS,
            std::env::var_os("PLAYWRIGHT_SKIP_BROWSER_DOWNLOAD"),
            std::env::var_os("RECORD_REPLAY_DIRECTORY"),
            dirs::home_dir(),
        )
    }

    fn resolve(
        os: &str,
        skip_var: Option<OsString>,
        dir_var: Option<OsString>,
        home: Option<PathBuf>,
    ) -> Result<Self> {
        // An empty override behaves like an unset one, as in `$VAR || default`.
        let install_root = match dir_var.filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => home
                .context("cannot determine home directory for default install root")?
                .join(".replay"),
        };
        Ok(Config {
            platform: Platform::from_os(os),
            skip_replay: skip_var.is_some(),
            install_root,
            download_base: DOWNLOAD_BASE.to_string(),
        })
    }

    /// Directory the browser archives are unpacked into.
    pub fn playwright_dir(&self) -> PathBuf {
        self.install_root.join("playwright")
    }
}
