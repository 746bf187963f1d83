use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::process::Command;
use std::time::Duration;

const INSTALLER_PROGRAM: &str = "npx";
const INSTALLER_ARGS: &[&str] = &["playwright", "install"];

/// Run the bundled Playwright installer for the standard browsers. It does
/// its own downloading and error reporting; we only surface its exit status.
pub fn install_default_browsers() -> Result<()> {
    run_installer(INSTALLER_PROGRAM, INSTALLER_ARGS)
}

fn run_installer(program: &str, args: &[&str]) -> Result<()> {
    let resolved = which::which(program)
        .with_context(|| format!("'{program}' not found on PATH; cannot install browsers"))?;
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message("Installing playwright browsers");
    let status = Command::new(resolved)
        .args(args)
        .status()
        .with_context(|| format!("running {program}"))?;
    if !status.success() {
        pb.finish_with_message("Browser install FAILED");
        bail!("browser installer exited with {status}");
    }
    pb.finish_with_message("Browsers installed");
    Ok(())
}
