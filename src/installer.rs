use crate::config::Config;
use crate::fetch;
use crate::jobs::{jobs_for, InstallJob};
use anyhow::{bail, Context, Result};
use fs_err as fs;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::path::Path;
use std::process::Command;
use std::time::Duration;

/// Show what the replay phase would do, without touching network or disk.
pub fn plan(cfg: &Config) {
    if cfg.skip_replay {
        println!("Replay browser install is disabled (skip flag set)");
        return;
    }
    let jobs = jobs_for(cfg.platform);
    if jobs.is_empty() {
        println!("No replay browsers available for this platform");
        return;
    }
    for job in jobs {
        println!(
            "{} -> {}",
            job.archive,
            cfg.playwright_dir().join(job.final_name).display()
        );
    }
}

/// Install every replay browser for the configured platform, one at a time.
/// The first failure aborts the run; there is no partial-success reporting.
pub fn install_replay_browsers(cfg: &Config) -> Result<()> {
    if cfg.skip_replay {
        return Ok(());
    }
    let jobs = jobs_for(cfg.platform);
    if jobs.is_empty() {
        return Ok(());
    }
    println!("Installing replay browsers...");
    let client = fetch::client().context("building download client")?;
    for job in jobs {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        pb.enable_steady_tick(Duration::from_millis(120));
        pb.set_message(format!("Installing {}", job.final_name));
        let res = install_job(&client, cfg, job, Some(&pb));
        match &res {
            Ok(_) => pb.finish_with_message(format!("{} OK", job.final_name)),
            Err(e) => pb.finish_with_message(format!("{} FAILED: {e}", job.final_name)),
        }
        res.with_context(|| format!("installing {}", job.final_name))?;
    }
    println!("Done.");
    Ok(())
}

/// Run one install job: skip if already present, otherwise download the
/// archive, unpack it under `<root>/playwright` and normalize the directory
/// name. Skipping happens before any network traffic.
pub fn install_job(
    client: &Client,
    cfg: &Config,
    job: &InstallJob,
    pb: Option<&ProgressBar>,
) -> Result<()> {
    let playwright_dir = cfg.playwright_dir();
    let final_dir = playwright_dir.join(job.final_name);
    if final_dir.exists() {
        if let Some(p) = pb {
            p.set_message(format!("{} already installed (skip)", job.final_name));
        }
        return Ok(());
    }

    if let Some(p) = pb {
        p.set_message(format!("GET {}", job.archive));
    }
    let contents = fetch::download_with_retry(client, &cfg.download_base, job.archive)
        .with_context(|| format!("fetching {}", job.archive))?;

    // Two fixed levels, created separately; anything deeper is on the user.
    for dir in [&cfg.install_root, &playwright_dir] {
        if !dir.exists() {
            fs::create_dir(dir)?;
        }
    }
    let archive_path = playwright_dir.join(job.archive);
    fs::write(&archive_path, &contents)?;

    if let Some(p) = pb {
        p.set_message(format!("Extract {}", job.archive));
    }
    extract(&playwright_dir, job.archive)?;
    fs::remove_file(&archive_path)?;

    if job.extracted_name != job.final_name {
        fs::rename(playwright_dir.join(job.extracted_name), &final_dir).with_context(|| {
            format!(
                "renaming extracted '{}' to '{}'",
                job.extracted_name, job.final_name
            )
        })?;
    }
    Ok(())
}

/// Unpack with the system tar, which handles the .tar.xz archives on its own.
/// A missing tool or a non-zero exit is reported here rather than left to
/// surface as a rename failure later.
fn extract(dir: &Path, archive: &str) -> Result<()> {
    let tar = which::which("tar").context("'tar' not found on PATH")?;
    let status = Command::new(tar)
        .arg("xf")
        .arg(archive)
        .current_dir(dir)
        .status()
        .with_context(|| format!("running tar on {archive}"))?;
    if !status.success() {
        bail!("tar exited with {status} while extracting {archive}");
    }
    Ok(())
}
