use crate::config::Platform;

/// One replay browser to install: which archive to fetch, what the archive
/// unpacks to, and what the directory must end up named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallJob {
    pub archive: &'static str,
    pub extracted_name: &'static str,
    pub final_name: &'static str,
}

const MACOS_JOBS: &[InstallJob] = &[InstallJob {
    archive: "macOS-replay-playwright.tar.xz",
    extracted_name: "firefox",
    final_name: "firefox",
}];

const LINUX_JOBS: &[InstallJob] = &[
    InstallJob {
        archive: "linux-replay-playwright.tar.xz",
        extracted_name: "firefox",
        final_name: "firefox",
    },
    InstallJob {
        archive: "linux-replay-chromium.tar.xz",
        extracted_name: "replay-chromium",
        final_name: "chrome-linux",
    },
];

/// Jobs for a platform, in install order. Unsupported platforms get none.
pub fn jobs_for(platform: Platform) -> &'static [InstallJob] {
    match platform {
        Platform::MacOs => MACOS_JOBS,
        Platform::Linux => LINUX_JOBS,
        Platform::Other => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_installs_firefox_only() {
        let jobs = jobs_for(Platform::MacOs);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].archive, "macOS-replay-playwright.tar.xz");
        assert_eq!(jobs[0].extracted_name, "firefox");
        assert_eq!(jobs[0].final_name, "firefox");
    }

    #[test]
    fn linux_installs_firefox_then_chromium() {
        let jobs = jobs_for(Platform::Linux);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].archive, "linux-replay-playwright.tar.xz");
        assert_eq!(jobs[1].archive, "linux-replay-chromium.tar.xz");
        // chromium unpacks under one name but must be installed under another
        assert_eq!(jobs[1].extracted_name, "replay-chromium");
        assert_eq!(jobs[1].final_name, "chrome-linux");
    }

    #[test]
    fn unsupported_platforms_get_no_jobs() {
        assert!(jobs_for(Platform::Other).is_empty());
    }
}
