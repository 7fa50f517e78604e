use crate::core::cleaners::{purge_target, Cleaner, CleanerReport};
use crate::core::purge::{purge_todays_entries, PurgeError};
use crate::log_info;
use crate::utils::env_paths::EnvironmentPaths;
use std::io;

/// Removes files downloaded today from the user's Downloads folder.
///
/// Only top-level regular files are matched against today's date;
/// subdirectories are cleared out wholesale, whatever their age.
pub struct DownloadsCleaner;

impl DownloadsCleaner {
    pub fn new() -> Self {
        DownloadsCleaner
    }
}

impl Cleaner for DownloadsCleaner {
    fn name(&self) -> &str {
        "Downloads"
    }

    fn clean(&self, env: &dyn EnvironmentPaths) -> Result<CleanerReport, PurgeError> {
        let downloads = env.home().map(|home| home.join("Downloads")).ok_or_else(|| {
            PurgeError::DirectoryUnavailable {
                path: "Downloads".into(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "home directory could not be resolved",
                ),
            }
        })?;

        let target = purge_target("Today's downloads", downloads, purge_todays_entries)?;
        log_info!("Today's downloads removed from {}", target.path.display());

        let mut report = CleanerReport::new(self.name());
        report.targets.push(target);
        Ok(report)
    }
}
