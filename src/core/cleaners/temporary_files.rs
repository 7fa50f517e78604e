use crate::core::cleaners::{purge_target, Cleaner, CleanerReport};
use crate::core::purge::{purge_dir_contents, PurgeError};
use crate::log_info;
use crate::utils::env_paths::EnvironmentPaths;
use std::io;

/// Empties the OS-designated temporary directory.
///
/// There is no meaningful fallback when the temp directory cannot be
/// resolved, so that case is fatal for this stage.
pub struct TemporaryFilesCleaner;

impl TemporaryFilesCleaner {
    pub fn new() -> Self {
        TemporaryFilesCleaner
    }
}

impl Cleaner for TemporaryFilesCleaner {
    fn name(&self) -> &str {
        "Temporary Files"
    }

    fn clean(&self, env: &dyn EnvironmentPaths) -> Result<CleanerReport, PurgeError> {
        let temp = env
            .temp_dir()
            .ok_or_else(|| PurgeError::DirectoryUnavailable {
                path: "temp".into(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "temporary directory could not be resolved",
                ),
            })?;

        let target = purge_target("Temporary files", temp, purge_dir_contents)?;
        log_info!("Temporary files removed.");

        let mut report = CleanerReport::new(self.name());
        report.targets.push(target);
        Ok(report)
    }
}
