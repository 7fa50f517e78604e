use crate::core::purge::{PurgeError, PurgeOutcome};
use crate::log_debug;
use crate::utils::env_paths::EnvironmentPaths;
use crate::utils::filesystem::{bytes_to_human, calculate_dir_size};
use std::path::{Path, PathBuf};

/// Represents the result of purging one target directory.
/// Collected by the orchestrator to build the summary table.
#[derive(Debug)]
pub struct TargetReport {
    // Human label for the target (e.g. "Chrome cache").
    pub label: String,
    // The directory whose contents were purged.
    pub path: PathBuf,
    // Bytes reclaimed, measured before and after the purge.
    pub freed: u64,
    // Structured per-entry result of the purge.
    pub outcome: PurgeOutcome,
}

/// Everything one cleanup stage did in a single run.
#[derive(Debug)]
pub struct CleanerReport {
    pub cleaner: String,
    pub targets: Vec<TargetReport>,
}

impl CleanerReport {
    pub fn new(cleaner: &str) -> Self {
        CleanerReport {
            cleaner: cleaner.to_string(),
            targets: Vec::new(),
        }
    }
}

/// Defines a common interface for any component that can perform a specific cleaning task.
///
/// Implementations resolve their target directories through the supplied
/// [`EnvironmentPaths`], so the stage logic itself stays free of platform lookups
/// and tests can substitute temporary directories.
pub trait Cleaner {
    /// Returns the user-friendly name of the cleaner (e.g., "Browser Caches").
    fn name(&self) -> &str;

    /// Executes the cleaning logic for this specific cleaner.
    ///
    /// An `Err` here is the stage's fatal precondition failure (its root target
    /// could not be resolved at all); per-entry trouble lives inside the returned
    /// report and never aborts a stage.
    ///
    /// # Returns
    /// A `Result` containing a [`CleanerReport`] on success, or a [`PurgeError`] on failure.
    fn clean(&self, env: &dyn EnvironmentPaths) -> Result<CleanerReport, PurgeError>;
}

/// Purges one target directory with the given purge routine and measures the
/// space reclaimed.
///
/// The directory is sized before and after the purge; the difference is what the
/// summary reports as freed. Sizing is best-effort and never fails the purge.
pub fn purge_target<F>(label: &str, path: PathBuf, purge: F) -> Result<TargetReport, PurgeError>
where
    F: FnOnce(&Path) -> Result<PurgeOutcome, PurgeError>,
{
    log_debug!("Purging {}: {}", label, path.display());

    let size_before = calculate_dir_size(&path);
    let outcome = purge(&path)?;
    let freed = size_before.saturating_sub(calculate_dir_size(&path));

    log_debug!("{} freed {}", label, bytes_to_human(freed));

    Ok(TargetReport {
        label: label.to_string(),
        path,
        freed,
        outcome,
    })
}

// Re-export individual cleaner implementations.
// This makes the specific cleaner structs (e.g., `DownloadsCleaner`) directly accessible
// from `crate::core::cleaners` without needing to specify their sub-modules.
pub mod browser_caches;
pub use self::browser_caches::BrowserCachesCleaner;
pub mod downloads;
pub use self::downloads::DownloadsCleaner;
pub mod temporary_files;
pub use self::temporary_files::TemporaryFilesCleaner;
