use crate::core::cleaners::{purge_target, Cleaner, CleanerReport};
use crate::core::purge::{purge_dir_contents, PurgeError};
use crate::utils::env_paths::EnvironmentPaths;
use crate::{log_debug, log_info, log_warn};
use glob::glob;
use std::path::{Path, PathBuf};

/// Clears the on-disk caches of the supported browser families.
///
/// Chrome keeps a single primary cache for its default profile; Firefox
/// keeps one cache per profile, so every profile directory is checked.
/// Paths that are absent (browser not installed, different OS layout) are
/// skipped silently, and one profile's failure never stops the others.
pub struct BrowserCachesCleaner;

impl BrowserCachesCleaner {
    pub fn new() -> Self {
        BrowserCachesCleaner
    }
}

impl Cleaner for BrowserCachesCleaner {
    fn name(&self) -> &str {
        "Browser Caches"
    }

    fn clean(&self, env: &dyn EnvironmentPaths) -> Result<CleanerReport, PurgeError> {
        let mut report = CleanerReport::new(self.name());

        // --- Chrome cache ---
        // A single fixed cache location for the default profile, under the
        // local application-data root.
        if let Some(local) = env.local_app_data() {
            let chrome = local
                .join("Google")
                .join("Chrome")
                .join("User Data")
                .join("Default")
                .join("Cache");
            if chrome.is_dir() {
                match purge_target("Chrome cache", chrome, purge_dir_contents) {
                    Ok(target) => {
                        log_info!("Chrome cache cleared.");
                        report.targets.push(target);
                    }
                    Err(err) => log_warn!("Skipping Chrome cache: {}", err),
                }
            } else {
                log_debug!("No Chrome cache at {}", chrome.display());
            }
        } else {
            log_debug!("No local application-data root; skipping Chrome.");
        }

        // --- Firefox caches ---
        // One cache per profile under the roaming root; requires navigating
        // the profile directories.
        if let Some(roaming) = env.roaming_app_data() {
            let profiles = roaming.join("Mozilla").join("Firefox").join("Profiles");
            for profile in firefox_profiles(&profiles) {
                let cache = profile.join("cache2").join("entries");
                if !cache.is_dir() {
                    log_debug!("No cache for profile {}", profile.display());
                    continue;
                }
                let profile_name = profile
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let label = format!("Firefox profile {}", profile_name);
                match purge_target(&label, cache, purge_dir_contents) {
                    Ok(target) => {
                        log_info!("Firefox cache cleared for profile {}.", profile_name);
                        report.targets.push(target);
                    }
                    Err(err) => log_warn!("Skipping Firefox profile {}: {}", profile_name, err),
                }
            }
        } else {
            log_debug!("No roaming application-data root; skipping Firefox.");
        }

        Ok(report)
    }
}

/// Enumerates Firefox profile directories under the profiles root.
fn firefox_profiles(profiles_root: &Path) -> Vec<PathBuf> {
    let pattern = profiles_root.join("*");
    match glob(&pattern.to_string_lossy()) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_dir())
            .collect(),
        Err(err) => {
            log_warn!("Invalid profile pattern {}: {}", pattern.display(), err);
            Vec::new()
        }
    }
}
