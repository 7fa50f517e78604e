use broom::core::cleaner_orchestrator::clean_everything;
use broom::core::cleaners::{
    BrowserCachesCleaner, Cleaner, DownloadsCleaner, TemporaryFilesCleaner,
};
use broom::core::purge::PurgeError;
use broom::utils::env_paths::EnvironmentPaths;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment rooted in temporary directories so the stages run for real
/// without touching the host's own folders.
#[derive(Default)]
struct FakePaths {
    home: Option<PathBuf>,
    local_app_data: Option<PathBuf>,
    roaming_app_data: Option<PathBuf>,
    temp: Option<PathBuf>,
}

impl EnvironmentPaths for FakePaths {
    fn home(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn local_app_data(&self) -> Option<PathBuf> {
        self.local_app_data.clone()
    }

    fn roaming_app_data(&self) -> Option<PathBuf> {
        self.roaming_app_data.clone()
    }

    fn temp_dir(&self) -> Option<PathBuf> {
        self.temp.clone()
    }
}

fn touch(path: &Path) {
    File::create(path).unwrap();
}

fn entry_count(path: &Path) -> usize {
    fs::read_dir(path).unwrap().count()
}

#[test]
fn chrome_cache_is_emptied_but_kept() {
    let root = TempDir::new().unwrap();
    let cache = root
        .path()
        .join("Google")
        .join("Chrome")
        .join("User Data")
        .join("Default")
        .join("Cache");
    fs::create_dir_all(&cache).unwrap();
    touch(&cache.join("f_000001"));
    touch(&cache.join("index"));

    let env = FakePaths {
        local_app_data: Some(root.path().to_path_buf()),
        ..Default::default()
    };
    let report = BrowserCachesCleaner::new().clean(&env).unwrap();

    assert_eq!(report.cleaner, "Browser Caches");
    assert_eq!(report.targets.len(), 1);
    assert_eq!(report.targets[0].outcome.removed, 2);
    // The cache directory itself stays; only its contents go.
    assert!(cache.is_dir());
    assert_eq!(entry_count(&cache), 0);
}

#[test]
fn firefox_profiles_are_purged_independently() {
    let roaming = TempDir::new().unwrap();
    let profiles = roaming
        .path()
        .join("Mozilla")
        .join("Firefox")
        .join("Profiles");
    let first = profiles.join("abc123.default-release").join("cache2").join("entries");
    let second = profiles.join("xyz789.dev-edition").join("cache2").join("entries");
    fs::create_dir_all(&first).unwrap();
    fs::create_dir_all(&second).unwrap();
    touch(&first.join("cached"));
    touch(&second.join("cached"));
    // A profile without a cache directory is skipped, not an error.
    fs::create_dir_all(profiles.join("stale-profile")).unwrap();

    let env = FakePaths {
        roaming_app_data: Some(roaming.path().to_path_buf()),
        ..Default::default()
    };
    let report = BrowserCachesCleaner::new().clean(&env).unwrap();

    assert_eq!(report.targets.len(), 2);
    assert_eq!(entry_count(&first), 0);
    assert_eq!(entry_count(&second), 0);
}

#[test]
fn missing_roots_degrade_to_a_no_op() {
    let env = FakePaths::default();

    let report = BrowserCachesCleaner::new().clean(&env).unwrap();

    assert!(report.targets.is_empty());
}

#[test]
fn temp_stage_requires_a_resolvable_directory() {
    let env = FakePaths::default();

    let err = TemporaryFilesCleaner::new().clean(&env).unwrap_err();

    assert!(matches!(err, PurgeError::DirectoryUnavailable { .. }));
}

#[test]
fn temp_stage_empties_the_directory() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("scratch.tmp"));
    fs::create_dir(temp.path().join("work")).unwrap();
    touch(&temp.path().join("work").join("inner.tmp"));

    let env = FakePaths {
        temp: Some(temp.path().to_path_buf()),
        ..Default::default()
    };
    let report = TemporaryFilesCleaner::new().clean(&env).unwrap();

    assert_eq!(report.targets[0].outcome.removed, 2);
    assert_eq!(entry_count(temp.path()), 0);
}

#[test]
fn downloads_stage_clears_todays_files_and_subdirectories() {
    let home = TempDir::new().unwrap();
    let downloads = home.path().join("Downloads");
    fs::create_dir(&downloads).unwrap();
    touch(&downloads.join("today.iso"));
    fs::create_dir(downloads.join("unpacked")).unwrap();

    let env = FakePaths {
        home: Some(home.path().to_path_buf()),
        ..Default::default()
    };
    let report = DownloadsCleaner::new().clean(&env).unwrap();

    assert_eq!(report.targets[0].outcome.removed, 2);
    assert_eq!(entry_count(&downloads), 0);
}

#[test]
fn downloads_stage_fails_without_a_home_directory() {
    let env = FakePaths::default();

    assert!(DownloadsCleaner::new().clean(&env).is_err());
}

#[test]
fn a_failed_stage_does_not_stop_the_ones_after_it() {
    // No home directory: the downloads stage fails its precondition, but
    // the later stages must still run.
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("leftover.tmp"));

    let env = FakePaths {
        temp: Some(temp.path().to_path_buf()),
        ..Default::default()
    };
    let reports = clean_everything(&env);

    // Browser caches (a no-op here) and temporary files both completed.
    assert_eq!(reports.len(), 2);
    assert_eq!(entry_count(temp.path()), 0);
}
