use crate::log_warn;
use crate::utils::filesystem::remove_entry;
use chrono::{DateTime, Local, NaiveDate};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal precondition failure: the purge target itself could not be listed.
///
/// Everything that goes wrong *inside* a purge is isolated per entry and
/// recorded in the [`PurgeOutcome`] instead. This error is reserved for the
/// one case where no per-entry work can happen at all, and it aborts only
/// the stage that hit it.
#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Classifies an isolated per-entry failure.
#[derive(Debug)]
pub enum FailureKind {
    /// The OS denied deletion of the entry.
    PermissionDenied,
    /// Any other deletion failure, with the underlying cause.
    OperationFailed(io::Error),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::PermissionDenied => write!(f, "permission denied"),
            FailureKind::OperationFailed(err) => err.fmt(f),
        }
    }
}

/// A single entry that could not be deleted.
#[derive(Debug)]
pub struct EntryFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
}

/// Structured result of one purge call.
///
/// Partial failure is visible here as well as on the console, so callers and
/// tests can assert on outcomes instead of captured text.
#[derive(Debug, Default)]
pub struct PurgeOutcome {
    /// Entries removed from the target directory.
    pub removed: usize,
    /// Entries deliberately left in place by a date filter.
    pub retained: usize,
    /// Entries that could not be deleted.
    pub failures: Vec<EntryFailure>,
}

impl PurgeOutcome {
    /// Records an isolated failure and emits the matching diagnostic. The
    /// enclosing purge loop always continues past it.
    fn record_failure(&mut self, path: PathBuf, err: io::Error) {
        if err.kind() == io::ErrorKind::PermissionDenied {
            log_warn!("Access denied: {}", path.display());
            self.failures.push(EntryFailure {
                path,
                kind: FailureKind::PermissionDenied,
            });
        } else {
            log_warn!("Failed to delete {}: {}", path.display(), err);
            self.failures.push(EntryFailure {
                path,
                kind: FailureKind::OperationFailed(err),
            });
        }
    }
}

fn list_dir(dir: &Path) -> Result<fs::ReadDir, PurgeError> {
    fs::read_dir(dir).map_err(|source| PurgeError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    })
}

/// Deletes every direct entry inside `dir`, recursing into subdirectories.
///
/// Entries are processed in whatever order the directory listing yields.
/// Files and symbolic links are unlinked themselves; symlink targets are
/// never followed. Subdirectories are removed together with their contents.
/// A failure on one entry is diagnosed and does not stop the remaining
/// entries.
///
/// # Errors
///
/// Returns [`PurgeError::DirectoryUnavailable`] when `dir` itself cannot be
/// listed. Per-entry failures never surface here; they are collected in the
/// returned [`PurgeOutcome`].
pub fn purge_dir_contents(dir: &Path) -> Result<PurgeOutcome, PurgeError> {
    let mut outcome = PurgeOutcome::default();

    for entry in list_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                outcome.record_failure(dir.to_path_buf(), err);
                continue;
            }
        };
        let path = entry.path();
        match remove_entry(&path) {
            Ok(()) => outcome.removed += 1,
            Err(err) => outcome.record_failure(path, err),
        }
    }

    Ok(outcome)
}

/// Deletes entries inside `dir` that were created on `reference`.
///
/// Regular files are matched against the reference date and retained when
/// their creation date differs. Subdirectories are deleted together with
/// their contents no matter how old they are; the date filter applies to
/// top-level files only. Symbolic links and other specials are left alone.
///
/// The reference date is taken as a parameter so it is computed exactly once
/// per operation; a purge that straddles midnight keeps a single cutoff.
///
/// # Errors
///
/// Same contract as [`purge_dir_contents`]: only an unlistable `dir` is
/// fatal, everything else is isolated per entry.
pub fn purge_entries_created_on(
    dir: &Path,
    reference: NaiveDate,
) -> Result<PurgeOutcome, PurgeError> {
    let mut outcome = PurgeOutcome::default();

    for entry in list_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                outcome.record_failure(dir.to_path_buf(), err);
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                outcome.record_failure(path, err);
                continue;
            }
        };

        if file_type.is_dir() {
            // Subdirectories go regardless of their creation date.
            match remove_entry(&path) {
                Ok(()) => outcome.removed += 1,
                Err(err) => outcome.record_failure(path, err),
            }
        } else if file_type.is_file() {
            match entry_creation_date(&entry) {
                Ok(created) if created == reference => match remove_entry(&path) {
                    Ok(()) => outcome.removed += 1,
                    Err(err) => outcome.record_failure(path, err),
                },
                Ok(_) => outcome.retained += 1,
                Err(err) => outcome.record_failure(path, err),
            }
        } else {
            // Symlinks and other specials carry no useful creation date for
            // this filter; leave them in place.
            outcome.retained += 1;
        }
    }

    Ok(outcome)
}

/// Date-filtered purge against the current calendar day, computed once for
/// the whole operation.
pub fn purge_todays_entries(dir: &Path) -> Result<PurgeOutcome, PurgeError> {
    purge_entries_created_on(dir, Local::now().date_naive())
}

/// Calendar date the entry was created on, as reported by the host.
/// Falls back to the modification time where the filesystem tracks no birth
/// time, matching whatever creation-time attribute the OS exposes.
fn entry_creation_date(entry: &fs::DirEntry) -> io::Result<NaiveDate> {
    let metadata = entry.metadata()?;
    let created = metadata.created().or_else(|_| metadata.modified())?;
    Ok(DateTime::<Local>::from(created).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    fn entry_count(path: &Path) -> usize {
        fs::read_dir(path).unwrap().count()
    }

    #[test]
    fn purges_flat_directory_of_files() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.txt"));
        touch(&dir.path().join("b.txt"));

        let outcome = purge_dir_contents(dir.path()).unwrap();

        assert_eq!(outcome.removed, 2);
        assert!(outcome.failures.is_empty());
        assert!(dir.path().exists());
        assert_eq!(entry_count(dir.path()), 0);
    }

    #[test]
    fn purges_nested_tree() {
        let dir = tempdir().unwrap();
        let deep = dir.path().join("sub").join("deeper");
        fs::create_dir_all(&deep).unwrap();
        touch(&deep.join("c.txt"));
        touch(&dir.path().join("top.txt"));

        let outcome = purge_dir_contents(dir.path()).unwrap();

        // "sub" counts once; its contents go with it.
        assert_eq!(outcome.removed, 2);
        assert_eq!(entry_count(dir.path()), 0);
    }

    #[cfg(unix)]
    #[test]
    fn removes_symlinks_without_following_them() {
        use std::os::unix::fs::symlink;

        let outside = tempdir().unwrap();
        touch(&outside.path().join("target.txt"));
        let dir = tempdir().unwrap();
        symlink(
            outside.path().join("target.txt"),
            dir.path().join("file-link"),
        )
        .unwrap();
        symlink(outside.path(), dir.path().join("dir-link")).unwrap();

        let outcome = purge_dir_contents(dir.path()).unwrap();

        assert_eq!(outcome.removed, 2);
        assert_eq!(entry_count(dir.path()), 0);
        assert!(outside.path().join("target.txt").exists());
    }

    #[test]
    fn missing_root_is_a_fatal_precondition() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("nope");

        let err = purge_dir_contents(&gone).unwrap_err();

        match err {
            PurgeError::DirectoryUnavailable { path, .. } => assert_eq!(path, gone),
        }
    }

    #[test]
    fn second_run_on_emptied_directory_is_a_no_op() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.txt"));
        purge_dir_contents(dir.path()).unwrap();

        let outcome = purge_dir_contents(dir.path()).unwrap();

        assert_eq!(outcome.removed, 0);
        assert!(outcome.failures.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn permission_denial_is_isolated_to_the_entry() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();

        // Permission bits do not bind a privileged process; probe first and
        // bail out when deletion would succeed anyway.
        let probe = dir.path().join("probe");
        fs::create_dir(&probe).unwrap();
        touch(&probe.join("inner.txt"));
        fs::set_permissions(&probe, fs::Permissions::from_mode(0o555)).unwrap();
        let enforced = fs::remove_file(probe.join("inner.txt")).is_err();
        fs::set_permissions(&probe, fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }
        fs::remove_dir_all(&probe).unwrap();

        touch(&dir.path().join("free.txt"));
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        touch(&locked.join("pinned.txt"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let outcome = purge_dir_contents(dir.path()).unwrap();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(!dir.path().join("free.txt").exists());
        assert!(locked.join("pinned.txt").exists());
        assert_eq!(outcome.removed, 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.failures[0].kind,
            FailureKind::PermissionDenied
        ));
    }

    #[test]
    fn date_filter_removes_todays_files_and_all_subdirectories() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("fresh.txt"));
        let sub = dir.path().join("old-dir");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("inner.txt"));

        let outcome =
            purge_entries_created_on(dir.path(), Local::now().date_naive()).unwrap();

        assert_eq!(outcome.removed, 2);
        assert_eq!(outcome.retained, 0);
        assert_eq!(entry_count(dir.path()), 0);
    }

    #[test]
    fn date_filter_retains_files_from_other_days() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("fresh.txt"));
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        // A reference of yesterday makes the just-created file a non-match.
        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        let outcome = purge_entries_created_on(dir.path(), yesterday).unwrap();

        assert_eq!(outcome.retained, 1);
        assert!(dir.path().join("fresh.txt").exists());
        // Directories ignore the date filter entirely.
        assert!(!sub.exists());
    }

    #[test]
    fn date_filter_missing_root_is_fatal() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("absent");

        let result = purge_entries_created_on(&gone, Local::now().date_naive());

        assert!(matches!(
            result,
            Err(PurgeError::DirectoryUnavailable { .. })
        ));
    }
}
