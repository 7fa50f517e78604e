use std::env;
use std::path::PathBuf;

/// The well-known user directories the cleanup stages operate on.
///
/// Stages resolve every root through this trait instead of reading the
/// environment directly, which keeps the purge logic platform-agnostic and
/// lets tests substitute temporary directories. Each accessor returns `None`
/// when the host cannot provide that root; callers decide whether that is a
/// silent skip or a fatal precondition.
pub trait EnvironmentPaths {
    /// The user's home directory.
    fn home(&self) -> Option<PathBuf>;

    /// Root for machine-local application data. Browser disk caches live
    /// under here.
    fn local_app_data(&self) -> Option<PathBuf>;

    /// Root for roaming per-user application data. Browser profiles live
    /// under here.
    fn roaming_app_data(&self) -> Option<PathBuf>;

    /// The OS-designated temporary directory.
    fn temp_dir(&self) -> Option<PathBuf>;
}

/// `EnvironmentPaths` backed by the host environment.
pub struct HostPaths;

impl EnvironmentPaths for HostPaths {
    fn home(&self) -> Option<PathBuf> {
        env::home_dir()
    }

    #[cfg(windows)]
    fn local_app_data(&self) -> Option<PathBuf> {
        env::var_os("LOCALAPPDATA").map(PathBuf::from)
    }

    #[cfg(not(windows))]
    fn local_app_data(&self) -> Option<PathBuf> {
        env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| self.home().map(|home| home.join(".local").join("share")))
    }

    #[cfg(windows)]
    fn roaming_app_data(&self) -> Option<PathBuf> {
        env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(not(windows))]
    fn roaming_app_data(&self) -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| self.home().map(|home| home.join(".config")))
    }

    fn temp_dir(&self) -> Option<PathBuf> {
        Some(env::temp_dir())
    }
}
