use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enables or disables debug-level output for the lifetime of the process.
/// Called once at startup with the value of the `--debug` flag.
pub fn init(debug: bool) {
    DEBUG_ENABLED.store(debug, Ordering::Relaxed);
}

/// Returns `true` when debug output was requested at startup.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

pub fn info(message: &str) {
    eprintln!("{}", message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

pub fn debug(message: &str) {
    if is_debug_enabled() {
        eprintln!("{} {}", "[debug]".dimmed(), message);
    }
}

/// Logs an informational message to stderr.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logger::info(&format!($($arg)*))
    };
}

/// Logs a warning to stderr.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::warn(&format!($($arg)*))
    };
}

/// Logs an error to stderr.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::error(&format!($($arg)*))
    };
}

/// Logs a debug message to stderr; silent unless `--debug` was given.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::debug(&format!($($arg)*))
    };
}
