use crate::log_debug;
// Imports the `log_debug` macro for logging debug-level messages.
use std::fs;
// Imports the standard library's file system module for operations like deleting files/directories, reading metadata, etc.
use std::io;
// Imports the standard library's I/O module, primarily for `io::Result` and `io::Error`.
use std::path::Path;
// Imports `Path` from the standard library, a universal type for file system paths.
use walkdir::WalkDir;
// Imports `WalkDir` for error-tolerant recursive directory traversal.

/// Removes a single directory entry at the given path.
///
/// This function attempts to remove the specified file system entry.
/// It distinguishes between files/symlinks and directories to use the appropriate deletion method.
/// Symbolic links are removed themselves; their target is never followed.
///
/// If the path does not exist, this function returns `Ok(())` immediately, as the desired
/// state is already met. An entry that vanished between being listed and being deleted
/// therefore does not count as a failure.
///
/// # Arguments
/// * `path` - A reference to a `Path` indicating the file or directory to be removed.
///
/// # Errors
///
/// Returns an `io::Error` if the removal of the file or directory fails for any reason
/// (e.g., permission denied, path is locked, disk error).
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use broom::utils::filesystem::remove_entry;
/// // Attempt to remove a file named "somefile" in the /tmp directory.
/// remove_entry(Path::new("/tmp/somefile")).expect("Failed to remove path");
/// ```
pub fn remove_entry(path: &Path) -> io::Result<()> {
    // Log the attempt to remove the path at debug level.
    log_debug!("Attempting to remove path: {}", path.display());

    // Check if the path exists. If it doesn't, there's nothing to do, so return Ok immediately.
    // `exists()` follows symlinks, so a broken link needs its own check.
    if !path.is_symlink() && !path.exists() {
        log_debug!("Path does not exist: {}", path.display()); // Log that the path was not found.
        return Ok(()); // Return success as the desired state (path removed) is already met.
    }

    if path.is_symlink() || path.is_file() {
        // If it's a symbolic link or a file, use `fs::remove_file`. The symlink check comes
        // first so the link itself is unlinked without touching its target.
        log_debug!("Path is a file or symlink. Removing: {}", path.display());
        fs::remove_file(path)?; // The `?` operator propagates any `io::Error` that occurs.
    } else if path.is_dir() {
        // If it's a directory, use `fs::remove_dir_all` for recursive deletion.
        log_debug!("Path is a directory. Recursively removing: {}", path.display());
        fs::remove_dir_all(path)?; // Propagates any `io::Error`.
    } else {
        // For other unusual filesystem objects (e.g., fifo, socket),
        // attempt to remove them as if they were files.
        log_debug!("Path is an unusual filesystem object. Removing as file: {}", path.display());
        fs::remove_file(path)?; // Propagates any `io::Error`.
    }
    Ok(()) // Return Ok to indicate that the operation completed without an error.
}

/// Recursively calculates the total size of a directory or the size of a file.
///
/// This function walks the tree under `path` and sums up the sizes of all files
/// encountered. Symbolic links are not followed. Unreadable entries are skipped
/// rather than failing the caller; the result is only used for reporting how much
/// space a purge reclaimed.
///
/// # Arguments
/// * `path` - A reference to a `Path` representing the file or directory whose size is to be calculated.
///
/// # Returns
/// The total size in bytes of every readable file under `path`.
pub fn calculate_dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok()) // Skip entries that could not be read.
        .filter(|entry| entry.file_type().is_file()) // Only files contribute to the total.
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Converts a given number of bytes into a human-readable string representation.
///
/// The output is formatted with appropriate units (bytes, KB, MB, GB) and
/// two decimal places for KB, MB, and GB.
///
/// # Arguments
/// * `bytes` - The number of bytes (u64) to format.
///
/// # Returns
/// A `String` containing the human-readable size (e.g., "10.50 MB", "512 bytes").
pub fn bytes_to_human(bytes: u64) -> String {
    // Define constants for conversion factors as floating-point numbers for accurate division.
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64; // Cast the input `u64` bytes to `f64` for floating-point arithmetic.

    // Use an if-else if ladder to determine the appropriate unit and format the string.
    if b >= GB {
        format!("{:.2} GB", b / GB) // Format to two decimal places for Gigabytes.
    } else if b >= MB {
        format!("{:.2} MB", b / MB) // Format to two decimal places for Megabytes.
    } else if b >= KB {
        format!("{:.2} KB", b / KB) // Format to two decimal places for Kilobytes.
    } else {
        format!("{} bytes", bytes) // For sizes less than a kilobyte, display in raw bytes.
    }
}
