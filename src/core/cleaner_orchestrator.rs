use crate::core::cleaners::{
    BrowserCachesCleaner, Cleaner, CleanerReport, DownloadsCleaner, TemporaryFilesCleaner,
};
use crate::utils::env_paths::EnvironmentPaths;
use crate::utils::filesystem::bytes_to_human;
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

/// Represents an entry in the cleanup summary table.
/// This struct is derived with `Tabled` to automatically generate table rows.
#[derive(Tabled, Clone)]
struct SummaryEntry {
    // `#[tabled(rename = "Target")]` renames the column header in the output table.
    #[tabled(rename = "Target")]
    target: String,
    // The file system path that was purged.
    #[tabled(rename = "Path")]
    path: String,
    // How many direct entries the purge removed.
    #[tabled(rename = "Removed")]
    removed: String,
    // The space reclaimed, formatted as a human-readable string (e.g. "1.2 GB").
    #[tabled(rename = "Freed")]
    freed: String,
}

/// Represents an entry for paths (or whole stages) that failed to be cleaned.
/// This struct is also `Tabled` for displaying failure reports.
#[derive(Tabled, Clone)]
struct FailedEntry {
    // The path that could not be cleaned.
    #[tabled(rename = "Path")]
    path: String,
    // The error message explaining why the cleaning failed.
    #[tabled(rename = "Error")]
    error: String,
}

/// Runs the given stages strictly in order and prints the summary.
///
/// Stages run one at a time; every deletion blocks until the filesystem
/// finishes it. A stage's fatal precondition failure is reported and does
/// not prevent the stages after it from running.
pub fn run_stages(
    cleaners: &[Box<dyn Cleaner>],
    env: &dyn EnvironmentPaths,
) -> Vec<CleanerReport> {
    let mut reports = Vec::new();
    let mut failures: Vec<FailedEntry> = Vec::new();

    for cleaner in cleaners {
        log_debug!("Starting {} stage", cleaner.name());
        match cleaner.clean(env) {
            Ok(report) => {
                // Collect the stage's isolated per-entry failures for the failures table.
                for target in &report.targets {
                    for failure in &target.outcome.failures {
                        failures.push(FailedEntry {
                            path: failure.path.display().to_string(),
                            error: failure.kind.to_string(),
                        });
                    }
                }
                reports.push(report);
            }
            Err(err) => {
                // A fatal precondition failure is local to its stage; the loop
                // carries on with the stages after it.
                log_warn!("❌ {} stage failed: {}", cleaner.name(), err);
                failures.push(FailedEntry {
                    path: format!("Stage: {}", cleaner.name()),
                    error: err.to_string(),
                });
            }
        }
    }

    print_summary(&reports, &failures);
    reports
}

// --- Summary Section ---
fn print_summary(reports: &[CleanerReport], failures: &[FailedEntry]) {
    let mut rows: Vec<SummaryEntry> = Vec::new();
    let mut total_freed: u64 = 0;
    let mut total_removed: usize = 0;

    for report in reports {
        for target in &report.targets {
            rows.push(SummaryEntry {
                target: target.label.clone(),
                path: target.path.display().to_string(),
                removed: target.outcome.removed.to_string(),
                freed: bytes_to_human(target.freed),
            });
            total_freed += target.freed;
            total_removed += target.outcome.removed;
        }
    }
    rows.push(SummaryEntry {
        target: "Total".to_string(),
        path: String::new(),
        removed: total_removed.to_string(),
        freed: bytes_to_human(total_freed),
    });

    let table = Table::new(&rows).with(Style::modern()).to_string();
    println!("\n{}", "🧾 Cleanup Summary".bold().underline().green());
    println!("{}", table);

    if !failures.is_empty() {
        let table = Table::new(failures).with(Style::modern()).to_string();
        println!("\n{}", "⚠️ Cleanup Failures".bold().underline().yellow());
        println!("{}", table);
    }

    log_info!(
        "✅ Total space freed: {}",
        bytes_to_human(total_freed).bright_green().bold()
    );
}

/// Removes today's files from the Downloads folder.
pub fn clean_downloads(env: &dyn EnvironmentPaths) -> Vec<CleanerReport> {
    let stages: Vec<Box<dyn Cleaner>> = vec![Box::new(DownloadsCleaner::new())];
    run_stages(&stages, env)
}

/// Clears the known browser cache directories.
pub fn clean_browser_caches(env: &dyn EnvironmentPaths) -> Vec<CleanerReport> {
    let stages: Vec<Box<dyn Cleaner>> = vec![Box::new(BrowserCachesCleaner::new())];
    run_stages(&stages, env)
}

/// Empties the OS temporary directory.
pub fn clean_temporary_files(env: &dyn EnvironmentPaths) -> Vec<CleanerReport> {
    let stages: Vec<Box<dyn Cleaner>> = vec![Box::new(TemporaryFilesCleaner::new())];
    run_stages(&stages, env)
}

/// Runs every cleanup stage: today's downloads, then browser caches, then
/// temporary files, in that fixed order.
pub fn clean_everything(env: &dyn EnvironmentPaths) -> Vec<CleanerReport> {
    let stages: Vec<Box<dyn Cleaner>> = vec![
        Box::new(DownloadsCleaner::new()),
        Box::new(BrowserCachesCleaner::new()),
        Box::new(TemporaryFilesCleaner::new()),
    ];
    run_stages(&stages, env)
}
