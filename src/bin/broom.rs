use broom::cli::commands::{Cli, Commands}; // Import the `Cli` struct and `Commands` enum from the `commands` module, which define the CLI structure.
use broom::cli::menu; // Import the interactive menu loop, used when no subcommand is given.
use broom::core::cleaner_orchestrator::{
    clean_browser_caches, clean_downloads, clean_everything, clean_temporary_files,
}; // Import the cleanup entry points from the orchestrator module.
use broom::utils::env_paths::HostPaths; // Import the host-backed environment path resolver.
use broom::{log_debug, log_info, logger}; // Import custom logging macros and the `logger` initialization function.
use clap::Parser; // Import the `Parser` trait from the `clap` crate, used for parsing command-line arguments.

/// The main entry point of the `broom` application.
///
/// This function is responsible for:
/// 1. Parsing command-line arguments.
/// 2. Initializing the logger based on the debug flag.
/// 3. Determining which subcommand was invoked, if any.
/// 4. Dispatching to the matching cleanup, or to the interactive menu.
fn main() {
    let cli = Cli::parse(); // Parse the command-line arguments into the `Cli` struct.

    // Initialize the logger based on the `debug` flag from the parsed CLI arguments.
    // If `cli.debug` is true, the logger will show debug-level messages; otherwise, it will show info/warn/error.
    logger::init(cli.debug);

    // Every stage resolves its target directories through this value rather than
    // reading the environment itself.
    let env = HostPaths;

    // Use a `match` expression to handle the different subcommands defined in the `Commands` enum.
    match &cli.command {
        Some(Commands::Downloads) => {
            log_info!("🧹 Cleaning today's downloads...");
            clean_downloads(&env);
        }
        Some(Commands::Caches) => {
            log_info!("🧹 Cleaning browser caches...");
            clean_browser_caches(&env);
        }
        Some(Commands::Temp) => {
            log_info!("🧹 Cleaning temporary files...");
            clean_temporary_files(&env);
        }
        Some(Commands::All) => {
            log_info!("🧹 Running every cleanup stage...");
            clean_everything(&env);
        }
        // No subcommand: fall back to the interactive menu, the default mode.
        None => menu::run(&env),
    }

    log_debug!("Finished execution."); // Log that the program has finished its execution, regardless of action.
}
