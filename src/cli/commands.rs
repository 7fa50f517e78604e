use clap::{Parser, Subcommand}; // Import `Parser` and `Subcommand` traits/macros from the `clap` crate.
// `clap` is a popular Rust library for parsing command-line arguments.

/// Command-line interface for the `broom` utility.
///
/// This struct defines the top-level command-line arguments and subcommands
/// for the `broom` application. It uses `clap`'s derive macros for automatic
/// parsing of arguments based on struct fields.
#[derive(Parser)] // Derive the `Parser` trait, which generates the code to parse command-line arguments.
#[command(
    name = "broom", // Sets the name of the executable, which appears in help messages (e.g., `broom --help`).
    about = "🧹 Downloads, browser cache and temp file cleaner", // Provides a short description of the application.
    version, // Automatically generates the version string from the Cargo.toml file.
    disable_help_subcommand = true // Disables the default `help` subcommand, as `clap` provides `--help` automatically.
)]
pub struct Cli {
    /// Which cleanup to run. Without a subcommand the interactive menu is shown instead.
    ///
    /// `#[command(subcommand)]` indicates that this field will hold one of the defined subcommands.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show debug-level diagnostics
    ///
    /// This field defines a global command-line argument `--debug`.
    /// `global = true` makes it available for all subcommands (e.g., `broom --debug temp`).
    #[arg(long, global = true)]
    pub debug: bool, // A boolean flag; if present, `debug` will be `true`.
}

/// Subcommands for the `broom` tool.
///
/// This enum defines the distinct actions that the `broom` utility can perform.
/// Each variant maps 1:1 to one cleanup operation.
#[derive(Subcommand)] // Derive the `Subcommand` trait, enabling automatic subcommand parsing.
pub enum Commands {
    /// Remove files downloaded today from the Downloads folder
    Downloads,
    /// Clear Chrome and Firefox cache directories
    Caches,
    /// Empty the system temporary directory
    Temp,
    /// Run every cleanup stage in sequence
    All,
}
