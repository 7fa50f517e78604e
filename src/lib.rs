//! `broom` removes today's downloaded files, browser cache contents and OS
//! temporary files, driven by an interactive menu or one-shot subcommands.

pub mod cli;
pub mod core;
pub mod logger;
pub mod utils;
