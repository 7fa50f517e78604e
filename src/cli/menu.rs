use crate::core::cleaner_orchestrator::{
    clean_browser_caches, clean_downloads, clean_everything, clean_temporary_files,
};
use crate::utils::env_paths::EnvironmentPaths;
use crate::{log_info, log_warn};
use std::io::{self, Write};

/// One menu selection.
#[derive(Debug, PartialEq)]
pub enum MenuAction {
    Downloads,
    Caches,
    Temp,
    Everything,
    Exit,
}

/// Maps a typed selection to an action; `None` is an invalid selection.
pub fn action_for(choice: &str) -> Option<MenuAction> {
    match choice.trim() {
        "1" => Some(MenuAction::Downloads),
        "2" => Some(MenuAction::Caches),
        "3" => Some(MenuAction::Temp),
        "4" => Some(MenuAction::Everything),
        "5" => Some(MenuAction::Exit),
        _ => None,
    }
}

fn show_options() {
    println!("\nSelect an option:");
    println!("1. Clean today's downloads");
    println!("2. Clean browser caches");
    println!("3. Clean temporary files");
    println!("4. Run every cleanup");
    println!("5. Exit");
    print!("\nEnter the number of the desired option: ");
    let _ = io::stdout().flush();
}

/// Interactive menu loop: show the options, read a selection, dispatch,
/// repeat until the user exits or stdin closes.
pub fn run(env: &dyn EnvironmentPaths) {
    loop {
        show_options();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                log_warn!("Failed to read selection: {}", err);
                break;
            }
        }

        match action_for(&line) {
            Some(MenuAction::Downloads) => {
                clean_downloads(env);
                log_info!("Today's downloads deleted.");
            }
            Some(MenuAction::Caches) => {
                clean_browser_caches(env);
                log_info!("Browser caches cleaned.");
            }
            Some(MenuAction::Temp) => {
                clean_temporary_files(env);
                log_info!("Temporary files deleted.");
            }
            Some(MenuAction::Everything) => {
                clean_everything(env);
                log_info!("All cleanup stages executed.");
            }
            Some(MenuAction::Exit) => {
                log_info!("Exiting...");
                break;
            }
            None => log_warn!("Invalid option. Please choose an option from the menu."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_selections_to_actions() {
        assert_eq!(action_for("1"), Some(MenuAction::Downloads));
        assert_eq!(action_for(" 4\n"), Some(MenuAction::Everything));
        assert_eq!(action_for("5"), Some(MenuAction::Exit));
        assert_eq!(action_for("9"), None);
        assert_eq!(action_for("downloads"), None);
    }
}
