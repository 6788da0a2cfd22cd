use crate::cli::core::{CliError, CliMode, LoopControl};
use crate::cli::menus::MainMenu;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;

/// Environment switch used by the CLI test suite to read prompts as plain
/// stdin lines instead of dialoguer terminal prompts.
pub const SCRIPT_MODE_ENV: &str = "EXPENSE_CORE_CLI_SCRIPT";

/// Loads the store, runs the menu loop until exit or end-of-input, and
/// performs the final save.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    let menu = MainMenu::new();

    loop {
        menu.print();
        let selection = match context.prompt(&menu.prompt_label(), None)? {
            None => {
                // End-of-input is an exit request.
                context.persist()?;
                break;
            }
            Some(selection) => selection,
        };

        match menu.parse(&selection) {
            Some(choice) => match context.dispatch(choice)? {
                LoopControl::Continue => {}
                LoopControl::Exit => break,
            },
            None => output::warning(format!(
                "`{}` is not a menu option. Please choose between 1 and 5.",
                selection.trim()
            )),
        }
    }

    output::info("Thanks for using Expense Tracker!");
    Ok(())
}
