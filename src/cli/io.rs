use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::core::{CliError, CliMode};

/// Prompt the user for one line of input.
///
/// Returns `Ok(None)` on end-of-input, which the shell treats as an exit
/// request. In script mode an empty line falls back to the default, matching
/// how dialoguer handles an empty interactive answer.
pub fn prompt_line(
    mode: CliMode,
    theme: &ColorfulTheme,
    label: &str,
    default: Option<&str>,
) -> Result<Option<String>, CliError> {
    match mode {
        CliMode::Interactive => prompt_interactive(theme, label, default),
        CliMode::Script => prompt_script(default),
    }
}

fn prompt_interactive(
    theme: &ColorfulTheme,
    label: &str,
    default: Option<&str>,
) -> Result<Option<String>, CliError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(label)
        .allow_empty(true);
    if let Some(value) = default {
        input = input.default(value.to_string()).show_default(true);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn prompt_script(default: Option<&str>) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    let value = line.trim_end_matches(['\n', '\r']).to_string();
    if value.is_empty() {
        if let Some(fallback) = default {
            return Ok(Some(fallback.to_string()));
        }
    }
    Ok(Some(value))
}
