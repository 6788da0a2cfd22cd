use thiserror::Error;

use crate::errors::ExpenseError;

/// How the shell reads user input.
///
/// Script mode consumes one plain stdin line per prompt and drives the CLI
/// test suite; interactive mode uses dialoguer prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Whether the shell loop keeps running after a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures that terminate the shell. Validation and index errors never
/// reach this type; they are reported and re-prompted at the boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Expense(#[from] ExpenseError),
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
