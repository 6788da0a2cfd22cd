pub mod core;
pub mod io;
pub mod menus;
pub mod output;
pub mod shell;
pub mod shell_context;

pub use self::core::{CliError, CliMode, LoopControl};
pub use shell::run_cli;
pub use shell_context::ShellContext;
