pub mod args;
pub mod commands;
pub mod context;
pub mod error;
pub mod help;
pub mod output;
pub mod registry;
pub mod render;
pub mod shell;
pub mod system_clock;

pub use context::{CliMode, ShellContext};
pub use error::{CliError, CommandError, CommandResult};
pub use shell::run_cli;
