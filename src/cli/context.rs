use spendboard_config::{Config, ConfigManager};

use crate::cli::commands;
use crate::cli::error::{CliError, CommandError, CommandResult};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// One command taken from the process arguments.
    Args,
    /// Commands read line by line from stdin.
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::from_env()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        tracing::debug!(path = %config_manager.config_path().display(), ?mode, "configuration loaded");
        Ok(Self {
            mode,
            registry: commands::registry(),
            config_manager,
            config,
            running: true,
        })
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        match self.registry.handler(command) {
            Some(handler) => handler(self, args),
            None => Err(CommandError::UnknownCommand {
                name: command.to_string(),
                suggestion: self.registry.suggest(command),
            }),
        }
    }

    pub fn save_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Prints a command failure. Exit requests are not failures.
    pub fn report_error(&self, err: &CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::UnknownCommand { suggestion, .. } => {
                output::warning(err);
                if let Some(best) = suggestion {
                    output::info(format!("Suggestion: `{best}`?"));
                }
            }
            other => output::error(other),
        }
    }
}
