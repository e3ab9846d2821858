use std::{
    env,
    io::{self, BufRead},
};

use shell_words::split;

use crate::cli::context::{CliMode, ShellContext};
use crate::cli::error::{CliError, CommandError};
use crate::cli::help;
use crate::cli::output;

/// Setting this variable makes the CLI read commands from stdin.
pub const SCRIPT_ENV: &str = "SPENDBOARD_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Args
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Args => {
            let args: Vec<String> = env::args().skip(1).collect();
            run_args(&mut context, &args)
        }
        CliMode::Script => run_script(&mut context),
    }
}

fn run_args(context: &mut ShellContext, args: &[String]) -> Result<(), CliError> {
    let Some((command, rest)) = args.split_first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    match run_command(context, command, &rest) {
        Ok(()) | Err(CommandError::ExitRequested) => Ok(()),
        Err(err) => {
            if let CommandError::UnknownCommand {
                suggestion: Some(best),
                ..
            } = &err
            {
                output::info(format!("Suggestion: `{best}`?"));
            }
            Err(err.into())
        }
    }
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let tokens = match parse_command_line(trimmed) {
            Ok(tokens) => tokens,
            Err(message) => {
                output::warning(message);
                continue;
            }
        };
        let Some((command, rest)) = tokens.split_first() else {
            continue;
        };
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
        match run_command(context, command, &rest) {
            Ok(()) => {}
            Err(CommandError::ExitRequested) => break,
            Err(err) => context.report_error(&err),
        }
    }
    Ok(())
}

fn run_command(context: &mut ShellContext, raw: &str, args: &[&str]) -> Result<(), CommandError> {
    let command = raw.to_lowercase();
    tracing::debug!(command = %command, args = args.len(), "dispatching command");
    context.dispatch(&command, args)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, String> {
    split(input).map_err(|err| format!("could not parse command line: {err}"))
}
