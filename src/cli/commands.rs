//! Command handlers registered with the shell.

use std::path::PathBuf;

use spendboard_config::model::CONFIG_KEYS;
use spendboard_core::{Aggregator, Snapshot};
use spendboard_source_json::JsonSnapshotSource;

use crate::cli::args::StatsArgs;
use crate::cli::context::ShellContext;
use crate::cli::error::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::render::{dashboard_sections, MoneyFormat};
use crate::cli::system_clock::SystemClock;
use crate::utils::build_info;

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(CommandEntry::new(
        "stats",
        "Compute purchasing KPIs for a snapshot",
        "stats [--dir <dir>] [--purchases <file> --items <file>] [--period <all|YYYY|YYYY-MM>] [--json]",
        cmd_stats,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show or change preferences",
        "config [show | path | set <key> <value>]",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Stop reading commands",
        "exit",
        cmd_exit,
    ));
    registry.alias("quit", "exit");
    registry
}

fn cmd_stats(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = StatsArgs::parse(args)?;
    let period = match args.period {
        Some(period) => period,
        None => context.config.period()?,
    };

    let source = match (&args.purchases, &args.items) {
        (Some(purchases), Some(items)) => {
            JsonSnapshotSource::from_paths(purchases.clone(), items.clone())
        }
        _ => {
            let dir = args
                .dir
                .clone()
                .or_else(|| context.config.last_snapshot_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            JsonSnapshotSource::new(dir)
        }
    };

    let snapshot = Snapshot::fetch(&source, context.config.snapshot_limits())?;
    let stats = snapshot.compute(&Aggregator::new(&SystemClock), &period);

    if let Some(dir) = args.dir {
        if context.config.last_snapshot_dir.as_ref() != Some(&dir) {
            context.config.last_snapshot_dir = Some(dir);
            context.save_config()?;
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let money = MoneyFormat::new(&context.config.currency, &context.config.locale);
    for section in dashboard_sections(&stats, &period, &money) {
        output::section(&section.title);
        for line in &section.lines {
            println!("  {line}");
        }
    }
    if stats.unresolved_items > 0 {
        output::warning(format!(
            "{} line item(s) reference purchases missing from the snapshot; they are dated today and grouped under N/A.",
            stats.unresolved_items
        ));
    }
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for (key, value) in context.config.entries() {
                println!("  {key:<16}{value}");
            }
            Ok(())
        }
        ["path"] => {
            println!("{}", context.config_manager.config_path().display());
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            context.config.set(key, &value.join(" "))?;
            context.save_config()?;
            output::success(format!("Updated `{key}`."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config [show | path | set <key> <value>]; keys: {}",
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        None => {
            help::print_overview(&context.registry);
            Ok(())
        }
        Some(name) => match context.registry.get(&name.to_ascii_lowercase()) {
            Some(entry) => {
                help::print_command(entry);
                Ok(())
            }
            None => Err(CommandError::UnknownCommand {
                name: name.to_string(),
                suggestion: context.registry.suggest(name),
            }),
        },
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let metadata = build_info::current();
    output::section(format!("Spendboard {}", metadata.version));
    for (label, value) in metadata.rows() {
        println!("  {label:<10}{value}");
    }
    Ok(())
}

fn cmd_exit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.running = false;
    Err(CommandError::ExitRequested)
}
