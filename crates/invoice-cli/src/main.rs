#![deny(unsafe_code)]

//! Invoice migrator CLI.

use clap::{ColorChoice, Parser};
use invoice_cli::logging::{LogConfig, LogFormat, init_logging};
use invoice_cli::summary::print_summary;
use invoice_cli::types::{RunResult, RunSummary};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::commands::run_migration;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_migration(&cli) {
        Ok(summary) => {
            if cli.json {
                print_json(&summary);
            } else {
                print_summary(&summary);
            }
            summary.exit_code()
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn print_json(summary: &RunSummary) {
    let value = match &summary.result {
        RunResult::Migration(outcome) => serde_json::to_value(outcome),
        RunResult::Plan { batch_sizes } => Ok(serde_json::json!({
            "dry_run": true,
            "records": summary.records,
            "batch_sizes": batch_sizes,
        })),
    };
    match value.and_then(|v| serde_json::to_string_pretty(&v)) {
        Ok(text) => println!("{text}"),
        Err(error) => eprintln!("error: failed to render outcome: {error}"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
