//! CLI argument definitions for the invoice migrator.

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use invoice_core::{DEFAULT_BATCH_SIZE, DEFAULT_TABLE};
use invoice_store::DEFAULT_TIMEOUT_SECS;

#[derive(Parser)]
#[command(
    name = "invoice-migrate",
    version,
    about = "Load the invoice dataset into the hosted invoices table",
    long_about = "Load the invoice dataset into the hosted invoices table.\n\n\
                  The run is skipped when the table already has rows, so it is\n\
                  safe to invoke repeatedly. Rows are written in batches; a\n\
                  failing batch stops the run and earlier batches are kept."
)]
pub struct Cli {
    /// Path to the JSON invoice dataset.
    #[arg(long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Project URL of the store (e.g. https://abcd.supabase.co).
    #[arg(long = "url", env = "SUPABASE_URL", value_name = "URL")]
    pub url: Option<String>,

    /// API key for the store.
    #[arg(
        long = "api-key",
        env = "SUPABASE_KEY",
        value_name = "KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// Target table.
    #[arg(long = "table", default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Rows per insert request.
    #[arg(
        long = "batch-size",
        default_value_t = DEFAULT_BATCH_SIZE,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub batch_size: usize,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout-secs", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Transform and plan the batches without contacting the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the outcome as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
