//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tax-intake",
    version,
    about = "Tax intake analytics - descriptive statistics and reports for intake batches",
    long_about = "Analyze the output of the multi-stage tax intake workflow.\n\n\
                  Normalizes exported case records into one flat table, prints\n\
                  summary statistics, and writes charts, an HTML dashboard, and\n\
                  CSV/XLSX exports to analytics_output/. Without --file, a\n\
                  three-case demonstration batch is analyzed."
)]
pub struct Cli {
    /// Analyze a JSON export from the intake workflow. Omit to run the
    /// embedded demonstration batch.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

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
