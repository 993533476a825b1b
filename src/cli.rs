use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::MatchMode;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "lint-sweep")]
#[command(author, version, about = "Run a syntax checker over every PHP file in a tree")]
#[command(long_about = "Recursively finds candidate files, runs an external syntax checker \
    (php -l by default) on each of them in parallel, counts parse errors, deprecations and \
    warnings, and writes the offending files to a report.\n\n\
    Exit codes:\n  \
    0 - No file has diagnostics\n  \
    1 - At least one file has diagnostics\n  \
    2 - Configuration error or checker unavailable\n  \
    130 - Interrupted")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory to scan (prompted for on stdin when omitted)
    pub directory: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// File extension selecting candidate files (e.g., php)
    #[arg(short, long)]
    pub ext: Option<String>,

    /// Checker command line; the file path is appended as the last argument
    #[arg(long, value_name = "COMMAND")]
    pub checker: Option<String>,

    /// Where to write the issue report
    #[arg(short = 'o', long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Number of parallel checks (0 = one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Per-file timeout in seconds (0 = none)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Respect .gitignore files
    #[arg(long)]
    pub gitignore: bool,

    /// How markers are matched [possible values: substring, line]
    #[arg(long)]
    pub match_mode: Option<MatchMode>,

    /// Summary format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit 0 even when diagnostics were found
    #[arg(long)]
    pub warn_only: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
