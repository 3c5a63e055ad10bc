//! CLI argument definitions for the encounter record cleaner.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ecr",
    version,
    about = "Encounter Record Cleaner - canonicalize messy patient encounter data",
    long_about = "Normalize inconsistently captured patient encounter records\n\
                  (free-text identifiers, mixed date formats, synonym-laden labels)\n\
                  into one canonical, deduplicated record set ready for analysis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize and deduplicate a raw encounter CSV, writing the canonical set.
    Clean(CleanArgs),

    /// Run the cleaning pipeline and print aggregate reports without writing.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw encounter CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output path for the canonical CSV (default: <INPUT>_clean.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also print the data-quality summary as JSON on stdout.
    #[arg(long = "summary-json")]
    pub summary_json: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the raw encounter CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Reference date for age calculations (default: today, UTC).
    #[arg(long = "as-of", value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
