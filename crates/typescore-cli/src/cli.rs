//! CLI argument definitions for typescore.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use typescore_cli::config::Overrides;

#[derive(Parser)]
#[command(
    name = "typescore",
    version,
    about = "Detect cell types and score how well a dialect parses a table",
    long_about = "Detect semantic cell types (numbers, dates, times, currency, URLs, ...)\n\
                  and score a delimited text file by the share of cells with a known type."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Config file (default: ./typescore.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a delimited text file.
    Score(ScoreArgs),

    /// Print the detected type of each cell value.
    Detect(DetectArgs),

    /// Show per-column type counts for a file.
    Profile(ProfileArgs),

    /// List the compiled pattern catalog.
    Patterns,
}

/// Dialect flags shared by file commands.
#[derive(Args, Clone, Default)]
pub struct DialectArgs {
    /// Field delimiter (a single character, or "tab" / "space").
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Quote character ("" or "none" disables quoting).
    #[arg(long = "quote", value_name = "CHAR")]
    pub quote: Option<String>,

    /// Escape character ("" or "none" means doubled quotes).
    #[arg(long = "escape", value_name = "CHAR")]
    pub escape: Option<String>,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Delimited text file to score.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub dialect: DialectArgs,

    /// Match cells exactly, without stripping surrounding spaces.
    #[arg(long = "no-strip")]
    pub no_strip: bool,

    /// Score floor, also the score of an empty table.
    #[arg(long = "eps", value_name = "F")]
    pub eps: Option<f64>,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DetectArgs {
    /// Cell values to classify.
    #[arg(value_name = "CELL", required = true, allow_negative_numbers = true)]
    pub cells: Vec<String>,

    /// Match cells exactly, without stripping surrounding spaces.
    #[arg(long = "no-strip")]
    pub no_strip: bool,

    /// Print detections as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Delimited text file to profile.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub dialect: DialectArgs,

    /// Match cells exactly, without stripping surrounding spaces.
    #[arg(long = "no-strip")]
    pub no_strip: bool,

    /// Print the profile as JSON.
    #[arg(long = "json", conflicts_with = "markdown")]
    pub json: bool,

    /// Draw the table with markdown pipes.
    #[arg(long = "markdown")]
    pub markdown: bool,
}

impl ScoreArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            eps: self.eps,
            ..dialect_overrides(&self.dialect, self.no_strip)
        }
    }
}

impl DetectArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            no_strip: self.no_strip,
            ..Overrides::default()
        }
    }
}

impl ProfileArgs {
    pub fn overrides(&self) -> Overrides {
        dialect_overrides(&self.dialect, self.no_strip)
    }
}

fn dialect_overrides(dialect: &DialectArgs, no_strip: bool) -> Overrides {
    Overrides {
        delimiter: dialect.delimiter.clone(),
        quote: dialect.quote.clone(),
        escape: dialect.escape.clone(),
        no_strip,
        eps: None,
    }
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
