//! CLI argument definitions for the student roster.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Student information manager - record, admit and undo student entries",
    long_about = "Record students in an in-memory roster.\n\n\
                  Every added student is listed, queued for admission processing \
                  and pushed onto the undo history at the same time."
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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include student names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive session reading commands from stdin.
    Shell(SessionArgs),

    /// Execute the commands in a script file.
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct SessionArgs {
    /// CSV file (id,name,age,department) admitted before the first command.
    #[arg(long = "seed", value_name = "CSV")]
    pub seed: Option<PathBuf>,

    /// How `view` and `status` render their output.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: ViewFormatArg,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Script with one command per line.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewFormatArg {
    Plain,
    Table,
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
