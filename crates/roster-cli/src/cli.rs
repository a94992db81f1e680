//! CLI argument definitions for the roster importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Player roster importer - load registration files into the player store",
    long_about = "Import player registration files into the roster database.\n\n\
                  Scans a drop directory for CSV and Excel files, validates every\n\
                  row, loads clean records in transactional batches and writes\n\
                  rejected rows to per-file error reports."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Import every registration file found in the input directory.
    Run(RunArgs),

    /// List the header aliases accepted during import.
    Aliases,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory scanned for CSV, XLS and XLSX registration files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory for run outputs such as the database file
    /// (default: output/ beside the input directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory imported files are moved to
    /// (default: processed/ beside the input directory).
    #[arg(long = "processed-dir", value_name = "DIR")]
    pub processed_dir: Option<PathBuf>,

    /// Directory error artifacts are written to
    /// (default: errors/ beside the input directory).
    #[arg(long = "errors-dir", value_name = "DIR")]
    pub errors_dir: Option<PathBuf>,

    /// SQLite database file (default: roster.db inside the output directory).
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,
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
