//! CLI argument definitions for the duplicate remover.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dedupe_model::KeyMode;

#[derive(Parser)]
#[command(
    name = "remove-duplicates",
    version,
    about = "Remove duplicate rows from a CSV file",
    long_about = "Remove duplicate rows from a CSV file.\n\n\
                  <SPECFILE> is a JSON object mapping column names to a method \
                  descriptor, e.g. {\"name\": {\"method\": \"exact_case_insensitive\"}}.\n\
                  Supported methods: exact, exact_case_insensitive, exact_lower_alphanumeric.\n\
                  Rows whose normalized values match in every listed column are duplicates; \
                  the last such row is kept."
)]
pub struct Cli {
    /// Path to a CSV datafile.
    #[arg(value_name = "DATAFILE")]
    pub datafile: PathBuf,

    /// Path to a JSON specfile describing how to identify duplicate rows.
    #[arg(value_name = "SPECFILE")]
    pub specfile: PathBuf,

    /// Directory in which the output CSV file is saved.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// How normalized column values are joined into a row key.
    ///
    /// `concatenated` joins values without a separator, so ("1", "23") and
    /// ("12", "3") are treated as equal. `length-prefixed` keeps them apart.
    #[arg(long = "key-mode", value_enum, default_value = "concatenated")]
    pub key_mode: KeyModeArg,

    /// Report what would be removed without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Summary format printed on success.
    #[arg(long = "summary-format", value_enum, default_value = "text")]
    pub summary_format: SummaryFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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

    /// Include timestamps in pretty and compact log lines.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KeyModeArg {
    Concatenated,
    LengthPrefixed,
}

impl From<KeyModeArg> for KeyMode {
    fn from(arg: KeyModeArg) -> Self {
        match arg {
            KeyModeArg::Concatenated => KeyMode::Concatenated,
            KeyModeArg::LengthPrefixed => KeyMode::LengthPrefixed,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    Text,
    Json,
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
