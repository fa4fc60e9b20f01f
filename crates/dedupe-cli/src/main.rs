//! Duplicate row remover CLI.

use clap::{ColorChoice, CommandFactory, Parser};
use dedupe_cli::logging::{LogConfig, LogFormat, init_logging};
use dedupe_cli::pipeline::run_dedupe;
use dedupe_cli::types::DedupeRequest;
use dedupe_cli::validate::validate_paths;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    // A wrong argument count is a clap usage error: clap prints it and exits
    // with status 2. Path problems found below exit with status 1.
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let issues = validate_paths(&cli.datafile, &cli.specfile, &cli.output_dir);
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("error: {issue}");
        }
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        eprintln!();
        eprintln!("For more information, try '--help'.");
        std::process::exit(1);
    }

    let request = DedupeRequest {
        datafile: cli.datafile.clone(),
        specfile: cli.specfile.clone(),
        output_dir: cli.output_dir.clone(),
        key_mode: cli.key_mode.into(),
        dry_run: cli.dry_run,
    };
    let exit_code = match run_dedupe(&request) {
        Ok(report) => match print_summary(&report, cli.summary_format) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
