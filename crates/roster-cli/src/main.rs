//! Student roster CLI.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use roster_cli::logging::{LogConfig, LogFormat, init_logging};
use roster_cli::seed::seed_from_csv;
use roster_cli::session::{Session, SessionOptions, ViewFormat};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, SessionArgs, ViewFormatArg};

const PROMPT: &str = "roster> ";

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Shell(args) => run_shell(args),
        Command::Batch(args) => run_batch(&args.script, &args.session),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn run_shell(args: &SessionArgs) -> Result<()> {
    let mut session = build_session(args)?;
    let stdin = io::stdin();
    let prompt = stdin.is_terminal().then_some(PROMPT);
    session
        .run(stdin.lock(), io::stdout().lock(), prompt)
        .context("interactive session failed")?;
    Ok(())
}

fn run_batch(script: &std::path::Path, args: &SessionArgs) -> Result<()> {
    let file = File::open(script)
        .with_context(|| format!("failed to open script {}", script.display()))?;
    let mut session = build_session(args)?;
    session
        .run(BufReader::new(file), io::stdout().lock(), None)
        .with_context(|| format!("failed to run script {}", script.display()))?;
    Ok(())
}

fn build_session(args: &SessionArgs) -> Result<Session> {
    let format = match args.format {
        ViewFormatArg::Plain => ViewFormat::Plain,
        ViewFormatArg::Table => ViewFormat::Table,
    };
    let mut session = Session::new(SessionOptions { format });
    if let Some(path) = &args.seed {
        seed_from_csv(session.manager_mut(), path).context("load seed students")?;
    }
    Ok(session)
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
    config.log_data = cli.log_data;
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
