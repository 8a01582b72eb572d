use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use check_tests::telemetry::init_telemetry;
use check_tests::{check, Config, CoverageReport, TestFileFilter};

/// Exit status for a run that could not reach a verdict
const EXIT_FAILURE: u8 = 3;

#[derive(Parser)]
#[command(name = "check-tests")]
#[command(about = "Fail when any line of test code was not executed")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CHECK_TESTS_CONFIG")]
    config: Option<String>,

    /// LCOV tracefile override
    #[arg(short, long, env = "CHECK_TESTS_REPORT_PATH")]
    report: Option<PathBuf>,

    /// Glob selecting test files; repeat for several. Replaces the configured list.
    #[arg(short, long = "include")]
    include: Vec<String>,

    /// Directory recorded paths are relative to
    #[arg(long)]
    root: Option<PathBuf>,

    /// Log level override
    #[arg(long, env = "CHECK_TESTS_LOG_LEVEL")]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(config_file) => Config::from_file(config_file)?,
        None => Config::from_env()?,
    };

    if let Some(ref report) = cli.report {
        config.report.path = report.clone();
    }

    if !cli.include.is_empty() {
        config.report.include = cli.include.clone();
    }

    if let Some(ref root) = cli.root {
        config.report.root = Some(root.clone());
    }

    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

fn run(cli: &Cli) -> Result<u8> {
    let config = load_config(cli).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    init_telemetry(&config.logging).context("Failed to initialize telemetry")?;

    let root = match config.report.root.clone() {
        Some(root) => root,
        None => env::current_dir().context("Failed to resolve current directory")?,
    };
    debug!(root = %root.display(), include = ?config.report.include, "Resolved test file filter");

    let report = CoverageReport::load(&config.report.path)?;
    let filter = TestFileFilter::new(&config.report.include, Some(&root))?;

    let outcome = check(&report, &filter);
    outcome
        .write_report(&mut io::stderr().lock())
        .context("Failed to write report")?;

    info!(exit_code = outcome.exit_code(), "Coverage check finished");
    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("check-tests: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
