//! jpvo - format Japanese phone numbers from the command line.
//!
//! Numbers are taken from the arguments, or one per line from stdin when no
//! arguments are given. Output format and exit behavior come from the
//! environment (see [`Config`]).

use anyhow::{Context, Result};
use jp_value_objects::{Config, FormatReport, OutputFormat};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn read_inputs() -> Result<Vec<String>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args);
    }

    info!("No arguments given, reading numbers from stdin");
    io::stdin()
        .lock()
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read stdin")
}

fn run(config: &Config) -> Result<bool> {
    let inputs = read_inputs()?;
    let report = FormatReport::from_inputs(&inputs);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output {
        OutputFormat::Text => {
            for outcome in report.outcomes() {
                writeln!(out, "{}", outcome)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", report.to_json()?)?;
        }
    }

    Ok(!(config.fail_on_invalid && report.has_rejections()))
}

fn main() -> Result<ExitCode> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Logging goes to stderr so stdout stays machine-readable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if run(&config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        info!("Some inputs were rejected");
        Ok(ExitCode::FAILURE)
    }
}
