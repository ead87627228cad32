//! # Stride CLI Application
//!
//! Prints one workout summary per sensor package.
//!
//! ```text
//! fit_cli                   # built-in demo batch
//! fit_cli week.json         # packages from a file
//! fit_cli --json week.json  # summaries as JSON
//! ```
//!
//! Summaries go to stdout, rejected packages to stderr. Exit code is 1 if
//! any package was rejected; clap exits 2 on a usage error.

mod config;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fit_core::{
    demo_packages, load_packages, process_packages, FitResult, SensorPackage, WorkoutSummary,
};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, OutputFormat};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::parse();

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configured batch and report it. Returns the process exit code.
fn run(config: &CliConfig, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let packages = match &config.input {
        Some(path) => load_packages(path)
            .with_context(|| format!("failed to load packages from {}", path.display()))?,
        None => demo_packages(),
    };
    report(&packages, config.format(), out, err)
}

/// Summarise `packages`, writing summaries to `out` and rejections to `err`.
///
/// Returns 0 if every package produced a summary, 1 otherwise.
fn report(
    packages: &[SensorPackage],
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    tracing::info!(count = packages.len(), "processing sensor packages");

    let results = process_packages(packages);
    let all_ok = results.iter().all(Result::is_ok);

    match format {
        OutputFormat::Text => print_text(&results, out, err)?,
        OutputFormat::Json => print_json(&results, out, err)?,
    }

    Ok(if all_ok { 0 } else { 1 })
}

fn print_errors(results: &[FitResult<WorkoutSummary>], err: &mut impl Write) -> io::Result<()> {
    for (index, result) in results.iter().enumerate() {
        if let Err(e) = result {
            writeln!(err, "Error in package {}: {}", index + 1, e)?;
        }
    }
    Ok(())
}

fn print_text(
    results: &[FitResult<WorkoutSummary>],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    for summary in results.iter().flatten() {
        writeln!(out, "{}", summary)?;
    }
    print_errors(results, err)
}

fn print_json(
    results: &[FitResult<WorkoutSummary>],
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let summaries: Vec<&WorkoutSummary> = results.iter().flatten().collect();
    let json = serde_json::to_string_pretty(&summaries).context("failed to serialize summaries")?;
    writeln!(out, "{}", json)?;
    print_errors(results, err)?;
    Ok(())
}
