//! Command implementation for the roster converter CLI
//!
//! This module contains the conversion command's execution logic: logging
//! setup, layering CLI overrides on the default configuration, running the
//! conversion and reporting the summary.

use crate::app::services::conversion::{ConversionReport, convert};
use crate::cli::args::Args;
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use tracing::debug;

/// Main command runner for the roster converter
///
/// This function orchestrates the whole run:
/// 1. Set up logging
/// 2. Build and validate the configuration
/// 3. Convert the roster and write the outputs
/// 4. Print a summary unless running quietly
pub fn run(args: Args) -> Result<ConversionReport> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args);
    let report = convert(&config)?;

    if args.show_summary() {
        print_summary(&report);
    }

    Ok(report)
}

/// Set up structured logging to stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_converter={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))
}

/// Build the run configuration from defaults plus CLI overrides
pub fn load_configuration(args: &Args) -> Config {
    let mut config = Config::default();
    apply_cli_overrides(&mut config, args);
    config
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(input_path) = &args.input_path {
        config.input_path = input_path.clone();
    }
    if let Some(output_path) = &args.output_path {
        config.output_path = output_path.clone();
    }
    if let Some(error_log_path) = &args.error_log_path {
        config.error_log_path = error_log_path.clone();
    }
    if let Some(reference_date) = args.reference_date {
        config.reference_date = Some(reference_date);
    }
}

/// Print a short human-readable summary of a completed run
pub fn print_summary(report: &ConversionReport) {
    let stats = &report.stats;

    println!("{}", "Conversion complete".bright_green().bold());
    println!(
        "  {} {}",
        "Records written:".bright_white(),
        stats.records_parsed.to_string().bright_cyan()
    );

    let rejected = stats.rows_rejected.to_string();
    println!(
        "  {} {}",
        "Rows rejected:  ".bright_white(),
        if stats.rows_rejected > 0 {
            rejected.bright_yellow()
        } else {
            rejected.bright_cyan()
        }
    );
    println!(
        "  {} {} {}",
        "JSON output:    ".bright_white(),
        report.outputs.json_path.display(),
        format!("({} bytes)", report.outputs.json_bytes).bright_black()
    );
    if let Some(log_path) = &report.outputs.error_log_path {
        println!(
            "  {} {}",
            "Error log:      ".bright_white(),
            log_path.display()
        );
    }
    println!(
        "  {} {}",
        "Ages as of:     ".bright_white(),
        report.reference_date
    );
    println!(
        "  {}",
        format!("Finished in {:.2?}", report.elapsed).bright_black()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_load_configuration_uses_defaults() {
        let args = Args::try_parse_from(["roster-converter"]).unwrap();
        assert_eq!(load_configuration(&args), Config::default());
    }

    #[test]
    fn test_cli_overrides_applied() {
        let args = Args::try_parse_from([
            "roster-converter",
            "-i",
            "clase.csv",
            "-o",
            "clase.json",
            "--reference-date",
            "2024-01-31",
        ])
        .unwrap();

        let config = load_configuration(&args);
        assert_eq!(config.input_path, PathBuf::from("clase.csv"));
        assert_eq!(config.output_path, PathBuf::from("clase.json"));
        assert_eq!(config.error_log_path, Config::default().error_log_path);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 1, 31));
    }
}
