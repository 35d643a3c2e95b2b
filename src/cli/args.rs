//! Command-line argument definitions for the roster converter
//!
//! This module defines the CLI interface using the clap derive API. Every path
//! is optional and falls back to the defaults in [`crate::constants`].

use crate::app::services::roster_parser::field_parsers::parse_iso_date;
use crate::constants::exit_codes;
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// CLI arguments for the roster converter
///
/// Converts a semicolon-delimited student roster into a JSON array, writing
/// rejected rows to a separate log file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster-converter",
    version,
    about = "Convert a semicolon-delimited student roster CSV into JSON",
    long_about = "Reads a Windows-1252 encoded roster with the columns \
                  id;nombre;apellidos;fecha_nacimiento;nota, derives each student's age and \
                  grade category, and writes the records as a JSON array. Rows that fail \
                  validation are written to an error log together with their line number."
)]
pub struct Args {
    /// Input roster CSV file
    ///
    /// If not specified, defaults to ./alumnos.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input roster CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// JSON output file
    ///
    /// Overwritten on every run. If not specified, defaults to ./alumnos.json
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "JSON output file"
    )]
    pub output_path: Option<PathBuf>,

    /// Rejected-row log file
    ///
    /// Only written when at least one row is rejected. If not specified,
    /// defaults to ./errores.log
    #[arg(
        short = 'e',
        long = "error-log",
        value_name = "PATH",
        help = "Rejected-row log file"
    )]
    pub error_log_path: Option<PathBuf>,

    /// Date ages are computed against
    ///
    /// Defaults to today. Pinning it makes repeated runs produce identical output.
    #[arg(
        long = "reference-date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_reference_date,
        help = "Date ages are computed against (default: today)"
    )]
    pub reference_date: Option<NaiveDate>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors; suppress the summary
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the run summary should be printed
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

/// Exit code for a command line that failed to parse
///
/// `--help` and `--version` exit successfully; usage errors count as invalid
/// configuration.
pub fn parse_failure_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        exit_codes::CONFIGURATION
    } else {
        exit_codes::SUCCESS
    }
}

fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value.trim(), "reference-date").map_err(|e| e.to_string())
}
