//! End-to-end roster conversion
//!
//! Ties the roster parser and the JSON writer together for one run: validate
//! the configuration, parse the input, write the outputs.

use chrono::NaiveDate;
use std::time::{Duration, Instant};
use tracing::info;

use super::json_writer::{OutputSummary, write_outputs};
use super::roster_parser::{ConversionStats, RosterParser};
use crate::Result;
use crate::config::Config;

/// Outcome of a completed conversion run
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Date ages were computed against
    pub reference_date: NaiveDate,

    /// Row counters for the run
    pub stats: ConversionStats,

    /// Files written
    pub outputs: OutputSummary,

    /// Wall-clock time for the run
    pub elapsed: Duration,
}

/// Convert the configured roster into JSON
///
/// Fails before writing anything if the configuration is invalid or the input
/// file is missing or unreadable. Rejected rows do not fail the run.
pub fn convert(config: &Config) -> Result<ConversionReport> {
    let start_time = Instant::now();
    config.validate()?;

    let parser = RosterParser::from_config(config);
    info!(
        "Converting {} (ages as of {})",
        config.input_path.display(),
        parser.reference_date()
    );

    let result = parser.parse_file(&config.input_path)?;
    let outputs = write_outputs(&result, config)?;

    Ok(ConversionReport {
        reference_date: parser.reference_date(),
        stats: result.stats,
        outputs,
        elapsed: start_time.elapsed(),
    })
}
