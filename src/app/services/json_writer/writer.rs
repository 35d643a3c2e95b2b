//! Output file writing for conversion results
//!
//! The JSON file is always rewritten. The rejected-row log is only written when
//! there is at least one rejected row; an existing log from an earlier run is
//! left untouched otherwise.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::renderer::render_records;
use crate::app::models::{RowError, StudentRecord};
use crate::app::services::roster_parser::ConversionResult;
use crate::config::Config;
use crate::{Error, Result};

/// What a conversion run wrote to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    /// JSON output file
    pub json_path: PathBuf,

    /// Size of the JSON output in bytes
    pub json_bytes: u64,

    /// Rejected-row log, if one was written
    pub error_log_path: Option<PathBuf>,

    /// Number of lines written to the rejected-row log
    pub error_lines: usize,
}

/// Write the JSON output and, if needed, the rejected-row log
pub fn write_outputs(result: &ConversionResult, config: &Config) -> Result<OutputSummary> {
    let json_bytes = write_json(&result.records, &config.output_path)?;
    let error_log_path = write_error_log(&result.errors, &config.error_log_path)?;

    Ok(OutputSummary {
        json_path: config.output_path.clone(),
        json_bytes,
        error_log_path,
        error_lines: result.errors.len(),
    })
}

/// Render and write records as UTF-8 JSON, replacing any existing file
///
/// Returns the number of bytes written.
pub fn write_json(records: &[StudentRecord], path: &Path) -> Result<u64> {
    let json = render_records(records);

    std::fs::write(path, json.as_bytes()).map_err(|e| {
        Error::io(
            format!("Failed to write output file {}: {}", path.display(), e),
            e,
        )
    })?;

    info!(
        "Wrote {} records to {} ({} bytes)",
        records.len(),
        path.display(),
        json.len()
    );
    Ok(json.len() as u64)
}

/// Write one log line per rejected row
///
/// Returns the log path when a file was written, `None` when there were no
/// errors to log.
pub fn write_error_log(errors: &[RowError], path: &Path) -> Result<Option<PathBuf>> {
    if errors.is_empty() {
        debug!("No rejected rows, leaving {} untouched", path.display());
        return Ok(None);
    }

    let mut content = String::new();
    for error in errors {
        content.push_str(&error.log_line());
        content.push('\n');
    }

    std::fs::write(path, content.as_bytes()).map_err(|e| {
        Error::io(
            format!("Failed to write error log {}: {}", path.display(), e),
            e,
        )
    })?;

    info!("Wrote {} rejected rows to {}", errors.len(), path.display());
    Ok(Some(path.to_path_buf()))
}
