//! Configuration management and validation.
//!
//! Provides the run configuration: where the roster is read from, where the
//! JSON and the rejected-row log are written, and the date ages are computed
//! against.

use crate::constants::{DEFAULT_ERROR_LOG_PATH, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::{Error, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Configuration for a single conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Semicolon-delimited roster to read
    pub input_path: PathBuf,

    /// JSON output file, overwritten on every run
    pub output_path: PathBuf,

    /// Rejected-row log, written only when at least one row fails
    pub error_log_path: PathBuf,

    /// Date ages are computed against (None = today on the local clock)
    pub reference_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            error_log_path: PathBuf::from(DEFAULT_ERROR_LOG_PATH),
            reference_date: None,
        }
    }
}

impl Config {
    /// Create a configuration with default paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input roster path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the JSON output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the rejected-row log path
    pub fn with_error_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log_path = path.into();
        self
    }

    /// Pin the date used for age computation
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Date ages are computed against for this run
    pub fn effective_reference_date(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Validate path settings
    ///
    /// The three paths must be non-empty and pairwise distinct. `./x` and `x`
    /// name the same file.
    pub fn validate(&self) -> Result<()> {
        check_non_empty(&self.input_path, "Input path")?;
        check_non_empty(&self.output_path, "Output path")?;
        check_non_empty(&self.error_log_path, "Error log path")?;

        let input_path = normalize_path(&self.input_path);
        let output_path = normalize_path(&self.output_path);
        let error_log_path = normalize_path(&self.error_log_path);

        if input_path == output_path {
            return Err(Error::configuration(format!(
                "Output path must differ from input path: {}",
                self.output_path.display()
            )));
        }

        if input_path == error_log_path {
            return Err(Error::configuration(format!(
                "Error log path must differ from input path: {}",
                self.error_log_path.display()
            )));
        }

        if output_path == error_log_path {
            return Err(Error::configuration(format!(
                "Error log path must differ from output path: {}",
                self.error_log_path.display()
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

/// Drop `.` components so relative spellings of one path compare equal
fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

fn check_non_empty(path: &Path, label: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::configuration(format!("{} must not be empty", label)));
    }
    Ok(())
}
