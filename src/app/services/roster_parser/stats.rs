//! Conversion statistics and result structures for roster processing
//!
//! This module provides types for tracking how many rows were converted or
//! rejected, and for carrying the ordered results to the output writer.

use crate::app::models::{RowError, StudentRecord};

/// Conversion result with records, rejected rows and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ConversionResult {
    /// Successfully transformed records, in input order
    pub records: Vec<StudentRecord>,

    /// Rejected rows, in input order
    pub errors: Vec<RowError>,

    /// Basic conversion statistics
    pub stats: ConversionStats,
}

impl ConversionResult {
    /// Error log lines, one per rejected row
    pub fn error_log_lines(&self) -> Vec<String> {
        self.errors.iter().map(RowError::log_line).collect()
    }

    /// Whether any row was rejected
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Simple conversion statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversionStats {
    /// Lines after the header, blank ones included
    pub data_lines: usize,

    /// Whitespace-only lines skipped without error
    pub blank_lines: usize,

    /// Records successfully produced
    pub records_parsed: usize,

    /// Rows rejected with a row-level error
    pub rows_rejected: usize,
}

impl ConversionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blank data lines that went through validation
    pub fn rows_processed(&self) -> usize {
        self.records_parsed + self.rows_rejected
    }

    /// Calculate success rate as a percentage of processed rows
    pub fn success_rate(&self) -> f64 {
        let processed = self.rows_processed();
        if processed == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / processed as f64) * 100.0
        }
    }
}
