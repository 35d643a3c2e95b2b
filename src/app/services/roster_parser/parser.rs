//! Core roster parser implementation
//!
//! This module provides the main parser orchestration: reading and decoding
//! the input file, establishing the column count from the header, and routing
//! each data line's outcome to the record or error collection.

use chrono::NaiveDate;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

use super::record_parser::parse_student_record;
use super::stats::{ConversionResult, ConversionStats};
use crate::app::models::RawRow;
use crate::config::Config;
use crate::constants::FIELD_DELIMITER;
use crate::{Error, Result};

/// Parser for semicolon-delimited student rosters
///
/// Ages are computed against a fixed reference date so that a run over an
/// unchanged input is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct RosterParser {
    reference_date: NaiveDate,
}

impl RosterParser {
    /// Create a new parser computing ages against `reference_date`
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Create a parser using the configuration's reference date
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.effective_reference_date())
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Read, decode and parse a roster file
    ///
    /// A missing or unreadable file is fatal; row-level problems are collected
    /// in the returned result.
    pub fn parse_file(&self, file_path: &Path) -> Result<ConversionResult> {
        info!("Parsing roster file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::input_not_found(file_path.display().to_string()));
        }

        let bytes = std::fs::read(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read input file {}: {}", file_path.display(), e),
                e,
            )
        })?;

        let content = decode_roster(&bytes);
        Ok(self.parse_content(&content))
    }

    /// Parse already-decoded roster text
    pub fn parse_content(&self, content: &str) -> ConversionResult {
        let mut result = ConversionResult::default();
        let mut lines = source_lines(content);

        let Some(header) = lines.next() else {
            debug!("Roster is empty, no header line");
            return result;
        };
        let expected_columns = header.split(FIELD_DELIMITER).count();
        debug!("Header declares {} columns", expected_columns);

        // Header is line 1
        for (index, line) in lines.enumerate() {
            let row = RawRow::new(index + 2, line);
            self.process_row(&row, expected_columns, &mut result);
        }

        log_summary(&result.stats);
        result
    }

    fn process_row(
        &self,
        row: &RawRow<'_>,
        expected_columns: usize,
        result: &mut ConversionResult,
    ) {
        result.stats.data_lines += 1;

        if row.is_blank() {
            result.stats.blank_lines += 1;
            return;
        }

        match parse_student_record(row, expected_columns, self.reference_date) {
            Ok(record) => {
                result.stats.records_parsed += 1;
                result.records.push(record);
            }
            Err(error) => {
                result.stats.rows_rejected += 1;
                debug!("Rejected line {}: {}", error.line_number, error.kind);
                result.errors.push(error);
            }
        }
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
///
/// A trailing terminator does not start an extra empty line.
fn source_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Decode roster bytes as Windows-1252
///
/// Every byte maps to a character in this encoding, so decoding cannot fail.
/// A leading byte-order mark is not interpreted.
pub fn decode_roster(bytes: &[u8]) -> Cow<'_, str> {
    WINDOWS_1252.decode_without_bom_handling(bytes).0
}

fn log_summary(stats: &ConversionStats) {
    info!(
        "Parsed {} records from {} rows ({} rejected, {} blank lines skipped, {:.1}% success)",
        stats.records_parsed,
        stats.rows_processed(),
        stats.rows_rejected,
        stats.blank_lines,
        stats.success_rate()
    );
}
