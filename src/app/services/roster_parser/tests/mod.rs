//! Test utilities for roster parser testing
//!
//! This module provides common fixtures and helper functions used across the
//! parser test modules.

use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::RawRow;

mod grade_classifier_tests;

/// Standard roster header
pub const HEADER: &str = "id;nombre;apellidos;fecha_nacimiento;nota";

/// Fixed date all test ages are computed against
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Shorthand for building calendar dates in assertions
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build a data row at the given source line
pub fn row(line_number: usize, content: &str) -> RawRow<'_> {
    RawRow::new(line_number, content)
}

/// Helper to create roster content with the standard header
pub fn roster(data_lines: &[&str]) -> String {
    let mut content = String::from(HEADER);
    for line in data_lines {
        content.push('\n');
        content.push_str(line);
    }
    content.push('\n');
    content
}

/// Helper to create a temporary file holding raw bytes
pub fn create_temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(bytes).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
