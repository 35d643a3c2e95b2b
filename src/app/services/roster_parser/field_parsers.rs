//! Field parsing utilities for roster rows
//!
//! Each parser receives an already-trimmed field and the column name used in
//! error messages. Failures carry both so the log shows what was rejected.

use chrono::NaiveDate;

use crate::app::models::RowErrorKind;
use crate::constants::BIRTH_DATE_FORMAT;

/// Strip leading and trailing characters at or below U+0020
///
/// Other whitespace, such as a no-break space, is kept as field content.
pub fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Parse a base-10 32-bit integer (optional leading sign)
pub fn parse_integer(value_str: &str, field_name: &str) -> Result<i32, RowErrorKind> {
    value_str
        .parse::<i32>()
        .map_err(|_| RowErrorKind::invalid_integer(field_name, value_str))
}

/// Parse a decimal number, accepting a comma as decimal separator
///
/// Every comma is replaced by a period before parsing, so `"8,5"` reads as 8.5.
/// Non-finite values are rejected.
pub fn parse_decimal(value_str: &str, field_name: &str) -> Result<f64, RowErrorKind> {
    let normalized = value_str.replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RowErrorKind::invalid_decimal(field_name, value_str)),
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_iso_date(value_str: &str, field_name: &str) -> Result<NaiveDate, RowErrorKind> {
    if !has_iso_date_shape(value_str) {
        return Err(RowErrorKind::invalid_date(field_name, value_str));
    }

    NaiveDate::parse_from_str(value_str, BIRTH_DATE_FORMAT)
        .map_err(|_| RowErrorKind::invalid_date(field_name, value_str))
}

/// Exactly four, two and two ASCII digits separated by hyphens
///
/// chrono alone accepts single-digit months and days and signed years.
fn has_iso_date_shape(value_str: &str) -> bool {
    let bytes = value_str.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
