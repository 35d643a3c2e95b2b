//! Individual roster row parsing
//!
//! This module validates a single data line and transforms it into a
//! [`StudentRecord`]. Validation is fail-fast: the first failing check decides
//! the row's error and no later check runs.

use chrono::{Datelike, NaiveDate};

use super::field_parsers::{parse_decimal, parse_integer, parse_iso_date, trim_field};
use super::grade_classifier::classify;
use crate::app::models::{ParseOutcome, RawRow, RowError, RowErrorKind, StudentRecord};
use crate::constants::{FIELD_DELIMITER, columns};

/// Parse and transform one non-blank roster row
///
/// `expected_columns` is the header's column count; `reference_date` is the
/// date ages are computed against.
pub fn parse_student_record(
    row: &RawRow<'_>,
    expected_columns: usize,
    reference_date: NaiveDate,
) -> ParseOutcome {
    transform_row(row.content, expected_columns, reference_date)
        .map_err(|kind| RowError::new(row, kind))
}

fn transform_row(
    line: &str,
    expected_columns: usize,
    reference_date: NaiveDate,
) -> Result<StudentRecord, RowErrorKind> {
    // `split` keeps empty trailing fields
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != expected_columns {
        return Err(RowErrorKind::column_count_mismatch(
            expected_columns,
            fields.len(),
        ));
    }
    if fields.len() < columns::REQUIRED_COUNT {
        return Err(RowErrorKind::column_count_mismatch(
            columns::REQUIRED_COUNT,
            fields.len(),
        ));
    }

    let id_str = trim_field(fields[0]);
    let first_name = trim_field(fields[1]);
    let surname = trim_field(fields[2]);
    let birth_date_str = trim_field(fields[3]);
    let score_str = trim_field(fields[4]);

    if first_name.is_empty() {
        return Err(RowErrorKind::empty_field(columns::FIRST_NAME));
    }
    if surname.is_empty() {
        return Err(RowErrorKind::empty_field(columns::SURNAME));
    }

    let id = parse_integer(id_str, columns::ID)?;
    let birth_date = parse_iso_date(birth_date_str, columns::BIRTH_DATE)?;
    let score = parse_decimal(score_str, columns::SCORE)?;

    let age = compute_age(birth_date, reference_date);
    let grade_category = classify(score);

    Ok(StudentRecord::new(
        id,
        first_name,
        surname,
        age,
        grade_category,
    ))
}

/// Whole years elapsed between `birth_date` and `reference_date`
///
/// A birthday not yet reached in the reference year does not count. A birth
/// date after the reference date yields a negative age.
pub fn compute_age(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    if birth_date > reference_date {
        return -compute_age(reference_date, birth_date);
    }

    let mut years = reference_date.year() - birth_date.year();
    if (reference_date.month(), reference_date.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years
}
