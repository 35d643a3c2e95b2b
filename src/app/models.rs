//! Data models for roster conversion
//!
//! This module contains the core data structures flowing through a conversion
//! run: raw input rows, transformed student records, and the row-level errors
//! collected for rejected lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Raw Input Rows
// =============================================================================

/// One line of the roster as read from the source
///
/// Line numbers are 1-based and count the header, so the first data line is 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub line_number: usize,
    pub content: &'a str,
}

impl<'a> RawRow<'a> {
    pub fn new(line_number: usize, content: &'a str) -> Self {
        Self {
            line_number,
            content,
        }
    }

    /// Lines made only of characters at or below U+0020 are skipped without
    /// being reported
    pub fn is_blank(&self) -> bool {
        self.content.chars().all(|c| c <= ' ')
    }
}

// =============================================================================
// Grade Categories
// =============================================================================

/// Grade category derived from a numeric score
///
/// Bands are half-open with inclusive lower bounds:
/// `< 5` Suspenso, `[5, 7)` Aprobado, `[7, 9)` Notable, `>= 9` Sobresaliente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradeCategory {
    /// Failing score
    Suspenso,
    /// Passing score
    Aprobado,
    /// Good score
    Notable,
    /// Excellent score
    Sobresaliente,
}

impl GradeCategory {
    /// Label written to the JSON output
    pub fn label(self) -> &'static str {
        match self {
            GradeCategory::Suspenso => "SUSPENSO",
            GradeCategory::Aprobado => "APROBADO",
            GradeCategory::Notable => "NOTABLE",
            GradeCategory::Sobresaliente => "SOBRESALIENTE",
        }
    }

    /// All categories from lowest to highest band
    pub fn all_values() -> [GradeCategory; 4] {
        [
            GradeCategory::Suspenso,
            GradeCategory::Aprobado,
            GradeCategory::Notable,
            GradeCategory::Sobresaliente,
        ]
    }
}

impl fmt::Display for GradeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GradeCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        GradeCategory::all_values()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown grade category '{}'", s))
    }
}

// =============================================================================
// Student Records
// =============================================================================

/// Transformed record produced for every valid roster row
///
/// Field declaration order matches the key order of the rendered JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: i32,
    pub full_name: String,
    pub age: i32,
    pub grade_category: GradeCategory,
}

impl StudentRecord {
    /// Build a record, joining first name and surname with a single space
    pub fn new(
        id: i32,
        first_name: &str,
        surname: &str,
        age: i32,
        grade_category: GradeCategory,
    ) -> Self {
        Self {
            id,
            full_name: format!("{} {}", first_name, surname),
            age,
            grade_category,
        }
    }
}

// =============================================================================
// Row-Level Errors
// =============================================================================

/// Reason a single roster row was rejected
///
/// The display text is the message written to the error log.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RowErrorKind {
    #[error("Número de columnas no coincide con la cabecera (esperadas {expected}, recibidas {actual})")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("{field} vacío")]
    EmptyField { field: String },

    #[error("{field} no es un entero {value}")]
    InvalidInteger { field: String, value: String },

    #[error("{field} no es un numero decimal {value}")]
    InvalidDecimal { field: String, value: String },

    #[error("{field} no es una fecha con formato correcto yyyy-mm-dd {value}")]
    InvalidDate { field: String, value: String },
}

impl RowErrorKind {
    pub fn column_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::ColumnCountMismatch { expected, actual }
    }

    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    pub fn invalid_integer(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInteger {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_decimal(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDecimal {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A rejected row: where it was, why it failed, and what it contained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line_number: usize,
    pub kind: RowErrorKind,
    pub raw: String,
}

impl RowError {
    pub fn new(row: &RawRow<'_>, kind: RowErrorKind) -> Self {
        Self {
            line_number: row.line_number,
            kind,
            raw: row.content.to_string(),
        }
    }

    /// Format as an error log line
    pub fn log_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Linea {} :{} || contenido :{}",
            self.line_number, self.kind, self.raw
        )
    }
}

/// Result of transforming one row
pub type ParseOutcome = std::result::Result<StudentRecord, RowError>;
