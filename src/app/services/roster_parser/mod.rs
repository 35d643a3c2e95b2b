//! Roster parser for semicolon-delimited student CSV files
//!
//! This module turns the raw roster into ordered student records plus an
//! ordered list of rejected rows. A bad row never aborts the run; only a
//! missing or unreadable input file does.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File reading, decoding and line-by-line orchestration
//! - [`record_parser`] - Single-row validation and transformation
//! - [`field_parsers`] - Integer, decimal and ISO date field parsing
//! - [`grade_classifier`] - Score to grade category mapping
//! - [`stats`] - Conversion statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roster_converter::app::services::roster_parser::RosterParser;
//!
//! # fn example() -> roster_converter::Result<()> {
//! let parser = RosterParser::new(chrono::Local::now().date_naive());
//! let result = parser.parse_file(std::path::Path::new("alumnos.csv"))?;
//!
//! println!("Converted {} records, rejected {} rows",
//!          result.records.len(),
//!          result.errors.len());
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod grade_classifier;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grade_classifier::classify;
pub use parser::RosterParser;
pub use record_parser::{compute_age, parse_student_record};
pub use stats::{ConversionResult, ConversionStats};
