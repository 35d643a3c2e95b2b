//! JSON output for converted student records
//!
//! This module renders student records as an indented JSON array and writes
//! the conversion outputs to disk:
//! - [`renderer`] - JSON text assembly with string escaping
//! - [`writer`] - JSON file and rejected-row log writing

pub mod renderer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use renderer::{escape_json_string, render_records};
pub use writer::{OutputSummary, write_error_log, write_json, write_outputs};
