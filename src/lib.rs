//! Roster Converter Library
//!
//! A Rust library for converting semicolon-delimited student roster CSV files
//! into JSON arrays of transformed student records.
//!
//! This library provides tools for:
//! - Decoding legacy Windows-1252 roster files
//! - Validating each row against the header's column count and field rules
//! - Deriving age from birth date and a grade category from the numeric score
//! - Collecting rejected rows (with their source line numbers) instead of aborting
//! - Rendering records as indented JSON and writing the rejected-row log

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod conversion;
        pub mod json_writer;
        pub mod roster_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{GradeCategory, ParseOutcome, RawRow, RowError, RowErrorKind, StudentRecord};
pub use app::services::conversion::{ConversionReport, convert};
pub use app::services::roster_parser::{ConversionResult, ConversionStats, RosterParser};
pub use config::Config;

/// Result type alias for the roster converter
pub type Result<T> = std::result::Result<T, Error>;

/// Run-aborting error types
///
/// Row-level failures are not represented here; they are collected as
/// [`RowError`] values and never abort a run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input roster file does not exist
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Process exit code for this error class
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => constants::exit_codes::INPUT_NOT_FOUND,
            Self::Io { .. } => constants::exit_codes::IO_FAILURE,
            Self::Configuration { .. } => constants::exit_codes::CONFIGURATION,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
