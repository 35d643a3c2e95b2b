//! Application constants for the roster converter
//!
//! This module contains default paths, roster layout, grade thresholds and
//! exit codes used throughout the application.

// =============================================================================
// Default Paths
// =============================================================================

/// Default input roster file
pub const DEFAULT_INPUT_PATH: &str = "./alumnos.csv";

/// Default JSON output file
pub const DEFAULT_OUTPUT_PATH: &str = "./alumnos.json";

/// Default rejected-row log file
pub const DEFAULT_ERROR_LOG_PATH: &str = "./errores.log";

// =============================================================================
// Roster Layout
// =============================================================================

/// Field delimiter; no quoting or escaping is supported
pub const FIELD_DELIMITER: char = ';';

/// Roster columns in file order
pub mod columns {
    pub const ID: &str = "id";
    pub const FIRST_NAME: &str = "nombre";
    pub const SURNAME: &str = "apellidos";
    pub const BIRTH_DATE: &str = "fecha_nacimiento";
    pub const SCORE: &str = "nota";

    /// Number of fixed fields read from every data row
    pub const REQUIRED_COUNT: usize = 5;
}

/// Key names of the rendered JSON objects, in output order
pub mod json_keys {
    pub const ID: &str = "id";
    pub const FULL_NAME: &str = "nombreCompleto";
    pub const AGE: &str = "edad";
    pub const GRADE_CATEGORY: &str = "calificacion";
}

/// Birth date format (ISO calendar date)
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Grade Thresholds
// =============================================================================

/// Lower bounds (inclusive) of each grade band above the lowest
pub mod grade_thresholds {
    pub const PASS: f64 = 5.0;
    pub const GOOD: f64 = 7.0;
    pub const EXCELLENT: f64 = 9.0;
}

// =============================================================================
// Output Formatting
// =============================================================================

/// Indentation unit for rendered JSON
pub const JSON_INDENT: &str = "  ";

// =============================================================================
// Process Exit Codes
// =============================================================================

pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_NOT_FOUND: i32 = 1;
    pub const IO_FAILURE: i32 = 2;
    pub const CONFIGURATION: i32 = 3;
}
