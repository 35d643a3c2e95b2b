//! Test utilities for JSON writer testing

use crate::app::models::{GradeCategory, RawRow, RowError, RowErrorKind, StudentRecord};

mod renderer_tests;

/// Helper to create a small set of records covering every grade band
pub fn create_test_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(1, "Ana", "Garcia", 25, GradeCategory::Notable),
        StudentRecord::new(2, "Luis", "Martin", 27, GradeCategory::Suspenso),
        StudentRecord::new(3, "José", "Muñoz", 19, GradeCategory::Sobresaliente),
        StudentRecord::new(4, "Eva", "Lopez", 22, GradeCategory::Aprobado),
    ]
}

/// Helper to create rejected rows at the given lines
pub fn create_test_errors() -> Vec<RowError> {
    vec![
        RowError::new(
            &RawRow::new(3, "2;;Perez;2001-01-01;6"),
            RowErrorKind::empty_field("nombre"),
        ),
        RowError::new(
            &RawRow::new(5, "3;Eva;Lopez;2001-01-01"),
            RowErrorKind::column_count_mismatch(5, 4),
        ),
    ]
}
