//! Tests for JSON text rendering

use super::*;
use crate::app::services::json_writer::{escape_json_string, render_records};

#[test]
fn test_empty_records_render_as_empty_array() {
    let json = render_records(&[]);
    assert_eq!(json, "[]\n");

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_exact_layout_single_record() {
    let records = vec![StudentRecord::new(1, "Ana", "Garcia", 25, GradeCategory::Notable)];

    let expected = "[\n\
                    \x20\x20{\n\
                    \x20\x20\x20\x20\"id\": 1,\n\
                    \x20\x20\x20\x20\"nombreCompleto\": \"Ana Garcia\",\n\
                    \x20\x20\x20\x20\"edad\": 25,\n\
                    \x20\x20\x20\x20\"calificacion\": \"NOTABLE\"\n\
                    \x20\x20}\n\
                    ]\n";
    assert_eq!(render_records(&records), expected);
}

#[test]
fn test_records_separated_by_commas() {
    let json = render_records(&create_test_records());

    assert_eq!(json.matches("  },\n").count(), 3);
    assert!(json.ends_with("  }\n]\n"));
}

#[test]
fn test_rendered_output_is_valid_json_with_ordered_keys() {
    let records = create_test_records();
    let json = render_records(&records);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), records.len());

    for (value, record) in array.iter().zip(&records) {
        assert_eq!(value["id"], record.id);
        assert_eq!(value["nombreCompleto"], record.full_name.as_str());
        assert_eq!(value["edad"], record.age);
        assert_eq!(value["calificacion"], record.grade_category.label());
    }

    // Key order is positional in the text
    let first = &json[..json.find('}').unwrap()];
    let positions: Vec<usize> = ["\"id\"", "\"nombreCompleto\"", "\"edad\"", "\"calificacion\""]
        .iter()
        .map(|key| first.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_non_ascii_names_kept_verbatim() {
    let json = render_records(&[StudentRecord::new(
        3,
        "José",
        "Muñoz",
        19,
        GradeCategory::Sobresaliente,
    )]);
    assert!(json.contains("\"José Muñoz\""));
}

#[test]
fn test_escape_short_forms() {
    assert_eq!(escape_json_string("a\"b"), "a\\\"b");
    assert_eq!(escape_json_string("a\\b"), "a\\\\b");
    assert_eq!(escape_json_string("\u{08}\u{0C}\n\r\t"), "\\b\\f\\n\\r\\t");
}

#[test]
fn test_escape_other_control_characters() {
    assert_eq!(escape_json_string("\u{01}"), "\\u0001");
    assert_eq!(escape_json_string("x\u{1f}y"), "x\\u001fy");
    assert_eq!(escape_json_string("plain text"), "plain text");
}

#[test]
fn test_escaped_name_round_trips_through_json_parser() {
    let name = "O\"Brien \\ \u{07}";
    let json = render_records(&[StudentRecord::new(9, name, "Test", 30, GradeCategory::Aprobado)]);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["nombreCompleto"], format!("{} Test", name));
}
