//! JSON text rendering for student records
//!
//! Output layout is fixed: one array element per record indented once, one
//! field per line indented twice, keys in record order, trailing newline.

use crate::app::models::StudentRecord;
use crate::constants::{JSON_INDENT, json_keys};

/// Render records as an indented JSON array
///
/// An empty slice renders as `[]`.
pub fn render_records(records: &[StudentRecord]) -> String {
    if records.is_empty() {
        return "[]\n".to_string();
    }

    let mut out = String::from("[\n");
    for (index, record) in records.iter().enumerate() {
        render_record(&mut out, record);
        if index + 1 < records.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("]\n");
    out
}

fn render_record(out: &mut String, record: &StudentRecord) {
    let fields = [
        (json_keys::ID, record.id.to_string()),
        (json_keys::FULL_NAME, quote(&record.full_name)),
        (json_keys::AGE, record.age.to_string()),
        (json_keys::GRADE_CATEGORY, quote(record.grade_category.label())),
    ];

    out.push_str(JSON_INDENT);
    out.push_str("{\n");
    for (index, (key, value)) in fields.iter().enumerate() {
        out.push_str(JSON_INDENT);
        out.push_str(JSON_INDENT);
        out.push_str(&quote(key));
        out.push_str(": ");
        out.push_str(value);
        if index + 1 < fields.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(JSON_INDENT);
    out.push('}');
}

fn quote(value: &str) -> String {
    format!("\"{}\"", escape_json_string(value))
}

/// Escape a string for inclusion between JSON double quotes
///
/// Control characters without a short escape are written as `\u00xx`.
/// Non-ASCII characters are emitted as-is (the output is UTF-8).
pub fn escape_json_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
