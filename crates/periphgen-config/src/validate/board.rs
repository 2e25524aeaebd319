//! Board identity checks.

use serde_json::Value;

use super::{Section, ValidationReport};

const REQUIRED_FIELDS: [&str; 3] = ["name", "mcu", "clock_freq"];

/// Each of `name`, `mcu`, and `clock_freq` must be present and non-null.
/// A missing or malformed board section reports all three.
pub(super) fn check(tree: &Value, report: &mut ValidationReport) {
    let board = tree.get("board").and_then(Value::as_object);
    for field in REQUIRED_FIELDS {
        let present = board
            .and_then(|b| b.get(field))
            .is_some_and(|v| !v.is_null());
        if !present {
            report.push(Section::Board, format!("board {field} required"));
        }
    }
}
