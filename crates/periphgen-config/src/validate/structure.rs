//! Top-level section presence and shape.

use serde_json::Value;

use super::{Section, ValidationReport};

/// Sections every description must carry.
pub(super) const REQUIRED_SECTIONS: [&str; 4] = ["board", "gpio", "communication", "timers"];

/// Report absent sections, and present sections of the wrong shape. Entity
/// validators treat a malformed section as empty.
pub(super) fn check(tree: &Value, report: &mut ValidationReport) {
    for name in REQUIRED_SECTIONS {
        let Some(section) = tree.get(name) else {
            report.push(Section::Structure, format!("missing section {name}"));
            continue;
        };

        match name {
            "timers" => {
                if !section.is_array() {
                    report.push(Section::Structure, "section timers must be a list");
                }
            }
            _ => {
                if !section.is_object() {
                    report.push(
                        Section::Structure,
                        format!("section {name} must be a mapping"),
                    );
                }
            }
        }
    }

    check_nested_list(tree, "gpio", "pins", report);
    check_nested_list(tree, "communication", "uart", report);
    check_nested_list(tree, "communication", "i2c", report);
}

fn check_nested_list(tree: &Value, section: &str, list: &str, report: &mut ValidationReport) {
    let nested = tree
        .get(section)
        .and_then(Value::as_object)
        .and_then(|s| s.get(list));
    if nested.is_some_and(|v| !v.is_array()) {
        report.push(
            Section::Structure,
            format!("{section} {list} must be a list"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(tree: Value) -> Vec<String> {
        let mut report = ValidationReport::new();
        check(&tree, &mut report);
        report.messages().map(String::from).collect()
    }

    #[test]
    fn all_sections_present() {
        let messages = run(json!({
            "board": {}, "gpio": {}, "communication": {}, "timers": [],
        }));
        assert!(messages.is_empty());
    }

    #[test]
    fn one_error_per_missing_section() {
        let messages = run(json!({ "gpio": {} }));
        assert_eq!(
            messages,
            [
                "missing section board",
                "missing section communication",
                "missing section timers",
            ]
        );
    }

    #[test]
    fn wrong_shapes_reported() {
        let messages = run(json!({
            "board": "X",
            "gpio": { "pins": {} },
            "communication": { "uart": "USART1", "i2c": [] },
            "timers": {},
        }));
        assert_eq!(
            messages,
            [
                "section board must be a mapping",
                "section timers must be a list",
                "gpio pins must be a list",
                "communication uart must be a list",
            ]
        );
    }
}
