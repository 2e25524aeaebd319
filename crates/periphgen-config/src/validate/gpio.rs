//! GPIO pin checks.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::{choices, Section, ValidationReport};
use crate::schema::{Category, Direction, PinId, Pull, Speed};
use crate::tree::{entities, scalar_text};

pub(super) fn check(tree: &Value, report: &mut ValidationReport) {
    let mut seen = HashSet::new();

    for (index, entity) in entities(tree, Category::Gpio).iter().enumerate() {
        let Some(pin) = entity.as_object() else {
            report.push(Section::Gpio, format!("gpio {index} must be a mapping"));
            continue;
        };

        let Some(name) = pin
            .get("pin")
            .and_then(scalar_text)
            .filter(|s| !s.is_empty())
        else {
            report.push(Section::Gpio, format!("gpio {index} missing pin"));
            continue;
        };

        if !seen.insert(name.clone()) {
            report.push(Section::Gpio, format!("duplicate pin {name}"));
        }

        let well_formed = pin
            .get("pin")
            .and_then(Value::as_str)
            .and_then(PinId::parse)
            .is_some();
        if !well_formed {
            report.push(
                Section::Gpio,
                format!("{name} pin must be P<port><number>"),
            );
        }

        check_choice(pin, &name, "direction", &Direction::ALL, Direction::parse, report);
        check_choice(pin, &name, "pull", &Pull::ALL, Pull::parse, report);
        check_choice(pin, &name, "speed", &Speed::ALL, Speed::parse, report);

        if pin
            .get("alt_function")
            .is_some_and(|af| !af.is_null() && !af.is_string())
        {
            report.push(
                Section::Gpio,
                format!("{name} alt_function must be a string"),
            );
        }
    }
}

/// A defaulted enum field must name one of its members. Absent fields are
/// left to the defaults table.
fn check_choice<T: std::fmt::Display>(
    pin: &Map<String, Value>,
    name: &str,
    field: &str,
    all: &[T],
    parse: fn(&str) -> Option<T>,
    report: &mut ValidationReport,
) {
    let Some(value) = pin.get(field) else {
        return;
    };
    if value.as_str().and_then(parse).is_none() {
        report.push(
            Section::Gpio,
            format!("{name} {field} must be one of {}", choices(all)),
        );
    }
}
