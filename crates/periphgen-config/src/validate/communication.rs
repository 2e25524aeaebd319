//! UART and I2C instance checks.

use serde_json::{Map, Value};

use super::{check_instance, choices, is_enabled, Section, ValidationReport};
use crate::schema::{Category, Parity};
use crate::tree::{entities, positive_u32};

/// Rule set shared by the two serial buses.
struct BusRules {
    category: Category,
    section: Section,
    kind: &'static str,
    /// Integer field required while the instance is enabled.
    rate_field: &'static str,
}

const UART: BusRules = BusRules {
    category: Category::Uart,
    section: Section::Uart,
    kind: "uart",
    rate_field: "baudrate",
};

const I2C: BusRules = BusRules {
    category: Category::I2c,
    section: Section::I2c,
    kind: "i2c",
    rate_field: "speed",
};

pub(super) fn check(tree: &Value, report: &mut ValidationReport) {
    check_bus(tree, &UART, report, check_parity);
    check_bus(tree, &I2C, report, no_extra_checks);
}

fn no_extra_checks(_: &Map<String, Value>, _: &str, _: &mut ValidationReport) {}

fn check_bus(
    tree: &Value,
    rules: &BusRules,
    report: &mut ValidationReport,
    extra: fn(&Map<String, Value>, &str, &mut ValidationReport),
) {
    for (index, entity) in entities(tree, rules.category).iter().enumerate() {
        let Some(bus) = entity.as_object() else {
            report.push(
                rules.section,
                format!("{} {index} must be a mapping", rules.kind),
            );
            continue;
        };

        let label = check_instance(bus, rules.kind, rules.section, report);

        if is_enabled(bus) && bus.get(rules.rate_field).and_then(positive_u32).is_none() {
            report.push(
                rules.section,
                format!("{label} invalid {}", rules.rate_field),
            );
        }

        extra(bus, &label, report);
    }
}

fn check_parity(uart: &Map<String, Value>, label: &str, report: &mut ValidationReport) {
    let Some(parity) = uart.get("parity") else {
        return;
    };
    if parity.as_str().and_then(Parity::parse).is_none() {
        report.push(
            Section::Uart,
            format!("{label} parity must be one of {}", choices(&Parity::ALL)),
        );
    }
}
