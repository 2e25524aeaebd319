//! Timer checks.

use serde_json::{Map, Value};

use super::{check_instance, choices, has_scalar, is_enabled, Section, ValidationReport};
use crate::schema::{Category, TimerMode};
use crate::tree::{entities, positive_u32};

const COUNTER_FIELDS: [&str; 2] = ["prescaler", "period"];

pub(super) fn check(tree: &Value, report: &mut ValidationReport) {
    for (index, entity) in entities(tree, Category::Timers).iter().enumerate() {
        let Some(timer) = entity.as_object() else {
            report.push(Section::Timers, format!("timer {index} must be a mapping"));
            continue;
        };

        let label = check_instance(timer, "timer", Section::Timers, report);
        let mode = check_mode(timer, &label, report);

        if !is_enabled(timer) {
            continue;
        }

        for field in COUNTER_FIELDS {
            if timer.get(field).and_then(positive_u32).is_none() {
                report.push(Section::Timers, format!("{label} invalid {field}"));
            }
        }

        if mode == Some(TimerMode::Pwm)
            && !(has_scalar(timer, "duty_cycle") && has_scalar(timer, "channel"))
        {
            report.push(
                Section::Timers,
                format!("{label} pwm needs duty_cycle and channel"),
            );
        }
    }
}

fn check_mode(
    timer: &Map<String, Value>,
    label: &str,
    report: &mut ValidationReport,
) -> Option<TimerMode> {
    let value = timer.get("mode")?;
    let mode = value.as_str().and_then(TimerMode::parse);
    if mode.is_none() {
        report.push(
            Section::Timers,
            format!("{label} mode must be one of {}", choices(&TimerMode::ALL)),
        );
    }
    mode
}
