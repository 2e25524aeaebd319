//! Validation of a defaulted peripheral description.
//!
//! The structural check and the four section validators each append to one
//! [`ValidationReport`]. Every validator always runs, so a single pass
//! reports every violation in the document; an empty report means the
//! description is accepted.

mod board;
mod communication;
mod gpio;
mod structure;
mod timers;

use std::fmt;

use serde_json::{Map, Value};

use crate::tree::scalar_text;

/// Which rule set produced a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Structure,
    Board,
    Gpio,
    Uart,
    I2c,
    Timers,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Structure => write!(f, "structure"),
            Section::Board => write!(f, "board"),
            Section::Gpio => write!(f, "gpio"),
            Section::Uart => write!(f, "uart"),
            Section::I2c => write!(f, "i2c"),
            Section::Timers => write!(f, "timers"),
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub section: Section,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered, append-only list of validation errors. Never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error.
    pub fn push(&mut self, section: Section, message: impl Into<String>) {
        self.errors.push(ValidationError {
            section,
            message: message.into(),
        });
    }

    /// True when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    /// Errors produced by one rule set.
    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.section == section)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, " - {error}")?;
        }
        Ok(())
    }
}

/// Run every validator over a defaulted tree.
pub fn validate(tree: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    structure::check(tree, &mut report);
    board::check(tree, &mut report);
    gpio::check(tree, &mut report);
    communication::check(tree, &mut report);
    timers::check(tree, &mut report);
    report
}

/// Render an enum's members as `[a, b, c]`.
fn choices<T: fmt::Display>(all: &[T]) -> String {
    let names: Vec<String> = all.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(", "))
}

/// The entity's instance name, if it is a non-empty string.
fn instance_name(entity: &Map<String, Value>) -> Option<&str> {
    entity
        .get("instance")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Whether `enabled` is literally `true`.
fn is_enabled(entity: &Map<String, Value>) -> bool {
    entity.get("enabled") == Some(&Value::Bool(true))
}

/// Whether a field holds a scalar. Null, sequences, and mappings do not count.
fn has_scalar(entity: &Map<String, Value>, field: &str) -> bool {
    entity.get(field).and_then(scalar_text).is_some()
}

/// Checks shared by every instance-named peripheral: a usable instance name
/// and a boolean `enabled`. Returns the label used in later messages.
fn check_instance(
    entity: &Map<String, Value>,
    kind: &str,
    section: Section,
    report: &mut ValidationReport,
) -> String {
    let label = match instance_name(entity) {
        Some(name) => name.to_string(),
        None => {
            report.push(section, format!("{kind} missing instance"));
            kind.to_string()
        }
    };
    if !matches!(entity.get("enabled"), Some(Value::Bool(_))) {
        report.push(section, format!("{label} {kind} enabled must be bool"));
    }
    label
}
