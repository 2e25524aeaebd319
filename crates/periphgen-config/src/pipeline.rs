//! The load, default, validate, decode sequence.

use std::path::Path;

use log::info;
use serde_json::Value;

use crate::defaults::{apply_defaults, AppliedDefault};
use crate::document::load_document;
use crate::error::{ConfigError, Result};
use crate::model::PeripheralConfig;
use crate::validate::{validate, ValidationReport};

/// Outcome of defaulting and validating one description.
#[derive(Debug, Clone)]
pub struct Checked {
    /// Every field filled from the defaults table, in application order.
    pub defaults: Vec<AppliedDefault>,
    /// Every rule violation; empty when the description is accepted.
    pub report: ValidationReport,
    tree: Value,
}

impl Checked {
    /// The defaulted tree the report was computed over.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Decode the typed model, or hand back the report if validation failed.
    pub fn into_config(self) -> Result<PeripheralConfig> {
        if !self.report.is_valid() {
            return Err(ConfigError::Invalid {
                report: self.report,
            });
        }
        PeripheralConfig::from_tree(&self.tree)
    }
}

/// Apply defaults to a raw tree and validate the result.
pub fn check(raw: &Value) -> Checked {
    let defaulted = apply_defaults(raw);
    for applied in &defaulted.applied {
        info!("{applied}");
    }

    let report = validate(&defaulted.tree);
    info!(
        "validated configuration: {} defaults applied, {} errors",
        defaulted.applied.len(),
        report.len()
    );

    Checked {
        defaults: defaulted.applied,
        report,
        tree: defaulted.tree,
    }
}

/// Load a description file and check it.
pub fn load_and_check(path: &Path) -> Result<Checked> {
    info!("loading configuration from {}", path.display());
    let raw = load_document(path)?;
    Ok(check(&raw))
}
