//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod summary;

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;
use periphgen_config::{load_and_check, PeripheralConfig};

/// Load, default, and validate a description. Every validation error is
/// printed to stderr before failing.
pub fn load_validated(config_path: &Path) -> Result<PeripheralConfig> {
    let checked = load_and_check(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    if !checked.is_valid() {
        let report = &checked.report;
        warn!("{} rejected with {} errors", config_path.display(), report.len());
        eprint!("{report}");
        bail!("configuration validation failed ({} errors)", report.len());
    }

    let config = checked
        .into_config()
        .with_context(|| format!("failed to decode {}", config_path.display()))?;
    Ok(config)
}
