//! `periphgen --summary`: print the human-readable listing.

use std::path::Path;

use anyhow::Result;
use periphgen_config::Summary;

use super::load_validated;

pub fn run(config_path: &Path) -> Result<()> {
    let config = load_validated(config_path)?;
    print!("{}", Summary(&config));
    Ok(())
}
