//! Default command: render and write the initialization source.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use periphgen_emit::{generate_source, write_artifact};

use super::load_validated;

pub fn run(config_path: &Path, output: &Path) -> Result<()> {
    let config = load_validated(config_path)?;
    let source = generate_source(&config).context("failed to render initialization source")?;
    write_artifact(output, &source)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("generated {} for {}", output.display(), config.board.name);
    println!("c code written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn invalid_description_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("board.json");
        fs::write(&config, r#"{ "board": { "name": "X" } }"#).unwrap();
        let output = dir.path().join("out.c");

        assert!(run(&config, &output).is_err());
        assert!(!output.exists());
    }
}
