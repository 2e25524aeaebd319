//! Decoding description files into the generic value tree.
//!
//! Descriptions are written in TOML or JSON; both decode into the same
//! `serde_json::Value` tree of mappings, sequences, and scalars, so nothing
//! downstream cares which syntax the file used.

use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Syntax of a description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the syntax from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Load a description file into a value tree.
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    let format = DocumentFormat::from_path(path);
    debug!("decoding {} as {:?}", path.display(), format);
    parse_document(&text, format)
}

/// Parse description text into a value tree whose root is a mapping.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value> {
    let tree: Value = match format {
        DocumentFormat::Toml => toml::from_str(text)?,
        DocumentFormat::Json => serde_json::from_str(text)?,
    };
    if !tree.is_object() {
        return Err(ConfigError::NotAMapping);
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("board.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("board.JSON")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("board.toml")),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("board")),
            DocumentFormat::Toml
        );
    }

    #[test]
    fn parse_toml_tree() {
        let tree = parse_document(
            r#"
timers = []

[board]
name = "X"
clock_freq = 16000000

[[gpio.pins]]
pin = "PA5"
"#,
            DocumentFormat::Toml,
        )
        .unwrap();
        assert_eq!(tree["board"]["name"], "X");
        assert_eq!(tree["board"]["clock_freq"], 16_000_000);
        assert_eq!(tree["gpio"]["pins"][0]["pin"], "PA5");
        assert!(tree["timers"].as_array().unwrap().is_empty());
    }

    #[test]
    fn parse_json_keeps_null() {
        let tree =
            parse_document(r#"{"board": {"name": null}}"#, DocumentFormat::Json).unwrap();
        assert!(tree["board"]["name"].is_null());
    }

    #[test]
    fn parse_rejects_non_mapping_root() {
        let err = parse_document("[1, 2, 3]", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping));
    }

    #[test]
    fn parse_invalid_toml_is_error() {
        let err = parse_document("this is not valid toml [[[", DocumentFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn parse_invalid_json_is_error() {
        let err = parse_document("{ board: ", DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn load_not_found() {
        let result = load_document(Path::new("/nonexistent/board.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("board.json");
        std::fs::write(&path, r#"{"board": {"name": "file-test"}}"#).unwrap();

        let tree = load_document(&path).unwrap();
        assert_eq!(tree["board"]["name"], "file-test");
    }
}
