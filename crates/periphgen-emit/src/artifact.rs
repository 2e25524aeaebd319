//! Writing the generated file.

use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{EmitError, Result};

/// Write `text` to `path`, replacing any existing file.
///
/// The text is staged in a temporary file beside the target and moved into
/// place once fully written, so a failed run never leaves a partial file.
pub fn write_artifact(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_error = |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(io_error)?;
    staged.write_all(text.as_bytes()).map_err(io_error)?;
    staged.flush().map_err(io_error)?;
    staged.persist(path).map_err(|source| EmitError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("peripheral_init.c");
        write_artifact(&path, "void initialize_peripherals(void) {}\n").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "void initialize_peripherals(void) {}\n"
        );
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        fs::write(&path, "stale contents that are longer than the new text").unwrap();
        write_artifact(&path, "fresh\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.c");
        let err = write_artifact(&path, "x").unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
        assert!(!path.exists());
    }
}
