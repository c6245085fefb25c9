//! Scoped output writing.
//!
//! Generated documents are written through a named temp file in the target
//! directory and atomically persisted. If anything fails before the persist, the
//! temp file is dropped and removed, so a failed run never leaves a half-written
//! guide or deck behind.

use crate::error::{Result, StudygenError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let write_err = |source: std::io::Error| StudygenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
