//! Source Loader: reads topic documents in a caller-defined order.
//!
//! The returned sequence preserves input order exactly; the aggregator and the
//! extractor both depend on that for deterministic output. Any unreadable file or
//! malformed front-matter aborts the run with an error naming the offending path.

use crate::error::{Result, StudygenError};
use crate::model::{split_front_matter, Document};
use std::fs;
use std::path::Path;

/// Load a single document, splitting off its front-matter.
pub fn load_document(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path).map_err(|source| StudygenError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let (front_matter, body) =
        split_front_matter(&raw).map_err(|reason| StudygenError::FrontMatter {
            path: path.to_path_buf(),
            reason,
        })?;

    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    Ok(Document::new(slug, front_matter, body))
}

/// Load all documents, preserving input order.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>> {
    paths.iter().map(|p| load_document(p.as_ref())).collect()
}
