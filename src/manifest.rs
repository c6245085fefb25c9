//! Ordered aggregation manifest.
//!
//! The printable guide's structure is an explicit configuration, never inferred
//! from directory listings: topics are grouped into named parts, and every section
//! entry pairs a source file with the label used in the table of contents. A JSON
//! manifest looks like:
//!
//! ```json
//! {
//!   "title": "DevOps & Backend Study Guide - Complete Edition",
//!   "subtitle": "Generated for printing and offline study",
//!   "parts": [
//!     {
//!       "title": "Core Fundamentals",
//!       "sections": [
//!         { "file": "docs/algo.md", "label": "Algorithms & Data Structures" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A bare `--sources` list is converted into a single unnamed part so the same
//! aggregation path serves both invocations.

use crate::error::{Result, StudygenError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_GUIDE_TITLE: &str = "Study Guide";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    /// Empty string means an unnamed part: no part heading is emitted.
    #[serde(default)]
    pub title: String,
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionEntry {
    pub file: PathBuf,
    pub label: String,
}

impl Manifest {
    /// Load a manifest from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| StudygenError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|e| StudygenError::Manifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(manifest)
    }

    /// Build a single-part manifest from a bare source list.
    ///
    /// Labels start as file stems; callers that have loaded the documents replace
    /// them with the effective document titles (see [`Manifest::relabel`]).
    pub fn from_sources<P: AsRef<Path>>(paths: &[P], title: Option<String>) -> Self {
        let sections = paths
            .iter()
            .map(|p| {
                let p = p.as_ref();
                let label = p
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.to_string_lossy().into_owned());
                SectionEntry {
                    file: p.to_path_buf(),
                    label,
                }
            })
            .collect();

        Self {
            title: title.unwrap_or_else(|| DEFAULT_GUIDE_TITLE.to_string()),
            subtitle: None,
            parts: vec![Part {
                title: String::new(),
                sections,
            }],
        }
    }

    /// All source paths in manifest order, flattened across parts.
    pub fn source_paths(&self) -> Vec<&Path> {
        self.parts
            .iter()
            .flat_map(|p| p.sections.iter().map(|s| s.file.as_path()))
            .collect()
    }

    pub fn section_count(&self) -> usize {
        self.parts.iter().map(|p| p.sections.len()).sum()
    }

    /// Replace section labels in manifest order. Extra labels are ignored;
    /// missing ones leave the existing label in place.
    pub fn relabel<I: IntoIterator<Item = String>>(&mut self, labels: I) {
        let mut labels = labels.into_iter();
        for part in &mut self.parts {
            for section in &mut part.sections {
                match labels.next() {
                    Some(label) => section.label = label,
                    None => return,
                }
            }
        }
    }
}
