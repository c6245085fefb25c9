//! # API Facade
//!
//! Thin entry point over the command layer, for any client (the bundled CLI or
//! an embedding program). It dispatches, holds the configured extraction label
//! set, and returns structured `Result<CmdResult>` values — no business logic,
//! no terminal I/O, no presentation concerns.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::extract::LabelSet;
use crate::guide::GuideOptions;
use crate::manifest::Manifest;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct StudygenApi {
    labels: LabelSet,
}

impl StudygenApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the field labels the pattern extractor recognizes.
    pub fn with_labels(labels: LabelSet) -> Self {
        Self { labels }
    }

    pub fn build_guide(
        &self,
        manifest: &Manifest,
        out: &Path,
        options: &GuideOptions,
    ) -> Result<CmdResult> {
        commands::guide::run_with_manifest(manifest, out, options)
    }

    pub fn build_guide_from_sources(
        &self,
        sources: &[PathBuf],
        title: Option<String>,
        out: &Path,
        options: &GuideOptions,
    ) -> Result<CmdResult> {
        commands::guide::run_with_sources(sources, title, out, options)
    }

    pub fn build_flashcards(
        &self,
        sources: &[PathBuf],
        out: &Path,
        deck_title: &str,
    ) -> Result<CmdResult> {
        commands::flashcards::run(sources, out, deck_title, &self.labels)
    }
}
