use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::guide::{build_guide, GuideOptions};
use crate::loader::load_documents;
use crate::manifest::Manifest;
use crate::model::Document;
use crate::output::write_output;
use std::path::{Path, PathBuf};

/// Generate the printable guide from an explicit manifest.
pub fn run_with_manifest(manifest: &Manifest, out: &Path, options: &GuideOptions) -> Result<CmdResult> {
    let paths: Vec<PathBuf> = manifest
        .source_paths()
        .into_iter()
        .map(Path::to_path_buf)
        .collect();
    let docs = load_documents(&paths)?;
    generate(manifest, &docs, out, options)
}

/// Generate the printable guide from a bare ordered source list.
///
/// Section labels come from the loaded documents' effective titles, so the table
/// of contents reads like the manifest-driven variant.
pub fn run_with_sources(
    sources: &[PathBuf],
    title: Option<String>,
    out: &Path,
    options: &GuideOptions,
) -> Result<CmdResult> {
    let docs = load_documents(sources)?;
    let mut manifest = Manifest::from_sources(sources, title);
    manifest.relabel(docs.iter().map(Document::title));
    generate(&manifest, &docs, out, options)
}

fn generate(
    manifest: &Manifest,
    docs: &[Document],
    out: &Path,
    options: &GuideOptions,
) -> Result<CmdResult> {
    let content = build_guide(manifest, docs, options);
    write_output(out, &content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrote study guide with {} sections to {}",
        manifest.section_count(),
        out.display()
    )));
    Ok(result)
}
