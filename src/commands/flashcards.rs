use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::extract::{scan_document, LabelSet, PatternRecord, ScanOutcome};
use crate::flashcards::{cards_for, render_deck};
use crate::loader::load_documents;
use crate::output::write_output;
use std::path::{Path, PathBuf};

/// Generate a flashcard deck from the given sources.
///
/// Extraction warnings are not fatal: malformed catalog entries are dropped and
/// surfaced as one "N sections skipped" diagnostic at the end of the run.
pub fn run(
    sources: &[PathBuf],
    out: &Path,
    deck_title: &str,
    labels: &LabelSet,
) -> Result<CmdResult> {
    let docs = load_documents(sources)?;

    let mut records: Vec<PatternRecord> = Vec::new();
    let mut skipped = 0usize;
    for doc in &docs {
        for outcome in scan_document(doc, labels) {
            match outcome {
                ScanOutcome::Record(record) => records.push(record),
                ScanOutcome::Skipped { .. } => skipped += 1,
            }
        }
    }

    let deck = render_deck(deck_title, &records);
    write_output(out, &deck)?;

    let card_count: usize = records.iter().map(|r| cards_for(r).len()).sum();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Wrote {} cards ({} patterns) to {}",
        card_count,
        records.len(),
        out.display()
    )));
    if skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} sections skipped (missing pattern name or key indicators)",
            skipped
        )));
    }
    Ok(result)
}
