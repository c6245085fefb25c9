//! Aggregator: builds the consolidated printable guide.
//!
//! Given a manifest and the documents loaded in manifest order, produces one
//! markdown document: front-matter, synthetic top-level title, generated table of
//! contents, then each source body under its own labeled heading with all source
//! headings demoted so nothing collides with the synthetic structure. Pure and
//! deterministic: identical inputs yield byte-identical output.

use crate::manifest::Manifest;
use crate::model::Document;
use once_cell::sync::Lazy;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use pulldown_cmark_to_cmark::cmark;
use regex::Regex;

/// Output flavor: the guide ships in two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideFormat {
    /// Plain bulleted table of contents, for printing.
    Printable,
    /// Anchor-linked table of contents and per-section `<a name>` anchors.
    Web,
}

#[derive(Debug, Clone)]
pub struct GuideOptions {
    pub format: GuideFormat,
    pub strip_emoji: bool,
}

impl Default for GuideOptions {
    fn default() -> Self {
        Self {
            format: GuideFormat::Printable,
            strip_emoji: false,
        }
    }
}

static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\u{FE0F}\u{200D}]").expect("valid regex")
});

/// Build the guide document. `docs` must be in manifest order (one per section
/// entry, flattened across parts); the loader guarantees that alignment.
pub fn build_guide(manifest: &Manifest, docs: &[Document], opts: &GuideOptions) -> String {
    let mut out = String::new();

    // Output front-matter
    out.push_str("---\n");
    out.push_str(&format!("title: {}\n", manifest.title));
    out.push_str("layout: default\n");
    out.push_str("---\n\n");

    out.push_str(&format!("# {}\n\n", manifest.title));
    if let Some(subtitle) = &manifest.subtitle {
        out.push_str(&format!("*{}*\n\n", subtitle));
    }
    out.push_str("---\n\n");

    // Table of contents
    out.push_str("## Table of Contents\n\n");
    for part in &manifest.parts {
        if !part.title.is_empty() {
            out.push_str(&format!("### {}\n\n", part.title));
        }
        for section in &part.sections {
            match opts.format {
                GuideFormat::Printable => out.push_str(&format!("- {}\n", section.label)),
                GuideFormat::Web => out.push_str(&format!(
                    "- [{}](#{})\n",
                    section.label,
                    anchor(&section.label)
                )),
            }
        }
        out.push('\n');
    }
    out.push_str("---\n\n");

    // Body: one labeled section per document, in manifest order
    let mut doc_idx = 0;
    for part in &manifest.parts {
        let named = !part.title.is_empty();
        if named {
            out.push_str(&format!("## {}\n\n", part.title));
        }

        for section in &part.sections {
            let Some(doc) = docs.get(doc_idx) else { break };
            doc_idx += 1;

            if opts.format == GuideFormat::Web {
                out.push_str(&format!("<a name=\"{}\"></a>\n", anchor(&section.label)));
            }
            // Labels sit one level under their part; bodies one level under that.
            let (label_hashes, demote_by) = if named { ("###", 2) } else { ("##", 1) };
            out.push_str(&format!("{} {}\n\n", label_hashes, section.label));

            let body = prepare_body(doc.body_without_title(), demote_by, opts.strip_emoji);
            if !body.is_empty() {
                out.push_str(&body);
                out.push('\n');
            }
            out.push_str("\n---\n\n");
        }
    }

    // Single trailing newline
    let trimmed = out.trim_end().to_string();
    trimmed + "\n"
}

/// Demote every heading by `by` levels (capped at H6) and optionally strip
/// pictographic characters from prose. Code blocks pass through verbatim as
/// opaque payloads.
fn prepare_body(content: &str, by: usize, strip_emoji: bool) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let parser = Parser::new_ext(content, Options::all());
    let mut in_code_block = false;

    let events: Vec<Event> = parser
        .map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => Event::Start(Tag::Heading {
                level: demote_level(level, by),
                id,
                classes,
                attrs,
            }),
            Event::End(TagEnd::Heading(level)) => Event::End(TagEnd::Heading(demote_level(level, by))),
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                Event::Start(Tag::CodeBlock(kind))
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                Event::End(TagEnd::CodeBlock)
            }
            Event::Text(text) if strip_emoji && !in_code_block => {
                Event::Text(CowStr::from(EMOJI_RE.replace_all(&text, "").into_owned()))
            }
            other => other,
        })
        .collect();

    let mut output = String::new();
    cmark(events.iter(), &mut output).expect("cmark serialization failed");
    output
}

fn demote_level(level: HeadingLevel, by: usize) -> HeadingLevel {
    let n = match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    };
    match n + by {
        1 => HeadingLevel::H1,
        2 => HeadingLevel::H2,
        3 => HeadingLevel::H3,
        4 => HeadingLevel::H4,
        5 => HeadingLevel::H5,
        _ => HeadingLevel::H6,
    }
}

/// Anchor slug for TOC links: alphanumerics kept, lowercased, spaces to dashes.
fn anchor(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Part, SectionEntry};
    use crate::model::FrontMatter;
    use std::path::PathBuf;

    fn doc(slug: &str, body: &str) -> Document {
        Document::new(slug, FrontMatter::default(), body)
    }

    fn manifest_with_part() -> Manifest {
        Manifest {
            title: "Complete Guide".to_string(),
            subtitle: Some("offline edition".to_string()),
            parts: vec![Part {
                title: "Core Fundamentals".to_string(),
                sections: vec![
                    SectionEntry {
                        file: PathBuf::from("algo.md"),
                        label: "Algorithms".to_string(),
                    },
                    SectionEntry {
                        file: PathBuf::from("search.md"),
                        label: "Searching & Sorting".to_string(),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_build_guide_structure() {
        let manifest = manifest_with_part();
        let docs = vec![
            doc("algo", "# Algorithms\n\n## Patterns\n\nSome text"),
            doc("search", "# Search\n\nBinary search notes"),
        ];
        let out = build_guide(&manifest, &docs, &GuideOptions::default());

        assert!(out.starts_with("---\ntitle: Complete Guide\nlayout: default\n---\n"));
        assert!(out.contains("# Complete Guide"));
        assert!(out.contains("*offline edition*"));
        assert!(out.contains("## Table of Contents"));
        assert!(out.contains("### Core Fundamentals"));
        assert!(out.contains("- Algorithms\n"));
        assert!(out.contains("- Searching & Sorting\n"));
        // Part heading, labels, and demoted source headings
        assert!(out.contains("## Core Fundamentals"));
        assert!(out.contains("### Algorithms"));
        // The source's H2 "Patterns" lands at H4 under a named part
        assert!(out.contains("#### Patterns"));
        assert!(out.ends_with("---\n"));
    }

    #[test]
    fn test_build_guide_unnamed_part_levels() {
        let manifest = Manifest::from_sources(&[PathBuf::from("a.md")], None);
        let docs = vec![doc("a", "# Title\n\n## Inner\n\ntext")];
        let out = build_guide(&manifest, &docs, &GuideOptions::default());

        // Flat guide: labels at H2, source H2 demoted to H3
        assert!(out.contains("## a\n"));
        assert!(out.contains("### Inner"));
        assert!(!out.contains("### a\n"));
    }

    #[test]
    fn test_build_guide_deterministic() {
        let manifest = manifest_with_part();
        let docs = vec![
            doc("algo", "# Algorithms\n\n- one\n- two\n"),
            doc("search", "## Directly nested\n\ntext"),
        ];
        let first = build_guide(&manifest, &docs, &GuideOptions::default());
        let second = build_guide(&manifest, &docs, &GuideOptions::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_guide_web_anchors() {
        let manifest = manifest_with_part();
        let docs = vec![doc("algo", "text"), doc("search", "text")];
        let opts = GuideOptions {
            format: GuideFormat::Web,
            strip_emoji: false,
        };
        let out = build_guide(&manifest, &docs, &opts);

        assert!(out.contains("- [Algorithms](#algorithms)"));
        assert!(out.contains("- [Searching & Sorting](#searching--sorting)"));
        assert!(out.contains("<a name=\"algorithms\"></a>"));
    }

    #[test]
    fn test_prepare_body_demotes_and_caps() {
        let out = prepare_body("# One\n\n##### Five\n\n###### Six", 2, false);
        assert!(out.contains("### One"));
        // H5 and H6 both cap at H6
        assert_eq!(out.matches("###### ").count(), 2);
    }

    #[test]
    fn test_prepare_body_keeps_code_verbatim() {
        let body = "## Usage\n\n```python\ndef binary_search(arr, target):\n    # left pointer\n    pass\n```\n";
        let out = prepare_body(body, 2, false);
        assert!(out.contains("```python"));
        assert!(out.contains("def binary_search(arr, target):"));
        assert!(out.contains("    # left pointer"));
    }

    #[test]
    fn test_prepare_body_strips_emoji_outside_code() {
        let body = "Ship it \u{1F680} now\n\n```sh\necho \"\u{1F680}\"\n```\n";
        let out = prepare_body(body, 1, true);
        assert!(!out.lines().next().unwrap().contains('\u{1F680}'));
        assert!(out.contains("echo \"\u{1F680}\""));
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("Searching & Sorting"), "searching--sorting");
        assert_eq!(anchor("CI/CD & Infrastructure"), "cicd--infrastructure");
        assert_eq!(anchor("Plain"), "plain");
    }
}
