//! Pattern Extractor: derives structured pattern records from catalog sections.
//!
//! A "pattern catalog entry" is a documentation section shaped like:
//!
//! ````text
//! #### **Two Pointers Pattern**
//! **Key indicators**:
//! - Sorted array or linked list
//! - Sum to target
//! **Examples**:
//! - Two Sum in sorted array
//! ```python
//! def two_sum(numbers, target): ...
//! ```
//! **Time Complexity**: O(n), **Space Complexity**: O(1)
//! ````
//!
//! Field labels are recognized either as bold label lines (the shape above, used
//! throughout the study-guide corpus) or as sub-headings (`#### Key indicators`).
//! Sections with no recognizable label are not catalog entries and are passed over
//! silently. Sections that look like entries but are missing a name or indicators
//! yield a [`ScanOutcome::Skipped`] so callers can report a skip count; they are
//! never turned into fabricated records.
//!
//! Catalog entries are leaf sections: a nested sub-heading that is not a field
//! label ends the entry, and everything below it is scanned as its own section.
//! Field content placed under such a sub-heading belongs to that sub-heading,
//! not to the entry. This is stricter than stopping only at equal-or-higher
//! headings; it keeps a grouping section from claiming its children's fields.
//!
//! Complexity is taken only from dedicated `Time Complexity:` /
//! `Space Complexity:` lines, on one line or directly adjacent ones. Passing
//! mentions inside bullet prose never pair into a complexity value.
//!
//! Scanning is lazy and restartable: [`scan_document`] walks sections in document
//! order and recomputes from scratch on every call, caching nothing.

use crate::model::{fence_marker, parse_heading, Document, Section};
use once_cell::sync::Lazy;
use regex::Regex;

/// Labels that mark extraction fields inside a catalog section.
#[derive(Debug, Clone)]
pub struct LabelSet {
    pub indicator_labels: Vec<String>,
    pub example_labels: Vec<String>,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            indicator_labels: vec!["Key indicators".to_string(), "When to use".to_string()],
            example_labels: vec!["Examples".to_string(), "Example".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Indicators,
    Examples,
}

impl LabelSet {
    fn field_for(&self, text: &str) -> Option<Field> {
        let text = text.trim().trim_end_matches(':').trim();
        if self
            .indicator_labels
            .iter()
            .any(|l| l.eq_ignore_ascii_case(text))
        {
            return Some(Field::Indicators);
        }
        if self
            .example_labels
            .iter()
            .any(|l| l.eq_ignore_ascii_case(text))
        {
            return Some(Field::Examples);
        }
        None
    }
}

/// A fenced example code block, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Declared language tag, if the fence carried one.
    pub language: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complexity {
    pub time: String,
    pub space: String,
}

/// One extracted pattern-catalog entry. Transient: exists only during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRecord {
    pub name: String,
    pub key_indicators: Vec<String>,
    /// Prose example bullets. Independent of `example_code`; either may be absent.
    pub examples: Vec<String>,
    pub example_code: Option<CodeBlock>,
    pub complexity: Option<Complexity>,
}

/// One step of a scan: a usable record, or a section that matched the catalog
/// shape but failed the name/indicator invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Record(PatternRecord),
    Skipped { heading: String },
}

/// Lazily scan a document's sections for pattern-catalog entries.
pub fn scan_document<'a>(doc: &Document, labels: &'a LabelSet) -> PatternScan<'a> {
    PatternScan {
        sections: doc.sections(),
        idx: 0,
        consumed: 0,
        labels,
    }
}

pub struct PatternScan<'a> {
    sections: Vec<Section>,
    idx: usize,
    /// Line watermark: sections starting before this are nested inside an
    /// already-consumed catalog entry.
    consumed: usize,
    labels: &'a LabelSet,
}

impl Iterator for PatternScan<'_> {
    type Item = ScanOutcome;

    fn next(&mut self) -> Option<ScanOutcome> {
        while self.idx < self.sections.len() {
            let section = &self.sections[self.idx];
            self.idx += 1;

            if section.start < self.consumed {
                continue;
            }
            let Some(fields) = parse_fields(section, self.labels) else {
                // Not a catalog entry; descend into nested sections.
                continue;
            };
            // Consume only what was actually parsed: a nested non-label heading
            // ends the entry early and everything after it is scanned again.
            self.consumed = section.start + 1 + fields.parsed_lines;

            let name = pattern_name(&section.heading);
            if name.is_empty() || fields.indicators.is_empty() {
                return Some(ScanOutcome::Skipped {
                    heading: section.heading.clone(),
                });
            }
            return Some(ScanOutcome::Record(PatternRecord {
                name,
                key_indicators: fields.indicators,
                examples: fields.examples,
                example_code: fields.code,
                complexity: fields.complexity,
            }));
        }
        None
    }
}

/// Section heading stripped of bold markers, e.g. `**Two Pointers Pattern**`.
fn pattern_name(heading: &str) -> String {
    heading.trim().trim_matches('*').trim().to_string()
}

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)time\s+complexity\*{0,2}\s*:\s*([^,]+)").expect("valid regex"));
static SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)space\s+complexity\*{0,2}\s*:\s*(.+)$").expect("valid regex"));
static BOLD_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*\s*([^*]+?)\s*\*\*\s*:?\s*$").expect("valid regex"));

struct Fields {
    indicators: Vec<String>,
    examples: Vec<String>,
    code: Option<CodeBlock>,
    complexity: Option<Complexity>,
    /// Content lines consumed before a nested non-label heading ended the entry.
    parsed_lines: usize,
}

/// Parse a section's span into catalog fields, or `None` when the section
/// contains no recognizable label and therefore is not a catalog entry.
fn parse_fields(section: &Section, labels: &LabelSet) -> Option<Fields> {
    let lines: Vec<&str> = section.content.lines().collect();

    let mut zone: Option<Field> = None;
    let mut saw_label = false;
    let mut indicators = Vec::new();
    let mut examples = Vec::new();
    let mut code: Option<CodeBlock> = None;
    let mut complexity: Option<Complexity> = None;
    let mut pending_time: Option<(String, usize)> = None;
    let mut pending_space: Option<(String, usize)> = None;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        // Fenced block: capture the first one under an examples label, treat all
        // others as opaque payload. Only a fence of the same character and at
        // least the opening length closes the block.
        if let Some((marker, len)) = fence_marker(trimmed) {
            let language = {
                let tag = trimmed[len..].trim();
                if tag.is_empty() {
                    None
                } else {
                    Some(tag.to_string())
                }
            };
            let mut block_lines = Vec::new();
            i += 1;
            while i < lines.len() {
                match fence_marker(lines[i]) {
                    Some((c, n)) if c == marker && n >= len => break,
                    _ => {
                        block_lines.push(lines[i]);
                        i += 1;
                    }
                }
            }
            i += 1; // closing fence (or EOF)
            if zone == Some(Field::Examples) && code.is_none() {
                code = Some(CodeBlock {
                    language,
                    text: block_lines.join("\n"),
                });
            }
            continue;
        }

        if let Some((_, text)) = parse_heading(line) {
            // A label sub-heading opens a field zone. Any other nested heading
            // ends this entry's span: whatever follows belongs to a nested
            // section, not to this one.
            match labels.field_for(text) {
                Some(field) => {
                    zone = Some(field);
                    saw_label = true;
                }
                None => break,
            }
            i += 1;
            continue;
        }

        if let Some(field) = label_line(trimmed, labels) {
            zone = Some(field);
            saw_label = true;
            i += 1;
            continue;
        }

        if let Some(item) = bullet_text(trimmed) {
            // Bullets are field payload; complexity never comes from them.
            match zone {
                Some(Field::Indicators) if !item.is_empty() => indicators.push(item),
                Some(Field::Examples) if !item.is_empty() => examples.push(item),
                _ => {}
            }
            i += 1;
            continue;
        }

        // Complexity: both halves on one line, or on adjacent lines with at
        // most blank lines between. A half that never finds its partner is
        // dropped; the value is never assembled from scattered mentions.
        if complexity.is_none() {
            let time = TIME_RE.captures(trimmed).map(|c| clean_value(&c[1]));
            let space = SPACE_RE.captures(trimmed).map(|c| clean_value(&c[1]));
            match (time, space) {
                (Some(time), Some(space)) => complexity = Some(Complexity { time, space }),
                (Some(time), None) => match pending_space.take() {
                    Some((space, at)) if only_blanks(&lines, at, i) => {
                        complexity = Some(Complexity { time, space });
                    }
                    _ => pending_time = Some((time, i)),
                },
                (None, Some(space)) => match pending_time.take() {
                    Some((time, at)) if only_blanks(&lines, at, i) => {
                        complexity = Some(Complexity { time, space });
                    }
                    _ => pending_space = Some((space, i)),
                },
                (None, None) => {}
            }
        }

        i += 1;
    }

    if !saw_label {
        return None;
    }

    Some(Fields {
        indicators,
        examples,
        code,
        complexity,
        parsed_lines: i,
    })
}

/// Match a bold (`**Key indicators**:`) or plain (`Key indicators:`) label line.
fn label_line(trimmed: &str, labels: &LabelSet) -> Option<Field> {
    if let Some(caps) = BOLD_LABEL_RE.captures(trimmed) {
        return labels.field_for(&caps[1]);
    }
    if trimmed.ends_with(':') && !trimmed.contains('*') && !trimmed.starts_with('-') {
        return labels.field_for(trimmed);
    }
    None
}

fn only_blanks(lines: &[&str], from: usize, to: usize) -> bool {
    lines[from + 1..to].iter().all(|l| l.trim().is_empty())
}

fn bullet_text(trimmed: &str) -> Option<String> {
    for marker in ["- ", "* ", "• "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some(rest.trim().to_string());
        }
    }
    None
}

fn clean_value(raw: &str) -> String {
    raw.trim().trim_matches('*').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FrontMatter;

    fn doc(body: &str) -> Document {
        Document::new("algo", FrontMatter::default(), body)
    }

    fn records(body: &str) -> Vec<PatternRecord> {
        let doc = doc(body);
        let labels = LabelSet::default();
        scan_document(&doc, &labels)
            .filter_map(|o| match o {
                ScanOutcome::Record(r) => Some(r),
                ScanOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    const BINARY_SEARCH: &str = "\
## Algorithm Problem Identification Guide

### Binary Search Pattern

#### Key indicators

- Sorted array or rotated sorted array
- Find a specific element or boundary
- Minimize or maximize a capacity
- Answer is monotonic over the search space
- O(log n) expected

#### Examples

```python
def binary_search(arr, target):
    lo, hi = 0, len(arr) - 1
    while lo <= hi:
        mid = (lo + hi) // 2
        if arr[mid] == target:
            return mid
        if arr[mid] < target:
            lo = mid + 1
        else:
            hi = mid - 1
    return -1
```
";

    #[test]
    fn test_scenario_binary_search() {
        let recs = records(BINARY_SEARCH);
        assert_eq!(recs.len(), 1);

        let r = &recs[0];
        assert_eq!(r.name, "Binary Search Pattern");
        assert_eq!(r.key_indicators.len(), 5);
        assert_eq!(r.key_indicators[0], "Sorted array or rotated sorted array");
        assert_eq!(r.key_indicators[4], "O(log n) expected");

        let code = r.example_code.as_ref().unwrap();
        assert_eq!(code.language.as_deref(), Some("python"));
        assert!(code.text.starts_with("def binary_search(arr, target):"));
        assert!(code.text.ends_with("    return -1"));
        assert!(r.complexity.is_none());
    }

    const BOLD_LABEL_CORPUS: &str = "\
#### **Two Pointers Pattern**
**Key indicators**:
- Sorted array or linked list
- Sum to target
- Palindrome checks

**Examples**:
- Two Sum in sorted array
- Valid palindrome

```python
def two_sum(numbers, target):
    left, right = 0, len(numbers) - 1
```

**Time Complexity**: O(n), **Space Complexity**: O(1)
";

    #[test]
    fn test_bold_label_corpus_shape() {
        let recs = records(BOLD_LABEL_CORPUS);
        assert_eq!(recs.len(), 1);

        let r = &recs[0];
        assert_eq!(r.name, "Two Pointers Pattern");
        assert_eq!(
            r.key_indicators,
            vec![
                "Sorted array or linked list",
                "Sum to target",
                "Palindrome checks"
            ]
        );
        assert_eq!(
            r.examples,
            vec!["Two Sum in sorted array", "Valid palindrome"]
        );
        assert!(r.example_code.is_some());

        let complexity = r.complexity.as_ref().unwrap();
        assert_eq!(complexity.time, "O(n)");
        assert_eq!(complexity.space, "O(1)");
    }

    #[test]
    fn test_indicator_order_preserved_no_empties() {
        let body = "\
### P
**Key indicators**:
- charlie
-
- alpha
- bravo
";
        let recs = records(body);
        assert_eq!(recs[0].key_indicators, vec!["charlie", "alpha", "bravo"]);
    }

    #[test]
    fn test_collection_stops_at_next_heading() {
        let body = "\
### P
**Key indicators**:
- one

### Unrelated

- not an indicator
";
        let recs = records(body);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].key_indicators, vec!["one"]);
    }

    #[test]
    fn test_missing_indicators_yields_skipped() {
        let body = "\
### Hollow Pattern
**Examples**:
- something
";
        let doc = doc(body);
        let labels = LabelSet::default();
        let outcomes: Vec<ScanOutcome> = scan_document(&doc, &labels).collect();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            outcomes[0],
            ScanOutcome::Skipped {
                heading: "Hollow Pattern".to_string()
            }
        );
    }

    #[test]
    fn test_plain_sections_skipped_silently() {
        let body = "## Intro\n\nProse only.\n\n### Sub\n\nMore prose.\n";
        let doc = doc(body);
        let labels = LabelSet::default();
        assert_eq!(scan_document(&doc, &labels).count(), 0);
    }

    #[test]
    fn test_complexity_requires_both_halves() {
        let body = "\
### P
**Key indicators**:
- one

Time Complexity: O(n log n)
";
        let recs = records(body);
        assert!(recs[0].complexity.is_none());
    }

    #[test]
    fn test_complexity_not_taken_from_indicator_bullets() {
        let body = "\
### P
**Key indicators**:
- watch the time complexity: O(n^2) blowup, avoid nesting
- memory matters; space complexity: should stay flat
";
        let recs = records(body);
        assert_eq!(recs[0].key_indicators.len(), 2);
        assert!(recs[0].complexity.is_none());
    }

    #[test]
    fn test_complexity_halves_must_be_adjacent() {
        let body = "\
### P
**Key indicators**:
- one

Time Complexity: O(n)

Unrelated discussion of the approach.

Space Complexity: O(1)
";
        let recs = records(body);
        assert!(recs[0].complexity.is_none());
    }

    #[test]
    fn test_complexity_pair_allows_blank_line_between() {
        let body = "\
### P
**Key indicators**:
- one

Time Complexity: O(n)

Space Complexity: O(1)
";
        let recs = records(body);
        let c = recs[0].complexity.as_ref().unwrap();
        assert_eq!(c.time, "O(n)");
        assert_eq!(c.space, "O(1)");
    }

    #[test]
    fn test_complexity_on_separate_lines() {
        let body = "\
### P
**Key indicators**:
- one

Time Complexity: O(V + E)
Space Complexity: O(V)
";
        let recs = records(body);
        let c = recs[0].complexity.as_ref().unwrap();
        assert_eq!(c.time, "O(V + E)");
        assert_eq!(c.space, "O(V)");
    }

    #[test]
    fn test_code_outside_examples_not_captured() {
        let body = "\
### P
**Key indicators**:
- one

```python
not_example_code()
```
";
        let recs = records(body);
        assert!(recs[0].example_code.is_none());
    }

    #[test]
    fn test_four_backtick_fence_keeps_inner_fence() {
        let body = "\
### P
**Key indicators**:
- one

**Examples**:
````md
```python
inner()
```
````
";
        let recs = records(body);
        let code = recs[0].example_code.as_ref().unwrap();
        assert_eq!(code.language.as_deref(), Some("md"));
        assert_eq!(code.text, "```python\ninner()\n```");
    }

    #[test]
    fn test_nested_prose_subheading_ends_entry() {
        let body = "\
### P
**Key indicators**:
- one
- two

##### Note

Extra discussion, not part of the entry.
";
        let recs = records(body);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].key_indicators, vec!["one", "two"]);
    }

    #[test]
    fn test_only_first_code_block_captured() {
        let body = "\
### P
**Key indicators**:
- one

**Examples**:
```python
first()
```
```python
second()
```
";
        let recs = records(body);
        assert_eq!(recs[0].example_code.as_ref().unwrap().text, "first()");
    }

    #[test]
    fn test_multiple_patterns_in_document_order() {
        let body = format!("{}\n{}", BINARY_SEARCH, BOLD_LABEL_CORPUS);
        let recs = records(&body);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].name, "Binary Search Pattern");
        assert_eq!(recs[1].name, "Two Pointers Pattern");
    }

    #[test]
    fn test_scan_is_restartable() {
        let doc = doc(BOLD_LABEL_CORPUS);
        let labels = LabelSet::default();
        let first: Vec<ScanOutcome> = scan_document(&doc, &labels).collect();
        let second: Vec<ScanOutcome> = scan_document(&doc, &labels).collect();
        assert_eq!(first, second);
    }
}
