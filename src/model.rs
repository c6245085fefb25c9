//! # Domain Model: Documents, Front-Matter, and Sections
//!
//! A study-guide source is a markdown file with an optional leading front-matter
//! block:
//!
//! ```text
//! ---
//! title: Algorithms & Data Structures
//! layout: default
//! description: Pattern catalog and complexity reference
//! ---
//!
//! # Algorithms & Data Structures
//! ...
//! ```
//!
//! Loading splits that into a [`FrontMatter`] and a body. Documents are immutable
//! for the duration of a generation run; every downstream stage (aggregation,
//! extraction, rendering) borrows them read-only.
//!
//! ## Sections
//!
//! A [`Section`] is a heading plus everything up to the next heading of
//! equal-or-higher level, so nested sub-headings stay inside their parent's span.
//! Heading markers inside fenced code blocks are payload text, never boundaries.
//!
//! ## Title resolution
//!
//! The effective document title is, in order: the front-matter `title`, the first
//! `# ` heading of the body, the file slug.

/// Metadata parsed from a document's leading `---` delimited block.
///
/// Unknown keys are tolerated and dropped; the three keys the study-guide corpus
/// actually uses are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub layout: Option<String>,
    pub description: Option<String>,
}

impl FrontMatter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.layout.is_none() && self.description.is_none()
    }
}

/// One loaded source document. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Document {
    /// File stem of the source path, e.g. `algo` for `docs/algo.md`.
    pub slug: String,
    pub front_matter: FrontMatter,
    /// Markdown body with the front-matter block removed.
    pub body: String,
}

impl Document {
    pub fn new(slug: impl Into<String>, front_matter: FrontMatter, body: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            front_matter,
            body: body.into(),
        }
    }

    /// Effective title: front-matter `title`, else first `# ` heading, else slug.
    pub fn title(&self) -> String {
        if let Some(title) = &self.front_matter.title {
            return title.clone();
        }
        for line in self.body.lines() {
            if let Some((1, text)) = parse_heading(line) {
                return text.to_string();
            }
        }
        self.slug.clone()
    }

    /// Body with the leading `# ` title line removed, if the first non-blank line
    /// is one. The aggregator supplies its own heading per document.
    pub fn body_without_title(&self) -> &str {
        let mut rest = self.body.trim_start_matches('\n');
        if let Some((1, _)) = rest.lines().next().and_then(parse_heading) {
            rest = match rest.split_once('\n') {
                Some((_, tail)) => tail,
                None => "",
            };
        }
        rest.trim_start_matches('\n')
    }

    pub fn sections(&self) -> Vec<Section> {
        split_sections(&self.body)
    }
}

/// A heading and its span of content, owned by one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading depth, 1-6.
    pub level: usize,
    pub heading: String,
    /// Lines between this heading and the next heading of equal-or-higher level,
    /// nested sub-headings included.
    pub content: String,
    /// Line index of the heading within the body.
    pub start: usize,
    /// Exclusive end line index of the span.
    pub end: usize,
}

/// Split the front-matter block off a raw file, returning `(front_matter, body)`.
///
/// The block is optional. When present it must be `---` delimited and contain only
/// blank lines and `key: value` pairs; anything else is a malformed-front-matter
/// reason (the loader attaches the offending path).
pub fn split_front_matter(raw: &str) -> std::result::Result<(FrontMatter, String), String> {
    let mut lines = raw.lines();
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return Ok((FrontMatter::default(), raw.to_string())),
    }

    let mut fm = FrontMatter::default();
    let mut consumed = raw.find('\n').map(|i| i + 1).unwrap_or(raw.len());
    let mut closed = false;

    for line in raw[consumed..].split_inclusive('\n') {
        consumed += line.len();
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim() == "---" {
            closed = true;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            return Err(format!("expected 'key: value', got '{}'", line.trim()));
        };
        let value = value.trim().to_string();
        match key.trim() {
            "title" => fm.title = Some(value),
            "layout" => fm.layout = Some(value),
            "description" => fm.description = Some(value),
            _ => {} // unknown keys are not our business
        }
    }

    if !closed {
        return Err("unterminated front-matter block".to_string());
    }

    let body = raw[consumed..].trim_start_matches('\n').to_string();
    Ok((fm, body))
}

/// Parse an ATX heading line into `(level, text)`.
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some((level, rest.trim()))
}

/// Leading code-fence marker of a line: the fence character and its run length.
pub(crate) fn fence_marker(line: &str) -> Option<(char, usize)> {
    let t = line.trim_start();
    let c = t.chars().next()?;
    if c != '`' && c != '~' {
        return None;
    }
    let n = t.chars().take_while(|&x| x == c).count();
    (n >= 3).then_some((c, n))
}

/// Split a markdown body into sections, in document order.
///
/// Spans overlap on purpose: an H2 section's content contains its H3 children,
/// and those children also appear as their own entries. Consumers that act on a
/// parent span use `start`/`end` to skip the nested entries.
pub fn split_sections(body: &str) -> Vec<Section> {
    let lines: Vec<&str> = body.lines().collect();

    // First pass: heading positions, ignoring anything inside fenced code.
    // A fence closes only on the character that opened it, with at least the
    // opening run length; the other marker inside a block is payload.
    let mut headings: Vec<(usize, usize, String)> = Vec::new();
    let mut fence: Option<(char, usize)> = None;
    for (idx, line) in lines.iter().enumerate() {
        if let Some((c, n)) = fence_marker(line) {
            match fence {
                None => fence = Some((c, n)),
                Some((open, len)) if c == open && n >= len => fence = None,
                Some(_) => {}
            }
            continue;
        }
        if fence.is_some() {
            continue;
        }
        if let Some((level, text)) = parse_heading(line) {
            headings.push((idx, level, text.to_string()));
        }
    }

    // Second pass: span ends at the next heading of equal-or-higher level.
    let mut sections = Vec::with_capacity(headings.len());
    for (i, (start, level, heading)) in headings.iter().enumerate() {
        let end = headings[i + 1..]
            .iter()
            .find(|(_, l, _)| l <= level)
            .map(|(idx, _, _)| *idx)
            .unwrap_or(lines.len());
        let content = lines[start + 1..end].join("\n");
        sections.push(Section {
            level: *level,
            heading: heading.clone(),
            content,
            start: *start,
            end,
        });
    }
    sections
}
