//! Flashcard Renderer: turns pattern records into a front/back card deck.
//!
//! Per record, cards are emitted in fixed order:
//!
//! 1. identify card — back lists the key indicators as `• ` bullets
//! 2. examples card — back lists the prose examples; emitted with an empty back
//!    when the pattern has none
//! 3. implement card — back is the verbatim fenced code block; omitted entirely
//!    when no example code was extracted
//! 4. complexity card — back falls back to `"Varies by implementation"`
//!
//! Numbering is one 1-based running counter across the whole deck. Card order
//! follows record order; the study sequence is meaningful.

use crate::extract::PatternRecord;
use once_cell::sync::Lazy;
use regex::Regex;

pub const COMPLEXITY_FALLBACK: &str = "Varies by implementation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

static FUNC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:def|fn|function)\s+(\w+)").expect("valid regex"));

/// Cards for one record, in the fixed template order.
pub fn cards_for(record: &PatternRecord) -> Vec<Flashcard> {
    let mut cards = Vec::with_capacity(4);

    cards.push(Flashcard {
        front: format!("Identify the algorithm pattern for: {}", record.name),
        back: format!("Key indicators:{}", bulleted(&record.key_indicators)),
    });

    cards.push(Flashcard {
        front: format!("Give examples of {} problems", record.name),
        back: if record.examples.is_empty() {
            String::new()
        } else {
            format!("Common examples:{}", bulleted(&record.examples))
        },
    });

    if let Some(code) = &record.example_code {
        let front = match FUNC_RE.captures(&code.text) {
            Some(caps) => format!("Implement {} using {}", &caps[1], record.name),
            None => format!("Implement an example of {}", record.name),
        };
        cards.push(Flashcard {
            front,
            back: format!(
                "```{}\n{}\n```",
                code.language.as_deref().unwrap_or(""),
                code.text
            ),
        });
    }

    cards.push(Flashcard {
        front: format!("What is the time/space complexity of {}?", record.name),
        back: match &record.complexity {
            Some(c) => format!("{} time, {} space", c.time, c.space),
            None => COMPLEXITY_FALLBACK.to_string(),
        },
    });

    cards
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\n• {}", item))
        .collect::<String>()
}

/// Render the full deck document. A run with zero records still produces a valid
/// deck (title only, zero cards).
pub fn render_deck<'a, I>(title: &str, records: I) -> String
where
    I: IntoIterator<Item = &'a PatternRecord>,
{
    let mut out = String::new();
    out.push_str(&format!("# {}\n", title));

    let mut number = 1;
    for record in records {
        for card in cards_for(record) {
            out.push_str(&format!("\n## Card {}\n\n", number));
            out.push_str(&format!("**Front:** {}\n\n", card.front));
            if card.back.is_empty() {
                out.push_str("**Back:**\n");
            } else {
                out.push_str(&format!("**Back:** {}\n", card.back));
            }
            number += 1;
        }
    }
    out
}
