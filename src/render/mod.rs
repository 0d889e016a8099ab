//! Segment rendering
//!
//! Turns text into an ordered sequence of renderable segments: plain runs,
//! highlighted entities, and a trailing container for the overflow region.
//! Concatenating the text of every segment (container children included)
//! reproduces the input exactly.

mod links;

use serde::{Deserialize, Serialize};

use crate::entities::{extract, EntityKind};
use crate::util::char_prefix;

pub use links::Links;

/// A contiguous renderable unit of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Text with no entity in it
    Plain { text: String },
    /// A recognized entity, rendered as a link
    Highlighted {
        text: String,
        entity_kind: EntityKind,
        href: String,
        label: String,
    },
    /// Wrapper around everything past the character limit
    Overflow { children: Vec<Segment> },
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain { text: text.into() }
    }

    /// Text covered by this segment, children included
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Segment::Plain { text } | Segment::Highlighted { text, .. } => out.push_str(text),
            Segment::Overflow { children } => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted { .. })
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Segment::Overflow { .. })
    }
}

/// Concatenated text of a segment sequence
pub fn covered_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        segment.push_text(&mut out);
    }
    out
}

/// Split `text` into plain and highlighted segments.
///
/// Empty plain runs are never emitted, so empty input yields no segments.
pub fn highlight(text: &str, links: &Links) -> Vec<Segment> {
    let spans = extract(text);
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;

    for span in spans {
        let range = span.byte_range.clone();
        if range.start > last {
            segments.push(Segment::plain(&text[last..range.start]));
        }

        segments.push(Segment::Highlighted {
            text: text[range.clone()].to_string(),
            entity_kind: span.kind(),
            href: links.href(&span.entity),
            label: Links::label(&span.entity),
        });
        last = range.end;
    }

    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

/// Render the within-limit text followed by the overflow container.
///
/// `within_limit` is cut to `limit` chars whatever its length. Overflow text
/// is highlighted as-is: it is past the limit by definition.
pub fn render(within_limit: &str, overflow: Option<&str>, limit: usize, links: &Links) -> Vec<Segment> {
    let mut segments = highlight(char_prefix(within_limit, limit), links);

    if let Some(overflow) = overflow {
        segments.push(Segment::Overflow {
            children: highlight(overflow, links),
        });
    }

    segments
}
