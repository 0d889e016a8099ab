//! Entity extraction
//!
//! Classifies substrings of arbitrary text into hashtags, mentions,
//! cashtags and URLs.
//!
//! # Guarantees
//!
//! - Spans never overlap. When candidates of different kinds collide, the
//!   one that starts first wins; on equal starts URLs win over hashtags,
//!   mentions and cashtags, in that order.
//! - Spans are sorted ascending by start index.
//! - Indices are char indices (Unicode scalar values), end exclusive.
//!   `byte_range` addresses the same substring for slicing.
//!
//! # Example
//!
//! ```
//! use tagbox::entities::{extract, Entity};
//!
//! let spans = extract("ship it #rust @ferris");
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].entity, Entity::Hashtag("rust".into()));
//! assert_eq!((spans[1].start, spans[1].end), (14, 21));
//! ```

mod patterns;

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::util::CharCursor;

use patterns::Candidate;

/// The four recognized entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Hashtag,
    Mention,
    Cashtag,
    Url,
}

impl EntityKind {
    /// Lowercase name, also used as the display-layer class
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Hashtag => "hashtag",
            EntityKind::Mention => "mention",
            EntityKind::Cashtag => "cashtag",
            EntityKind::Url => "url",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized entity and its kind-specific value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entity {
    /// Tag text without the `#`
    Hashtag(String),
    /// Screen name without the `@`
    Mention(String),
    /// Ticker symbol without the `$`
    Cashtag(String),
    /// URL as written (trailing punctuation excluded)
    Url(String),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Hashtag(_) => EntityKind::Hashtag,
            Entity::Mention(_) => EntityKind::Mention,
            Entity::Cashtag(_) => EntityKind::Cashtag,
            Entity::Url(_) => EntityKind::Url,
        }
    }

    /// The value without its sigil
    pub fn value(&self) -> &str {
        match self {
            Entity::Hashtag(v) | Entity::Mention(v) | Entity::Cashtag(v) | Entity::Url(v) => v,
        }
    }
}

/// An entity located in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub entity: Entity,
    /// Start char index (inclusive)
    pub start: usize,
    /// End char index (exclusive)
    pub end: usize,
    /// Same span as a byte range
    pub byte_range: Range<usize>,
    /// Matched substring, sigil included
    pub raw: String,
}

impl EntitySpan {
    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Extract all non-overlapping entities from `text`, sorted by start.
pub fn extract(text: &str) -> Vec<EntitySpan> {
    if text.is_empty() {
        return Vec::new();
    }

    // Order matters: on equal starts the stable sort keeps URLs first
    let mut candidates = patterns::urls(text);
    candidates.extend(patterns::hashtags(text));
    candidates.extend(patterns::mentions(text));
    candidates.extend(patterns::cashtags(text));

    let kept = remove_overlapping(candidates);

    let mut cursor = CharCursor::new(text);
    kept.into_iter()
        .map(|candidate| {
            let start = cursor.char_index(candidate.bytes.start);
            let end = cursor.char_index(candidate.bytes.end);
            EntitySpan {
                raw: text[candidate.bytes.clone()].to_string(),
                entity: candidate.entity,
                start,
                end,
                byte_range: candidate.bytes,
            }
        })
        .collect()
}

/// Sort by start and drop every candidate that overlaps an earlier one
fn remove_overlapping(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| c.bytes.start);

    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let overlaps = kept
            .last()
            .is_some_and(|prev| candidate.bytes.start < prev.bytes.end);
        if overlaps {
            tracing::trace!(dropped = ?candidate.entity, "overlapping entity dropped");
            continue;
        }
        kept.push(candidate);
    }
    kept
}
