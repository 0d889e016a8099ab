//! Snapshot - the derived state handed to the host after every change

use serde::{Deserialize, Serialize};

use crate::entities::{extract, Entity};
use crate::overflow::SyncedText;
use crate::render::{render, Links, Segment};
use crate::util::char_len;

/// Counter warning threshold used by the compose and chat boxes
pub const DEFAULT_WARNING_THRESHOLD: i64 = 20;

/// Tag values (sigils stripped) grouped by kind, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    pub hash: Vec<String>,
    pub mention: Vec<String>,
    pub cash: Vec<String>,
}

impl Tags {
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty() && self.mention.is_empty() && self.cash.is_empty()
    }
}

/// How a remaining-characters counter should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStatus {
    Normal,
    /// Close to the limit
    Warning,
    /// At or over the limit
    Error,
}

/// Complete derived-state projection of the current text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// `char_limit` minus the length of `text`; negative while overflowing
    pub chars_left: i64,
    /// The editable text: within-limit part followed by the overflow
    pub text: String,
    /// `text` with the overflow wrapped in markers
    pub encoded_text: String,
    /// Overflow content, if the text is past the limit
    pub overflow: Option<String>,
    /// Render segments covering `text`
    #[serde(rename = "highlightedSegments")]
    pub segments: Vec<Segment>,
    /// Tags found anywhere in `text`, overflow included
    pub tags: Tags,
    /// URLs found anywhere in `text`, overflow included
    pub urls: Vec<String>,
}

impl Snapshot {
    /// Snapshot of an empty field
    pub fn empty(char_limit: usize) -> Self {
        Self {
            chars_left: char_limit as i64,
            text: String::new(),
            encoded_text: String::new(),
            overflow: None,
            segments: Vec::new(),
            tags: Tags::default(),
            urls: Vec::new(),
        }
    }

    /// Project a codec pass into a snapshot
    pub fn build(synced: &SyncedText, char_limit: usize, links: &Links) -> Self {
        let segments = render(
            &synced.within_limit,
            synced.overflow.as_deref(),
            char_limit,
            links,
        );
        let (tags, urls) = collect_entities(&synced.visible);

        Self {
            chars_left: char_limit as i64 - char_len(&synced.visible) as i64,
            text: synced.visible.clone(),
            encoded_text: synced.encoded.clone(),
            overflow: synced.overflow.clone(),
            segments,
            tags,
            urls,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_over_limit(&self) -> bool {
        self.chars_left < 0
    }

    /// Submission gate: some text, and nothing past the limit
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty() && self.chars_left >= 0
    }

    /// Counter styling for the given warning threshold
    pub fn counter_status(&self, warning_threshold: i64) -> CounterStatus {
        if self.chars_left <= 0 {
            CounterStatus::Error
        } else if self.chars_left <= warning_threshold {
            CounterStatus::Warning
        } else {
            CounterStatus::Normal
        }
    }
}

fn collect_entities(text: &str) -> (Tags, Vec<String>) {
    let mut tags = Tags::default();
    let mut urls = Vec::new();

    for span in extract(text) {
        match span.entity {
            Entity::Hashtag(tag) => tags.hash.push(tag),
            Entity::Mention(name) => tags.mention.push(name),
            Entity::Cashtag(symbol) => tags.cash.push(symbol),
            Entity::Url(url) => urls.push(url),
        }
    }

    (tags, urls)
}
