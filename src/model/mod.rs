//! Text box model - the state owned by one editable field
//!
//! Holds the RawText / EncodedText / Snapshot triple. The snapshot is a pure
//! projection of the text and is rebuilt on every change.

pub mod snapshot;

pub use snapshot::{CounterStatus, Snapshot, Tags, DEFAULT_WARNING_THRESHOLD};

use serde::{Deserialize, Serialize};

use crate::config::TextBoxConfig;
use crate::overflow::{sync_text, SyncedText};
use crate::render::Links;
use crate::util::char_len;

/// Who owns the text value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueMode {
    /// The model applies every edit itself
    #[default]
    SelfManaged,
    /// The host owns the value; edits become change requests and the host
    /// feeds the value it settles on back in
    External,
}

/// State of one text box
#[derive(Debug, Clone)]
pub struct TextBoxModel {
    config: TextBoxConfig,
    links: Links,
    raw_text: String,
    encoded_text: String,
    snapshot: Snapshot,
}

impl TextBoxModel {
    pub fn new(config: TextBoxConfig) -> Self {
        let links = Links::new(config.base_url.clone());
        let snapshot = Snapshot::empty(config.char_limit);
        Self {
            config,
            links,
            raw_text: String::new(),
            encoded_text: String::new(),
            snapshot,
        }
    }

    pub fn mode(&self) -> ValueMode {
        self.config.mode
    }

    pub fn char_limit(&self) -> usize {
        self.config.char_limit
    }

    /// Current editable text
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Current text with the overflow wrapped in markers
    pub fn encoded_text(&self) -> &str {
        &self.encoded_text
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Run the codec pass for `value` without touching the model
    pub fn sync(&self, value: &str) -> SyncedText {
        sync_text(value, self.config.char_limit)
    }

    /// Store a codec pass and rebuild the snapshot
    pub fn apply(&mut self, synced: SyncedText) -> &Snapshot {
        self.snapshot = Snapshot::build(&synced, self.config.char_limit, &self.links);
        self.raw_text = synced.visible;
        self.encoded_text = synced.encoded;
        &self.snapshot
    }

    /// Back to an empty field
    pub fn reset(&mut self) -> &Snapshot {
        self.raw_text.clear();
        self.encoded_text.clear();
        self.snapshot = Snapshot::empty(self.config.char_limit);
        &self.snapshot
    }

    /// Submission gate, honoring `ignore_blank_submit`
    pub fn can_submit(&self) -> bool {
        if self.config.ignore_blank_submit && self.raw_text.trim().is_empty() {
            return false;
        }
        self.snapshot.can_submit()
    }

    /// Counter styling for the current text
    pub fn counter_status(&self) -> CounterStatus {
        self.snapshot.counter_status(self.config.warning_threshold)
    }

    /// Check model invariants (debug builds only)
    ///
    /// Panics if the snapshot no longer matches the stored text.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let limit = self.config.char_limit;

        assert_eq!(
            self.snapshot.text, self.raw_text,
            "snapshot text out of sync with raw text"
        );
        assert_eq!(
            self.snapshot.encoded_text, self.encoded_text,
            "snapshot encoded text out of sync"
        );
        assert_eq!(
            self.snapshot.chars_left,
            limit as i64 - char_len(&self.raw_text) as i64,
            "chars_left does not match text length"
        );

        let overflow_len = self.snapshot.overflow.as_deref().map_or(0, char_len);
        let within_len = char_len(&self.raw_text).saturating_sub(overflow_len);
        assert!(
            within_len <= limit,
            "within-limit part is {within_len} chars, limit is {limit}"
        );

        assert_eq!(
            crate::render::covered_text(&self.snapshot.segments),
            self.raw_text,
            "segments do not cover the text"
        );
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self) {}
}

impl Default for TextBoxModel {
    fn default() -> Self {
        Self::new(TextBoxConfig::default())
    }
}
