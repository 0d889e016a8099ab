//! Overflow codec
//!
//! Text past the character limit is never discarded. Instead the suffix is
//! wrapped in a `<limit>…</limit>` marker pair so the display layer can style
//! it separately and the user can trim it back down.
//!
//! All lengths and split points are counted in chars.

use std::sync::LazyLock;

use regex::Regex;

use crate::util::{char_len, split_at_char};

/// Opening overflow marker
pub const OPEN_MARKER: &str = "<limit>";
/// Closing overflow marker
pub const CLOSE_MARKER: &str = "</limit>";

/// First marker construct, non-greedy, spanning newlines
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<limit>(.*?)</limit>").expect("overflow marker pattern is valid")
});

/// Result of [`decode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Text with the marker construct removed
    pub visible: String,
    /// Content captured between the markers, if a marker pair was found
    pub overflow: Option<String>,
}

/// Wrap the part of `value` beyond `limit` chars in overflow markers.
///
/// Text that fits is returned unchanged. Text that already contains both
/// markers is treated as encoded and passed through without re-validating
/// where the markers sit.
pub fn encode(value: &str, limit: usize) -> String {
    if char_len(value) <= limit {
        return value.to_string();
    }

    if is_encoded(value) {
        tracing::trace!(limit, "overflow markers already present, passing through");
        return value.to_string();
    }

    let (within, overflow) = split_at_char(value, limit);
    let mut encoded =
        String::with_capacity(value.len() + OPEN_MARKER.len() + CLOSE_MARKER.len());
    encoded.push_str(within);
    encoded.push_str(OPEN_MARKER);
    encoded.push_str(overflow);
    encoded.push_str(CLOSE_MARKER);
    encoded
}

/// Split encoded text into its visible part and the overflow content.
///
/// Only the first marker construct is recognized. Whitespace in front of the
/// opening marker belongs to the visible part.
pub fn decode(encoded: &str) -> Decoded {
    let marker = MARKER_RE
        .captures(encoded)
        .and_then(|caps| Some((caps.get(0)?, caps.get(1)?)));

    match marker {
        Some((whole, inner)) => {
            let mut visible = String::with_capacity(encoded.len() - whole.len());
            visible.push_str(&encoded[..whole.start()]);
            visible.push_str(&encoded[whole.end()..]);

            Decoded {
                visible,
                overflow: Some(inner.as_str().to_string()),
            }
        }
        None => Decoded {
            visible: encoded.to_string(),
            overflow: None,
        },
    }
}

/// Whether `value` carries both overflow markers
pub fn is_encoded(value: &str) -> bool {
    value.contains(OPEN_MARKER) && value.contains(CLOSE_MARKER)
}

/// Codec pass applied to every incoming value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedText {
    /// `encode(value, limit)`
    pub encoded: String,
    /// First `limit` chars of the decoded visible text
    pub within_limit: String,
    /// Decoded overflow content
    pub overflow: Option<String>,
    /// `within_limit` followed by the overflow content: the editable text
    pub visible: String,
}

/// Encode `value`, decode it again and rebuild the editable text.
pub fn sync_text(value: &str, limit: usize) -> SyncedText {
    let encoded = encode(value, limit);
    let Decoded { visible, overflow } = decode(&encoded);

    let (within, _) = split_at_char(&visible, limit);
    let within_limit = within.to_string();

    let mut visible = within_limit.clone();
    if let Some(ref overflow) = overflow {
        visible.push_str(overflow);
    }

    SyncedText {
        encoded,
        within_limit,
        overflow,
        visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(text: &str, limit: usize) -> String {
        let decoded = decode(&encode(text, limit));
        decoded.visible + decoded.overflow.as_deref().unwrap_or("")
    }

    #[test]
    fn test_encode_within_limit_unchanged() {
        assert_eq!(encode("hello", 5), "hello");
        assert_eq!(encode("hello", 480), "hello");
        assert_eq!(encode("", 0), "");
    }

    #[test]
    fn test_encode_wraps_suffix() {
        assert_eq!(encode("hello #world test", 10), "hello #wor<limit>ld test</limit>");
        assert_eq!(encode("abc", 0), "<limit>abc</limit>");
    }

    #[test]
    fn test_encode_counts_chars() {
        assert_eq!(encode("日本語です", 3), "日本語<limit>です</limit>");
    }

    #[test]
    fn test_encode_is_idempotent() {
        for (text, limit) in [("hello world", 4), ("abc", 0), ("short", 10), ("日本語です", 1)] {
            let once = encode(text, limit);
            assert_eq!(encode(&once, limit), once, "text={text:?} limit={limit}");
        }
    }

    #[test]
    fn test_encode_trusts_existing_markers() {
        // pre-marker part is shorter than the limit, still passed through
        let wrapped = "<limit>x</limit>";
        assert_eq!(encode(wrapped, 3), wrapped);
        let misplaced = "ab<limit>cdefgh</limit>";
        assert_eq!(encode(misplaced, 5), misplaced);
    }

    #[test]
    fn test_decode_without_markers() {
        let decoded = decode("plain text");
        assert_eq!(decoded.visible, "plain text");
        assert_eq!(decoded.overflow, None);
    }

    #[test]
    fn test_decode_extracts_first_marker_only() {
        let decoded = decode("a<limit>b</limit>c<limit>d</limit>");
        assert_eq!(decoded.visible, "ac<limit>d</limit>");
        assert_eq!(decoded.overflow.as_deref(), Some("b"));
    }

    #[test]
    fn test_decode_spans_newlines() {
        let decoded = decode("line<limit>one\ntwo</limit>");
        assert_eq!(decoded.visible, "line");
        assert_eq!(decoded.overflow.as_deref(), Some("one\ntwo"));
    }

    #[test]
    fn test_decode_keeps_whitespace_before_marker() {
        let decoded = decode("hello <limit>world</limit>");
        assert_eq!(decoded.visible, "hello ");
        assert_eq!(decoded.overflow.as_deref(), Some("world"));
    }

    #[test]
    fn test_decode_unclosed_marker_is_plain_text() {
        let decoded = decode("a<limit>b");
        assert_eq!(decoded.visible, "a<limit>b");
        assert_eq!(decoded.overflow, None);
    }

    #[test]
    fn test_round_trip() {
        for (text, limit) in [
            ("", 0),
            ("hello", 0),
            ("hello", 5),
            ("hello world ", 6),
            ("tab\tand\nnewline", 4),
            ("emoji 🎉🎉🎉 tail", 7),
        ] {
            assert_eq!(reconstruct(text, limit), text, "limit={limit}");
        }
    }

    #[test]
    fn test_sync_text_with_overflow() {
        let synced = sync_text("hello #world test", 10);
        assert_eq!(synced.encoded, "hello #wor<limit>ld test</limit>");
        assert_eq!(synced.within_limit, "hello #wor");
        assert_eq!(synced.overflow.as_deref(), Some("ld test"));
        assert_eq!(synced.visible, "hello #world test");
    }

    #[test]
    fn test_sync_text_prewrapped_paste() {
        let synced = sync_text("<limit>x</limit>", 3);
        assert_eq!(synced.encoded, "<limit>x</limit>");
        assert_eq!(synced.within_limit, "");
        assert_eq!(synced.overflow.as_deref(), Some("x"));
        assert_eq!(synced.visible, "x");
    }

    #[test]
    fn test_sync_text_fits() {
        let synced = sync_text("hi", 5);
        assert_eq!(synced.encoded, "hi");
        assert_eq!(synced.within_limit, "hi");
        assert_eq!(synced.overflow, None);
        assert_eq!(synced.visible, "hi");
    }
}
