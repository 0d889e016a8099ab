//! Overflow codec tests - encode/decode properties over assorted inputs

use tagbox::overflow::{decode, encode, sync_text};
use tagbox::util::char_len;

const SAMPLES: &[&str] = &[
    "",
    "a",
    "hello world",
    "hello #world test",
    "multi\nline\ntext that keeps going",
    "emoji 🎉🎉🎉 and ümlauts",
    "   leading and trailing   ",
    "日本語のテキスト",
];

// ========================================================================
// Properties
// ========================================================================

#[test]
fn test_round_trip_reconstructs_input() {
    for text in SAMPLES {
        for limit in 0..=char_len(text) + 1 {
            let decoded = decode(&encode(text, limit));
            let rebuilt = decoded.visible + decoded.overflow.as_deref().unwrap_or("");
            assert_eq!(&rebuilt, text, "limit {}", limit);
        }
    }
}

#[test]
fn test_encode_is_idempotent() {
    for text in SAMPLES {
        for limit in [0, 1, 3, 8, 100] {
            let once = encode(text, limit);
            assert_eq!(encode(&once, limit), once, "{:?} at {}", text, limit);
        }
    }
}

#[test]
fn test_within_limit_never_exceeds_limit() {
    for text in SAMPLES {
        for limit in 0..=char_len(text) {
            let synced = sync_text(text, limit);
            assert!(char_len(&synced.within_limit) <= limit);
        }
    }
}

// ========================================================================
// Edge cases
// ========================================================================

#[test]
fn test_exact_limit_has_no_markers() {
    assert_eq!(encode("12345", 5), "12345");
}

#[test]
fn test_split_counts_chars_not_bytes() {
    assert_eq!(encode("ééé", 2), "éé<limit>é</limit>");
}

#[test]
fn test_pre_wrapped_value_passes_through() {
    let value = "ab<limit>cdef</limit>";
    assert_eq!(encode(value, 2), value);

    let decoded = decode(value);
    assert_eq!(decoded.visible, "ab");
    assert_eq!(decoded.overflow.as_deref(), Some("cdef"));
}

#[test]
fn test_hand_typed_markers_taken_at_face_value() {
    let synced = sync_text("ab <limit>cd</limit> ef", 4);
    assert_eq!(synced.encoded, "ab <limit>cd</limit> ef");
    assert_eq!(synced.overflow.as_deref(), Some("cd"));
    assert_eq!(synced.within_limit, "ab  ");
    assert_eq!(synced.visible, "ab  cd");
}
