//! Utility functions for char-indexed text
//!
//! Limits and entity indices are counted in chars (Unicode scalar values),
//! while Rust strings are sliced by byte. These helpers bridge the two.

/// Number of chars in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the char at `char_idx`, clamped to `text.len()`
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Split `text` after its first `char_idx` chars
///
/// If `text` is shorter than `char_idx`, the tail is empty.
pub fn split_at_char(text: &str, char_idx: usize) -> (&str, &str) {
    text.split_at(char_to_byte(text, char_idx))
}

/// The first `max_chars` chars of `text`
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    split_at_char(text, max_chars).0
}

/// Incremental byte → char index conversion for ascending offsets.
///
/// Entity matching yields byte ranges in order; walking the text once
/// avoids recounting from the start for every span.
#[derive(Debug)]
pub struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// Char index of `byte`. Offsets must be non-decreasing between calls
    /// and fall on char boundaries.
    pub fn char_index(&mut self, byte: usize) -> usize {
        debug_assert!(byte >= self.byte, "CharCursor offsets must ascend");
        debug_assert!(self.text.is_char_boundary(byte));
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Characters left untouched by `encodeURIComponent`
fn is_uri_unreserved(byte: u8) -> bool {
    matches!(
        byte,
        b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')'
    )
}

/// Percent-encode a URI component (same escaping set as `encodeURIComponent`)
pub fn encode_uri_component(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        if is_uri_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    out
}
