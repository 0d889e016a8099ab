//! Utility modules

pub mod text;

pub use text::{char_len, char_prefix, char_to_byte, encode_uri_component, split_at_char, CharCursor};
