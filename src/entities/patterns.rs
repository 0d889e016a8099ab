//! Recognition rules for each entity kind
//!
//! Every kind is one regex for the body plus context checks on the chars
//! around the match. The regex engine has no look-around, so the checks
//! that would normally live in look-behind/look-ahead are done here.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::Entity;

/// A match that passed its own kind's rules but has not yet been checked
/// for overlap against other kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Candidate {
    pub entity: Entity,
    pub bytes: Range<usize>,
}

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[#＃]([\p{L}\p{M}\p{N}_]+)").expect("hashtag pattern is valid")
});

/// A hashtag body needs at least one of these
static HASHTAG_LETTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{M}]").expect("hashtag letter pattern is valid"));

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[@＠]([A-Za-z0-9_]{1,20})").expect("mention pattern is valid")
});

static CASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([A-Za-z]{1,6}(?:[._][A-Za-z]{1,2})?)").expect("cashtag pattern is valid")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(https?://)?(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+(\p{L}{2,63})(?::[0-9]{1,5})?(?:[/?#][^\s<>"]*)?"#,
    )
    .expect("url pattern is valid")
});

/// TLDs accepted for URLs written without a scheme
const BARE_TLDS: &[&str] = &[
    "ai", "app", "au", "biz", "br", "ca", "ch", "co", "com", "de", "dev", "edu", "es", "eu",
    "fr", "gg", "gov", "in", "info", "io", "it", "jp", "ly", "me", "mil", "net", "nl", "no",
    "org", "ru", "se", "tv", "uk", "us", "xyz",
];

fn char_before(text: &str, byte: usize) -> Option<char> {
    text[..byte].chars().next_back()
}

fn char_after(text: &str, byte: usize) -> Option<char> {
    text[byte..].chars().next()
}

/// Latin-1 accented letters; a mention running into one is not a mention
fn is_latin_accent(ch: char) -> bool {
    matches!(ch, '\u{00C0}'..='\u{00D6}' | '\u{00D8}'..='\u{00F6}' | '\u{00F8}'..='\u{00FF}')
}

pub(super) fn hashtags(text: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for caps in HASHTAG_RE.captures_iter(text) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let blocked_before = char_before(text, whole.start())
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | '&' | '#' | '＃'));
        if blocked_before {
            continue;
        }

        // #2024 and #_ are not tags
        if !HASHTAG_LETTER_RE.is_match(body.as_str()) {
            continue;
        }

        let rest = &text[whole.end()..];
        if rest.starts_with(['#', '＃']) || rest.starts_with("://") {
            continue;
        }

        found.push(Candidate {
            entity: Entity::Hashtag(body.as_str().to_string()),
            bytes: whole.range(),
        });
    }

    found
}

pub(super) fn mentions(text: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for caps in MENTION_RE.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let blocked_before = char_before(text, whole.start()).is_some_and(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '!' | '@' | '＠' | '#' | '＃' | '$' | '%' | '&' | '*')
        });
        if blocked_before {
            continue;
        }

        let rest = &text[whole.end()..];
        let blocked_after = rest.starts_with("://")
            || char_after(text, whole.end())
                .is_some_and(|c| matches!(c, '@' | '＠') || is_latin_accent(c));
        if blocked_after {
            continue;
        }

        found.push(Candidate {
            entity: Entity::Mention(name.as_str().to_string()),
            bytes: whole.range(),
        });
    }

    found
}

pub(super) fn cashtags(text: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for caps in CASHTAG_RE.captures_iter(text) {
        let (Some(whole), Some(symbol)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if char_before(text, whole.start()).is_some_and(|c| !c.is_whitespace()) {
            continue;
        }
        if char_after(text, whole.end())
            .is_some_and(|c| !(c.is_whitespace() || c.is_ascii_punctuation()))
        {
            continue;
        }

        found.push(Candidate {
            entity: Entity::Cashtag(symbol.as_str().to_string()),
            bytes: whole.range(),
        });
    }

    found
}

pub(super) fn urls(text: &str) -> Vec<Candidate> {
    let mut found = Vec::new();

    for caps in URL_RE.captures_iter(text) {
        let (Some(whole), Some(tld)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let has_scheme = caps.get(1).is_some();

        let blocked_before = char_before(text, whole.start()).is_some_and(|c| {
            c.is_alphanumeric() || matches!(c, '@' | '＠' | '$' | '#' | '＃' | '_')
        });
        if blocked_before {
            continue;
        }

        // host label continues past what the pattern accepted
        if char_after(text, whole.end()).is_some_and(|c| c.is_alphanumeric() || matches!(c, '-' | '_')) {
            continue;
        }

        if !has_scheme && !BARE_TLDS.contains(&tld.as_str().to_ascii_lowercase().as_str()) {
            continue;
        }

        let url = trim_url_end(whole.as_str());
        found.push(Candidate {
            entity: Entity::Url(url.to_string()),
            bytes: whole.start()..whole.start() + url.len(),
        });
    }

    found
}

/// Drop trailing sentence punctuation and unbalanced closing brackets
fn trim_url_end(url: &str) -> &str {
    let mut end = url;
    loop {
        let Some(last) = end.chars().next_back() else {
            return end;
        };
        let strip = match last {
            '.' | ',' | ':' | ';' | '!' | '?' | '\'' | '"' => true,
            ')' => end.matches('(').count() < end.matches(')').count(),
            ']' => end.matches('[').count() < end.matches(']').count(),
            _ => false,
        };
        if !strip {
            return end;
        }
        end = &end[..end.len() - last.len_utf8()];
    }
}
