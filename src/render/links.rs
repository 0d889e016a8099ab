//! Link targets and accessible labels for highlighted entities

use crate::entities::Entity;
use crate::util::encode_uri_component;

/// Builds hrefs for entities under a configurable base URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    base_url: String,
}

impl Links {
    /// `base_url` is used as-is except for a trailing `/`, which is dropped
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Link target for an entity; URLs link to themselves unmodified
    pub fn href(&self, entity: &Entity) -> String {
        match entity {
            Entity::Hashtag(tag) => {
                format!("{}/hashtag/{}", self.base_url, encode_uri_component(tag))
            }
            Entity::Mention(name) => format!("{}/{}", self.base_url, encode_uri_component(name)),
            Entity::Cashtag(symbol) => {
                format!("{}/search?q={}", self.base_url, encode_uri_component(symbol))
            }
            Entity::Url(url) => url.clone(),
        }
    }

    /// Accessible description of what following the link does
    pub fn label(entity: &Entity) -> String {
        match entity {
            Entity::Hashtag(tag) => format!("Search for hashtag {tag}"),
            Entity::Mention(name) => format!("View profile for {name}"),
            Entity::Cashtag(symbol) => format!("Search for cashtag {symbol}"),
            Entity::Url(url) => format!("Open link {url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs_with_base() {
        let links = Links::new("https://x.com/");
        assert_eq!(
            links.href(&Entity::Hashtag("café".into())),
            "https://x.com/hashtag/caf%C3%A9"
        );
        assert_eq!(links.href(&Entity::Mention("alice".into())), "https://x.com/alice");
        assert_eq!(
            links.href(&Entity::Cashtag("BRK.B".into())),
            "https://x.com/search?q=BRK.B"
        );
        assert_eq!(
            links.href(&Entity::Url("https://example.com/a?b=c".into())),
            "https://example.com/a?b=c"
        );
    }

    #[test]
    fn test_hrefs_default_base_is_relative() {
        let links = Links::default();
        assert_eq!(links.href(&Entity::Hashtag("rust".into())), "/hashtag/rust");
        assert_eq!(links.href(&Entity::Mention("bob".into())), "/bob");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Links::label(&Entity::Hashtag("rust".into())), "Search for hashtag rust");
        assert_eq!(Links::label(&Entity::Mention("bob".into())), "View profile for bob");
        assert_eq!(Links::label(&Entity::Cashtag("ABC".into())), "Search for cashtag ABC");
        assert_eq!(Links::label(&Entity::Url("a.com".into())), "Open link a.com");
    }
}
