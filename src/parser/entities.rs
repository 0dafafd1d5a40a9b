//! Entity Decoding
//!
//! Replaces the handful of named and numeric entities that status APIs use
//! to escape MOTD text. Runs once, before scanning, so a decoded `&` or `§`
//! can still start a control sequence but is never decoded again.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Entity-shaped substrings: `&name;` or `&#digits;` (ASCII only)
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[A-Za-z]+|#[0-9]+);").expect("entity pattern is valid")
});

/// The fixed entity table
const ENTITIES: [(&str, &str); 6] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&sect;", "§"),
];

/// Look up an entity. Matching is case-insensitive.
pub fn lookup_entity(entity: &str) -> Option<&'static str> {
    ENTITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(entity))
        .map(|&(_, value)| value)
}

/// Decode known entities in `text`, leaving unknown ones verbatim.
///
/// Borrows the input when nothing matched.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    ENTITY_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        let entity = &caps[0];
        lookup_entity(entity).unwrap_or(entity).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_entities() {
        assert_eq!(
            decode_entities("&lt;b&gt; &amp; &quot;x&quot; &#39;y&#39; &sect;c"),
            "<b> & \"x\" 'y' §c"
        );
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(decode_entities("&LT;&Gt;&SECT;"), "<>§");
    }

    #[test]
    fn test_unknown_entities_left_alone() {
        assert_eq!(decode_entities("&nbsp;&#160;&copy;"), "&nbsp;&#160;&copy;");
    }

    #[test]
    fn test_malformed_entities_left_alone() {
        assert_eq!(decode_entities("&lt &; &#x41; &#;"), "&lt &; &#x41; &#;");
    }

    #[test]
    fn test_single_pass() {
        // `&amp;lt;` decodes to `&lt;`, not to `<`
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_empty_and_plain_input_borrowed() {
        assert!(matches!(decode_entities(""), Cow::Borrowed("")));
        assert!(matches!(decode_entities("no entities"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_lookup_entity() {
        assert_eq!(lookup_entity("&sect;"), Some("§"));
        assert_eq!(lookup_entity("&AMP;"), Some("&"));
        assert_eq!(lookup_entity("&euro;"), None);
    }
}
