//! Scanner and Formatter State
//!
//! The scanner walks decoded text left to right and turns it into actions.
//! A marker (`§` or `&`) followed by any character is a control sequence and
//! consumes both characters; everything else is printed.
//!
//! The formatter owns the scan state (active color and styles) for a single
//! line and applies actions to it, producing one fragment per printed
//! character.
//!
//! # State
//!
//! - Color code: set color, clear styles
//! - Style code: append style
//! - Reset: default color, clear styles
//! - Unknown code: swallowed, state unchanged

use std::str::Chars;

use tracing::trace;

use super::actions::Action;
use super::entities::decode_entities;
use crate::core::{is_marker, is_whitespace, Fragment, LegacyColor, StyleSet};

/// Lazily scans text into actions
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    chars: Chars<'a>,
}

impl<'a> Scanner<'a> {
    /// Scan already-decoded text
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Action;

    fn next(&mut self) -> Option<Action> {
        let c = self.chars.next()?;
        if is_marker(c) {
            // A trailing marker has no code character and prints as content.
            if let Some(code) = self.chars.next() {
                let action = Action::from_code(code);
                if let Action::Ignore(code) = action {
                    trace!(marker = %c, code = %code, "swallowed unknown formatting code");
                }
                return Some(action);
            }
        }
        Some(Action::Print(c))
    }
}

/// Scan state for one formatting call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    color: LegacyColor,
    styles: StyleSet,
}

impl Formatter {
    /// Create a formatter in the initial state (white, no styles)
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active color
    pub fn color(&self) -> LegacyColor {
        self.color
    }

    /// Currently active styles
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Reset to the initial state
    pub fn reset(&mut self) {
        self.color = LegacyColor::DEFAULT;
        self.styles.clear();
    }

    /// Apply one action, returning the fragment it emits if any
    pub fn apply(&mut self, action: Action) -> Option<Fragment> {
        match action {
            Action::Print(ch) if is_whitespace(ch) => Some(Fragment::Whitespace { ch }),
            Action::Print(ch) => Some(Fragment::Styled {
                ch,
                color: self.color,
                styles: self.styles.clone(),
            }),
            Action::SetColor(color) => {
                self.color = color;
                self.styles.clear();
                None
            }
            Action::AddStyle(style) => {
                self.styles.push(style);
                None
            }
            Action::Reset => {
                self.reset();
                None
            }
            Action::Ignore(_) => None,
        }
    }

    /// Decode entities in `text`, then scan and format it from a fresh state.
    pub fn fragments(text: &str) -> Vec<Fragment> {
        let decoded = decode_entities(text);
        let mut formatter = Formatter::new();
        Scanner::new(&decoded)
            .filter_map(|action| formatter.apply(action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TextStyle;

    fn scan(text: &str) -> Vec<Action> {
        Scanner::new(text).collect()
    }

    #[test]
    fn test_scan_plain_text() {
        assert_eq!(scan("Hi"), vec![Action::Print('H'), Action::Print('i')]);
    }

    #[test]
    fn test_scan_both_markers() {
        assert_eq!(
            scan("§c&lx"),
            vec![
                Action::SetColor(LegacyColor::Red),
                Action::AddStyle(TextStyle::Bold),
                Action::Print('x'),
            ]
        );
    }

    #[test]
    fn test_scan_trailing_marker_is_content() {
        assert_eq!(scan("a§"), vec![Action::Print('a'), Action::Print('§')]);
        assert_eq!(scan("&"), vec![Action::Print('&')]);
    }

    #[test]
    fn test_scan_marker_consumes_marker() {
        // The second marker is the code character of the first sequence.
        assert_eq!(scan("§§c"), vec![Action::Ignore('§'), Action::Print('c')]);
    }

    #[test]
    fn test_scan_marker_swallows_whitespace_code() {
        assert_eq!(scan("& b"), vec![Action::Ignore(' '), Action::Print('b')]);
    }

    #[test]
    fn test_scan_non_ascii_content() {
        assert_eq!(
            scan("§6У"),
            vec![Action::SetColor(LegacyColor::Gold), Action::Print('У')]
        );
    }

    #[test]
    fn test_formatter_color_clears_styles() {
        let mut f = Formatter::new();
        f.apply(Action::AddStyle(TextStyle::Bold));
        f.apply(Action::SetColor(LegacyColor::Aqua));
        assert_eq!(f.color(), LegacyColor::Aqua);
        assert!(f.styles().is_empty());
    }

    #[test]
    fn test_formatter_style_keeps_color() {
        let mut f = Formatter::new();
        f.apply(Action::SetColor(LegacyColor::Gold));
        f.apply(Action::AddStyle(TextStyle::Italic));
        f.apply(Action::AddStyle(TextStyle::Underline));
        assert_eq!(f.color(), LegacyColor::Gold);
        assert_eq!(
            f.styles().iter().collect::<Vec<_>>(),
            vec![TextStyle::Italic, TextStyle::Underline]
        );
    }

    #[test]
    fn test_formatter_reset() {
        let mut f = Formatter::new();
        f.apply(Action::SetColor(LegacyColor::Blue));
        f.apply(Action::AddStyle(TextStyle::Strikethrough));
        assert_eq!(f.apply(Action::Reset), None);
        assert_eq!(f, Formatter::new());
    }

    #[test]
    fn test_formatter_ignore_keeps_state() {
        let mut f = Formatter::new();
        f.apply(Action::SetColor(LegacyColor::Red));
        f.apply(Action::AddStyle(TextStyle::Bold));
        let before = f.clone();
        assert_eq!(f.apply(Action::Ignore('z')), None);
        assert_eq!(f, before);
    }

    #[test]
    fn test_formatter_whitespace_unstyled() {
        let mut f = Formatter::new();
        f.apply(Action::SetColor(LegacyColor::Red));
        assert_eq!(
            f.apply(Action::Print(' ')),
            Some(Fragment::Whitespace { ch: ' ' })
        );
    }

    #[test]
    fn test_fragments_decode_before_scan() {
        let frags = Formatter::fragments("&sect;cA");
        assert_eq!(
            frags,
            vec![Fragment::Styled {
                ch: 'A',
                color: LegacyColor::Red,
                styles: StyleSet::new(),
            }]
        );
    }

    #[test]
    fn test_fragments_fresh_state_per_call() {
        let first = Formatter::fragments("§c§lA");
        assert_eq!(first[0].color(), Some(LegacyColor::Red));
        let second = Formatter::fragments("B");
        assert_eq!(second, vec![Fragment::plain('B')]);
    }
}
