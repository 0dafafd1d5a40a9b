//! Text Styles
//!
//! Style directives selected by the codes `k`, `l`, `m`, `n` and `o`, and the
//! ordered set of styles active while scanning a line.

use serde::{Deserialize, Serialize};

/// A single style directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// `k` - scrambled text, rendered as a CSS animation
    Obfuscated,
    /// `l`
    Bold,
    /// `m`
    Strikethrough,
    /// `n`
    Underline,
    /// `o`
    Italic,
}

impl TextStyle {
    /// Look up a style by its code character. Case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'k' => Some(TextStyle::Obfuscated),
            'l' => Some(TextStyle::Bold),
            'm' => Some(TextStyle::Strikethrough),
            'n' => Some(TextStyle::Underline),
            'o' => Some(TextStyle::Italic),
            _ => None,
        }
    }

    /// The lowercase code character selecting this style
    pub fn code(self) -> char {
        match self {
            TextStyle::Obfuscated => 'k',
            TextStyle::Bold => 'l',
            TextStyle::Strikethrough => 'm',
            TextStyle::Underline => 'n',
            TextStyle::Italic => 'o',
        }
    }

    /// CSS declaration applied to styled fragments
    pub fn css(self) -> &'static str {
        match self {
            TextStyle::Obfuscated => "animation: obfuscate 0.1s infinite",
            TextStyle::Bold => "font-weight: bold",
            TextStyle::Strikethrough => "text-decoration: line-through",
            TextStyle::Underline => "text-decoration: underline",
            TextStyle::Italic => "font-style: italic",
        }
    }
}

/// Active styles in the order their codes were seen.
///
/// Repeated codes are kept, so `§l§l` yields two bold entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSet(Vec<TextStyle>);

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, style: TextStyle) {
        self.0.push(style);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, style: TextStyle) -> bool {
        self.0.contains(&style)
    }

    pub fn iter(&self) -> impl Iterator<Item = TextStyle> + '_ {
        self.0.iter().copied()
    }

    /// Declarations joined with `;`, empty when no style is active
    pub fn css(&self) -> String {
        self.iter().map(TextStyle::css).collect::<Vec<_>>().join(";")
    }
}

impl FromIterator<TextStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = TextStyle>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
