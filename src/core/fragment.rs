//! Output Fragment
//!
//! A single unit of formatted output: either one visible character with the
//! color and styles active when it was scanned, or a bare whitespace character.

use serde::{Deserialize, Serialize};

use super::color::LegacyColor;
use super::style::StyleSet;

/// One formatted character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fragment {
    /// Visible character wrapped with its styling
    Styled {
        ch: char,
        color: LegacyColor,
        styles: StyleSet,
    },
    /// Whitespace, emitted without a wrapper
    Whitespace { ch: char },
}

impl Fragment {
    /// Create a styled fragment with the default color and no styles
    pub fn plain(ch: char) -> Self {
        Fragment::Styled {
            ch,
            color: LegacyColor::DEFAULT,
            styles: StyleSet::default(),
        }
    }

    /// The character carried by this fragment
    pub fn ch(&self) -> char {
        match *self {
            Fragment::Styled { ch, .. } | Fragment::Whitespace { ch } => ch,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Fragment::Whitespace { .. })
    }

    /// Color of a styled fragment; `None` for whitespace
    pub fn color(&self) -> Option<LegacyColor> {
        match self {
            Fragment::Styled { color, .. } => Some(*color),
            Fragment::Whitespace { .. } => None,
        }
    }

    /// Styles of a styled fragment; `None` for whitespace
    pub fn styles(&self) -> Option<&StyleSet> {
        match self {
            Fragment::Styled { styles, .. } => Some(styles),
            Fragment::Whitespace { .. } => None,
        }
    }
}

/// Whitespace as understood by the renderer.
///
/// The set a browser's `String.prototype.trim` strips: the Unicode
/// `White_Space` property without NEL (U+0085), plus U+FEFF.
pub fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}
