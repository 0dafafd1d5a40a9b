//! Scanner Actions
//!
//! Semantic operations produced by the scanner that are applied to the scan
//! state by the formatter.

use serde::{Deserialize, Serialize};

use crate::core::{LegacyColor, TextStyle};

/// A formatting action produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Content character, visible or whitespace
    Print(char),

    /// Color code: set the active color and drop all styles
    SetColor(LegacyColor),

    /// Style code: add a style, keeping the color and earlier styles
    AddStyle(TextStyle),

    /// `r`: back to the default color with no styles
    Reset,

    /// Control sequence with an unknown code character. Consumed, no effect.
    Ignore(char),
}

impl Action {
    /// Decode the code character following a marker
    pub fn from_code(code: char) -> Self {
        let code = lowercase(code);
        if let Some(color) = LegacyColor::from_code(code) {
            Action::SetColor(color)
        } else if let Some(style) = TextStyle::from_code(code) {
            Action::AddStyle(style)
        } else if code == crate::core::RESET_CODE {
            Action::Reset
        } else {
            Action::Ignore(code)
        }
    }

    /// Whether this action came from a control sequence
    pub fn is_control(&self) -> bool {
        !matches!(self, Action::Print(_))
    }
}

/// Full Unicode lowercase when it maps to a single character
fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
