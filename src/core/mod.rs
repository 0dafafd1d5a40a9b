//! Formatting Core Module
//!
//! The fixed code tables and the data produced by formatting:
//! - Legacy 16-color palette
//! - Style directives and the ordered set of active styles
//! - Output fragments
//!
//! Everything here is immutable table data or plain values; scan state lives
//! in the parser and never outlives a single call.

mod color;
mod fragment;
mod style;

pub use color::LegacyColor;
pub use fragment::{is_whitespace, Fragment};
pub use style::{StyleSet, TextStyle};

/// Characters that introduce a control sequence
pub const MARKERS: [char; 2] = ['§', '&'];

/// Code character that restores the default color and clears all styles
pub const RESET_CODE: char = 'r';

/// Check whether `c` introduces a control sequence
pub fn is_marker(c: char) -> bool {
    MARKERS.contains(&c)
}
