//! Rendering entry points
//!
//! `format` is the whole formatting engine: decode entities, scan control
//! sequences, and write every fragment as HTML. It never fails.

mod html;

pub use html::{escape_text, HtmlWriter};

use crate::core::Fragment;
use crate::parser::{decode_entities, Action, Formatter, Scanner};

/// Render formatting codes in `text` as inline-styled HTML.
///
/// Empty input yields an empty string.
pub fn format(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let decoded = decode_entities(text);
    let mut formatter = Formatter::new();
    let mut writer = HtmlWriter::with_capacity(decoded.len());
    for action in Scanner::new(&decoded) {
        if let Some(fragment) = formatter.apply(action) {
            writer.push(&fragment);
        }
    }
    writer.finish()
}

/// `format` for input that may be absent. Absent stays absent.
pub fn format_opt(text: Option<&str>) -> Option<String> {
    text.map(format)
}

/// Decode entities and scan, returning the fragments instead of HTML
pub fn fragments(text: &str) -> Vec<Fragment> {
    Formatter::fragments(text)
}

/// The visible text of `text` with every control sequence removed.
///
/// Entities are decoded; nothing is escaped.
pub fn plain_text(text: &str) -> String {
    let decoded = decode_entities(text);
    Scanner::new(&decoded)
        .filter_map(|action| match action {
            Action::Print(ch) => Some(ch),
            _ => None,
        })
        .collect()
}
