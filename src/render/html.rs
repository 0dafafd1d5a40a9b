//! HTML Output
//!
//! Writes fragments as inline-styled `<span>` elements. Each visible character
//! gets its own span; whitespace is written bare.

use crate::core::{Fragment, LegacyColor, StyleSet};

/// Rough span size used to pre-size the output buffer
const SPAN_OVERHEAD: usize = 48;

/// Appendable HTML builder for fragments
#[derive(Debug, Default)]
pub struct HtmlWriter {
    buf: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer sized for roughly `chars` fragments
    pub fn with_capacity(chars: usize) -> Self {
        Self {
            buf: String::with_capacity(chars.saturating_mul(SPAN_OVERHEAD)),
        }
    }

    /// Append one fragment
    pub fn push(&mut self, fragment: &Fragment) {
        match fragment {
            Fragment::Styled { ch, color, styles } => self.push_styled(*ch, *color, styles),
            Fragment::Whitespace { ch } => self.buf.push(*ch),
        }
    }

    /// Append raw, already-safe markup
    pub fn push_raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    fn push_styled(&mut self, ch: char, color: LegacyColor, styles: &StyleSet) {
        self.buf.push_str("<span style=\"color:");
        self.buf.push_str(color.hex());
        self.buf.push(';');
        for (i, style) in styles.iter().enumerate() {
            if i > 0 {
                self.buf.push(';');
            }
            self.buf.push_str(style.css());
        }
        self.buf.push_str("\">");
        push_escaped(&mut self.buf, ch);
        self.buf.push_str("</span>");
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl<'a> Extend<&'a Fragment> for HtmlWriter {
    fn extend<I: IntoIterator<Item = &'a Fragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}

impl Extend<Fragment> for HtmlWriter {
    fn extend<I: IntoIterator<Item = Fragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(&fragment);
        }
    }
}

/// Escape the markup delimiters `<` and `>`; other characters pass through.
fn push_escaped(buf: &mut String, ch: char) {
    match ch {
        '<' => buf.push_str("&lt;"),
        '>' => buf.push_str("&gt;"),
        _ => buf.push(ch),
    }
}

/// Escape `<` and `>` in arbitrary text
pub fn escape_text(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut buf, ch);
    }
    buf
}
