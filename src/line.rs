//! Line classification helpers.
//!
//! NDF is line oriented: every physical line is classified by its
//! indentation width and by whether it carries content at all. Blank lines
//! and lines whose first visible character is `#` are never content.

use crate::options::{SplitMode, COMMENT_MARKER};

/// Number of leading whitespace characters. Tabs count as one unit, like spaces.
pub(crate) fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// `false` for blank lines and full-line comments.
pub(crate) fn is_content(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER)
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Cuts the line at the first comment marker.
///
/// In [`SplitMode::Flat`] any `#` starts a comment, even inside quotes.
pub(crate) fn strip_inline_comment(line: &str, mode: SplitMode) -> &str {
    match mode {
        SplitMode::Flat => match line.find(COMMENT_MARKER) {
            Some(idx) => &line[..idx],
            None => line,
        },
        SplitMode::QuoteAware => {
            let mut quotes = QuoteState::default();
            for (idx, ch) in line.char_indices() {
                if !quotes.feed(ch) && ch == COMMENT_MARKER {
                    return &line[..idx];
                }
            }
            line
        }
    }
}

/// Drops the first `columns` characters; lines that short become empty.
pub(crate) fn strip_columns(line: &str, columns: usize) -> &str {
    match line.char_indices().nth(columns) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

/// Splits `key: value` at the first colon, trimming both halves.
pub(crate) fn split_key_value(content: &str) -> Option<(&str, &str)> {
    content
        .split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Text of a `- item` line, or `Some("")` for a bare `-`.
pub(crate) fn list_item_text(content: &str) -> Option<&str> {
    if content == "-" {
        Some("")
    } else {
        content.strip_prefix("- ").map(str::trim)
    }
}

/// Tracks whether a character stream is inside a quoted region.
///
/// A quote only opens at the start of a token, so apostrophes inside words
/// (`don't`) are plain text.
#[derive(Debug, Default)]
pub(crate) struct QuoteState {
    open: Option<char>,
    prev: Option<char>,
}

impl QuoteState {
    /// Feeds one character; returns `true` if it belongs to a quoted region,
    /// delimiters included.
    pub(crate) fn feed(&mut self, ch: char) -> bool {
        let quoted = match self.open {
            Some(quote) => {
                if ch == quote {
                    self.open = None;
                }
                true
            }
            None if (ch == '"' || ch == '\'') && self.prev.map_or(true, opens_token) => {
                self.open = Some(ch);
                true
            }
            None => false,
        };
        self.prev = Some(ch);
        quoted
    }
}

fn opens_token(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, ',' | ':' | '[' | '{')
}
