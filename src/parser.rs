//! NDF block parsing.
//!
//! This module turns NDF text into a [`Document`]. Parsing is a recursive
//! descent over the document's physical lines: each block is the run of
//! lines sharing one indentation width, and each call returns the map it
//! built together with the index of the first line it did not consume.
//!
//! ## Block Rules
//!
//! For a line at the block's indentation:
//!
//! - `key: value` parses `value` as an inline value
//! - `key: |` opens a multi-line text block
//! - `key:` opens a nested block (or a `- item` list), or is `null` when
//!   nothing deeper follows
//!
//! Malformed structure is tolerated rather than rejected. Lines without a
//! `:` and lines indented deeper than their block are skipped, and a repeated
//! key overwrites the earlier value.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ndf::{parse, Value};
//!
//! let text = "\
//! title: Weekly notes
//! meta:
//!   author: ada
//!   draft: yes
//! body: |
//!   First line.
//!
//!   Third line.
//! ";
//!
//! let doc = parse(text);
//! let meta = doc.get("meta").and_then(|v| v.as_map()).unwrap();
//! assert_eq!(meta.get("draft"), Some(&Value::Bool(true)));
//! assert_eq!(
//!     doc.get("body").and_then(|v| v.as_str()),
//!     Some("First line.\n\nThird line.")
//! );
//! ```

use crate::inline::parse_value;
use crate::line::{
    indent_width, is_blank, is_content, list_item_text, split_key_value, strip_columns,
    strip_inline_comment,
};
use crate::options::{ParseOptions, SplitMode, INDENT_STEP, MULTILINE_MARKER};
use crate::{Document, NdfMap, Value};
use tracing::{debug, trace};

/// A reusable NDF parser.
///
/// The parser holds only its options; every call to [`Parser::parse`] works
/// on its own line buffer, so one instance can serve any number of documents.
///
/// # Examples
///
/// ```rust
/// use serde_ndf::{ParseOptions, Parser, SplitMode};
///
/// let parser = Parser::new(ParseOptions::new().with_split_mode(SplitMode::QuoteAware));
/// let doc = parser.parse("city: \"Paris, France\"");
/// assert_eq!(doc.get("city").and_then(|v| v.as_str()), Some("Paris, France"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    #[must_use]
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a whole document. Never fails: structural oddities are skipped.
    #[must_use]
    pub fn parse(&self, text: &str) -> Document {
        let lines = LineBuffer::new(text, self.options.split_mode);
        let (document, _) = lines.parse_block(0, lines.len(), 0);
        debug!(
            lines = lines.len(),
            keys = document.len(),
            "parsed NDF document"
        );
        document
    }
}

/// The physical lines of one document plus the split mode in force.
///
/// Positions are plain indices into the buffer; every parse method takes a
/// `[start, end)` range and hands back the next unconsumed index.
struct LineBuffer<'a> {
    lines: Vec<&'a str>,
    mode: SplitMode,
}

impl<'a> LineBuffer<'a> {
    fn new(text: &'a str, mode: SplitMode) -> Self {
        LineBuffer {
            lines: text.lines().collect(),
            mode,
        }
    }

    fn len(&self) -> usize {
        self.lines.len()
    }

    /// Content of a line with its inline comment removed, trimmed.
    fn content(&self, pos: usize) -> &'a str {
        strip_inline_comment(self.lines[pos], self.mode).trim()
    }

    /// Parses `lines[start..end]` as a block whose keys sit at `indent`.
    ///
    /// Stops at the first content line indented less than `indent`, without
    /// consuming it.
    fn parse_block(&self, start: usize, end: usize, indent: usize) -> (NdfMap, usize) {
        let mut map = NdfMap::new();
        let mut pos = start;

        while pos < end {
            let line = self.lines[pos];
            if !is_content(line) {
                pos += 1;
                continue;
            }

            let width = indent_width(line);
            if width < indent {
                break;
            }
            if width > indent {
                trace!(line = pos + 1, width, indent, "skipping out-of-place line");
                pos += 1;
                continue;
            }

            let Some((key, value)) = split_key_value(self.content(pos)) else {
                trace!(line = pos + 1, "skipping line without ':'");
                pos += 1;
                continue;
            };

            let (parsed, next) = if value == MULTILINE_MARKER {
                let (text, next) = self.parse_multiline(pos, end, width);
                (Value::String(text), next)
            } else if value.is_empty() {
                self.parse_nested(pos, end, width)
            } else {
                (parse_value(value, self.mode), pos + 1)
            };

            if map.insert(key.to_string(), parsed).is_some() {
                debug!(line = pos + 1, key, "duplicate key overwrites earlier value");
            }
            pos = next;
        }

        (map, pos)
    }

    /// Collects the text block opened by `key: |` on line `pos`.
    ///
    /// Blank lines inside the block are kept; comments are not stripped. Each
    /// line loses exactly `indent + 2` leading characters.
    fn parse_multiline(&self, pos: usize, end: usize, indent: usize) -> (String, usize) {
        let mut collected = Vec::new();
        let mut next = pos + 1;

        while next < end {
            let line = self.lines[next];
            if !is_blank(line) && indent_width(line) <= indent {
                break;
            }
            collected.push(strip_columns(line, indent + INDENT_STEP));
            next += 1;
        }

        (collected.join("\n").trim_end().to_string(), next)
    }

    /// Parses whatever hangs below the `key:` (or bare `-`) on line `pos`.
    ///
    /// The run is every following line indented deeper than `indent`, with
    /// blank and comment lines passed over. An empty run is `null`. A run
    /// with `- item` lines at its outer level is a list; anything else is a
    /// map parsed at the run's outer indentation.
    fn parse_nested(&self, pos: usize, end: usize, indent: usize) -> (Value, usize) {
        let start = pos + 1;
        let mut next = start;
        let mut child_indent: Option<usize> = None;

        while next < end {
            let line = self.lines[next];
            if !is_content(line) {
                next += 1;
                continue;
            }
            let width = indent_width(line);
            if width <= indent {
                break;
            }
            child_indent = Some(child_indent.map_or(width, |w| w.min(width)));
            next += 1;
        }

        let Some(child_indent) = child_indent else {
            return (Value::Null, pos + 1);
        };

        if child_indent != indent + INDENT_STEP {
            trace!(
                line = start + 1,
                expected = indent + INDENT_STEP,
                found = child_indent,
                "nested block uses a non-canonical indent step"
            );
        }

        if self.has_list_items(start, next, child_indent) {
            (Value::List(self.parse_list(start, next, child_indent)), next)
        } else {
            let (map, _) = self.parse_block(start, next, child_indent);
            (Value::Map(map), next)
        }
    }

    fn is_list_item(&self, pos: usize) -> bool {
        list_item_text(self.content(pos)).is_some()
    }

    fn has_list_items(&self, start: usize, end: usize, indent: usize) -> bool {
        (start..end).any(|pos| {
            let line = self.lines[pos];
            is_content(line) && indent_width(line) == indent && self.is_list_item(pos)
        })
    }

    /// Parses a `- item` run.
    ///
    /// `- text` is an inline value; a bare `-` takes the deeper lines under
    /// it as its value. `key: value` lines between items group into one map
    /// element.
    fn parse_list(&self, start: usize, end: usize, indent: usize) -> Vec<Value> {
        let mut items = Vec::new();
        let mut pos = start;

        while pos < end {
            let line = self.lines[pos];
            if !is_content(line) {
                pos += 1;
                continue;
            }

            let width = indent_width(line);
            if width < indent {
                break;
            }
            if width > indent {
                trace!(line = pos + 1, width, indent, "skipping out-of-place list line");
                pos += 1;
                continue;
            }

            match list_item_text(self.content(pos)) {
                Some("") => {
                    let (value, next) = self.parse_nested(pos, end, width);
                    items.push(value);
                    pos = next;
                }
                Some(text) => {
                    items.push(parse_value(text, self.mode));
                    pos += 1;
                }
                None => {
                    let group_end = self.map_group_end(pos, end, indent);
                    let (map, _) = self.parse_block(pos, group_end, indent);
                    if map.is_empty() {
                        trace!(line = pos + 1, "skipping list lines without a key");
                    } else {
                        items.push(Value::Map(map));
                    }
                    pos = group_end;
                }
            }
        }

        items
    }

    /// First `- item` line at `indent` after `pos`, or `end`.
    fn map_group_end(&self, pos: usize, end: usize, indent: usize) -> usize {
        (pos + 1..end)
            .find(|&next| {
                let line = self.lines[next];
                is_content(line) && indent_width(line) <= indent && self.is_list_item(next)
            })
            .unwrap_or(end)
    }
}
