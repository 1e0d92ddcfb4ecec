//! NDF Text Grammar
//!
//! This module documents the Note Data Format as read and written by this
//! library. It contains no code.
//!
//! # Overview
//!
//! NDF is an indentation-structured, line-oriented notation for human-edited
//! notes and settings. A document is an ordered map; every line is either a
//! `key: value` entry, part of a nested block, part of a multi-line text
//! block, or ignorable (blank or comment).
//!
//! # Lines
//!
//! - Indentation width is the count of leading whitespace characters. A tab
//!   counts as one, like a space.
//! - Blank lines and lines whose first visible character is `#` are never
//!   content.
//! - On a content line, everything from the first `#` on is a comment. This
//!   includes a `#` inside quotes unless [`SplitMode::QuoteAware`] is used.
//! - A line is split into key and value at its **first** `:`, so values may
//!   contain colons (`url: http://host`). A content line without `:` is
//!   skipped.
//!
//! # Blocks
//!
//! ```text
//! title: Plain value
//! owner:
//!   name: ada
//!   team: core
//! summary: |
//!   Free text, kept verbatim.
//!
//!   Blank lines survive; # is not a comment here.
//! empty:
//! ```
//!
//! **Rules**:
//! - `key: value` parses `value` as described under [Values](#values)
//! - `key: |` collects every following line that is blank or indented deeper
//!   than `key`. Each line loses `indent + 2` leading characters; the lines
//!   are joined with `\n` and trailing whitespace is trimmed
//! - `key:` followed by deeper lines is a nested map; followed by nothing
//!   deeper it is `null`
//! - A line indented deeper than its block, with no key above to own it, is
//!   skipped
//! - A repeated key overwrites the earlier value and keeps its position
//!
//! Nested blocks are parsed at the shallowest indentation found among their
//! lines, so documents indented in steps of four read the same as documents
//! indented in steps of two. The canonical step, used for all output, is two
//! spaces.
//!
//! ## Block Lists
//!
//! A nested block whose lines start with `- ` is a list:
//!
//! ```text
//! steps:
//!   - boil water
//!   - [2, 3]
//!   - null
//!   -
//!     tool: kettle
//!     watts: 2000
//! ```
//!
//! - `- text` is one element, parsed like an inline value
//! - a bare `-` takes the deeper lines below it as its element
//! - `key: value` lines between items group into one map element
//!
//! There is no YAML-style `- key: value` shorthand. The text after `- ` is an
//! inline value, so `- name: ada` is the implicit list `["name:", "ada"]`.
//! Write the map under a bare `-` instead:
//!
//! ```text
//! people:
//!   -
//!     name: ada
//! ```
//!
//! # Values
//!
//! | Shape | Example | Result |
//! |-------|---------|--------|
//! | Inline object | `{w: 2, h: 3}` | map of scalars, one level only |
//! | Inline array | `[[1, 2], [3]]` | list; nesting allowed |
//! | Implicit list | `red, green` or `red green` | list of scalars |
//! | Scalar | `42` | see below |
//!
//! A value is an implicit list when it contains a comma, or contains a space
//! and does not start with `"`. Items are split on commas and whitespace and
//! empty items are dropped.
//!
//! ## Scalars
//!
//! | Type | Literals |
//! |------|----------|
//! | String | `"quoted"` or `'quoted'`: the interior, verbatim, no escapes |
//! | Bool | `yes`, `true` / `no`, `false`, any letter case |
//! | Null | `null`, `none`, `-`, any letter case |
//! | Integer | optional sign and ASCII digits; beyond `i64` becomes a big integer |
//! | Float | anything Rust parses as `f64` that contains `.`, `e` or `E` |
//! | String | anything else, trimmed |
//!
//! # Output
//!
//! Rendering writes one entry per key in map order, two spaces per level:
//!
//! | Value | Rendered |
//! |-------|----------|
//! | `Map` | `key:` and the map one level deeper; empty as `key: {}` |
//! | `List` of scalars | `key: a, b`; one element as `key: [a]`; empty as `key: []` |
//! | other `List` | `key:` and a block list one level deeper |
//! | `String` with a line break | `key: \|` and each line one level deeper |
//! | empty `String` | `key: ""` |
//! | `Null` | bare `key:`; `- null` inside a block list |
//! | other scalar | `key: value`; floats always carry `.` or an exponent |
//!
//! # Limitations
//!
//! Strings are written verbatim. The grammar has no escapes, so text that
//! collides with its own punctuation does not survive a round trip:
//!
//! - a string with a comma or an inner space reads back as a list
//! - a string spelled like a literal (`yes`, `42`, `null`) reads back as that
//!   literal
//! - a string with leading or trailing whitespace is trimmed
//! - a `#` starts a comment
//!
//! A map cannot appear inside an inline array; rendering one is an
//! [`Error::UnsupportedValue`].
//!
//! [`SplitMode::QuoteAware`]: crate::SplitMode::QuoteAware
//! [`Error::UnsupportedValue`]: crate::Error::UnsupportedValue
