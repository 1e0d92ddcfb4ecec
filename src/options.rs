//! Configuration options for NDF parsing.
//!
//! - [`ParseOptions`]: main configuration struct
//! - [`SplitMode`]: how commas and `#` are treated inside values
//!
//! The renderer takes no options: its two-space indent step is fixed.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ndf::{parse_with_options, ParseOptions, SplitMode, Value};
//!
//! let text = r#"title: "Hello, world""#;
//!
//! // Flat splitting breaks the quoted string apart
//! let flat = parse_with_options(text, &ParseOptions::new());
//! assert!(flat.get("title").map_or(false, |v| v.is_list()));
//!
//! // Quote-aware splitting keeps it whole
//! let options = ParseOptions::new().with_split_mode(SplitMode::QuoteAware);
//! let aware = parse_with_options(text, &options);
//! assert_eq!(aware.get("title"), Some(&Value::from("Hello, world")));
//! ```

/// Canonical indentation step, in characters.
pub const INDENT_STEP: usize = 2;

/// Comment marker, line-prefix or inline.
pub const COMMENT_MARKER: char = '#';

/// Right-hand side that opens a multi-line text block.
pub const MULTILINE_MARKER: &str = "|";

/// How value text is split on commas and scanned for comments.
///
/// - **Flat**: default; matches existing documents. Commas split even inside
///   quotes or nested inline objects, and the first `#` always starts a comment.
/// - **QuoteAware**: opt-in; quoted regions and bracketed groups are opaque to
///   both comma splitting and comment stripping.
///
/// # Examples
///
/// ```rust
/// use serde_ndf::SplitMode;
///
/// assert_eq!(SplitMode::default(), SplitMode::Flat);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SplitMode {
    #[default]
    Flat,
    QuoteAware,
}

impl SplitMode {
    #[must_use]
    pub const fn is_quote_aware(self) -> bool {
        matches!(self, SplitMode::QuoteAware)
    }
}

/// Configuration options for NDF parsing.
///
/// # Examples
///
/// ```rust
/// use serde_ndf::{ParseOptions, SplitMode};
///
/// let options = ParseOptions::new();
/// assert_eq!(options.split_mode, SplitMode::Flat);
///
/// let strict = ParseOptions::new().with_split_mode(SplitMode::QuoteAware);
/// assert!(strict.split_mode.is_quote_aware());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    pub split_mode: SplitMode,
}

impl ParseOptions {
    /// Creates default options (flat splitting).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the split mode.
    #[must_use]
    pub fn with_split_mode(mut self, split_mode: SplitMode) -> Self {
        self.split_mode = split_mode;
        self
    }
}
