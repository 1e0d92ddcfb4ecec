//! # serde_ndf
//!
//! A reader and writer for NDF (Note Data Format), with a Serde bridge.
//!
//! ## What is NDF?
//!
//! NDF is an indentation-structured, line-oriented notation for human-edited
//! notes and settings. It reads like a loose YAML subset: `key: value` lines,
//! nested blocks, `|` text blocks, inline `[lists]` and `{maps}`, and
//! comma-separated implicit lists.
//!
//! ```text
//! # Weekly review
//! title: Planning
//! tags: work, weekly
//! owner:
//!   name: ada
//!   active: yes
//! notes: |
//!   Ship the parser.
//!
//!   Then write the docs.
//! ```
//!
//! See [`grammar`] for the complete rules.
//!
//! ## Key Features
//!
//! - **Permissive**: malformed lines are skipped rather than rejected
//! - **Order-Preserving**: maps keep document order, compare without it
//! - **Serde Compatible**: `#[derive(Serialize, Deserialize)]` types read and
//!   write NDF directly
//! - **Two Split Modes**: legacy flat comma splitting by default, opt-in
//!   quote-aware splitting
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_ndf::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Task {
//!     id: u32,
//!     done: bool,
//!     labels: Vec<String>,
//! }
//!
//! let task = Task {
//!     id: 7,
//!     done: false,
//!     labels: vec!["home".to_string(), "errand".to_string()],
//! };
//!
//! let text = to_string(&task).unwrap();
//! assert_eq!(text, "id: 7\ndone: false\nlabels: home, errand");
//!
//! let back: Task = from_str(&text).unwrap();
//! assert_eq!(task, back);
//! ```
//!
//! ### Dynamic Documents
//!
//! ```rust
//! use serde_ndf::{parse, to_text, Value};
//!
//! let doc = parse("a: 5 # five\nlist: [[1,2],[3,4]]\nflag: YES");
//! assert_eq!(doc.get("a").and_then(|v| v.as_i64()), Some(5));
//! assert_eq!(doc.get("flag"), Some(&Value::Bool(true)));
//!
//! let text = to_text(&doc).unwrap();
//! assert_eq!(parse(&text), doc);
//! ```
//!
//! ## Logging
//!
//! Tolerated anomalies (skipped lines, duplicate keys) are reported as
//! `tracing` events at `trace` and `debug` level. Nothing is printed unless
//! the application installs a subscriber.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - derive types to and from NDF text
//! - **`dynamic_values.rs`** - building and walking `Value` trees
//! - **`split_modes.rs`** - flat versus quote-aware splitting
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod grammar;
mod inline;
mod line;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use map::NdfMap;
pub use options::{ParseOptions, SplitMode};
pub use parser::Parser;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// A parsed NDF document: the root ordered map.
pub type Document = NdfMap;

/// Parses NDF text with default options.
///
/// Parsing never fails. Lines without `:` and misplaced indentation are
/// skipped; see [`grammar`] for the rules.
///
/// # Examples
///
/// ```rust
/// use serde_ndf::{parse, Value};
///
/// let doc = parse("a: 1\na: 2\nnot a pair");
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.get("a"), Some(&Value::from(2)));
/// ```
#[must_use]
pub fn parse(text: &str) -> Document {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses NDF text with the given options.
#[must_use]
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Document {
    Parser::new(options.clone()).parse(text)
}

/// Parses NDF text from raw bytes.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the bytes are not valid UTF-8.
pub fn from_slice(bytes: &[u8]) -> Result<Document> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse(text))
}

/// Reads a whole stream and parses it.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Encoding`] if the
/// stream is not valid UTF-8.
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

/// Renders a document with its top-level keys at `base_indent_level`.
///
/// Each level is two spaces. The output has no trailing newline.
///
/// # Examples
///
/// ```rust
/// use serde_ndf::{ndf, serialize};
///
/// let value = ndf!({ "outer": { "inner": 1 } });
/// let doc = value.as_map().unwrap();
///
/// assert_eq!(serialize(doc, 0).unwrap(), "outer:\n  inner: 1");
/// assert_eq!(serialize(doc, 1).unwrap(), "  outer:\n    inner: 1");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] if the document holds a shape the
/// text grammar cannot express, such as a map inside an inline array.
pub fn serialize(doc: &Document, base_indent_level: usize) -> Result<String> {
    ser::render(doc, base_indent_level)
}

/// Renders a document at indent level 0.
///
/// # Errors
///
/// See [`serialize`].
pub fn to_text(doc: &Document) -> Result<String> {
    serialize(doc, 0)
}

/// Renders a document into a writer.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    let text = to_text(doc)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Reads and parses an NDF file.
///
/// # Errors
///
/// Returns the file system's error unchanged as [`Error::Io`], or
/// [`Error::Encoding`] if the file is not UTF-8.
pub fn load_from_path<P>(path: P) -> Result<Document>
where
    P: AsRef<Path>,
{
    let bytes = fs::read(path)?;
    from_slice(&bytes)
}

/// Renders a document and writes it to a file, replacing any previous
/// content.
///
/// The file is not touched if rendering fails.
///
/// # Errors
///
/// Returns a rendering error, or the file system's error as [`Error::Io`].
pub fn save_to_path<P>(doc: &Document, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let text = to_text(doc)?;
    fs::write(path, text)?;
    Ok(())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_ndf::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_map());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Errors
///
/// Returns an error if the value cannot be coerced into `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Serialize any `T: Serialize` to NDF text.
///
/// `T` must serialize to a map (a struct, a map type, or a [`Document`]).
///
/// # Errors
///
/// Returns [`Error::UnsupportedValue`] if `T` does not serialize to a map or
/// holds a shape the text grammar cannot express.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        Value::Map(doc) => to_text(&doc),
        other => Err(Error::UnsupportedValue(format!(
            "document root must be a map, found {}",
            other.type_name()
        ))),
    }
}

/// Deserialize an instance of type `T` from NDF text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_ndf::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the parsed document cannot be deserialized to `T`.
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(Value::Map(parse(text)))
}
