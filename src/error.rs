//! Error types for NDF parsing, rendering and the serde bridge.
//!
//! Structural oddities in NDF text (lines without a `:`, out-of-place
//! indentation, repeated keys) are never errors: the parser tolerates them.
//! What remains fallible is narrow:
//!
//! - **I/O**: file access failures, carried unchanged
//! - **Encoding**: input bytes that are not UTF-8
//! - **Unsupported values**: shapes the text grammar cannot express
//! - **Type mismatches**: the serde bridge could not coerce a value
//!
//! ## Examples
//!
//! ```rust
//! use serde_ndf::{from_slice, Error};
//!
//! let result = from_slice(&[0x66, 0xff, 0x3a]);
//! assert!(matches!(result, Err(Error::Encoding(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every failure the engine can report.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the file-access layer, passed through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Input bytes could not be decoded as UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The value tree holds a shape NDF text cannot represent.
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Type mismatch in the serde bridge
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported value error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ndf::Error;
    ///
    /// let err = Error::unsupported_value("map inside an inline array");
    /// assert!(err.to_string().contains("inline array"));
    /// ```
    pub fn unsupported_value(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_ndf::Error;
    ///
    /// let err = Error::type_mismatch("integer", "list");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
