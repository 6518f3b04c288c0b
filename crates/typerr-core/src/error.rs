//! Error types for decoding encoded records.

use thiserror::Error;

/// Errors that can occur while decoding an encoded record.
///
/// Encoding never fails, so there is no encode-side variant.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input does not start with a level tag (`error: ` / `info: `)
    /// followed by either a JSON object or `code=`.
    #[error("missing level tag or unrecognized record format")]
    MissingTag,

    /// A separator literal that may appear only once was seen again while
    /// scanning the delimited form. Values containing separator literals
    /// cannot be carried by that form.
    #[error("duplicate marker `{marker}` in delimited record")]
    DuplicateMarker { marker: &'static str },

    /// A status field in the delimited form is not an integer in range.
    #[error("invalid {field} value `{value}`")]
    InvalidStatus { field: &'static str, value: String },

    /// The structured payload was not valid JSON or did not match the
    /// record schema.
    #[error("malformed structured record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience alias used throughout typerr-core.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Returned when parsing a [`crate::WireFormat`] from an unknown name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown wire format `{0}` (expected `structured` or `delimited`)")]
pub struct UnknownFormat(pub String);
