//! Single-line string → record.
//!
//! [`decode`] reads the level tag, then picks the grammar from the next
//! character: `{` starts a structured (JSON) payload, `code=` starts the
//! delimited form.
//!
//! # Delimited grammar
//!
//! The delimited form is scanned left to right against a fixed set of
//! separator literals. Text between two separators belongs to the field
//! opened by the first of them, so a value is only assigned once the *next*
//! separator (or the end of input) is reached.
//!
//! The tag, `, message=`, `, httpStatus=` and `, rpcStatus=` may each occur
//! once; a repeat is rejected with [`DecodeError::DuplicateMarker`]. This
//! means a value that itself contains one of those literals cannot be
//! carried by the delimited form. `, info=` repeats once per info entry, so
//! an info value containing `, info=` is split in two. Use the structured
//! form when values are arbitrary text.
//!
//! # Example
//! ```
//! use typerr_core::decode;
//!
//! let r = decode("error: code=01, message=general error, httpStatus=500, rpcStatus=13, info=raw").unwrap();
//! assert_eq!(r.code(), "01");
//! assert_eq!(r.http_status(), 500);
//! assert_eq!(r.info(), ["raw"]);
//!
//! let r = decode(r#"info: {"code":"","message":"cache warmed","info":[]}"#).unwrap();
//! assert_eq!(r.message(), "cache warmed");
//! ```

use crate::encoder::{CODE_KEY, HTTP_STATUS_MARKER, INFO_MARKER, MESSAGE_MARKER, RPC_STATUS_MARKER};
use crate::error::{DecodeError, Result};
use crate::record::Record;
use crate::types::Level;
use serde::Deserialize;

const ERROR_TAG: &str = "error: code=";
const INFO_TAG: &str = "info: code=";

/// Field a separator opens; the text after the separator is its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Code,
    Message,
    HttpStatus,
    RpcStatus,
    Info,
}

/// A separator literal in the delimited grammar.
///
/// `slot` indexes the seen-table for separators that may occur once; both
/// tag literals share a slot so a record cannot carry two tags.
struct Marker {
    literal: &'static str,
    opens: Field,
    slot: Option<usize>,
}

const TAG_SLOT: usize = 0;
const UNIQUE_SLOTS: usize = 4;

/// Tested in this order at every position.
const MARKERS: &[Marker] = &[
    Marker {
        literal: ERROR_TAG,
        opens: Field::Code,
        slot: Some(TAG_SLOT),
    },
    Marker {
        literal: INFO_TAG,
        opens: Field::Code,
        slot: Some(TAG_SLOT),
    },
    Marker {
        literal: MESSAGE_MARKER,
        opens: Field::Message,
        slot: Some(1),
    },
    Marker {
        literal: HTTP_STATUS_MARKER,
        opens: Field::HttpStatus,
        slot: Some(2),
    },
    Marker {
        literal: RPC_STATUS_MARKER,
        opens: Field::RpcStatus,
        slot: Some(3),
    },
    Marker {
        literal: INFO_MARKER,
        opens: Field::Info,
        slot: None,
    },
];

/// Decode a string produced by [`crate::encode`] in either format.
///
/// Fails closed: any malformation is an error, never a partially filled
/// record.
pub fn decode(input: &str) -> Result<Record> {
    let (level, body) = split_tag(input).ok_or_else(|| {
        tracing::debug!(input_len = input.len(), "record has no level tag");
        DecodeError::MissingTag
    })?;

    if body.starts_with('{') {
        return decode_structured(level, body);
    }
    if body.starts_with(CODE_KEY) {
        return decode_delimited(input);
    }

    tracing::debug!(%level, "unrecognized payload after level tag");
    Err(DecodeError::MissingTag)
}

fn split_tag(input: &str) -> Option<(Level, &str)> {
    [Level::Error, Level::Info]
        .into_iter()
        .find_map(|level| input.strip_prefix(level.tag()).map(|body| (level, body)))
}

/// Owned mirror of the structured wire object. Unknown keys are rejected so
/// a misspelled field is an error rather than a silent zero; the level is
/// never a key, it comes from the tag.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StructuredPayload {
    pub(crate) code: String,
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) info: Vec<String>,
    #[serde(default)]
    pub(crate) debug: Vec<String>,
    #[serde(default)]
    pub(crate) http_status: u16,
    #[serde(default)]
    pub(crate) rpc_status: i32,
    #[serde(default)]
    pub(crate) process_id: Option<u32>,
    #[serde(default)]
    pub(crate) process_name: Option<String>,
}

fn decode_structured(level: Level, body: &str) -> Result<Record> {
    let payload: StructuredPayload = serde_json::from_str(body).inspect_err(|err| {
        tracing::debug!(error = %err, "structured record payload rejected");
    })?;
    Ok(Record::from_structured_payload(level, payload))
}

/// Field values collected while scanning the delimited form.
#[derive(Default)]
struct DelimitedParts {
    level: Level,
    code: String,
    message: String,
    http_status: u16,
    rpc_status: i32,
    info: Vec<String>,
}

impl DelimitedParts {
    fn assign(&mut self, field: Field, value: String) -> Result<()> {
        match field {
            Field::Code => self.code = value,
            Field::Message => self.message = value,
            Field::HttpStatus => self.http_status = parse_status(value, "httpStatus")?,
            Field::RpcStatus => self.rpc_status = parse_status(value, "rpcStatus")?,
            Field::Info => self.info.push(value),
        }
        Ok(())
    }

    fn into_record(self) -> Record {
        Record::from_delimited_parts(
            self.level,
            self.code,
            self.message,
            self.http_status,
            self.rpc_status,
            self.info,
        )
    }
}

/// Empty means unset, which is zero.
fn parse_status<T>(value: String, field: &'static str) -> Result<T>
where
    T: std::str::FromStr + Default,
{
    if value.is_empty() {
        return Ok(T::default());
    }
    value.parse().map_err(|_| {
        tracing::debug!(field, value = %value, "status is not an integer");
        DecodeError::InvalidStatus { field, value }
    })
}

/// Scan the whole input, tag included. `decode` has already checked that the
/// input starts with a tag, so the first marker matches at position 0.
fn decode_delimited(input: &str) -> Result<Record> {
    let mut parts = DelimitedParts::default();
    let mut seen = [false; UNIQUE_SLOTS];
    let mut open: Option<Field> = None;
    let mut value = String::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        if let Some(marker) = MARKERS.iter().find(|m| rest.starts_with(m.literal)) {
            if let Some(slot) = marker.slot {
                if seen[slot] {
                    tracing::debug!(marker = marker.literal, pos, "duplicate marker");
                    return Err(DecodeError::DuplicateMarker {
                        marker: marker.literal,
                    });
                }
                seen[slot] = true;
            }
            if marker.literal == INFO_TAG {
                parts.level = Level::Info;
            }

            if let Some(field) = open {
                parts.assign(field, std::mem::take(&mut value))?;
            }
            open = Some(marker.opens);
            pos += marker.literal.len();
            continue;
        }

        let ch = rest.chars().next().unwrap_or_default();
        value.push(ch);
        pos += ch.len_utf8();
    }

    if let Some(field) = open {
        parts.assign(field, value)?;
    }

    Ok(parts.into_record())
}
