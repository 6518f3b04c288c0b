//! The error/info record and its builder API.
//!
//! A [`Record`] is a plain owned value. Every builder method takes `&self`
//! and returns a fresh record, so one base value can be shared (by reference
//! or behind an `Arc`) across threads and each consumer derives its own
//! variant without affecting the others:
//!
//! ```
//! use typerr_core::Record;
//!
//! let base = Record::new("01", "general error");
//! let not_found = base.with_code("04").with_http_status(404);
//! let timeout = base.with_code("08").add_info(["upstream took 30s"]);
//!
//! assert_eq!(base.code(), "01");
//! assert_eq!(not_found.code(), "04");
//! assert_eq!(timeout.info(), ["upstream took 30s"]);
//! ```

use crate::decoder::{decode, StructuredPayload};
use crate::encoder::encode;
use crate::error::Result;
use crate::types::{Level, Note, WireFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structured error or info value.
///
/// The serde representation is the JSON rendering used by the default log
/// sink: zero statuses, empty `debug` and unset process metadata are
/// omitted. `code` and `message` are required when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    code: String,
    message: String,
    #[serde(default)]
    info: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    debug: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero_u16")]
    http_status: u16,
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    rpc_status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    process_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    process_name: Option<String>,
    #[serde(default)]
    level: Level,
}

fn is_zero_u16(v: &u16) -> bool {
    *v == 0
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

impl Record {
    /// Create an error-level record. Empty code and message are legal.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Create an empty info-level record.
    pub fn info_record() -> Self {
        Self {
            level: Level::Info,
            ..Self::default()
        }
    }

    /// Copy-on-write: every builder goes through here, so the receiver is
    /// never touched and the returned value owns its own sequences.
    fn derive(&self, change: impl FnOnce(&mut Record)) -> Record {
        let mut next = self.clone();
        change(&mut next);
        next
    }

    /// Copy with a different code.
    pub fn with_code(&self, code: impl Into<String>) -> Record {
        let code = code.into();
        self.derive(|r| r.code = code)
    }

    /// Copy with a different message.
    pub fn with_message(&self, message: impl Into<String>) -> Record {
        let message = message.into();
        self.derive(|r| r.message = message)
    }

    /// Copy at a different level; the level picks the wire tag.
    pub fn with_level(&self, level: Level) -> Record {
        self.derive(|r| r.level = level)
    }

    /// Append contextual notes in order. Each note is rendered and cleaned,
    /// see [`Note`].
    ///
    /// ```
    /// use typerr_core::{Note, Record};
    ///
    /// let io = std::io::Error::other("disk full");
    /// let r = Record::new("01", "write failed")
    ///     .add_info([Note::from("retrying"), Note::error(&io)])
    ///     .add_info([Note::structured(&serde_json::json!({"attempt": 2}))]);
    /// assert_eq!(r.info(), ["retrying", "disk full", "{attempt: 2}"]);
    /// ```
    pub fn add_info<I, N>(&self, values: I) -> Record
    where
        I: IntoIterator<Item = N>,
        N: Into<Note>,
    {
        let rendered = render_notes(values);
        self.derive(|r| r.info.extend(rendered))
    }

    /// Same as [`Record::add_info`] but appends to the debug list, which is
    /// kept out of user-facing output.
    pub fn add_debug<I, N>(&self, values: I) -> Record
    where
        I: IntoIterator<Item = N>,
        N: Into<Note>,
    {
        let rendered = render_notes(values);
        self.derive(|r| r.debug.extend(rendered))
    }

    /// Copy with an HTTP status. `0` means unset and is omitted from the
    /// structured form.
    pub fn with_http_status(&self, status: u16) -> Record {
        self.derive(|r| r.http_status = status)
    }

    /// Copy with an RPC status code, `0` meaning unset.
    pub fn with_rpc_status(&self, status: i32) -> Record {
        self.derive(|r| r.rpc_status = status)
    }

    /// Stamp origin metadata.
    pub fn with_process(&self, id: u32, name: impl Into<String>) -> Record {
        let name = name.into();
        self.derive(|r| {
            r.process_id = Some(id);
            r.process_name = Some(name);
        })
    }

    /// Stamp the current process id and executable name.
    pub fn with_current_process(&self) -> Record {
        let name = std::env::current_exe()
            .ok()
            .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()));
        self.derive(|r| {
            r.process_id = Some(std::process::id());
            r.process_name = name;
        })
    }

    /// Independent deep copy. Builders already copy, so this is only needed
    /// when a caller wants an owned value to hand out explicitly.
    pub fn snapshot(&self) -> Record {
        self.clone()
    }

    /// Pass this record to the process-wide log sink.
    pub fn log(&self) -> &Self {
        crate::sink::emit(self);
        self
    }

    /// Encode in the given wire format. `to_string()` uses
    /// [`WireFormat::Structured`].
    pub fn encode(&self, format: WireFormat) -> String {
        encode(self, format)
    }

    /// Rebuild a record from an error whose description is an encoded
    /// record, e.g. one that crossed a `Box<dyn Error>` boundary.
    pub fn from_error(err: &(dyn std::error::Error + '_)) -> Result<Record> {
        decode(&err.to_string())
    }

    /// Short machine-readable code, e.g. `"01"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// User-facing notes, cleaned, in append order.
    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// Diagnostic notes, cleaned, in append order.
    pub fn debug(&self) -> &[String] {
        &self.debug
    }

    /// HTTP status, `0` when unset.
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// RPC status, `0` when unset.
    pub fn rpc_status(&self) -> i32 {
        self.rpc_status
    }

    /// Origin process id, if stamped.
    pub fn process_id(&self) -> Option<u32> {
        self.process_id
    }

    /// Origin executable name, if stamped.
    pub fn process_name(&self) -> Option<&str> {
        self.process_name.as_deref()
    }

    /// Error or info.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Used by the decoder, which has already validated every field.
    pub(crate) fn from_structured_payload(level: Level, payload: StructuredPayload) -> Record {
        Record {
            code: payload.code,
            message: payload.message,
            info: payload.info,
            debug: payload.debug,
            http_status: payload.http_status,
            rpc_status: payload.rpc_status,
            process_id: payload.process_id,
            process_name: payload.process_name,
            level,
        }
    }

    pub(crate) fn from_delimited_parts(
        level: Level,
        code: String,
        message: String,
        http_status: u16,
        rpc_status: i32,
        info: Vec<String>,
    ) -> Record {
        Record {
            code,
            message,
            info,
            http_status,
            rpc_status,
            level,
            ..Record::default()
        }
    }
}

fn render_notes<I, N>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = N>,
    N: Into<Note>,
{
    values.into_iter().map(|v| v.into().render()).collect()
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self, WireFormat::Structured))
    }
}

impl std::error::Error for Record {}

impl FromStr for Record {
    type Err = crate::error::DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}
