//! Small value types shared by the record, the codec and the sink.

use crate::cleaner::clean;
use crate::error::UnknownFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of record this is. Rendered as the encoded tag
/// (`error: ` / `info: `) and as the `level` field of the JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Error,
    Info,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Info => "info",
        }
    }

    /// Tag that prefixes every encoded record of this level.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Level::Error => "error: ",
            Level::Info => "info: ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-line textual format produced by [`crate::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// Level tag followed by compact JSON. Carries every field.
    #[default]
    Structured,
    /// Level tag followed by `code=…, message=…, httpStatus=…, rpcStatus=…`
    /// and one `, info=…` per entry. Does not carry debug entries or process
    /// metadata, and values must not contain the separator literals.
    Delimited,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WireFormat::Structured => "structured",
            WireFormat::Delimited => "delimited",
        })
    }
}

impl FromStr for WireFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" | "json" => Ok(WireFormat::Structured),
            "delimited" => Ok(WireFormat::Delimited),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// A contextual value attached to a record with `add_info` / `add_debug`.
///
/// Every variant holds its rendered text; [`Note::render`] runs it through
/// the cleaner before it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    /// Plain text, appended as-is after cleaning.
    Text(String),
    /// The `Display` description of an error.
    Error(String),
    /// Compact JSON of a serializable value, or its `Debug` output if
    /// serialization failed.
    Structured(String),
}

impl Note {
    /// Capture an error's description.
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Note::Error(err.to_string())
    }

    /// Serialize any value to compact JSON.
    ///
    /// Falls back to `{:?}` when serde cannot represent the value (e.g. a
    /// map with non-string keys).
    pub fn structured<T: Serialize + fmt::Debug + ?Sized>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(json) => Note::Structured(json),
            Err(_) => Note::Structured(format!("{value:?}")),
        }
    }

    /// The cleaned text that ends up in the record.
    pub fn render(&self) -> String {
        match self {
            Note::Text(s) | Note::Error(s) | Note::Structured(s) => clean(s),
        }
    }
}

impl From<&str> for Note {
    fn from(s: &str) -> Self {
        Note::Text(s.to_string())
    }
}

impl From<String> for Note {
    fn from(s: String) -> Self {
        Note::Text(s)
    }
}

impl From<&String> for Note {
    fn from(s: &String) -> Self {
        Note::Text(s.clone())
    }
}

impl From<serde_json::Value> for Note {
    fn from(value: serde_json::Value) -> Self {
        Note::structured(&value)
    }
}

macro_rules! structured_note_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Note {
                fn from(value: $t) -> Self {
                    Note::structured(&value)
                }
            }
        )*
    };
}

structured_note_from!(bool, i32, i64, u16, u32, u64, usize, f64);
