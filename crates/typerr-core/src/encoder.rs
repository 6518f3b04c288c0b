//! Record → single-line string.
//!
//! Two formats, both prefixed with the level tag (`error: ` / `info: `):
//!
//! - **Structured** (default): compact JSON with fields in a fixed order,
//!   `code`, `message`, `info`, `debug`, `http_status`, `rpc_status`,
//!   `process_id`, `process_name`. Empty `debug`, zero statuses and unset
//!   process metadata are omitted.
//! - **Delimited**: `code=…, message=…, httpStatus=…, rpcStatus=…` followed
//!   by `, info=…` per info entry. Kept for interop with consumers of the
//!   older format; it drops debug entries and process metadata.
//!
//! # Example
//! ```
//! use typerr_core::{encode, Record, WireFormat};
//!
//! let r = Record::new("01", "general error")
//!     .with_http_status(500)
//!     .with_rpc_status(13)
//!     .add_info(["raw error", "raw error 2"]);
//!
//! assert_eq!(
//!     encode(&r, WireFormat::Structured),
//!     r#"error: {"code":"01","message":"general error","info":["raw error","raw error 2"],"http_status":500,"rpc_status":13}"#
//! );
//! assert_eq!(
//!     encode(&r, WireFormat::Delimited),
//!     "error: code=01, message=general error, httpStatus=500, rpcStatus=13, info=raw error, info=raw error 2"
//! );
//! ```

use crate::record::Record;
use crate::types::WireFormat;
use serde::Serialize;

pub(crate) const MESSAGE_MARKER: &str = ", message=";
pub(crate) const HTTP_STATUS_MARKER: &str = ", httpStatus=";
pub(crate) const RPC_STATUS_MARKER: &str = ", rpcStatus=";
pub(crate) const INFO_MARKER: &str = ", info=";
pub(crate) const CODE_KEY: &str = "code=";

/// Borrowed view of a record in wire field order. The level travels in the
/// tag, so it has no field here.
#[derive(Serialize)]
struct WireRecord<'a> {
    code: &'a str,
    message: &'a str,
    info: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    debug: &'a [String],
    #[serde(skip_serializing_if = "is_zero_u16")]
    http_status: u16,
    #[serde(skip_serializing_if = "is_zero_i32")]
    rpc_status: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    process_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    process_name: Option<&'a str>,
}

fn is_empty(v: &&[String]) -> bool {
    v.is_empty()
}

fn is_zero_u16(v: &u16) -> bool {
    *v == 0
}

fn is_zero_i32(v: &i32) -> bool {
    *v == 0
}

/// Encode a record. Never fails.
pub fn encode(record: &Record, format: WireFormat) -> String {
    match format {
        WireFormat::Structured => encode_structured(record),
        WireFormat::Delimited => encode_delimited(record),
    }
}

fn encode_structured(record: &Record) -> String {
    let wire = WireRecord {
        code: record.code(),
        message: record.message(),
        info: record.info(),
        debug: record.debug(),
        http_status: record.http_status(),
        rpc_status: record.rpc_status(),
        process_id: record.process_id(),
        process_name: record.process_name(),
    };

    match serde_json::to_string(&wire) {
        Ok(json) => {
            let tag = record.level().tag();
            let mut out = String::with_capacity(tag.len() + json.len());
            out.push_str(tag);
            out.push_str(&json);
            out
        }
        Err(err) => {
            // Only reachable through a broken Serialize impl; keep the
            // "always produces a string" contract.
            tracing::warn!(error = %err, "structured encoding failed, using delimited form");
            encode_delimited(record)
        }
    }
}

fn encode_delimited(record: &Record) -> String {
    let info_len: usize = record
        .info()
        .iter()
        .map(|i| INFO_MARKER.len() + i.len())
        .sum();
    let mut out = String::with_capacity(
        64 + record.code().len() + record.message().len() + info_len,
    );

    out.push_str(record.level().tag());
    out.push_str(CODE_KEY);
    out.push_str(record.code());
    out.push_str(MESSAGE_MARKER);
    out.push_str(record.message());
    out.push_str(HTTP_STATUS_MARKER);
    out.push_str(&record.http_status().to_string());
    out.push_str(RPC_STATUS_MARKER);
    out.push_str(&record.rpc_status().to_string());
    for entry in record.info() {
        out.push_str(INFO_MARKER);
        out.push_str(entry);
    }
    out
}
