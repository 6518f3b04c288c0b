//! # typerr-core
//!
//! Structured error/info records that survive being flattened to a string.
//!
//! A [`Record`] carries a machine-readable code, a human message, ordered
//! contextual notes (`info`, plus `debug` for non-user-facing detail) and
//! optional HTTP / RPC status hints. It implements [`std::error::Error`], and
//! its `Display` output is an encoded line that [`decode`] turns back into an
//! equal record, so it can cross any `Box<dyn Error>` boundary and be
//! recovered on the other side.
//!
//! ## Quick start
//!
//! ```rust
//! use typerr_core::{decode, Record};
//!
//! let err = Record::new("01", "general error")
//!     .with_http_status(500)
//!     .add_info(["raw error"]);
//!
//! let line = err.to_string();
//! assert_eq!(
//!     line,
//!     r#"error: {"code":"01","message":"general error","info":["raw error"],"http_status":500}"#
//! );
//!
//! let back = decode(&line).unwrap();
//! assert_eq!(back, err);
//! ```
//!
//! ## Modules
//!
//! - [`record`]: the record and its copy-on-write builder API
//! - [`encoder`]: record → structured or delimited line
//! - [`decoder`]: line → record, format auto-detected
//! - [`cleaner`]: quote stripping for JSON-rendered notes
//! - [`sink`]: replaceable process-wide log callback
//! - [`types`]: `Level`, `WireFormat`, `Note`
//! - [`error`]: decode errors

pub mod cleaner;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod record;
pub mod sink;
pub mod types;

pub use cleaner::clean;
pub use decoder::decode;
pub use encoder::encode;
pub use error::{DecodeError, UnknownFormat};
pub use record::Record;
pub use sink::{reset_sink, set_sink, stdout_sink, tracing_sink};
pub use types::{Level, Note, WireFormat};
