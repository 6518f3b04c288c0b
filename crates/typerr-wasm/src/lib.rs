//! WASM bindings for typerr-core.
//!
//! Exposes `encode`, `decode` and `clean` as `#[wasm_bindgen]` functions
//! that exchange records as JSON strings with JavaScript/TypeScript.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p typerr-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/typerr_wasm.wasm
//! ```

use typerr_core::{Record, WireFormat};
use wasm_bindgen::prelude::*;

/// Encode a record given as JSON into its single-line form.
///
/// `format` is `"structured"` (default when omitted) or `"delimited"`.
/// Throws a JS error if the JSON is not a record or the format is unknown.
#[wasm_bindgen]
pub fn encode(record_json: &str, format: Option<String>) -> Result<String, JsValue> {
    encode_record(record_json, format.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Decode a single-line record into compact JSON.
///
/// Throws a JS error if the line is not a valid encoded record.
#[wasm_bindgen]
pub fn decode(line: &str) -> Result<String, JsValue> {
    decode_record(line).map_err(|e| JsValue::from_str(&e))
}

/// Strip structural JSON quoting from text.
#[wasm_bindgen]
pub fn clean(text: &str) -> String {
    typerr_core::clean(text)
}

fn encode_record(record_json: &str, format: Option<&str>) -> Result<String, String> {
    let format = match format {
        Some(name) => name.parse::<WireFormat>().map_err(|e| e.to_string())?,
        None => WireFormat::default(),
    };
    let record: Record = serde_json::from_str(record_json).map_err(|e| e.to_string())?;
    Ok(record.encode(format))
}

fn decode_record(line: &str) -> Result<String, String> {
    let record = typerr_core::decode(line).map_err(|e| e.to_string())?;
    serde_json::to_string(&record).map_err(|e| e.to_string())
}
