//! WASM bindings for binson-core.
//!
//! Binson values cross the JS boundary as JSON text (via the `json` module
//! mapping: bytes become `"0x…"` strings) and as `Uint8Array` or hex for the
//! encoded form. Built with `wasm-bindgen-cli`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p binson-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/binson-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/binson_wasm.wasm
//! ```

use binson_core::{hex, json};
use wasm_bindgen::prelude::*;

fn to_js(err: binson_core::BinsonError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn encode_json_bytes(text: &str) -> binson_core::Result<Vec<u8>> {
    Ok(json::from_json_str(text)?.to_bytes())
}

fn decode_bytes_to_json(bytes: &[u8]) -> binson_core::Result<String> {
    json::to_json_string(&binson_core::decode(bytes)?)
}

/// Encode a JSON string into Binson bytes.
///
/// Throws a JS error if the input is not valid JSON or contains `null`.
#[wasm_bindgen(js_name = encodeJson)]
pub fn encode_json(json: &str) -> std::result::Result<Vec<u8>, JsValue> {
    encode_json_bytes(json).map_err(to_js)
}

/// Strictly decode Binson bytes into compact JSON.
#[wasm_bindgen(js_name = decodeToJson)]
pub fn decode_to_json(bytes: &[u8]) -> std::result::Result<String, JsValue> {
    decode_bytes_to_json(bytes).map_err(to_js)
}

/// Encode a JSON string into Binson, returned as lowercase hex.
#[wasm_bindgen(js_name = encodeJsonHex)]
pub fn encode_json_hex(json: &str) -> std::result::Result<String, JsValue> {
    encode_json_bytes(json).map(|b| hex::to_hex(&b)).map_err(to_js)
}

/// Decode hex-encoded Binson into compact JSON.
#[wasm_bindgen(js_name = decodeHexToJson)]
pub fn decode_hex_to_json(hex_text: &str) -> std::result::Result<String, JsValue> {
    hex::from_hex(hex_text)
        .and_then(|b| decode_bytes_to_json(&b))
        .map_err(to_js)
}
