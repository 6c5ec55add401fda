//! Shared helpers for WASM API operations
//!
//! Serialization across the JS boundary and conversion of Rust errors into
//! `JsValue`s, with the failure logged on the way out.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(error_context, e))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(error_context, e))
}

/// Log an error and convert it to a JS string value
pub fn js_error(context: &str, error: impl Display) -> JsValue {
    let msg = format!("{}: {}", context, error);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
