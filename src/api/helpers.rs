//! Shared helpers for the WASM API
//!
//! Error type for the API surface plus serialization glue between JavaScript
//! values and the crate's serde types.

use crate::french::ConfigError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Failures reported across the API boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Font registry lock poisoned")]
    LockPoisoned,

    #[error("Font {0} is already registered")]
    FontAlreadyRegistered(u32),

    #[error("Font {0} has invalid space metrics (must be non-negative numbers)")]
    InvalidMetrics(u32),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid node JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ApiError> for JsValue {
    fn from(e: ApiError) -> Self {
        log::error!("{}", e);
        JsValue::from_str(&e.to_string())
    }
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional value, falling back to the type's default for `undefined`/`null`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}
