//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain. Rejected
//! invocations come back as `GatewayError` carrying the backend's message.

mod config;
mod gateway;
mod line_item;
mod navigation;
mod profile;

use line_item_board_core::GatewayError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Message carried by a rejected invocation
fn rejection(error: JsValue) -> GatewayError {
    match serde_wasm_bindgen::from_value::<serde_json::Value>(error.clone()) {
        Ok(value) => rejection_message(value),
        Err(_) => GatewayError::new(format!("{:?}", error)),
    }
}

/// Commands reject with a plain string; plugin and IPC failures may carry an
/// object with a `message` field instead
fn rejection_message(value: serde_json::Value) -> GatewayError {
    if let Some(message) = value.as_str() {
        return GatewayError::new(message);
    }
    match value.get("message").and_then(|m| m.as_str()) {
        Some(message) => GatewayError::new(message),
        None => GatewayError::new(value.to_string()),
    }
}

async fn call<A, T>(cmd: &str, args: &A) -> Result<T, GatewayError>
where
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| GatewayError::new(e.to_string()))?;
    let result = invoke(cmd, js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| GatewayError::new(e.to_string()))
}

async fn call_no_args<T: DeserializeOwned>(cmd: &str) -> Result<T, GatewayError> {
    let result = invoke(cmd, JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| GatewayError::new(e.to_string()))
}

// Re-export all public items
pub use config::*;
pub use gateway::*;
pub use line_item::*;
pub use navigation::*;
pub use profile::*;
