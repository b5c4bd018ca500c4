//! Rendering of thrown JS values into error messages.

use wasm_bindgen::JsValue;

/// Prefers the thrown string, falling back to the value's debug form.
pub(crate) fn describe(err: &JsValue) -> String {
    message_or_else(err.as_string(), || format!("{err:?}"))
}

fn message_or_else(message: Option<String>, fallback: impl FnOnce() -> String) -> String {
    message
        .filter(|message| !message.is_empty())
        .unwrap_or_else(fallback)
}
