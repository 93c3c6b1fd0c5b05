// Helpers compartidos

pub mod constants;

pub use constants::*;

/// Texto de una excepción JS (`err.message`, si no su forma debug)
#[cfg(target_arch = "wasm32")]
pub fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsValue;

    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
