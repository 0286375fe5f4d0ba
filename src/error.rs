use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
    #[error("invalid config: {0}")]
    Config(String),
    #[error("config is not valid JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("clipboard unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("javascript error: {0}")]
    Js(String),
}

/// Best-effort rendering of a thrown JS value for logs.
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        EnhanceError::Js(describe_js(&value))
    }
}
