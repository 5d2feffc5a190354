use thiserror::Error;
use wasm_bindgen_x::JsValue;

/// Binding errors.
///
/// A missing element is not an error: the feature is skipped. These cover
/// the cases where the page environment itself is unusable.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
