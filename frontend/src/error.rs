use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("element not found: {selector}")]
    MissingElement { selector: String },
    #[error("element {selector} is not of the expected type")]
    UnexpectedElement { selector: String },
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid page config: {0}")]
    Config(String),
}

impl EnhanceError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<serde_json::Error> for EnhanceError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
