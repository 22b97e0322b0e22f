//! DOM-side error type shared by the browser helpers.
//!
//! ERROR HANDLING
//! ==============
//! Browser APIs report failures as `Option`/`JsValue`; helpers convert them
//! into `UiError` so callers can use `?` instead of unwrapping DOM lookups.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by DOM helper operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// `window` or `document` is not reachable (non-browser context).
    #[error("browser environment unavailable")]
    NoBrowser,

    /// An element lookup by id or selector returned nothing.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),

    /// The owning `UiState` signal was disposed.
    #[error("ui state disposed")]
    StateDisposed,

    /// The clipboard write was rejected.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl UiError {
    /// Lookup failure for an element id.
    pub fn missing_id(id: &str) -> Self {
        Self::ElementNotFound(format!("#{id}"))
    }
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
