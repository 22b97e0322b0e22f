//! Clipboard copy with toast feedback.
//!
//! Failures never reach the caller: they are logged and shown as a danger
//! toast.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use leptos::prelude::*;

use super::toast::show_toast;
use crate::error::UiError;
use crate::i18n::{COPIED_TO_CLIPBOARD, Translate};
use crate::state::ui::{ToastKind, UiState};

pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Toast text and severity for a finished clipboard write.
pub fn copy_feedback<T: Translate + ?Sized>(result: &Result<(), UiError>, translator: &T) -> (String, ToastKind) {
    match result {
        Ok(()) => (translator.translate(COPIED_TO_CLIPBOARD), ToastKind::Success),
        Err(_) => (COPY_FAILED_MESSAGE.to_owned(), ToastKind::Danger),
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`UiError::Clipboard`] when the browser rejects the write and
/// [`UiError::NoBrowser`] outside a browser.
pub async fn write_text(text: &str) -> Result<(), UiError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or(UiError::NoBrowser)?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| UiError::Clipboard(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err(UiError::NoBrowser)
    }
}

/// Copy `text` and report the outcome with a toast.
pub async fn copy_to_clipboard<T: Translate + ?Sized>(ui: RwSignal<UiState>, translator: &T, text: &str) {
    let result = write_text(text).await;
    if let Err(e) = &result {
        leptos::logging::error!("Failed to copy: {e}");
    }
    let (message, kind) = copy_feedback(&result, translator);
    show_toast(ui, message, kind);
}
