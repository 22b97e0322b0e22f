//! Toast notifications with timed self-removal.
//!
//! Toasts live in `UiState`; `components::toast_host` renders them. In the
//! browser each toast schedules its own removal timer, independent of every
//! other toast. Outside the browser no timer runs and toasts stay until
//! dismissed.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::ui::{ToastId, ToastKind, UiState};

/// Show a toast and schedule its removal after `UiState::toast_timeout_ms`.
///
/// Returns `None` if the UI state has already been disposed.
pub fn show_toast(ui: RwSignal<UiState>, message: impl Into<String>, kind: ToastKind) -> Option<ToastId> {
    let (id, timeout_ms) = ui.try_update(|s| (s.push_toast(message, kind), s.toast_timeout_ms))?;
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(timeout_ms, move || {
            dismiss_toast(ui, id);
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = timeout_ms;
    }
    Some(id)
}

/// Remove a toast. Returns `false` if it was already gone.
pub fn dismiss_toast(ui: RwSignal<UiState>, id: ToastId) -> bool {
    ui.try_update(|s| s.dismiss_toast(id)).unwrap_or(false)
}
