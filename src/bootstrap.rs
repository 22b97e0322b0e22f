//! Page bootstrap: wires server-rendered buttons and alerts to client behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `.copy-btn`, `.delete-btn`, `.alert` and `.sidebar`
//! markup. `init` scans one root element, attaches the behaviors enabled in
//! `BootstrapConfig`, and hands back a `Bootstrap` that owns every listener
//! and timer it created.
//!
//! LIFECYCLE
//! =========
//! Dropping the `Bootstrap` detaches its listeners and cancels pending alert
//! timers. `Bootstrap::forget` keeps them for the life of the page.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use serde::Deserialize;

#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_events::{EventListener, EventListenerOptions};
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use leptos::prelude::RwSignal;
#[cfg(feature = "csr")]
use web_sys::Element;

#[cfg(feature = "csr")]
use crate::error::UiError;
#[cfg(feature = "csr")]
use crate::i18n::Translate;
#[cfg(feature = "csr")]
use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::util::{clipboard::copy_to_clipboard, dom::query_all};

pub const COPY_BUTTON_SELECTOR: &str = ".copy-btn";
pub const DELETE_BUTTON_SELECTOR: &str = ".delete-btn";
pub const AUTO_HIDE_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";
pub const SIDEBAR_SELECTOR: &str = ".sidebar";
pub const SIDEBAR_TOGGLE_SELECTOR: &str = ".sidebar-toggle";
pub const SIDEBAR_OPEN_CLASS: &str = "show";

/// Which page behaviors `init` attaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Copy each `.copy-btn`'s `data-copy` value on click.
    pub copy_buttons: bool,
    /// Ask before following a `.delete-btn`, naming its `data-name`.
    pub delete_confirm: bool,
    /// Remove non-permanent `.alert`s after the alert timeout.
    pub auto_hide_alerts: bool,
    /// Toggle `.sidebar` from `.sidebar-toggle` buttons.
    pub sidebar_toggle: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self { copy_buttons: true, delete_confirm: true, auto_hide_alerts: true, sidebar_toggle: true }
    }
}

/// Text of the native confirm dialog shown for a delete button.
pub fn delete_confirmation_message(item_name: &str) -> String {
    format!("Are you sure you want to delete \"{item_name}\"?")
}

/// Listeners and timers created by [`init`].
#[cfg(feature = "csr")]
#[derive(Default)]
pub struct Bootstrap {
    listeners: Vec<EventListener>,
    timers: Vec<Timeout>,
}

#[cfg(feature = "csr")]
impl Bootstrap {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_alert_count(&self) -> usize {
        self.timers.len()
    }

    /// Keep every listener and timer alive for the rest of the page.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
        for timer in self.timers {
            timer.forget();
        }
    }
}

/// Attach the behaviors enabled in `config` to elements under `root`.
///
/// Only elements present at call time are wired.
///
/// # Errors
///
/// Returns a DOM error if a selector query throws.
#[cfg(feature = "csr")]
pub fn init(
    root: &Element,
    config: &BootstrapConfig,
    ui: RwSignal<UiState>,
    translator: Rc<dyn Translate>,
    alert_timeout_ms: u32,
) -> Result<Bootstrap, UiError> {
    let mut wired = Bootstrap::default();

    if config.copy_buttons {
        for button in query_all(root, COPY_BUTTON_SELECTOR)? {
            let target = button.clone();
            let translator = Rc::clone(&translator);
            wired.listeners.push(EventListener::new(&button, "click", move |_| {
                let text = target.get_attribute("data-copy").unwrap_or_default();
                let translator = Rc::clone(&translator);
                leptos::task::spawn_local(async move {
                    copy_to_clipboard(ui, &*translator, &text).await;
                });
            }));
        }
    }

    if config.delete_confirm {
        for button in query_all(root, DELETE_BUTTON_SELECTOR)? {
            let target = button.clone();
            wired.listeners.push(EventListener::new_with_options(
                &button,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let name = target.get_attribute("data-name").unwrap_or_default();
                    if !confirm(&delete_confirmation_message(&name)) {
                        event.prevent_default();
                    }
                },
            ));
        }
    }

    if config.auto_hide_alerts {
        for alert in query_all(root, AUTO_HIDE_ALERT_SELECTOR)? {
            wired.timers.push(Timeout::new(alert_timeout_ms, move || {
                if alert.parent_node().is_some() {
                    alert.remove();
                }
            }));
        }
    }

    if config.sidebar_toggle {
        for button in query_all(root, SIDEBAR_TOGGLE_SELECTOR)? {
            let root = root.clone();
            wired.listeners.push(EventListener::new(&button, "click", move |_| {
                if let Err(e) = toggle_sidebar(&root) {
                    leptos::logging::warn!("sidebar toggle failed: {e}");
                }
            }));
        }
    }

    log::debug!(
        "bootstrap wired {} listeners and {} alert timers",
        wired.listener_count(),
        wired.pending_alert_count()
    );
    Ok(wired)
}

/// Flip the `.sidebar` open class. Returns whether it is now open.
///
/// # Errors
///
/// Returns [`UiError::ElementNotFound`] if `root` has no `.sidebar`.
#[cfg(feature = "csr")]
pub fn toggle_sidebar(root: &Element) -> Result<bool, UiError> {
    let sidebar = root
        .query_selector(SIDEBAR_SELECTOR)?
        .ok_or_else(|| UiError::ElementNotFound(SIDEBAR_SELECTOR.to_owned()))?;
    Ok(sidebar.class_list().toggle(SIDEBAR_OPEN_CLASS)?)
}

/// Native confirm dialog. A missing window counts as "declined".
#[cfg(feature = "csr")]
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
