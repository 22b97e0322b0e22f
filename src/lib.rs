//! # admin-ui
//!
//! Leptos + WASM client helpers for the storage admin panel.
//!
//! Pages are rendered by the server; this crate layers browser behavior on
//! top: byte/date formatting, toast notifications, loading spinners,
//! clipboard copy, a typed JSON API client, form validation and the page
//! bootstrap that wires copy/delete buttons and auto-hiding alerts.
//!
//! Browser-only code sits behind the `csr` feature. Without it the pure
//! helpers build and test natively.

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::{
    components::toast_host::ToastHost,
    config::UiConfig,
    error::UiError,
    i18n::{Catalog, Translate},
    net::endpoints::AdminApi,
    state::ui::UiState,
};

/// WASM entry point: runs once when the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }

    if let Err(e) = mount(&UiConfig::load()) {
        leptos::logging::error!("admin ui init failed: {e}");
    }
}

/// Create the shared UI state, wire the page and mount the toast stack.
///
/// The mounted view gets the `UiState` signal and an [`AdminApi`] rooted at
/// `config.api_base` as context.
///
/// # Errors
///
/// Returns [`UiError`] if `<body>` is unavailable or bootstrap wiring fails.
#[cfg(feature = "csr")]
pub fn mount(config: &UiConfig) -> Result<RwSignal<UiState>, UiError> {
    let ui = RwSignal::new(UiState::with_toast_timeout(config.toast_timeout_ms));
    let body = util::dom::document()?
        .body()
        .ok_or_else(|| UiError::ElementNotFound("body".to_owned()))?;

    let api = config.admin_api();
    let translator: Rc<dyn Translate> = Rc::new(Catalog::new(config.translations.clone()));
    bootstrap::init(&body, &config.bootstrap, ui, translator, config.alert_timeout_ms)?.forget();

    leptos::mount::mount_to(body, move || {
        provide_context(ui);
        provide_context(api);
        view! { <ToastHost/> }
    })
    .forget();

    leptos::logging::log!("admin ui ready");
    Ok(ui)
}
