//! Browser tests for the DOM helpers. Run with `wasm-pack test --headless --chrome -- --features csr`.

#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use std::collections::HashMap;
use std::rc::Rc;

use admin_ui::bootstrap::{self, BootstrapConfig};
use admin_ui::i18n::{Catalog, Translate};
use admin_ui::state::ui::{ToastKind, UiState};
use admin_ui::util::field_errors::{clear_field_errors, show_field_error};
use admin_ui::util::loading::{hide_loading, show_loading};
use admin_ui::util::toast::show_toast;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn fixture(html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

// =============================================================
// Field errors
// =============================================================

#[wasm_bindgen_test]
fn show_field_error_twice_leaves_one_message_with_latest_text() {
    let root = fixture(r#"<form id="f1"><div><input id="bucket-a"></div></form>"#);

    show_field_error("bucket-a", "too short").unwrap();
    show_field_error("bucket-a", "uppercase not allowed").unwrap();

    assert_eq!(count(&root, ".invalid-feedback"), 1);
    let message = root.query_selector(".invalid-feedback").unwrap().unwrap();
    assert_eq!(message.text_content().as_deref(), Some("uppercase not allowed"));
    assert_eq!(count(&root, "#bucket-a.is-invalid"), 1);
    root.remove();
}

#[wasm_bindgen_test]
fn clear_field_errors_removes_marks_and_messages() {
    let root = fixture(
        r#"<form id="f2"><div><input id="key-a"></div><div><input id="key-b"></div></form>"#,
    );
    show_field_error("key-a", "bad").unwrap();
    show_field_error("key-b", "bad").unwrap();

    clear_field_errors("f2").unwrap();

    assert_eq!(count(&root, ".is-invalid"), 0);
    assert_eq!(count(&root, ".invalid-feedback"), 0);
    root.remove();
}

#[wasm_bindgen_test]
fn show_field_error_missing_field_is_an_error() {
    assert!(show_field_error("no-such-field", "x").is_err());
    assert!(clear_field_errors("no-such-form").is_err());
}

// =============================================================
// Spinners
// =============================================================

#[wasm_bindgen_test]
fn two_spinners_do_not_collide() {
    let ui = RwSignal::new(UiState::default());
    let root = fixture("");

    let a = show_loading(ui, &root).unwrap();
    let b = show_loading(ui, &root).unwrap();
    assert_ne!(a.element_id(), b.element_id());
    assert_eq!(count(&root, ".loading"), 2);

    hide_loading(ui, a);
    assert_eq!(count(&root, ".loading"), 1);
    assert!(ui.with_untracked(UiState::is_loading));

    hide_loading(ui, b);
    hide_loading(ui, b);
    assert_eq!(count(&root, ".loading"), 0);
    assert!(!ui.with_untracked(UiState::is_loading));
    root.remove();
}

// =============================================================
// Toasts
// =============================================================

#[wasm_bindgen_test]
async fn toast_removes_itself_after_default_timeout() {
    let ui = RwSignal::new(UiState::default());
    show_toast(ui, "saved", ToastKind::Success).unwrap();
    assert_eq!(ui.with_untracked(|s| s.toasts.len()), 1);

    TimeoutFuture::new(5_100).await;
    assert!(ui.with_untracked(|s| s.toasts.is_empty()));
}

// =============================================================
// Bootstrap
// =============================================================

#[wasm_bindgen_test]
async fn alerts_auto_hide_except_permanent() {
    let root = fixture(
        r#"<div class="alert alert-info">temp</div><div class="alert alert-permanent">keep</div>"#,
    );
    let ui = RwSignal::new(UiState::default());
    let translator: Rc<dyn Translate> = Rc::new(Catalog::new(HashMap::new()));

    let wired = bootstrap::init(&root, &BootstrapConfig::default(), ui, translator, 20).unwrap();
    assert_eq!(wired.pending_alert_count(), 1);

    TimeoutFuture::new(80).await;
    assert_eq!(count(&root, ".alert"), 1);
    assert_eq!(count(&root, ".alert-permanent"), 1);
    drop(wired);
    root.remove();
}

#[wasm_bindgen_test]
fn disabled_behaviors_attach_nothing() {
    let root = fixture(
        r#"<button class="copy-btn" data-copy="x"></button><button class="delete-btn" data-name="b"></button>"#,
    );
    let ui = RwSignal::new(UiState::default());
    let translator: Rc<dyn Translate> = Rc::new(Catalog::default());
    let config = BootstrapConfig {
        copy_buttons: false,
        delete_confirm: false,
        auto_hide_alerts: false,
        sidebar_toggle: false,
    };

    let wired = bootstrap::init(&root, &config, ui, translator, 5_000).unwrap();
    assert_eq!(wired.listener_count(), 0);
    assert_eq!(wired.pending_alert_count(), 0);
    root.remove();
}

#[wasm_bindgen_test]
fn sidebar_toggle_flips_show_class() {
    let root = fixture(r#"<nav class="sidebar"></nav>"#);
    assert!(bootstrap::toggle_sidebar(&root).unwrap());
    assert_eq!(count(&root, ".sidebar.show"), 1);
    assert!(!bootstrap::toggle_sidebar(&root).unwrap());
    assert_eq!(count(&root, ".sidebar.show"), 0);
    root.remove();
}
