//! Client state owned by the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in a `leptos` `RwSignal` so the toast host re-renders when helpers
//! push or dismiss notifications.

pub mod ui;
