//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context. The host page is
//! server-rendered, so only overlays such as the toast stack are mounted.

pub mod toast_host;
