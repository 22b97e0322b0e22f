//! Utility helpers shared across the admin UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` and `validation` are pure and build everywhere. `toast` and
//! `clipboard` work natively with browser calls stubbed out. The remaining
//! modules touch the DOM directly and only exist with the `csr` feature.

pub mod clipboard;
pub mod format;
pub mod toast;
pub mod validation;

#[cfg(feature = "csr")]
pub mod dom;
#[cfg(feature = "csr")]
pub mod field_errors;
#[cfg(feature = "csr")]
pub mod loading;
