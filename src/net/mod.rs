//! Networking modules for the admin panel JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the generic request wrapper, `types` defines the per-endpoint
//! bodies and `endpoints` binds the two into typed calls.

pub mod api;
pub mod endpoints;
pub mod types;
