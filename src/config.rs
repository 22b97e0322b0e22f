//! Page-supplied configuration.
//!
//! The server embeds a JSON object in
//! `<script id="admin-ui-config" type="application/json">`. Every field is
//! optional; absent fields take the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::bootstrap::BootstrapConfig;
use crate::net::endpoints::AdminApi;

pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_ALERT_TIMEOUT_MS: u32 = 5000;

/// Element id of the embedded config script.
pub const CONFIG_ELEMENT_ID: &str = "admin-ui-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before a toast removes itself.
    pub toast_timeout_ms: u32,
    /// Delay before server-rendered alerts are removed.
    pub alert_timeout_ms: u32,
    /// Prefix for API paths, e.g. `"/admin"`. Empty means same origin root.
    pub api_base: String,
    pub bootstrap: BootstrapConfig,
    /// Flat translation key → localized text map.
    pub translations: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
            alert_timeout_ms: DEFAULT_ALERT_TIMEOUT_MS,
            api_base: String::new(),
            bootstrap: BootstrapConfig::default(),
            translations: HashMap::new(),
        }
    }
}

impl UiConfig {
    /// Parse config JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_owned();
        Ok(config)
    }

    /// Endpoint client rooted at `api_base`.
    pub fn admin_api(&self) -> AdminApi {
        AdminApi::new(self.api_base.clone())
    }

    /// Read config from the embedded script element.
    ///
    /// Falls back to defaults when the element is missing or unparseable.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            let Some(raw) = raw else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    leptos::logging::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}
