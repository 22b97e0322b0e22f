//! Request and response bodies for the admin panel JSON API.
//!
//! DESIGN
//! ======
//! One type per endpoint so malformed responses fail at decode time instead
//! of surfacing later as missing fields in the UI. Lists the server may send
//! as `null` decode to empty vectors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::format::{DEFAULT_DECIMALS, format_bytes};

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{"error": "..."}` body sent with non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"message": "..."}` body sent by mutating endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /api/server-info`. The server passes the storage backend's info
/// document through unchanged.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServerInfoResponse {
    pub server_info: serde_json::Value,
}

/// `GET /api/metrics`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MetricsResponse {
    pub server_info: serde_json::Value,
    pub online: bool,
}

/// `GET /api/storage-usage`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StorageUsage {
    /// Total bytes across buckets whose stats were available.
    pub total_size: u64,
    pub total_objects: u64,
    pub total_buckets: u64,
    /// Buckets whose stats finished before the server-side timeout.
    pub buckets_with_stats: u64,
    /// Server-rendered size string.
    pub formatted_size: String,
}

impl StorageUsage {
    /// `total_size` rendered with the client's byte formatting.
    pub fn display_size(&self) -> String {
        format_bytes(self.total_size, DEFAULT_DECIMALS)
    }

    /// Whether some buckets were left out of the totals.
    pub fn is_partial(&self) -> bool {
        self.buckets_with_stats < self.total_buckets
    }
}

/// `GET /api/policies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PolicyList {
    #[serde(deserialize_with = "null_as_empty")]
    pub policies: Vec<String>,
}

/// A service account as reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceAccount {
    pub access_key: String,
    /// Only present in the response to a create call.
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub parent_user: String,
    pub status: String,
    #[serde(default)]
    pub implied_policy: bool,
    #[serde(default)]
    pub expiration: Option<String>,
}

impl ServiceAccount {
    pub fn is_enabled(&self) -> bool {
        self.status.eq_ignore_ascii_case("on") || self.status.eq_ignore_ascii_case("enabled")
    }
}

/// `GET /api/service-accounts?user=...`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceAccountList {
    #[serde(deserialize_with = "null_as_empty")]
    pub service_accounts: Vec<ServiceAccount>,
}

/// Response of `POST /api/service-accounts`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceAccountEnvelope {
    pub service_account: ServiceAccount,
}

/// Account details from `GET /api/service-accounts/{access_key}`. The
/// server omits the key itself, so callers supply it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceAccountInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub parent_user: String,
    pub status: String,
    #[serde(default)]
    pub implied_policy: bool,
}

impl ServiceAccountInfo {
    pub fn into_account(self, access_key: impl Into<String>) -> ServiceAccount {
        ServiceAccount {
            access_key: access_key.into(),
            secret_key: None,
            name: self.name,
            description: self.description,
            parent_user: self.parent_user,
            status: self.status,
            implied_policy: self.implied_policy,
            expiration: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceAccountInfoEnvelope {
    pub service_account: ServiceAccountInfo,
}

/// `POST /api/service-accounts` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateServiceAccountRequest {
    pub target_user: String,
    pub name: String,
    pub description: String,
}
