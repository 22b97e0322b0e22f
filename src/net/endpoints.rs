//! Typed calls for the admin panel's JSON endpoints.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use super::api::{self, ApiError};
use super::types::{
    CreateServiceAccountRequest, MessageResponse, MetricsResponse, PolicyList, ServerInfoResponse,
    ServiceAccount, ServiceAccountEnvelope, ServiceAccountInfoEnvelope, ServiceAccountList, StorageUsage,
};

/// Endpoint paths relative to an optional base prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminApi {
    base: String,
}

impl AdminApi {
    /// `base` is prepended to every path; a trailing `/` is ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn server_info_url(&self) -> String {
        self.url("/api/server-info")
    }

    pub fn metrics_url(&self) -> String {
        self.url("/api/metrics")
    }

    pub fn storage_usage_url(&self) -> String {
        self.url("/api/storage-usage")
    }

    pub fn policies_url(&self) -> String {
        self.url("/api/policies")
    }

    pub fn service_accounts_url(&self, user: &str) -> String {
        self.url(&format!("/api/service-accounts?user={}", urlencoding::encode(user)))
    }

    pub fn service_account_url(&self, access_key: &str) -> String {
        self.url(&format!("/api/service-accounts/{}", urlencoding::encode(access_key)))
    }

    /// # Errors
    ///
    /// See [`api::request`].
    pub async fn server_info(&self) -> Result<ServerInfoResponse, ApiError> {
        api::get(&self.server_info_url()).await
    }

    /// # Errors
    ///
    /// See [`api::request`].
    pub async fn metrics(&self) -> Result<MetricsResponse, ApiError> {
        api::get(&self.metrics_url()).await
    }

    /// # Errors
    ///
    /// See [`api::request`].
    pub async fn storage_usage(&self) -> Result<StorageUsage, ApiError> {
        api::get(&self.storage_usage_url()).await
    }

    /// # Errors
    ///
    /// See [`api::request`].
    pub async fn policies(&self) -> Result<Vec<String>, ApiError> {
        api::get::<PolicyList>(&self.policies_url()).await.map(|list| list.policies)
    }

    /// List service accounts owned by `user`.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidRequest`] for an empty user, otherwise see [`api::request`].
    pub async fn service_accounts(&self, user: &str) -> Result<ServiceAccountList, ApiError> {
        if user.trim().is_empty() {
            return Err(ApiError::InvalidRequest("user is required".to_owned()));
        }
        api::get(&self.service_accounts_url(user)).await
    }

    /// # Errors
    ///
    /// [`ApiError::InvalidRequest`] for an empty target user, otherwise see [`api::request`].
    pub async fn create_service_account(
        &self,
        req: &CreateServiceAccountRequest,
    ) -> Result<ServiceAccountEnvelope, ApiError> {
        if req.target_user.trim().is_empty() {
            return Err(ApiError::InvalidRequest("target_user is required".to_owned()));
        }
        api::post(&self.url("/api/service-accounts"), req).await
    }

    /// Fetch one account; `access_key` is copied into the result.
    ///
    /// # Errors
    ///
    /// See [`api::request`].
    pub async fn service_account(&self, access_key: &str) -> Result<ServiceAccount, ApiError> {
        api::get::<ServiceAccountInfoEnvelope>(&self.service_account_url(access_key))
            .await
            .map(|env| env.service_account.into_account(access_key))
    }

    /// # Errors
    ///
    /// See [`api::request`].
    pub async fn delete_service_account(&self, access_key: &str) -> Result<MessageResponse, ApiError> {
        api::delete(&self.service_account_url(access_key)).await
    }
}
