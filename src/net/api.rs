//! Generic JSON-over-HTTP request wrapper.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged once here and then returned to the caller. There
//! is no retry, no backoff and no client-side timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;

/// Headers sent with every request unless the caller overrides them.
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [("Content-Type", "application/json"), ("Accept", "application/json")];

/// Errors produced by API requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The request was rejected before sending.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No browser HTTP client in this build.
    #[error("HTTP client not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// The `error` field of a JSON error body, if the server sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Per-request settings merged over the defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    /// Header overrides; names compare case-insensitively against defaults.
    pub headers: Vec<(String, String)>,
    /// Pre-serialized JSON body.
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serialize `data` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `data` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, data: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_string(data).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(self)
    }
}

/// Apply caller headers over [`DEFAULT_HEADERS`]. Later overrides win.
pub fn merge_headers(overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = DEFAULT_HEADERS
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();
    for (name, value) in overrides {
        match merged.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
            Some(slot) => *slot = (name.clone(), value.clone()),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

/// `Ok` for 2xx statuses, otherwise [`ApiError::Status`] carrying `body`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any status outside `200..=299`.
pub fn check_status(status: u16, body: String) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, body })
    }
}

/// Send a request and decode the JSON response body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx responses (carrying the body
/// text), [`ApiError::Decode`] for unparseable bodies and
/// [`ApiError::Network`] when no response arrives.
pub async fn request<T: DeserializeOwned>(url: &str, options: RequestOptions) -> Result<T, ApiError> {
    let result = send(url, options).await;
    if let Err(e) = &result {
        leptos::logging::error!("API request failed: {e}");
    }
    result
}

async fn send<T: DeserializeOwned>(url: &str, options: RequestOptions) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::RequestBuilder;

        let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
        let method = match options.method {
            Method::Get => gloo_net::http::Method::GET,
            Method::Post => gloo_net::http::Method::POST,
            Method::Put => gloo_net::http::Method::PUT,
            Method::Delete => gloo_net::http::Method::DELETE,
        };
        let mut builder = RequestBuilder::new(url).method(method);
        for (name, value) in merge_headers(&options.headers) {
            builder = builder.header(&name, &value);
        }
        let req = match options.body {
            Some(body) => builder.body(body).map_err(network)?,
            None => builder.build().map_err(network)?,
        };
        let resp = req.send().await.map_err(network)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            check_status(resp.status(), body)?;
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, options);
        Err(ApiError::Unavailable)
    }
}

/// `GET url`.
///
/// # Errors
///
/// See [`request`].
pub async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    request(url, RequestOptions::new(Method::Get)).await
}

/// `POST url` with `data` as the JSON body.
///
/// # Errors
///
/// See [`request`]; also [`ApiError::Encode`].
pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(url: &str, data: &B) -> Result<T, ApiError> {
    request(url, RequestOptions::new(Method::Post).json(data)?).await
}

/// `PUT url` with `data` as the JSON body.
///
/// # Errors
///
/// See [`request`]; also [`ApiError::Encode`].
pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(url: &str, data: &B) -> Result<T, ApiError> {
    request(url, RequestOptions::new(Method::Put).json(data)?).await
}

/// `DELETE url`.
///
/// # Errors
///
/// See [`request`].
pub async fn delete<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    request(url, RequestOptions::new(Method::Delete)).await
}
