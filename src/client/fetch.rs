//! Null-safe Fetch Layer
//!
//! Transport failures, non-success statuses and undecodable bodies are
//! all reported as [`FetchError`] by a [`JsonSource`], then collapsed to
//! `None` by [`safe_json`] / [`safe_fetch`]. Nothing above this module
//! ever sees an error.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::BackendConfig;

/// HTTP method of a backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A single backend call: method plus absolute URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
        }
    }
}

/// Anything that can answer a [`FetchRequest`] with a JSON body
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn fetch_json(&self, request: &FetchRequest) -> Result<Value, FetchError>;
}

/// Fetch and collapse every failure to `None`.
///
/// A literal `null` body is treated the same as a failure.
pub async fn safe_json(source: &dyn JsonSource, request: &FetchRequest) -> Option<Value> {
    match source.fetch_json(request).await {
        Ok(Value::Null) => {
            tracing::debug!(method = %request.method, url = %request.url, "Backend returned null");
            None
        }
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(method = %request.method, url = %request.url, error = %e, "Backend call failed");
            None
        }
    }
}

/// [`safe_json`] followed by a typed decode; a shape mismatch is also `None`
pub async fn safe_fetch<T: DeserializeOwned>(
    source: &dyn JsonSource,
    request: &FetchRequest,
) -> Option<T> {
    let value = safe_json(source, request).await?;

    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            let e = FetchError::Decode(e.to_string());
            tracing::warn!(method = %request.method, url = %request.url, error = %e, "Unexpected response shape");
            None
        }
    }
}

/// reqwest-backed [`JsonSource`]
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    /// Create a backend with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("regdash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self { client })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self, FetchError> {
        Self::new(Duration::from_secs(config.request_timeout_secs))
    }
}

#[async_trait]
impl JsonSource for HttpBackend {
    async fn fetch_json(&self, request: &FetchRequest) -> Result<Value, FetchError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else if e.is_connect() {
                FetchError::Unavailable
            } else {
                FetchError::Request(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Ways a backend call can fail
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("Invalid JSON: {0}")]
    Decode(String),
}
