//! Transport boundary between the services and the network.
use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// HTTP method subset the game API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Object-safe async boundary for issuing API calls.
///
/// Production code uses [`HttpTransport`]; tests inject scripted
/// implementations to drive the orchestrator without a network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request against a path relative to the API root and return
    /// the parsed JSON payload.
    async fn call(&self, method: Method, path: &str) -> Result<Value>;
}

/// reqwest-backed transport for the live Mugloar API.
///
/// Prefixes every path with `/api/v2` and collapses failures into the flat
/// [`ApiError`] taxonomy: non-2xx becomes [`ApiError::Http`], everything
/// below that becomes [`ApiError::Network`].
pub struct HttpTransport {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/api/v2{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: Method, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        tracing::debug!(?method, %url, "issuing API request");

        let request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };

        let response = request
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
}
