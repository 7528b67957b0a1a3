//! HTTP client without retry logic
//!
//! Wraps `reqwest::Client` with:
//! - Base URL joining (absolute URLs pass through untouched)
//! - Optional client-side rate limiting
//! - Error classification into the crate taxonomy
//!
//! Failed requests are surfaced verbatim; retry policy belongs to callers.

use super::rate_limit::RateLimiter;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client bound to a base URL
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client from the given configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
            rate_limiter,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.get_with_query(path, &[]).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.build_url(path);

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Err(Error::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} failed with status {}", url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("GET {} succeeded", url);
        Ok(response)
    }

    /// Make a GET request and decode the JSON response body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_json_with_query(path, &[]).await
    }

    /// Make a GET request with query parameters and decode the JSON response body
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get_with_query(path, query).await?;
        // Read the body as text first so a schema mismatch classifies as a
        // decode error rather than a transport error.
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
