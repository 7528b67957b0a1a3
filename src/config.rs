//! Client configuration
//!
//! A single immutable [`ApiConfig`] is constructed at process start and
//! injected into every client that needs it (list and detail alike). There is
//! no ambient global configuration.

use crate::http::RateLimiterConfig;
use std::time::Duration;

/// Default PokéAPI base URL
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default fan-out width when resolving summary references
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 8;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Number of records requested per page
    pub page_size: u32,
    /// How many summary references are resolved concurrently per page
    pub detail_concurrency: usize,
    /// Rate limiter configuration (None disables throttling)
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("pokedex-core/{}", env!("CARGO_PKG_VERSION")),
            page_size: DEFAULT_PAGE_SIZE,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
            rate_limit: Some(RateLimiterConfig::default()),
        }
    }
}

impl ApiConfig {
    /// Create a new config builder
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }
}

/// Builder for [`ApiConfig`]
#[derive(Default)]
pub struct ApiConfigBuilder {
    config: ApiConfig,
}

impl ApiConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the fan-out width for resolving summary references
    pub fn detail_concurrency(mut self, width: usize) -> Self {
        self.config.detail_concurrency = width;
        self
    }

    /// Set the rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Build the config
    pub fn build(self) -> ApiConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.detail_concurrency, DEFAULT_DETAIL_CONCURRENCY);
        assert!(config.rate_limit.is_some());
    }

    #[test]
    fn test_config_builder() {
        let config = ApiConfig::builder()
            .base_url("https://api.example.com")
            .timeout(Duration::from_secs(5))
            .user_agent("test-agent/1.0")
            .page_size(20)
            .detail_concurrency(2)
            .no_rate_limit()
            .build();

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.detail_concurrency, 2);
        assert!(config.rate_limit.is_none());
    }
}
