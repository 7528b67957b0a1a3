//! The PokéAPI client

use super::types::{Page, Pokemon, ResourceList};
use crate::config::ApiConfig;
use crate::detail::ItemSource;
use crate::error::Result;
use crate::http::HttpClient;
use crate::list::PageSource;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

/// Client for the PokéAPI listing and detail endpoints
///
/// Construct one per process from an injected [`ApiConfig`] and share it; the
/// underlying connection pool and rate limiter are per-instance.
#[derive(Debug)]
pub struct PokeApiClient {
    http: HttpClient,
    detail_concurrency: usize,
}

impl PokeApiClient {
    /// Create a new client from the given configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
            detail_concurrency: config.detail_concurrency.max(1),
        })
    }

    /// Fetch one page of full records
    ///
    /// Lists at most `limit` summary references starting at `offset`, then
    /// resolves each reference into a full record. Resolution fans out with
    /// bounded concurrency but preserves listing order. The first failed
    /// resolution fails the whole page.
    pub async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Page> {
        let list: ResourceList = self
            .http
            .get_json_with_query(
                "pokemon",
                &[("offset", offset.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        debug!(
            "page offset={} limit={} returned {} references (count={})",
            offset,
            limit,
            list.results.len(),
            list.count
        );

        let fetches: Vec<_> = list.results.iter().map(|r| self.resolve(&r.url)).collect();
        let items: Vec<Pokemon> = stream::iter(fetches)
            .buffered(self.detail_concurrency)
            .try_collect()
            .await?;

        Ok(Page {
            items,
            total_count: list.count,
            next_offset: offset + limit,
        })
    }

    /// Fetch a single record by identity
    pub async fn fetch_pokemon(&self, id: u32) -> Result<Pokemon> {
        self.http.get_json(&format!("pokemon/{id}")).await
    }

    /// Resolve a summary reference into a full record
    async fn resolve(&self, url: &str) -> Result<Pokemon> {
        self.http.get_json(url).await
    }
}

#[async_trait]
impl PageSource for PokeApiClient {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Page> {
        PokeApiClient::fetch_page(self, offset, limit).await
    }
}

#[async_trait]
impl ItemSource for PokeApiClient {
    async fn fetch_item(&self, id: u32) -> Result<Pokemon> {
        self.fetch_pokemon(id).await
    }
}
