//! # pokedex-core
//!
//! A typed, async client for the PokéAPI creature catalog plus the pagination
//! engine behind an incrementally loaded list. The crate is
//! presentation-agnostic: it fetches, decodes, and owns list/detail state
//! transitions; rendering, navigation, and image handling are the caller's.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokedex_core::{ApiConfig, ListState, Pager, PokeApiClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // One immutable config, injected into every client.
//!     let config = ApiConfig::default();
//!     let client = PokeApiClient::new(&config)?;
//!
//!     let pager = Pager::new(client, config.page_size);
//!     if let ListState::Loaded(list) = pager.initialize().await {
//!         println!("loaded {} creatures", list.items.len());
//!     }
//!
//!     // As the user nears the end of the visible list:
//!     pager.load_more().await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        callers (UI)                      │
//! │   initialize() / load_more()          load(id)           │
//! └───────────────┬──────────────────────────┬───────────────┘
//!                 │                          │
//!         ┌───────┴────────┐         ┌───────┴────────┐
//!         │  list::Pager   │         │ DetailLoader   │
//!         │ reduce + guard │         │  guard only    │
//!         └───────┬────────┘         └───────┬────────┘
//!                 │  PageSource              │  ItemSource
//!         ┌───────┴──────────────────────────┴───────┐
//!         │              PokeApiClient               │
//!         │   fetch_page / fetch_pokemon / decode    │
//!         └───────────────────┬──────────────────────┘
//!                             │
//!                  http::HttpClient (reqwest)
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Client configuration
pub mod config;

/// HTTP layer (reqwest wrapper, rate limiting)
pub mod http;

/// PokéAPI resource client and record types
pub mod api;

/// Incremental list pagination (reducer + effect runner)
pub mod list;

/// Single-item detail loading
pub mod detail;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{Page, PokeApiClient, Pokemon};
pub use config::ApiConfig;
pub use detail::{DetailLoader, DetailState, ItemSource};
pub use error::{Error, Result};
pub use list::{reduce, ListEvent, ListState, LoadedList, PageSource, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
