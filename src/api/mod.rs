//! PokéAPI resource client
//!
//! Issues paged fetches against the listing endpoint and single-item fetches
//! against the detail endpoint, decoding responses into typed records. The
//! listing endpoint returns summary references; [`PokeApiClient::fetch_page`]
//! resolves them into full records before handing a [`Page`] to the caller.

mod client;
mod types;

pub use client::PokeApiClient;
pub use types::{NamedResource, Page, Pokemon, ResourceList, Sprites, StatSlot};
