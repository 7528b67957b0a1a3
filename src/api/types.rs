//! Typed PokéAPI records
//!
//! Field names follow the upstream JSON schema (snake_case), so plain serde
//! derives decode the payloads directly. Records are immutable once fetched.

use serde::{Deserialize, Serialize};

/// A name plus the URL of the full record
///
/// The listing endpoint returns these summary references; nested objects
/// (stat names, species, ...) use the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Raw body of the listing endpoint (`GET /pokemon?offset&limit`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList {
    /// Total number of records upstream
    pub count: u32,
    /// Upstream URL of the next page, if any
    pub next: Option<String>,
    /// Upstream URL of the previous page, if any
    pub previous: Option<String>,
    /// Ordered summary references for this page
    pub results: Vec<NamedResource>,
}

/// Sprite image URLs for a creature
///
/// Every slot is nullable upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

/// One entry of a creature's stat list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// A full creature record from the detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Unique, stable identity across pages
    pub id: u32,
    pub name: String,
    /// Sort ordering index; -1 upstream for forms that have none
    #[serde(default)]
    pub order: i32,
    pub height: u32,
    pub weight: u32,
    /// Null upstream for some forms
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

impl Pokemon {
    /// Look up a base stat by its upstream name (e.g. `"hp"`)
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|slot| slot.stat.name == name)
            .map(|slot| slot.base_stat)
    }
}

/// One decoded page of full records plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Full records in listing order
    pub items: Vec<Pokemon>,
    /// Total number of records upstream
    pub total_count: u32,
    /// Offset the next page request would use (`offset + limit`, regardless
    /// of how many records this page actually contained)
    pub next_offset: u32,
}

impl Page {
    /// Number of records in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
