//! Single-item detail loading
//!
//! The detail view owns an entirely separate fetch with its own in-flight
//! guard; it never touches the list machine's state.

use crate::api::Pokemon;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Source of single records by identity
///
/// Implemented by [`crate::api::PokeApiClient`]; tests substitute mocks.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch one full record by id
    async fn fetch_item(&self, id: u32) -> Result<Pokemon>;
}

#[async_trait]
impl<S: ItemSource> ItemSource for Arc<S> {
    async fn fetch_item(&self, id: u32) -> Result<Pokemon> {
        self.as_ref().fetch_item(id).await
    }
}

/// State of one detail fetch
#[derive(Debug, Clone)]
pub enum DetailState {
    /// No fetch has occurred
    Idle,
    /// Fetch in flight
    Loading,
    /// Record loaded
    Loaded(Pokemon),
    /// Fetch failed
    Failed(Arc<Error>),
}

impl DetailState {
    /// Check if a fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded record, if any
    pub fn as_loaded(&self) -> Option<&Pokemon> {
        match self {
            Self::Loaded(pokemon) => Some(pokemon),
            _ => None,
        }
    }

    /// The carried error, if any
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Drives one detail view
pub struct DetailLoader<S> {
    source: S,
    state: Mutex<DetailState>,
}

impl<S: ItemSource> DetailLoader<S> {
    /// Create a new loader in the `Idle` state
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(DetailState::Idle),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> DetailState {
        self.lock().clone()
    }

    /// Fetch the record with the given id
    ///
    /// A no-op returning the current snapshot while a fetch is in flight.
    /// Allowed from `Loaded` and `Failed` so a view can refresh or retry.
    pub async fn load(&self, id: u32) -> DetailState {
        {
            let mut state = self.lock();
            if state.is_loading() {
                return state.clone();
            }
            *state = DetailState::Loading;
        }

        let next = match self.source.fetch_item(id).await {
            Ok(pokemon) => DetailState::Loaded(pokemon),
            Err(err) => DetailState::Failed(Arc::new(err)),
        };

        let mut state = self.lock();
        *state = next;
        state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, DetailState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> std::fmt::Debug for DetailLoader<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailLoader").finish_non_exhaustive()
    }
}
