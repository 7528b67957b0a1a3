//! The asynchronous effect runner driving the list reducer

use super::types::{reduce, ListEvent, ListState};
use crate::api::Page;
use crate::error::Result;
use async_trait::async_trait;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Source of pages, the seam between the state machine and the network
///
/// Implemented by [`crate::api::PokeApiClient`]; tests substitute mocks.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch at most `limit` full records starting at `offset`
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Page>;
}

#[async_trait]
impl<S: PageSource> PageSource for Arc<S> {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<Page> {
        self.as_ref().fetch_page(offset, limit).await
    }
}

/// Drives one incrementally loaded list
///
/// State mutations happen under a short-lived sync lock that is never held
/// across an await. Guards are engaged before the fetch future is awaited, so
/// an overlapping call observes them and no-ops.
pub struct Pager<S> {
    source: S,
    page_size: u32,
    state: Mutex<ListState>,
}

impl<S: PageSource> Pager<S> {
    /// Create a new pager in the `Uninitialized` state
    pub fn new(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            state: Mutex::new(ListState::Uninitialized),
        }
    }

    /// Page size every request uses
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ListState {
        self.lock().clone()
    }

    /// Perform the initial load: `Uninitialized → Loading → (Loaded | Failed)`
    ///
    /// Also accepted from `Failed` as a retry. A no-op returning the current
    /// snapshot while `Loading` or `Loaded`, so callers cannot wipe a live
    /// list by re-triggering initialization.
    pub async fn initialize(&self) -> ListState {
        {
            let mut state = self.lock();
            match &*state {
                ListState::Uninitialized | ListState::Failed(_) => {
                    apply(
                        &mut state,
                        ListEvent::LoadStarted {
                            page_size: self.page_size,
                        },
                    );
                }
                _ => return state.clone(),
            }
        }

        match self.source.fetch_page(0, self.page_size).await {
            Ok(page) => self.dispatch(ListEvent::PageLoaded(page)),
            Err(err) => self.dispatch(ListEvent::LoadFailed(Arc::new(err))),
        }
    }

    /// Request the next page: `Loaded → Loaded`
    ///
    /// A no-op returning the current snapshot when the in-flight guard is
    /// already engaged or the list is not loaded. The guard is engaged under
    /// the lock before any await, so two overlapping calls issue exactly one
    /// `fetch_page`.
    pub async fn load_more(&self) -> ListState {
        let next_offset = {
            let mut state = self.lock();
            match &*state {
                ListState::Loaded(list) if !list.fetching_more => {
                    let offset = list.next_offset;
                    apply(&mut state, ListEvent::MoreRequested);
                    offset
                }
                _ => return state.clone(),
            }
        };

        match self.source.fetch_page(next_offset, self.page_size).await {
            Ok(page) => self.dispatch(ListEvent::MoreLoaded(page)),
            Err(err) => self.dispatch(ListEvent::LoadFailed(Arc::new(err))),
        }
    }

    /// Run one event through the reducer and snapshot the result
    fn dispatch(&self, event: ListEvent) -> ListState {
        let mut state = self.lock();
        apply(&mut state, event);
        state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        // A poisoned lock only means a panic elsewhere; the state itself is
        // still a valid value of the closed enum.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reduce in place under an already-held lock
fn apply(state: &mut MutexGuard<'_, ListState>, event: ListEvent) {
    let prev = mem::replace(&mut **state, ListState::Uninitialized);
    **state = reduce(prev, event);
}

impl<S> std::fmt::Debug for Pager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
