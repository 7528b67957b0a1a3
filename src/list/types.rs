//! List states, events, and the pure reducer

use crate::api::{Page, Pokemon};
use crate::error::Error;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// State of an incrementally loaded list
#[derive(Debug, Clone)]
pub enum ListState {
    /// No fetch has occurred
    Uninitialized,
    /// Initial fetch in flight
    Loading {
        /// Page size the initial fetch was issued with
        page_size: u32,
    },
    /// At least one page loaded
    Loaded(LoadedList),
    /// A fetch failed; terminal for that load attempt
    Failed(Arc<Error>),
}

impl ListState {
    /// Check if this is a loaded state
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Check if this is a failed state
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The loaded list, if any
    pub fn as_loaded(&self) -> Option<&LoadedList> {
        match self {
            Self::Loaded(list) => Some(list),
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

/// The cumulative collection plus pagination bookkeeping
#[derive(Debug, Clone)]
pub struct LoadedList {
    /// Items unique by id, in fetch arrival order
    pub items: Vec<Pokemon>,
    /// Offset for the next page request
    pub next_offset: u32,
    /// Page size every request uses
    pub page_size: u32,
    /// In-flight guard: true while a page request is outstanding
    pub fetching_more: bool,
}

impl LoadedList {
    /// Append items whose identity is not already present, preserving
    /// first-seen order. Duplicates are dropped entirely, never replaced.
    fn merge(&mut self, page: Page) {
        let mut seen: HashSet<u32> = self.items.iter().map(|p| p.id).collect();
        self.items
            .extend(page.items.into_iter().filter(|p| seen.insert(p.id)));
        // The offset advances by page_size even when the page came back short
        // or empty; callers must tolerate a trailing empty page.
        self.next_offset += self.page_size;
        self.fetching_more = false;
    }
}

/// Events dispatched at the state machine
#[derive(Debug)]
pub enum ListEvent {
    /// Initial fetch started
    LoadStarted {
        /// Page size the fetch was issued with
        page_size: u32,
    },
    /// Initial fetch succeeded
    PageLoaded(Page),
    /// A further page was requested (engages the in-flight guard)
    MoreRequested,
    /// A further page arrived
    MoreLoaded(Page),
    /// Any fetch failed
    LoadFailed(Arc<Error>),
}

/// Pure reducer: apply one event to a state and produce the next state
///
/// Unexpected (state, event) pairs leave the state unchanged.
pub fn reduce(state: ListState, event: ListEvent) -> ListState {
    match (state, event) {
        (ListState::Uninitialized | ListState::Failed(_), ListEvent::LoadStarted { page_size }) => {
            ListState::Loading { page_size }
        }

        (ListState::Loading { page_size }, ListEvent::PageLoaded(page)) => {
            ListState::Loaded(LoadedList {
                items: dedup_by_id(page.items),
                next_offset: page_size,
                page_size,
                fetching_more: false,
            })
        }

        (ListState::Loaded(list), ListEvent::MoreRequested) => {
            if list.fetching_more {
                // Guard already engaged: idempotent no-op.
                ListState::Loaded(list)
            } else {
                ListState::Loaded(LoadedList {
                    fetching_more: true,
                    ..list
                })
            }
        }

        (ListState::Loaded(mut list), ListEvent::MoreLoaded(page)) if list.fetching_more => {
            list.merge(page);
            ListState::Loaded(list)
        }

        // Any failure collapses Loading/Loaded to Failed. Accumulated items
        // are not carried over; Scenario C behavior, see DESIGN.md.
        (ListState::Loading { .. } | ListState::Loaded(_), ListEvent::LoadFailed(err)) => {
            ListState::Failed(err)
        }

        (state, event) => {
            debug!("ignoring event {:?} in state {:?}", event, state);
            state
        }
    }
}

/// Drop duplicate identities, keeping the first occurrence
fn dedup_by_id(items: Vec<Pokemon>) -> Vec<Pokemon> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|p| seen.insert(p.id)).collect()
}
