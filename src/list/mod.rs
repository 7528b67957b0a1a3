//! Incremental list pagination
//!
//! The pagination logic is split in two, so it stays unit-testable without a
//! network or a UI:
//!
//! - [`reduce`] is a pure function `(state, event) -> state` over
//!   [`ListState`] and [`ListEvent`]. It owns deduplication, offset
//!   advancement, and the in-flight guard.
//! - [`Pager`] is the asynchronous effect runner. It asks a [`PageSource`]
//!   for pages and dispatches the outcome as events.
//!
//! One `Pager` instance backs one list view. Within a `Loaded` state no two
//! items share an id, and `next_offset` after n successful pages equals
//! n × `page_size`.

mod pager;
mod types;

pub use pager::{PageSource, Pager};
pub use types::{reduce, ListEvent, ListState, LoadedList};
