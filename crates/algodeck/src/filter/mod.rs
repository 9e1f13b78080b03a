//! # Filtering and Sorting
//!
//! Two halves:
//!
//! - [`state`]: the session's [`FilterState`] and the [`FilterController`]
//!   that merges partial updates into it.
//! - [`engine`]: the pure `(cards, state) -> cards` pipeline.
//!
//! Nothing here caches. Callers re-run [`engine::apply`] whenever the card
//! collection or the filter state changes.

pub mod engine;
pub mod state;

pub use engine::apply;
pub use state::{FilterController, FilterState, FilterUpdate, SortOption, SORT_OPTIONS};
