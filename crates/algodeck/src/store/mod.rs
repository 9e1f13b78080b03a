//! # Storage Layer
//!
//! The card collection lives behind the [`CardStore`] trait so the browsing
//! logic never depends on where cards come from.
//!
//! ## Contract
//!
//! - [`CardStore::list_cards`] returns the full collection in a stable
//!   source order. Sorting is stable, so this order breaks ties between
//!   cards with equal sort keys.
//! - Saving an existing id replaces that card in place; a new id is
//!   appended.
//! - [`CardStore::save_cards`] is all or nothing: on error no card of the
//!   batch is written.
//! - There is no change feed. Anything that mutates the store is expected
//!   to re-list and recompute; the browsing layer keeps no derived state.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `cards.json` in the data directory.
//! - [`memory::InMemoryStore`]: for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── cards.json      # JSON array of cards, in source order
//! └── config.json     # DeckConfig
//! ```

use crate::error::Result;
use crate::model::Card;

pub mod fs;
pub mod memory;

/// Abstract interface for card storage.
pub trait CardStore {
    /// All cards, in source order.
    fn list_cards(&self) -> Result<Vec<Card>>;

    /// One card by id.
    fn get_card(&self, id: &str) -> Result<Card>;

    /// Insert a new card or replace the card with the same id.
    fn save_card(&mut self, card: &Card) -> Result<()>;

    /// Save a batch of cards in one write, in order.
    fn save_cards(&mut self, cards: &[Card]) -> Result<()>;

    /// Remove a card permanently.
    fn delete_card(&mut self, id: &str) -> Result<()>;

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.list_cards()?.iter().any(|c| c.id == id))
    }
}

/// Replaces the card with `card.id` in `cards`, or appends it.
pub(crate) fn upsert(cards: &mut Vec<Card>, card: &Card) {
    match cards.iter_mut().find(|c| c.id == card.id) {
        Some(existing) => *existing = card.clone(),
        None => cards.push(card.clone()),
    }
}
