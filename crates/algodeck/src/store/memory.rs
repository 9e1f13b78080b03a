use super::{upsert, CardStore};
use crate::error::{DeckError, Result};
use crate::model::Card;

/// In-memory card storage for tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cards: Vec<Card>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl CardStore for InMemoryStore {
    fn list_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn get_card(&self, id: &str) -> Result<Card> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DeckError::CardNotFound(id.to_string()))
    }

    fn save_card(&mut self, card: &Card) -> Result<()> {
        if self.simulate_write_error {
            return Err(DeckError::Store("Simulated write error".to_string()));
        }
        upsert(&mut self.cards, card);
        Ok(())
    }

    fn save_cards(&mut self, cards: &[Card]) -> Result<()> {
        if self.simulate_write_error {
            return Err(DeckError::Store("Simulated write error".to_string()));
        }
        for card in cards {
            upsert(&mut self.cards, card);
        }
        Ok(())
    }

    fn delete_card(&mut self, id: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(DeckError::Store("Simulated write error".to_string()));
        }
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        if self.cards.len() == before {
            return Err(DeckError::CardNotFound(id.to_string()));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Classification, Difficulty};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` undated pattern cards titled "Card 01", "Card 02", ...
        pub fn with_cards(mut self, count: usize) -> Self {
            for i in 0..count {
                let card = Card::new(
                    format!("card-{:02}", i + 1),
                    format!("Card {:02}", i + 1),
                    Classification::Patterns,
                );
                self.store.save_card(&card).unwrap();
            }
            self
        }

        pub fn with_card(mut self, card: Card) -> Self {
            self.store.save_card(&card).unwrap();
            self
        }

        pub fn with_tagged_card(
            self,
            id: &str,
            classification: Classification,
            difficulty: Option<Difficulty>,
            tags: &[&str],
        ) -> Self {
            let mut card = Card::new(id, id, classification).with_tags(tags.iter().copied());
            card.difficulty = difficulty;
            self.with_card(card)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Classification;

    #[test]
    fn save_appends_then_replaces_in_place() {
        let mut store = InMemoryStore::new();
        store
            .save_card(&Card::new("a", "A", Classification::Sorts))
            .unwrap();
        store
            .save_card(&Card::new("b", "B", Classification::Sorts))
            .unwrap();
        store
            .save_card(&Card::new("a", "A2", Classification::Searches))
            .unwrap();

        let cards = store.list_cards().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "A2");
        assert_eq!(cards[1].id, "b");
    }

    #[test]
    fn delete_not_found() {
        let mut store = InMemoryStore::new();
        match store.delete_card("missing") {
            Err(DeckError::CardNotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("Expected CardNotFound, got {:?}", other),
        }
    }

    #[test]
    fn simulated_write_error_surfaces() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let result = store.save_card(&Card::new("a", "A", Classification::Sorts));
        assert!(matches!(result, Err(DeckError::Store(_))));
        assert!(store.list_cards().unwrap().is_empty());
    }

    #[test]
    fn fixtures_build_in_order() {
        let fixture = StoreFixture::default()
            .with_cards(3)
            .with_tagged_card("tagged", Classification::Heuristics, None, &["greedy"]);
        let cards = fixture.store.list_cards().unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].id, "card-01");
        assert_eq!(cards[3].tags, vec!["greedy"]);
        assert!(fixture.store.contains("card-02").unwrap());
    }
}
