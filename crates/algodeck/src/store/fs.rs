use super::{upsert, CardStore};
use crate::error::{DeckError, Result};
use crate::model::Card;
use std::fs;
use std::path::{Path, PathBuf};

const CARDS_FILENAME: &str = "cards.json";

/// Card storage backed by a single `cards.json` file.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cards_path(&self) -> PathBuf {
        self.root.join(CARDS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DeckError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Card>> {
        let path = self.cards_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(DeckError::Io)?;
        let cards: Vec<Card> = serde_json::from_str(&content).map_err(DeckError::Serialization)?;
        log::debug!("loaded {} cards from {}", cards.len(), path.display());
        Ok(cards)
    }

    /// Writes to a sibling temp file, then renames over `cards.json`.
    fn write(&self, cards: &[Card]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.cards_path();
        let tmp = self.root.join(format!("{CARDS_FILENAME}.tmp"));
        let content = serde_json::to_string_pretty(cards).map_err(DeckError::Serialization)?;
        fs::write(&tmp, content).map_err(DeckError::Io)?;
        fs::rename(&tmp, &path).map_err(DeckError::Io)?;
        log::debug!("wrote {} cards to {}", cards.len(), path.display());
        Ok(())
    }
}

impl CardStore for FileStore {
    fn list_cards(&self) -> Result<Vec<Card>> {
        self.load()
    }

    fn get_card(&self, id: &str) -> Result<Card> {
        self.load()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DeckError::CardNotFound(id.to_string()))
    }

    fn save_card(&mut self, card: &Card) -> Result<()> {
        let mut cards = self.load()?;
        upsert(&mut cards, card);
        self.write(&cards)
    }

    fn save_cards(&mut self, batch: &[Card]) -> Result<()> {
        let mut cards = self.load()?;
        for card in batch {
            upsert(&mut cards, card);
        }
        self.write(&cards)
    }

    fn delete_card(&mut self, id: &str) -> Result<()> {
        let mut cards = self.load()?;
        let before = cards.len();
        cards.retain(|c| c.id != id);
        if cards.len() == before {
            return Err(DeckError::CardNotFound(id.to_string()));
        }
        self.write(&cards)
    }
}
