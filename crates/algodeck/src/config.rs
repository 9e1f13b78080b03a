//! # Configuration
//!
//! Stored as `config.json` in the data directory. A missing file means
//! defaults. Only browsing defaults live here: the page size and sort order
//! a fresh session starts with.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `items-per-page` | `12` | Cards per page; one of 6, 12, 24, 48 |
//! | `sort-by` | `alphabetical` | Initial sort: alphabetical, difficulty, date, classification |

use crate::error::{DeckError, Result};
use crate::filter::SortOption;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, ITEMS_PER_PAGE_CHOICES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 2] = ["items-per-page", "sort-by"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    #[serde(default)]
    pub sort_by: SortOption,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            sort_by: SortOption::default(),
        }
    }
}

impl DeckConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DeckError::Io)?;
        let config: DeckConfig =
            serde_json::from_str(&content).map_err(DeckError::Serialization)?;
        if !ITEMS_PER_PAGE_CHOICES.contains(&config.items_per_page) {
            log::warn!(
                "ignoring items_per_page {} in {}",
                config.items_per_page,
                config_path.display()
            );
            return Ok(Self {
                items_per_page: DEFAULT_ITEMS_PER_PAGE,
                ..config
            });
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DeckError::Serialization)?;
        fs::write(config_path, content).map_err(DeckError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "items-per-page" => Some(self.items_per_page.to_string()),
            "sort-by" => Some(self.sort_by.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. Errors are user-facing messages.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "items-per-page" => {
                let n: usize = value
                    .parse()
                    .map_err(|_| format!("items-per-page must be a number, got {}", value))?;
                if !ITEMS_PER_PAGE_CHOICES.contains(&n) {
                    return Err(DeckError::InvalidPageSize(n).to_string());
                }
                self.items_per_page = n;
                Ok(())
            }
            "sort-by" => {
                self.sort_by = value.parse::<SortOption>().map_err(|e| e.to_string())?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = DeckConfig::default();
        assert_eq!(config.items_per_page, 12);
        assert_eq!(config.sort_by, SortOption::Alphabetical);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = DeckConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = DeckConfig::default();
        config.set("items-per-page", "24").unwrap();
        config.set("sort-by", "date").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = DeckConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.items_per_page, 24);
        assert_eq!(loaded.sort_by, SortOption::Date);
        assert_eq!(loaded.get("sort-by").as_deref(), Some("date"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = DeckConfig::default();
        assert!(config.set("items-per-page", "7").is_err());
        assert!(config.set("items-per-page", "many").is_err());
        assert!(config.set("sort-by", "random").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_load_falls_back_on_disallowed_page_size() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"items_per_page": 13, "sort_by": "difficulty"}"#,
        )
        .unwrap();
        let loaded = DeckConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.items_per_page, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(loaded.sort_by, SortOption::Difficulty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        assert_eq!(DeckConfig::load(dir.path()).unwrap(), DeckConfig::default());
    }
}
