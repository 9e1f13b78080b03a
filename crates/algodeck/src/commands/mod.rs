//! # Command Layer
//!
//! Each command lives in its own submodule as a plain function over a
//! [`CardStore`](crate::store::CardStore) (or the data directory, for
//! `config` and `init`). Commands hold the business logic and return a
//! [`CmdResult`]; they never print, prompt or pick exit codes. The CLI
//! decides how the result looks.
//!
//! Tests for the browsing behavior live here, against
//! [`InMemoryStore`](crate::store::memory::InMemoryStore).
//!
//! ## Command Modules
//!
//! - [`browse`]: filter, sort and paginate the collection
//! - [`view`]: one card by id
//! - [`tags`]: distinct tags with counts
//! - [`init`]: create the data directory and seed the built-in catalog
//! - [`import`]: load cards from a JSON file
//! - [`delete`]: remove a card
//! - [`config`]: show and change browsing defaults

use crate::config::DeckConfig;
use crate::model::Card;
use serde::Serialize;
use std::path::PathBuf;

pub mod browse;
pub mod config;
pub mod delete;
pub mod import;
pub mod init;
pub mod tags;
pub mod view;

pub use browse::PageSummary;
pub use tags::TagCount;

#[derive(Debug, Clone)]
pub struct DeckPaths {
    pub data_dir: PathBuf,
}

impl DeckPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Cards written or removed by the command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_cards: Vec<Card>,
    /// Cards to show, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_cards: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<DeckConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<Card>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<Card>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_page(mut self, page: PageSummary) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: DeckConfig) -> Self {
        self.config = Some(config);
        self
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
