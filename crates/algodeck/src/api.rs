//! # API Facade
//!
//! [`DeckApi`] is the single entry point a UI talks to. It owns one browsing
//! session: the store, the filter state and the page position. Business
//! logic stays in `commands/*.rs`; the facade only dispatches and keeps the
//! session rules:
//!
//! - Any filter change moves back to page 1.
//! - Changing the page size validates it and moves back to page 1.
//! - Nothing derived is cached. Every [`DeckApi::browse`] re-reads the store.
//!
//! ## Generic Over CardStore
//!
//! - Production: `DeckApi<FileStore>`
//! - Testing: `DeckApi<InMemoryStore>`
//!
//! API tests check the session rules and dispatch. Command behavior is
//! tested in the command modules.

use crate::commands::{self, DeckPaths};
use crate::config::DeckConfig;
use crate::error::Result;
use crate::filter::{self, FilterController, FilterState, FilterUpdate};
use crate::model::{Classification, Difficulty};
use crate::pagination::{self, PaginationState};
use crate::store::CardStore;
use std::path::Path;

pub use commands::config::ConfigAction;

pub struct DeckApi<S: CardStore> {
    store: S,
    paths: DeckPaths,
    filters: FilterController,
    pagination: PaginationState,
}

impl<S: CardStore> DeckApi<S> {
    pub fn new(store: S, paths: DeckPaths) -> Self {
        Self {
            store,
            paths,
            filters: FilterController::new(),
            pagination: PaginationState::default(),
        }
    }

    /// Starts a session from the configured page size and sort order.
    pub fn with_config(store: S, paths: DeckPaths, config: &DeckConfig) -> Self {
        let mut api = Self::new(store, paths);
        api.filters
            .update(FilterUpdate::new().sort_by(config.sort_by));
        if let Err(e) = api.pagination.set_items_per_page(config.items_per_page) {
            log::warn!("{e}; keeping {}", api.pagination.items_per_page());
        }
        api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &DeckPaths {
        &self.paths
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn update_filters(&mut self, update: FilterUpdate) {
        self.filters.update(update);
        self.pagination.reset_page();
    }

    pub fn toggle_classification(&mut self, value: Classification) {
        let update = self.filters.toggle_classification(value);
        self.update_filters(update);
    }

    pub fn toggle_difficulty(&mut self, value: Difficulty) {
        let update = self.filters.toggle_difficulty(value);
        self.update_filters(update);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        let update = self.filters.toggle_tag(tag);
        self.update_filters(update);
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.pagination.reset_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        self.pagination.set_items_per_page(items_per_page)
    }

    /// Pages in the current filtered result.
    pub fn total_pages(&self) -> Result<usize> {
        let cards = self.store.list_cards()?;
        let matching = cards
            .iter()
            .filter(|c| filter::engine::matches(c, self.filters.state()))
            .count();
        Ok(pagination::total_pages(
            matching,
            self.pagination.items_per_page(),
        ))
    }

    pub fn next_page(&mut self) -> Result<()> {
        let total = self.total_pages()?;
        self.pagination.next(total);
        Ok(())
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    pub fn browse(&self) -> Result<commands::CmdResult> {
        commands::browse::run(&self.store, self.filters.state(), &self.pagination)
    }

    pub fn view_card(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }

    pub fn import_cards(&mut self, path: &Path, replace: bool) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path, replace)
    }

    pub fn delete_card(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}
