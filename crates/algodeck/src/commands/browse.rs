//! Browsing: the full pipeline from store to visible page.
//!
//! Every call starts from a fresh `list_cards`, so the result always
//! reflects the current collection and the current filter state.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterState};
use crate::pagination::{self, PageLink, PaginationState};
use crate::store::CardStore;
use serde::Serialize;

/// Counters and links for a page control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub start_item: usize,
    pub end_item: usize,
    pub links: Vec<PageLink>,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn run<S: CardStore>(
    store: &S,
    filters: &FilterState,
    pagination: &PaginationState,
) -> Result<CmdResult> {
    let cards = store.list_cards()?;
    let filtered = filter::apply(&cards, filters);

    let page = pagination.current_page();
    let page_size = pagination.items_per_page();
    let window = pagination::slice(&filtered, page, page_size);

    let summary = PageSummary {
        total_items: window.total_items,
        total_pages: window.total_pages,
        current_page: page,
        page_size,
        start_item: window.start_item,
        end_item: window.end_item,
        links: pagination::page_links(window.total_pages, page),
        has_previous: pagination.has_previous(),
        has_next: pagination.has_next(window.total_pages),
    };

    let mut result = CmdResult::default().with_listed_cards(window.items.to_vec());
    if summary.total_items == 0 {
        result.add_message(CmdMessage::info("No cards found matching your filters."));
    } else if page == 0 {
        result.add_message(CmdMessage::warning("Pages start at 1"));
    } else if window.items.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the last page ({})",
            page, summary.total_pages
        )));
    }
    Ok(result.with_page(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::filter::{FilterController, FilterUpdate, SortOption};
    use crate::model::{Card, Classification, Difficulty};
    use crate::store::memory::fixtures::StoreFixture;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result.listed_cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn second_page_of_37_cards() {
        let fixture = StoreFixture::new().with_cards(37);
        let mut pagination = PaginationState::default();
        pagination.go_to(2);

        let result = run(&fixture.store, &FilterState::default(), &pagination).unwrap();
        let page = result.page.as_ref().unwrap();

        assert_eq!(result.listed_cards.len(), 12);
        assert_eq!(result.listed_cards[0].id, "card-13");
        assert_eq!(page.start_item, 13);
        assert_eq!(page.end_item, 24);
        assert_eq!(page.total_items, 37);
        assert_eq!(page.total_pages, 4);
        assert!(page.has_previous);
        assert!(page.has_next);
        assert_eq!(
            page.links,
            vec![
                PageLink::Page(1),
                PageLink::Page(2),
                PageLink::Page(3),
                PageLink::Page(4)
            ]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_then_sorts_before_paginating() {
        let fixture = StoreFixture::new()
            .with_card(
                Card::new("g", "Graph", Classification::DataStructures)
                    .with_difficulty(Difficulty::Hard),
            )
            .with_card(
                Card::new("a", "Array", Classification::DataStructures)
                    .with_difficulty(Difficulty::Easy),
            )
            .with_card(
                Card::new("q", "Quick Sort", Classification::Sorts)
                    .with_difficulty(Difficulty::Medium),
            );

        let mut controller = FilterController::new();
        controller.update(
            FilterUpdate::new()
                .classifications(vec![Classification::DataStructures])
                .sort_by(SortOption::Difficulty),
        );

        let result = run(
            &fixture.store,
            controller.state(),
            &PaginationState::default(),
        )
        .unwrap();
        assert_eq!(ids(&result), vec!["a", "g"]);
        assert_eq!(result.page.unwrap().total_items, 2);
    }

    #[test]
    fn empty_result_reports_no_matches() {
        let fixture = StoreFixture::new().with_cards(3);
        let mut controller = FilterController::new();
        controller.update(FilterUpdate::new().search("nothing like this"));

        let result = run(
            &fixture.store,
            controller.state(),
            &PaginationState::default(),
        )
        .unwrap();
        let page = result.page.as_ref().unwrap();

        assert!(result.listed_cards.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.start_item, 0);
        assert_eq!(page.end_item, 0);
        assert!(page.links.is_empty());
        assert!(!page.has_next);
        assert_eq!(
            result.messages[0].content,
            "No cards found matching your filters."
        );
    }

    #[test]
    fn page_past_the_end_is_empty_with_warning() {
        let fixture = StoreFixture::new().with_cards(5);
        let mut pagination = PaginationState::default();
        pagination.go_to(3);

        let result = run(&fixture.store, &FilterState::default(), &pagination).unwrap();
        assert!(result.listed_cards.is_empty());
        assert_eq!(result.page.as_ref().unwrap().total_pages, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            result.messages[0].content,
            "Page 3 is past the last page (1)"
        );
    }

    #[test]
    fn page_zero_is_empty_without_claiming_past_the_end() {
        let fixture = StoreFixture::new().with_cards(5);
        let mut pagination = PaginationState::default();
        pagination.go_to(0);

        let result = run(&fixture.store, &FilterState::default(), &pagination).unwrap();
        assert!(result.listed_cards.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Pages start at 1");
    }

    #[test]
    fn browse_sees_store_changes() {
        let mut fixture = StoreFixture::new().with_cards(2);
        let before = run(
            &fixture.store,
            &FilterState::default(),
            &PaginationState::default(),
        )
        .unwrap();
        assert_eq!(before.listed_cards.len(), 2);

        fixture
            .store
            .save_card(&Card::new("new", "Another", Classification::Heuristics))
            .unwrap();
        let after = run(
            &fixture.store,
            &FilterState::default(),
            &PaginationState::default(),
        )
        .unwrap();
        assert_eq!(ids(&after), vec!["new", "card-01", "card-02"]);
    }
}
