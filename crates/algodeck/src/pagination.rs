//! # Pagination Window
//!
//! Maps an ordered result to the slice shown on one page, plus the counters
//! a page control needs ("Showing 13-24 of 37 cards") and the bounded list
//! of page links with ellipses.
//!
//! Pages are 1-based. A page past the end is not an error: it yields an
//! empty slice. Callers that want a non-empty page clamp first.

use crate::error::{DeckError, Result};
use crate::model::Card;
use serde::Serialize;

/// Page sizes a user may pick.
pub const ITEMS_PER_PAGE_CHOICES: [usize; 4] = [6, 12, 24, 48];
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// Link bars with at most this many pages show every page.
const MAX_VISIBLE_LINKS: usize = 5;

/// One entry in a page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// The visible part of an ordered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a> {
    pub items: &'a [Card],
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based index of the first visible item, or 0 for an empty result.
    pub start_item: usize,
    /// 1-based index of the last visible item.
    pub end_item: usize,
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Returns the cards on `page` of `cards` at `page_size` cards per page.
///
/// The visible range is `[(page - 1) * page_size, min(page * page_size, len))`.
/// Page 0 and pages beyond the last one produce an empty slice.
pub fn slice(cards: &[Card], page: usize, page_size: usize) -> PageWindow<'_> {
    let total_items = cards.len();
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = page.saturating_mul(page_size).min(total_items);

    let items = if page == 0 || start >= end {
        &cards[..0]
    } else {
        &cards[start..end]
    };

    PageWindow {
        items,
        total_items,
        total_pages: total_pages(total_items, page_size),
        start_item: if total_items == 0 { 0 } else { start + 1 },
        end_item: end,
    }
}

/// Page links for a control showing `current_page` of `total_pages`.
///
/// Up to five pages are listed in full. Beyond that the first and last
/// pages are always present and the gap is bridged with [`PageLink::Ellipsis`].
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<PageLink> {
    if total_pages <= MAX_VISIBLE_LINKS {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let mut links = Vec::with_capacity(7);
    if current_page <= 3 {
        links.extend((1..=4).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total_pages - 3..=total_pages).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current_page - 1..=current_page + 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    }
    links
}

/// Page position owned by the presentation side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PaginationState {
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Jumps to `page` as given. No clamping; see [`slice`].
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Changes the page size and goes back to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        if !ITEMS_PER_PAGE_CHOICES.contains(&items_per_page) {
            return Err(DeckError::InvalidPageSize(items_per_page));
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        Ok(())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.has_next(total_pages) {
            self.current_page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Classification;
    use proptest::prelude::*;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("c{i}"), format!("Card {i}"), Classification::Patterns))
            .collect()
    }

    #[test]
    fn first_page_of_37() {
        let all = cards(37);
        let window = slice(&all, 1, 12);
        assert_eq!(window.items.len(), 12);
        assert_eq!(window.start_item, 1);
        assert_eq!(window.end_item, 12);
        assert_eq!(window.total_pages, 4);
        assert_eq!(window.items[0].id, "c0");
    }

    #[test]
    fn last_partial_page_of_37() {
        let all = cards(37);
        let window = slice(&all, 4, 12);
        assert_eq!(window.items.len(), 1);
        assert_eq!(window.start_item, 37);
        assert_eq!(window.end_item, 37);
        assert_eq!(window.items[0].id, "c36");
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let all = cards(37);
        assert!(slice(&all, 5, 12).items.is_empty());
        assert!(slice(&all, 0, 12).items.is_empty());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let window = slice(&[], 1, 12);
        assert!(window.items.is_empty());
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.start_item, 0);
        assert_eq!(window.end_item, 0);
    }

    #[test]
    fn links_show_everything_up_to_five_pages() {
        use PageLink::Page;
        assert!(page_links(0, 1).is_empty());
        assert_eq!(page_links(3, 2), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_links(5, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn links_window_near_start_middle_and_end() {
        use PageLink::{Ellipsis, Page};
        assert_eq!(
            page_links(10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_links(10, 5),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_links(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn links_boundaries() {
        use PageLink::{Ellipsis, Page};
        // current 3 still uses the leading block
        assert_eq!(
            page_links(6, 3),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
        );
        // current 4 of 6 is >= total - 2
        assert_eq!(
            page_links(6, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(
            page_links(7, 4),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(7)]
        );
    }

    #[test]
    fn items_per_page_must_be_allowed_and_resets_page() {
        let mut state = PaginationState::default();
        state.go_to(3);
        state.set_items_per_page(24).unwrap();
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.items_per_page(), 24);

        match state.set_items_per_page(10) {
            Err(DeckError::InvalidPageSize(10)) => {}
            other => panic!("Expected InvalidPageSize, got {:?}", other),
        }
        assert_eq!(state.items_per_page(), 24);
    }

    #[test]
    fn previous_and_next_stay_in_range() {
        let mut state = PaginationState::default();
        state.previous();
        assert_eq!(state.current_page(), 1);
        state.next(2);
        assert_eq!(state.current_page(), 2);
        state.next(2);
        assert_eq!(state.current_page(), 2);
        assert!(state.has_previous());
        assert!(!state.has_next(2));
    }

    proptest! {
        #[test]
        fn pages_cover_every_item_once(len in 0usize..120, size_idx in 0usize..4) {
            let size = ITEMS_PER_PAGE_CHOICES[size_idx];
            let all = cards(len);
            let pages = total_pages(len, size);
            let mut seen = Vec::new();
            for page in 1..=pages {
                let window = slice(&all, page, size);
                prop_assert!(!window.items.is_empty());
                prop_assert!(window.items.len() <= size);
                prop_assert_eq!(window.end_item - window.start_item + 1, window.items.len());
                seen.extend(window.items.iter().map(|c| c.id.clone()));
            }
            prop_assert!(slice(&all, pages + 1, size).items.is_empty());
            let expected: Vec<String> = all.iter().map(|c| c.id.clone()).collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn link_bars_are_well_formed(total in 0usize..40, current_seed in 0usize..40) {
            let current = if total == 0 { 1 } else { current_seed % total + 1 };
            let links = page_links(total, current);
            prop_assert!(links.len() <= 7);
            for pair in links.windows(2) {
                prop_assert!(!(pair[0] == PageLink::Ellipsis && pair[1] == PageLink::Ellipsis));
                if let (PageLink::Page(a), PageLink::Page(b)) = (pair[0], pair[1]) {
                    prop_assert_eq!(b, a + 1);
                }
            }
            if total > 0 {
                prop_assert_eq!(links.first(), Some(&PageLink::Page(1)));
                prop_assert_eq!(links.last(), Some(&PageLink::Page(total)));
                prop_assert!(links.contains(&PageLink::Page(current)));
            }
        }
    }
}
