//! The filter/sort pipeline.
//!
//! Filtering is conjunctive across dimensions and disjunctive within one:
//! a card survives when it passes every active dimension, and it passes a
//! list dimension by matching any selected value. Sorting is stable, so
//! cards with equal keys keep the order they had in the store.

use super::state::{FilterState, SortOption};
use crate::model::{difficulty_rank, Card};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Filters and sorts `cards` according to `state`. The input is not modified.
pub fn apply(cards: &[Card], state: &FilterState) -> Vec<Card> {
    let query = search_query(state);

    let mut filtered: Vec<Card> = cards
        .iter()
        .filter(|card| matches_classification(card, state))
        .filter(|card| matches_difficulty(card, state))
        .filter(|card| matches_tags(card, state))
        .filter(|card| query.as_deref().is_none_or(|q| matches_query(card, q)))
        .cloned()
        .collect();

    sort_cards(&mut filtered, state.sort_by);

    log::debug!(
        "filtered {} of {} cards (sort: {})",
        filtered.len(),
        cards.len(),
        state.sort_by
    );
    filtered
}

/// Returns true when `card` passes every active filter in `state`.
pub fn matches(card: &Card, state: &FilterState) -> bool {
    let query = search_query(state);
    matches_classification(card, state)
        && matches_difficulty(card, state)
        && matches_tags(card, state)
        && query.as_deref().is_none_or(|q| matches_query(card, q))
}

/// The lower-cased query, or `None` when it is blank. Surrounding
/// whitespace only decides blankness; a non-blank query is matched as typed.
fn search_query(state: &FilterState) -> Option<String> {
    if state.search_query.trim().is_empty() {
        None
    } else {
        Some(state.search_query.to_lowercase())
    }
}

fn matches_classification(card: &Card, state: &FilterState) -> bool {
    state.classifications.is_empty() || state.classifications.contains(&card.classification)
}

// Once a difficulty is selected, cards without one never match.
fn matches_difficulty(card: &Card, state: &FilterState) -> bool {
    if state.difficulties.is_empty() {
        return true;
    }
    card.difficulty
        .is_some_and(|d| state.difficulties.contains(&d))
}

fn matches_tags(card: &Card, state: &FilterState) -> bool {
    state.tags.is_empty() || state.tags.iter().any(|tag| card.tags.contains(tag))
}

/// `query` must already be lower-cased.
fn matches_query(card: &Card, query: &str) -> bool {
    card.title.to_lowercase().contains(query)
        || card.explanation.to_lowercase().contains(query)
        || card.code.to_lowercase().contains(query)
        || card.tags.iter().any(|t| t.to_lowercase().contains(query))
}

/// Stable in-place sort of `cards` by `sort`.
pub fn sort_cards(cards: &mut [Card], sort: SortOption) {
    match sort {
        SortOption::Alphabetical => cards.sort_by(|a, b| locale_cmp(&a.title, &b.title)),
        SortOption::Difficulty => {
            cards.sort_by_key(|card| difficulty_rank(card.difficulty));
        }
        SortOption::Date => cards.sort_by(|a, b| locale_cmp(b.date_key(), a.date_key())),
        SortOption::Classification => cards.sort_by(|a, b| {
            locale_cmp(a.classification.as_str(), b.classification.as_str())
                .then_with(|| locale_cmp(&a.title, &b.title))
        }),
        SortOption::Unsorted => {}
    }
}

/// Collation-style ordering in three levels:
///
/// 1. Base letters, ignoring accents and case ("Dog" < "Élan" < "elk").
/// 2. Accents, unaccented first ("resume" < "résumé").
/// 3. Case, lowercase first ("apple" < "Apple").
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}
