//! Distinct tags across the collection.

use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Lists every tag in use, sorted by name, with the number of cards carrying it.
pub fn run<S: CardStore>(store: &S) -> Result<CmdResult> {
    let cards = store.list_cards()?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for card in &cards {
        let distinct: BTreeSet<&str> = card.tags.iter().map(String::as_str).collect();
        for tag in distinct {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut result = CmdResult::default();
    if counts.is_empty() {
        result.add_message(CmdMessage::info("No tags in use"));
        return Ok(result);
    }

    result.tags = counts
        .into_iter()
        .map(|(name, count)| TagCount {
            name: name.to_string(),
            count,
        })
        .collect();
    let total = result.tags.len();
    result.add_message(CmdMessage::info(format!("{} tag{}", total, plural(total))));
    Ok(result)
}
