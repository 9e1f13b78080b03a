//! Import cards from a JSON file.
//!
//! The file holds a JSON array of cards in the same shape as `cards.json`.
//! The whole file is validated first and then saved as one batch, so either
//! every card lands or none does.

use crate::commands::{plural, CmdMessage, CmdResult};
use crate::error::{DeckError, Result};
use crate::model::Card;
use crate::store::CardStore;
use chrono::{DateTime, NaiveDate};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub fn run<S: CardStore>(store: &mut S, path: &Path, replace: bool) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(DeckError::Io)?;
    let cards: Vec<Card> = serde_json::from_str(&content).map_err(DeckError::Serialization)?;
    log::debug!("read {} cards from {}", cards.len(), path.display());

    validate(store, &cards, replace)?;

    let existing: HashSet<String> = store.list_cards()?.into_iter().map(|c| c.id).collect();
    let replaced = cards.iter().filter(|c| existing.contains(&c.id)).count();
    store.save_cards(&cards)?;

    let mut result = CmdResult::default();

    let added = cards.len() - replaced;
    result.add_message(CmdMessage::success(format!(
        "Imported {} card{} from {}",
        cards.len(),
        plural(cards.len()),
        path.display()
    )));
    if replaced > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} new, {} replaced",
            added, replaced
        )));
    }
    Ok(result.with_affected_cards(cards))
}

fn validate<S: CardStore>(store: &S, cards: &[Card], replace: bool) -> Result<()> {
    let mut seen = HashSet::new();
    for card in cards {
        if card.id.trim().is_empty() {
            return Err(DeckError::Api(format!(
                "Card titled '{}' has an empty id",
                card.title
            )));
        }
        if card.title.trim().is_empty() {
            return Err(DeckError::Api(format!("Card '{}' has an empty title", card.id)));
        }
        if !seen.insert(card.id.as_str()) {
            return Err(DeckError::DuplicateCard(card.id.clone()));
        }
        if !replace && store.contains(&card.id)? {
            return Err(DeckError::DuplicateCard(card.id.clone()));
        }
        if let Some(date) = &card.date_added {
            validate_date(date)?;
        }
    }
    Ok(())
}

/// Accepts a calendar date (`2024-12-28`) or a full RFC 3339 timestamp.
fn validate_date(value: &str) -> Result<()> {
    let parses = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok();
    if parses {
        Ok(())
    } else {
        Err(DeckError::invalid("date", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Classification;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::tempdir;

    fn write_json(dir: &Path, json: &str) -> std::path::PathBuf {
        let path = dir.join("cards.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn imports_new_cards_in_file_order() {
        let dir = tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[
                {"id": "heap", "title": "Heap", "classification": "data-structures",
                 "difficulty": "medium", "code": "", "explanation": "", "tags": ["heap"],
                 "dateAdded": "2025-01-02"},
                {"id": "bfs", "title": "BFS", "classification": "searches",
                 "code": "", "explanation": "", "dateAdded": "2025-01-03T10:00:00Z"}
            ]"#,
        );
        let mut fixture = StoreFixture::new().with_cards(1);

        let result = run(&mut fixture.store, &path, false).unwrap();
        assert_eq!(result.affected_cards.len(), 2);
        let ids: Vec<_> = fixture
            .store
            .list_cards()
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["card-01", "heap", "bfs"]);
    }

    #[test]
    fn existing_id_requires_replace() {
        let dir = tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[{"id": "card-01", "title": "Renamed", "classification": "sorts",
                 "code": "", "explanation": ""}]"#,
        );
        let mut fixture = StoreFixture::new().with_cards(2);

        assert!(matches!(
            run(&mut fixture.store, &path, false),
            Err(DeckError::DuplicateCard(id)) if id == "card-01"
        ));

        let result = run(&mut fixture.store, &path, true).unwrap();
        assert_eq!(result.messages[1].content, "0 new, 1 replaced");
        let card = fixture.store.get_card("card-01").unwrap();
        assert_eq!(card.title, "Renamed");
        assert_eq!(card.classification, Classification::Sorts);
    }

    #[test]
    fn duplicate_within_file_is_rejected_even_with_replace() {
        let dir = tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[{"id": "x", "title": "X", "classification": "sorts", "code": "", "explanation": ""},
                {"id": "x", "title": "X again", "classification": "sorts", "code": "", "explanation": ""}]"#,
        );
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            run(&mut fixture.store, &path, true),
            Err(DeckError::DuplicateCard(_))
        ));
        assert!(fixture.store.list_cards().unwrap().is_empty());
    }

    #[test]
    fn empty_title_and_bad_date_are_rejected() {
        let dir = tempdir().unwrap();
        let mut fixture = StoreFixture::new();

        let path = write_json(
            dir.path(),
            r#"[{"id": "x", "title": " ", "classification": "sorts", "code": "", "explanation": ""}]"#,
        );
        assert!(matches!(
            run(&mut fixture.store, &path, false),
            Err(DeckError::Api(_))
        ));

        let path = write_json(
            dir.path(),
            r#"[{"id": "x", "title": "X", "classification": "sorts", "code": "",
                 "explanation": "", "dateAdded": "last tuesday"}]"#,
        );
        assert!(matches!(
            run(&mut fixture.store, &path, false),
            Err(DeckError::InvalidValue { kind: "date", .. })
        ));
    }

    #[test]
    fn write_failure_leaves_no_partial_import() {
        let dir = tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[{"id": "a", "title": "A", "classification": "sorts", "code": "", "explanation": ""},
                {"id": "b", "title": "B", "classification": "sorts", "code": "", "explanation": ""}]"#,
        );
        let mut fixture = StoreFixture::new().with_cards(1);
        fixture.store.set_simulate_write_error(true);

        assert!(matches!(
            run(&mut fixture.store, &path, false),
            Err(DeckError::Store(_))
        ));
        assert_eq!(fixture.store.list_cards().unwrap().len(), 1);
    }

    #[test]
    fn unknown_classification_fails_to_parse() {
        let dir = tempdir().unwrap();
        let path = write_json(
            dir.path(),
            r#"[{"id": "x", "title": "X", "classification": "graphs", "code": "", "explanation": ""}]"#,
        );
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            run(&mut fixture.store, &path, false),
            Err(DeckError::Serialization(_))
        ));
    }
}
