use crate::catalog::builtin_cards;
use crate::commands::{plural, CmdMessage, CmdResult, DeckPaths};
use crate::error::Result;
use crate::store::CardStore;
use std::fs;

/// Creates the data directory and seeds the built-in catalog into an empty store.
///
/// A store that already holds cards is left alone.
pub fn run<S: CardStore>(store: &mut S, paths: &DeckPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;

    let mut result = CmdResult::default();
    let existing = store.list_cards()?.len();
    if existing > 0 {
        result.add_message(CmdMessage::info(format!(
            "Deck at {} already has {} card{}; nothing seeded",
            paths.data_dir.display(),
            existing,
            plural(existing)
        )));
        return Ok(result);
    }

    let seeded = builtin_cards();
    store.save_cards(&seeded)?;
    log::debug!("seeded {} built-in cards", seeded.len());

    result.add_message(CmdMessage::success(format!(
        "Initialized deck at {} with {} cards",
        paths.data_dir.display(),
        seeded.len()
    )));
    Ok(result.with_affected_cards(seeded))
}
