use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;

pub fn run<S: CardStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let card = store.get_card(id)?;
    store.delete_card(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Card deleted ({}): {}",
        card.id, card.title
    )));
    Ok(result.with_affected_cards(vec![card]))
}
