use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CardStore;

pub fn run<S: CardStore>(store: &S, id: &str) -> Result<CmdResult> {
    let card = store.get_card(id)?;
    Ok(CmdResult::default().with_listed_cards(vec![card]))
}
