use crate::commands::{CmdMessage, CmdResult, MutationOutcome};
use crate::error::{CardzError, Result};
use crate::index::IndexCache;
use crate::model::{CardId, CardPatch};
use crate::store::TreeStore;
use crate::tree;
use tracing::info;

use super::helpers::{commit, load_for_write};

pub fn run<S: TreeStore>(
    store: &mut S,
    index: &mut IndexCache,
    id: CardId,
    patch: &CardPatch,
) -> Result<CmdResult> {
    if matches!(&patch.name, Some(name) if name.trim().is_empty()) {
        return Err(CardzError::Api("Card name cannot be empty".into()));
    }

    let mut forest = load_for_write(store)?;
    let mut result = CmdResult::default();

    let Some(card) = tree::find_mut(&mut forest.cards, id) else {
        result.add_message(CmdMessage::error(format!("Card not found: {}", id)));
        return Ok(result.with_outcome(MutationOutcome::NotFound(id)));
    };
    patch.apply(card);
    let updated = card.clone();

    commit(store, index, &forest)?;
    info!(id, "card updated");

    result.add_message(CmdMessage::success(format!(
        "Card updated ({}): {}",
        id, updated.name
    )));
    Ok(result
        .with_outcome(MutationOutcome::Updated(id))
        .with_affected_cards(vec![updated]))
}
