use crate::commands::{CmdMessage, CmdResult, MutationOutcome};
use crate::error::Result;
use crate::index::IndexCache;
use crate::model::CardId;
use crate::store::TreeStore;
use crate::tree;
use tracing::info;

use super::helpers::{commit, load_for_write};

/// Removes a card together with everything below it.
pub fn run<S: TreeStore>(store: &mut S, index: &mut IndexCache, id: CardId) -> Result<CmdResult> {
    let mut forest = load_for_write(store)?;
    let mut result = CmdResult::default();

    let Some(removed) = tree::detach(&mut forest.cards, id) else {
        result.add_message(CmdMessage::error(format!("Card not found: {}", id)));
        return Ok(result.with_outcome(MutationOutcome::NotFound(id)));
    };

    commit(store, index, &forest)?;

    let count = 1 + tree::count(&removed.children);
    info!(id, removed = count, "card deleted");

    result.add_message(CmdMessage::success(if count > 1 {
        format!(
            "Card deleted ({}): {} and {} nested card(s)",
            id,
            removed.name,
            count - 1
        )
    } else {
        format!("Card deleted ({}): {}", id, removed.name)
    }));
    Ok(result
        .with_outcome(MutationOutcome::Deleted { id, removed: count })
        .with_affected_cards(vec![removed]))
}
