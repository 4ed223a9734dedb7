use crate::commands::{CmdMessage, CmdResult, MutationOutcome};
use crate::config::IdStrategy;
use crate::error::{CardzError, Result};
use crate::index::IndexCache;
use crate::model::{Card, CardDraft, CardId, Forest};
use crate::store::TreeStore;
use crate::tree;
use tracing::info;

use super::helpers::{commit, load_for_write};

/// Picks the id for the next card and advances the counter when one is kept.
pub fn mint_id(forest: &mut Forest, strategy: IdStrategy) -> Result<CardId> {
    let next_free = successor(tree::max_id(&forest.cards).unwrap_or(0))?;
    match strategy {
        IdStrategy::MaxPlusOne => Ok(next_free),
        IdStrategy::Counter => {
            let id = forest.next_id.unwrap_or(1).max(next_free);
            forest.next_id = Some(successor(id)?);
            Ok(id)
        }
    }
}

fn successor(id: CardId) -> Result<CardId> {
    id.checked_add(1)
        .ok_or_else(|| CardzError::Store("id space exhausted".into()))
}

pub fn run<S: TreeStore>(
    store: &mut S,
    index: &mut IndexCache,
    strategy: IdStrategy,
    draft: CardDraft,
) -> Result<CmdResult> {
    if draft.name.trim().is_empty() {
        return Err(CardzError::Api("Card name cannot be empty".into()));
    }

    let mut forest = load_for_write(store)?;

    if let Some(parent_id) = draft.parent_id {
        if tree::find(&forest.cards, parent_id).is_none() {
            return Err(CardzError::ParentNotFound(parent_id));
        }
    }

    let id = mint_id(&mut forest, strategy)?;
    let card = Card::new(id, draft);

    match card.parent_id {
        Some(parent_id) => {
            let parent = tree::find_mut(&mut forest.cards, parent_id)
                .ok_or(CardzError::ParentNotFound(parent_id))?;
            parent.children.push(card.clone());
        }
        None => forest.cards.push(card.clone()),
    }

    commit(store, index, &forest)?;
    info!(id, parent = ?card.parent_id, "card created");

    let mut result = CmdResult::default()
        .with_outcome(MutationOutcome::Created(id))
        .with_affected_cards(vec![card.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Card created ({}): {}",
        id, card.name
    )));
    Ok(result)
}
