use crate::commands::CmdResult;
use crate::error::{CardzError, Result};
use crate::index::IndexCache;
use crate::model::CardId;
use crate::store::TreeStore;
use crate::tree;

use super::helpers::load_for_read;

/// One card with its direct children, plus where it sits in the tree.
pub fn run<S: TreeStore>(store: &S, index: &mut IndexCache, id: CardId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let forest = load_for_read(store, &mut result)?;
    index.rebuild(&forest);

    let card = tree::find(&forest.cards, id).ok_or(CardzError::CardNotFound(id))?;
    result.path = tree::path_of(&forest.cards, id);
    Ok(result.with_listed_cards(vec![card.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_card_with_children_and_path() {
        let store = StoreFixture::new()
            .with_root(1, "Reports", "")
            .with_child(1, 2, "Q1")
            .with_child(2, 3, "January")
            .with_child(2, 4, "February")
            .build();
        let mut index = IndexCache::new();

        let result = run(&store, &mut index, 2).unwrap();
        let card = &result.listed_cards[0];
        assert_eq!(card.name, "Q1");
        assert_eq!(card.children.len(), 2);
        assert_eq!(result.path.as_deref(), Some("Reports/Q1"));
    }

    #[test]
    fn unknown_card_is_an_error() {
        let store = StoreFixture::new().with_root(1, "Reports", "").build();
        let mut index = IndexCache::new();

        let err = run(&store, &mut index, 5).unwrap_err();
        assert!(matches!(err, CardzError::CardNotFound(5)));
    }
}
