use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::IndexCache;
use crate::search::{search, Query, SearchOutcome};
use crate::store::TreeStore;
use tracing::debug;

use super::helpers::load_for_read;

pub fn run<S: TreeStore>(
    store: &S,
    index: &mut IndexCache,
    query: &str,
    limit: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if Query::parse(query).is_none() {
        debug!(query, "query too short, skipping search");
        return Ok(result.with_search(SearchOutcome::empty(query.trim())));
    }

    let forest = load_for_read(store, &mut result)?;
    let outcome = search(index.get_or_build(&forest), &forest.cards, query, limit);
    debug!(query, hits = outcome.count, "search finished");

    Ok(result.with_search(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::config::IdStrategy;
    use crate::model::CardDraft;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn outcome(result: CmdResult) -> SearchOutcome {
        result.search.unwrap()
    }

    #[test]
    fn builds_index_lazily_on_first_search() {
        let store = StoreFixture::new()
            .with_root(1, "Budget Report", "Annual Report 2024")
            .build();
        let mut index = IndexCache::new();
        assert!(index.current().is_none());

        let found = outcome(run(&store, &mut index, "annual", 20).unwrap());
        assert!(index.current().is_some());
        assert_eq!(found.count, 1);
        assert_eq!(found.results[0].path, "Budget Report");
    }

    #[test]
    fn short_query_does_not_touch_the_index() {
        let store = StoreFixture::new().with_root(1, "Budget Report", "").build();
        let mut index = IndexCache::new();

        let found = outcome(run(&store, &mut index, " a ", 20).unwrap());
        assert_eq!(found.count, 0);
        assert_eq!(found.query, "a");
        assert!(index.current().is_none());
    }

    #[test]
    fn nested_card_reports_full_path() {
        // Two-character names only become searchable with a lower threshold.
        let mut store = InMemoryStore::new();
        let mut index = IndexCache::with_min_token_len(2);
        create::run(
            &mut store,
            &mut index,
            IdStrategy::MaxPlusOne,
            CardDraft::new("Budget Report").with_subtitle("Annual Report 2024"),
        )
        .unwrap();
        create::run(
            &mut store,
            &mut index,
            IdStrategy::MaxPlusOne,
            CardDraft::new("Q1").under(1),
        )
        .unwrap();

        let found = outcome(run(&store, &mut index, "q1", 20).unwrap());
        assert_eq!(found.count, 1);
        assert_eq!(found.results[0].id, 2);
        assert_eq!(found.results[0].path, "Budget Report/Q1");
    }

    #[test]
    fn default_threshold_skips_two_character_words() {
        let store = StoreFixture::new()
            .with_root(1, "Budget Report", "")
            .with_child(1, 2, "Q1")
            .build();
        let mut index = IndexCache::new();

        assert_eq!(outcome(run(&store, &mut index, "q1", 20).unwrap()).count, 0);
    }

    #[test]
    fn respects_limit() {
        let store = StoreFixture::new().with_roots(30).build();
        let mut index = IndexCache::new();

        let found = outcome(run(&store, &mut index, "card", 20).unwrap());
        assert_eq!(found.count, 20);
        let found = outcome(run(&store, &mut index, "card", 5).unwrap());
        assert_eq!(found.count, 5);
    }

    #[test]
    fn corrupt_store_searches_nothing_with_warning() {
        let store = InMemoryStore::with_raw("{{{");
        let mut index = IndexCache::new();

        let result = run(&store, &mut index, "anything", 20).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(outcome(result).count, 0);
    }
}
