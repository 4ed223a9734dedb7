use super::{parse_document, render_document, Loaded, TreeStore};
use crate::error::Result;
use crate::model::Forest;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The forest is kept serialized, so it goes through the same parse path as a
/// file on disk (and can be made corrupt on purpose).
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose document is `raw`, verbatim.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            document: Some(raw.into()),
            saves: 0,
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn raw(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl TreeStore for InMemoryStore {
    fn load(&self) -> Result<Loaded> {
        Ok(match &self.document {
            Some(text) => parse_document(text),
            None => Loaded::missing(),
        })
    }

    fn save(&mut self, forest: &Forest) -> Result<()> {
        self.document = Some(render_document(forest, false)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Card, CardDraft, CardId};
    use crate::tree;

    pub struct StoreFixture {
        pub forest: Forest,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                forest: Forest::default(),
            }
        }

        pub fn with_root(mut self, id: CardId, name: &str, subtitle: &str) -> Self {
            self.forest
                .cards
                .push(Card::new(id, CardDraft::new(name).with_subtitle(subtitle)));
            self
        }

        pub fn with_child(mut self, parent: CardId, id: CardId, name: &str) -> Self {
            let card = Card::new(id, CardDraft::new(name).under(parent));
            tree::find_mut(&mut self.forest.cards, parent)
                .unwrap()
                .children
                .push(card);
            self
        }

        pub fn with_roots(mut self, count: usize) -> Self {
            let start = tree::max_id(&self.forest.cards).unwrap_or(0);
            for i in 1..=count as CardId {
                let id = start + i;
                let card = Card::new(
                    id,
                    CardDraft::new(format!("Test Card {}", id))
                        .with_subtitle(format!("Subtitle for card {}", id)),
                );
                self.forest.cards.push(card);
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            store.save(&self.forest).unwrap();
            store.saves = 0;
            store
        }
    }
}
