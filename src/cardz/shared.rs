//! A `CardzApi` that can be handed to several threads.
//!
//! Every call takes one lock around the whole load/mutate/save/reindex sequence,
//! so two concurrent creates never mint the same id and a search never sees an
//! index that is half rebuilt.

use crate::api::{CardzApi, ConfigAction};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{CardDraft, CardId, CardPatch};
use crate::search::SearchOutcome;
use crate::store::TreeStore;
use parking_lot::Mutex;
use std::sync::Arc;

pub struct SharedCardz<S: TreeStore> {
    inner: Arc<Mutex<CardzApi<S>>>,
}

impl<S: TreeStore> Clone for SharedCardz<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TreeStore> SharedCardz<S> {
    pub fn new(api: CardzApi<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(api)),
        }
    }

    pub fn create_card(&self, draft: CardDraft) -> Result<CmdResult> {
        self.inner.lock().create_card(draft)
    }

    pub fn update_card(&self, id: CardId, patch: &CardPatch) -> Result<CmdResult> {
        self.inner.lock().update_card(id, patch)
    }

    pub fn delete_card(&self, id: CardId) -> Result<CmdResult> {
        self.inner.lock().delete_card(id)
    }

    pub fn list_cards(&self) -> Result<CmdResult> {
        self.inner.lock().list_cards()
    }

    pub fn view_card(&self, id: CardId) -> Result<CmdResult> {
        self.inner.lock().view_card(id)
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        self.inner.lock().search(query)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        self.inner.lock().doctor()
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        self.inner.lock().config(action)
    }

    /// Runs `f` with exclusive access to the underlying API.
    pub fn with_api<T>(&self, f: impl FnOnce(&mut CardzApi<S>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
