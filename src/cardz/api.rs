//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all cardz operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the search index cache**, so every mutation refreshes it and every
//!   search can reuse it
//! - **Applies configuration** (id strategy, result cap, token threshold)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//!
//! ## Generic Over TreeStore
//!
//! `CardzApi<S: TreeStore>` is generic over the storage backend:
//! - Production: `CardzApi<FileStore>`
//! - Testing: `CardzApi<InMemoryStore>`
//!
//! A `CardzApi` takes `&mut self` for anything that may touch the index. Callers
//! that share one instance across threads go through [`crate::shared::SharedCardz`].

use crate::commands;
use crate::config::CardzConfig;
use crate::error::Result;
use crate::index::IndexCache;
use crate::model::{CardDraft, CardId, CardPatch};
use crate::search::SearchOutcome;
use crate::store::TreeStore;

/// The main API facade for cardz operations.
pub struct CardzApi<S: TreeStore> {
    store: S,
    index: IndexCache,
    config: CardzConfig,
    paths: commands::CardzPaths,
}

impl<S: TreeStore> CardzApi<S> {
    pub fn new(store: S, paths: commands::CardzPaths, config: CardzConfig) -> Self {
        Self {
            store,
            index: IndexCache::with_min_token_len(config.min_token_len),
            config,
            paths,
        }
    }

    pub fn create_card(&mut self, draft: CardDraft) -> Result<commands::CmdResult> {
        commands::create::run(
            &mut self.store,
            &mut self.index,
            self.config.id_strategy,
            draft,
        )
    }

    pub fn update_card(&mut self, id: CardId, patch: &CardPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &mut self.index, id, patch)
    }

    pub fn delete_card(&mut self, id: CardId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.index, id)
    }

    pub fn list_cards(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &mut self.index)
    }

    pub fn view_card(&mut self, id: CardId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, &mut self.index, id)
    }

    pub fn search_cards(&mut self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(
            &self.store,
            &mut self.index,
            query,
            self.config.max_results,
        )
    }

    /// Just the search payload.
    pub fn search(&mut self, query: &str) -> Result<SearchOutcome> {
        let result = self.search_cards(query)?;
        Ok(result
            .search
            .unwrap_or_else(|| SearchOutcome::empty(query.trim())))
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store, &mut self.index)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::CardzPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CardzPaths, CmdMessage, CmdResult, MessageLevel, MutationOutcome, MutationReply,
};
