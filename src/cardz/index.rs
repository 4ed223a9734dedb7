//! # Search Index
//!
//! An inverted index from lowercase word to the cards whose name or subtitle
//! contain it. The index is a pure function of one forest snapshot: there is no
//! incremental maintenance, every change to the forest is followed by a full
//! [`SearchIndex::build`].
//!
//! ## Tokens
//!
//! A token is a run of Unicode word characters (`\w+`), lowercased. By default
//! only tokens of at least [`DEFAULT_MIN_TOKEN_LEN`] characters are indexed, so
//! "report" is searchable but "q1" and "of" are not. The threshold can be
//! lowered through the `min_token_len` setting.
//!
//! ## Ownership
//!
//! The index has no global home. [`IndexCache`] is held by whoever owns the
//! store (see [`crate::api::CardzApi`]) and is rebuilt explicitly by the
//! commands that change or fully render the forest.

use crate::model::{Card, CardId, CardKind, Forest};
use crate::tree::child_path;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Shortest token that gets indexed.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Splits text into lowercase word tokens, keeping every length.
pub fn tokenize(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    WORD.find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokens worth putting in the index.
pub fn index_tokens(text: &str, min_len: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.chars().count() >= min_len)
        .collect()
}

/// One card as recorded under a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub id: CardId,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub path: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: HashMap<String, Vec<IndexEntry>>,
}

impl SearchIndex {
    pub fn build(forest: &Forest) -> Self {
        Self::build_with(forest, DEFAULT_MIN_TOKEN_LEN)
    }

    pub fn build_with(forest: &Forest, min_token_len: usize) -> Self {
        let mut index = Self::default();
        for card in &forest.cards {
            index.add_card(card, "", min_token_len);
        }
        debug!(tokens = index.entries.len(), "search index rebuilt");
        index
    }

    fn add_card(&mut self, card: &Card, parent_path: &str, min_token_len: usize) {
        let path = child_path(parent_path, &card.name);

        let mut seen = HashSet::new();
        for token in index_tokens(&card.searchable_content(), min_token_len) {
            if !seen.insert(token.clone()) {
                continue;
            }
            self.entries.entry(token).or_default().push(IndexEntry {
                id: card.id,
                name: card.name.clone(),
                subtitle: card.subtitle.clone(),
                kind: card.kind.clone(),
                path: path.clone(),
            });
        }

        for child in &card.children {
            self.add_card(child, &path, min_token_len);
        }
    }

    /// Entries recorded under `token`, in forest pre-order.
    pub fn lookup(&self, token: &str) -> &[IndexEntry] {
        self.entries
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The index owned alongside a store.
#[derive(Debug)]
pub struct IndexCache {
    index: Option<SearchIndex>,
    min_token_len: usize,
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexCache {
    pub fn new() -> Self {
        Self::with_min_token_len(DEFAULT_MIN_TOKEN_LEN)
    }

    pub fn with_min_token_len(min_token_len: usize) -> Self {
        Self {
            index: None,
            min_token_len: min_token_len.max(1),
        }
    }

    /// Unconditionally rebuilds from `forest`.
    pub fn rebuild(&mut self, forest: &Forest) -> &SearchIndex {
        self.index
            .insert(SearchIndex::build_with(forest, self.min_token_len))
    }

    /// Builds only when nothing usable is cached yet.
    pub fn get_or_build(&mut self, forest: &Forest) -> &SearchIndex {
        let stale = self.index.as_ref().map_or(true, SearchIndex::is_empty);
        if stale {
            return self.rebuild(forest);
        }
        self.index.get_or_insert_with(SearchIndex::default)
    }

    pub fn current(&self) -> Option<&SearchIndex> {
        self.index.as_ref()
    }

    pub fn invalidate(&mut self) {
        self.index = None;
    }
}
