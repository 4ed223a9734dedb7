//! # Ranked Search
//!
//! Candidates come from the inverted index, one query token at a time, and are
//! deduplicated by card id in first-seen order. Each candidate is then scored
//! against its indexed `name subtitle` text:
//!
//! - +1 for every query token that occurs in the text (substring match, so
//!   "port" counts for "report");
//! - +3 for every query token when the whole normalized query occurs in the
//!   text. With a two-word query an exact phrase match is therefore worth +6.
//!
//! Sorting is stable, so equal scores keep candidate order. The list is cut to
//! the configured limit and each hit picks up the card's current `link`, which
//! the index does not store.

use crate::index::{tokenize, IndexEntry, SearchIndex};
use crate::model::{searchable_content, Card, CardId, CardKind};
use crate::tree;
use serde::Serialize;
use std::collections::HashSet;

/// Queries shorter than this (after trimming) return nothing.
pub const MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_MAX_RESULTS: usize = 20;
const PHRASE_BONUS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: CardId,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub path: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub count: usize,
}

impl SearchOutcome {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    fn with_results(query: impl Into<String>, results: Vec<SearchHit>) -> Self {
        Self {
            query: query.into(),
            count: results.len(),
            results,
        }
    }
}

/// A query that passed validation: the folded phrase and its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub phrase: String,
    pub tokens: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Option<Self> {
        let phrase = raw.trim().to_lowercase();
        if phrase.chars().count() < MIN_QUERY_LEN {
            return None;
        }
        let tokens = tokenize(&phrase);
        if tokens.is_empty() {
            return None;
        }
        Some(Self { phrase, tokens })
    }

    pub fn score(&self, content: &str) -> u32 {
        let phrase_hit = content.contains(&self.phrase);
        self.tokens
            .iter()
            .map(|token| {
                let mut points = u32::from(content.contains(token.as_str()));
                if phrase_hit {
                    points += PHRASE_BONUS;
                }
                points
            })
            .sum()
    }

    fn candidates<'a>(&self, index: &'a SearchIndex) -> Vec<&'a IndexEntry> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for token in &self.tokens {
            for entry in index.lookup(token) {
                if seen.insert(entry.id) {
                    found.push(entry);
                }
            }
        }
        found
    }
}

/// Runs `raw` against `index`, resolving links from `cards`.
///
/// `index` must have been built from `cards`; hits whose card is no longer in
/// the forest are dropped.
pub fn search(index: &SearchIndex, cards: &[Card], raw: &str, limit: usize) -> SearchOutcome {
    let trimmed = raw.trim();
    let Some(query) = Query::parse(trimmed) else {
        return SearchOutcome::empty(trimmed);
    };

    let mut ranked: Vec<(u32, &IndexEntry)> = query
        .candidates(index)
        .into_iter()
        .map(|entry| {
            let content = searchable_content(&entry.name, &entry.subtitle);
            (query.score(&content), entry)
        })
        .collect();
    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
    ranked.truncate(limit);

    let hits = ranked
        .into_iter()
        .filter_map(|(_, entry)| {
            tree::find(cards, entry.id).map(|card| SearchHit {
                id: entry.id,
                name: entry.name.clone(),
                subtitle: entry.subtitle.clone(),
                kind: entry.kind.clone(),
                path: entry.path.clone(),
                link: card.link.clone(),
            })
        })
        .collect();

    SearchOutcome::with_results(trimmed, hits)
}
