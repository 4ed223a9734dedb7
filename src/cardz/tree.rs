//! # Tree Navigation
//!
//! Stateless, recursive helpers over a sequence of root cards. Every traversal is
//! pre-order depth-first: a card is visited before its children, and children are
//! visited in insertion order. Since ids are unique across the whole forest, "the
//! first match" of a lookup is simply "the match".
//!
//! Nothing here touches storage or the search index; the command layer composes
//! these functions with a [`crate::store::TreeStore`].

use crate::model::{Card, CardId};
use std::collections::HashSet;

pub fn find(cards: &[Card], id: CardId) -> Option<&Card> {
    for card in cards {
        if card.id == id {
            return Some(card);
        }
        if let Some(found) = find(&card.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_mut(cards: &mut [Card], id: CardId) -> Option<&mut Card> {
    for card in cards.iter_mut() {
        if card.id == id {
            return Some(card);
        }
        if let Some(found) = find_mut(&mut card.children, id) {
            return Some(found);
        }
    }
    None
}

/// Every card in the forest, in pre-order.
pub fn flatten(cards: &[Card]) -> Vec<&Card> {
    let mut all = Vec::new();
    collect(cards, &mut all);
    all
}

fn collect<'a>(cards: &'a [Card], out: &mut Vec<&'a Card>) {
    for card in cards {
        out.push(card);
        collect(&card.children, out);
    }
}

/// Detaches the card with `id` from wherever it sits, returning it together
/// with its whole subtree.
pub fn detach(cards: &mut Vec<Card>, id: CardId) -> Option<Card> {
    for i in 0..cards.len() {
        if cards[i].id == id {
            return Some(cards.remove(i));
        }
        if let Some(removed) = detach(&mut cards[i].children, id) {
            return Some(removed);
        }
    }
    None
}

/// Cascading removal. Returns `false` when no card has that id.
pub fn remove(cards: &mut Vec<Card>, id: CardId) -> bool {
    detach(cards, id).is_some()
}

pub fn max_id(cards: &[Card]) -> Option<CardId> {
    flatten(cards).into_iter().map(|c| c.id).max()
}

pub fn count(cards: &[Card]) -> usize {
    flatten(cards).len()
}

/// Joins a parent path and a card name the way search results display them.
pub(crate) fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// The `/`-joined chain of names from a root down to (and including) `id`.
pub fn path_of(cards: &[Card], id: CardId) -> Option<String> {
    path_within(cards, id, "")
}

fn path_within(cards: &[Card], id: CardId, prefix: &str) -> Option<String> {
    for card in cards {
        let path = child_path(prefix, &card.name);
        if card.id == id {
            return Some(path);
        }
        if let Some(found) = path_within(&card.children, id, &path) {
            return Some(found);
        }
    }
    None
}

/// Ids that occur more than once, in the order their second occurrence is met.
pub fn duplicate_ids(cards: &[Card]) -> Vec<CardId> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for card in flatten(cards) {
        if !seen.insert(card.id) && !dupes.contains(&card.id) {
            dupes.push(card.id);
        }
    }
    dupes
}

/// Rewrites every `parent_id` to match the card's actual position.
/// Returns how many cards were corrected.
pub fn sync_parent_ids(cards: &mut [Card], parent: Option<CardId>) -> usize {
    let mut fixed = 0;
    for card in cards.iter_mut() {
        if card.parent_id != parent {
            card.parent_id = parent;
            fixed += 1;
        }
        fixed += sync_parent_ids(&mut card.children, Some(card.id));
    }
    fixed
}
