//! # Storage Layer
//!
//! The whole forest is one document. A [`TreeStore`] loads it and replaces it;
//! it owns no other logic.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single pretty-printed JSON file
//!   (`cards.json` by default) replaced atomically on every save.
//! - [`memory::InMemoryStore`]: Keeps the serialized document in memory, for
//!   tests.
//!
//! ## Missing vs Corrupt
//!
//! Loading never fails just because there is nothing usable to read. Instead the
//! caller gets the empty forest together with a [`LoadOrigin`] saying why:
//!
//! - `Missing`: nothing has been saved yet. This is the normal first run.
//! - `Corrupt`: a document exists but does not parse. Reads carry on with an
//!   empty forest; writes refuse (see [`Loaded::into_writable`]) so the
//!   unreadable file is never silently replaced.
//!
//! Real I/O failures (permissions, disk errors) are returned as errors.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "cards": [
//!     { "id": 1, "name": "Reports", "subtitle": "", "link": "", "type": "card",
//!       "parent_id": null, "children": [ ... ] }
//!   ]
//! }
//! ```

use crate::error::{CardzError, Result};
use crate::model::Forest;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    Existing,
    Missing,
    Corrupt(String),
}

/// A loaded forest and where it came from.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub forest: Forest,
    pub origin: LoadOrigin,
}

impl Loaded {
    pub fn existing(forest: Forest) -> Self {
        Self {
            forest,
            origin: LoadOrigin::Existing,
        }
    }

    pub fn missing() -> Self {
        Self {
            forest: Forest::default(),
            origin: LoadOrigin::Missing,
        }
    }

    pub fn corrupt(reason: impl Into<String>) -> Self {
        Self {
            forest: Forest::default(),
            origin: LoadOrigin::Corrupt(reason.into()),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self.origin, LoadOrigin::Corrupt(_))
    }

    /// The forest, provided it is safe to save a modified copy over the source.
    pub fn into_writable(self, location: &str) -> Result<Forest> {
        match self.origin {
            LoadOrigin::Corrupt(reason) => Err(CardzError::CorruptStore {
                location: location.to_string(),
                reason,
            }),
            _ => Ok(self.forest),
        }
    }
}

/// Abstract interface for forest storage.
pub trait TreeStore {
    /// Read the whole forest.
    fn load(&self) -> Result<Loaded>;

    /// Replace the whole forest.
    fn save(&mut self, forest: &Forest) -> Result<()>;

    /// Where the document lives, for messages.
    fn location(&self) -> String;
}

pub(crate) fn parse_document(text: &str) -> Loaded {
    match serde_json::from_str::<Forest>(text) {
        Ok(forest) => Loaded::existing(forest),
        Err(e) => Loaded::corrupt(e.to_string()),
    }
}

pub(crate) fn render_document(forest: &Forest, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(forest)
    } else {
        serde_json::to_string(forest)
    };
    text.map_err(CardzError::Serialization)
}
